use crudinator::config::Config;
use crudinator::error::{CrudinatorError, Result};
use crudinator::schema::ServiceGenerator;
use crudinator::service::ActionName;
use crudinator::validation::validate_params;

/// Result of a successful parameter check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The payload satisfies the action's parameter schema
    Valid,
    /// The action declares no parameter schema, so any payload is accepted
    NoValidation,
}

/// Validate a JSON payload against one action of a configured service
///
/// A payload that fails validation comes back as
/// [`CrudinatorError::Validation`] carrying every issue found.
pub fn check_params(config: &Config, service: &str, action: &str, params: &str) -> Result<CheckOutcome> {
    let service_config = config
        .service
        .iter()
        .find(|s| s.model == service)
        .ok_or_else(|| CrudinatorError::Config(format!("No service named '{}'", service)))?;

    let action_name: ActionName = action.parse()?;
    let descriptor = ServiceGenerator::new(config.generator).generate_from_config(service_config);
    let params: serde_json::Value = serde_json::from_str(params)?;

    match descriptor.action(action_name).and_then(|a| a.params.as_ref()) {
        Some(schema) => {
            validate_params(schema, &params)?;
            Ok(CheckOutcome::Valid)
        }
        None => Ok(CheckOutcome::NoValidation),
    }
}

/// Run the check command: validate a parameter payload against one action
pub fn run(config_path: String, service: String, action: String, params: String) -> Result<()> {
    let config = crudinator::config::load_config(&config_path)?;

    match check_params(&config, &service, &action, &params) {
        Ok(CheckOutcome::Valid) => tracing::info!("✅ Parameters are valid for {}.{}", service, action),
        Ok(CheckOutcome::NoValidation) => tracing::info!(
            "ℹ️  {}.{} declares no parameter validation; the host framework accepts any payload",
            service,
            action
        ),
        Err(CrudinatorError::Validation(err)) => {
            for issue in &err.issues {
                tracing::error!("❌ {}", issue);
            }
            return Err(err.into());
        }
        Err(err) => return Err(err),
    }

    Ok(())
}
