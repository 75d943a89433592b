use crudinator::config::Config;
use crudinator::error::{CrudinatorError, Result};
use crudinator::schema::build_services;

/// Serialize the descriptors of `config` as pretty JSON
///
/// With `service` set, only that service's descriptor is rendered (as an
/// object); otherwise every descriptor is rendered as an array.
pub fn render_descriptors(config: &Config, service: Option<&str>) -> Result<String> {
    let descriptors = build_services(config)?;

    let json = match service {
        Some(name) => {
            let descriptor = descriptors
                .iter()
                .find(|d| d.name == name)
                .ok_or_else(|| CrudinatorError::Config(format!("No service named '{}'", name)))?;
            serde_json::to_string_pretty(descriptor)?
        }
        None => serde_json::to_string_pretty(&descriptors)?,
    };

    tracing::info!("✅ Generated {} service descriptor(s)", descriptors.len());

    Ok(json)
}

/// Run the generate command: print service descriptors as JSON
pub fn run(config_path: String, service: Option<String>, output: Option<String>) -> Result<()> {
    tracing::info!("📖 Loading configuration from {}", config_path);

    let config = crudinator::config::load_config(&config_path)?;
    let json = render_descriptors(&config, service.as_deref())?;

    crate::cli::emit(&json, output.as_deref())
}
