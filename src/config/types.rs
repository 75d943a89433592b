use crate::model::{EntityModel, Rule, RuleType};
use crate::schema::{
    is_graphql_name, FilterStyle, GeneratorOptions, GetCardinality, TypeNames, JSON_SCALAR,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Type names a service may not take: the root operation types and the
/// scalar the rendered SDL declares.
const RESERVED_TYPE_NAMES: [&str; 4] = ["Query", "Mutation", "Subscription", JSON_SCALAR];

/// Top-level configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorOptions,
    pub service: Vec<ServiceConfig>,
}

impl Config {
    /// Validate every service, then check that services do not collide with
    /// each other: model names must be unique, and no two services may
    /// produce the same GraphQL type or input name.
    pub fn validate(&self) -> Result<(), String> {
        let mut models: HashMap<&str, usize> = HashMap::new();
        let mut type_owners: HashMap<String, &str> = HashMap::new();

        for (index, service) in self.service.iter().enumerate() {
            service
                .validate()
                .map_err(|e| format!("Service '{}': {}", service.model, e))?;

            if let Some(first) = models.insert(service.model.as_str(), index) {
                return Err(format!(
                    "Model '{}' is declared more than once (services #{} and #{})",
                    service.model,
                    first + 1,
                    index + 1
                ));
            }

            for name in service.graphql_type_names() {
                if let Some(owner) = type_owners.get(&name) {
                    return Err(format!(
                        "GraphQL type '{}' of service '{}' clashes with service '{}'",
                        name, service.model, owner
                    ));
                }
                type_owners.insert(name, service.model.as_str());
            }
        }

        Ok(())
    }
}

/// One entity exposed as a CRUD service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name registered with the host framework (e.g. "users")
    pub model: String,

    /// Human-facing type name; GraphQL names are derived from it
    pub type_name: String,

    /// Optional description, carried into generated configs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Overrides `[generator] filter_style` for this service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_style: Option<FilterStyle>,

    /// Overrides `[generator] get_cardinality` for this service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_cardinality: Option<GetCardinality>,

    #[serde(default)]
    pub fields: EntityModel,
}

impl ServiceConfig {
    /// Generator options with this service's overrides applied
    pub fn effective_options(&self, defaults: GeneratorOptions) -> GeneratorOptions {
        GeneratorOptions {
            filter_style: self.filter_style.unwrap_or(defaults.filter_style),
            get_cardinality: self.get_cardinality.unwrap_or(defaults.get_cardinality),
        }
    }

    /// Every GraphQL type name this service contributes to a rendered SDL
    pub fn graphql_type_names(&self) -> Vec<String> {
        let names = TypeNames::new(&self.type_name);
        let inputs = [names.input(), names.update_input(), names.query_input()];
        std::iter::once(names.type_name).chain(inputs).collect()
    }

    /// Validate service configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("Model name must not be empty".to_string());
        }

        let names = TypeNames::new(&self.type_name);
        if !is_graphql_name(&names.type_name) {
            return Err(format!(
                "Type name '{}' does not produce a valid GraphQL name (got '{}')",
                self.type_name, names.type_name
            ));
        }

        if RESERVED_TYPE_NAMES.contains(&names.type_name.as_str()) {
            return Err(format!(
                "Type name '{}' maps to the reserved GraphQL type '{}'",
                self.type_name, names.type_name
            ));
        }

        if self.fields.is_empty() {
            tracing::warn!("Service '{}' declares no fields", self.model);
        }

        for (name, rule) in self.fields.iter() {
            if !is_graphql_name(name) {
                return Err(format!("Field '{}' is not a valid GraphQL name", name));
            }
            validate_rule(name, rule)?;
        }

        Ok(())
    }
}

fn validate_rule(path: &str, rule: &Rule) -> Result<(), String> {
    if rule.kind == RuleType::Enum && rule.values.as_ref().map_or(true, |v| v.is_empty()) {
        return Err(format!("Enum field '{}' must list its values", path));
    }

    if let (Some(min), Some(max)) = (rule.min, rule.max) {
        if min > max {
            return Err(format!("Field '{}' has min {} greater than max {}", path, min, max));
        }
    }

    if let Some(props) = &rule.props {
        for (name, nested) in props {
            validate_rule(&format!("{}.{}", path, name), nested)?;
        }
    }

    if let Some(items) = &rule.items {
        validate_rule(&format!("{}[]", path), items)?;
    }

    Ok(())
}
