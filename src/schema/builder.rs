/// Service descriptor generation
///
/// This module provides the `ServiceGenerator`, which turns one entity model
/// into a complete CRUD `ServiceDescriptor`, and `build_services` for every
/// service listed in a configuration.

use crate::config::{Config, ServiceConfig};
use crate::error::{CrudinatorError, Result};
use crate::model::EntityModel;
use crate::schema::naming::TypeNames;
use crate::schema::params::{count_params, create_params, find_params, insert_params};
use crate::schema::signature::{GeneratorOptions, Signatures};
use crate::service::{ActionDescriptor, ActionHandler, ActionName, GraphqlSignature, ServiceDescriptor};

use indexmap::IndexMap;

/// Generator for CRUD service descriptors
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceGenerator {
    options: GeneratorOptions,
}

impl ServiceGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> GeneratorOptions {
        self.options
    }

    /// Generate the descriptor for one entity
    ///
    /// # Arguments
    ///
    /// * `model_name` - Service name registered with the host framework
    /// * `type_name` - Human-facing entity name; GraphQL names derive from it
    /// * `fields` - The entity model
    pub fn generate(&self, model_name: &str, type_name: &str, fields: &EntityModel) -> ServiceDescriptor {
        let names = TypeNames::new(type_name);
        let sigs = Signatures::new(&names, self.options);
        let key = names.field.clone();

        tracing::debug!(
            "Generating service '{}' for type {} ({} fields, {:?} filters)",
            model_name,
            names.type_name,
            fields.len(),
            self.options.filter_style
        );

        let mut actions = IndexMap::new();

        actions.insert(
            ActionName::Count,
            ActionDescriptor {
                params: Some(count_params(fields)),
                graphql: GraphqlSignature::Query(sigs.count()),
                handler: None,
            },
        );
        actions.insert(
            ActionName::Find,
            ActionDescriptor {
                params: Some(find_params(fields)),
                graphql: GraphqlSignature::Query(sigs.find()),
                handler: None,
            },
        );
        actions.insert(
            ActionName::Get,
            ActionDescriptor {
                params: None,
                graphql: GraphqlSignature::Query(sigs.get()),
                handler: None,
            },
        );
        actions.insert(
            ActionName::Create,
            ActionDescriptor {
                params: Some(create_params(&key, fields)),
                graphql: GraphqlSignature::Mutation(sigs.create()),
                handler: Some(ActionHandler::Create { key: key.clone() }),
            },
        );
        actions.insert(
            ActionName::Insert,
            ActionDescriptor {
                params: Some(insert_params(&key, fields)),
                graphql: GraphqlSignature::Mutation(sigs.insert()),
                handler: Some(ActionHandler::Insert { key: key.clone() }),
            },
        );
        actions.insert(
            ActionName::Update,
            ActionDescriptor {
                params: None,
                graphql: GraphqlSignature::Mutation(sigs.update()),
                handler: Some(ActionHandler::Update { key }),
            },
        );
        // No handler: removal falls through to the host framework's default
        actions.insert(
            ActionName::Remove,
            ActionDescriptor {
                params: None,
                graphql: GraphqlSignature::Mutation(sigs.remove()),
                handler: None,
            },
        );

        ServiceDescriptor {
            name: model_name.to_string(),
            actions,
        }
    }

    /// Generate the descriptor for a configured service, applying its overrides
    pub fn generate_from_config(&self, service: &ServiceConfig) -> ServiceDescriptor {
        let generator = ServiceGenerator::new(service.effective_options(self.options));
        generator.generate(&service.model, &service.type_name, &service.fields)
    }
}

/// Generate a descriptor with the default (wrapped filter) options
pub fn generate_service(model_name: &str, type_name: &str, fields: &EntityModel) -> ServiceDescriptor {
    ServiceGenerator::default().generate(model_name, type_name, fields)
}

/// Validate the configuration and generate every service in it
pub fn build_services(config: &Config) -> Result<Vec<ServiceDescriptor>> {
    if config.service.is_empty() {
        return Err(CrudinatorError::SchemaGeneration(
            "No services provided".to_string(),
        ));
    }

    config.validate().map_err(CrudinatorError::Config)?;

    let generator = ServiceGenerator::new(config.generator);

    Ok(config
        .service
        .iter()
        .map(|service| generator.generate_from_config(service))
        .collect())
}
