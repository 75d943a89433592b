pub mod config;
pub mod error;
pub mod model;
pub mod schema;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, ServiceConfig};
pub use error::{CrudinatorError, Result};
pub use model::{EntityModel, FieldDefinition, Rule, RuleType};
pub use schema::{generate_service, FilterStyle, GeneratorOptions, GetCardinality, ServiceGenerator};
pub use service::{ActionName, CrudContext, ServiceDescriptor};
