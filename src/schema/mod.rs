/// CRUD service generation from entity models
///
/// This module derives parameter schemas, GraphQL signatures and handlers for
/// the count/find/get/create/insert/update/remove actions, and renders the
/// GraphQL SDL those signatures rely on.

mod builder;
mod naming;
mod params;
mod sdl;
mod signature;
mod type_mapping;

pub use builder::{build_services, generate_service, ServiceGenerator};
pub use naming::{is_graphql_name, TypeNames};
pub use sdl::{render_sdl, render_service_sdl};
pub use signature::{parse_signature, FilterStyle, GeneratorOptions, GetCardinality, SignatureInfo};
pub use type_mapping::{rule_to_graphql_type, JSON_SCALAR};
