/// GraphQL SDL rendering
///
/// The generated signatures reference `<Type>`, `<Type>Input`,
/// `Update<Type>Input` and (for wrapped filters) `Query<Type>Input`. This
/// module renders those types plus `Query`/`Mutation` extensions holding the
/// signatures, so a gateway can stitch the whole service in one document.

use crate::config::Config;
use crate::error::{CrudinatorError, Result};
use crate::model::EntityModel;
use crate::schema::builder::ServiceGenerator;
use crate::schema::naming::TypeNames;
use crate::schema::signature::FilterStyle;
use crate::schema::type_mapping::{needs_json_scalar, rule_to_graphql_type, JSON_SCALAR};
use crate::service::ServiceDescriptor;

use async_graphql::parser::parse_schema;
use std::fmt::Write;

const ID_FIELD: &str = "id";

/// Render the SDL for one generated service
pub fn render_service_sdl(
    descriptor: &ServiceDescriptor,
    type_name: &str,
    fields: &EntityModel,
    filter_style: FilterStyle,
) -> String {
    let names = TypeNames::new(type_name);
    let mut out = String::new();

    // Output type
    let _ = writeln!(out, "type {} {{", names.type_name);
    if fields.get(ID_FIELD).is_none() {
        let _ = writeln!(out, "  {}: String!", ID_FIELD);
    }
    for (name, rule) in fields.iter() {
        let _ = writeln!(out, "  {}: {}", name, rule_to_graphql_type(rule, !rule.optional));
    }
    out.push_str("}\n\n");

    // Create / insert input keeps the declared flags
    let _ = writeln!(out, "input {} {{", names.input());
    for (name, rule) in fields.iter() {
        let _ = writeln!(out, "  {}: {}", name, rule_to_graphql_type(rule, !rule.optional));
    }
    out.push_str("}\n\n");

    let _ = writeln!(out, "input {} {{", names.update_input());
    let _ = writeln!(out, "  {}: String!", ID_FIELD);
    for (name, rule) in fields.iter().filter(|(name, _)| name.as_str() != ID_FIELD) {
        let _ = writeln!(out, "  {}: {}", name, rule_to_graphql_type(rule, false));
    }
    out.push_str("}\n\n");

    if filter_style == FilterStyle::Wrapped {
        let _ = writeln!(out, "input {} {{", names.query_input());
        for (name, rule) in fields.query_variant().iter() {
            let _ = writeln!(out, "  {}: {}", name, rule_to_graphql_type(rule, false));
        }
        out.push_str("}\n\n");
    }

    let (mutations, queries): (Vec<_>, Vec<_>) = descriptor
        .actions
        .values()
        .map(|action| &action.graphql)
        .partition(|sig| sig.is_mutation());

    out.push_str("extend type Query {\n");
    for sig in queries {
        let _ = writeln!(out, "  {}", sig.as_str());
    }
    out.push_str("}\n\n");

    out.push_str("extend type Mutation {\n");
    for sig in mutations {
        let _ = writeln!(out, "  {}", sig.as_str());
    }
    out.push_str("}\n");

    out
}

/// Render and check the SDL document for every configured service
pub fn render_sdl(config: &Config) -> Result<String> {
    if config.service.is_empty() {
        return Err(CrudinatorError::SchemaGeneration(
            "No services provided".to_string(),
        ));
    }

    // Per-service rules plus cross-service name clashes, which the parser
    // below cannot see
    config.validate().map_err(CrudinatorError::Config)?;

    let generator = ServiceGenerator::new(config.generator);
    let mut sections = Vec::with_capacity(config.service.len());
    let mut uses_json = false;

    for service in &config.service {
        if service.fields.is_empty() {
            return Err(CrudinatorError::SchemaGeneration(format!(
                "Service '{}' has no fields; its input types would be empty",
                service.model
            )));
        }

        uses_json |= service.fields.iter().any(|(_, rule)| needs_json_scalar(rule));

        let options = service.effective_options(config.generator);
        let descriptor = generator.generate_from_config(service);
        sections.push(render_service_sdl(
            &descriptor,
            &service.type_name,
            &service.fields,
            options.filter_style,
        ));
    }

    let mut document = String::new();
    if uses_json {
        let _ = writeln!(document, "scalar {}\n", JSON_SCALAR);
    }
    document.push_str(&sections.join("\n"));

    parse_schema(&document).map_err(|e| {
        CrudinatorError::SchemaGeneration(format!("Rendered SDL does not parse: {}", e))
    })?;

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Rule, RuleType};
    use crate::schema::generate_service;

    fn model() -> EntityModel {
        EntityModel::new()
            .field("name", Rule::string())
            .field("age", Rule::number().integer().optional())
    }

    #[test]
    fn test_render_service_sdl_types() {
        let descriptor = generate_service("users", "user", &model());
        let sdl = render_service_sdl(&descriptor, "user", &model(), FilterStyle::Wrapped);

        assert!(sdl.contains("type User {\n  id: String!\n  name: String!\n  age: Int\n}"));
        assert!(sdl.contains("input UserInput {\n  name: String!\n  age: Int\n}"));
        assert!(sdl.contains("input UpdateUserInput {\n  id: String!\n  name: String\n  age: Int\n}"));
        assert!(sdl.contains("input QueryUserInput {\n  name: String\n  age: Int\n}"));
    }

    #[test]
    fn test_render_service_sdl_places_signatures() {
        let descriptor = generate_service("users", "user", &model());
        let sdl = render_service_sdl(&descriptor, "user", &model(), FilterStyle::Wrapped);

        let query_block = sdl.split("extend type Query").nth(1).unwrap();
        let (queries, mutations) = query_block.split_once("extend type Mutation").unwrap();

        assert!(queries.contains("countUsers("));
        assert!(queries.contains("user(id: String!): User"));
        assert!(mutations.contains("newUsers(user: [UserInput]): [User]"));
        assert!(mutations.contains("deleteUser(id: String!): User"));
        assert!(!mutations.contains("countUsers("));
    }

    #[test]
    fn test_flat_style_skips_query_input() {
        let descriptor = generate_service("users", "user", &model());
        let sdl = render_service_sdl(&descriptor, "user", &model(), FilterStyle::Flat);
        assert!(!sdl.contains("QueryUserInput {"));
    }

    #[test]
    fn test_declared_id_is_not_duplicated() {
        let fields = EntityModel::new()
            .field("id", Rule::new(RuleType::Uuid))
            .field("name", Rule::string());
        let descriptor = generate_service("users", "user", &fields);
        let sdl = render_service_sdl(&descriptor, "user", &fields, FilterStyle::Wrapped);

        assert_eq!(sdl.matches("  id: String!").count(), 3);
        assert!(parse_schema(&sdl).is_ok());
    }

    #[test]
    fn test_rendered_sdl_parses() {
        let descriptor = generate_service("users", "user", &model());
        let sdl = render_service_sdl(&descriptor, "user", &model(), FilterStyle::Wrapped);
        assert!(parse_schema(&sdl).is_ok());
    }
}
