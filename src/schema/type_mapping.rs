/// Rule to GraphQL type mapping
///
/// This module handles conversion of validation rules to GraphQL type
/// references for the rendered SDL.

use crate::model::{Rule, RuleType};

/// Scalar used for values without a fixed GraphQL shape
pub const JSON_SCALAR: &str = "JSON";

/// Map a rule to a GraphQL type reference
///
/// # Type Mapping Rules
///
/// - `string`, `email`, `uuid`, `date`, `enum` → `String`
/// - `number` → `Float` (or `Int` when `integer` is set)
/// - `boolean` → `Boolean`
/// - `array` → list of the item type (`JSON` items when unspecified)
/// - `object`, `any` → `JSON` custom scalar
///
/// `required` appends the non-null marker at the outer level.
pub fn rule_to_graphql_type(rule: &Rule, required: bool) -> String {
    let base = match rule.kind {
        RuleType::String | RuleType::Email | RuleType::Uuid | RuleType::Date | RuleType::Enum => {
            "String".to_string()
        }
        RuleType::Number if rule.integer => "Int".to_string(),
        RuleType::Number => "Float".to_string(),
        RuleType::Boolean => "Boolean".to_string(),
        RuleType::Array => match &rule.items {
            Some(items) => format!("[{}]", rule_to_graphql_type(items, !items.optional)),
            None => format!("[{}]", JSON_SCALAR),
        },
        RuleType::Object | RuleType::Any => JSON_SCALAR.to_string(),
    };

    if required {
        format!("{}!", base)
    } else {
        base
    }
}

/// Whether the mapped type of `rule` refers to the `JSON` scalar
pub fn needs_json_scalar(rule: &Rule) -> bool {
    match rule.kind {
        RuleType::Object | RuleType::Any => true,
        RuleType::Array => rule.items.as_deref().map_or(true, needs_json_scalar),
        _ => false,
    }
}
