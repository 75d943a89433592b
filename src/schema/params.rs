/// Parameter schemas for the generated actions

use crate::model::{EntityModel, ParamSchema, Rule};

/// Optional `query` filter whose props are the model's query variant
fn query_filter(model: &EntityModel) -> Rule {
    Rule::object(model.query_variant().to_props()).optional()
}

/// Strict object matching the entity model
fn strict_entity(model: &EntityModel) -> Rule {
    Rule::object(model.to_props()).strict()
}

pub fn count_params(model: &EntityModel) -> ParamSchema {
    let mut params = ParamSchema::new();
    params.insert("search".to_string(), Rule::string().optional());
    params.insert("searchFields".to_string(), Rule::string().optional());
    params.insert("query".to_string(), query_filter(model));
    params
}

pub fn find_params(model: &EntityModel) -> ParamSchema {
    let mut params = ParamSchema::new();
    params.insert("limit".to_string(), Rule::number());
    params.insert("offset".to_string(), Rule::number().optional());
    params.insert("sort".to_string(), Rule::string().optional());
    params.insert("search".to_string(), Rule::string().optional());
    params.insert("searchFields".to_string(), Rule::string().optional());
    params.insert("query".to_string(), query_filter(model));
    params
}

/// `{ <key>: strict entity object }`
pub fn create_params(key: &str, model: &EntityModel) -> ParamSchema {
    let mut params = ParamSchema::new();
    params.insert(key.to_string(), strict_entity(model));
    params
}

/// `{ <key>: non-empty array of strict entity objects }`
pub fn insert_params(key: &str, model: &EntityModel) -> ParamSchema {
    let mut params = ParamSchema::new();
    params.insert(key.to_string(), Rule::array(strict_entity(model)).min(1.0));
    params
}
