use crudinator::config::ServiceConfig;
use crudinator::model::{EntityModel, Rule, RuleType};
use serde_json::json;

/// Create the example services: a user directory with a few typical field kinds
pub fn create_example_services() -> Vec<ServiceConfig> {
    vec![users_service(), posts_service()]
}

fn users_service() -> ServiceConfig {
    let fields = EntityModel::new()
        .field("name", Rule::string().min(2.0).max(100.0))
        .field("email", Rule::new(RuleType::Email))
        .field("age", Rule::number().integer().min(0.0).optional())
        .field(
            "role",
            Rule::new(RuleType::Enum).values(vec![json!("admin"), json!("member")]),
        )
        .field("active", Rule::new(RuleType::Boolean).optional());

    ServiceConfig {
        model: "users".to_string(),
        type_name: "user".to_string(),
        description: Some("Registered users".to_string()),
        filter_style: None,
        get_cardinality: None,
        fields,
    }
}

fn posts_service() -> ServiceConfig {
    let fields = EntityModel::new()
        .field("title", Rule::string().min(1.0))
        .field("body", Rule::string().optional())
        .field("author_id", Rule::new(RuleType::Uuid))
        .field("tags", Rule::array(Rule::string()).optional())
        .field("published_at", Rule::new(RuleType::Date).optional());

    ServiceConfig {
        model: "posts".to_string(),
        type_name: "blog_post".to_string(),
        description: Some("Blog posts written by users".to_string()),
        filter_style: None,
        get_cardinality: None,
        fields,
    }
}
