/// Entity models and the validation rules they are made of

mod entity;
mod rule;

pub use entity::EntityModel;
pub use rule::{FieldDefinition, ParamSchema, Rule, RuleType};
