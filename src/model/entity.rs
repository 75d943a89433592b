use super::rule::{FieldDefinition, ParamSchema};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Caller-supplied entity description: field name to field definition
///
/// Fields keep their declaration order so generated output is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityModel {
    fields: IndexMap<String, FieldDefinition>,
}

impl EntityModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing any previous definition with the same name
    pub fn field(mut self, name: impl Into<String>, definition: FieldDefinition) -> Self {
        self.fields.insert(name.into(), definition);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldDefinition)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Copy of the model with every top-level field marked optional, used for
    /// query filters. `self` is left as is.
    pub fn query_variant(&self) -> EntityModel {
        let fields = self
            .fields
            .iter()
            .map(|(name, definition)| {
                let mut definition = definition.clone();
                definition.optional = true;
                (name.clone(), definition)
            })
            .collect();

        EntityModel { fields }
    }

    /// Fields as object props for a parameter rule
    pub fn to_props(&self) -> ParamSchema {
        self.fields.clone()
    }
}

impl From<IndexMap<String, FieldDefinition>> for EntityModel {
    fn from(fields: IndexMap<String, FieldDefinition>) -> Self {
        Self { fields }
    }
}

impl FromIterator<(String, FieldDefinition)> for EntityModel {
    fn from_iter<I: IntoIterator<Item = (String, FieldDefinition)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rule;

    fn user_model() -> EntityModel {
        EntityModel::new()
            .field("name", Rule::string().min(2.0))
            .field("email", Rule::new(crate::model::RuleType::Email).optional())
            .field("age", Rule::number().integer())
    }

    #[test]
    fn test_query_variant_marks_every_field_optional() {
        let model = user_model();
        let query = model.query_variant();

        assert_eq!(query.len(), 3);
        assert!(query.iter().all(|(_, rule)| rule.optional));
    }

    #[test]
    fn test_query_variant_leaves_original_untouched() {
        let model = user_model();
        let before = model.clone();
        let _ = model.query_variant();

        assert_eq!(model, before);
        assert!(!model.get("name").unwrap().optional);
        assert!(model.get("email").unwrap().optional);
    }

    #[test]
    fn test_query_variant_keeps_other_constraints() {
        let query = user_model().query_variant();
        let name = query.get("name").unwrap();

        assert_eq!(name.min, Some(2.0));
        assert!(query.get("age").unwrap().integer);
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let model = user_model();
        let names: Vec<&str> = model.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["name", "email", "age"]);
    }
}
