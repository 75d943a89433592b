/// In-process parameter validation
///
/// Checks a JSON payload against a `ParamSchema` the same way the host
/// framework's validator would, collecting every issue rather than stopping at
/// the first one.

use crate::model::{ParamSchema, Rule, RuleType};
use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Value};
use std::fmt;

/// What went wrong with a single field
#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    Required,
    Type { expected: RuleType },
    Min { limit: f64 },
    Max { limit: f64 },
    Integer,
    UnknownField,
    Enum,
    Format { expected: RuleType },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// Dotted path to the offending value, e.g. `user.address.zip` or `user[2].name`
    pub field: String,
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = if self.field.is_empty() { "<root>" } else { &self.field };
        match &self.kind {
            IssueKind::Required => write!(f, "'{}' is required", field),
            IssueKind::Type { expected } => write!(f, "'{}' must be of type {}", field, expected),
            IssueKind::Min { limit } => write!(f, "'{}' is below the minimum of {}", field, limit),
            IssueKind::Max { limit } => write!(f, "'{}' exceeds the maximum of {}", field, limit),
            IssueKind::Integer => write!(f, "'{}' must be an integer", field),
            IssueKind::UnknownField => write!(f, "'{}' is not allowed", field),
            IssueKind::Enum => write!(f, "'{}' is not one of the allowed values", field),
            IssueKind::Format { expected } => write!(f, "'{}' is not a valid {}", field, expected),
        }
    }
}

/// Every issue found in one payload
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    /// Whether any issue was reported for `field`
    pub fn has_issue(&self, field: &str, kind: &IssueKind) -> bool {
        self.issues.iter().any(|i| i.field == field && &i.kind == kind)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.issues.iter().map(|i| i.to_string()).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Validate an action's parameter bag
pub fn validate_params(schema: &ParamSchema, params: &Value) -> Result<(), ValidationError> {
    let mut issues = Vec::new();

    match params {
        Value::Object(map) => check_props(schema, map, false, "", &mut issues),
        _ => issues.push(ValidationIssue {
            field: String::new(),
            kind: IssueKind::Type { expected: RuleType::Object },
        }),
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { issues })
    }
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn check_props(
    props: &ParamSchema,
    map: &Map<String, Value>,
    strict: bool,
    path: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    for (name, rule) in props {
        check_value(rule, map.get(name), &join_path(path, name), issues);
    }

    if strict {
        for key in map.keys().filter(|k| !props.contains_key(k.as_str())) {
            issues.push(ValidationIssue {
                field: join_path(path, key),
                kind: IssueKind::UnknownField,
            });
        }
    }
}

fn check_value(rule: &Rule, value: Option<&Value>, path: &str, issues: &mut Vec<ValidationIssue>) {
    let value = match value {
        None | Some(Value::Null) => {
            if !rule.optional {
                issues.push(ValidationIssue {
                    field: path.to_string(),
                    kind: IssueKind::Required,
                });
            }
            return;
        }
        Some(value) => value,
    };

    let mut push = |kind: IssueKind| {
        issues.push(ValidationIssue {
            field: path.to_string(),
            kind,
        })
    };
    let wrong_type = IssueKind::Type { expected: rule.kind };

    match rule.kind {
        RuleType::Any => {}

        RuleType::String => match value.as_str() {
            Some(s) => check_bounds(rule, s.chars().count() as f64, &mut push),
            None => push(wrong_type),
        },

        RuleType::Number => match value.as_f64() {
            Some(n) => {
                if rule.integer && n.fract() != 0.0 {
                    push(IssueKind::Integer);
                }
                check_bounds(rule, n, &mut push);
            }
            None => push(wrong_type),
        },

        RuleType::Boolean => {
            if !value.is_boolean() {
                push(wrong_type);
            }
        }

        RuleType::Email => match value.as_str() {
            Some(s) if is_email(s) => {}
            Some(_) => push(IssueKind::Format { expected: RuleType::Email }),
            None => push(wrong_type),
        },

        RuleType::Uuid => match value.as_str() {
            Some(s) if is_uuid(s) => {}
            Some(_) => push(IssueKind::Format { expected: RuleType::Uuid }),
            None => push(wrong_type),
        },

        RuleType::Date => match value.as_str() {
            Some(s) if is_date(s) => {}
            Some(_) => push(IssueKind::Format { expected: RuleType::Date }),
            None => push(wrong_type),
        },

        RuleType::Enum => {
            let allowed = rule.values.as_deref().unwrap_or_default();
            if !allowed.contains(value) {
                push(IssueKind::Enum);
            }
        }

        RuleType::Object => match value.as_object() {
            Some(map) => {
                if let Some(props) = &rule.props {
                    check_props(props, map, rule.strict, path, issues);
                }
            }
            None => push(wrong_type),
        },

        RuleType::Array => match value.as_array() {
            Some(items) => {
                check_bounds(rule, items.len() as f64, &mut push);
                if let Some(item_rule) = &rule.items {
                    for (index, item) in items.iter().enumerate() {
                        let item_path = format!("{}[{}]", path, index);
                        check_value(item_rule, Some(item), &item_path, issues);
                    }
                }
            }
            None => push(wrong_type),
        },
    }
}

fn check_bounds(rule: &Rule, measure: f64, push: &mut impl FnMut(IssueKind)) {
    if let Some(limit) = rule.min {
        if measure < limit {
            push(IssueKind::Min { limit });
        }
    }
    if let Some(limit) = rule.max {
        if measure > limit {
            push(IssueKind::Max { limit });
        }
    }
}

fn is_email(s: &str) -> bool {
    let mut parts = s.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    // At least two labels, none of them empty
    let labels: Vec<&str> = domain.split('.').collect();

    !local.is_empty()
        && labels.len() >= 2
        && labels.iter().all(|label| !label.is_empty())
        && !s.chars().any(char::is_whitespace)
}

fn is_uuid(s: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

    let parts: Vec<&str> = s.split('-').collect();
    parts.len() == GROUPS.len()
        && parts
            .iter()
            .zip(GROUPS)
            .all(|(part, len)| part.len() == len && part.chars().all(|c| c.is_ascii_hexdigit()))
}

fn is_date(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok() || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;
    use serde_json::json;

    fn schema() -> ParamSchema {
        indexmap! {
            "name".to_string() => Rule::string().min(2.0).max(10.0),
            "age".to_string() => Rule::number().integer().optional(),
            "tags".to_string() => Rule::array(Rule::string()).optional(),
        }
    }

    #[test]
    fn test_valid_params_pass() {
        let params = json!({ "name": "Ada", "age": 36, "tags": ["math"] });
        assert!(validate_params(&schema(), &params).is_ok());
    }

    #[test]
    fn test_missing_required_field() {
        let err = validate_params(&schema(), &json!({})).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert!(err.has_issue("name", &IssueKind::Required));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let err = validate_params(&schema(), &json!({ "name": null })).unwrap_err();
        assert!(err.has_issue("name", &IssueKind::Required));
        assert!(validate_params(&schema(), &json!({ "name": "Ada", "age": null })).is_ok());
    }

    #[test]
    fn test_all_issues_are_collected() {
        let params = json!({ "name": "A", "age": 1.5, "tags": [1] });
        let err = validate_params(&schema(), &params).unwrap_err();

        assert!(err.has_issue("name", &IssueKind::Min { limit: 2.0 }));
        assert!(err.has_issue("age", &IssueKind::Integer));
        assert!(err.has_issue("tags[0]", &IssueKind::Type { expected: RuleType::String }));
        assert_eq!(err.issues.len(), 3);
    }

    #[test]
    fn test_root_must_be_object() {
        let err = validate_params(&schema(), &json!([1, 2])).unwrap_err();
        assert_eq!(err.issues[0].field, "");
        assert!(err.to_string().contains("<root>"));
    }

    #[test]
    fn test_root_is_not_strict() {
        let params = json!({ "name": "Ada", "extra": true });
        assert!(validate_params(&schema(), &params).is_ok());
    }

    #[test]
    fn test_strict_object_rejects_unknown_keys() {
        let schema = indexmap! {
            "user".to_string() => Rule::object(indexmap! {
                "name".to_string() => Rule::string(),
            }).strict(),
        };

        let err = validate_params(&schema, &json!({ "user": { "name": "Ada", "admin": true } }))
            .unwrap_err();
        assert!(err.has_issue("user.admin", &IssueKind::UnknownField));
    }

    #[test]
    fn test_loose_object_accepts_unknown_keys() {
        let schema = indexmap! {
            "user".to_string() => Rule::object(indexmap! {
                "name".to_string() => Rule::string(),
            }),
        };

        assert!(validate_params(&schema, &json!({ "user": { "name": "Ada", "admin": true } })).is_ok());
    }

    #[test]
    fn test_array_length_bounds() {
        let schema = indexmap! {
            "ids".to_string() => Rule::array(Rule::number()).min(1.0).max(2.0),
        };

        let err = validate_params(&schema, &json!({ "ids": [] })).unwrap_err();
        assert!(err.has_issue("ids", &IssueKind::Min { limit: 1.0 }));

        let err = validate_params(&schema, &json!({ "ids": [1, 2, 3] })).unwrap_err();
        assert!(err.has_issue("ids", &IssueKind::Max { limit: 2.0 }));
    }

    #[test]
    fn test_format_rules() {
        let schema = indexmap! {
            "email".to_string() => Rule::new(RuleType::Email),
            "id".to_string() => Rule::new(RuleType::Uuid),
            "born".to_string() => Rule::new(RuleType::Date),
        };

        let good = json!({
            "email": "ada@example.com",
            "id": "123e4567-e89b-12d3-a456-426614174000",
            "born": "1815-12-10"
        });
        assert!(validate_params(&schema, &good).is_ok());

        let bad = json!({ "email": "ada@@example", "id": "123", "born": "yesterday" });
        let err = validate_params(&schema, &bad).unwrap_err();
        assert!(err.has_issue("email", &IssueKind::Format { expected: RuleType::Email }));
        assert!(err.has_issue("id", &IssueKind::Format { expected: RuleType::Uuid }));
        assert!(err.has_issue("born", &IssueKind::Format { expected: RuleType::Date }));
    }

    #[test]
    fn test_email_domain_labels_must_not_be_empty() {
        let schema = indexmap! { "email".to_string() => Rule::new(RuleType::Email) };

        for bad in ["a@b..c", "a@.b.c.", "a@.b.c", "a@b.c.", "a@localhost", "a b@example.com"] {
            let err = validate_params(&schema, &json!({ "email": bad })).unwrap_err();
            assert!(
                err.has_issue("email", &IssueKind::Format { expected: RuleType::Email }),
                "{} should be rejected",
                bad
            );
        }
        assert!(validate_params(&schema, &json!({ "email": "ada@mail.example.com" })).is_ok());
    }

    #[test]
    fn test_boolean_rule() {
        let schema = indexmap! { "active".to_string() => Rule::new(RuleType::Boolean) };

        assert!(validate_params(&schema, &json!({ "active": false })).is_ok());
        let err = validate_params(&schema, &json!({ "active": "yes" })).unwrap_err();
        assert!(err.has_issue("active", &IssueKind::Type { expected: RuleType::Boolean }));
    }

    #[test]
    fn test_number_bounds() {
        let schema = indexmap! { "score".to_string() => Rule::number().min(0.0).max(100.0) };

        assert!(validate_params(&schema, &json!({ "score": 100 })).is_ok());
        let err = validate_params(&schema, &json!({ "score": 100.5 })).unwrap_err();
        assert!(err.has_issue("score", &IssueKind::Max { limit: 100.0 }));
        let err = validate_params(&schema, &json!({ "score": -1 })).unwrap_err();
        assert!(err.has_issue("score", &IssueKind::Min { limit: 0.0 }));
        let err = validate_params(&schema, &json!({ "score": "high" })).unwrap_err();
        assert!(err.has_issue("score", &IssueKind::Type { expected: RuleType::Number }));
    }

    #[test]
    fn test_string_max_length() {
        let schema = indexmap! { "code".to_string() => Rule::string().max(3.0) };

        assert!(validate_params(&schema, &json!({ "code": "äöü" })).is_ok());
        let err = validate_params(&schema, &json!({ "code": "abcd" })).unwrap_err();
        assert!(err.has_issue("code", &IssueKind::Max { limit: 3.0 }));
    }

    #[test]
    fn test_datetime_accepted_for_date_rule() {
        let schema = indexmap! { "at".to_string() => Rule::new(RuleType::Date) };
        assert!(validate_params(&schema, &json!({ "at": "2024-01-15T10:00:00Z" })).is_ok());
    }

    #[test]
    fn test_enum_rule() {
        let schema = indexmap! {
            "role".to_string() => Rule::new(RuleType::Enum).values(vec![json!("admin"), json!("user")]),
        };

        assert!(validate_params(&schema, &json!({ "role": "admin" })).is_ok());
        let err = validate_params(&schema, &json!({ "role": "root" })).unwrap_err();
        assert!(err.has_issue("role", &IssueKind::Enum));
    }
}
