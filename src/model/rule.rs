/// Validation rules in the host framework's parameter-schema shape
///
/// A `Rule` serializes to the same object the host validator consumes, e.g.
/// `{ "type": "string", "optional": true, "min": 2 }`. Keys this crate does
/// not interpret are carried through untouched in `extra`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Rules keyed by field (or parameter) name
pub type ParamSchema = IndexMap<String, Rule>;

/// A caller-supplied field definition is just a rule
pub type FieldDefinition = Rule;

/// Value type checked by a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    Any,
    Array,
    Boolean,
    Date,
    Email,
    Enum,
    Number,
    Object,
    String,
    Uuid,
}

impl RuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::Any => "any",
            RuleType::Array => "array",
            RuleType::Boolean => "boolean",
            RuleType::Date => "date",
            RuleType::Email => "email",
            RuleType::Enum => "enum",
            RuleType::Number => "number",
            RuleType::Object => "object",
            RuleType::String => "string",
            RuleType::Uuid => "uuid",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One validation rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "type")]
    pub kind: RuleType,

    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,

    /// Reject object keys not declared in `props`
    #[serde(default, skip_serializing_if = "is_false")]
    pub strict: bool,

    /// Whole numbers only (`number` rules)
    #[serde(default, skip_serializing_if = "is_false")]
    pub integer: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<ParamSchema>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Rule>>,

    /// Length for strings and arrays, value for numbers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Allowed members of an `enum` rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Rule {
    pub fn new(kind: RuleType) -> Self {
        Self {
            kind,
            optional: false,
            strict: false,
            integer: false,
            props: None,
            items: None,
            min: None,
            max: None,
            values: None,
            extra: Map::new(),
        }
    }

    pub fn string() -> Self {
        Self::new(RuleType::String)
    }

    pub fn number() -> Self {
        Self::new(RuleType::Number)
    }

    /// Object rule with the given shape
    pub fn object(props: ParamSchema) -> Self {
        Self {
            props: Some(props),
            ..Self::new(RuleType::Object)
        }
    }

    /// Array rule whose elements follow `items`
    pub fn array(items: Rule) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::new(RuleType::Array)
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn values(mut self, values: Vec<Value>) -> Self {
        self.values = Some(values);
        self
    }
}
