/// GraphQL naming derived from a human-facing type name
///
/// Field and query names use lower camel case, type names upper camel case.

use convert_case::{Case, Casing};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNames {
    /// Lower camel case, e.g. `userProfile`
    pub field: String,
    /// Upper camel case, e.g. `UserProfile`
    pub type_name: String,
}

impl TypeNames {
    pub fn new(type_name: &str) -> Self {
        Self {
            field: type_name.to_case(Case::Camel),
            type_name: type_name.to_case(Case::Pascal),
        }
    }

    /// `UserInput`
    pub fn input(&self) -> String {
        format!("{}Input", self.type_name)
    }

    /// `QueryUserInput`
    pub fn query_input(&self) -> String {
        format!("Query{}Input", self.type_name)
    }

    /// `UpdateUserInput`
    pub fn update_input(&self) -> String {
        format!("Update{}Input", self.type_name)
    }
}

/// Whether `name` is a legal GraphQL name (`[_A-Za-z][_0-9A-Za-z]*`)
pub fn is_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
