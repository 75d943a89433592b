/// GraphQL signature strings for the generated actions
///
/// Signatures are single field definitions such as
/// `users(limit: Int!, offset: Int): [User]`, meant to be stitched into a
/// `Query` or `Mutation` type by the gateway.

use crate::error::{CrudinatorError, Result};
use crate::schema::naming::TypeNames;

use async_graphql::parser::parse_schema;
use async_graphql::parser::types::{TypeKind, TypeSystemDefinition};
use serde::{Deserialize, Serialize};

/// How query filters are named in signatures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterStyle {
    /// Filters get their own `Query<Type>Input` type
    #[default]
    Wrapped,
    /// Filters reuse the entity's `<Type>Input` type.
    ///
    /// `<Type>Input` keeps the entity's required fields non-null, so a
    /// gateway enforcing the SDL rejects a partial `query` filter even though
    /// the action's own params (all filter fields optional) accept it. Use
    /// `Wrapped` when clients filter on a subset of fields.
    Flat,
}

/// Return cardinality of the `get` action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GetCardinality {
    #[default]
    Single,
    List,
}

/// Options shared by every generated service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    #[serde(default)]
    pub filter_style: FilterStyle,
    #[serde(default)]
    pub get_cardinality: GetCardinality,
}

/// Builds the signature strings for one type
pub struct Signatures<'a> {
    names: &'a TypeNames,
    options: GeneratorOptions,
}

impl<'a> Signatures<'a> {
    pub fn new(names: &'a TypeNames, options: GeneratorOptions) -> Self {
        Self { names, options }
    }

    /// Input type used by the `query` filter argument
    pub fn filter_input(&self) -> String {
        match self.options.filter_style {
            FilterStyle::Wrapped => self.names.query_input(),
            FilterStyle::Flat => self.names.input(),
        }
    }

    pub fn count(&self) -> String {
        format!(
            "count{}s(search: String, searchFields: String, query: {}): Int",
            self.names.type_name,
            self.filter_input()
        )
    }

    pub fn find(&self) -> String {
        format!(
            "{}s(limit: Int!, offset: Int, sort: String, search: String, searchFields: String, query: {}): [{}]",
            self.names.field,
            self.filter_input(),
            self.names.type_name
        )
    }

    pub fn get(&self) -> String {
        let returns = match self.options.get_cardinality {
            GetCardinality::Single => self.names.type_name.clone(),
            GetCardinality::List => format!("[{}]", self.names.type_name),
        };
        format!("{}(id: String!): {}", self.names.field, returns)
    }

    pub fn create(&self) -> String {
        format!(
            "new{}({}: {}!): {}",
            self.names.type_name,
            self.names.field,
            self.names.input(),
            self.names.type_name
        )
    }

    pub fn insert(&self) -> String {
        format!(
            "new{}s({}: [{}]): [{}]",
            self.names.type_name,
            self.names.field,
            self.names.input(),
            self.names.type_name
        )
    }

    pub fn update(&self) -> String {
        format!(
            "update{}({}: {}): {}",
            self.names.type_name,
            self.names.field,
            self.names.update_input(),
            self.names.type_name
        )
    }

    pub fn remove(&self) -> String {
        format!("delete{}(id: String!): {}", self.names.type_name, self.names.type_name)
    }
}

/// A parsed signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureInfo {
    pub name: String,
    /// `(argument name, GraphQL type)` in declaration order
    pub arguments: Vec<(String, String)>,
    pub return_type: String,
}

/// Parse a single signature with the GraphQL SDL parser
pub fn parse_signature(signature: &str) -> Result<SignatureInfo> {
    let document = parse_schema(format!("type Signature {{ {} }}", signature)).map_err(|e| {
        CrudinatorError::SchemaGeneration(format!("Invalid signature '{}': {}", signature, e))
    })?;

    let invalid = || {
        CrudinatorError::SchemaGeneration(format!(
            "Signature '{}' must contain exactly one field",
            signature
        ))
    };

    let object = document
        .definitions
        .iter()
        .find_map(|definition| match definition {
            TypeSystemDefinition::Type(ty) => match &ty.node.kind {
                TypeKind::Object(object) => Some(object),
                _ => None,
            },
            _ => None,
        })
        .ok_or_else(invalid)?;

    let [field] = object.fields.as_slice() else {
        return Err(invalid());
    };
    let field = &field.node;

    Ok(SignatureInfo {
        name: field.name.node.to_string(),
        arguments: field
            .arguments
            .iter()
            .map(|arg| (arg.node.name.node.to_string(), arg.node.ty.node.to_string()))
            .collect(),
        return_type: field.ty.node.to_string(),
    })
}
