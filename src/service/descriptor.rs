use super::handler::{ActionHandler, CrudContext};
use crate::error::{CrudinatorError, Result};
use crate::model::ParamSchema;
use crate::validation::validate_params;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The CRUD verbs a generated service exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionName {
    Count,
    Find,
    Get,
    Create,
    Insert,
    Update,
    Remove,
}

impl ActionName {
    pub const ALL: [ActionName; 7] = [
        ActionName::Count,
        ActionName::Find,
        ActionName::Get,
        ActionName::Create,
        ActionName::Insert,
        ActionName::Update,
        ActionName::Remove,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionName::Count => "count",
            ActionName::Find => "find",
            ActionName::Get => "get",
            ActionName::Create => "create",
            ActionName::Insert => "insert",
            ActionName::Update => "update",
            ActionName::Remove => "remove",
        }
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionName {
    type Err = CrudinatorError;

    fn from_str(s: &str) -> Result<Self> {
        ActionName::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| CrudinatorError::UnknownAction(s.to_string()))
    }
}

/// GraphQL side of an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphqlSignature {
    Query(String),
    Mutation(String),
}

impl GraphqlSignature {
    pub fn as_str(&self) -> &str {
        match self {
            GraphqlSignature::Query(s) | GraphqlSignature::Mutation(s) => s,
        }
    }

    pub fn is_mutation(&self) -> bool {
        matches!(self, GraphqlSignature::Mutation(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<ParamSchema>,
    pub graphql: GraphqlSignature,
    #[serde(skip)]
    pub handler: Option<ActionHandler>,
}

/// Everything the host framework needs to register one service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceDescriptor {
    pub name: String,
    pub actions: IndexMap<ActionName, ActionDescriptor>,
}

impl ServiceDescriptor {
    pub fn action(&self, name: ActionName) -> Option<&ActionDescriptor> {
        self.actions.get(&name)
    }

    /// Validate the context's parameters against `action` and run its handler.
    ///
    /// Errors raised by the context primitives come back as
    /// [`CrudinatorError::Action`] with the original error intact.
    pub async fn dispatch(&self, action: &str, ctx: &dyn CrudContext) -> Result<Value> {
        let name: ActionName = action.parse()?;
        let descriptor = self
            .action(name)
            .ok_or_else(|| CrudinatorError::UnknownAction(action.to_string()))?;

        tracing::debug!("Dispatching {}.{}", self.name, name);

        if let Some(params) = &descriptor.params {
            validate_params(params, &Value::Object(ctx.params().clone()))?;
        }

        let handler = descriptor
            .handler
            .as_ref()
            .ok_or(CrudinatorError::MissingHandler(name))?;

        Ok(handler.handle(ctx).await?)
    }
}
