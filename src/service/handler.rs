/// Delegating handlers for the mutating actions
///
/// The generated handlers do no work of their own. They pick the entity input
/// out of the validated parameters and hand it to the hosting context's
/// generic CRUD primitives, returning whatever those return.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload passed to the `insert` primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertRequest {
    pub entities: Value,
}

/// What a handler can reach while running: the validated parameter bag and
/// the host's generic CRUD primitives.
#[async_trait]
pub trait CrudContext: Send + Sync {
    fn params(&self) -> &Map<String, Value>;

    async fn create(&self, entity: Value) -> anyhow::Result<Value>;

    async fn insert(&self, request: InsertRequest) -> anyhow::Result<Value>;

    async fn update(&self, changes: Map<String, Value>) -> anyhow::Result<Value>;
}

/// Handler attached to a mutating action. `key` is the parameter holding the
/// entity input (the lower camel case type name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionHandler {
    Create { key: String },
    Insert { key: String },
    Update { key: String },
}

impl ActionHandler {
    pub async fn handle(&self, ctx: &dyn CrudContext) -> anyhow::Result<Value> {
        match self {
            ActionHandler::Create { key } => {
                let entity = ctx.params().get(key).cloned().unwrap_or(Value::Null);
                ctx.create(entity).await
            }
            ActionHandler::Insert { key } => {
                let entities = ctx.params().get(key).cloned().unwrap_or(Value::Null);
                ctx.insert(InsertRequest { entities }).await
            }
            ActionHandler::Update { key } => {
                let changes = match ctx.params().get(key) {
                    Some(Value::Object(map)) => map.clone(),
                    _ => Map::new(),
                };
                ctx.update(changes).await
            }
        }
    }
}
