/// Integration tests for action dispatch
///
/// A recording context stands in for the host framework's CRUD primitives so
/// the tests can see exactly what each handler delegates.

mod dispatch_tests {
    use async_trait::async_trait;
    use crudinator::error::CrudinatorError;
    use crudinator::model::{EntityModel, Rule};
    use crudinator::schema::generate_service;
    use crudinator::service::{CrudContext, InsertRequest};
    use serde_json::{json, Map, Value};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(Value),
        Insert(InsertRequest),
        Update(Map<String, Value>),
    }

    struct RecordingContext {
        params: Map<String, Value>,
        calls: Mutex<Vec<Call>>,
        fail: bool,
    }

    impl RecordingContext {
        fn new(params: Value) -> Self {
            Self {
                params: params.as_object().cloned().unwrap_or_default(),
                calls: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing(params: Value) -> Self {
            Self {
                fail: true,
                ..Self::new(params)
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) -> anyhow::Result<Value> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                anyhow::bail!("database unavailable");
            }
            Ok(json!({ "ok": true }))
        }
    }

    #[async_trait]
    impl CrudContext for RecordingContext {
        fn params(&self) -> &Map<String, Value> {
            &self.params
        }

        async fn create(&self, entity: Value) -> anyhow::Result<Value> {
            self.record(Call::Create(entity))
        }

        async fn insert(&self, request: InsertRequest) -> anyhow::Result<Value> {
            self.record(Call::Insert(request))
        }

        async fn update(&self, changes: Map<String, Value>) -> anyhow::Result<Value> {
            self.record(Call::Update(changes))
        }
    }

    fn service() -> crudinator::ServiceDescriptor {
        let model = EntityModel::new()
            .field("name", Rule::string())
            .field("age", Rule::number().optional());
        generate_service("users", "user", &model)
    }

    #[tokio::test]
    async fn test_create_delegates_keyed_entity() {
        let ctx = RecordingContext::new(json!({ "user": { "name": "Ada" } }));
        let result = service().dispatch("create", &ctx).await.unwrap();

        assert_eq!(result, json!({ "ok": true }));
        assert_eq!(ctx.calls(), vec![Call::Create(json!({ "name": "Ada" }))]);
    }

    #[tokio::test]
    async fn test_insert_wraps_entities() {
        let ctx = RecordingContext::new(json!({ "user": [{ "name": "Ada" }, { "name": "Bob" }] }));
        service().dispatch("insert", &ctx).await.unwrap();

        assert_eq!(
            ctx.calls(),
            vec![Call::Insert(InsertRequest {
                entities: json!([{ "name": "Ada" }, { "name": "Bob" }])
            })]
        );
    }

    #[tokio::test]
    async fn test_update_spreads_input_without_validation() {
        let ctx = RecordingContext::new(json!({ "user": { "id": "42", "age": 37, "extra": 1 } }));
        service().dispatch("update", &ctx).await.unwrap();

        let expected = json!({ "id": "42", "age": 37, "extra": 1 });
        assert_eq!(
            ctx.calls(),
            vec![Call::Update(expected.as_object().cloned().unwrap())]
        );
    }

    #[tokio::test]
    async fn test_update_without_input_sends_empty_changes() {
        let ctx = RecordingContext::new(json!({}));
        service().dispatch("update", &ctx).await.unwrap();

        assert_eq!(ctx.calls(), vec![Call::Update(Map::new())]);
    }

    #[tokio::test]
    async fn test_invalid_params_never_reach_primitives() {
        let ctx = RecordingContext::new(json!({ "user": [] }));
        let result = service().dispatch("insert", &ctx).await;

        assert!(matches!(result, Err(CrudinatorError::Validation(_))));
        assert!(ctx.calls().is_empty());
    }

    #[tokio::test]
    async fn test_primitive_errors_propagate_unchanged() {
        let ctx = RecordingContext::failing(json!({ "user": { "name": "Ada" } }));
        let err = service().dispatch("create", &ctx).await.unwrap_err();

        assert!(matches!(err, CrudinatorError::Action(_)));
        assert_eq!(err.to_string(), "database unavailable");
    }

    #[tokio::test]
    async fn test_actions_without_handlers() {
        let ctx = RecordingContext::new(json!({ "limit": 10 }));

        for action in ["count", "find", "get", "remove"] {
            let result = service().dispatch(action, &ctx).await;
            assert!(
                matches!(result, Err(CrudinatorError::MissingHandler(_))),
                "{} should have no handler",
                action
            );
        }
        assert!(ctx.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_action() {
        let ctx = RecordingContext::new(json!({}));
        let result = service().dispatch("purge", &ctx).await;
        assert!(matches!(result, Err(CrudinatorError::UnknownAction(_))));
    }
}
