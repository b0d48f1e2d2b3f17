//! Route handler functions for all API endpoints.
//!
//! Each handler extracts path parameters and JSON bodies via axum
//! extractors, calls the classifier and/or the event store, and returns a
//! JSON response.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use evtag_core::error::EvtagError;
use evtag_core::{Event, EventInput, Tag};

use crate::error::ApiError;
use crate::state::AppState;

/// Error text returned by `PUT /edit_event/{id}` for an unknown id.
pub const EVENT_NOT_FOUND: &str = "Event not found";

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct TagsResponse {
    pub tags: Vec<Tag>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of `PUT /edit_event/{id}`.
///
/// An unknown id is reported in the body with HTTP 200, not as an error
/// status; existing clients depend on this shape.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EditEventResponse {
    Updated(Event),
    NotFound { error: String },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub event_count: u64,
    pub model: String,
}

// =============================================================================
// Handler functions
// =============================================================================

/// POST /predict_tags - classify an event without storing it.
pub async fn predict_tags(
    State(state): State<AppState>,
    Json(event): Json<EventInput>,
) -> Json<TagsResponse> {
    let tags = state.classifier.classify(&event.desc).await;
    Json(TagsResponse { tags })
}

/// POST /add_event - classify and store a new event.
pub async fn add_event(
    State(state): State<AppState>,
    Json(event): Json<EventInput>,
) -> Result<Json<Event>, ApiError> {
    let tags = state.classifier.classify(&event.desc).await;
    let stored = state.store.insert(event, tags)?;
    Ok(Json(stored))
}

/// GET /get_events - all events in creation order.
pub async fn get_events(State(state): State<AppState>) -> Result<Json<EventsResponse>, ApiError> {
    let events = state.store.list()?;
    Ok(Json(EventsResponse { events }))
}

/// DELETE /delete_event/{id} - remove an event. Succeeds even if absent.
///
/// Any integer is accepted; negative ids never match a stored event.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = match u64::try_from(event_id) {
        Ok(id) => state.store.remove(id)?,
        Err(_) => false,
    };
    if !removed {
        tracing::debug!(event_id, "Delete requested for unknown event");
    }
    Ok(Json(MessageResponse {
        message: format!("Event {} deleted", event_id),
    }))
}

/// PUT /edit_event/{id} - overwrite an event and recompute its tags.
pub async fn edit_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(updated): Json<EventInput>,
) -> Result<Json<EditEventResponse>, ApiError> {
    let not_found = || {
        Json(EditEventResponse::NotFound {
            error: EVENT_NOT_FOUND.to_string(),
        })
    };

    // Skip the model call for ids that do not exist.
    let event_id = match u64::try_from(event_id) {
        Ok(id) => id,
        Err(_) => return Ok(not_found()),
    };
    if !state.store.contains(event_id)? {
        return Ok(not_found());
    }

    let tags = state.classifier.classify(&updated.desc).await;

    // The event may have been deleted while the model was answering.
    match state.store.update(event_id, updated, tags) {
        Ok(event) => Ok(Json(EditEventResponse::Updated(event))),
        Err(EvtagError::EventNotFound { .. }) => Ok(not_found()),
        Err(e) => Err(e.into()),
    }
}

/// GET /health - health check.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        event_count: state.store.len()? as u64,
        model: state.classifier.model_name().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use evtag_classifier::{
        ClassifierError, LanguageModel, OfflineModel, StaticModel, TagClassifier,
    };
    use evtag_core::config::ServerConfig;
    use evtag_core::EventStore;

    use super::*;

    fn make_state(model: Arc<dyn LanguageModel>) -> AppState {
        AppState::new(ServerConfig::default(), TagClassifier::new(model))
    }

    fn json_request(method: &str, uri: &str, json: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    /// Deletes `target` from the store while "generating", so the edit that
    /// called it finds the event gone when it writes back.
    struct DeletingModel {
        store: Arc<EventStore>,
        target: u64,
    }

    #[async_trait]
    impl LanguageModel for DeletingModel {
        async fn generate(&self, _prompt: &str) -> Result<String, ClassifierError> {
            assert!(self.store.remove(self.target).unwrap());
            Ok("art".to_string())
        }

        fn name(&self) -> &str {
            "deleting"
        }
    }

    fn sample_input() -> EventInput {
        EventInput {
            title: "a".to_string(),
            date: "b".to_string(),
            desc: "c".to_string(),
        }
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_predict_tags_does_not_store() {
        let state = make_state(Arc::new(StaticModel::new("music, dance")));
        let app = crate::create_router(state.clone());
        let resp = app
            .oneshot(json_request(
                "POST",
                "/predict_tags",
                r#"{"title":"Gala","date":"2025-05-01","desc":"Music and dance night"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body, serde_json::json!({"tags": ["music", "dance"]}));
        assert!(state.store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_edit_unknown_id_returns_error_payload() {
        let state = make_state(Arc::new(StaticModel::new("art")));
        let app = crate::create_router(state.clone());
        let resp = app
            .oneshot(json_request(
                "PUT",
                "/edit_event/42",
                r#"{"title":"t","date":"d","desc":"x"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body, serde_json::json!({"error": "Event not found"}));
        assert!(state.store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_edit_unknown_id_skips_model_call() {
        let model = Arc::new(StaticModel::new("art"));
        let state = make_state(Arc::clone(&model) as Arc<dyn LanguageModel>);
        let app = crate::create_router(state);
        app.oneshot(json_request(
            "PUT",
            "/edit_event/1",
            r#"{"title":"t","date":"d","desc":"x"}"#,
        ))
        .await
        .unwrap();
        assert!(model.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_edit_of_event_deleted_during_classification() {
        let store = Arc::new(EventStore::new());
        let model = DeletingModel {
            store: Arc::clone(&store),
            target: 1,
        };
        let mut state = make_state(Arc::new(model));
        state.store = Arc::clone(&store);
        store.insert(sample_input(), vec![Tag::Cultural]).unwrap();

        let resp = crate::create_router(state)
            .oneshot(json_request(
                "PUT",
                "/edit_event/1",
                r#"{"title":"t","date":"d","desc":"x"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body, serde_json::json!({"error": "Event not found"}));
        // The edit must not bring the deleted event back.
        assert!(store.is_empty().unwrap());
        assert!(!store.contains(1).unwrap());
    }

    #[tokio::test]
    async fn test_edit_negative_id_returns_error_payload() {
        let model = Arc::new(StaticModel::new("art"));
        let state = make_state(Arc::clone(&model) as Arc<dyn LanguageModel>);
        state.store.insert(sample_input(), vec![Tag::Cultural]).unwrap();
        let resp = crate::create_router(state.clone())
            .oneshot(json_request(
                "PUT",
                "/edit_event/-1",
                r#"{"title":"t","date":"d","desc":"x"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body, serde_json::json!({"error": "Event not found"}));
        assert_eq!(state.store.list().unwrap()[0].title, "a");
        assert!(model.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_health_reports_model_and_count() {
        let state = make_state(Arc::new(OfflineModel));
        state.store.insert(sample_input(), vec![Tag::Cultural]).unwrap();
        let app = crate::create_router(state);
        let resp = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.event_count, 1);
        assert_eq!(health.model, "offline");
    }

    #[test]
    fn test_edit_response_shapes() {
        let not_found = EditEventResponse::NotFound {
            error: EVENT_NOT_FOUND.to_string(),
        };
        assert_eq!(
            serde_json::to_value(&not_found).unwrap(),
            serde_json::json!({"error": "Event not found"})
        );

        let updated = EditEventResponse::Updated(Event {
            id: 1,
            title: "t".to_string(),
            date: "d".to_string(),
            desc: "x".to_string(),
            tags: vec![Tag::Art],
        });
        let value = serde_json::to_value(&updated).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["tags"], serde_json::json!(["art"]));
        assert!(value.get("error").is_none());
    }
}
