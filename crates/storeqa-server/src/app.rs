use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::post, Json, Router};
use serde::Serialize;
use serde_json::Value;
use storeqa_core::executor::Executor;
use storeqa_core::pipeline::Pipeline;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
}

// Missing, non-string and whitespace-only fields all count as absent
fn required_str<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

async fn ask<E: Executor + 'static>(
    State(pipeline): State<Arc<Pipeline<E>>>,
    Json(body): Json<Value>,
) -> Response {
    let (Some(store_id), Some(question)) = (
        required_str(&body, "store_id"),
        required_str(&body, "question"),
    ) else {
        tracing::warn!("rejecting /ask request with blank store_id or question");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: "store_id and question are required" }),
        )
            .into_response();
    };

    Json(pipeline.ask(store_id, question)).into_response()
}

pub fn router<E: Executor + 'static>(pipeline: Arc<Pipeline<E>>) -> Router {
    Router::new()
        .route("/ask", post(ask::<E>))
        .with_state(pipeline)
}
