//! Label printing handlers.
//!
//! Request bodies are read as raw text so a malformed body is answered with
//! a readable `Error Printing: ...` message rather than the extractor's
//! default rejection.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{Result, ZebrellaError};
use crate::template::Content;

use super::super::state::AppState;

/// Handle POST /print - print the body with the configured template.
pub async fn print(State(state): State<Arc<AppState>>, body: String) -> Response {
    let content = match parse_body(&body) {
        Ok(content) => content,
        Err(e) => return error_response(&e),
    };

    let mut job = state.config.job(Some(content));
    job.dry_run = false;

    match state.service.submit(job).await {
        Ok(outcome) => {
            info!("Label printed");
            (StatusCode::OK, Json(outcome)).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// Handle POST /preview - return the label command without printing.
pub async fn preview(State(state): State<Arc<AppState>>, body: String) -> Response {
    let content = match parse_body(&body) {
        Ok(content) => content,
        Err(e) => return error_response(&e),
    };

    let job = state.config.job(Some(content)).dry_run(true);

    match state.service.submit(job).await {
        Ok(outcome) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            outcome.command().to_string(),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

/// Parse a request body as a content record.
fn parse_body(body: &str) -> Result<Content> {
    serde_json::from_str(body).map_err(|e| ZebrellaError::MalformedRequest(e.to_string()))
}

fn status_for(error: &ZebrellaError) -> StatusCode {
    match error {
        ZebrellaError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
        ZebrellaError::InvalidContent { .. }
        | ZebrellaError::UnknownTemplate(_)
        | ZebrellaError::UnknownModel(_) => StatusCode::UNPROCESSABLE_ENTITY,
        e if e.is_transport() => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: &ZebrellaError) -> Response {
    warn!(error = %error, "Print request failed");
    (status_for(error), format!("Error Printing: {}", error)).into_response()
}
