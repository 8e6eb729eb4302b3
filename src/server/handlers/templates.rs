//! Template listing handler.

use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

use crate::template::Content;

use super::super::state::AppState;

/// Template entry for the listing response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub name: String,
    pub description: String,
    pub default_content: Content,
    /// Whether POST /print uses this template
    pub active: bool,
}

/// Handle GET /templates - list the catalog.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<TemplateInfo>> {
    let templates = state
        .service
        .catalog()
        .iter()
        .map(|template| TemplateInfo {
            name: template.name().to_string(),
            description: template.description().to_string(),
            default_content: template.default_content(),
            active: template.name() == state.config.template,
        })
        .collect();
    Json(templates)
}
