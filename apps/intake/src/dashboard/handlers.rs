use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;

use crate::dashboard::actions::{run_card_action, ActionOutcome, CardAction};
use crate::dashboard::search::search_newest_first;
use crate::errors::AppError;
use crate::models::ApplicationRecord;
use crate::state::AppState;
use crate::view::{dashboard_page, render_document};

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /dashboard?q=
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Html<String>, AppError> {
    let records = state.applications.list().await?;
    let shown = search_newest_first(records, &params.q);
    Ok(Html(render_document(&dashboard_page(&shown, &params.q))))
}

/// POST /applications/:id/:action
pub async fn handle_card_action(
    State(state): State<AppState>,
    Path((id, action)): Path<(String, CardAction)>,
    Form(params): Form<SearchQuery>,
) -> Result<Response, AppError> {
    let response = match run_card_action(&state.applications, &id, action).await? {
        ActionOutcome::Raw(json) => {
            ([(header::CONTENT_TYPE, "application/json")], json).into_response()
        }
        ActionOutcome::Summary(summary) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            summary,
        )
            .into_response(),
        ActionOutcome::Deleted(_) => Redirect::to(&dashboard_url(&params.q)).into_response(),
    };
    Ok(response)
}

/// POST /applications/clear
pub async fn handle_clear(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.applications.clear().await?;
    Ok(Redirect::to("/dashboard"))
}

/// GET /api/applications
/// The stored collection in storage order.
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ApplicationRecord>>, AppError> {
    Ok(Json(state.applications.list().await?))
}

fn dashboard_url(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return "/dashboard".to_string();
    }
    match serde_urlencoded::to_string([("q", query)]) {
        Ok(encoded) => format!("/dashboard?{encoded}"),
        Err(_) => "/dashboard".to_string(),
    }
}
