use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use tracing::info;

use crate::errors::AppError;
use crate::intake::validation::validate_submission;
use crate::models::ApplicationForm;
use crate::state::AppState;
use crate::view::{intake_page, render_document};

/// GET /
/// Always served blank so nothing from an earlier visit is prefilled.
pub async fn handle_form() -> Html<String> {
    Html(render_document(&intake_page(&ApplicationForm::default(), None)))
}

/// POST /applications
pub async fn handle_submit(
    State(state): State<AppState>,
    Form(form): Form<ApplicationForm>,
) -> Result<Response, AppError> {
    let form = form.trimmed();
    if let Err(rejection) = validate_submission(&form) {
        let message = rejection.to_string();
        info!("Rejected application: {message}");
        let page = intake_page(&form, Some(message.as_str()));
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(render_document(&page))).into_response());
    }

    let now = Utc::now();
    let record = form.into_record(state.ids.next_id(now), now);
    state.applications.append(record).await?;

    Ok(Redirect::to("/dashboard").into_response())
}
