pub mod assets;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::dashboard::handlers as dashboard;
use crate::intake::handlers as intake;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Intake form
        .route("/", get(intake::handle_form))
        .route("/applications", post(intake::handle_submit))
        // Dashboard
        .route("/dashboard", get(dashboard::handle_dashboard))
        .route("/applications/clear", post(dashboard::handle_clear))
        .route(
            "/applications/:id/:action",
            post(dashboard::handle_card_action),
        )
        .route("/api/applications", get(dashboard::handle_list))
        // Static client assets
        .route("/assets/app.js", get(assets::script_handler))
        .route("/assets/app.css", get(assets::stylesheet_handler))
        .with_state(state)
}
