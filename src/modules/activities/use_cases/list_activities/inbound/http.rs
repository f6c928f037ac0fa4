use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, response::Response};

use crate::shared::http;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.queries.list_activities().await {
        Ok(activities) => Json(activities).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "listing activities failed");
            http::detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
