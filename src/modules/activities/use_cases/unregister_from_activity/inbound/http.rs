use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shared::core::primitives::StudentEmail;
use crate::shared::http;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<UnregisterParams>,
) -> Response {
    let student = match StudentEmail::parse(&params.email) {
        Ok(s) => s,
        Err(e) => return http::detail(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
    };

    let command = UnregisterFromActivity {
        activity_name,
        student_id: student.into_inner(),
        requested_at: Utc::now().timestamp_millis(),
    };

    match state.unregister_handler.handle(command).await {
        Ok(unregistered) => http::message(format!(
            "Unregistered {} from {}",
            unregistered.student_id, unregistered.activity_name
        )),
        Err(e) => e.into_response(),
    }
}
