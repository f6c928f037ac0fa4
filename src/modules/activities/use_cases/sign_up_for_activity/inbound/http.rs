use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::shared::core::primitives::StudentEmail;
use crate::shared::http;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignUpParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignUpParams>,
) -> Response {
    let student = match StudentEmail::parse(&params.email) {
        Ok(s) => s,
        Err(e) => return http::detail(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
    };

    let command = SignUpForActivity {
        activity_name,
        student_id: student.into_inner(),
        requested_at: Utc::now().timestamp_millis(),
    };

    match state.sign_up_handler.handle(command).await {
        Ok(signed_up) => http::message(format!(
            "Signed up {} for {}",
            signed_up.student_id, signed_up.activity_name
        )),
        Err(e) => e.into_response(),
    }
}
