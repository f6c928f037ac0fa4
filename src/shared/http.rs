use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DetailBody {
    pub detail: String,
}

pub fn message(text: impl Into<String>) -> Response {
    (
        StatusCode::OK,
        Json(MessageBody {
            message: text.into(),
        }),
    )
        .into_response()
}

pub fn detail(status: StatusCode, text: impl Into<String>) -> Response {
    (
        status,
        Json(DetailBody {
            detail: text.into(),
        }),
    )
        .into_response()
}
