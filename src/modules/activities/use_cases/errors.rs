use crate::modules::activities::adapters::outbound::registry_store::RegistryStoreError;
use crate::modules::activities::core::errors::EnrollmentError;
use crate::shared::http;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] RegistryStoreError),

    #[error(transparent)]
    Rejected(#[from] EnrollmentError),
}

impl ApplicationError {
    pub fn code(&self) -> &'static str {
        match self {
            ApplicationError::Rejected(reason) => reason.code(),
            ApplicationError::Store(_) => "INTERNAL",
        }
    }

    pub fn into_graphql(self) -> async_graphql::Error {
        use async_graphql::ErrorExtensions;

        let code = self.code();
        let message = match &self {
            ApplicationError::Rejected(reason) => reason.to_string(),
            ApplicationError::Store(_) => "Internal server error".to_string(),
        };
        async_graphql::Error::new(message).extend_with(|_, e| e.set("code", code.to_string()))
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::Rejected(reason) => {
                let status = match reason {
                    EnrollmentError::ActivityNotFound { .. }
                    | EnrollmentError::ParticipantNotFound { .. } => StatusCode::NOT_FOUND,
                    EnrollmentError::AlreadyEnrolled { .. }
                    | EnrollmentError::ActivityFull { .. } => StatusCode::BAD_REQUEST,
                };
                http::detail(status, reason.to_string())
            }
            ApplicationError::Store(e) => {
                tracing::error!(error = %e, "registry store failure");
                http::detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
