use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::UnknownField(field) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Unknown form field: {field}"),
            )
                .into_response(),
            AppError::Template(err) => {
                tracing::error!("Template error: {err}");

                crate::template::server_error()
            }
        }
    }
}
