use crate::domain::error::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("not found")]
    NotFound,

    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

pub(crate) type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Status plus the message safe to show to a client.
    ///
    /// NotFound never says whether the resource is missing or hidden.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Domain(err) => match err {
                DomainError::Validation { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
                DomainError::NotFound(_) => (StatusCode::NOT_FOUND, "not found".to_string()),
                DomainError::Unexpected(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                ),
            },
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
            AppError::Template(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        }
    }

    fn log_if_server_error(&self, status: StatusCode) {
        if status.is_server_error() {
            error!(error = ?self, "request failed");
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();
        self.log_if_server_error(status);

        (status, Json(ErrorBody { error: msg })).into_response()
    }
}

/// Same mapping as [`AppError`], answered as an HTML page.
#[derive(Debug)]
pub(crate) struct PageError(pub(crate) AppError);

pub(crate) type PageResult<T> = Result<T, PageError>;

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<DomainError> for PageError {
    fn from(err: DomainError) -> Self {
        Self(AppError::Domain(err))
    }
}

impl From<tera::Error> for PageError {
    fn from(err: tera::Error) -> Self {
        Self(AppError::Template(err))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, _) = self.0.status_and_message();
        self.0.log_if_server_error(status);

        let title = match status {
            StatusCode::NOT_FOUND => "Page not found",
            StatusCode::BAD_REQUEST => "Bad request",
            _ => "Something went wrong",
        };
        let body = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n\
             <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
             <body><h1>{title}</h1><p><a href=\"/\">Back to the front page</a></p></body>\n\
             </html>\n",
        );

        (status, Html(body)).into_response()
    }
}
