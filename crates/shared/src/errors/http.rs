use crate::errors::{errors::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg) = match self.0 {
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::Http(err) => (
                    StatusCode::BAD_GATEWAY,
                    format!("Upstream request failed: {err}"),
                ),
                RepositoryError::UnexpectedStatus { endpoint, status } => (
                    StatusCode::BAD_GATEWAY,
                    format!("Upstream returned status {status} for {endpoint}"),
                ),
                RepositoryError::Decode(msg) => (
                    StatusCode::BAD_GATEWAY,
                    format!("Upstream sent an unreadable response: {msg}"),
                ),
                RepositoryError::PaginationStalled { pages } => (
                    StatusCode::BAD_GATEWAY,
                    format!("Transaction listing stalled after {pages} page(s)"),
                ),
                RepositoryError::Timeout => (
                    StatusCode::GATEWAY_TIMEOUT,
                    "Upstream request timed out".to_string(),
                ),
                RepositoryError::Custom(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            },

            ServiceError::Timeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "Stats computation exceeded its deadline".to_string(),
            ),

            ServiceError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),

            ServiceError::Custom(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}
