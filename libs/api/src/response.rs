use axum::{http::StatusCode, response::IntoResponse};
use tracing::error;

use crate::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::ClientError(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            ApiError::UpstreamError(message) => {
                (StatusCode::BAD_GATEWAY, message).into_response()
            }
            ApiError::ServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, message: &str) -> ApiResponse<T>;
}

impl<T, E> IntoApiResponse<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn into_response(self, message: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            let e: anyhow::Error = e.into();
            error!("{:?}", e);

            ApiError::ServerError(message.to_string())
        })
    }
}
