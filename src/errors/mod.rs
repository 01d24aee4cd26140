/// Unified error handling module
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Every failure a handler can produce. Upstream and completion failures
/// carry a client-facing generic message plus a server-side detail string;
/// only the generic message ever leaves the process.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Not allowed by CORS")]
    OriginRejected,

    #[error("Too many requests, please try again later.")]
    RateLimited,

    #[error("{0}")]
    NotFound(String),

    #[error("{public}")]
    Upstream { public: &'static str, detail: String },

    #[error("{public}")]
    Completion { public: &'static str, detail: String },
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    pub fn upstream(public: &'static str, detail: impl Into<String>) -> Self {
        ApiError::Upstream {
            public,
            detail: detail.into(),
        }
    }

    pub fn completion(public: &'static str, detail: impl Into<String>) -> Self {
        ApiError::Completion {
            public,
            detail: detail.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::OriginRejected => StatusCode::FORBIDDEN,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream { .. } | ApiError::Completion { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Upstream { public, detail } => {
                error!(%public, %detail, "upstream call failed");
            }
            ApiError::Completion { public, detail } => {
                error!(%public, %detail, "completion call failed");
            }
            ApiError::Validation(reason) => {
                warn!(%reason, "request rejected by validation");
            }
            _ => {}
        }

        let body = json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
