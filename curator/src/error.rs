use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The uploaded document does not match the export schema. Reported to
    /// the operator instead of poisoning the store.
    #[error("malformed follower export: {0}")]
    MalformedExport(String),

    #[error("invalid upload: {0}")]
    Upload(#[from] MultipartError),

    #[error("upload is missing the `file` field")]
    MissingFile,

    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedExport { .. } | AppError::Upload { .. } | AppError::MissingFile => {
                StatusCode::BAD_REQUEST
            }
            AppError::Io { .. } | AppError::Json { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
