//! Common error type and alias for the service.
//!
//! Every failure surfaces to the caller as an HTTP error status with a
//! JSON body of the shape `{ "detail": "<human-readable message>" }`.
//! Nothing is retried.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is absent.
    #[error("{0} not configured")]
    MissingCredential(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Transport-level failure talking to the image API.
    #[error("{0}")]
    HttpClient(#[from] reqwest::Error),

    /// The image API answered but the response was unusable.
    #[error("{0}")]
    ImageGen(String),

    #[error("No image was generated")]
    NoImage,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = match &self {
            AppError::HttpClient(err) => format!("Image generation failed: {}", err),
            AppError::ImageGen(msg) => format!("Image generation failed: {}", msg),
            other => other.to_string(),
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": detail })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_detail(err: AppError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, body["detail"].as_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn missing_credential_names_the_variable() {
        let (status, detail) = body_detail(AppError::MissingCredential("EMERGENT_LLM_KEY")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail, "EMERGENT_LLM_KEY not configured");
    }

    #[tokio::test]
    async fn no_image_uses_fixed_message() {
        let (status, detail) = body_detail(AppError::NoImage).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail, "No image was generated");
    }

    #[tokio::test]
    async fn upstream_failures_carry_the_error_text() {
        let (_, detail) = body_detail(AppError::ImageGen("image API returned 503".into())).await;
        assert_eq!(detail, "Image generation failed: image API returned 503");
    }
}
