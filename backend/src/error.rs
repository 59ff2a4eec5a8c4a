//! Error handling for the BaristaLog server
//!
//! Provides consistent error responses in English and Spanish

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::FieldError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_es: String,
    },

    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Confirmation required: {0}")]
    ConfirmationRequired(String),

    // Storage errors
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<FieldError> for AppError {
    fn from(err: FieldError) -> Self {
        AppError::Validation {
            field: err.field.to_string(),
            message: err.message,
            message_es: err.message_es,
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_es: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    /// HTTP status and response body for this error
    pub fn detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::Validation { field, message, message_es } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_es: message_es.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::InvalidLanguage(code) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_LANGUAGE".to_string(),
                    message_en: format!("Unsupported language '{}', use 'es' or 'en'", code),
                    message_es: format!("Idioma '{}' no soportado, usa 'es' o 'en'", code),
                    field: Some("lang".to_string()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_es: format!("No se encontró {}", resource),
                    field: None,
                },
            ),
            AppError::ConfirmationRequired(action) => (
                StatusCode::CONFLICT,
                ErrorDetail {
                    code: "CONFIRMATION_REQUIRED".to_string(),
                    message_en: format!("Confirm to {}: repeat the request with confirm=true", action),
                    message_es: "¿Estás seguro? Repite la solicitud con confirm=true".to_string(),
                    field: Some("confirm".to_string()),
                },
            ),
            AppError::StorageError(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "STORAGE_ERROR".to_string(),
                    message_en: format!("Storage error: {}", msg),
                    message_es: format!("Error al guardar los datos: {}", msg),
                    field: None,
                },
            ),
            AppError::Serialization(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "STORAGE_ERROR".to_string(),
                    message_en: "The journal could not be saved".to_string(),
                    message_es: "No se pudo guardar el diario".to_string(),
                    field: None,
                },
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.detail();

        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
