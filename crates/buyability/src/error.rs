use crate::affordability::{AffordabilityServiceError, InventoryError, RepositoryError};
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;
use tracing::warn;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Inventory(InventoryError),
    Affordability(AffordabilityServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Inventory(err) => write!(f, "inventory error: {}", err),
            AppError::Affordability(err) => write!(f, "affordability error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Inventory(err) => Some(err),
            AppError::Affordability(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, payload) = match self {
            AppError::Affordability(AffordabilityServiceError::Intake(error)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": error.to_string(), "field": error.field() }),
            ),
            AppError::Affordability(AffordabilityServiceError::Repository(
                RepositoryError::NotFound(id),
            )) => (
                StatusCode::NOT_FOUND,
                json!({ "error": "development not found", "developmentId": id }),
            ),
            other => {
                warn!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": other.to_string() }),
                )
            }
        };

        (status, Json(payload)).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<InventoryError> for AppError {
    fn from(value: InventoryError) -> Self {
        Self::Inventory(value)
    }
}

impl From<AffordabilityServiceError> for AppError {
    fn from(value: AffordabilityServiceError) -> Self {
        Self::Affordability(value)
    }
}
