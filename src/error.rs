//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::engine::PricingError;
use crate::pricing::models::UnknownCategory;
use crate::pricing::responses::PricingErrorResponse;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            // Closed-set widgets should make these unreachable; refuse to
            // compute rather than price a category we never defined.
            AppError::UnknownCategory(_) => (StatusCode::UNPROCESSABLE_ENTITY, "unknown_category"),
            AppError::Pricing(PricingError::InvalidRequest { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_request")
            }
            AppError::Pricing(PricingError::ModelUnavailable { .. }) => {
                tracing::error!("Model unavailable: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "model_unavailable")
            }
            AppError::Pricing(PricingError::NonFinitePrediction { .. }) => {
                tracing::error!("Model prediction error: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "prediction_error")
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let body = PricingErrorResponse {
            error_type: error_type.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_maps_to_422() {
        let error = AppError::Pricing(PricingError::InvalidRequest {
            message: "nights_stayed must be at least 1".to_string(),
        });
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_unknown_category_maps_to_422() {
        let error = AppError::UnknownCategory(UnknownCategory {
            field: "country",
            value: "Narnia".to_string(),
        });
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = AppError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
