//! Error handling for the application

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::tariff::responses::TariffErrorResponse;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid JSON request: {0}")]
    InvalidJson(#[from] JsonRejection),

    #[error("Units consumed cannot be negative")]
    NegativeUnits,

    #[error("Units consumed out of range: {0}")]
    UnitsOutOfRange(i128),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// JSON body for errors raised by the API
    fn json_response(status: StatusCode, error_type: &str, message: String) -> Response {
        let body = TariffErrorResponse {
            error_type: error_type.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidJson(rejection) => {
                tracing::info!("Rejected JSON request: {}", rejection);
                return Self::json_response(
                    rejection.status(),
                    "invalid_json",
                    rejection.body_text(),
                );
            }
            AppError::NegativeUnits => {
                return Self::json_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "negative_units",
                    self.to_string(),
                );
            }
            AppError::UnitsOutOfRange(_) => {
                return Self::json_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "units_out_of_range",
                    self.to_string(),
                );
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error")
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
            }
        };

        // Return simple HTML error page
        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head><title>{} - Electricity Bill Calculator</title></head>
<body style="font-family: sans-serif; text-align: center; padding: 50px;">
    <h1>{}</h1>
    <p>{}</p>
    <a href="/">Return to calculator</a>
</body>
</html>"#,
            status.as_u16(),
            status.as_u16(),
            message
        );

        (status, axum::response::Html(html)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
