use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use reqwest::header::InvalidHeaderValue;
use serde::Serialize;
use thiserror::Error;

/// Every way a relayed call can fail. Each variant maps to one HTTP status.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("OpenRouter API error: {status}")]
    UpstreamError { status: u16, details: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    TransportFailure(String),

    #[error("No response from AI model")]
    UpstreamEmpty,

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Failed to fetch models")]
    ModelsRejected { status: u16 },

    #[error("Failed to fetch models: {0}")]
    ModelsUnavailable(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

impl RelayError {
    fn mirrored(status: u16) -> StatusCode {
        StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
    }

    pub fn details(&self) -> Option<&str> {
        match self {
            RelayError::UpstreamError { details, .. } => Some(details),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RelayError::Timeout
        } else {
            RelayError::TransportFailure(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::Internal(err.to_string())
    }
}

impl From<InvalidHeaderValue> for RelayError {
    fn from(err: InvalidHeaderValue) -> Self {
        RelayError::Internal(err.to_string())
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::UpstreamError { status, .. } | RelayError::ModelsRejected { status } => {
                Self::mirrored(*status)
            }
            RelayError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            RelayError::TransportFailure(_)
            | RelayError::UpstreamEmpty
            | RelayError::Internal(_)
            | RelayError::ModelsUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
            details: self.details(),
        })
    }
}

/// Startup configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
