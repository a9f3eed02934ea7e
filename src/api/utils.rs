// src/api/utils.rs

use actix_web::http::StatusCode;
use actix_web::{error::JsonPayloadError, HttpRequest, HttpResponse, ResponseError};
use std::collections::BTreeMap;
use thiserror::Error;
use log::warn;

use crate::api::types::ErrorResponse;
use crate::generators::PolicyError;

/// Errors surfaced to HTTP callers.
///
/// `Validation` maps to 422 and carries field-level messages. `Internal` maps
/// to 500 and only ever holds a generic message; the cause is logged where the
/// error is created.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Validation {
        message: String,
        errors: BTreeMap<String, Vec<String>>,
    },

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, message);
        errors.into_error()
    }

    pub fn internal(public_message: &str, cause: impl std::fmt::Display) -> Self {
        log::error!("{} Cause: {}", public_message, cause);
        ApiError::Internal(public_message.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let errors = match self {
            ApiError::Validation { errors, .. } => Some(errors.clone()),
            ApiError::Internal(_) => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            message: self.to_string(),
            errors,
        })
    }
}

/// Collects field-level validation messages in request order.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    first: Option<String>,
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        if self.first.is_none() {
            self.first = Some(message.clone());
        }
        self.errors.entry(field.to_string()).or_default().push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_error(self) -> ApiError {
        ApiError::Validation {
            message: self.first.unwrap_or_else(|| "The given data was invalid.".to_string()),
            errors: self.errors,
        }
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }
}

/// Caller-facing wording for a rejected generation policy.
pub fn policy_error_message(err: &PolicyError) -> String {
    match err {
        PolicyError::LengthTooShort { min, .. } => {
            format!("Password length must be at least {} characters.", min)
        }
        PolicyError::LengthTooLong { max, .. } => {
            format!("Password length cannot exceed {} characters.", max)
        }
        PolicyError::NoCharacterClass => "At least one character type must be selected.".to_string(),
    }
}

impl From<PolicyError> for ApiError {
    fn from(err: PolicyError) -> Self {
        let field = match err {
            PolicyError::NoCharacterClass => "character_types",
            _ => "length",
        };
        ApiError::field(field, policy_error_message(&err))
    }
}

/// Turns malformed JSON bodies into the standard 422 envelope.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected request body on {}: {}", req.path(), err);
    ApiError::field("body", "The request body must be valid JSON matching the expected shape.").into()
}
