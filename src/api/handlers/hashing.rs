// src/api/handlers/hashing.rs

use actix_web::{web, HttpResponse};
use crate::core::config::Config;
use crate::crypto;
use crate::api::types::{
    ApiResponse, HashPasswordRequest, HashPasswordResponse,
    VerifyPasswordRequest, VerifyPasswordResponse,
};
use crate::api::utils::{ApiError, ValidationErrors};
use log::{debug, info};

const MAX_PASSWORD_CHARS: usize = 255;

fn required_password(errors: &mut ValidationErrors, password: &Option<String>) -> String {
    match password.as_deref() {
        None => {
            errors.add("password", "Password is required.");
            String::new()
        }
        Some("") => {
            errors.add("password", "Password cannot be empty.");
            String::new()
        }
        Some(password) => password.to_string(),
    }
}

/// Hash a password
///
/// Hashes the password with bcrypt. A fresh salt is used on every call.
#[utoipa::path(
    post,
    path = "/api/password/hash",
    tag = "Password",
    request_body = HashPasswordRequest,
    responses(
        (status = 200, description = "bcrypt hash, wrapped in the success envelope", body = HashPasswordResponse),
        (status = 422, description = "Invalid password or rounds", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn hash_password(
    config: web::Data<Config>,
    hash_req: web::Json<HashPasswordRequest>,
) -> Result<HttpResponse, ApiError> {
    let mut errors = ValidationErrors::new();

    let password = required_password(&mut errors, &hash_req.password);
    if password.chars().count() > MAX_PASSWORD_CHARS {
        errors.add("password", format!("Password cannot exceed {} characters.", MAX_PASSWORD_CHARS));
    }

    let rounds = match hash_req.rounds {
        None => config.default_hash_rounds,
        Some(requested) => {
            if requested < i64::from(crypto::MIN_ROUNDS) {
                errors.add("rounds", format!("Rounds must be at least {}.", crypto::MIN_ROUNDS));
            } else if requested > i64::from(crypto::MAX_ROUNDS) {
                errors.add("rounds", format!("Rounds cannot exceed {}.", crypto::MAX_ROUNDS));
            }
            // Only used once validation has passed, so the value is in range
            u32::try_from(requested).unwrap_or(crypto::MIN_ROUNDS)
        }
    };

    errors.into_result()?;

    // bcrypt is deliberately slow, keep it off the async workers
    let hashed_password = web::block(move || crypto::hash_password(&password, rounds))
        .await
        .map_err(|e| ApiError::internal("Failed to hash password. Please try again.", e))?
        .map_err(|e| ApiError::internal("Failed to hash password. Please try again.", e))?;

    info!("Hashed password with {} rounds", rounds);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        HashPasswordResponse {
            hashed_password,
            algorithm: crypto::ALGORITHM.to_string(),
            rounds,
        },
        "Password hashed successfully.",
    )))
}

/// Verify a password
///
/// Checks a password against a bcrypt hash. Malformed hashes never raise an
/// error, they simply do not match.
#[utoipa::path(
    post,
    path = "/api/password/verify",
    tag = "Password",
    request_body = VerifyPasswordRequest,
    responses(
        (status = 200, description = "Verification result, wrapped in the success envelope", body = VerifyPasswordResponse),
        (status = 422, description = "Missing password or hash", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn verify_password(
    verify_req: web::Json<VerifyPasswordRequest>,
) -> Result<HttpResponse, ApiError> {
    let mut errors = ValidationErrors::new();

    let password = required_password(&mut errors, &verify_req.password);
    let hash = match verify_req.hash.clone() {
        Some(hash) => hash,
        None => {
            errors.add("hash", "Hash is required.");
            String::new()
        }
    };

    errors.into_result()?;

    let is_valid = web::block(move || crypto::verify_password(&password, &hash))
        .await
        .map_err(|e| ApiError::internal("Failed to verify password. Please try again.", e))?;

    debug!("Password verification completed, matched: {}", is_valid);

    let message = if is_valid {
        "Password verification successful."
    } else {
        "Password does not match."
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        VerifyPasswordResponse {
            is_valid,
            password_matched: is_valid,
        },
        message,
    )))
}
