// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};
use crate::models::GenerationPolicy;
use crate::generators::{analyze_password_strength, PasswordGenerator};
use crate::api::types::{
    ApiResponse, GeneratePasswordRequest, GeneratePasswordResponse,
    GenerationConfig, StrengthRequest,
};
use crate::api::utils::{ApiError, ValidationErrors};
use log::{debug, info};

fn require_flag(errors: &mut ValidationErrors, field: &str, label: &str, value: Option<bool>) -> bool {
    match value {
        Some(flag) => flag,
        None => {
            errors.add(field, format!("{} option is required.", label));
            false
        }
    }
}

/// Build a policy from the request. Range and class checks are left to the
/// generator so there is a single source of truth for them.
fn policy_from_request(req: &GeneratePasswordRequest) -> Result<GenerationPolicy, ApiError> {
    let mut errors = ValidationErrors::new();

    let length = match req.length {
        // Negative lengths clamp to 0 on purpose: the generator owns the range
        // check and reports them as too short
        Some(length) => usize::try_from(length).unwrap_or(0),
        None => {
            errors.add("length", "Password length is required.");
            0
        }
    };

    let include_uppercase = require_flag(&mut errors, "include_uppercase", "Uppercase", req.include_uppercase);
    let include_lowercase = require_flag(&mut errors, "include_lowercase", "Lowercase", req.include_lowercase);
    let include_numbers = require_flag(&mut errors, "include_numbers", "Numbers", req.include_numbers);
    let include_special = require_flag(
        &mut errors,
        "include_special_characters",
        "Special characters",
        req.include_special_characters,
    );

    errors.into_result()?;

    Ok(GenerationPolicy {
        length,
        include_uppercase,
        include_lowercase,
        include_numbers,
        include_special,
    })
}

/// Generate a password
///
/// Draws every character uniformly from the pool built from the enabled
/// character classes and returns it with its strength analysis.
#[utoipa::path(
    post,
    path = "/api/password/generate",
    tag = "Password",
    request_body = GeneratePasswordRequest,
    responses(
        (status = 200, description = "Generated password, wrapped in the success envelope", body = GeneratePasswordResponse),
        (status = 422, description = "Invalid generation policy", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn generate_password(
    generation_req: web::Json<GeneratePasswordRequest>,
) -> Result<HttpResponse, ApiError> {
    let policy = policy_from_request(&generation_req)?;

    let password = PasswordGenerator::new().generate_password(&policy).map_err(|e| {
        debug!("Rejected generation policy: {}", e.code());
        ApiError::from(e)
    })?;

    let strength = analyze_password_strength(&password);
    info!("Generated password of length {} ({})", policy.length, strength.strength);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        GeneratePasswordResponse {
            password,
            strength,
            config: GenerationConfig::from(&policy),
        },
        "Password generated successfully.",
    )))
}

/// Analyze password strength
///
/// Scores an arbitrary password by length and character-class diversity.
#[utoipa::path(
    post,
    path = "/api/password/strength",
    tag = "Password",
    request_body = StrengthRequest,
    responses(
        (status = 200, description = "Strength report, wrapped in the success envelope", body = StrengthReport),
        (status = 422, description = "Malformed request", body = ErrorResponse)
    )
)]
pub async fn analyze_strength(req: web::Json<StrengthRequest>) -> HttpResponse {
    let report = analyze_password_strength(&req.password);
    HttpResponse::Ok().json(ApiResponse::success(report, "Password strength calculated."))
}
