// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use std::collections::BTreeMap;

use crate::models::{GenerationPolicy, StrengthReport};

// Generic response envelope; `data` carries the per-endpoint payload
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    /// Whether the operation was successful
    pub success: bool,
    /// Human readable summary
    pub message: String,
    /// Payload (only present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Error message safe to show to the caller
    pub message: String,
    /// Field-level validation errors, keyed by field name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

// Generation
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct GeneratePasswordRequest {
    /// Password length (8-128)
    pub length: Option<i64>,
    pub include_uppercase: Option<bool>,
    pub include_lowercase: Option<bool>,
    pub include_numbers: Option<bool>,
    pub include_special_characters: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_special_characters: bool,
}

impl From<&GenerationPolicy> for GenerationConfig {
    fn from(policy: &GenerationPolicy) -> Self {
        GenerationConfig {
            length: policy.length,
            include_uppercase: policy.include_uppercase,
            include_lowercase: policy.include_lowercase,
            include_numbers: policy.include_numbers,
            include_special_characters: policy.include_special,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GeneratePasswordResponse {
    /// The generated password
    pub password: String,
    /// Strength analysis of the generated password
    pub strength: StrengthReport,
    /// Echo of the policy that was applied
    pub config: GenerationConfig,
}

// Hashing
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct HashPasswordRequest {
    /// Password to hash (1-255 characters)
    pub password: Option<String>,
    /// bcrypt cost factor (4-20), server default when omitted
    pub rounds: Option<i64>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HashPasswordResponse {
    pub hashed_password: String,
    /// Always "bcrypt"
    pub algorithm: String,
    pub rounds: u32,
}

// Verification
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct VerifyPasswordRequest {
    pub password: Option<String>,
    /// bcrypt hash to check against
    pub hash: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct VerifyPasswordResponse {
    pub is_valid: bool,
    pub password_matched: bool,
}

// Strength
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct StrengthRequest {
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
