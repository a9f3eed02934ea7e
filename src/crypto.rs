// src/crypto.rs
use thiserror::Error;

pub const MIN_ROUNDS: u32 = 4;
pub const MAX_ROUNDS: u32 = 20;
pub const DEFAULT_ROUNDS: u32 = 10;

/// Length of an encoded bcrypt hash (`$2b$10$` + 22 salt + 31 digest chars).
pub const BCRYPT_HASH_LEN: usize = 60;

pub const ALGORITHM: &str = "bcrypt";

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Rounds must be between {min} and {max}, got {actual}")]
    InvalidRounds { min: u32, max: u32, actual: u32 },

    #[error("Hashing error: {0}")]
    HashingError(#[from] bcrypt::BcryptError),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

pub fn validate_rounds(rounds: u32) -> Result<()> {
    if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&rounds) {
        return Err(CryptoError::InvalidRounds {
            min: MIN_ROUNDS,
            max: MAX_ROUNDS,
            actual: rounds,
        });
    }
    Ok(())
}

// Hash a password with bcrypt; a fresh salt is drawn on every call
pub fn hash_password(password: &str, rounds: u32) -> Result<String> {
    validate_rounds(rounds)?;
    let hashed = bcrypt::hash(password, rounds)?;
    Ok(hashed)
}

/// Cost factor embedded in a `$2x$NN$...` hash, if the header is well formed.
pub fn embedded_cost(hash: &str) -> Option<u32> {
    let header = hash.get(..7)?.as_bytes();
    if header[0] != b'$' || header[1] != b'2' || header[3] != b'$' || header[6] != b'$' {
        return None;
    }
    if !header[4].is_ascii_digit() || !header[5].is_ascii_digit() {
        return None;
    }
    Some(u32::from(header[4] - b'0') * 10 + u32::from(header[5] - b'0'))
}

/// Cheap structural check run before handing a hash to bcrypt. The embedded
/// cost must be one this service would produce, so verification time stays bounded.
pub fn looks_like_bcrypt(hash: &str) -> bool {
    hash.len() == BCRYPT_HASH_LEN
        && hash.starts_with("$2")
        && embedded_cost(hash).map_or(false, |cost| validate_rounds(cost).is_ok())
}

// Verify a password against a bcrypt hash. Never fails: anything that cannot be
// checked counts as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    if !looks_like_bcrypt(hash) {
        log::debug!("Rejecting malformed hash before verification");
        return false;
    }

    match bcrypt::verify(password, hash) {
        Ok(matched) => matched,
        Err(e) => {
            log::debug!("Hash verification failed: {}", e);
            false
        }
    }
}
