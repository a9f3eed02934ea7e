// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use thiserror::Error;

use crate::models::GenerationPolicy;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 128;

/// Why a generation policy was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("length {actual} is below the minimum of {min}")]
    LengthTooShort { min: usize, actual: usize },

    #[error("length {actual} exceeds the maximum of {max}")]
    LengthTooLong { max: usize, actual: usize },

    #[error("no character class selected")]
    NoCharacterClass,
}

impl PolicyError {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            PolicyError::LengthTooShort { .. } => "length_too_short",
            PolicyError::LengthTooLong { .. } => "length_too_long",
            PolicyError::NoCharacterClass => "no_character_class",
        }
    }
}

pub fn validate_policy(policy: &GenerationPolicy) -> Result<(), PolicyError> {
    if policy.length < MIN_LENGTH {
        return Err(PolicyError::LengthTooShort { min: MIN_LENGTH, actual: policy.length });
    }

    if policy.length > MAX_LENGTH {
        return Err(PolicyError::LengthTooLong { max: MAX_LENGTH, actual: policy.length });
    }

    if policy.enabled_classes().next().is_none() {
        return Err(PolicyError::NoCharacterClass);
    }

    Ok(())
}

/// Ordered concatenation of the alphabets of every enabled class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn from_policy(policy: &GenerationPolicy) -> Self {
        let chars = policy
            .enabled_classes()
            .flat_map(|class| class.alphabet().chars())
            .collect();

        CharacterPool { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate a password from the operating system's CSPRNG.
    pub fn generate_password(&self, policy: &GenerationPolicy) -> Result<String, PolicyError> {
        self.generate_password_with(policy, &mut OsRng)
    }

    /// Every position is drawn independently and uniformly from the pool, so an
    /// enabled class is not guaranteed to appear in the output.
    pub fn generate_password_with<R>(&self, policy: &GenerationPolicy, rng: &mut R) -> Result<String, PolicyError>
    where
        R: RngCore + CryptoRng,
    {
        validate_policy(policy)?;

        let pool = CharacterPool::from_policy(policy);
        let dist = Uniform::from(0..pool.len());

        let password = (0..policy.length)
            .map(|_| pool.as_slice()[dist.sample(&mut *rng)])
            .collect();

        Ok(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CharacterClass;

    fn policy(length: usize, upper: bool, lower: bool, numbers: bool, special: bool) -> GenerationPolicy {
        GenerationPolicy {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_special: special,
        }
    }

    #[test]
    fn rejects_short_length() {
        let err = PasswordGenerator::new()
            .generate_password(&policy(7, true, true, true, true))
            .unwrap_err();
        assert_eq!(err, PolicyError::LengthTooShort { min: 8, actual: 7 });
        assert_eq!(err.code(), "length_too_short");
    }

    #[test]
    fn rejects_long_length() {
        let err = PasswordGenerator::new()
            .generate_password(&policy(129, true, false, false, false))
            .unwrap_err();
        assert_eq!(err, PolicyError::LengthTooLong { max: 128, actual: 129 });
        assert_eq!(err.code(), "length_too_long");
    }

    #[test]
    fn rejects_policy_without_classes() {
        let err = PasswordGenerator::new()
            .generate_password(&policy(16, false, false, false, false))
            .unwrap_err();
        assert_eq!(err, PolicyError::NoCharacterClass);
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let generator = PasswordGenerator::new();
        assert_eq!(generator.generate_password(&policy(8, false, true, false, false)).unwrap().chars().count(), 8);
        assert_eq!(generator.generate_password(&policy(128, false, true, false, false)).unwrap().chars().count(), 128);
    }

    #[test]
    fn pool_follows_fixed_class_order() {
        let pool = CharacterPool::from_policy(&policy(8, true, true, true, true));
        let expected: String = [
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            "abcdefghijklmnopqrstuvwxyz",
            "0123456789",
            "!@#$%^&*()_+-=[]{}|;:,.<>?",
        ]
        .concat();
        assert_eq!(pool.as_slice().iter().collect::<String>(), expected);
        assert_eq!(pool.len(), 88);
    }

    #[test]
    fn special_alphabet_has_26_symbols() {
        assert_eq!(CharacterClass::Special.alphabet().chars().count(), 26);
    }

    #[test]
    fn output_only_uses_enabled_classes() {
        let generator = PasswordGenerator::new();
        let cases = [
            policy(64, true, false, false, false),
            policy(64, false, true, false, false),
            policy(64, false, false, true, false),
            policy(64, false, false, false, true),
            policy(64, false, true, true, false),
        ];

        for case in cases {
            let pool = CharacterPool::from_policy(&case);
            let password = generator.generate_password(&case).unwrap();
            assert_eq!(password.chars().count(), case.length);
            assert!(password.chars().all(|c| pool.contains(c)), "{password} escaped pool");
        }
    }

    #[test]
    fn consecutive_passwords_differ() {
        let generator = PasswordGenerator::new();
        let p = policy(32, true, true, true, true);
        assert_ne!(generator.generate_password(&p).unwrap(), generator.generate_password(&p).unwrap());
    }

    #[test]
    fn sampling_covers_pool_without_obvious_bias() {
        // 10 digits, 20_000 draws: expect ~2000 each
        let p = policy(100, false, false, true, false);
        let generator = PasswordGenerator::new();
        let mut counts = [0usize; 10];

        for _ in 0..200 {
            for c in generator.generate_password(&p).unwrap().chars() {
                counts[c.to_digit(10).unwrap() as usize] += 1;
            }
        }

        for (digit, count) in counts.iter().enumerate() {
            assert!((1600..=2400).contains(count), "digit {digit} drawn {count} times");
        }
    }
}
