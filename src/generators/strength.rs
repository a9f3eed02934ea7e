// src/generators/strength.rs
use crate::models::{StrengthDetails, StrengthLabel, StrengthReport};

// Score a password from its length and character-class diversity
pub fn analyze_password_strength(password: &str) -> StrengthReport {
    let length = password.chars().count();

    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_numbers = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let char_types = [has_uppercase, has_lowercase, has_numbers, has_special]
        .iter()
        .filter(|present| **present)
        .count() as u8;

    let score = (length_score(length) + u32::from(char_types) * 10).min(100) as u8;

    StrengthReport {
        score,
        strength: label_for(score),
        details: StrengthDetails {
            length,
            has_uppercase,
            has_lowercase,
            has_numbers,
            has_special,
            char_types,
        },
    }
}

fn length_score(length: usize) -> u32 {
    // Saturate so absurd inputs cannot overflow; every branch caps well below this
    let length = length.min(u32::MAX as usize / 2) as u32;

    if length < 8 {
        (length * 2).min(20)
    } else if length < 12 {
        30 + (length - 8) * 5
    } else {
        50 + ((length - 12) * 2).min(30)
    }
}

pub fn label_for(score: u8) -> StrengthLabel {
    match score {
        0..=40 => StrengthLabel::Weak,
        41..=70 => StrengthLabel::Medium,
        _ => StrengthLabel::Strong,
    }
}
