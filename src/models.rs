// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// One of the four character classes a generated password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Special,
}

impl CharacterClass {
    /// Pool order is fixed: uppercase, lowercase, numbers, special.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Special,
    ];

    pub fn alphabet(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Numbers => "0123456789",
            // Exact set is part of the pool contract
            CharacterClass::Special => "!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }
}

// Password generation policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerationPolicy {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_special: bool,
}

impl GenerationPolicy {
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::Special => self.include_special,
        }
    }

    pub fn enabled_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(move |c| self.includes(*c))
    }
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_special: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "weak"),
            StrengthLabel::Medium => write!(f, "medium"),
            StrengthLabel::Strong => write!(f, "strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthDetails {
    /// Number of characters in the password
    pub length: usize,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_numbers: bool,
    pub has_special: bool,
    /// How many of the four classes are present (0-4)
    pub char_types: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthReport {
    /// Score between 0 and 100
    pub score: u8,
    pub strength: StrengthLabel,
    pub details: StrengthDetails,
}
