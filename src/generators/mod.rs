// src/generators/mod.rs
pub mod password;
pub mod strength;

pub use password::{CharacterPool, PasswordGenerator, PolicyError};
pub use strength::analyze_password_strength;
