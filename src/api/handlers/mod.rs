// src/api/handlers/mod.rs
pub mod generator;
pub mod hashing;
pub mod system;
