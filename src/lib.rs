// src/lib.rs
pub mod api;
pub mod cli;
pub mod core;
pub mod crypto;
pub mod generators;
pub mod logging;
pub mod models;
