// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::crypto::{self, DEFAULT_ROUNDS};

// Configuration for the password tool service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,
    pub cors_allowed_origin: Option<String>,
    pub enable_api_docs: bool,

    // Hashing
    pub default_hash_rounds: u32,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 8080,
            cors_allowed_origin: None,
            enable_api_docs: true,

            // Hashing
            default_hash_rounds: DEFAULT_ROUNDS,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Web Interface
        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Ok(val) = env::var("WEB_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => log::warn!("Invalid WEB_PORT '{}', using {}", val, config.web_port),
            }
        }

        if let Ok(origin) = env::var("CORS_ALLOWED_ORIGIN") {
            if !origin.trim().is_empty() {
                config.cors_allowed_origin = Some(origin);
            }
        }

        if let Ok(val) = env::var("ENABLE_API_DOCS") {
            if let Ok(enabled) = val.parse() {
                config.enable_api_docs = enabled;
            }
        }

        // Hashing
        if let Ok(val) = env::var("DEFAULT_HASH_ROUNDS") {
            match val.parse::<u32>() {
                Ok(rounds) if crypto::validate_rounds(rounds).is_ok() => {
                    config.default_hash_rounds = rounds;
                }
                _ => log::warn!(
                    "Ignoring DEFAULT_HASH_ROUNDS '{}', must be between {} and {}",
                    val,
                    crypto::MIN_ROUNDS,
                    crypto::MAX_ROUNDS
                ),
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                "off" => config.log_level = LevelFilter::Off,
                _ => {}
            }
        }

        if let Ok(file) = env::var("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_address.clone(), self.web_port)
    }
}
