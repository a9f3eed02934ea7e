use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use rust_passtool::api;
use rust_passtool::cli::{handlers, Args, CliCommand};
use rust_passtool::core::config::Config;
use rust_passtool::logging;
use rust_passtool::models::GenerationPolicy;

#[actix_web::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(address) = args.address.clone() {
        config.web_address = address;
    }
    if let Some(port) = args.port {
        config.web_port = port;
    }

    logging::init(&config)?;
    log::debug!("Loaded config: {:?}", config);

    match args.command.unwrap_or(CliCommand::Serve) {
        CliCommand::Serve => {
            log::info!("🔒 Starting RustPassTool");
            api::start_server(config).await.map_err(|e| {
                log::error!("API server failed: {}", e);
                e
            })?;
            log::info!("✅ RustPassTool shutdown complete.");
        }
        CliCommand::Generate { length, no_uppercase, no_lowercase, no_numbers, no_special } => {
            let policy = GenerationPolicy {
                length,
                include_uppercase: !no_uppercase,
                include_lowercase: !no_lowercase,
                include_numbers: !no_numbers,
                include_special: !no_special,
            };
            handlers::handle_generate(&policy)?;
        }
        CliCommand::Hash { password, rounds } => {
            handlers::handle_hash(&config, password, rounds)?;
        }
        CliCommand::Verify { hash, password } => {
            if !handlers::handle_verify(&hash, password)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        CliCommand::Strength { password } => {
            handlers::handle_strength(&password);
        }
    }

    Ok(ExitCode::SUCCESS)
}
