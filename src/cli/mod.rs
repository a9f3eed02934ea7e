// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Address the API server binds to
    #[arg(long, global = true)]
    pub address: Option<String>,

    /// API server port
    #[arg(long, global = true)]
    pub port: Option<u16>,
}
