// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the HTTP API server
    Serve,

    /// Generate a password
    Generate {
        /// Password length (8-128)
        #[arg(long, short, default_value_t = 16)]
        length: usize,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_numbers: bool,

        /// Leave out special characters
        #[arg(long)]
        no_special: bool,
    },

    /// Hash a password with bcrypt
    Hash {
        /// Password to hash; prompted for when omitted
        #[arg(long)]
        password: Option<String>,

        /// bcrypt cost factor (4-20)
        #[arg(long, short)]
        rounds: Option<u32>,
    },

    /// Verify a password against a bcrypt hash
    Verify {
        /// bcrypt hash to check against
        #[arg(long, required = true)]
        hash: String,

        /// Password to verify; prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Score the strength of a password
    Strength {
        /// Password to score
        #[arg(required = true)]
        password: String,
    },
}
