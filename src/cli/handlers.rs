// src/cli/handlers.rs
use anyhow::{bail, Context, Result};
use console::style;
use inquire::Password;

use crate::core::config::Config;
use crate::crypto;
use crate::generators::{analyze_password_strength, PasswordGenerator};
use crate::models::{GenerationPolicy, StrengthLabel, StrengthReport};

fn styled_label(label: StrengthLabel) -> console::StyledObject<String> {
    let text = label.to_string();
    match label {
        StrengthLabel::Weak => style(text).red().bold(),
        StrengthLabel::Medium => style(text).yellow().bold(),
        StrengthLabel::Strong => style(text).green().bold(),
    }
}

fn print_report(report: &StrengthReport) {
    println!("Strength: {}/100 ({})", report.score, styled_label(report.strength));
    println!(
        "  length {}, uppercase {}, lowercase {}, numbers {}, special {} ({} of 4 classes)",
        report.details.length,
        report.details.has_uppercase,
        report.details.has_lowercase,
        report.details.has_numbers,
        report.details.has_special,
        report.details.char_types,
    );
}

fn password_or_prompt(password: Option<String>) -> Result<String> {
    match password {
        Some(password) => Ok(password),
        None => Password::new("Password:")
            .without_confirmation()
            .prompt()
            .context("Failed to read password"),
    }
}

pub fn handle_generate(policy: &GenerationPolicy) -> Result<()> {
    let password = match PasswordGenerator::new().generate_password(policy) {
        Ok(password) => password,
        Err(e) => bail!("Invalid policy ({}): {}", e.code(), e),
    };

    println!("{}", style(&password).cyan());
    print_report(&analyze_password_strength(&password));
    Ok(())
}

pub fn handle_hash(config: &Config, password: Option<String>, rounds: Option<u32>) -> Result<()> {
    let rounds = rounds.unwrap_or(config.default_hash_rounds);
    crypto::validate_rounds(rounds)?;

    let password = password_or_prompt(password)?;
    if password.is_empty() {
        bail!("Password cannot be empty");
    }

    let hashed = crypto::hash_password(&password, rounds)?;
    println!("{}", hashed);
    Ok(())
}

/// Returns whether the password matched so the caller can set the exit code.
pub fn handle_verify(hash: &str, password: Option<String>) -> Result<bool> {
    let password = password_or_prompt(password)?;
    let matched = crypto::verify_password(&password, hash);

    if matched {
        println!("{} Password matches", style("✅").green());
    } else {
        println!("{} Password does not match", style("❌").red());
    }
    Ok(matched)
}

pub fn handle_strength(password: &str) {
    print_report(&analyze_password_strength(password));
}
