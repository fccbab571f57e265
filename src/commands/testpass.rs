use anyhow::{Context, Result};

use crate::configtool::read_password_from_stdin;
use super::password_gen::evaluate_and_display_password_strength;

pub fn test_password(password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => read_password_from_stdin("Enter password to test: ")
            .context("Failed to read password")?,
    };
    if password.is_empty() {
        anyhow::bail!("Password cannot be empty");
    }
    evaluate_and_display_password_strength(&password);
    Ok(())
}
