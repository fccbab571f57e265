use anyhow::{Context, Result};

use crate::charclass::CharacterClass;
use crate::configtool::Settings;
use crate::passgen::{self, GenerationConfig};
use crate::policy::PolicyEngine;
use crate::setclip::SystemClipboard;
use crate::shell::{ConsoleNotifier, Session};

#[derive(Debug, Default, Clone)]
pub struct GenRequest {
    pub length: Option<usize>,
    /// Empty means the classes from the settings.
    pub classes: Vec<CharacterClass>,
    pub seed: Option<u64>,
    pub copy: bool,
    pub no_strength: bool,
}

pub fn generate_random(settings: &Settings, request: GenRequest) -> Result<()> {
    let length = request.length.unwrap_or(settings.length);
    let config = if request.classes.is_empty() {
        GenerationConfig::new(length, settings.classes.iter().copied())
    } else {
        GenerationConfig::new(length, request.classes.iter().copied())
    }
    .context("Invalid generation options")?;

    let engine = PolicyEngine::from_seed(config.clone(), request.seed);
    let clipboard = SystemClipboard::detached(settings.clipboard_clear_secs);
    let mut session = Session::new(engine, clipboard, ConsoleNotifier);

    let password = session
        .generate()
        .context("Failed to generate password")?
        .to_string();
    println!("Generated password: {}", password);

    if settings.show_strength && !request.no_strength {
        evaluate_and_display_password_strength(&password);
        let missing = passgen::check_class_coverage(&password, &config);
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|c| c.name()).collect();
            println!("Note: no characters drawn from {}", names.join(", "));
        }
    }

    if request.copy {
        session.copy();
    }
    Ok(())
}

pub fn evaluate_and_display_password_strength(password: &str) {
    let strength = passgen::assess_password_strength(password);
    println!("Password strength: {} (score: {}/4)", strength.rating, strength.score);
    if !strength.feedback.is_empty() {
        println!("Suggestions: {}", strength.feedback);
    }
}
