//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Interactive generator session

use std::fmt::Write as _;
use tracing::warn;

use crate::charclass::CharacterClass;
use crate::error::PolicyError;
use crate::passgen::{IndexSource, MAX_LENGTH, MIN_LENGTH};
use crate::policy::PolicyEngine;
use crate::setclip::ClipboardService;

pub const COPY_SUCCESS: &str = "Password copied to clipboard!";
pub const COPY_FAILURE: &str = "Failed to copy password.";

pub const HELP: &str = "\
Commands:
  g, generate         generate a new password (or just press Enter)
  c, copy             copy the current password to the clipboard
  l, length <N>       set the password length (1-20)
  t, toggle <CLASS>   toggle a character class (also: 1-4 or the class name)
  s, show             show the current settings
  h, help             show this help
  q, quit             leave the session";

/// Where the shell reports outcomes to the user.
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&mut self, message: &str) {
        println!("✅ {}", message);
    }

    fn error(&mut self, message: &str) {
        eprintln!("❌ {}", message);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Generate,
    Copy,
    Length(usize),
    Toggle(CharacterClass),
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let head = match parts.next() {
            Some(head) => head.to_ascii_lowercase(),
            None => return Ok(Command::Generate),
        };
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(format!("Too many arguments: '{}'", line.trim()));
        }

        match (head.as_str(), arg) {
            ("g" | "gen" | "generate", None) => Ok(Command::Generate),
            ("c" | "copy", None) => Ok(Command::Copy),
            ("s" | "show", None) => Ok(Command::Show),
            ("h" | "help" | "?", None) => Ok(Command::Help),
            ("q" | "quit" | "exit", None) => Ok(Command::Quit),
            ("l" | "len" | "length", Some(value)) => value
                .parse()
                .map(Command::Length)
                .map_err(|_| format!("Invalid length '{}'. Please enter a number.", value)),
            ("l" | "len" | "length", None) => Err("Missing length value".to_string()),
            ("t" | "toggle", Some(class)) => class
                .parse()
                .map(Command::Toggle)
                .map_err(|e: crate::charclass::UnknownClass| e.to_string()),
            ("t" | "toggle", None) => Err("Missing character class".to_string()),
            (other, None) => other
                .parse()
                .map(Command::Toggle)
                .map_err(|_| format!("Unknown command '{}'. Type 'h' for help.", other)),
            _ => Err(format!("Unknown command '{}'. Type 'h' for help.", line.trim())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Help,
    Quit,
}

/// Presentation shell state: the engine, the last password and the outer capabilities.
pub struct Session<S, C, N> {
    engine: PolicyEngine<S>,
    clipboard: C,
    notifier: N,
    password: Option<String>,
}

impl<S, C, N> Session<S, C, N>
where
    S: IndexSource,
    C: ClipboardService,
    N: Notifier,
{
    pub fn new(engine: PolicyEngine<S>, clipboard: C, notifier: N) -> Self {
        Self {
            engine,
            clipboard,
            notifier,
            password: None,
        }
    }

    pub fn engine(&self) -> &PolicyEngine<S> {
        &self.engine
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        self.engine.toggle_class(class)
    }

    pub fn set_length(&mut self, length: usize) -> Result<(), PolicyError> {
        self.engine.set_length(length)
    }

    /// Replaces the previous password.
    pub fn generate(&mut self) -> Result<&str, PolicyError> {
        let password = self.engine.generate()?;
        Ok(self.password.insert(password).as_str())
    }

    /// Without a password this does nothing.
    pub fn copy(&mut self) {
        let Some(password) = self.password.as_deref() else {
            return;
        };
        match self.clipboard.copy(password) {
            Ok(()) => self.notifier.success(COPY_SUCCESS),
            Err(e) => {
                warn!("clipboard write failed: {}", e);
                self.notifier.error(COPY_FAILURE);
            }
        }
    }

    pub fn render(&self) -> String {
        let config = self.engine.get_config();
        let mut out = String::new();
        let _ = writeln!(out, "Password: {}", self.password.as_deref().unwrap_or(""));
        let _ = writeln!(out, "Character length {} ({}-{})", config.length(), MIN_LENGTH, MAX_LENGTH);
        for class in CharacterClass::ALL {
            let mark = if config.is_enabled(class) { 'x' } else { ' ' };
            let _ = writeln!(out, "  {}. [{}] {}", class.index(), mark, class.label());
        }
        out
    }

    /// Run one line of user input.
    pub fn handle(&mut self, line: &str) -> Action {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(msg) => {
                self.notifier.error(&msg);
                return Action::Continue;
            }
        };

        match command {
            Command::Generate => {
                if let Err(e) = self.generate().map(|_| ()) {
                    self.notifier.error(&e.to_string());
                }
            }
            Command::Copy => self.copy(),
            Command::Length(length) => {
                if let Err(e) = self.set_length(length) {
                    self.notifier.error(&e.to_string());
                }
            }
            Command::Toggle(class) => {
                self.toggle(class);
            }
            Command::Show => {}
            Command::Help => return Action::Help,
            Command::Quit => return Action::Quit,
        }
        Action::Continue
    }
}
