//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.8
// License : Mulan PSL v2
//
// Config Tools

use serde::{Serialize, Deserialize};
use std::{fmt, fs, io::{self, Write}, path::{Path, PathBuf}};
use dirs::config_dir;
use rpassword::read_password;
use tracing::debug;

use crate::charclass::CharacterClass;
use crate::error::PolicyError;
use crate::passgen::{GenerationConfig, DEFAULT_LENGTH};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    ConfigDirError(String),
    Invalid(PolicyError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::JsonError(e) => write!(f, "JSON error: {}", e),
            ConfigError::ConfigDirError(msg) => write!(f, "Config directory error: {}", msg),
            ConfigError::Invalid(e) => write!(f, "Invalid settings: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::JsonError(e) => Some(e),
            ConfigError::Invalid(e) => Some(e),
            ConfigError::ConfigDirError(_) => None,
        }
    }
}

/// Defaults a session starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub classes: Vec<CharacterClass>,
    /// Seconds before a copied password is wiped from the clipboard, `None` keeps it.
    pub clipboard_clear_secs: Option<u64>,
    pub show_strength: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: vec![CharacterClass::Lowercase],
            clipboard_clear_secs: None,
            show_strength: true,
        }
    }
}

impl Settings {
    /// Missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path).map_err(ConfigError::IoError)?;
        let settings: Self = serde_json::from_str(&data).map_err(ConfigError::JsonError)?;
        settings.generation_config()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::IoError)?;
        }
        let file = fs::File::create(path).map_err(ConfigError::IoError)?;
        serde_json::to_writer_pretty(file, self).map_err(ConfigError::JsonError)?;
        Ok(())
    }

    pub fn generation_config(&self) -> Result<GenerationConfig, ConfigError> {
        GenerationConfig::new(self.length, self.classes.iter().copied())
            .map_err(ConfigError::Invalid)
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join("rpawogen")),
        None => Err(ConfigError::ConfigDirError("Could not determine configuration directory".to_string())),
    }
}

/// `override_path` wins over the default location.
pub fn settings_path(override_path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match override_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(get_config_dir()?.join(SETTINGS_FILE)),
    }
}

/// 提示用户输入
///
/// `None` at end of input.
pub fn prompt_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// 提示用户输入密码
pub fn read_password_from_stdin(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    read_password()
}
