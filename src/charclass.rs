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
// Character classes

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBER_CHARS: &str = "0123456789";
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// A named category of characters with a fixed alphabet.
///
/// The declaration order is the canonical pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE_CHARS,
            CharacterClass::Uppercase => UPPERCASE_CHARS,
            CharacterClass::Numbers => NUMBER_CHARS,
            CharacterClass::Symbols => SYMBOL_CHARS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    /// Menu label, as shown next to the checkbox.
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Include Lowercase",
            CharacterClass::Uppercase => "Include Uppercase",
            CharacterClass::Numbers => "Include Numbers",
            CharacterClass::Symbols => "Include Symbols",
        }
    }

    /// 1-based position in the menu.
    pub fn index(self) -> usize {
        match self {
            CharacterClass::Lowercase => 1,
            CharacterClass::Uppercase => 2,
            CharacterClass::Numbers => 3,
            CharacterClass::Symbols => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Symbols => "symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownClass(pub String);

impl fmt::Display for UnknownClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown character class '{}' (expected lowercase, uppercase, numbers, symbols or 1-4)", self.0)
    }
}

impl std::error::Error for UnknownClass {}

impl FromStr for CharacterClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "lowercase" | "lower" => Ok(CharacterClass::Lowercase),
            "2" | "uppercase" | "upper" => Ok(CharacterClass::Uppercase),
            "3" | "numbers" | "number" | "digits" | "num" => Ok(CharacterClass::Numbers),
            "4" | "symbols" | "symbol" | "special" | "sym" => Ok(CharacterClass::Symbols),
            _ => Err(UnknownClass(s.trim().to_string())),
        }
    }
}
