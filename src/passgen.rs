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
// Password generator

use std::collections::BTreeSet;
use rand::Rng;
use tracing::debug;
use zxcvbn::zxcvbn;
use zxcvbn::Score;

use crate::charclass::CharacterClass;
use crate::error::PolicyError;

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 20;
pub const DEFAULT_LENGTH: usize = 10;

/// Uniform random index generator over `[0, n)`.
pub trait IndexSource {
    fn next_index(&mut self, n: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn next_index(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

/// Current generation settings: a length and a never-empty set of classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    length: usize,
    enabled: BTreeSet<CharacterClass>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            enabled: BTreeSet::from([CharacterClass::Lowercase]),
        }
    }
}

impl GenerationConfig {
    pub fn new<I>(length: usize, classes: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = CharacterClass>,
    {
        check_length(length)?;
        let enabled: BTreeSet<CharacterClass> = classes.into_iter().collect();
        if enabled.is_empty() {
            return Err(PolicyError::EmptyAlphabet);
        }
        Ok(Self { length, enabled })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.enabled.contains(&class)
    }

    /// Enabled classes in canonical order.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        self.enabled.iter().copied().collect()
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled.len()
    }

    /// Flip `class`, unless it is the last enabled one.
    ///
    /// Returns whether `class` is enabled afterwards.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        let currently_enabled = self.is_enabled(class);
        if currently_enabled && self.enabled.len() == 1 {
            debug!(%class, "refusing to disable the last enabled class");
            return true;
        }
        if currently_enabled {
            self.enabled.remove(&class);
        } else {
            self.enabled.insert(class);
        }
        debug!(%class, enabled = !currently_enabled, "toggled class");
        !currently_enabled
    }

    /// Out-of-range values are rejected and leave the length unchanged.
    pub fn set_length(&mut self, length: usize) -> Result<(), PolicyError> {
        check_length(length)?;
        self.length = length;
        Ok(())
    }

    /// Concatenated alphabets of the enabled classes in canonical order.
    pub fn pool(&self) -> Vec<char> {
        self.enabled
            .iter()
            .flat_map(|class| class.alphabet().chars())
            .collect()
    }
}

fn check_length(length: usize) -> Result<(), PolicyError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(PolicyError::OutOfRange {
            value: length,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        });
    }
    Ok(())
}

/// Draw `config.length()` characters, with replacement, from the enabled pool.
pub fn generate_password<S>(config: &GenerationConfig, source: &mut S) -> Result<String, PolicyError>
where
    S: IndexSource + ?Sized,
{
    let pool = config.pool();
    if pool.is_empty() {
        return Err(PolicyError::EmptyAlphabet);
    }

    let mut password = String::with_capacity(config.length);
    for _ in 0..config.length {
        let index = source.next_index(pool.len());
        password.push(pool[index]);
    }
    debug!(length = config.length, pool_size = pool.len(), "generated password");
    Ok(password)
}

/// Enabled classes that do not appear in `password`.
pub fn check_class_coverage(password: &str, config: &GenerationConfig) -> Vec<CharacterClass> {
    config
        .enabled
        .iter()
        .copied()
        .filter(|class| !password.chars().any(|c| class.contains(c)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    pub rating: String,
    pub score: u8,
    pub feedback: String,
}

pub fn assess_password_strength(password: &str) -> PasswordStrength {
    let strength_result = zxcvbn(password, &[]);
    let feedback = strength_result.feedback().map_or_else(
        String::new,
        |f| f.suggestions().iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ")
    );

    // 确定安全评级
    let (rating, score) = match strength_result.score() {
        Score::Zero => ("Very weak", 0),
        Score::One => ("Weak", 1),
        Score::Two => ("Fair", 2),
        Score::Three => ("Strong", 3),
        Score::Four => ("Very strong", 4),
        _ => ("Unknown", 0),
    };

    PasswordStrength {
        rating: rating.to_string(),
        score,
        feedback,
    }
}
