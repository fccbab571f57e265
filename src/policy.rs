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
// Password policy engine

use rand::rngs::ThreadRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::charclass::CharacterClass;
use crate::error::PolicyError;
use crate::passgen::{self, GenerationConfig, IndexSource};

/// Owns the generation config and the random source it samples with.
#[derive(Debug)]
pub struct PolicyEngine<S = ThreadRng> {
    config: GenerationConfig,
    source: S,
}

impl PolicyEngine<ThreadRng> {
    pub fn new(config: GenerationConfig) -> Self {
        Self::with_source(config, rand::thread_rng())
    }
}

impl Default for PolicyEngine<ThreadRng> {
    fn default() -> Self {
        Self::new(GenerationConfig::default())
    }
}

impl PolicyEngine<ChaCha8Rng> {
    /// Reproducible engine, same seed gives the same passwords.
    pub fn seeded(config: GenerationConfig, seed: u64) -> Self {
        Self::with_source(config, seeded_rng(seed))
    }
}

impl PolicyEngine<Box<dyn RngCore>> {
    /// Seeded when `seed` is given, thread-local otherwise.
    pub fn from_seed(config: GenerationConfig, seed: Option<u64>) -> Self {
        let source: Box<dyn RngCore> = match seed {
            Some(seed) => Box::new(seeded_rng(seed)),
            None => Box::new(rand::thread_rng()),
        };
        Self::with_source(config, source)
    }
}

fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

impl<S: IndexSource> PolicyEngine<S> {
    pub fn with_source(config: GenerationConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn get_config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Returns whether `class` is enabled after the call.
    pub fn toggle_class(&mut self, class: CharacterClass) -> bool {
        self.config.toggle(class)
    }

    pub fn set_length(&mut self, length: usize) -> Result<(), PolicyError> {
        self.config.set_length(length)?;
        debug!(length, "length updated");
        Ok(())
    }

    pub fn generate(&mut self) -> Result<String, PolicyError> {
        passgen::generate_password(&self.config, &mut self.source)
    }
}
