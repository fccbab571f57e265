use rpawogen::charclass::CharacterClass;
use rpawogen::passgen::*;
use rpawogen::PolicyError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// 按顺序返回预设下标
struct Sequence {
    indices: Vec<usize>,
    pos: usize,
}

impl Sequence {
    fn new(indices: &[usize]) -> Self {
        Self { indices: indices.to_vec(), pos: 0 }
    }
}

impl IndexSource for Sequence {
    fn next_index(&mut self, n: usize) -> usize {
        let index = self.indices[self.pos % self.indices.len()];
        self.pos += 1;
        assert!(index < n, "index {} outside pool of {}", index, n);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_lowercase_only() {
        let config = GenerationConfig::new(5, [CharacterClass::Lowercase]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let password = generate_password(&config, &mut rng).unwrap();
        assert_eq!(password.chars().count(), 5);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_default_config() {
        let config = GenerationConfig::default();
        let password = generate_password(&config, &mut rand::thread_rng()).unwrap();
        assert_eq!(password.len(), 10);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_all_classes_uses_full_pool() {
        let config = GenerationConfig::new(20, CharacterClass::ALL).unwrap();
        assert_eq!(config.pool().len(), 91);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let password = generate_password(&config, &mut rng).unwrap();
            assert_eq!(password.len(), 20);
            assert!(password.chars().all(|c| config.pool().contains(&c)));
        }
    }

    #[test]
    fn test_indices_map_to_canonical_pool_positions() {
        let config = GenerationConfig::new(8, CharacterClass::ALL).unwrap();
        let mut source = Sequence::new(&[0, 25, 26, 51, 52, 61, 62, 90]);
        let password = generate_password(&config, &mut source).unwrap();
        assert_eq!(password, "azAZ09!=");
    }

    #[test]
    fn test_pool_order_ignores_input_order() {
        let config = GenerationConfig::new(2, [CharacterClass::Numbers, CharacterClass::Lowercase]).unwrap();
        let mut source = Sequence::new(&[0, 26]);
        assert_eq!(generate_password(&config, &mut source).unwrap(), "a0");
    }

    #[test]
    fn test_length_larger_than_pool_repeats() {
        let config = GenerationConfig::new(20, [CharacterClass::Numbers]).unwrap();
        let mut source = Sequence::new(&[3]);
        assert_eq!(generate_password(&config, &mut source).unwrap(), "3".repeat(20));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = GenerationConfig::new(16, CharacterClass::ALL).unwrap();
        let first = generate_password(&config, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
        let second = generate_password(&config, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert_eq!(
            GenerationConfig::new(0, [CharacterClass::Lowercase]),
            Err(PolicyError::OutOfRange { value: 0, min: MIN_LENGTH, max: MAX_LENGTH })
        );
        assert_eq!(
            GenerationConfig::new(21, [CharacterClass::Lowercase]),
            Err(PolicyError::OutOfRange { value: 21, min: MIN_LENGTH, max: MAX_LENGTH })
        );
        assert_eq!(GenerationConfig::new(10, Vec::<CharacterClass>::new()), Err(PolicyError::EmptyAlphabet));
    }

    #[test]
    fn test_check_class_coverage() {
        let config = GenerationConfig::new(4, [CharacterClass::Lowercase, CharacterClass::Numbers]).unwrap();
        assert!(check_class_coverage("ab12", &config).is_empty());
        assert_eq!(check_class_coverage("abcd", &config), vec![CharacterClass::Numbers]);
    }

    #[test]
    fn test_assess_password_strength() {
        let weak = assess_password_strength("password");
        assert!(weak.score <= 1);
        let strong = assess_password_strength("q7#Vx!9mZ@2pLr$w");
        assert!(strong.score >= 3);
        assert!(strong.score > weak.score);
    }
}
