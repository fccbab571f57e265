use std::collections::HashSet;
use rpawogen::charclass::*;

#[test]
fn test_alphabet_sizes() {
    assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
    assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
    assert_eq!(CharacterClass::Numbers.alphabet().len(), 10);
    assert_eq!(CharacterClass::Symbols.alphabet().len(), 29);
}

#[test]
fn test_alphabets_are_disjoint_ascii() {
    let mut seen = HashSet::new();
    for class in CharacterClass::ALL {
        for c in class.alphabet().chars() {
            assert!(c.is_ascii_graphic());
            assert!(seen.insert(c), "'{}' appears in more than one class", c);
        }
    }
    assert_eq!(seen.len(), 91);
}

#[test]
fn test_parse_names_and_indices() {
    assert_eq!("lower".parse::<CharacterClass>().unwrap(), CharacterClass::Lowercase);
    assert_eq!("Uppercase".parse::<CharacterClass>().unwrap(), CharacterClass::Uppercase);
    assert_eq!("3".parse::<CharacterClass>().unwrap(), CharacterClass::Numbers);
    assert_eq!("special".parse::<CharacterClass>().unwrap(), CharacterClass::Symbols);
    assert!("emoji".parse::<CharacterClass>().is_err());
}

#[test]
fn test_serde_names() {
    let json = serde_json::to_string(&CharacterClass::ALL).unwrap();
    assert_eq!(json, r#"["lowercase","uppercase","numbers","symbols"]"#);
}
