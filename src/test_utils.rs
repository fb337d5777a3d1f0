// src/test_utils.rs

//! Fixtures shared by unit tests, integration tests and benches.

use crate::config::Config;
use crate::core::Card;
use crate::StorageType;
use std::sync::OnceLock;

/// Provides a common test configuration.
/// Uses in-memory storage and the default query limits.
pub fn get_test_config() -> &'static Config {
    static TEST_CONFIG: OnceLock<Config> = OnceLock::new();
    TEST_CONFIG.get_or_init(|| {
        let mut config = Config::default();
        config.storage.storage_type = StorageType::Memory;
        config.storage.base_path = String::new();
        config
    })
}

/// A card with empty rules text.
pub fn card(uuid: &str, name: &str, set_code: &str) -> Card {
    Card::new(uuid, name, set_code, "")
}

/// Two-letter names `"Aa"`, `"Ab"`, ... in ascending order, `count` of them.
pub fn two_letter_names(count: usize) -> Vec<String> {
    let letters: Vec<char> = ('a'..='z').collect();
    (0..count)
        .map(|i| {
            let first = (b'A' + ((i / 26) % 26) as u8) as char;
            format!("{}{}", first, letters[i % 26])
        })
        .collect()
}

/// `count` cards in `set_code` with random uuids and the names from
/// [`two_letter_names`].
pub fn numbered_catalog(count: usize, set_code: &str) -> Vec<Card> {
    two_letter_names(count)
        .into_iter()
        .map(|name| Card::new(uuid::Uuid::new_v4().to_string(), name, set_code, ""))
        .collect()
}

/// A small mixed catalog spanning three sets.
pub fn sample_catalog() -> Vec<Card> {
    vec![
        Card::new("0001", "Shivan Dragon", "M20", "Flying\\nR: Shivan Dragon gets +1/+0 until end of turn.")
            .with_field("artist", "Donato Giancola"),
        Card::new("0002", "Dragon Mage", "M20", "Flying").with_field("artist", "Matt Cavotta"),
        Card::new("0003", "Drakuseth, Maw of Flames", "M20", "Flying"),
        Card::new("0004", "Opt", "XLN", "Scry 1.\\nDraw a card."),
        Card::new("0005", "Shock", "M20", "Shock deals 2 damage to any target."),
        Card::new("0006", "Shock", "M19", "Shock deals 2 damage to any target."),
        Card::new("0007", "Dragonskull Summit", "XLN", ""),
        Card::new("0008", "Forest", "M19", ""),
    ]
}
