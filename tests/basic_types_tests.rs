use card_catalog::types::{LogLevel, StorageType};
use card_catalog::{Card, CardField, OrderBy, Predicate};
use serde_json::json;
use std::cmp::Ordering;
use std::str::FromStr;

#[test]
fn test_storage_type_parse_and_display() {
    assert_eq!(StorageType::from_str("memory").unwrap(), StorageType::Memory);
    assert_eq!(StorageType::from_str("FILE").unwrap(), StorageType::File);
    assert!(StorageType::from_str("other").is_err());
    assert_eq!(StorageType::default().to_string(), "file");
}

#[test]
fn test_log_level_display_and_parse() {
    assert_eq!(LogLevel::Debug.to_string(), "debug");
    assert_eq!("error".parse::<LogLevel>().unwrap(), LogLevel::Error);
    assert!("bogus".parse::<LogLevel>().is_err());
    assert_eq!(log::LevelFilter::from(LogLevel::Off), log::LevelFilter::Off);
}

#[test]
fn test_card_document_shape() {
    let doc = json!({
        "uuid": "5f8287b1-5bb6-5f4c-ad17-316a40d5bb0c",
        "name": "Shivan Dragon",
        "setCode": "M20",
        "text": "Flying\\nR: +1/+0",
        "manaCost": "{4}{R}{R}",
        "colors": ["R"]
    });
    let card: Card = serde_json::from_value(doc.clone()).unwrap();
    assert_eq!(card.set_code, "M20");
    assert_eq!(card.text, "Flying\\nR: +1/+0");
    assert_eq!(card.extra.len(), 2);
    assert_eq!(CardField::SetCode.value(&card), "M20");
    assert_eq!(serde_json::to_value(&card).unwrap(), doc);

    let bare: Card = serde_json::from_value(json!({"uuid": "1", "name": "Forest", "setCode": "M19"})).unwrap();
    assert!(bare.text.is_empty());
}

#[test]
fn test_predicate_and_order() {
    let card = Card::new("2", "Dragon Mage", "M20", "");
    let pred = Predicate::name_contains("MAGE").and(Predicate::set_equals("M20"));
    assert!(pred.matches(&card));
    assert!(!Predicate::set_equals("m20").matches(&card));

    let twin = Card::new("1", "Dragon Mage", "M19", "");
    assert_eq!(OrderBy::Name.compare(&twin, &card), Ordering::Less);
    assert_eq!(OrderBy::Unspecified.compare(&card, &twin), Ordering::Greater);
}
