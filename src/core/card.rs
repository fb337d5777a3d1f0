// src/core/card.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single catalog entry.
///
/// Only `uuid`, `name`, `set_code` and `text` are understood by the service.
/// Every other field found in a stored document (artist, mana cost, ...) is
/// carried in `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Globally unique, immutable identifier.
    pub uuid: String,
    /// Display name. Reprints and variants share names.
    pub name: String,
    /// The set ("edition") this card belongs to.
    pub set_code: String,
    /// Rules text exactly as stored, escape sequences included.
    #[serde(default)]
    pub text: String,
    /// Opaque descriptive payload.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Card {
    /// Creates a card with no extra payload.
    pub fn new(
        uuid: impl Into<String>,
        name: impl Into<String>,
        set_code: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
            set_code: set_code.into(),
            text: text.into(),
            extra: Map::new(),
        }
    }

    /// Adds an opaque field, returning the card for chaining.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Card fields a store can enumerate distinct values for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    /// `setCode`
    SetCode,
    /// `name`
    Name,
    /// `uuid`
    Uuid,
}

impl CardField {
    /// Borrows this field's value from `card`.
    pub fn value<'a>(&self, card: &'a Card) -> &'a str {
        match self {
            CardField::SetCode => &card.set_code,
            CardField::Name => &card.name,
            CardField::Uuid => &card.uuid,
        }
    }

    /// The serialized field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardField::SetCode => "setCode",
            CardField::Name => "name",
            CardField::Uuid => "uuid",
        }
    }
}
