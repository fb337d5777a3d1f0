// src/storage/file.rs

use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tokio::fs;

use crate::core::{Card, CardField, OrderBy, Predicate};
use crate::error::CatalogError;
use crate::storage::{collect_distinct, order_and_slice, CardStore};

const MARKER_FILE_NAME: &str = ".card-catalog";
/// Directory under the base path holding one JSON document per card.
pub const CARDS_SUBDIR: &str = "cards";

/// A card store backed by the file system.
///
/// Cards are stored one per file, conventionally
/// `base_path/cards/<uuid>.json`. The file name is only a lookup hint:
/// every operation identifies a card by the `uuid` inside its document.
///
/// Every query re-reads the directory, so the store always reflects what is
/// on disk and never hides a read failure behind an empty result.
#[derive(Debug)]
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Creates a new `FileStorage` instance.
    ///
    /// This will create the base directory, the `cards` directory and a
    /// marker file (`.card-catalog`) if they don't already exist.
    pub async fn new<P: AsRef<Path>>(base_path: P) -> Result<Self, CatalogError> {
        let path = base_path.as_ref().to_path_buf();
        let cards_dir = path.join(CARDS_SUBDIR);

        fs::create_dir_all(&cards_dir).await.map_err(|e| CatalogError::storage(format!("Failed to create card directory '{}': {}", cards_dir.display(), e)))?;

        let marker_path = path.join(MARKER_FILE_NAME);
        if !fs::try_exists(&marker_path).await.map_err(|e| CatalogError::storage(format!("Failed to check marker file existence '{}': {}", marker_path.display(), e)))? {
            fs::File::create(&marker_path).await.map_err(|e| CatalogError::storage(format!("Failed to create marker file '{}': {}", marker_path.display(), e)))?;
        }

        Ok(Self { base_path: path })
    }

    /// Helper to create a boxed version of `FileStorage`.
    pub fn boxed(self) -> Box<dyn CardStore> {
        Box::new(self)
    }

    /// The directory card documents are read from.
    pub fn cards_dir(&self) -> PathBuf {
        self.base_path.join(CARDS_SUBDIR)
    }

    /// Conventional path of the document for `uuid`: `base_path/cards/<uuid>.json`.
    ///
    /// Returns `None` for identifiers that are not safe as a file name.
    fn card_path(&self, uuid: &str) -> Option<PathBuf> {
        let valid = !uuid.is_empty()
            && uuid.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then(|| self.cards_dir().join(format!("{}.json", uuid)))
    }

    async fn read_card(path: &Path) -> Result<Card, CatalogError> {
        let json = fs::read_to_string(path).await.map_err(|e| CatalogError::storage(format!("Failed to read card '{}': {}", path.display(), e)))?;
        serde_json::from_str(&json).map_err(|e| CatalogError::storage(format!("Corrupt card document '{}': {}", path.display(), e)))
    }

    /// Loads every card document in the card directory.
    async fn load_all(&self) -> Result<Vec<Card>, CatalogError> {
        let cards_dir = self.cards_dir();
        let mut read_dir = fs::read_dir(&cards_dir).await.map_err(|e| {
            CatalogError::storage(format!("Failed to read card directory '{}': {}", cards_dir.display(), e))
        })?;

        let mut cards = Vec::new();
        while let Some(entry) = read_dir.next_entry().await.map_err(|e| {
            CatalogError::storage(format!("Failed to read directory entry in '{}': {}", cards_dir.display(), e))
        })? {
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                cards.push(Self::read_card(&path).await?);
            }
        }
        log::debug!("[FileStorage] Loaded {} cards from {}", cards.len(), cards_dir.display());
        Ok(cards)
    }

    async fn load_matching(&self, predicate: &Predicate) -> Result<Vec<Card>, CatalogError> {
        let mut cards = self.load_all().await?;
        cards.retain(|card| predicate.matches(card));
        Ok(cards)
    }
}

#[async_trait]
impl CardStore for FileStorage {
    async fn count(&self, predicate: &Predicate) -> Result<u64, CatalogError> {
        Ok(self.load_matching(predicate).await?.len() as u64)
    }

    async fn fetch(
        &self,
        predicate: &Predicate,
        order_by: OrderBy,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Card>, CatalogError> {
        let cards = self.load_matching(predicate).await?;
        Ok(order_and_slice(cards, order_by, offset, limit))
    }

    async fn fetch_by_uuid(&self, uuid: &str) -> Result<Option<Card>, CatalogError> {
        // Documents are normally named after their uuid; the `uuid` inside the
        // document is authoritative either way.
        if let Some(card_path) = self.card_path(uuid) {
            if fs::try_exists(&card_path).await.map_err(|e| CatalogError::storage(format!("Failed to check card existence '{}': {}", card_path.display(), e)))? {
                let card = Self::read_card(&card_path).await?;
                if card.uuid == uuid {
                    return Ok(Some(card));
                }
            }
        }

        log::debug!("[FileStorage] No document named after {}, scanning {}", uuid, self.cards_dir().display());
        Ok(self.load_all().await?.into_iter().find(|card| card.uuid == uuid))
    }

    async fn distinct_values(&self, field: CardField) -> Result<Vec<String>, CatalogError> {
        let cards = self.load_all().await?;
        Ok(collect_distinct(&cards, field))
    }
}
