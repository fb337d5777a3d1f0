use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Supported card store backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    /// In-memory catalog (tests, fixtures, benches)
    Memory,
    /// One JSON document per card on disk
    #[default]
    File,
}
