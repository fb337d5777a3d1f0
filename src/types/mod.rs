//! Core type definitions shared by configuration and storage

mod log_level;
mod storage;

pub use log_level::LogLevel;
pub use storage::StorageType;
