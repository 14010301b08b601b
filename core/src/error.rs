//! Error types for catalog, selection and configuration operations

use crate::category::ComponentCategory;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuilderError>;

#[derive(Error, Debug)]
pub enum BuilderError {
    /// Category id not present in the fixed category list
    #[error("Unknown component category: {0}")]
    UnknownCategory(String),

    /// Item id not present in the category's catalog
    #[error("Unknown item '{item_id}' in category {category}")]
    UnknownItem {
        category: ComponentCategory,
        item_id: String,
    },

    /// Item attributes belong to a different category than the target slot
    #[error("Item belongs to category {actual}, cannot be selected as {expected}")]
    CategoryMismatch {
        expected: ComponentCategory,
        actual: ComponentCategory,
    },

    /// Two catalog items share an id within one category
    #[error("Duplicate item '{item_id}' in category {category}")]
    DuplicateItem {
        category: ComponentCategory,
        item_id: String,
    },

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Explicitly requested configuration file does not exist
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),
}
