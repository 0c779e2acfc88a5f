//! Error types for stockweight

use thiserror::Error;

/// Message returned when an inventory code has no matching row
pub const MATERIAL_NOT_FOUND_MESSAGE: &str = "Material não encontrado";

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Density lookup on a name outside the fixed table
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    #[error("{msg} ({0})", msg = MATERIAL_NOT_FOUND_MESSAGE)]
    MaterialNotFound(String),

    #[error("Invalid batch row {row}: {reason}")]
    InvalidBatchRow { row: usize, reason: String },

    #[error("Inventory source error: {0}")]
    InventorySource(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
