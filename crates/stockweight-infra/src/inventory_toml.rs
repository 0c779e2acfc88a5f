//! Inventory loader from TOML
//!
//! ```toml
//! [[items]]
//! code = "10.06.0019"
//! type = "TARUGO"
//! description = "TARUGO LATAO REDONDO 9/16 (14.29MM)"
//! orderPoint = 6
//! ```

use std::path::Path;

use serde::Deserialize;
use stockweight_domain::model::StockItem;
use stockweight_types::{Error, Result};

/// Container for parsing inventory.toml
#[derive(Debug, Deserialize)]
struct InventoryFile {
    #[serde(default)]
    items: Vec<StockItem>,
}

pub fn load_stock_items_from_toml(path: &Path) -> Result<Vec<StockItem>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::InventorySource(format!("failed to read {}: {}", path.display(), e))
    })?;
    parse_stock_items_toml(&content)
}

pub fn parse_stock_items_toml(content: &str) -> Result<Vec<StockItem>> {
    let file: InventoryFile = toml::from_str(content)
        .map_err(|e| Error::InventorySource(format!("failed to parse inventory TOML: {}", e)))?;
    Ok(file.items)
}
