//! Infrastructure layer - in-memory repositories, seed data, file loaders

pub mod encoding;
pub mod inventory_csv;
pub mod inventory_toml;
pub mod persistence;
pub mod seed;

use std::path::Path;

use stockweight_domain::model::StockItem;
use stockweight_types::{Error, Result};

/// Load stock items from a `.csv` or `.toml` file, chosen by extension
pub fn load_stock_items(path: &Path) -> Result<Vec<StockItem>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    match extension.as_deref() {
        Some("csv") => inventory_csv::load_stock_items_from_csv(path),
        Some("toml") => inventory_toml::load_stock_items_from_toml(path),
        _ => Err(Error::InventorySource(format!(
            "unsupported inventory file (expected .csv or .toml): {}",
            path.display()
        ))),
    }
}
