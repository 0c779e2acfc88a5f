//! CSV loader for the material inventory list
//!
//! Expected header (order free, extra columns ignored):
//! code,type,description,currentBalance,orderPoint

use std::path::Path;

use stockweight_domain::model::StockItem;
use stockweight_types::{Error, Result};
use tracing::debug;

use crate::encoding::decode_text;

const REQUIRED_COLUMNS: [&str; 3] = ["code", "type", "description"];

/// Load stock items from a UTF-8 or Windows-1252 CSV file
pub fn load_stock_items_from_csv(path: &Path) -> Result<Vec<StockItem>> {
    let bytes = std::fs::read(path)?;
    let items = parse_stock_items(&decode_text(&bytes))?;
    debug!(path = %path.display(), count = items.len(), "loaded inventory csv");
    Ok(items)
}

/// Parse stock items from CSV text with a header row
pub fn parse_stock_items(content: &str) -> Result<Vec<StockItem>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(Error::InventorySource(format!(
                "missing required column: {}",
                required
            )));
        }
    }
    let column = |name: &str| headers.iter().position(|h| h == name);
    let (code_col, type_col, desc_col) = (column("code"), column("type"), column("description"));
    let (balance_col, order_col) = (column("currentbalance"), column("orderpoint"));

    let mut items = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        // Source line, so blank lines and multi-line quoted cells count
        let row = record
            .position()
            .map_or(row_idx + 2, |pos| pos.line() as usize);
        let field = |col: Option<usize>| col.and_then(|c| record.get(c)).unwrap_or("").to_string();

        let code = field(code_col);
        if code.is_empty() {
            return Err(Error::InventorySource(format!("row {}: empty code", row)));
        }
        items.push(StockItem {
            code,
            item_type: field(type_col),
            description: field(desc_col),
            current_balance: parse_count(&field(balance_col), row, "currentBalance")?,
            order_point: parse_count(&field(order_col), row, "orderPoint")?,
        });
    }
    Ok(items)
}

/// "currentBalance", "current_balance" and "Current Balance" compare equal
fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_count(value: &str, row: usize, column: &str) -> Result<i64> {
    if value.is_empty() {
        return Ok(0);
    }
    value.parse().map_err(|_| {
        Error::InventorySource(format!(
            "row {}: invalid {} value: {}",
            row, column, value
        ))
    })
}
