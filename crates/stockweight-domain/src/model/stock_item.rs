//! Inventory stock item definitions

use serde::{Deserialize, Serialize};

/// Row of the material inventory list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    /// Unique item code (e.g., "10.01.0155")
    pub code: String,
    /// Stock category (BARRA CHATA, CANTONEIRA, TUBO REDONDO, ...)
    #[serde(rename = "type")]
    pub item_type: String,
    pub description: String,
    #[serde(default)]
    pub current_balance: i64,
    /// Reorder threshold
    #[serde(default)]
    pub order_point: i64,
}

impl StockItem {
    /// Balance at or below the order point
    pub fn needs_reorder(&self) -> bool {
        self.current_balance <= self.order_point
    }

    /// Status label shown on the dashboard ("Reposição" or "OK")
    pub fn status_label(&self) -> &'static str {
        if self.needs_reorder() {
            "Reposição"
        } else {
            "OK"
        }
    }
}
