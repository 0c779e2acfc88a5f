//! Repository trait definitions for inventory and dashboard data

use crate::model::{RevenueEntry, StatCard, StockItem};
use stockweight_types::Error;

/// Repository for the material inventory list
pub trait InventoryRepository {
    /// Load all stock items
    fn find_all(&self) -> Result<Vec<StockItem>, Error>;

    /// Find a stock item by its unique code
    fn find_by_code(&self, code: &str) -> Result<Option<StockItem>, Error>;

    /// Insert new rows; rows whose code already exists are skipped
    fn insert_many(&mut self, items: Vec<StockItem>) -> Result<usize, Error>;

    fn is_empty(&self) -> Result<bool, Error> {
        Ok(self.find_all()?.is_empty())
    }
}

/// Repository for dashboard charts and stat cards
pub trait DashboardRepository {
    fn revenue(&self) -> Result<Vec<RevenueEntry>, Error>;

    fn stats(&self) -> Result<Vec<StatCard>, Error>;

    fn insert_revenue(&mut self, rows: Vec<RevenueEntry>) -> Result<(), Error>;

    fn insert_stats(&mut self, rows: Vec<StatCard>) -> Result<(), Error>;
}
