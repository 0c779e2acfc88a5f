//! Read-side queries for the inventory list and dashboard

use stockweight_domain::model::{RevenueEntry, StatCard, StockItem};
use stockweight_domain::repository::{DashboardRepository, InventoryRepository};
use stockweight_infra::seed::seed_if_empty;
use stockweight_types::{Error, Result};
use tracing::debug;

/// Query service over an inventory and a dashboard repository
pub struct DashboardService<I, D> {
    inventory: I,
    dashboard: D,
}

impl<I, D> DashboardService<I, D>
where
    I: InventoryRepository,
    D: DashboardRepository,
{
    /// Wrap the repositories and seed whichever of them is empty
    pub fn new(mut inventory: I, mut dashboard: D) -> Result<Self> {
        seed_if_empty(&mut inventory, &mut dashboard)?;
        Ok(Self {
            inventory,
            dashboard,
        })
    }

    pub fn materials(&self) -> Result<Vec<StockItem>> {
        self.inventory.find_all()
    }

    /// Single stock item; unknown codes yield `MaterialNotFound`
    pub fn material(&self, code: &str) -> Result<StockItem> {
        debug!(code, "looking up stock item");
        self.inventory
            .find_by_code(code)?
            .ok_or_else(|| Error::MaterialNotFound(code.to_string()))
    }

    pub fn revenue(&self) -> Result<Vec<RevenueEntry>> {
        self.dashboard.revenue()
    }

    pub fn stats(&self) -> Result<Vec<StatCard>> {
        self.dashboard.stats()
    }

    /// Items at or below their order point
    pub fn reorder_alerts(&self) -> Result<Vec<StockItem>> {
        Ok(self
            .materials()?
            .into_iter()
            .filter(StockItem::needs_reorder)
            .collect())
    }
}
