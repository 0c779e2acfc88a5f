//! Repository adapters for the configured data sources

use stockweight_domain::repository::InventoryRepository;
use stockweight_infra::load_stock_items;
use stockweight_infra::persistence::{MemoryDashboardRepository, MemoryInventoryRepository};
use stockweight_types::Result;
use tracing::info;

use crate::app::DashboardService;
use crate::config::Config;

pub type DefaultDashboardService =
    DashboardService<MemoryInventoryRepository, MemoryDashboardRepository>;

/// Open the inventory repository, pre-filled from the configured file if any
pub fn open_inventory_repo(config: &Config) -> Result<MemoryInventoryRepository> {
    let mut repo = MemoryInventoryRepository::new();
    if let Some(ref path) = config.inventory_path {
        let inserted = repo.insert_many(load_stock_items(path)?)?;
        info!(path = %path.display(), inserted, "loaded inventory file");
    }
    Ok(repo)
}

/// Open the dashboard service; empty repositories receive the default rows
pub fn open_dashboard_service(config: &Config) -> Result<DefaultDashboardService> {
    DashboardService::new(open_inventory_repo(config)?, MemoryDashboardRepository::new())
}
