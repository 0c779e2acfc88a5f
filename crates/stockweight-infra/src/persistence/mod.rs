//! In-memory repository implementations

pub mod memory_dashboard_repo;
pub mod memory_inventory_repo;

pub use memory_dashboard_repo::MemoryDashboardRepository;
pub use memory_inventory_repo::MemoryInventoryRepository;
