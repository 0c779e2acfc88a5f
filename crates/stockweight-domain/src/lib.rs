//! Domain layer: materials, shapes, geometry and weight rules

pub mod model;
pub mod repository;
pub mod service;

pub use model::*;
pub use repository::{DashboardRepository, InventoryRepository};
