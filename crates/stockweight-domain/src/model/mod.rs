//! Domain model types

pub mod dashboard;
pub mod dimensions;
pub mod material;
pub mod shape;
pub mod stock_item;

pub use dashboard::{RevenueEntry, StatCard, Trend};
pub use dimensions::{normalize_mm, DimensionSet};
pub use material::{MaterialKind, MaterialSpec};
pub use shape::{DimensionField, ShapeKind};
pub use stock_item::StockItem;
