//! Export functionality

pub mod excel;

pub use excel::{export_batch_to_excel, export_inventory_to_excel};
