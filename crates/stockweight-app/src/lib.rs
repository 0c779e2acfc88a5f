//! Application layer: calculator session, batch runs, dashboard queries,
//! configuration and export

pub mod app;
pub mod batch;
pub mod calculator;
pub mod config;
pub mod export;
pub mod logging;
pub mod repository;

pub use app::DashboardService;
pub use batch::{load_batch_csv, parse_batch, run_batch, BatchEntry, BatchPiece, BatchResults};
pub use calculator::CalculatorSession;
pub use config::Config;
pub use logging::init_logging;
pub use repository::{open_dashboard_service, open_inventory_repo, DefaultDashboardService};
