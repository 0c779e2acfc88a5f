//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use stockweight_types::OutputFormat;

#[derive(Parser)]
#[command(name = "stockweight")]
#[command(version)]
#[command(about = "Weight calculator for metal bars, tubes, sheets and profiles")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Dimension inputs in millimeters; comma or dot decimals
#[derive(Args, Debug, Default)]
pub struct DimensionArgs {
    /// Side of a square bar, or across flats of a hexagonal bar
    #[arg(long = "a", value_name = "MM")]
    pub a: Option<String>,

    /// Width of bars, sheets and profiles; side of a square tube
    #[arg(long = "l", value_name = "MM")]
    pub l: Option<String>,

    /// Width of a rectangular tube
    #[arg(long = "l1", value_name = "MM")]
    pub l1: Option<String>,

    /// Height of a rectangular tube
    #[arg(long = "l2", value_name = "MM")]
    pub l2: Option<String>,

    /// Length of the piece
    #[arg(long = "c", value_name = "MM")]
    pub c: Option<String>,

    /// Diameter of a round bar or tube
    #[arg(long = "d", value_name = "MM")]
    pub d: Option<String>,

    /// Thickness or wall
    #[arg(long = "e", value_name = "MM")]
    pub e: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the weight of one piece
    Calc {
        /// Material name, Portuguese label or slug. Uses config value if not specified.
        #[arg(long, short = 'm')]
        material: Option<String>,

        /// Shape name, Portuguese label or slug. Uses config value if not specified.
        #[arg(long, short = 's')]
        shape: Option<String>,

        #[command(flatten)]
        dimensions: DimensionArgs,
    },

    /// List shapes with their dimension fields
    Shapes,

    /// List materials with their densities
    Materials,

    /// Compute weights for every row of a cut list CSV
    Batch {
        /// Path to CSV file
        input: PathBuf,

        /// Write an Excel workbook with the results
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Browse the stock list
    Inventory {
        #[command(subcommand)]
        action: InventoryAction,
    },

    /// Show dashboard data
    Dashboard {
        #[command(subcommand)]
        action: DashboardAction,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default material for calc
        #[arg(long)]
        set_material: Option<String>,

        /// Set default shape for calc
        #[arg(long)]
        set_shape: Option<String>,

        /// Set inventory file (.csv or .toml)
        #[arg(long)]
        set_inventory: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum InventoryAction {
    /// List stock items
    List {
        /// Read items from this file instead of the configured source
        #[arg(long)]
        source: Option<PathBuf>,

        /// Only items at or below their order point
        #[arg(long)]
        reorder: bool,

        /// Write the list to an Excel workbook
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show one stock item by code
    Show {
        code: String,

        /// Read items from this file instead of the configured source
        #[arg(long)]
        source: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum DashboardAction {
    /// Monthly revenue and expenses
    Revenue,
    /// Summary cards
    Stats,
}
