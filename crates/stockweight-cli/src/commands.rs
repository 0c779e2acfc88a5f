//! Command handlers

use std::path::PathBuf;

use stockweight_app::config::Config;
use stockweight_app::export::{export_batch_to_excel, export_inventory_to_excel};
use stockweight_app::{load_batch_csv, open_dashboard_service, run_batch};
use stockweight_domain::model::{DimensionField, DimensionSet, ShapeKind};
use stockweight_domain::service::{calculate, calculate_by_name, parse_dimension};
use stockweight_types::{OutputFormat, Result};
use tracing::debug;

use crate::cli::{Cli, Commands, DashboardAction, DimensionArgs, InventoryAction};
use crate::output::{
    output_batch, output_materials, output_revenue, output_shapes, output_stats,
    output_stock_item, output_stock_items, output_weight,
};

pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    debug!(format = %config.output_format, "configuration loaded");
    let format = config.output_format;

    match cli.command {
        Commands::Calc {
            material,
            shape,
            dimensions,
        } => cmd_calc(&config, material, shape, &dimensions),

        Commands::Shapes => output_shapes(format),

        Commands::Materials => output_materials(format),

        Commands::Batch { input, output } => cmd_batch(format, input, output),

        Commands::Inventory { action } => match action {
            InventoryAction::List {
                source,
                reorder,
                output,
            } => cmd_inventory_list(&config, source, reorder, output),
            InventoryAction::Show { code, source } => cmd_inventory_show(&config, &code, source),
        },

        Commands::Dashboard { action } => cmd_dashboard(&config, action),

        Commands::Config {
            show,
            set_output,
            set_material,
            set_shape,
            set_inventory,
            reset,
        } => cmd_config(show, set_output, set_material, set_shape, set_inventory, reset),
    }
}

fn collect_dimensions(args: &DimensionArgs) -> DimensionSet {
    [
        (DimensionField::A, &args.a),
        (DimensionField::L, &args.l),
        (DimensionField::L1, &args.l1),
        (DimensionField::L2, &args.l2),
        (DimensionField::C, &args.c),
        (DimensionField::D, &args.d),
        (DimensionField::E, &args.e),
    ]
    .into_iter()
    .fold(DimensionSet::new(), |dims, (field, text)| match text {
        Some(text) => dims.with(field, parse_dimension(text)),
        None => dims,
    })
}

fn cmd_calc(
    config: &Config,
    material: Option<String>,
    shape: Option<String>,
    args: &DimensionArgs,
) -> Result<()> {
    let shape = match shape {
        Some(name) => name.parse::<ShapeKind>()?,
        None => config.default_shape,
    };

    let dimensions = collect_dimensions(args);
    for (field, _) in dimensions.entries() {
        if !shape.uses(field) {
            eprintln!("Note: {} is not used by {}, ignoring", field.key(), shape);
        }
    }

    let result = match material {
        Some(name) => calculate_by_name(&name, shape, &dimensions)?,
        None => calculate(config.default_material, shape, &dimensions),
    };
    output_weight(config.output_format, &result)
}

fn cmd_batch(format: OutputFormat, input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let pieces = load_batch_csv(&input)?;
    let results = run_batch(pieces);
    output_batch(format, &results)?;

    if let Some(output_path) = output {
        export_batch_to_excel(&results, &output_path)?;
        eprintln!("Exported to: {}", output_path.display());
    }
    Ok(())
}

fn with_source(config: &Config, source: Option<PathBuf>) -> Config {
    match source {
        Some(path) => Config {
            inventory_path: Some(path),
            ..config.clone()
        },
        None => config.clone(),
    }
}

fn cmd_inventory_list(
    config: &Config,
    source: Option<PathBuf>,
    reorder: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let service = open_dashboard_service(&with_source(config, source))?;
    let items = if reorder {
        service.reorder_alerts()?
    } else {
        service.materials()?
    };
    output_stock_items(config.output_format, &items)?;

    if let Some(output_path) = output {
        export_inventory_to_excel(&items, &output_path)?;
        eprintln!("Exported to: {}", output_path.display());
    }
    Ok(())
}

fn cmd_inventory_show(config: &Config, code: &str, source: Option<PathBuf>) -> Result<()> {
    let service = open_dashboard_service(&with_source(config, source))?;
    let item = service.material(code)?;
    output_stock_item(config.output_format, &item)
}

fn cmd_dashboard(config: &Config, action: DashboardAction) -> Result<()> {
    let service = open_dashboard_service(config)?;
    match action {
        DashboardAction::Revenue => output_revenue(config.output_format, &service.revenue()?),
        DashboardAction::Stats => output_stats(config.output_format, &service.stats()?),
    }
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_material: Option<String>,
    set_shape: Option<String>,
    set_inventory: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(material) = set_material {
        config.default_material = material.parse()?;
        modified = true;
    }

    if let Some(shape) = set_shape {
        config.default_shape = shape.parse()?;
        modified = true;
    }

    if let Some(path) = set_inventory {
        config.inventory_path = Some(path);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockweight_types::Error;

    #[test]
    fn test_calc_rejects_unknown_material() {
        let err = cmd_calc(
            &Config::default(),
            Some("Titanium".to_string()),
            None,
            &DimensionArgs::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownMaterial(ref name) if name == "Titanium"));
    }

    #[test]
    fn test_collect_dimensions_parses_text() {
        let args = DimensionArgs {
            d: Some("31,75".to_string()),
            e: Some("1".to_string()),
            c: Some("abc".to_string()),
            ..DimensionArgs::default()
        };
        let dims = collect_dimensions(&args);
        assert_eq!(dims.get(DimensionField::D), 31.75);
        assert_eq!(dims.get(DimensionField::E), 1.0);
        assert_eq!(dims.get(DimensionField::C), 0.0);
        assert_eq!(dims.get(DimensionField::A), 0.0);
    }

    #[test]
    fn test_with_source_overrides_inventory_only() {
        let config = Config {
            output_format: OutputFormat::Json,
            ..Config::default()
        };
        let overridden = with_source(&config, Some(PathBuf::from("estoque.toml")));
        assert_eq!(overridden.inventory_path, Some(PathBuf::from("estoque.toml")));
        assert_eq!(overridden.output_format, OutputFormat::Json);
        assert_eq!(with_source(&config, None), config);
    }
}
