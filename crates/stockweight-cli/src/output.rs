//! Output formatting module

use serde::Serialize;
use stockweight_app::BatchResults;
use stockweight_domain::model::{MaterialKind, RevenueEntry, ShapeKind, StatCard, StockItem};
use stockweight_domain::service::{format_decimal_pt_br, format_integer_pt_br, WeightBreakdown};
use stockweight_types::{OutputFormat, Result};

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

pub fn output_weight(format: OutputFormat, result: &WeightBreakdown) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(result);
    }

    println!("\nWeight Calculation");
    println!("==================");
    println!("Material:        {} ({})", result.material, result.material.label_pt());
    println!("Shape:           {} ({})", result.shape, result.shape.label_pt());
    for (field, value) in result.dimensions.entries() {
        println!("  {:<4} {:>10} mm", field.key(), format_decimal_pt_br(value, 2));
    }
    println!("Area:            {} cm²", format_decimal_pt_br(result.area_cm2, 4));
    println!("Volume:          {} cm³", format_decimal_pt_br(result.volume_cm3, 3));
    println!("Density:         {} g/cm³", format_decimal_pt_br(result.density_g_cm3, 2));
    println!("Weight:          {} kg", result.display);
    Ok(())
}

#[derive(Serialize)]
struct ShapeRow {
    slug: &'static str,
    name: &'static str,
    label: &'static str,
    fields: Vec<&'static str>,
    image: &'static str,
}

pub fn output_shapes(format: OutputFormat) -> Result<()> {
    let rows: Vec<ShapeRow> = ShapeKind::ALL
        .iter()
        .map(|s| ShapeRow {
            slug: s.slug(),
            name: s.name(),
            label: s.label_pt(),
            fields: s.fields().iter().map(|f| f.key()).collect(),
            image: s.image_id(),
        })
        .collect();

    if format == OutputFormat::Json {
        return print_json(&rows);
    }

    println!(
        "{:<18} {:<20} {:<16} {}",
        "SLUG", "LABEL", "FIELDS", "IMAGE"
    );
    println!("{}", "-".repeat(78));
    for row in &rows {
        println!(
            "{:<18} {:<20} {:<16} {}",
            row.slug,
            row.label,
            row.fields.join(", "),
            row.image
        );
    }
    Ok(())
}

pub fn output_materials(format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let specs: Vec<_> = MaterialKind::ALL.iter().map(|m| m.spec()).collect();
        return print_json(&specs);
    }

    println!("{:<18} {:<14} {:>14}", "SLUG", "LABEL", "DENSITY g/cm³");
    println!("{}", "-".repeat(48));
    for material in MaterialKind::ALL {
        println!(
            "{:<18} {:<14} {:>14}",
            material.slug(),
            material.label_pt(),
            format_decimal_pt_br(material.density(), 2)
        );
    }
    Ok(())
}

pub fn output_batch(format: OutputFormat, results: &BatchResults) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(results);
    }

    println!(
        "{:>4}  {:<14} {:<14} {:<18} {:>5} {:>12} {:>14}",
        "ROW", "LABEL", "MATERIAL", "SHAPE", "QTY", "UNIT kg", "TOTAL kg"
    );
    println!("{}", "-".repeat(89));
    for entry in &results.entries {
        let piece = &entry.piece;
        println!(
            "{:>4}  {:<14} {:<14} {:<18} {:>5} {:>12} {:>14}",
            piece.row,
            truncate(piece.label.as_deref().unwrap_or("-"), 14),
            piece.material.label_pt(),
            piece.shape.label_pt(),
            piece.quantity,
            entry.display,
            format_decimal_pt_br(entry.total_weight_kg, 3)
        );
    }
    println!("{}", "-".repeat(89));
    println!(
        "{} rows, {} pieces, {} kg",
        results.entries.len(),
        results.total_pieces,
        results.total_display()
    );
    Ok(())
}

pub fn output_stock_items(format: OutputFormat, items: &[StockItem]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(items);
    }

    if items.is_empty() {
        println!("No stock items.");
        return Ok(());
    }

    println!(
        "{:<12} {:<14} {:<48} {:>7} {:>7}  {}",
        "CODE", "TYPE", "DESCRIPTION", "SALDO", "PONTO", "STATUS"
    );
    println!("{}", "-".repeat(103));
    for item in items {
        println!(
            "{:<12} {:<14} {:<48} {:>7} {:>7}  {}",
            item.code,
            truncate(&item.item_type, 14),
            truncate(&item.description, 48),
            format_integer_pt_br(item.current_balance),
            format_integer_pt_br(item.order_point),
            item.status_label()
        );
    }
    Ok(())
}

pub fn output_stock_item(format: OutputFormat, item: &StockItem) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(item);
    }

    println!("Code:            {}", item.code);
    println!("Type:            {}", item.item_type);
    println!("Description:     {}", item.description);
    println!("Current balance: {}", format_integer_pt_br(item.current_balance));
    println!("Order point:     {}", format_integer_pt_br(item.order_point));
    println!("Status:          {}", item.status_label());
    Ok(())
}

pub fn output_revenue(format: OutputFormat, entries: &[RevenueEntry]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(entries);
    }

    println!("{:<6} {:>10} {:>10} {:>10}", "MONTH", "REVENUE", "EXPENSES", "NET");
    println!("{}", "-".repeat(39));
    for entry in entries {
        println!(
            "{:<6} {:>10} {:>10} {:>10}",
            entry.month,
            format_integer_pt_br(entry.revenue),
            format_integer_pt_br(entry.expenses),
            format_integer_pt_br(entry.net())
        );
    }
    Ok(())
}

pub fn output_stats(format: OutputFormat, cards: &[StatCard]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(cards);
    }

    for card in cards {
        let change = card
            .change
            .map(|c| format!("{} {}%", card.trend.arrow(), c))
            .unwrap_or_default();
        let progress = card
            .progress
            .filter(|p| *p > 0)
            .map(|p| format!("  [{}%]", p))
            .unwrap_or_default();
        println!("{:<24} {:>10}  {}{}", card.label, card.value, change, progress);
    }
    Ok(())
}
