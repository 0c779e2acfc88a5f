//! Excel export functionality

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;
use stockweight_domain::model::{DimensionField, StockItem};
use stockweight_types::{Error, Result};
use tracing::info;

use crate::batch::BatchResults;

fn excel_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export batch results to an Excel file (Summary and Details sheets)
pub fn export_batch_to_excel(results: &BatchResults, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, results)?;

    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, results)?;

    workbook.save(output_path).map_err(excel_err)?;
    info!(path = %output_path.display(), rows = results.entries.len(), "wrote batch workbook");
    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, results: &BatchResults) -> Result<()> {
    sheet.set_name("Summary").map_err(excel_err)?;
    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Stock Weight Report", &header_format)
        .map_err(excel_err)?;

    sheet.write_string(2, 0, "Generated:").map_err(excel_err)?;
    sheet
        .write_string(2, 1, results.generated_at.to_rfc3339())
        .map_err(excel_err)?;

    sheet.write_string(3, 0, "Rows:").map_err(excel_err)?;
    sheet
        .write_number(3, 1, results.entries.len() as f64)
        .map_err(excel_err)?;

    sheet.write_string(4, 0, "Pieces:").map_err(excel_err)?;
    sheet
        .write_number(4, 1, results.total_pieces as f64)
        .map_err(excel_err)?;

    sheet.write_string(5, 0, "Total weight (kg):").map_err(excel_err)?;
    sheet
        .write_number(5, 1, results.total_weight_kg)
        .map_err(excel_err)?;

    // Weight per material
    sheet
        .write_string_with_format(7, 0, "Weight by Material", &header_format)
        .map_err(excel_err)?;

    let mut by_material: Vec<(String, f64)> = Vec::new();
    for entry in &results.entries {
        let label = entry.piece.material.label_pt().to_string();
        match by_material.iter_mut().find(|(name, _)| *name == label) {
            Some((_, kg)) => *kg += entry.total_weight_kg,
            None => by_material.push((label, entry.total_weight_kg)),
        }
    }

    for (offset, (material, kg)) in by_material.iter().enumerate() {
        let row = 8 + offset as u32;
        sheet.write_string(row, 0, material).map_err(excel_err)?;
        sheet.write_number(row, 1, *kg).map_err(excel_err)?;
    }

    Ok(())
}

fn write_details_sheet(sheet: &mut Worksheet, results: &BatchResults) -> Result<()> {
    sheet.set_name("Details").map_err(excel_err)?;
    let header_format = Format::new().set_bold();
    let weight_format = Format::new().set_num_format("0.000");

    let mut headers = vec!["Row", "Label", "Material", "Shape"];
    headers.extend(DimensionField::ALL.iter().map(|f| f.key()));
    headers.extend(["Quantity", "Unit (kg)", "Total (kg)"]);

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (row_idx, entry) in results.entries.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let piece = &entry.piece;

        sheet
            .write_number(row, 0, piece.row as f64)
            .map_err(excel_err)?;
        sheet
            .write_string(row, 1, piece.label.as_deref().unwrap_or(""))
            .map_err(excel_err)?;
        sheet
            .write_string(row, 2, piece.material.label_pt())
            .map_err(excel_err)?;
        sheet
            .write_string(row, 3, piece.shape.label_pt())
            .map_err(excel_err)?;

        let mut col: u16 = 4;
        for field in DimensionField::ALL {
            if piece.shape.uses(field) {
                sheet
                    .write_number(row, col, piece.dimensions.get(field))
                    .map_err(excel_err)?;
            }
            col += 1;
        }

        sheet
            .write_number(row, col, f64::from(piece.quantity))
            .map_err(excel_err)?;
        sheet
            .write_number_with_format(row, col + 1, entry.unit_weight_kg, &weight_format)
            .map_err(excel_err)?;
        sheet
            .write_number_with_format(row, col + 2, entry.total_weight_kg, &weight_format)
            .map_err(excel_err)?;
    }

    sheet.autofit();
    Ok(())
}

/// Export the stock list with the reorder status per item
pub fn export_inventory_to_excel(items: &[StockItem], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Estoque").map_err(excel_err)?;
    let header_format = Format::new().set_bold();

    let headers = ["Código", "Tipo", "Descrição", "Saldo", "Ponto de Pedido", "Status"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (row_idx, item) in items.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        sheet.write_string(row, 0, &item.code).map_err(excel_err)?;
        sheet.write_string(row, 1, &item.item_type).map_err(excel_err)?;
        sheet.write_string(row, 2, &item.description).map_err(excel_err)?;
        sheet
            .write_number(row, 3, item.current_balance as f64)
            .map_err(excel_err)?;
        sheet
            .write_number(row, 4, item.order_point as f64)
            .map_err(excel_err)?;
        sheet
            .write_string(row, 5, item.status_label())
            .map_err(excel_err)?;
    }

    sheet.autofit();
    workbook.save(output_path).map_err(excel_err)?;
    info!(path = %output_path.display(), rows = items.len(), "wrote inventory workbook");
    Ok(())
}
