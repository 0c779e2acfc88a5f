//! Batch weight calculation from a cut list
//!
//! CSV header: `material,shape` followed by any of `A,L,L1,L2,C,D,E`, plus
//! optional `quantity` and `label` columns.

use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;
use stockweight_domain::model::{DimensionField, DimensionSet, MaterialKind, ShapeKind};
use stockweight_domain::service::{format_weight, parse_dimension, weight_kg};
use stockweight_infra::encoding::decode_text;
use stockweight_types::{Error, Result};
use tracing::{debug, info};

/// One line of a cut list
#[derive(Debug, Clone, Serialize)]
pub struct BatchPiece {
    pub row: usize,
    pub label: Option<String>,
    pub material: MaterialKind,
    pub shape: ShapeKind,
    pub dimensions: DimensionSet,
    pub quantity: u32,
}

/// Computed weight for one line
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    #[serde(flatten)]
    pub piece: BatchPiece,
    pub unit_weight_kg: f64,
    pub total_weight_kg: f64,
    pub display: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchResults {
    pub generated_at: DateTime<Local>,
    pub entries: Vec<BatchEntry>,
    pub total_pieces: u64,
    pub total_weight_kg: f64,
}

impl BatchResults {
    pub fn total_display(&self) -> String {
        format_weight(self.total_weight_kg)
    }
}

pub fn load_batch_csv(path: &Path) -> Result<Vec<BatchPiece>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    parse_batch(&decode_text(&bytes))
}

pub fn parse_batch(content: &str) -> Result<Vec<BatchPiece>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();
    let column = |name: &str| headers.iter().position(|h| h == name);
    let material_col = column("material").ok_or_else(|| Error::InvalidBatchRow {
        row: 1,
        reason: "missing material column".to_string(),
    })?;
    let shape_col = column("shape").ok_or_else(|| Error::InvalidBatchRow {
        row: 1,
        reason: "missing shape column".to_string(),
    })?;
    let quantity_col = column("quantity");
    let label_col = column("label");
    let field_cols: Vec<(DimensionField, usize)> = DimensionField::ALL
        .into_iter()
        .filter_map(|f| column(&f.key().to_lowercase()).map(|c| (f, c)))
        .collect();

    let mut pieces = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        // Source line, so blank lines and multi-line quoted cells count
        let row = record
            .position()
            .map_or(row_idx + 2, |pos| pos.line() as usize);
        let cell = |col: usize| record.get(col).unwrap_or("");

        if record.iter().all(str::is_empty) {
            continue;
        }

        let material = cell(material_col)
            .parse::<MaterialKind>()
            .map_err(|e| Error::InvalidBatchRow {
                row,
                reason: e.to_string(),
            })?;
        let shape = cell(shape_col)
            .parse::<ShapeKind>()
            .map_err(|e| Error::InvalidBatchRow {
                row,
                reason: e.to_string(),
            })?;

        let dimensions = field_cols
            .iter()
            .fold(DimensionSet::new(), |dims, (field, col)| {
                dims.with(*field, parse_dimension(cell(*col)))
            });

        let quantity = match quantity_col.map(cell).filter(|q| !q.is_empty()) {
            None => 1,
            Some(q) => q.parse::<u32>().map_err(|_| Error::InvalidBatchRow {
                row,
                reason: format!("invalid quantity: {}", q),
            })?,
        };

        let label = label_col
            .map(cell)
            .filter(|l| !l.is_empty())
            .map(str::to_string);

        pieces.push(BatchPiece {
            row,
            label,
            material,
            shape,
            dimensions: dimensions.restricted_to(shape),
            quantity,
        });
    }
    debug!(count = pieces.len(), "parsed batch rows");
    Ok(pieces)
}

pub fn run_batch(pieces: Vec<BatchPiece>) -> BatchResults {
    let entries: Vec<BatchEntry> = pieces
        .into_iter()
        .map(|piece| {
            let unit = weight_kg(piece.material, piece.shape, &piece.dimensions);
            let total = unit * f64::from(piece.quantity);
            BatchEntry {
                piece,
                unit_weight_kg: unit,
                total_weight_kg: total,
                display: format_weight(unit),
            }
        })
        .collect();

    let total_pieces: u64 = entries.iter().map(|e| u64::from(e.piece.quantity)).sum();
    let total_weight_kg: f64 = entries.iter().map(|e| e.total_weight_kg).sum();
    info!(rows = entries.len(), total_pieces, total_weight_kg, "batch complete");

    BatchResults {
        generated_at: Local::now(),
        entries,
        total_pieces,
        total_weight_kg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUT_LIST: &str = "\
label,material,shape,A,L,E,D,C,quantity
barra,AÇO CARBONO,BARRA QUADRADA,10,,,,1000,3
tubo,Stainless Steel,round-tube,,,1,31.75,6000,
chapa,aluminum,CHAPA,,1000,\"2,5\",,2000,2
";

    #[test]
    fn test_parse_batch() {
        let pieces = parse_batch(CUT_LIST).unwrap();
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0].row, 2);
        assert_eq!(pieces[0].label.as_deref(), Some("barra"));
        assert_eq!(pieces[0].quantity, 3);
        assert_eq!(pieces[1].quantity, 1);
        assert_eq!(pieces[1].shape, ShapeKind::RoundTube);
        assert_eq!(pieces[2].dimensions.get(DimensionField::E), 2.5);
    }

    #[test]
    fn test_run_batch_totals() {
        let results = run_batch(parse_batch(CUT_LIST).unwrap());
        assert_eq!(results.total_pieces, 6);

        let bar = &results.entries[0];
        assert!((bar.unit_weight_kg - 0.785).abs() < 1e-9);
        assert!((bar.total_weight_kg - 2.355).abs() < 1e-9);

        // 100 × 0.25 × 200 cm³ of aluminum = 13.5 kg each
        let sheet = &results.entries[2];
        assert!((sheet.unit_weight_kg - 13.5).abs() < 1e-9);

        let sum: f64 = results.entries.iter().map(|e| e.total_weight_kg).sum();
        assert!((results.total_weight_kg - sum).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_material_names_row() {
        let csv = "material,shape,A,C\nCarbon Steel,square-bar,10,100\nTitanium,square-bar,10,100\n";
        let err = parse_batch(csv).unwrap_err();
        match err {
            Error::InvalidBatchRow { row, reason } => {
                assert_eq!(row, 3);
                assert!(reason.contains("Titanium"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_error_row_counts_blank_lines() {
        let csv = "material,shape,A,C\nbrass,square-bar,10,100\n\nTitanium,square-bar,10,100\n";
        match parse_batch(csv).unwrap_err() {
            Error::InvalidBatchRow { row, .. } => assert_eq!(row, 4),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_row_after_multiline_label() {
        let csv = "label,material,shape,A,C\n\"corte\nlongo\",brass,square-bar,10,100\nx,brass,square-bar,10,100\n";
        let pieces = parse_batch(csv).unwrap();
        assert_eq!(pieces[0].row, 2);
        assert_eq!(pieces[1].row, 4);
    }

    #[test]
    fn test_missing_shape_column() {
        let err = parse_batch("material,A,C\nbrass,10,10\n").unwrap_err();
        assert!(matches!(err, Error::InvalidBatchRow { row: 1, .. }));
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let csv = "material,shape,A,C\nbrass,square-bar,10,100\n,,,\n";
        assert_eq!(parse_batch(csv).unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_quantity() {
        let csv = "material,shape,A,C,quantity\nbrass,square-bar,10,100,two\n";
        assert!(matches!(
            parse_batch(csv),
            Err(Error::InvalidBatchRow { row: 2, .. })
        ));
    }
}
