//! Weight calculation functions for metal stock

use serde::Serialize;
use stockweight_types::Result;

use super::formatter::format_weight;
use super::geometry::{area_cm2, volume_cm3};
use crate::model::{DimensionSet, MaterialKind, ShapeKind};

/// Density in g/cm³
pub fn density(material: MaterialKind) -> f64 {
    material.density()
}

pub fn calculate_weight_explicit(volume_cm3: f64, density_g_cm3: f64) -> f64 {
    volume_cm3 * density_g_cm3 / 1000.0
}

/// Mass in kilograms of one piece
pub fn weight_kg(material: MaterialKind, shape: ShapeKind, dims: &DimensionSet) -> f64 {
    calculate_weight_explicit(volume_cm3(shape, dims), density(material))
}

/// Every intermediate value of one calculation, for display and export
#[derive(Debug, Clone, Serialize)]
pub struct WeightBreakdown {
    pub material: MaterialKind,
    pub shape: ShapeKind,
    pub dimensions: DimensionSet,
    pub area_cm2: f64,
    pub volume_cm3: f64,
    pub density_g_cm3: f64,
    pub weight_kg: f64,
    pub display: String,
}

pub fn calculate(material: MaterialKind, shape: ShapeKind, dims: &DimensionSet) -> WeightBreakdown {
    let dimensions = dims.restricted_to(shape);
    let weight = weight_kg(material, shape, &dimensions);
    WeightBreakdown {
        material,
        shape,
        dimensions,
        area_cm2: area_cm2(shape, &dimensions),
        volume_cm3: volume_cm3(shape, &dimensions),
        density_g_cm3: density(material),
        weight_kg: weight,
        display: format_weight(weight),
    }
}

/// [`calculate`] with the material given by name; names outside the table
/// fail with `UnknownMaterial` instead of falling back to a default density
pub fn calculate_by_name(
    material: &str,
    shape: ShapeKind,
    dims: &DimensionSet,
) -> Result<WeightBreakdown> {
    let material = material.parse::<MaterialKind>()?;
    Ok(calculate(material, shape, dims))
}
