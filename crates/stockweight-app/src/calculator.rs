//! Interactive calculator state
//!
//! Holds what a form would hold: the selected material and shape, the typed
//! dimensions and the weight they produce. Every edit recomputes the weight
//! from scratch through the pure engine; nothing is cached.

use serde::Serialize;
use stockweight_domain::model::{DimensionField, DimensionSet, MaterialKind, ShapeKind};
use stockweight_domain::service::{format_weight, parse_dimension, weight_kg};
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CalculatorSession {
    material: MaterialKind,
    shape: ShapeKind,
    dimensions: DimensionSet,
    weight_kg: f64,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a given material and shape with empty dimensions
    pub fn with_selection(material: MaterialKind, shape: ShapeKind) -> Self {
        let mut session = Self {
            material,
            shape,
            ..Self::default()
        };
        session.recompute();
        session
    }

    pub fn material(&self) -> MaterialKind {
        self.material
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn dimensions(&self) -> &DimensionSet {
        &self.dimensions
    }

    /// Fields the current shape shows, in form order
    pub fn visible_fields(&self) -> Vec<DimensionField> {
        self.shape.fields()
    }

    pub fn select_material(&mut self, material: MaterialKind) {
        self.material = material;
        self.recompute();
    }

    /// Switch shape; every field but the length is cleared
    pub fn select_shape(&mut self, shape: ShapeKind) {
        self.shape = shape;
        self.dimensions.reset_except_length();
        self.recompute();
    }

    /// Apply typed text to a field ("12,5", "" → 0)
    pub fn input(&mut self, field: DimensionField, text: &str) {
        self.set(field, parse_dimension(text));
    }

    pub fn set(&mut self, field: DimensionField, value_mm: f64) {
        self.dimensions.set(field, value_mm);
        self.recompute();
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Formatted weight with unit ("0,785 kg")
    pub fn display(&self) -> String {
        format!("{} kg", format_weight(self.weight_kg))
    }

    fn recompute(&mut self) {
        self.weight_kg = weight_kg(self.material, self.shape, &self.dimensions);
        debug!(
            material = %self.material,
            shape = %self.shape,
            weight_kg = self.weight_kg,
            "recomputed weight"
        );
    }
}
