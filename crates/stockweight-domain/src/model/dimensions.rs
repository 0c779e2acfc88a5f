//! Millimeter measurements describing one piece of stock

use serde::{Deserialize, Deserializer, Serialize};

use super::shape::{DimensionField, ShapeKind};

/// Clamp a measurement into the valid domain: finite and non-negative
pub fn normalize_mm(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn non_negative<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(|v| normalize_mm(v.unwrap_or_default()))
}

/// Dimension values in millimeters, keyed by field
///
/// Every stored value is finite and >= 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionSet {
    #[serde(rename = "A", default, deserialize_with = "non_negative")]
    a: f64,
    #[serde(rename = "L", default, deserialize_with = "non_negative")]
    l: f64,
    #[serde(rename = "L1", default, deserialize_with = "non_negative")]
    l1: f64,
    #[serde(rename = "L2", default, deserialize_with = "non_negative")]
    l2: f64,
    #[serde(rename = "C", default, deserialize_with = "non_negative")]
    c: f64,
    #[serde(rename = "D", default, deserialize_with = "non_negative")]
    d: f64,
    #[serde(rename = "E", default, deserialize_with = "non_negative")]
    e: f64,
}

impl DimensionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: DimensionField, value: f64) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: DimensionField) -> f64 {
        match field {
            DimensionField::A => self.a,
            DimensionField::L => self.l,
            DimensionField::L1 => self.l1,
            DimensionField::L2 => self.l2,
            DimensionField::C => self.c,
            DimensionField::D => self.d,
            DimensionField::E => self.e,
        }
    }

    /// Store a value; negative and non-finite input becomes 0
    pub fn set(&mut self, field: DimensionField, value: f64) {
        let value = normalize_mm(value);
        let slot = match field {
            DimensionField::A => &mut self.a,
            DimensionField::L => &mut self.l,
            DimensionField::L1 => &mut self.l1,
            DimensionField::L2 => &mut self.l2,
            DimensionField::C => &mut self.c,
            DimensionField::D => &mut self.d,
            DimensionField::E => &mut self.e,
        };
        *slot = value;
    }

    /// Length in millimeters
    pub fn length(&self) -> f64 {
        self.c
    }

    /// Zero every field except the length
    pub fn reset_except_length(&mut self) {
        *self = Self {
            c: self.c,
            ..Self::default()
        };
    }

    /// Copy holding only the fields `shape` consumes
    pub fn restricted_to(&self, shape: ShapeKind) -> Self {
        DimensionField::ALL
            .into_iter()
            .filter(|f| shape.uses(*f))
            .fold(Self::default(), |dims, f| dims.with(f, self.get(f)))
    }

    /// Non-zero fields, in field order
    pub fn entries(&self) -> Vec<(DimensionField, f64)> {
        DimensionField::ALL
            .into_iter()
            .map(|f| (f, self.get(f)))
            .filter(|(_, v)| *v > 0.0)
            .collect()
    }
}
