//! Domain services

pub mod formatter;
pub mod geometry;
pub mod input;
pub mod weight_calculator;

pub use formatter::{format_decimal_pt_br, format_integer_pt_br, format_weight};
pub use geometry::{area_cm2, fields_for, volume_cm3};
pub use input::parse_dimension;
pub use weight_calculator::{
    calculate, calculate_by_name, density, weight_kg, WeightBreakdown,
};
