//! Cross-section area and prism volume per shape
//!
//! Inputs are millimeters; every formula works in centimeters. Degenerate
//! walls (thickness past the centre line) are evaluated as written and can
//! produce a zero, undersized or negative area.

use std::f64::consts::PI;

use crate::model::{DimensionField, DimensionSet, ShapeKind};

fn mm_to_cm(mm: f64) -> f64 {
    mm / 10.0
}

/// Fields the volume formula reads for `shape`, length included
pub fn fields_for(shape: ShapeKind) -> Vec<DimensionField> {
    shape.fields()
}

/// Cross-section area in cm²
pub fn area_cm2(shape: ShapeKind, dims: &DimensionSet) -> f64 {
    let cm = |field| mm_to_cm(dims.get(field));
    let (a, l, l1, l2, d, e) = (
        cm(DimensionField::A),
        cm(DimensionField::L),
        cm(DimensionField::L1),
        cm(DimensionField::L2),
        cm(DimensionField::D),
        cm(DimensionField::E),
    );

    match shape {
        ShapeKind::SquareBar => a * a,
        ShapeKind::RectangularBar | ShapeKind::Coil | ShapeKind::Sheet => l * e,
        ShapeKind::RoundBar => {
            let radius = d / 2.0;
            PI * radius.powi(2)
        }
        ShapeKind::HexagonalBar => {
            // A is measured across flats
            let side = a / 3f64.sqrt();
            (3.0 * 3f64.sqrt() / 2.0) * side.powi(2)
        }
        ShapeKind::RoundTube => {
            let outer = d / 2.0;
            let inner = outer - e;
            PI * (outer.powi(2) - inner.powi(2))
        }
        ShapeKind::SquareTube => l.powi(2) - (l - 2.0 * e).powi(2),
        ShapeKind::RectangularTube => l1 * l2 - (l1 - 2.0 * e) * (l2 - 2.0 * e),
        ShapeKind::AngleProfile | ShapeKind::TeeProfile => l * e + (l - e) * e,
        ShapeKind::ChannelProfile => l * e + 2.0 * (l - e) * e,
    }
}

/// Prism volume in cm³ (area × length)
pub fn volume_cm3(shape: ShapeKind, dims: &DimensionSet) -> f64 {
    area_cm2(shape, dims) * mm_to_cm(dims.length())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(values: &[(DimensionField, f64)]) -> DimensionSet {
        values
            .iter()
            .fold(DimensionSet::new(), |d, (f, v)| d.with(*f, *v))
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    // ==========================================
    // Solid bars
    // ==========================================

    #[test]
    fn test_square_bar() {
        let d = dims(&[(DimensionField::A, 10.0), (DimensionField::C, 1000.0)]);
        assert_close(area_cm2(ShapeKind::SquareBar, &d), 1.0);
        assert_close(volume_cm3(ShapeKind::SquareBar, &d), 100.0);
    }

    #[test]
    fn test_flat_shapes_share_formula() {
        let d = dims(&[
            (DimensionField::L, 50.0),
            (DimensionField::E, 3.0),
            (DimensionField::C, 2000.0),
        ]);
        for shape in [ShapeKind::RectangularBar, ShapeKind::Coil, ShapeKind::Sheet] {
            assert_close(volume_cm3(shape, &d), 5.0 * 0.3 * 200.0);
        }
    }

    #[test]
    fn test_round_bar() {
        let d = dims(&[(DimensionField::D, 20.0), (DimensionField::C, 100.0)]);
        assert_close(area_cm2(ShapeKind::RoundBar, &d), PI);
        assert_close(volume_cm3(ShapeKind::RoundBar, &d), PI * 10.0);
    }

    #[test]
    fn test_hexagonal_bar_across_flats() {
        // Regular hexagon area = (√3 / 2) × flats²
        let d = dims(&[(DimensionField::A, 20.0), (DimensionField::C, 10.0)]);
        assert_close(area_cm2(ShapeKind::HexagonalBar, &d), 3f64.sqrt() / 2.0 * 4.0);
    }

    // ==========================================
    // Tubes
    // ==========================================

    #[test]
    fn test_round_tube() {
        // Ø50 × 2: π × (2.5² − 2.3²) = π × 0.96
        let d = dims(&[
            (DimensionField::D, 50.0),
            (DimensionField::E, 2.0),
            (DimensionField::C, 1000.0),
        ]);
        assert_close(area_cm2(ShapeKind::RoundTube, &d), PI * 0.96);
    }

    #[test]
    fn test_square_tube() {
        // 15 × 15 × 1.0: 1.5² − 1.3² = 0.56
        let d = dims(&[
            (DimensionField::L, 15.0),
            (DimensionField::E, 1.0),
            (DimensionField::C, 6000.0),
        ]);
        assert_close(area_cm2(ShapeKind::SquareTube, &d), 0.56);
        assert_close(volume_cm3(ShapeKind::SquareTube, &d), 0.56 * 600.0);
    }

    #[test]
    fn test_rectangular_tube() {
        // 40 × 20 × 2: 4 × 2 − 3.6 × 1.6 = 2.24
        let d = dims(&[
            (DimensionField::L1, 40.0),
            (DimensionField::L2, 20.0),
            (DimensionField::E, 2.0),
            (DimensionField::C, 10.0),
        ]);
        assert_close(area_cm2(ShapeKind::RectangularTube, &d), 2.24);
    }

    // ==========================================
    // Profiles
    // ==========================================

    #[test]
    fn test_angle_and_tee_profiles() {
        // 25.4 × 3.175 (1" × 1/8")
        let d = dims(&[
            (DimensionField::L, 25.4),
            (DimensionField::E, 3.175),
            (DimensionField::C, 10.0),
        ]);
        let expected = 2.54 * 0.3175 + (2.54 - 0.3175) * 0.3175;
        assert_close(area_cm2(ShapeKind::AngleProfile, &d), expected);
        assert_close(area_cm2(ShapeKind::TeeProfile, &d), expected);
    }

    #[test]
    fn test_channel_profile() {
        let d = dims(&[
            (DimensionField::L, 50.0),
            (DimensionField::E, 5.0),
            (DimensionField::C, 10.0),
        ]);
        assert_close(area_cm2(ShapeKind::ChannelProfile, &d), 5.0 * 0.5 + 2.0 * 4.5 * 0.5);
    }

    // ==========================================
    // Degenerate geometry is evaluated as written
    // ==========================================

    #[test]
    fn test_round_tube_wall_past_centre_is_not_clamped() {
        // outer radius 0.5, inner radius 0.5 − 0.8 = −0.3 → π × (0.25 − 0.09)
        let d = dims(&[
            (DimensionField::D, 10.0),
            (DimensionField::E, 8.0),
            (DimensionField::C, 1000.0),
        ]);
        assert_close(area_cm2(ShapeKind::RoundTube, &d), PI * 0.16);
        assert_close(volume_cm3(ShapeKind::RoundTube, &d), PI * 0.16 * 100.0);
    }

    #[test]
    fn test_square_tube_wall_at_half_width_is_solid() {
        let d = dims(&[
            (DimensionField::L, 10.0),
            (DimensionField::E, 5.0),
            (DimensionField::C, 10.0),
        ]);
        assert_close(area_cm2(ShapeKind::SquareTube, &d), 1.0);
    }

    #[test]
    fn test_channel_flange_thicker_than_web_goes_negative() {
        // 1 × 3 + 2 × (1 − 3) × 3 = −9
        let d = dims(&[
            (DimensionField::L, 10.0),
            (DimensionField::E, 30.0),
            (DimensionField::C, 10.0),
        ]);
        assert_close(area_cm2(ShapeKind::ChannelProfile, &d), 3.0 + 2.0 * (1.0 - 3.0) * 3.0);
        assert!(volume_cm3(ShapeKind::ChannelProfile, &d) < 0.0);
    }

    // ==========================================
    // Field isolation
    // ==========================================

    #[test]
    fn test_every_shape_has_positive_area_for_sane_input() {
        let d = dims(&[
            (DimensionField::A, 20.0),
            (DimensionField::L, 40.0),
            (DimensionField::L1, 50.0),
            (DimensionField::L2, 30.0),
            (DimensionField::D, 60.0),
            (DimensionField::E, 3.0),
            (DimensionField::C, 100.0),
        ]);
        for shape in ShapeKind::ALL {
            assert!(area_cm2(shape, &d) > 0.0, "{} has no area", shape);
            for field in shape.section_fields() {
                let zeroed = d.with(*field, 0.0);
                assert!(
                    area_cm2(shape, &zeroed) < area_cm2(shape, &d),
                    "{} ignores {}",
                    shape,
                    field
                );
            }
        }
    }

    #[test]
    fn test_foreign_fields_do_not_change_volume() {
        let full = dims(&[
            (DimensionField::A, 20.0),
            (DimensionField::L, 40.0),
            (DimensionField::L1, 50.0),
            (DimensionField::L2, 30.0),
            (DimensionField::D, 60.0),
            (DimensionField::E, 3.0),
            (DimensionField::C, 100.0),
        ]);
        for shape in ShapeKind::ALL {
            let only_own = full.restricted_to(shape);
            assert_eq!(volume_cm3(shape, &full), volume_cm3(shape, &only_own), "{}", shape);
        }
    }

    #[test]
    fn test_zero_length_has_zero_volume() {
        let d = dims(&[(DimensionField::A, 10.0)]);
        assert_eq!(volume_cm3(ShapeKind::SquareBar, &d), 0.0);
    }
}
