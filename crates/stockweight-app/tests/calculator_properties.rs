//! Engine properties exercised through the calculator session

use stockweight_app::CalculatorSession;
use stockweight_domain::model::{DimensionField, MaterialKind, ShapeKind};

/// Plausible value for each field that keeps every shape non-degenerate
fn sane_value(field: DimensionField) -> &'static str {
    match field {
        DimensionField::A => "20",
        DimensionField::L => "40",
        DimensionField::L1 => "50",
        DimensionField::L2 => "30",
        DimensionField::C => "1000",
        DimensionField::D => "60",
        DimensionField::E => "3",
    }
}

fn filled(material: MaterialKind, shape: ShapeKind) -> CalculatorSession {
    let mut session = CalculatorSession::with_selection(material, shape);
    for field in shape.fields() {
        session.input(field, sane_value(field));
    }
    session
}

// ==========================================
// Reference values
// ==========================================

#[test]
fn test_square_bar_reference() {
    let mut session = CalculatorSession::new();
    session.input(DimensionField::A, "10");
    session.input(DimensionField::C, "1000");
    assert!((session.weight_kg() - 0.785).abs() < 1e-9);
    assert_eq!(session.display(), "0,785 kg");
}

#[test]
fn test_stainless_round_tube_reference() {
    let mut session =
        CalculatorSession::with_selection(MaterialKind::StainlessSteel, ShapeKind::RoundTube);
    session.input(DimensionField::D, "31,75");
    session.input(DimensionField::E, "1");
    session.input(DimensionField::C, "6000");
    let outer = 3.175_f64 / 2.0;
    let inner = outer - 0.1;
    let expected = std::f64::consts::PI * (outer * outer - inner * inner) * 600.0 * 8.0 / 1000.0;
    assert!((session.weight_kg() - expected).abs() < 1e-9);
}

#[test]
fn test_wall_thicker_than_radius_is_computed_as_is() {
    let mut session =
        CalculatorSession::with_selection(MaterialKind::CarbonSteel, ShapeKind::RoundTube);
    session.input(DimensionField::D, "10");
    session.input(DimensionField::E, "8");
    session.input(DimensionField::C, "10");
    // Inner radius is -0.3 cm; squaring it yields a positive annulus
    let expected = std::f64::consts::PI * (0.25 - 0.09) * 1.0 * 7.85 / 1000.0;
    assert!((session.weight_kg() - expected).abs() < 1e-12);
}

// ==========================================
// Properties over every material and shape
// ==========================================

#[test]
fn test_weight_grows_with_length() {
    for material in MaterialKind::ALL {
        for shape in ShapeKind::ALL {
            let mut session = filled(material, shape);
            let short = session.weight_kg();
            session.input(DimensionField::C, "2000");
            let long = session.weight_kg();
            assert!(short > 0.0, "{} {} should weigh something", material, shape);
            assert!(long > short, "{} {} not increasing in C", material, shape);
            assert!((long - 2.0 * short).abs() < 1e-9);
        }
    }
}

#[test]
fn test_unused_fields_do_not_matter() {
    for shape in ShapeKind::ALL {
        let mut session = filled(MaterialKind::Copper, shape);
        let before = session.weight_kg();
        for field in DimensionField::ALL {
            if !shape.uses(field) {
                session.input(field, "999");
            }
        }
        assert_eq!(session.weight_kg(), before, "{} reacted to a hidden field", shape);
    }
}

#[test]
fn test_zero_length_weighs_nothing() {
    for shape in ShapeKind::ALL {
        let mut session = filled(MaterialKind::Bronze, shape);
        session.input(DimensionField::C, "0");
        assert_eq!(session.weight_kg(), 0.0);
        assert_eq!(session.display(), "0 kg");
    }
}

#[test]
fn test_shape_switch_clears_section() {
    for shape in ShapeKind::ALL {
        let mut session = filled(MaterialKind::Aluminum, ShapeKind::SquareBar);
        session.select_shape(shape);
        assert_eq!(session.weight_kg(), 0.0, "switching to {} kept a weight", shape);
        assert_eq!(session.dimensions().length(), 1000.0);
    }
}

#[test]
fn test_heavier_material_weighs_more() {
    for shape in ShapeKind::ALL {
        let aluminum = filled(MaterialKind::Aluminum, shape).weight_kg();
        let copper = filled(MaterialKind::Copper, shape).weight_kg();
        let ratio = copper / aluminum;
        assert!((ratio - 8.96 / 2.7).abs() < 1e-9);
    }
}
