//! Cross-section families and their dimension fields

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stockweight_types::Error;

/// Named millimeter measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DimensionField {
    A,
    L,
    L1,
    L2,
    C,
    D,
    E,
}

impl DimensionField {
    pub const ALL: [DimensionField; 7] = [
        DimensionField::A,
        DimensionField::L,
        DimensionField::L1,
        DimensionField::L2,
        DimensionField::C,
        DimensionField::D,
        DimensionField::E,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DimensionField::A => "A",
            DimensionField::L => "L",
            DimensionField::L1 => "L1",
            DimensionField::L2 => "L2",
            DimensionField::C => "C",
            DimensionField::D => "D",
            DimensionField::E => "E",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DimensionField::A => "side / across flats",
            DimensionField::L => "width",
            DimensionField::L1 => "outer width",
            DimensionField::L2 => "outer height",
            DimensionField::C => "length",
            DimensionField::D => "diameter",
            DimensionField::E => "thickness",
        }
    }
}

impl fmt::Display for DimensionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DimensionField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        DimensionField::ALL
            .into_iter()
            .find(|f| f.key() == wanted)
            .ok_or_else(|| format!("unknown dimension field: {}", s))
    }
}

/// Cross-section family of metal stock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    #[default]
    SquareBar,
    RectangularBar,
    Coil,
    Sheet,
    RoundBar,
    HexagonalBar,
    RoundTube,
    SquareTube,
    RectangularTube,
    AngleProfile,
    TeeProfile,
    ChannelProfile,
}

impl ShapeKind {
    /// Every shape, in selector order
    pub const ALL: [ShapeKind; 12] = [
        ShapeKind::SquareBar,
        ShapeKind::RectangularBar,
        ShapeKind::Coil,
        ShapeKind::Sheet,
        ShapeKind::RoundBar,
        ShapeKind::HexagonalBar,
        ShapeKind::RoundTube,
        ShapeKind::SquareTube,
        ShapeKind::RectangularTube,
        ShapeKind::AngleProfile,
        ShapeKind::TeeProfile,
        ShapeKind::ChannelProfile,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::SquareBar => "Square Bar",
            ShapeKind::RectangularBar => "Rectangular Bar",
            ShapeKind::Coil => "Coil",
            ShapeKind::Sheet => "Sheet",
            ShapeKind::RoundBar => "Round Bar",
            ShapeKind::HexagonalBar => "Hexagonal Bar",
            ShapeKind::RoundTube => "Round Tube",
            ShapeKind::SquareTube => "Square Tube",
            ShapeKind::RectangularTube => "Rectangular Tube",
            ShapeKind::AngleProfile => "Angle Profile (L)",
            ShapeKind::TeeProfile => "Tee Profile (T)",
            ShapeKind::ChannelProfile => "Channel Profile (U)",
        }
    }

    pub fn label_pt(&self) -> &'static str {
        match self {
            ShapeKind::SquareBar => "BARRA QUADRADA",
            ShapeKind::RectangularBar => "BARRA RETANGULAR",
            ShapeKind::Coil => "BOBINA",
            ShapeKind::Sheet => "CHAPA",
            ShapeKind::RoundBar => "BARRA REDONDA",
            ShapeKind::HexagonalBar => "BARRA SEXTAVADA",
            ShapeKind::RoundTube => "TUBO REDONDO",
            ShapeKind::SquareTube => "TUBO QUADRADO",
            ShapeKind::RectangularTube => "TUBO RETANGULAR",
            ShapeKind::AngleProfile => "PERFIL L",
            ShapeKind::TeeProfile => "PERFIL T",
            ShapeKind::ChannelProfile => "PERFIL U",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ShapeKind::SquareBar => "square-bar",
            ShapeKind::RectangularBar => "rectangular-bar",
            ShapeKind::Coil => "coil",
            ShapeKind::Sheet => "sheet",
            ShapeKind::RoundBar => "round-bar",
            ShapeKind::HexagonalBar => "hexagonal-bar",
            ShapeKind::RoundTube => "round-tube",
            ShapeKind::SquareTube => "square-tube",
            ShapeKind::RectangularTube => "rectangular-tube",
            ShapeKind::AngleProfile => "angle-profile",
            ShapeKind::TeeProfile => "tee-profile",
            ShapeKind::ChannelProfile => "channel-profile",
        }
    }

    /// Reference image identifier (presentation only)
    pub fn image_id(&self) -> &'static str {
        match self {
            ShapeKind::SquareBar => "barra-quadrada-aco",
            ShapeKind::RectangularBar => "barra-retangular-aco",
            ShapeKind::Coil => "bobina-aco",
            ShapeKind::Sheet => "chapa-aco",
            ShapeKind::RoundBar => "barra-redonda-aco",
            ShapeKind::HexagonalBar => "barra-sextavada-aco",
            ShapeKind::RoundTube => "tubo-redondo-aco",
            ShapeKind::SquareTube => "tubo-quadrado-aco",
            ShapeKind::RectangularTube => "tubo-retangular-aco",
            ShapeKind::AngleProfile => "perfil-l-aco",
            ShapeKind::TeeProfile => "perfil-t-aco",
            ShapeKind::ChannelProfile => "perfil-u-aco",
        }
    }

    /// Cross-section fields, excluding the common length `C`
    pub fn section_fields(&self) -> &'static [DimensionField] {
        use DimensionField::*;
        match self {
            ShapeKind::SquareBar | ShapeKind::HexagonalBar => &[A],
            ShapeKind::RoundBar => &[D],
            ShapeKind::RoundTube => &[D, E],
            ShapeKind::RectangularTube => &[L1, L2, E],
            ShapeKind::RectangularBar
            | ShapeKind::Coil
            | ShapeKind::Sheet
            | ShapeKind::SquareTube
            | ShapeKind::AngleProfile
            | ShapeKind::TeeProfile
            | ShapeKind::ChannelProfile => &[L, E],
        }
    }

    /// Fields the volume formula consumes, in form order (length last)
    pub fn fields(&self) -> Vec<DimensionField> {
        let mut fields = self.section_fields().to_vec();
        fields.push(DimensionField::C);
        fields
    }

    pub fn uses(&self, field: DimensionField) -> bool {
        field == DimensionField::C || self.section_fields().contains(&field)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    /// Accepts the display name, the Portuguese label or the slug, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ShapeKind::ALL
            .into_iter()
            .find(|shape| {
                shape.name().to_lowercase() == wanted
                    || shape.label_pt().to_lowercase() == wanted
                    || shape.slug() == wanted
            })
            .ok_or_else(|| Error::UnknownShape(s.to_string()))
    }
}
