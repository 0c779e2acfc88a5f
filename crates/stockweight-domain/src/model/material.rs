//! Material-related type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stockweight_types::Error;

/// Metal alloy with a fixed density
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialKind {
    #[default]
    CarbonSteel,
    StainlessSteel,
    Aluminum,
    Copper,
    Brass,
    Bronze,
}

impl MaterialKind {
    /// Every material, in selector order
    pub const ALL: [MaterialKind; 6] = [
        MaterialKind::CarbonSteel,
        MaterialKind::StainlessSteel,
        MaterialKind::Aluminum,
        MaterialKind::Copper,
        MaterialKind::Brass,
        MaterialKind::Bronze,
    ];

    /// Display name (unique key)
    pub fn name(&self) -> &'static str {
        match self {
            MaterialKind::CarbonSteel => "Carbon Steel",
            MaterialKind::StainlessSteel => "Stainless Steel",
            MaterialKind::Aluminum => "Aluminum",
            MaterialKind::Copper => "Copper",
            MaterialKind::Brass => "Brass",
            MaterialKind::Bronze => "Bronze",
        }
    }

    /// Label shown on the shop floor
    pub fn label_pt(&self) -> &'static str {
        match self {
            MaterialKind::CarbonSteel => "AÇO CARBONO",
            MaterialKind::StainlessSteel => "AÇO INOX",
            MaterialKind::Aluminum => "ALUMÍNIO",
            MaterialKind::Copper => "COBRE",
            MaterialKind::Brass => "LATÃO",
            MaterialKind::Bronze => "BRONZE",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            MaterialKind::CarbonSteel => "carbon-steel",
            MaterialKind::StainlessSteel => "stainless-steel",
            MaterialKind::Aluminum => "aluminum",
            MaterialKind::Copper => "copper",
            MaterialKind::Brass => "brass",
            MaterialKind::Bronze => "bronze",
        }
    }

    /// Density in g/cm³
    pub fn density(&self) -> f64 {
        match self {
            MaterialKind::CarbonSteel => 7.85,
            MaterialKind::StainlessSteel => 8.0,
            MaterialKind::Aluminum => 2.7,
            MaterialKind::Copper => 8.96,
            MaterialKind::Brass => 8.5,
            MaterialKind::Bronze => 8.8,
        }
    }

    pub fn spec(&self) -> MaterialSpec {
        MaterialSpec {
            name: self.name().to_string(),
            density: self.density(),
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaterialKind {
    type Err = Error;

    /// Accepts the display name, the Portuguese label or the slug, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MaterialKind::ALL
            .into_iter()
            .find(|m| {
                m.name().to_lowercase() == wanted
                    || m.label_pt().to_lowercase() == wanted
                    || m.slug() == wanted
            })
            .ok_or_else(|| Error::UnknownMaterial(s.to_string()))
    }
}

/// Material properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Display name
    pub name: String,
    /// Density in g/cm³
    pub density: f64,
}
