//! Dashboard chart and stat card rows

use serde::{Deserialize, Serialize};

/// Monthly revenue bar (expenses are stored negative)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueEntry {
    pub month: String,
    pub revenue: i64,
    pub expenses: i64,
}

impl RevenueEntry {
    pub fn net(&self) -> i64 {
        self.revenue + self.expenses
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Neutral => "-",
        }
    }
}

/// Headline stat card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    /// Preformatted display value ("1.240 un", "94%")
    pub value: String,
    /// Percentage change
    pub change: Option<i64>,
    #[serde(default)]
    pub trend: Trend,
    /// 0-100 for progress bars
    pub progress: Option<i64>,
}
