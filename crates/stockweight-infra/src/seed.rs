//! Default rows loaded into empty repositories at startup

use stockweight_domain::model::{RevenueEntry, StatCard, StockItem, Trend};
use stockweight_domain::repository::{DashboardRepository, InventoryRepository};
use stockweight_types::Result;
use tracing::{debug, info};

fn stock_item(
    item_type: &str,
    code: &str,
    description: &str,
    current_balance: i64,
    order_point: i64,
) -> StockItem {
    StockItem {
        code: code.to_string(),
        item_type: item_type.to_string(),
        description: description.to_string(),
        current_balance,
        order_point,
    }
}

pub fn default_stock_items() -> Vec<StockItem> {
    vec![
        stock_item("BARRA CHATA", "10.01.0155", "BARRA CHATA INOX 1\" X 3/16\"", 0, 0),
        stock_item("BARRA CHATA", "10.01.0308", "BARRA CHATA INOX 2\" X 3/16\"", 0, 0),
        stock_item("BARRA CHATA", "10.03.0055", "BARRA CHATA ACO CARBONO 1\" X 3/16\"", 0, 10),
        stock_item("CANTONEIRA", "10.03.0065", "CANTONEIRA ACO CARBONO SAE1020 1 X 1 X 1/8", 0, 0),
        stock_item("VERGALHÃO", "10.02.0589", "VERGALHAO INOX 201 1/2\" (12.7MM)", 0, 0),
        stock_item("TARUGO", "10.06.0019", "TARUGO LATAO REDONDO 9/16 (14.29MM)", 0, 6),
        stock_item(
            "TUBO REDONDO",
            "0000004251",
            "TUBO INOX 201 1.1/4 (31.75MM) ESP 1.00MM C/C POLIDO",
            0,
            26,
        ),
        stock_item(
            "TUBO QUADRADO",
            "0000008679",
            "TUBO QUADRADO ACO CARBONO 15X15MM X ESP 1.0 MM",
            10,
            20,
        ),
    ]
}

pub fn default_revenue() -> Vec<RevenueEntry> {
    [
        ("Jan", 1200, -2800),
        ("Feb", 2600, -1200),
        ("Mar", 1000, -2400),
        ("Apr", 3600, -1500),
        ("May", 2100, -2200),
        ("Jun", 2700, -1800),
        ("Jul", 2200, -1000),
        ("Aug", 1300, -2000),
        ("Sep", 2400, -1300),
    ]
    .into_iter()
    .map(|(month, revenue, expenses)| RevenueEntry {
        month: month.to_string(),
        revenue,
        expenses,
    })
    .collect()
}

pub fn default_stats() -> Vec<StatCard> {
    let card = |label: &str, value: &str, change: i64, trend: Trend, progress: i64| StatCard {
        label: label.to_string(),
        value: value.to_string(),
        change: Some(change),
        trend,
        progress: Some(progress),
    };
    vec![
        card("Entradas de Material", "1.240 un", 12, Trend::Up, 83),
        card("Itens em Uso", "458 un", 5, Trend::Up, 0),
        card("Alertas de Estoque", "3 itens", -10, Trend::Down, 0),
        card("Eficiência de Uso", "94%", 2, Trend::Up, 94),
    ]
}

/// Fill empty repositories with the default rows; a no-op once populated
pub fn seed_if_empty<I, D>(inventory: &mut I, dashboard: &mut D) -> Result<()>
where
    I: InventoryRepository,
    D: DashboardRepository,
{
    if inventory.is_empty()? {
        let inserted = inventory.insert_many(default_stock_items())?;
        info!(inserted, "seeded inventory");
    } else {
        debug!("inventory already populated, skipping seed");
    }

    // Stats are seeded together with revenue
    if dashboard.revenue()?.is_empty() {
        dashboard.insert_revenue(default_revenue())?;
        dashboard.insert_stats(default_stats())?;
        info!("seeded dashboard revenue and stats");
    }
    Ok(())
}
