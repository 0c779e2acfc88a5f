//! In-memory implementation of DashboardRepository

use stockweight_domain::model::{RevenueEntry, StatCard};
use stockweight_domain::repository::DashboardRepository;
use stockweight_types::Error;

#[derive(Debug, Default)]
pub struct MemoryDashboardRepository {
    revenue: Vec<RevenueEntry>,
    stats: Vec<StatCard>,
}

impl MemoryDashboardRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DashboardRepository for MemoryDashboardRepository {
    fn revenue(&self) -> Result<Vec<RevenueEntry>, Error> {
        Ok(self.revenue.clone())
    }

    fn stats(&self) -> Result<Vec<StatCard>, Error> {
        Ok(self.stats.clone())
    }

    fn insert_revenue(&mut self, rows: Vec<RevenueEntry>) -> Result<(), Error> {
        self.revenue.extend(rows);
        Ok(())
    }

    fn insert_stats(&mut self, rows: Vec<StatCard>) -> Result<(), Error> {
        self.stats.extend(rows);
        Ok(())
    }
}
