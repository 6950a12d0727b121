use anyhow::Result;
use log::info;
use std::sync::Arc;

use shared::DashboardResponse;

use crate::domain::aggregator;
use crate::domain::calendar::LocalCalendar;
use crate::domain::period::{fiscal_year_of, Period};
use crate::storage::LeaveStore;

/// Fiscal-year overview: monthly bars, per-type tally and the summary cards
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn LeaveStore>,
    calendar: LocalCalendar,
}

impl DashboardService {
    pub fn new(store: Arc<dyn LeaveStore>, calendar: LocalCalendar) -> Self {
        Self { store, calendar }
    }

    /// Defaults to the fiscal year containing today's local date
    pub async fn dashboard(&self, fiscal_year: Option<i32>) -> Result<DashboardResponse> {
        let fiscal_year = fiscal_year.unwrap_or_else(|| fiscal_year_of(self.calendar.today()));
        info!("Building dashboard for fiscal year {}", fiscal_year);

        let snapshot = self.store.fetch_all().await?;
        let records = Period::FiscalYear(fiscal_year).filter(&snapshot.leaves);

        let by_type = aggregator::type_rollup(records.iter().copied());
        let share = aggregator::type_share(&by_type);

        Ok(DashboardResponse {
            fiscal_year,
            monthly: aggregator::monthly_rollup(records.iter().copied()),
            by_type,
            share,
            summary: aggregator::dashboard_summary(records.iter().copied()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::*;

    #[tokio::test]
    async fn test_dashboard_for_fiscal_2025() {
        let (_, store) = seeded_store();
        let service = DashboardService::new(store, LocalCalendar::default());

        let dashboard = service.dashboard(Some(2025)).await.unwrap();

        assert_eq!(dashboard.fiscal_year, 2025);
        assert_eq!(dashboard.monthly.len(), 12);
        // Nov 2024 is the second fiscal month, Jan 2025 the fourth, Mar 2025 the sixth
        assert_eq!(dashboard.monthly[1].days, 1.0);
        assert_eq!(dashboard.monthly[3].days, 2.0);
        assert_eq!(dashboard.monthly[5].days, 1.0);
        assert_eq!(dashboard.summary.total_records, 3);
        assert_eq!(dashboard.summary.total_days, 4.0);
        assert_eq!(dashboard.summary.staff_count, 2);
        assert_eq!(dashboard.by_type.len(), shared::LEAVE_TYPES.len());
        assert_eq!(dashboard.share.len(), 3);
    }

    #[tokio::test]
    async fn test_dashboard_outside_data_is_all_zero() {
        let (_, store) = seeded_store();
        let service = DashboardService::new(store, LocalCalendar::default());

        let dashboard = service.dashboard(Some(2030)).await.unwrap();
        assert!(dashboard.monthly.iter().all(|b| b.days == 0.0));
        assert!(dashboard.share.is_empty());
        assert_eq!(dashboard.summary.total_records, 0);
    }
}
