//! # Report Service
//!
//! Official leave summaries for a month, a calendar year, a fiscal half or
//! a whole fiscal year. Headings use Thai month names and Buddhist-era
//! years. The per-staff matrix can also be exported as CSV.

use anyhow::{Context, Result};
use csv::Writer;
use log::info;
use std::sync::Arc;

use shared::{
    CategoryCount, MatrixReportResponse, MatrixTotals, ReportListResponse, ReportTitle,
    BUDDHIST_ERA_OFFSET, THAI_MONTHS,
};

use crate::domain::aggregator;
use crate::domain::calendar::LocalCalendar;
use crate::domain::period::{FiscalHalf, Period};
use crate::mappers::LeaveRecordMapper;
use crate::storage::LeaveStore;

const CSV_HEADER: [&str; 15] = [
    "ลำดับ",
    "ชื่อ-สกุล",
    "ตำแหน่ง",
    "ลาป่วย (ครั้ง)",
    "ลาป่วย (วัน)",
    "ลากิจ (ครั้ง)",
    "ลากิจ (วัน)",
    "ลาพักผ่อน (ครั้ง)",
    "ลาพักผ่อน (วัน)",
    "ลาคลอด/ช่วยภริยา (ครั้ง)",
    "ลาคลอด/ช่วยภริยา (วัน)",
    "อื่นๆ (ครั้ง)",
    "อื่นๆ (วัน)",
    "รวม (ครั้ง)",
    "รวม (วัน)",
];

const GRAND_TOTAL_LABEL: &str = "รวมทั้งสิ้น";

fn buddhist_year(year: i32) -> i32 {
    year.saturating_add(BUDDHIST_ERA_OFFSET)
}

/// Heading line printed under the school name
pub fn report_title(period: &Period) -> ReportTitle {
    let (heading, year) = match *period {
        Period::Month { year, month } => {
            let name = THAI_MONTHS
                .get(month.saturating_sub(1) as usize)
                .copied()
                .unwrap_or_default();
            let be = buddhist_year(year);
            (format!("ประจำเดือน {} ปี {}", name, be), year)
        }
        Period::Year(year) => (format!("ประจำปี {}", buddhist_year(year)), year),
        Period::FiscalHalf { fiscal_year, half } => {
            let half_name = match half {
                FiscalHalf::First => "ครึ่งปีแรก",
                FiscalHalf::Second => "ครึ่งปีหลัง",
            };
            (
                format!(
                    "ประจำ{} ปีงบประมาณ {}",
                    half_name,
                    buddhist_year(fiscal_year)
                ),
                fiscal_year,
            )
        }
        Period::FiscalYear(fiscal_year) => (
            format!("ประจำปีงบประมาณ {}", buddhist_year(fiscal_year)),
            fiscal_year,
        ),
    };

    ReportTitle {
        heading,
        buddhist_year: buddhist_year(year),
    }
}

fn format_days(days: f64) -> String {
    if days.fract() == 0.0 {
        format!("{}", days as i64)
    } else {
        format!("{}", days)
    }
}

fn count_cells(count: &CategoryCount) -> [String; 2] {
    [count.times.to_string(), format_days(count.days)]
}

fn total_cells(totals: &MatrixTotals) -> Vec<String> {
    let mut cells = Vec::with_capacity(12);
    for count in [
        &totals.sick,
        &totals.personal,
        &totals.vacation,
        &totals.maternity,
        &totals.other,
    ] {
        cells.extend(count_cells(count));
    }
    cells.push(totals.total_times.to_string());
    cells.push(format_days(totals.total_days));
    cells
}

#[derive(Clone)]
pub struct ReportService {
    store: Arc<dyn LeaveStore>,
    calendar: LocalCalendar,
}

impl ReportService {
    pub fn new(store: Arc<dyn LeaveStore>, calendar: LocalCalendar) -> Self {
        Self { store, calendar }
    }

    /// Raw records of the period, in stored order
    pub async fn list_report(&self, period: Period) -> Result<ReportListResponse> {
        let snapshot = self.store.fetch_all().await?;
        let records: Vec<_> = period
            .filter(&snapshot.leaves)
            .into_iter()
            .map(|record| LeaveRecordMapper::to_dto(record.clone(), &self.calendar))
            .collect();

        info!("Report list for {:?}: {} record(s)", period, records.len());
        Ok(ReportListResponse {
            title: report_title(&period),
            records,
        })
    }

    pub async fn matrix_report(&self, period: Period) -> Result<MatrixReportResponse> {
        let snapshot = self.store.fetch_all().await?;
        let records = period.filter(&snapshot.leaves);
        let matrix = aggregator::staff_matrix(records.iter().copied(), &snapshot.staff);

        info!(
            "Matrix report for {:?}: {} row(s), {} day(s)",
            period,
            matrix.rows.len(),
            matrix.grand_total.total_days
        );
        Ok(MatrixReportResponse {
            title: report_title(&period),
            rows: matrix.rows,
            grand_total: matrix.grand_total,
        })
    }

    /// The matrix as CSV: one numbered row per staff member and a
    /// grand-total row at the end
    pub async fn matrix_csv(&self, period: Period) -> Result<String> {
        let report = self.matrix_report(period).await?;

        let mut writer = Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;
        for (i, row) in report.rows.iter().enumerate() {
            let mut record = vec![
                (i + 1).to_string(),
                row.staff_name.clone(),
                row.position.clone(),
            ];
            record.extend(total_cells(&row.totals));
            writer.write_record(&record)?;
        }

        let mut total = vec![String::new(), GRAND_TOTAL_LABEL.to_string(), String::new()];
        total.extend(total_cells(&report.grand_total));
        writer.write_record(&total)?;

        let bytes = writer.into_inner().context("Failed to flush CSV export")?;
        String::from_utf8(bytes).context("CSV export is not valid UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::*;

    fn service() -> ReportService {
        let (_, store) = seeded_store();
        ReportService::new(store, LocalCalendar::default())
    }

    #[test]
    fn test_titles_use_buddhist_era() {
        let title = report_title(&Period::Month { year: 2025, month: 1 });
        assert_eq!(title.heading, "ประจำเดือน มกราคม ปี 2568");
        assert_eq!(title.buddhist_year, 2568);

        assert_eq!(report_title(&Period::Year(2025)).heading, "ประจำปี 2568");
        assert_eq!(
            report_title(&Period::FiscalHalf {
                fiscal_year: 2025,
                half: FiscalHalf::Second
            })
            .heading,
            "ประจำครึ่งปีหลัง ปีงบประมาณ 2568"
        );
        assert_eq!(report_title(&Period::FiscalYear(2026)).heading, "ประจำปีงบประมาณ 2569");
    }

    #[test]
    fn test_title_of_extreme_year_does_not_overflow() {
        let title = report_title(&Period::Year(i32::MAX));
        assert_eq!(title.buddhist_year, i32::MAX);
    }

    #[tokio::test]
    async fn test_list_report_filters_by_month() {
        let report = service()
            .list_report(Period::Month { year: 2025, month: 1 })
            .await
            .unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].id, "leave-1");
        assert_eq!(report.records[0].dates[0], "2025-01-10T00:00:00.000Z");
    }

    #[tokio::test]
    async fn test_matrix_report_for_first_fiscal_half() {
        let report = service()
            .matrix_report(Period::FiscalHalf {
                fiscal_year: 2025,
                half: FiscalHalf::First,
            })
            .await
            .unwrap();

        assert_eq!(report.rows.len(), 2);
        let somchai = &report.rows[0];
        assert_eq!(somchai.staff_name, SOMCHAI);
        assert_eq!(somchai.totals.sick, CategoryCount { times: 1, days: 2.0 });
        assert_eq!(somchai.totals.personal, CategoryCount { times: 1, days: 1.0 });
        assert_eq!(somchai.totals.total_times, 2);
        assert_eq!(report.rows[1].totals.vacation.days, 1.0);
        assert_eq!(report.grand_total.total_times, 3);
        assert_eq!(report.grand_total.total_days, 4.0);
    }

    #[tokio::test]
    async fn test_matrix_csv_layout() {
        let csv = service().matrix_csv(Period::Year(2025)).await.unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ลำดับ,ชื่อ-สกุล,ตำแหน่ง"));
        assert_eq!(lines[1], format!("1,{},ครู,1,2,1,1,0,0,0,0,0,0,2,3", SOMCHAI));
        // Somying has no leave in calendar 2025 but stays on the report
        assert_eq!(lines[2], format!("2,{},ครูผู้ช่วย,0,0,0,0,0,0,0,0,0,0,0,0", SOMYING));
        assert_eq!(lines[3], ",รวมทั้งสิ้น,,1,2,1,1,0,0,0,0,0,0,2,3");
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_days(2.0), "2");
        assert_eq!(format_days(0.5), "0.5");
    }
}
