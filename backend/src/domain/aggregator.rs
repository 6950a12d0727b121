//! Leave statistics.
//!
//! Every function here is a pure fold over an already-filtered set of
//! records: the same input always yields the same output, and nothing is
//! cached between calls. Callers pick the records with `Period::filter`.

use chrono::Datelike;
use std::collections::{HashMap, HashSet};

use shared::{
    CategoryCount, DashboardSummary, HistoryStats, MatrixRow, MatrixTotals, MonthlyBucket,
    TypeTally, TypeTotal, FISCAL_MONTH_LABELS, LEAVE_TYPES, PERSONAL_LEAVE, SICK_LEAVE,
    VACATION_LEAVE,
};

use crate::domain::models::{LeaveRecord, Staff};
use crate::domain::period::fiscal_month_index;

/// Substrings that put a leave type in the maternity column ("birth", "wife")
const MATERNITY_KEYWORDS: [&str; 2] = ["คลอด", "ภริยา"];

/// Matrix report columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveCategory {
    Sick,
    Personal,
    Vacation,
    Maternity,
    Other,
}

impl LeaveCategory {
    pub fn classify(leave_type: &str) -> Self {
        match leave_type {
            SICK_LEAVE => LeaveCategory::Sick,
            PERSONAL_LEAVE => LeaveCategory::Personal,
            VACATION_LEAVE => LeaveCategory::Vacation,
            other if MATERNITY_KEYWORDS.iter().any(|kw| other.contains(kw)) => {
                LeaveCategory::Maternity
            }
            _ => LeaveCategory::Other,
        }
    }
}

/// Twelve buckets in fiscal order (October first). Empty months stay at zero.
pub fn monthly_rollup<'a, I>(records: I) -> Vec<MonthlyBucket>
where
    I: IntoIterator<Item = &'a LeaveRecord>,
{
    let mut buckets: Vec<MonthlyBucket> = FISCAL_MONTH_LABELS
        .iter()
        .map(|label| MonthlyBucket {
            label: label.to_string(),
            days: 0.0,
        })
        .collect();

    for record in records {
        if let Some(anchor) = record.anchor_date() {
            buckets[fiscal_month_index(anchor.month())].days += record.total_days;
        }
    }

    buckets
}

/// Days per leave type.
///
/// Every catalogued type is present (zero when unused), in catalogue order;
/// uncatalogued types found in the data follow in first-seen order.
pub fn type_rollup<'a, I>(records: I) -> Vec<TypeTotal>
where
    I: IntoIterator<Item = &'a LeaveRecord>,
{
    let mut totals: Vec<TypeTotal> = LEAVE_TYPES
        .iter()
        .map(|leave_type| TypeTotal {
            leave_type: leave_type.to_string(),
            days: 0.0,
        })
        .collect();

    for record in records {
        if record.dates.is_empty() {
            continue;
        }
        match totals.iter_mut().find(|t| t.leave_type == record.leave_type) {
            Some(total) => total.days += record.total_days,
            None => totals.push(TypeTotal {
                leave_type: record.leave_type.clone(),
                days: record.total_days,
            }),
        }
    }

    totals
}

/// The pie-chart view of a type tally: zero totals dropped
pub fn type_share(tally: &[TypeTotal]) -> Vec<TypeTotal> {
    tally.iter().filter(|t| t.days > 0.0).cloned().collect()
}

fn bucket_mut(totals: &mut MatrixTotals, category: LeaveCategory) -> &mut CategoryCount {
    match category {
        LeaveCategory::Sick => &mut totals.sick,
        LeaveCategory::Personal => &mut totals.personal,
        LeaveCategory::Vacation => &mut totals.vacation,
        LeaveCategory::Maternity => &mut totals.maternity,
        LeaveCategory::Other => &mut totals.other,
    }
}

fn add_leave(totals: &mut MatrixTotals, category: LeaveCategory, days: f64) {
    totals.total_times += 1;
    totals.total_days += days;
    let bucket = bucket_mut(totals, category);
    bucket.times += 1;
    bucket.days += days;
}

fn add_counts(into: &mut CategoryCount, from: &CategoryCount) {
    into.times += from.times;
    into.days += from.days;
}

fn add_totals(into: &mut MatrixTotals, from: &MatrixTotals) {
    into.total_times += from.total_times;
    into.total_days += from.total_days;
    add_counts(&mut into.sick, &from.sick);
    add_counts(&mut into.personal, &from.personal);
    add_counts(&mut into.vacation, &from.vacation);
    add_counts(&mut into.maternity, &from.maternity);
    add_counts(&mut into.other, &from.other);
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaffMatrix {
    pub rows: Vec<MatrixRow>,
    pub grand_total: MatrixTotals,
}

/// Per-staff matrix for the official report.
///
/// Rows are keyed by staff name. Everyone on the current roster gets a row,
/// in roster order, even with no leave in the period; people who only appear
/// in the records (left the school since) follow in first-seen order.
pub fn staff_matrix<'a, I>(records: I, roster: &[Staff]) -> StaffMatrix
where
    I: IntoIterator<Item = &'a LeaveRecord>,
{
    let mut rows: Vec<MatrixRow> = Vec::with_capacity(roster.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for staff in roster {
        if index.contains_key(&staff.name) {
            continue;
        }
        index.insert(staff.name.clone(), rows.len());
        rows.push(MatrixRow {
            staff_name: staff.name.clone(),
            position: staff.position.clone(),
            in_roster: true,
            totals: MatrixTotals::default(),
        });
    }

    for record in records {
        let row = match index.get(&record.staff_name) {
            Some(&row) => row,
            None => {
                index.insert(record.staff_name.clone(), rows.len());
                rows.push(MatrixRow {
                    staff_name: record.staff_name.clone(),
                    position: record.position.clone(),
                    in_roster: false,
                    totals: MatrixTotals::default(),
                });
                rows.len() - 1
            }
        };
        add_leave(
            &mut rows[row].totals,
            LeaveCategory::classify(&record.leave_type),
            record.total_days,
        );
    }

    let mut grand_total = MatrixTotals::default();
    for row in &rows {
        add_totals(&mut grand_total, &row.totals);
    }

    StaffMatrix { rows, grand_total }
}

/// Summary block shown above the history list
pub fn history_stats<'a, I>(records: I) -> HistoryStats
where
    I: IntoIterator<Item = &'a LeaveRecord>,
{
    let mut by_type: Vec<TypeTally> = LEAVE_TYPES
        .iter()
        .map(|leave_type| TypeTally {
            leave_type: leave_type.to_string(),
            times: 0,
            days: 0.0,
        })
        .collect();
    let mut total_times = 0;
    let mut total_days = 0.0;

    for record in records {
        total_times += 1;
        total_days += record.total_days;
        if let Some(tally) = by_type.iter_mut().find(|t| t.leave_type == record.leave_type) {
            tally.times += 1;
            tally.days += record.total_days;
        }
    }

    HistoryStats {
        total_times,
        total_days,
        by_type,
    }
}

/// Dashboard cards: number of leaves, days taken, distinct staff on leave
pub fn dashboard_summary<'a, I>(records: I) -> DashboardSummary
where
    I: IntoIterator<Item = &'a LeaveRecord>,
{
    let mut total_records = 0;
    let mut total_days = 0.0;
    let mut staff_ids = HashSet::new();

    for record in records {
        total_records += 1;
        total_days += record.total_days;
        staff_ids.insert(record.staff_id.as_str());
    }

    DashboardSummary {
        total_records,
        total_days,
        staff_count: staff_ids.len(),
    }
}
