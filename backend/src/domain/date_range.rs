//! Date-range expansion for leave requests.
//!
//! A leave request is entered as one or more start/end spans. Each span is
//! expanded into the calendar days it covers and all spans accumulate into a
//! single sorted, duplicate-free `DateSet`. That set is what a `LeaveRecord`
//! stores and what its `total_days` is derived from.

use chrono::NaiveDate;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateRangeError {
    #[error("End date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

/// An inclusive span of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range. A missing `end` means a single-day range.
    ///
    /// An `end` before `start` is rejected, never swapped.
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Result<Self, DateRangeError> {
        let end = end.unwrap_or(start);
        if end < start {
            return Err(DateRangeError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Every day from start through end, ascending
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// Sorted, deduplicated set of calendar days
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateSet {
    days: BTreeSet<NaiveDate>,
}

impl DateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand and merge several ranges in one go
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = DateRange>,
    {
        let mut set = Self::new();
        for range in ranges {
            set.add_range(&range);
        }
        set
    }

    /// Add every day of `range`. Days already present are not duplicated.
    /// Returns how many new days were added.
    pub fn add_range(&mut self, range: &DateRange) -> usize {
        range.days().filter(|day| self.days.insert(*day)).count()
    }

    pub fn insert(&mut self, day: NaiveDate) -> bool {
        self.days.insert(day)
    }

    pub fn remove(&mut self, day: NaiveDate) -> bool {
        self.days.remove(&day)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The earliest day. Used as the anchor for period classification.
    pub fn first(&self) -> Option<NaiveDate> {
        self.days.iter().next().copied()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.days.contains(&day)
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<NaiveDate> {
        self.days.iter().copied().collect()
    }
}

impl FromIterator<NaiveDate> for DateSet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(day(2025, 1, 10), None).unwrap();
        let set = DateSet::from_ranges([range]);
        assert_eq!(set.to_vec(), vec![day(2025, 1, 10)]);

        let same = DateRange::new(day(2025, 1, 10), Some(day(2025, 1, 10))).unwrap();
        assert_eq!(DateSet::from_ranges([same]).len(), 1);
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let result = DateRange::new(day(2025, 1, 12), Some(day(2025, 1, 10)));
        assert_eq!(
            result,
            Err(DateRangeError::EndBeforeStart {
                start: day(2025, 1, 12),
                end: day(2025, 1, 10),
            })
        );
    }

    #[test]
    fn test_overlapping_ranges_equal_merged_range() {
        let first = DateRange::new(day(2025, 1, 1), Some(day(2025, 1, 5))).unwrap();
        let second = DateRange::new(day(2025, 1, 3), Some(day(2025, 1, 9))).unwrap();
        let merged = DateRange::new(day(2025, 1, 1), Some(day(2025, 1, 9))).unwrap();

        let accumulated = DateSet::from_ranges([first, second]);
        assert_eq!(accumulated, DateSet::from_ranges([merged]));
        assert_eq!(accumulated.len(), 9);

        let days = accumulated.to_vec();
        assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_add_range_reports_only_new_days() {
        let mut set = DateSet::new();
        assert_eq!(
            set.add_range(&DateRange::new(day(2025, 2, 1), Some(day(2025, 2, 3))).unwrap()),
            3
        );
        assert_eq!(
            set.add_range(&DateRange::new(day(2025, 2, 2), Some(day(2025, 2, 4))).unwrap()),
            1
        );
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_range_across_month_and_year_boundary() {
        let range = DateRange::new(day(2024, 12, 30), Some(day(2025, 1, 2))).unwrap();
        let days: Vec<_> = range.days().collect();
        assert_eq!(
            days,
            vec![day(2024, 12, 30), day(2024, 12, 31), day(2025, 1, 1), day(2025, 1, 2)]
        );
    }

    #[test]
    fn test_out_of_order_ranges_are_sorted() {
        let later = DateRange::single(day(2025, 3, 10));
        let earlier = DateRange::single(day(2025, 3, 1));
        let set = DateSet::from_ranges([later, earlier]);
        assert_eq!(set.first(), Some(day(2025, 3, 1)));
        assert_eq!(set.to_vec(), vec![day(2025, 3, 1), day(2025, 3, 10)]);
    }

    #[test]
    fn test_remove_single_day() {
        let mut set = DateSet::from_ranges([DateRange::new(day(2025, 1, 1), Some(day(2025, 1, 3))).unwrap()]);
        assert!(set.remove(day(2025, 1, 2)));
        assert!(!set.remove(day(2025, 1, 2)));
        assert_eq!(set.to_vec(), vec![day(2025, 1, 1), day(2025, 1, 3)]);
    }
}
