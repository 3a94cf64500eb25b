//! Interval merging.
//!
//! This module collapses a set of leave intervals into the minimal ordered
//! sequence of non-overlapping merged runs.

use crate::models::{LeaveInterval, MergedInterval};

/// Merges overlapping or touching leave intervals.
///
/// Intervals are sorted by start date with their original position as an
/// explicit secondary key, so ties on start date resolve to input order
/// regardless of the sort algorithm's stability. A left-to-right pass then
/// folds each interval into the running merged run when its start is on or
/// before the run's end (overlap-or-touch, `<=`); intervals separated by a
/// gap of at least one day start a new run.
///
/// Merging keeps the earliest start and the latest end, and concatenates
/// reference ids in merge order. The operation is idempotent: merging an
/// already-merged sequence yields the same runs.
///
/// # Example
///
/// ```
/// use leave_engine::analysis::merge_overlapping;
/// use leave_engine::models::{EmployeeId, LeaveInterval};
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2025, 6, d).unwrap();
/// let a = LeaveInterval::new(EmployeeId::from("e"), "a".into(), date(13), date(16)).unwrap();
/// let b = LeaveInterval::new(EmployeeId::from("e"), "b".into(), date(16), date(20)).unwrap();
///
/// let merged = merge_overlapping(&[&a, &b]);
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].start, date(13));
/// assert_eq!(merged[0].end, date(20));
/// assert_eq!(merged[0].joined_reference_ids(), "a, b");
/// ```
pub fn merge_overlapping(intervals: &[&LeaveInterval]) -> Vec<MergedInterval> {
    let mut ordered: Vec<(usize, &LeaveInterval)> =
        intervals.iter().copied().enumerate().collect();
    ordered.sort_by_key(|&(position, interval)| (interval.start(), position));

    let mut merged: Vec<MergedInterval> = Vec::new();
    for (_, interval) in ordered {
        match merged.last_mut() {
            Some(run) if interval.start() <= run.end => {
                run.end = run.end.max(interval.end());
                run.reference_ids.push(interval.reference_id.clone());
            }
            _ => merged.push(MergedInterval::from_interval(interval)),
        }
    }
    merged
}
