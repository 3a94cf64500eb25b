//! Per-employee coverage analysis.
//!
//! This module classifies how an employee's approved leave covers the
//! reference window.

use crate::models::{
    CoverageResult, CoverageStatus, EmployeeId, LeaveDetail, LeaveInterval, MergedInterval,
    ReferenceWindow,
};

use super::merge::merge_overlapping;

/// Classifies an employee's leave coverage of the reference window.
///
/// The overlapping subset of `intervals` is recorded verbatim (unmerged, in
/// input order) as the result's details; classification then works on the
/// merged runs. Status is [`CoverageStatus::FullyCovered`] iff a single merged
/// run contains the whole window; coverage spanning two runs that share a
/// boundary day still qualifies because touching runs merge, while a true gap
/// of even one day yields [`CoverageStatus::PartiallyCovered`].
///
/// `details` is empty iff the status is [`CoverageStatus::NoLeave`], which is
/// returned both for employees with no records at all and for employees whose
/// records all fall outside the window.
///
/// Intervals are validated at construction, so `start <= end` holds for every
/// interval reaching the merge pass.
///
/// # Example
///
/// ```
/// use leave_engine::analysis::analyze_coverage;
/// use leave_engine::models::{CoverageStatus, EmployeeId, LeaveInterval, ReferenceWindow};
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2025, 6, d).unwrap();
/// let window = ReferenceWindow::new(date(14), date(20)).unwrap();
/// let employee = EmployeeId::from("600123");
/// let leave = LeaveInterval::new(employee.clone(), "640968".into(), date(10), date(25)).unwrap();
///
/// let result = analyze_coverage(&employee, &[leave], &window);
/// assert_eq!(result.status, CoverageStatus::FullyCovered);
/// assert_eq!(result.details.len(), 1);
/// ```
pub fn analyze_coverage(
    employee: &EmployeeId,
    intervals: &[LeaveInterval],
    window: &ReferenceWindow,
) -> CoverageResult {
    let overlapping: Vec<&LeaveInterval> = intervals
        .iter()
        .filter(|interval| interval.overlaps(window))
        .collect();

    if overlapping.is_empty() {
        return CoverageResult {
            employee: employee.clone(),
            status: CoverageStatus::NoLeave,
            details: Vec::new(),
        };
    }

    let details = overlapping
        .iter()
        .map(|interval| LeaveDetail {
            reference_id: interval.reference_id.clone(),
            leave_start: interval.start(),
            leave_end: interval.end(),
        })
        .collect();

    let merged = merge_overlapping(&overlapping);
    let status = if merged.iter().any(|run| run.contains_window(window)) {
        CoverageStatus::FullyCovered
    } else {
        CoverageStatus::PartiallyCovered
    };

    CoverageResult {
        employee: employee.clone(),
        status,
        details,
    }
}

/// Returns the merged runs of the intervals overlapping the window.
///
/// This is the merged view the analyzer classifies against, exposed for the
/// gap resolver: the resolver consumes merged runs, not original records.
pub fn merged_overlapping(
    intervals: &[LeaveInterval],
    window: &ReferenceWindow,
) -> Vec<MergedInterval> {
    let overlapping: Vec<&LeaveInterval> = intervals
        .iter()
        .filter(|interval| interval.overlaps(window))
        .collect();
    merge_overlapping(&overlapping)
}
