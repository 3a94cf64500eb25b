//! Assignment update propagation.
//!
//! This module turns coverage classifications into the date range each
//! project assignment still needs covered, the step that used to rewrite the
//! assignments spreadsheet. Output is plain data; the spreadsheet itself is
//! written elsewhere.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::{merged_overlapping, resolve_gap};
use crate::models::{
    CoverageResult, CoverageStatus, EmployeeId, LeaveLedger, MergedInterval, ReferenceWindow,
    Roster,
};

use super::rows::analyze_roster;

/// The annotation accompanying an assignment update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CoverageNote {
    /// No leave overlaps the window; nothing to annotate.
    NoLeave,
    /// Approved leave already covers the whole window.
    CoveredByLeave {
        /// Joined reference ids of the covering records.
        reference_ids: String,
    },
    /// Leave covers part of the window; the update's dates are the first gap.
    PartiallyCovered {
        /// Joined reference ids of the overlapping records.
        reference_ids: String,
        /// True iff uncovered days remain beyond the first gap.
        multiple_segments: bool,
    },
    /// Classified partially covered, but the merged leave turned out to span
    /// every window day; no further dates need covering.
    CoveredByPartialLeave {
        /// Joined reference ids of the overlapping records.
        reference_ids: String,
    },
}

/// The dates an assignment still needs covered for one employee.
///
/// `start_date`/`end_date` are both set or both absent: the whole window for
/// a no-leave employee, the first uncovered gap for a partially covered one,
/// nothing when leave already spans the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentUpdate {
    /// The employee the update belongs to.
    pub employee: EmployeeId,
    /// First day still needing coverage (inclusive).
    pub start_date: Option<NaiveDate>,
    /// Last day still needing coverage (inclusive).
    pub end_date: Option<NaiveDate>,
    /// The annotation explaining the dates.
    pub note: CoverageNote,
}

fn joined_reference_ids(merged: &[MergedInterval]) -> String {
    merged
        .iter()
        .flat_map(|run| run.reference_ids.iter())
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Derives the assignment update for one employee's coverage result.
///
/// `merged` must be the merged view of the same intervals the result was
/// computed from (see [`merged_overlapping`]); the gap resolver runs on it
/// when the employee is partially covered.
///
/// # Example
///
/// ```
/// use leave_engine::analysis::{analyze_coverage, merged_overlapping};
/// use leave_engine::models::{EmployeeId, LeaveInterval, ReferenceWindow};
/// use leave_engine::report::assignment_update;
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2025, 6, d).unwrap();
/// let window = ReferenceWindow::new(date(14), date(20)).unwrap();
/// let employee = EmployeeId::from("600123");
/// let intervals = [
///     LeaveInterval::new(employee.clone(), "a".into(), date(12), date(15)).unwrap(),
///     LeaveInterval::new(employee.clone(), "b".into(), date(18), date(22)).unwrap(),
/// ];
///
/// let result = analyze_coverage(&employee, &intervals, &window);
/// let merged = merged_overlapping(&intervals, &window);
/// let update = assignment_update(&result, &merged, &window);
///
/// assert_eq!(update.start_date, Some(date(16)));
/// assert_eq!(update.end_date, Some(date(17)));
/// ```
pub fn assignment_update(
    result: &CoverageResult,
    merged: &[MergedInterval],
    window: &ReferenceWindow,
) -> AssignmentUpdate {
    match result.status {
        CoverageStatus::NoLeave => AssignmentUpdate {
            employee: result.employee.clone(),
            start_date: Some(window.start()),
            end_date: Some(window.end()),
            note: CoverageNote::NoLeave,
        },
        CoverageStatus::FullyCovered => AssignmentUpdate {
            employee: result.employee.clone(),
            start_date: None,
            end_date: None,
            note: CoverageNote::CoveredByLeave {
                reference_ids: joined_reference_ids(merged),
            },
        },
        CoverageStatus::PartiallyCovered => {
            let resolution = resolve_gap(merged, window);
            let reference_ids = joined_reference_ids(merged);
            match resolution.segment {
                Some(segment) => AssignmentUpdate {
                    employee: result.employee.clone(),
                    start_date: Some(segment.start),
                    end_date: Some(segment.end),
                    note: CoverageNote::PartiallyCovered {
                        reference_ids,
                        multiple_segments: resolution.has_multiple,
                    },
                },
                None => AssignmentUpdate {
                    employee: result.employee.clone(),
                    start_date: None,
                    end_date: None,
                    note: CoverageNote::CoveredByPartialLeave { reference_ids },
                },
            }
        }
    }
}

/// Derives assignment updates for every rostered employee.
///
/// One update per roster entry, in roster order.
pub fn plan_assignments(
    roster: &Roster,
    ledger: &LeaveLedger,
    window: &ReferenceWindow,
) -> Vec<AssignmentUpdate> {
    let updates: Vec<AssignmentUpdate> = analyze_roster(roster, ledger, window)
        .iter()
        .map(|result| {
            let merged = merged_overlapping(ledger.intervals_for(&result.employee), window);
            assignment_update(result, &merged, window)
        })
        .collect();

    info!(updates = updates.len(), "assignment updates planned");
    updates
}
