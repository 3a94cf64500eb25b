//! Batch analysis and report rows.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::analyze_coverage;
use crate::models::{
    CoverageResult, CoverageStatus, EmployeeId, LeaveDetail, LeaveLedger, ReferenceWindow, Roster,
};

/// One line of the coverage report.
///
/// A `NoLeave` employee gets a single row with empty record fields; any other
/// employee gets one row per overlapping leave record, carrying the record's
/// own reference id and unmerged dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// The employee the row belongs to.
    pub employee: EmployeeId,
    /// The employee's coverage classification.
    pub status: CoverageStatus,
    /// The overlapping record behind this row, absent for `NoLeave` rows.
    pub detail: Option<LeaveDetail>,
}

/// Analyzes every rostered employee against the window.
///
/// The roster is authoritative: employees present in the ledger but absent
/// from the roster are silently excluded, and rostered employees with no
/// ledger entry come out as [`CoverageStatus::NoLeave`]. Results follow the
/// roster's sorted iteration order.
pub fn analyze_roster(
    roster: &Roster,
    ledger: &LeaveLedger,
    window: &ReferenceWindow,
) -> Vec<CoverageResult> {
    roster
        .iter()
        .map(|employee| analyze_coverage(employee, ledger.intervals_for(employee), window))
        .collect()
}

/// Runs the roster-wide analysis and flattens it into report rows.
///
/// Logs a per-run summary of the classification counts.
///
/// # Example
///
/// ```
/// use leave_engine::models::{EmployeeId, LeaveLedger, ReferenceWindow, Roster};
/// use leave_engine::report::build_report;
/// use chrono::NaiveDate;
///
/// let window = ReferenceWindow::new(
///     NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
/// ).unwrap();
/// let roster: Roster = [EmployeeId::from("600123")].into_iter().collect();
///
/// let rows = build_report(&roster, &LeaveLedger::new(), &window);
/// assert_eq!(rows.len(), 1);
/// assert!(rows[0].detail.is_none());
/// ```
pub fn build_report(
    roster: &Roster,
    ledger: &LeaveLedger,
    window: &ReferenceWindow,
) -> Vec<ReportRow> {
    let results = analyze_roster(roster, ledger, window);

    let mut rows = Vec::new();
    let mut fully = 0usize;
    let mut partially = 0usize;
    let mut no_leave = 0usize;

    for result in results {
        match result.status {
            CoverageStatus::NoLeave => {
                no_leave += 1;
                rows.push(ReportRow {
                    employee: result.employee,
                    status: result.status,
                    detail: None,
                });
            }
            CoverageStatus::FullyCovered | CoverageStatus::PartiallyCovered => {
                match result.status {
                    CoverageStatus::FullyCovered => fully += 1,
                    _ => partially += 1,
                }
                for detail in result.details {
                    rows.push(ReportRow {
                        employee: result.employee.clone(),
                        status: result.status,
                        detail: Some(detail),
                    });
                }
            }
        }
    }

    info!(
        employees = roster.len(),
        rows = rows.len(),
        fully_covered = fully,
        partially_covered = partially,
        no_leave,
        "coverage report assembled"
    );

    rows
}
