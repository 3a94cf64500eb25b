//! Coverage classification models.
//!
//! This module defines the per-employee coverage result produced by the
//! analyzer and the gap resolution produced for partially covered employees.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::employee::EmployeeId;

/// How an employee's approved leave covers the reference window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    /// No leave record overlaps the reference window.
    NoLeave,
    /// A single merged run of leave contains the whole window.
    FullyCovered,
    /// Some but not all window days are covered by merged leave.
    PartiallyCovered,
}

impl std::fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Rendered exactly as the analysis report spells the status.
        match self {
            CoverageStatus::NoLeave => write!(f, "no leave"),
            CoverageStatus::FullyCovered => write!(f, "fully covered"),
            CoverageStatus::PartiallyCovered => write!(f, "partially covered"),
        }
    }
}

/// One original leave record overlapping the reference window.
///
/// Detail rows carry the record's own reference id and unmerged dates even
/// when the record was merged with neighbours for classification; reporting
/// works on original record granularity, classification on merged intervals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDetail {
    /// The source workflow identifier of the record.
    pub reference_id: String,
    /// The record's own start date (inclusive).
    pub leave_start: NaiveDate,
    /// The record's own end date (inclusive).
    pub leave_end: NaiveDate,
}

/// The analyzer's classification for one employee.
///
/// Computed once per employee per run and immutable thereafter; consumed by
/// the gap resolver and by report serialization. `details` is empty iff the
/// status is [`CoverageStatus::NoLeave`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageResult {
    /// The employee the result belongs to.
    pub employee: EmployeeId,
    /// The coverage classification against the reference window.
    pub status: CoverageStatus,
    /// The overlapping records, unmerged, in export order.
    pub details: Vec<LeaveDetail>,
}

/// A maximal run of consecutive window days not covered by any merged leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UncoveredSegment {
    /// The first uncovered day (inclusive).
    pub start: NaiveDate,
    /// The last uncovered day of this segment (inclusive).
    pub end: NaiveDate,
}

impl UncoveredSegment {
    /// The number of calendar days in the segment.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// The gap resolver's answer for a partially covered employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapResolution {
    /// The first uncovered segment by date order, or `None` when the merged
    /// leave turns out to cover every window day after all.
    pub segment: Option<UncoveredSegment>,
    /// True iff uncovered days remain outside the first segment.
    pub has_multiple: bool,
}
