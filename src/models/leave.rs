//! Leave record models and the per-employee leave ledger.
//!
//! This module defines validated leave intervals, the merged-interval form
//! produced by the analyzer, and the ledger mapping each employee to their
//! leave intervals in export order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::error::{EngineError, EngineResult};

use super::employee::EmployeeId;
use super::window::ReferenceWindow;

/// An unvalidated leave record as it arrives from the export loader.
///
/// Dates have already been parsed by the loader; ordering of start and end has
/// not been checked. Records are validated on entry to the [`LeaveLedger`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLeaveRecord {
    /// The employee the record belongs to.
    pub employee: EmployeeId,
    /// The source workflow identifier for the record.
    pub reference_id: String,
    /// The first day of leave (inclusive).
    pub start: NaiveDate,
    /// The last day of leave (inclusive).
    pub end: NaiveDate,
}

/// A validated leave interval with `start <= end`.
///
/// Construction is only possible through [`LeaveInterval::new`], so every
/// interval reaching the merge step satisfies the ordering invariant the
/// analyzer relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveInterval {
    /// The employee the interval belongs to.
    pub employee: EmployeeId,
    /// The source workflow identifier for the record.
    pub reference_id: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl LeaveInterval {
    /// Creates a leave interval, rejecting `start > end`.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::{EmployeeId, LeaveInterval};
    /// use chrono::NaiveDate;
    ///
    /// let interval = LeaveInterval::new(
    ///     EmployeeId::from("600123"),
    ///     "640968".to_string(),
    ///     NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 6, 25).unwrap(),
    /// ).unwrap();
    /// assert_eq!(interval.reference_id, "640968");
    /// ```
    pub fn new(
        employee: EmployeeId,
        reference_id: String,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Self> {
        if start > end {
            return Err(EngineError::InvalidInterval {
                reference_id,
                start,
                end,
            });
        }
        Ok(Self {
            employee,
            reference_id,
            start,
            end,
        })
    }

    /// The first day of leave (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last day of leave (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if the interval overlaps the reference window.
    pub fn overlaps(&self, window: &ReferenceWindow) -> bool {
        window.overlaps(self.start, self.end)
    }
}

impl TryFrom<RawLeaveRecord> for LeaveInterval {
    type Error = EngineError;

    fn try_from(record: RawLeaveRecord) -> EngineResult<Self> {
        LeaveInterval::new(
            record.employee,
            record.reference_id,
            record.start,
            record.end,
        )
    }
}

/// A maximal run of leave produced by merging overlapping or touching
/// intervals.
///
/// Reference ids of the constituent records are kept in merge order and
/// joined for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedInterval {
    /// The earliest start among the merged records (inclusive).
    pub start: NaiveDate,
    /// The latest end among the merged records (inclusive).
    pub end: NaiveDate,
    /// Reference ids of the constituent records, in merge order.
    pub reference_ids: Vec<String>,
}

impl MergedInterval {
    /// Creates a merged interval from a single source interval.
    pub fn from_interval(interval: &LeaveInterval) -> Self {
        Self {
            start: interval.start(),
            end: interval.end(),
            reference_ids: vec![interval.reference_id.clone()],
        }
    }

    /// Returns true if this interval contains the whole reference window.
    pub fn contains_window(&self, window: &ReferenceWindow) -> bool {
        self.start <= window.start() && self.end >= window.end()
    }

    /// The reference ids joined with `", "`, in merge order.
    pub fn joined_reference_ids(&self) -> String {
        self.reference_ids.join(", ")
    }
}

/// The per-employee leave store for a reconciliation run.
///
/// Intervals are kept in the order they arrived from the export, which is the
/// tie-break order when the analyzer sorts intervals sharing a start date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaveLedger {
    records: BTreeMap<EmployeeId, Vec<LeaveInterval>>,
}

impl LeaveLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validated interval to its employee's record list.
    pub fn push(&mut self, interval: LeaveInterval) {
        self.records
            .entry(interval.employee.clone())
            .or_default()
            .push(interval);
    }

    /// Builds a ledger from raw export records, skipping malformed ones.
    ///
    /// A record with `start > end` is logged and dropped; the remaining
    /// records for that employee and all other employees are unaffected.
    /// Returns the ledger together with the number of records skipped.
    pub fn from_records<I>(records: I) -> (Self, usize)
    where
        I: IntoIterator<Item = RawLeaveRecord>,
    {
        let mut ledger = Self::new();
        let mut skipped = 0;

        for record in records {
            match LeaveInterval::try_from(record) {
                Ok(interval) => ledger.push(interval),
                Err(error) => {
                    warn!(%error, "skipping malformed leave record");
                    skipped += 1;
                }
            }
        }

        (ledger, skipped)
    }

    /// Returns the intervals recorded for an employee, in export order.
    pub fn intervals_for(&self, employee: &EmployeeId) -> &[LeaveInterval] {
        self.records
            .get(employee)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of employees with at least one recorded interval.
    pub fn employee_count(&self) -> usize {
        self.records.len()
    }

    /// Iterates over `(employee, intervals)` entries in sorted id order.
    pub fn iter(&self) -> impl Iterator<Item = (&EmployeeId, &[LeaveInterval])> {
        self.records.iter().map(|(id, v)| (id, v.as_slice()))
    }
}

impl FromIterator<LeaveInterval> for LeaveLedger {
    fn from_iter<T: IntoIterator<Item = LeaveInterval>>(iter: T) -> Self {
        let mut ledger = Self::new();
        for interval in iter {
            ledger.push(interval);
        }
        ledger
    }
}
