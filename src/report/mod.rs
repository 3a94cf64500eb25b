//! Report assembly for the Leave Coverage Reconciliation Engine.
//!
//! This module runs the analyzer across a roster and flattens the results
//! into plain-data report rows and per-employee assignment updates. Writing
//! the rows out (CSV, Excel) is the caller's concern.

mod assignment;
mod rows;

pub use assignment::{AssignmentUpdate, CoverageNote, assignment_update, plan_assignments};
pub use rows::{ReportRow, analyze_roster, build_report};
