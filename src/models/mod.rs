//! Core data models for the Leave Coverage Reconciliation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod coverage;
mod employee;
mod leave;
mod window;

pub use coverage::{CoverageResult, CoverageStatus, GapResolution, LeaveDetail, UncoveredSegment};
pub use employee::{EmployeeId, Roster};
pub use leave::{LeaveInterval, LeaveLedger, MergedInterval, RawLeaveRecord};
pub use window::ReferenceWindow;
