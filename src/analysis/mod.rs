//! Coverage analysis logic for the Leave Coverage Reconciliation Engine.
//!
//! This module contains the interval-merging pass, the per-employee coverage
//! analyzer that classifies how approved leave covers the reference window,
//! and the gap resolver that finds the first contiguous uncovered run of
//! window days for partially covered employees.

mod analyzer;
mod gap;
mod merge;

pub use analyzer::{analyze_coverage, merged_overlapping};
pub use gap::{resolve_gap, uncovered_segments};
pub use merge::merge_overlapping;
