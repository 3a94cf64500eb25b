//! Leave Coverage Reconciliation Engine
//!
//! This crate reconciles approved employee leave records against a fixed
//! reference window. For each rostered employee it classifies coverage of the
//! window (no leave / fully covered / partially covered), resolves the first
//! contiguous uncovered gap for partially covered employees, and flattens the
//! results into plain-data report rows and assignment updates. Reading and
//! writing the surrounding CSV/Excel exports is left to callers.

#![warn(missing_docs)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
