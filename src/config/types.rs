//! Configuration types for leave reconciliation.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from the YAML configuration file.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::EngineResult;
use crate::models::ReferenceWindow;

/// The reference window section of the configuration file.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WindowConfig {
    /// The first day of the window (inclusive).
    pub start: NaiveDate,
    /// The last day of the window (inclusive).
    pub end: NaiveDate,
}

/// Top-level reconciliation configuration.
///
/// The default configuration carries the fixed production window of
/// 14 through 20 June 2025, so the engine is usable without a configuration
/// directory.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReconcilerConfig {
    /// The window leave coverage is reconciled against.
    pub reference_window: WindowConfig,
}

impl ReconcilerConfig {
    /// Builds the validated reference window from the configured dates.
    ///
    /// Fails with [`crate::error::EngineError::InvalidWindow`] when the
    /// configured start date is after the end date.
    pub fn reference_window(&self) -> EngineResult<ReferenceWindow> {
        ReferenceWindow::new(self.reference_window.start, self.reference_window.end)
    }
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        // The fixed production window: 14..=20 June 2025.
        Self {
            reference_window: WindowConfig {
                start: NaiveDate::from_ymd_opt(2025, 6, 14).expect("valid date"),
                end: NaiveDate::from_ymd_opt(2025, 6, 20).expect("valid date"),
            },
        }
    }
}
