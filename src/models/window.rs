//! Reference window model.
//!
//! This module defines the ReferenceWindow, the fixed closed date interval
//! that leave coverage is reconciled against.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A closed calendar-date interval `[start, end]`, inclusive of both endpoints.
///
/// The window is an explicit value threaded through every analyzer and
/// resolver call rather than ambient state, so runs against other periods are
/// a matter of passing a different value.
///
/// # Example
///
/// ```
/// use leave_engine::models::ReferenceWindow;
/// use chrono::NaiveDate;
///
/// let window = ReferenceWindow::new(
///     NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
/// ).unwrap();
/// assert_eq!(window.day_count(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReferenceWindow {
    /// Creates a reference window, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if start > end {
            return Err(EngineError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// The first day of the window (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last day of the window (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if the given date falls within the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The number of calendar days in the window.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Returns true if the closed interval `[start, end]` overlaps the window.
    ///
    /// Overlap is `!(end < window.start || start > window.end)`; touching at a
    /// single shared day counts as overlap.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        !(end < self.start || start > self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn june_window() -> ReferenceWindow {
        ReferenceWindow::new(date(2025, 6, 14), date(2025, 6, 20)).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_window() {
        let result = ReferenceWindow::new(date(2025, 6, 20), date(2025, 6, 14));
        assert!(matches!(result, Err(EngineError::InvalidWindow { .. })));
    }

    #[test]
    fn test_single_day_window_is_valid() {
        let window = ReferenceWindow::new(date(2025, 6, 14), date(2025, 6, 14)).unwrap();
        assert_eq!(window.day_count(), 1);
        assert!(window.contains(date(2025, 6, 14)));
    }

    #[test]
    fn test_contains_is_inclusive_of_both_endpoints() {
        let window = june_window();
        assert!(window.contains(date(2025, 6, 14)));
        assert!(window.contains(date(2025, 6, 17)));
        assert!(window.contains(date(2025, 6, 20)));
        assert!(!window.contains(date(2025, 6, 13)));
        assert!(!window.contains(date(2025, 6, 21)));
    }

    #[test]
    fn test_day_count() {
        assert_eq!(june_window().day_count(), 7);
    }

    #[test]
    fn test_overlaps() {
        let window = june_window();
        // Entirely before / after.
        assert!(!window.overlaps(date(2025, 6, 1), date(2025, 6, 13)));
        assert!(!window.overlaps(date(2025, 6, 21), date(2025, 6, 30)));
        // Touching the endpoints.
        assert!(window.overlaps(date(2025, 6, 1), date(2025, 6, 14)));
        assert!(window.overlaps(date(2025, 6, 20), date(2025, 6, 30)));
        // Containing and contained.
        assert!(window.overlaps(date(2025, 6, 10), date(2025, 6, 25)));
        assert!(window.overlaps(date(2025, 6, 16), date(2025, 6, 17)));
    }

    #[test]
    fn test_window_serde_round_trip() {
        let window = june_window();
        let json = serde_json::to_string(&window).unwrap();
        let deserialized: ReferenceWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, window);
    }
}
