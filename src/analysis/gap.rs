//! Reference-period gap resolution.
//!
//! This module finds the runs of window days left uncovered by an employee's
//! merged leave, working by sorted-interval complementation rather than by
//! materializing every calendar day, so the cost does not grow with the
//! window length.

use chrono::NaiveDate;

use crate::models::{GapResolution, MergedInterval, ReferenceWindow, UncoveredSegment};

/// Resolves the first uncovered gap in the window for a partially covered
/// employee.
///
/// Returns the first (by date order) maximal run of consecutive window days
/// not covered by any merged run, together with a flag that is true iff
/// uncovered days remain outside that first run. A `None` segment signals
/// that the merged leave covers every window day after all: the per-record
/// detail view can disagree with the merged view, and this emptiness check is
/// authoritative for consumers needing an actionable gap.
///
/// # Example
///
/// ```
/// use leave_engine::analysis::resolve_gap;
/// use leave_engine::models::{MergedInterval, ReferenceWindow};
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2025, 6, d).unwrap();
/// let window = ReferenceWindow::new(date(14), date(20)).unwrap();
/// let merged = vec![
///     MergedInterval { start: date(12), end: date(15), reference_ids: vec!["a".into()] },
///     MergedInterval { start: date(18), end: date(22), reference_ids: vec!["b".into()] },
/// ];
///
/// let resolution = resolve_gap(&merged, &window);
/// let segment = resolution.segment.unwrap();
/// assert_eq!(segment.start, date(16));
/// assert_eq!(segment.end, date(17));
/// assert!(!resolution.has_multiple);
/// ```
pub fn resolve_gap(merged: &[MergedInterval], window: &ReferenceWindow) -> GapResolution {
    let segments = uncovered_segments(merged, window);
    GapResolution {
        segment: segments.first().copied(),
        has_multiple: segments.len() > 1,
    }
}

/// Computes every maximal uncovered run of window days, in date order.
///
/// Each merged run is clipped to the window; runs wholly outside the window
/// or with `start > end` contribute nothing. A cursor then walks the window
/// from its first day: each clipped run ahead of the cursor closes an
/// uncovered segment, and the cursor jumps past the run's end. Days after the
/// last run form the final segment.
///
/// Every returned segment is a subset of the window and disjoint from all
/// merged runs.
pub fn uncovered_segments(
    merged: &[MergedInterval],
    window: &ReferenceWindow,
) -> Vec<UncoveredSegment> {
    let mut covered: Vec<(NaiveDate, NaiveDate)> = merged
        .iter()
        .filter(|run| run.start <= run.end)
        .filter(|run| window.overlaps(run.start, run.end))
        .map(|run| (run.start.max(window.start()), run.end.min(window.end())))
        .collect();
    covered.sort_by_key(|&(start, _)| start);

    let mut segments = Vec::new();
    let mut cursor = window.start();

    for (start, end) in covered {
        if cursor < start {
            // start > cursor, so the predecessor day exists.
            if let Some(gap_end) = start.pred_opt() {
                segments.push(UncoveredSegment {
                    start: cursor,
                    end: gap_end,
                });
            }
        }
        if end >= cursor {
            match end.succ_opt() {
                Some(next) => cursor = next,
                // Covered through the end of the calendar.
                None => return segments,
            }
            if cursor > window.end() {
                return segments;
            }
        }
    }

    segments.push(UncoveredSegment {
        start: cursor,
        end: window.end(),
    });
    segments
}
