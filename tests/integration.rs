//! End-to-end reconciliation scenarios.
//!
//! This test suite runs the full pipeline (roster + ledger -> analysis ->
//! report rows -> assignment updates) over the fixed June 2025 window,
//! covering:
//! - employees with no leave
//! - full coverage by a single interval
//! - partial coverage with a bridgeable and an unbridgeable gap
//! - touching intervals merging across the window
//! - scattered single-day leave with multiple gaps
//! - malformed record skipping and roster authority

use chrono::NaiveDate;

use leave_engine::analysis::{analyze_coverage, merged_overlapping, resolve_gap};
use leave_engine::config::ConfigLoader;
use leave_engine::models::{
    CoverageStatus, EmployeeId, LeaveInterval, LeaveLedger, RawLeaveRecord, ReferenceWindow,
    Roster,
};
use leave_engine::report::{CoverageNote, build_report, plan_assignments};

// =============================================================================
// Test Helpers
// =============================================================================

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

fn window() -> ReferenceWindow {
    ConfigLoader::load("./config")
        .expect("Failed to load config")
        .window()
}

fn interval(employee: &str, reference_id: &str, start: u32, end: u32) -> LeaveInterval {
    LeaveInterval::new(
        EmployeeId::from(employee),
        reference_id.to_string(),
        date(start),
        date(end),
    )
    .unwrap()
}

fn fixture() -> (Roster, LeaveLedger) {
    let roster: Roster = ["E1", "E2", "E3", "E4", "E5"]
        .into_iter()
        .map(EmployeeId::from)
        .collect();

    let ledger: LeaveLedger = [
        // E2: single interval containing the window.
        interval("E2", "200100", 10, 25),
        // E3: two intervals leaving 16-17 June uncovered.
        interval("E3", "300100", 12, 15),
        interval("E3", "300101", 18, 22),
        // E4: touching at 16 June, merging into [13, 20].
        interval("E4", "400100", 13, 16),
        interval("E4", "400101", 16, 20),
        // E5: scattered single days.
        interval("E5", "500100", 14, 14),
        interval("E5", "500101", 17, 17),
        interval("E5", "500102", 20, 20),
    ]
    .into_iter()
    .collect();

    (roster, ledger)
}

// =============================================================================
// Reference-window configuration
// =============================================================================

#[test]
fn test_configured_window_is_june_14_to_20() {
    let window = window();
    assert_eq!(window.start(), date(14));
    assert_eq!(window.end(), date(20));
    assert_eq!(window.day_count(), 7);
}

// =============================================================================
// Scenario classifications
// =============================================================================

#[test]
fn test_e1_no_leave() {
    let (_, ledger) = fixture();
    let result = analyze_coverage(
        &EmployeeId::from("E1"),
        ledger.intervals_for(&EmployeeId::from("E1")),
        &window(),
    );
    assert_eq!(result.status, CoverageStatus::NoLeave);
    assert!(result.details.is_empty());
}

#[test]
fn test_e2_fully_covered_by_single_interval() {
    let (_, ledger) = fixture();
    let result = analyze_coverage(
        &EmployeeId::from("E2"),
        ledger.intervals_for(&EmployeeId::from("E2")),
        &window(),
    );
    assert_eq!(result.status, CoverageStatus::FullyCovered);
    assert_eq!(result.details.len(), 1);
    assert_eq!(result.details[0].leave_start, date(10));
    assert_eq!(result.details[0].leave_end, date(25));
}

#[test]
fn test_e3_partial_with_middle_gap() {
    let (_, ledger) = fixture();
    let intervals = ledger.intervals_for(&EmployeeId::from("E3"));
    let window = window();

    let result = analyze_coverage(&EmployeeId::from("E3"), intervals, &window);
    assert_eq!(result.status, CoverageStatus::PartiallyCovered);

    let merged = merged_overlapping(intervals, &window);
    assert_eq!(merged.len(), 2);

    let resolution = resolve_gap(&merged, &window);
    let segment = resolution.segment.unwrap();
    assert_eq!(segment.start, date(16));
    assert_eq!(segment.end, date(17));
    assert!(!resolution.has_multiple);
}

#[test]
fn test_e4_touching_intervals_merge_to_full_coverage() {
    let (_, ledger) = fixture();
    let intervals = ledger.intervals_for(&EmployeeId::from("E4"));
    let window = window();

    let merged = merged_overlapping(intervals, &window);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].start, date(13));
    assert_eq!(merged[0].end, date(20));
    assert_eq!(merged[0].joined_reference_ids(), "400100, 400101");

    let result = analyze_coverage(&EmployeeId::from("E4"), intervals, &window);
    assert_eq!(result.status, CoverageStatus::FullyCovered);
}

#[test]
fn test_e5_scattered_days_first_gap_and_multiple_flag() {
    let (_, ledger) = fixture();
    let intervals = ledger.intervals_for(&EmployeeId::from("E5"));
    let window = window();

    let result = analyze_coverage(&EmployeeId::from("E5"), intervals, &window);
    assert_eq!(result.status, CoverageStatus::PartiallyCovered);

    let resolution = resolve_gap(&merged_overlapping(intervals, &window), &window);
    let segment = resolution.segment.unwrap();
    assert_eq!(segment.start, date(15));
    assert_eq!(segment.end, date(16));
    // 18-19 June stay uncovered too.
    assert!(resolution.has_multiple);
}

// =============================================================================
// Report rows
// =============================================================================

#[test]
fn test_report_has_one_row_per_detail_and_one_for_no_leave() {
    let (roster, ledger) = fixture();
    let rows = build_report(&roster, &ledger, &window());

    // E1: 1 row, E2: 1, E3: 2, E4: 2, E5: 3.
    assert_eq!(rows.len(), 9);

    let e1_rows: Vec<_> = rows
        .iter()
        .filter(|r| r.employee == EmployeeId::from("E1"))
        .collect();
    assert_eq!(e1_rows.len(), 1);
    assert_eq!(e1_rows[0].status, CoverageStatus::NoLeave);
    assert!(e1_rows[0].detail.is_none());

    let e5_rows: Vec<_> = rows
        .iter()
        .filter(|r| r.employee == EmployeeId::from("E5"))
        .collect();
    assert_eq!(e5_rows.len(), 3);
    for row in &e5_rows {
        assert_eq!(row.status, CoverageStatus::PartiallyCovered);
        assert!(row.detail.is_some());
    }
}

#[test]
fn test_report_rows_keep_original_unmerged_dates() {
    let (roster, ledger) = fixture();
    let rows = build_report(&roster, &ledger, &window());

    // E4's records merged for classification, but each row keeps its own dates.
    let e4_rows: Vec<_> = rows
        .iter()
        .filter(|r| r.employee == EmployeeId::from("E4"))
        .collect();
    assert_eq!(e4_rows.len(), 2);
    let first = e4_rows[0].detail.as_ref().unwrap();
    let second = e4_rows[1].detail.as_ref().unwrap();
    assert_eq!((first.leave_start, first.leave_end), (date(13), date(16)));
    assert_eq!((second.leave_start, second.leave_end), (date(16), date(20)));
    for row in &e4_rows {
        assert_eq!(row.status, CoverageStatus::FullyCovered);
    }
}

#[test]
fn test_unknown_employee_in_ledger_is_not_reported() {
    let (roster, mut ledger) = fixture();
    ledger.push(interval("STRANGER", "900100", 14, 20));

    let rows = build_report(&roster, &ledger, &window());
    assert!(
        rows.iter()
            .all(|r| r.employee != EmployeeId::from("STRANGER"))
    );
    assert_eq!(rows.len(), 9);
}

// =============================================================================
// Assignment updates
// =============================================================================

#[test]
fn test_assignment_updates_for_all_scenarios() {
    let (roster, ledger) = fixture();
    let updates = plan_assignments(&roster, &ledger, &window());
    assert_eq!(updates.len(), 5);

    let by_id = |id: &str| {
        updates
            .iter()
            .find(|u| u.employee == EmployeeId::from(id))
            .unwrap()
    };

    // E1: no leave, the whole window needs covering.
    let e1 = by_id("E1");
    assert_eq!(e1.start_date, Some(date(14)));
    assert_eq!(e1.end_date, Some(date(20)));
    assert_eq!(e1.note, CoverageNote::NoLeave);

    // E2: fully covered, nothing to cover.
    let e2 = by_id("E2");
    assert_eq!(e2.start_date, None);
    assert_eq!(
        e2.note,
        CoverageNote::CoveredByLeave {
            reference_ids: "200100".to_string(),
        }
    );

    // E3: first gap 16-17 June.
    let e3 = by_id("E3");
    assert_eq!(e3.start_date, Some(date(16)));
    assert_eq!(e3.end_date, Some(date(17)));
    assert_eq!(
        e3.note,
        CoverageNote::PartiallyCovered {
            reference_ids: "300100, 300101".to_string(),
            multiple_segments: false,
        }
    );

    // E4: merged to full coverage, joined reference ids.
    let e4 = by_id("E4");
    assert_eq!(e4.start_date, None);
    assert_eq!(
        e4.note,
        CoverageNote::CoveredByLeave {
            reference_ids: "400100, 400101".to_string(),
        }
    );

    // E5: first gap 15-16 June, more gaps remain.
    let e5 = by_id("E5");
    assert_eq!(e5.start_date, Some(date(15)));
    assert_eq!(e5.end_date, Some(date(16)));
    assert_eq!(
        e5.note,
        CoverageNote::PartiallyCovered {
            reference_ids: "500100, 500101, 500102".to_string(),
            multiple_segments: true,
        }
    );
}

#[test]
fn test_partial_status_with_no_actual_gap_reconciles_as_covered() {
    let roster: Roster = [EmployeeId::from("E6")].into_iter().collect();
    let ledger: LeaveLedger = [
        interval("E6", "600100", 14, 17),
        interval("E6", "600101", 18, 20),
    ]
    .into_iter()
    .collect();
    let window = window();

    // Consecutive days without a shared boundary: classified partial...
    let result = analyze_coverage(
        &EmployeeId::from("E6"),
        ledger.intervals_for(&EmployeeId::from("E6")),
        &window,
    );
    assert_eq!(result.status, CoverageStatus::PartiallyCovered);

    // ...but the resolver finds nothing uncovered, and the update says so.
    let updates = plan_assignments(&roster, &ledger, &window);
    assert_eq!(updates[0].start_date, None);
    assert_eq!(
        updates[0].note,
        CoverageNote::CoveredByPartialLeave {
            reference_ids: "600100, 600101".to_string(),
        }
    );
}

// =============================================================================
// Malformed records
// =============================================================================

#[test]
fn test_malformed_records_are_skipped_not_fatal() {
    let records = vec![
        RawLeaveRecord {
            employee: EmployeeId::from("E2"),
            reference_id: "inverted".to_string(),
            start: date(25),
            end: date(10),
        },
        RawLeaveRecord {
            employee: EmployeeId::from("E2"),
            reference_id: "200100".to_string(),
            start: date(10),
            end: date(25),
        },
    ];

    let (ledger, skipped) = LeaveLedger::from_records(records);
    assert_eq!(skipped, 1);

    let roster: Roster = [EmployeeId::from("E2")].into_iter().collect();
    let rows = build_report(&roster, &ledger, &window());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, CoverageStatus::FullyCovered);
}
