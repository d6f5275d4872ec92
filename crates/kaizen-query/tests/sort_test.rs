//! Tests for the sort stage.

use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashSet;

use kaizen_core::query::SortOrder;
use kaizen_core::record::{ActionRecord, Priority};
use kaizen_query::sort;

fn ts(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, h, m, 0).unwrap()
}

fn make_record(text: &str, priority: Priority, created: DateTime<Utc>) -> ActionRecord {
    ActionRecord::new(text, priority, created)
}

fn texts(records: &[ActionRecord]) -> Vec<&str> {
    records.iter().map(|r| r.text.as_str()).collect()
}

// ── Created orders ──

#[test]
fn created_asc_puts_oldest_first() {
    let records = vec![
        make_record("second", Priority::Medium, ts(10, 0)),
        make_record("first", Priority::Medium, ts(9, 0)),
        make_record("third", Priority::Medium, ts(11, 0)),
    ];

    let sorted = sort::apply(&records, SortOrder::CreatedAsc);
    assert_eq!(texts(&sorted), vec!["first", "second", "third"]);
}

#[test]
fn created_desc_puts_newest_first() {
    let records = vec![
        make_record("second", Priority::Medium, ts(10, 0)),
        make_record("first", Priority::Medium, ts(9, 0)),
        make_record("third", Priority::Medium, ts(11, 0)),
    ];

    let sorted = sort::apply(&records, SortOrder::CreatedDesc);
    assert_eq!(texts(&sorted), vec!["third", "second", "first"]);
}

#[test]
fn created_orders_are_stable_on_equal_timestamps() {
    let records = vec![
        make_record("a", Priority::High, ts(9, 0)),
        make_record("b", Priority::Low, ts(9, 0)),
        make_record("c", Priority::Medium, ts(9, 0)),
    ];

    let asc = sort::apply(&records, SortOrder::CreatedAsc);
    assert_eq!(texts(&asc), vec!["a", "b", "c"]);

    let desc = sort::apply(&records, SortOrder::CreatedDesc);
    assert_eq!(texts(&desc), vec!["a", "b", "c"]);
}

// ── Deadline orders ──

#[test]
fn deadline_asc_puts_dated_before_undated() {
    let undated = make_record("undated", Priority::Medium, ts(9, 0));
    let dated = make_record("dated", Priority::Medium, ts(10, 0)).with_deadline(ts(18, 0));

    let sorted = sort::apply(&[undated, dated], SortOrder::DeadlineAsc);
    assert_eq!(texts(&sorted), vec!["dated", "undated"]);
}

#[test]
fn deadline_desc_puts_undated_first() {
    let undated = make_record("undated", Priority::Medium, ts(9, 0));
    let dated = make_record("dated", Priority::Medium, ts(10, 0)).with_deadline(ts(18, 0));

    let sorted = sort::apply(&[undated.clone(), dated.clone()], SortOrder::DeadlineDesc);
    assert_eq!(texts(&sorted), vec!["undated", "dated"]);

    // Same result from the other input order.
    let sorted = sort::apply(&[dated, undated], SortOrder::DeadlineDesc);
    assert_eq!(texts(&sorted), vec!["undated", "dated"]);
}

#[test]
fn deadline_asc_orders_dated_then_undated_by_creation() {
    let records = vec![
        make_record("late undated", Priority::Medium, ts(11, 0)),
        make_record("due tonight", Priority::Medium, ts(9, 0)).with_deadline(ts(20, 0)),
        make_record("early undated", Priority::Medium, ts(8, 0)),
        make_record("due noon", Priority::Medium, ts(10, 0)).with_deadline(ts(12, 0)),
    ];

    let sorted = sort::apply(&records, SortOrder::DeadlineAsc);
    assert_eq!(
        texts(&sorted),
        vec!["due noon", "due tonight", "early undated", "late undated"],
    );
}

#[test]
fn deadline_desc_orders_undated_by_creation_desc_then_dated() {
    let records = vec![
        make_record("late undated", Priority::Medium, ts(11, 0)),
        make_record("due tonight", Priority::Medium, ts(9, 0)).with_deadline(ts(20, 0)),
        make_record("early undated", Priority::Medium, ts(8, 0)),
        make_record("due noon", Priority::Medium, ts(10, 0)).with_deadline(ts(12, 0)),
    ];

    let sorted = sort::apply(&records, SortOrder::DeadlineDesc);
    assert_eq!(
        texts(&sorted),
        vec!["late undated", "early undated", "due tonight", "due noon"],
    );
}

// ── Priority orders ──

#[test]
fn priority_high_first_then_low_first_reverse_groups() {
    let a = make_record("a", Priority::High, ts(9, 0));
    let b = make_record("b", Priority::Low, ts(10, 0));

    let high_first = sort::apply(&[a.clone(), b.clone()], SortOrder::PriorityHighFirst);
    assert_eq!(texts(&high_first), vec!["a", "b"]);

    let low_first = sort::apply(&[a, b], SortOrder::PriorityLowFirst);
    assert_eq!(texts(&low_first), vec!["b", "a"]);
}

#[test]
fn priority_ties_break_newest_created_first() {
    let records = vec![
        make_record("older medium", Priority::Medium, ts(9, 0)),
        make_record("newer medium", Priority::Medium, ts(10, 0)),
        make_record("high", Priority::High, ts(8, 0)),
    ];

    let sorted = sort::apply(&records, SortOrder::PriorityHighFirst);
    assert_eq!(texts(&sorted), vec!["high", "newer medium", "older medium"]);

    let sorted = sort::apply(&records, SortOrder::PriorityLowFirst);
    assert_eq!(texts(&sorted), vec!["newer medium", "older medium", "high"]);
}

// ── Updated order ──

#[test]
fn updated_desc_tracks_mutations() {
    let mut stale = make_record("stale", Priority::Medium, ts(9, 0));
    let mut fresh = make_record("fresh", Priority::Medium, ts(8, 0));
    stale.set_notes(None, ts(10, 0));
    fresh.set_text("fresh edit", ts(11, 0));

    let sorted = sort::apply(&[stale, fresh], SortOrder::UpdatedDesc);
    assert_eq!(texts(&sorted), vec!["fresh edit", "stale"]);
}

// ── General ──

#[test]
fn every_order_returns_a_permutation() {
    let mut third = make_record("third", Priority::Low, ts(11, 0));
    third.complete(ts(11, 30));
    let records = vec![
        make_record("first", Priority::High, ts(9, 0)).with_deadline(ts(18, 0)),
        make_record("second", Priority::Medium, ts(10, 0)),
        third,
    ];

    let input_ids: HashSet<String> = records.iter().map(|r| r.id.clone()).collect();
    for order in SortOrder::ALL {
        let sorted = sort::apply(&records, order);
        assert_eq!(sorted.len(), records.len(), "length changed under {order}");
        let output_ids: HashSet<String> = sorted.iter().map(|r| r.id.clone()).collect();
        assert_eq!(output_ids, input_ids, "records changed under {order}");
    }
}

#[test]
fn sorting_an_empty_snapshot_is_fine() {
    for order in SortOrder::ALL {
        assert!(sort::apply(&[], order).is_empty());
    }
}

#[test]
fn comparators_are_reflexively_equal() {
    let record = make_record("self", Priority::Medium, ts(9, 0)).with_deadline(ts(10, 0));
    for order in SortOrder::ALL {
        let cmp = sort::comparator(order);
        assert_eq!(cmp(&record, &record), std::cmp::Ordering::Equal, "under {order}");
    }
}
