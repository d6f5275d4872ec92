//! Tests for action records and priority levels.

use chrono::{DateTime, Duration, TimeZone, Utc};
use kaizen_core::record::{ActionRecord, Priority};
use kaizen_core::retro::{KptaCategory, KptaItem};

fn ts(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, h, m, 0).unwrap()
}

fn make_test_record(text: &str) -> ActionRecord {
    ActionRecord::new(text, Priority::Medium, ts(9, 0))
}

// ── Construction ──

#[test]
fn new_record_is_incomplete_and_stamped() {
    let record = make_test_record("write weekly review");

    assert!(!record.is_completed());
    assert!(record.completed_at.is_none());
    assert!(!record.from_try_item);
    assert!(record.deadline.is_none());
    assert!(record.retrospective_id.is_none());
    assert_eq!(record.created_at, ts(9, 0));
    assert_eq!(record.updated_at, record.created_at);
}

#[test]
fn builder_methods_fill_optional_fields() {
    let record = make_test_record("prepare slides")
        .with_deadline(ts(18, 0))
        .with_notes("for Monday")
        .owned_by("retro-1");

    assert_eq!(record.deadline, Some(ts(18, 0)));
    assert_eq!(record.notes.as_deref(), Some("for Monday"));
    assert_eq!(record.retrospective_id.as_deref(), Some("retro-1"));
}

#[test]
fn from_try_links_source_item() {
    let item = KptaItem::new("retro-1", "batch email twice a day", KptaCategory::Try, 0, ts(8, 0));
    let record = ActionRecord::from_try(&item, Priority::High, ts(9, 30));

    assert!(record.from_try_item);
    assert_eq!(record.text, item.text);
    assert_eq!(record.source_item_id.as_deref(), Some(item.id.as_str()));
    assert_eq!(record.retrospective_id.as_deref(), Some("retro-1"));
    assert_eq!(record.priority, Priority::High);
    assert_eq!(record.created_at, ts(9, 30));
}

// ── Completion ──

#[test]
fn complete_sets_timestamp_and_touches_updated_at() {
    let mut record = make_test_record("call dentist");
    record.complete(ts(14, 0));

    assert!(record.is_completed());
    assert_eq!(record.completed_at, Some(ts(14, 0)));
    assert_eq!(record.updated_at, ts(14, 0));
}

#[test]
fn reopen_clears_completion() {
    let mut record = make_test_record("call dentist");
    record.complete(ts(14, 0));
    record.reopen(ts(15, 0));

    assert!(!record.is_completed());
    assert!(record.completed_at.is_none());
    assert_eq!(record.updated_at, ts(15, 0));
}

#[test]
fn set_completed_round_trips() {
    let mut record = make_test_record("stretch");
    record.set_completed(true, ts(10, 0));
    assert!(record.is_completed());

    record.set_completed(false, ts(11, 0));
    assert!(!record.is_completed());
    assert_eq!(record.updated_at, ts(11, 0));
}

#[test]
fn mutators_touch_updated_at() {
    let mut record = make_test_record("draft outline");

    record.set_text("draft full outline", ts(10, 0));
    assert_eq!(record.updated_at, ts(10, 0));

    record.set_priority(Priority::High, ts(10, 5));
    assert_eq!(record.updated_at, ts(10, 5));

    record.set_deadline(Some(ts(17, 0)), ts(10, 10));
    assert_eq!(record.updated_at, ts(10, 10));

    record.set_notes(Some("two pages max".to_string()), ts(10, 15));
    assert_eq!(record.updated_at, ts(10, 15));
}

// ── Overdue ──

#[test]
fn overdue_requires_past_deadline_and_incomplete() {
    let now = ts(12, 0);

    let no_deadline = make_test_record("no deadline");
    assert!(!no_deadline.is_overdue(now));

    let future = make_test_record("future").with_deadline(now + Duration::hours(1));
    assert!(!future.is_overdue(now));

    let past = make_test_record("past").with_deadline(now - Duration::hours(1));
    assert!(past.is_overdue(now));

    let mut past_done = make_test_record("past done").with_deadline(now - Duration::hours(1));
    past_done.complete(now - Duration::minutes(30));
    assert!(!past_done.is_overdue(now));
}

#[test]
fn deadline_exactly_now_is_not_overdue() {
    let now = ts(12, 0);
    let record = make_test_record("due right now").with_deadline(now);
    assert!(!record.is_overdue(now));
}

// ── Identity ──

#[test]
fn equality_is_identity_not_content() {
    let record = make_test_record("original");
    let mut snapshot = record.clone();
    snapshot.set_text("edited", ts(16, 0));

    assert_eq!(record, snapshot);

    let other = make_test_record("original");
    assert_ne!(record, other);
}

#[test]
fn ids_are_unique() {
    let a = make_test_record("a");
    let b = make_test_record("a");
    assert_ne!(a.id, b.id);
}

// ── Priority ──

#[test]
fn priority_orders_high_before_low() {
    assert!(Priority::High < Priority::Medium);
    assert!(Priority::Medium < Priority::Low);

    let mut levels = vec![Priority::Low, Priority::High, Priority::Medium];
    levels.sort();
    assert_eq!(levels, vec![Priority::High, Priority::Medium, Priority::Low]);
}

#[test]
fn priority_ranks_are_dense_and_distinct() {
    let ranks: Vec<u8> = Priority::ALL.iter().map(|p| p.rank()).collect();
    assert_eq!(ranks, vec![0, 1, 2]);
    assert_eq!(Priority::ALL.len(), Priority::COUNT);
}

#[test]
fn priority_display_tables_are_total() {
    for priority in Priority::ALL {
        assert!(!priority.label().is_empty());
        assert!(!priority.icon().is_empty());
        assert!(priority.color().starts_with('#'));
    }
}

#[test]
fn priority_serializes_lowercase() {
    let json = serde_json::to_string(&Priority::High).unwrap();
    assert_eq!(json, "\"high\"");

    let parsed: Priority = serde_json::from_str("\"low\"").unwrap();
    assert_eq!(parsed, Priority::Low);
}

#[test]
fn record_serde_round_trip_preserves_fields() {
    let mut record = make_test_record("ship release notes")
        .with_deadline(ts(18, 0))
        .owned_by("retro-7");
    record.complete(ts(17, 0));

    let json = serde_json::to_string(&record).unwrap();
    let back: ActionRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id, record.id);
    assert_eq!(back.text, record.text);
    assert_eq!(back.deadline, record.deadline);
    assert_eq!(back.completed_at, record.completed_at);
    assert_eq!(back.retrospective_id, record.retrospective_id);
}
