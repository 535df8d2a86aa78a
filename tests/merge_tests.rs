//! Snapshot load/merge behavior: field-by-field defaults, legacy note
//! migration, invariant repair, idempotence.

use ticktrack::models::note::Note;
use ticktrack::models::prefs::Theme;
use ticktrack::store::{StoreState, merge_snapshot};

#[test]
fn empty_object_yields_defaults() {
    let state = merge_snapshot("{}");
    assert_eq!(state, StoreState::default());
}

#[test]
fn malformed_json_falls_back_to_defaults() {
    assert_eq!(merge_snapshot("not json at all"), StoreState::default());
    assert_eq!(merge_snapshot("[1,2,3]"), StoreState::default());
}

#[test]
fn persisted_values_win_over_defaults() {
    let raw = r##"{
        "trackers": [{"id": 1, "name": "Task", "time": 100, "createdAt": "2024-01-01T10:00:00Z"}],
        "currentTime": 42,
        "isRunning": false,
        "activeTrackerName": "draft",
        "theme": "night",
        "dotColor": "#123456"
    }"##;

    let state = merge_snapshot(raw);
    assert_eq!(state.trackers.len(), 1);
    assert_eq!(state.trackers[0].name, "Task");
    assert_eq!(state.timer.current_time, 42);
    assert_eq!(state.timer.active_tracker_name, "draft");
    assert_eq!(state.theme, Theme::Night);
    assert_eq!(state.dot_color, "#123456");
}

#[test]
fn missing_current_time_defaults_to_zero() {
    let state = merge_snapshot(r#"{"trackers": [], "notes": []}"#);
    assert_eq!(state.timer.current_time, 0);
}

#[test]
fn legacy_note_without_discriminant_becomes_text() {
    let raw = r#"{
        "notes": [{"id": 7, "content": "old note", "createdAt": "2023-06-01T08:30:00Z"}]
    }"#;

    let state = merge_snapshot(raw);
    assert_eq!(state.notes.len(), 1);
    match &state.notes[0] {
        Note::Text {
            id,
            content,
            created_at,
        } => {
            assert_eq!(*id, 7);
            assert_eq!(content, "old note");
            assert_eq!(created_at, "2023-06-01T08:30:00Z");
        }
        _ => panic!("legacy note should migrate to a text note"),
    }
}

#[test]
fn tagged_notes_keep_their_variant() {
    let raw = r#"{
        "notes": [
            {"id": 1, "type": "todo", "title": "List", "items": [{"id": 2, "text": "x", "completed": true}], "createdAt": "2024-01-01T00:00:00Z"},
            {"id": 3, "type": "text", "content": "hello", "createdAt": "2024-01-02T00:00:00Z"}
        ]
    }"#;

    let state = merge_snapshot(raw);
    assert!(state.notes[0].is_todo());
    assert!(state.notes[1].is_text());
}

#[test]
fn unknown_fields_are_ignored() {
    let raw = r#"{"currentTime": 5, "someFutureField": {"deep": true}}"#;
    let state = merge_snapshot(raw);
    assert_eq!(state.timer.current_time, 5);
}

#[test]
fn invalid_theme_string_falls_back_to_default() {
    let state = merge_snapshot(r#"{"theme": "solarized"}"#);
    assert_eq!(state.theme, Theme::Darkest);
}

#[test]
fn running_without_stamp_is_repaired_to_stopped() {
    let state = merge_snapshot(r#"{"isRunning": true, "startedAt": null}"#);
    assert!(!state.timer.is_running);
    assert_eq!(state.timer.started_at, None);
}

#[test]
fn stale_stamp_without_running_flag_is_cleared() {
    let state = merge_snapshot(r#"{"isRunning": false, "startedAt": 1700000000000}"#);
    assert_eq!(state.timer.started_at, None);
}

#[test]
fn running_snapshot_round_trips() {
    let raw = r#"{"currentTime": 30, "isRunning": true, "startedAt": 1700000000000}"#;
    let state = merge_snapshot(raw);
    assert!(state.timer.is_running);
    assert_eq!(state.timer.started_at, Some(1_700_000_000_000));
    assert_eq!(state.timer.current_time, 30);
}

#[test]
fn merge_is_idempotent() {
    let raw = r#"{
        "trackers": [{"id": 1, "name": "Task", "time": 100, "createdAt": "2024-01-01T10:00:00Z"}],
        "notes": [{"id": 2, "content": "legacy", "createdAt": "2024-01-01T11:00:00Z"}],
        "currentTime": 9,
        "theme": "night"
    }"#;

    let once = merge_snapshot(raw);
    let again = merge_snapshot(&serde_json::to_string(&once).unwrap());
    assert_eq!(once, again);
}

#[test]
fn serialized_state_uses_the_wire_field_names() {
    let state = StoreState::default();
    let json = serde_json::to_string(&state).unwrap();

    for key in [
        "trackers",
        "notes",
        "currentTime",
        "isRunning",
        "startedAt",
        "activeTrackerId",
        "activeTrackerName",
        "theme",
        "dotColor",
    ] {
        assert!(json.contains(key), "snapshot is missing key {key}");
    }
}

#[test]
fn malformed_note_entries_are_dropped_not_fatal() {
    let raw = r#"{
        "notes": [
            {"id": "not a number", "content": 12},
            {"id": 5, "type": "text", "content": "good", "createdAt": "2024-01-01T00:00:00Z"}
        ]
    }"#;

    let state = merge_snapshot(raw);
    assert_eq!(state.notes.len(), 1);
    assert_eq!(state.notes[0].id(), 5);
}
