//! Loose merge of a persisted snapshot over the compiled-in defaults.
//!
//! Every field is treated as optional-with-default: persisted values win
//! when present, unknown extra fields are ignored, malformed input falls
//! back to the defaults instead of aborting the load. Merging the same
//! snapshot twice yields the same state as merging it once.

use super::state::StoreState;
use crate::models::prefs::Theme;
use serde_json::Value;

/// Merge a raw persisted snapshot (JSON text) over the default state.
pub fn merge_snapshot(raw: &str) -> StoreState {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => merge_value(&value),
        Err(_) => StoreState::default(),
    }
}

fn merge_value(value: &Value) -> StoreState {
    let mut state = StoreState::default();
    let Some(obj) = value.as_object() else {
        return state;
    };

    if let Some(raw_trackers) = obj.get("trackers").and_then(Value::as_array) {
        state.trackers = raw_trackers
            .iter()
            .filter_map(|t| serde_json::from_value(t.clone()).ok())
            .collect();
    }

    if let Some(raw_notes) = obj.get("notes").and_then(Value::as_array) {
        state.notes = raw_notes
            .iter()
            .filter_map(|n| serde_json::from_value(migrate_note(n.clone())).ok())
            .collect();
    }

    // currentTime defaults to zero when absent from the snapshot
    state.timer.current_time = obj
        .get("currentTime")
        .and_then(Value::as_i64)
        .unwrap_or(0)
        .max(0);
    state.timer.is_running = obj
        .get("isRunning")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    state.timer.started_at = obj.get("startedAt").and_then(Value::as_i64);
    state.timer.active_tracker_id = obj.get("activeTrackerId").and_then(Value::as_i64);
    if let Some(name) = obj.get("activeTrackerName").and_then(Value::as_str) {
        state.timer.active_tracker_name = name.to_string();
    }

    if let Some(theme) = obj
        .get("theme")
        .and_then(Value::as_str)
        .and_then(Theme::from_code)
    {
        state.theme = theme;
    }
    if let Some(color) = obj.get("dotColor").and_then(Value::as_str) {
        state.dot_color = color.to_string();
    }

    // Repair the started_at <-> is_running invariant after a partial
    // or hand-edited snapshot.
    if !state.timer.is_running {
        state.timer.started_at = None;
    } else if state.timer.started_at.is_none() {
        state.timer.is_running = false;
    }

    state
}

/// Rewrite a legacy note object lacking the `type` discriminant to a
/// text note. Notes persisted before todo lists existed had no `type`.
fn migrate_note(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut()
        && !obj.contains_key("type")
    {
        obj.insert("type".to_string(), Value::String("text".to_string()));
    }
    value
}
