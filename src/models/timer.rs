use crate::utils::time::elapsed_secs;
use serde::{Deserialize, Serialize};

/// The single in-progress (possibly unsaved) timer being edited or run.
///
/// `current_time` holds committed seconds only; a running interval lives in
/// `started_at` and is folded in at pause/save/switch, never on a tick.
/// Invariant: `started_at` is Some exactly when `is_running` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTimer {
    pub current_time: i64,
    pub is_running: bool,
    pub started_at: Option<i64>, // epoch milliseconds
    pub active_tracker_id: Option<i64>,
    pub active_tracker_name: String,
}

impl Default for ActiveTimer {
    fn default() -> Self {
        Self {
            current_time: 0,
            is_running: false,
            started_at: None,
            active_tracker_id: None,
            active_tracker_name: String::new(),
        }
    }
}

impl ActiveTimer {
    /// Seconds to display at `now_ms`: committed seconds plus the live
    /// wall-clock interval when running. Pure; recomputed on every
    /// observation instead of ticking a counter.
    pub fn display_seconds(&self, now_ms: i64) -> i64 {
        match self.started_at {
            Some(ts) if self.is_running => self.current_time + elapsed_secs(now_ms, ts),
            _ => self.current_time,
        }
    }
}
