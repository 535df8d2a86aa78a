use crate::models::note::Note;
use crate::models::prefs::{DEFAULT_DOT_COLOR, Theme};
use crate::models::timer::ActiveTimer;
use crate::models::tracker::Tracker;
use serde::{Deserialize, Serialize};

/// The serializable subset of store state: exactly the persisted
/// snapshot shape. Timer fields are flattened to the top level, so the
/// JSON reads `{"trackers":[...],"notes":[...],"currentTime":0,...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    pub trackers: Vec<Tracker>,
    pub notes: Vec<Note>,
    #[serde(flatten)]
    pub timer: ActiveTimer,
    pub theme: Theme,
    pub dot_color: String,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            trackers: Vec::new(),
            notes: Vec::new(),
            timer: ActiveTimer::default(),
            theme: Theme::default(),
            dot_color: DEFAULT_DOT_COLOR.to_string(),
        }
    }
}
