//! Canonical application state and every mutation operation on it.
//!
//! The store is the single writer: command handlers call these operations
//! and render from `state()`. Every mutation persists the serializable
//! state before returning. Invalid input (empty name, unknown id, wrong
//! note variant) is a silent no-op returning `false`; there is no caller
//! positioned to recover beyond "nothing happened".

mod merge;
mod state;

pub use merge::merge_snapshot;
pub use state::StoreState;

use crate::config::Config;
use crate::db::{initialize, log as oplog, pool::DbPool, queries};
use crate::errors::{AppError, AppResult};
use crate::models::note::{Note, TodoItem};
use crate::models::prefs::Theme;
use crate::models::timer::ActiveTimer;
use crate::models::tracker::{Tracker, TrackerUpdate};
use crate::ui::messages;
use crate::utils::date;
use crate::utils::time::{elapsed_secs, now_ms};

pub struct Store {
    state: StoreState,
    storage: Option<DbPool>,
}

/// Ids are creation-time milliseconds; bump past the newest existing id
/// when two creations land in the same millisecond.
fn next_id<I: Iterator<Item = i64>>(now: i64, existing: I) -> i64 {
    match existing.max() {
        Some(max) if now <= max => max + 1,
        _ => now,
    }
}

impl Store {
    /// Open the persistent store. When the database cannot be opened or
    /// initialized, degrades to a memory-only store for the session:
    /// mutations keep working, durability is lost.
    pub fn open(cfg: &Config) -> Store {
        match Self::open_storage(&cfg.database) {
            Ok((pool, state)) => Store {
                state,
                storage: Some(pool),
            },
            Err(e) => {
                messages::warning(format!(
                    "Storage unavailable ({e}); changes will not be saved"
                ));
                Store {
                    state: StoreState::default(),
                    storage: None,
                }
            }
        }
    }

    fn open_storage(path: &str) -> AppResult<(DbPool, StoreState)> {
        let pool = DbPool::new(path)?;
        initialize::init_db(&pool.conn)?;
        let state = match queries::load_snapshot(&pool.conn)? {
            Some(raw) => merge::merge_snapshot(&raw),
            None => StoreState::default(),
        };
        Ok((pool, state))
    }

    /// Memory-only store with default state. Used by tests and as the
    /// degraded mode when storage is unavailable.
    pub fn in_memory() -> Store {
        Store {
            state: StoreState::default(),
            storage: None,
        }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    /// Write the snapshot and an op-log line. A failed write drops the
    /// storage handle: the session continues in memory only.
    fn persist(&mut self, operation: &str, target: &str, message: &str) {
        let Some(pool) = &self.storage else {
            return;
        };

        let result = serde_json::to_string(&self.state)
            .map_err(AppError::from)
            .and_then(|json| queries::save_snapshot(&pool.conn, &json));

        match result {
            Ok(()) => {
                let _ = oplog::record(&pool.conn, operation, target, message);
            }
            Err(e) => {
                messages::warning(format!(
                    "Failed to persist state ({e}); continuing in memory only"
                ));
                self.storage = None;
            }
        }
    }

    // ---------------------------
    // Timer engine
    // ---------------------------

    /// Seconds the display should show right now.
    pub fn display_seconds(&self) -> i64 {
        self.state.timer.display_seconds(now_ms())
    }

    pub fn play(&mut self) -> bool {
        self.play_at(now_ms())
    }

    /// Stopped -> Running: stamp the start instant, committed seconds
    /// unchanged.
    pub fn play_at(&mut self, now: i64) -> bool {
        if self.state.timer.is_running {
            return false;
        }
        self.state.timer.is_running = true;
        self.state.timer.started_at = Some(now);
        self.persist("play", "", "Timer started");
        true
    }

    pub fn pause(&mut self) -> bool {
        self.pause_at(now_ms())
    }

    /// Running -> Stopped: fold the wall-clock interval into the committed
    /// seconds and clear the stamp. The commit happens inside this single
    /// call; deferring it would lose the in-flight seconds.
    pub fn pause_at(&mut self, now: i64) -> bool {
        if !self.state.timer.is_running {
            return false;
        }
        let elapsed = self
            .state
            .timer
            .started_at
            .map(|ts| elapsed_secs(now, ts))
            .unwrap_or(0);
        self.state.timer.current_time += elapsed;
        self.state.timer.is_running = false;
        self.state.timer.started_at = None;
        self.persist("pause", "", "Timer paused");
        true
    }

    pub fn reset_timer(&mut self) {
        self.reset_timer_at(now_ms())
    }

    /// Zero the committed seconds. A running timer keeps running from
    /// zero (fresh stamp); a stopped timer stays stopped at zero.
    pub fn reset_timer_at(&mut self, now: i64) {
        self.state.timer.current_time = 0;
        self.state.timer.started_at = if self.state.timer.is_running {
            Some(now)
        } else {
            None
        };
        self.persist("reset", "", "Timer reset");
    }

    /// Low-level setter: overwrite the committed seconds.
    pub fn set_current_time(&mut self, seconds: i64) {
        self.state.timer.current_time = seconds.max(0);
        self.persist("edit", "", "Timer value set");
    }

    /// Low-level setter: flip the running flag, stamping or clearing the
    /// start instant. Does NOT fold elapsed time into the committed
    /// seconds; that is `pause`'s job.
    pub fn set_running_at(&mut self, running: bool, now: i64) {
        self.state.timer.is_running = running;
        self.state.timer.started_at = if running { Some(now) } else { None };
        self.persist(
            if running { "play" } else { "stop" },
            "",
            "Running flag set",
        );
    }

    // ---------------------------
    // Trackers
    // ---------------------------

    pub fn save_tracker(&mut self, name: &str) -> bool {
        self.save_tracker_at(name, now_ms())
    }

    /// Commit the active timer under `name`. Includes any in-flight
    /// running interval in the saved total. When a tracker is being
    /// edited (`active_tracker_id` set) the commit updates it in place;
    /// otherwise a new tracker is prepended. Afterwards the active timer
    /// is reset to a fresh stopped-at-zero state.
    pub fn save_tracker_at(&mut self, name: &str, now: i64) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        let actual_time = self.state.timer.display_seconds(now);

        if let Some(active_id) = self.state.timer.active_tracker_id {
            if let Some(t) = self.state.trackers.iter_mut().find(|t| t.id == active_id) {
                t.name = name.to_string();
                t.time = actual_time;
            }
        } else {
            let id = next_id(now, self.state.trackers.iter().map(|t| t.id));
            self.state
                .trackers
                .insert(0, Tracker::new(id, name, actual_time));
        }

        self.state.timer = ActiveTimer::default();
        self.persist("save", name, &format!("Tracker saved at {actual_time}s"));
        true
    }

    /// Merge partial fields into the tracker matching `id`. Never creates.
    pub fn update_tracker(&mut self, id: i64, updates: TrackerUpdate) -> bool {
        let Some(t) = self.state.trackers.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if let Some(name) = updates.name {
            let name = name.trim().to_string();
            if !name.is_empty() {
                t.name = name;
            }
        }
        if let Some(time) = updates.time {
            t.time = time.max(0);
        }
        self.persist("edit", &id.to_string(), "Tracker updated");
        true
    }

    pub fn delete_tracker(&mut self, id: i64) -> bool {
        let before = self.state.trackers.len();
        self.state.trackers.retain(|t| t.id != id);
        if self.state.trackers.len() == before {
            return false;
        }
        if self.state.timer.active_tracker_id == Some(id) {
            self.state.timer.active_tracker_id = None;
            self.state.timer.active_tracker_name.clear();
        }
        self.persist("del", &id.to_string(), "Tracker deleted");
        true
    }

    pub fn clear_all_trackers(&mut self) {
        self.state.trackers.clear();
        self.state.timer.active_tracker_id = None;
        self.state.timer.active_tracker_name.clear();
        self.persist("clear", "trackers", "All trackers deleted");
    }

    pub fn set_active_tracker(&mut self, id: Option<i64>) -> bool {
        self.set_active_tracker_at(id, now_ms())
    }

    /// Switch which saved tracker the timer is editing.
    ///
    /// Commits the current elapsed time into the previously active
    /// tracker first, then loads the target's stored time as the new
    /// baseline (stopped). `None` switches to a fresh unsaved timer.
    /// An unknown id leaves the state completely unchanged.
    pub fn set_active_tracker_at(&mut self, id: Option<i64>, now: i64) -> bool {
        if let Some(target) = id
            && !self.state.trackers.iter().any(|t| t.id == target)
        {
            return false;
        }

        if let Some(prev) = self.state.timer.active_tracker_id {
            let actual_time = self.state.timer.display_seconds(now);
            if let Some(t) = self.state.trackers.iter_mut().find(|t| t.id == prev) {
                t.time = actual_time;
            }
        }

        match id {
            None => {
                self.state.timer = ActiveTimer::default();
                self.persist("switch", "new", "Switched to a fresh timer");
            }
            Some(target) => {
                let (time, name) = match self.state.trackers.iter().find(|t| t.id == target) {
                    Some(t) => (t.time, t.name.clone()),
                    None => return false,
                };
                let timer = &mut self.state.timer;
                timer.active_tracker_id = Some(target);
                timer.active_tracker_name = name.clone();
                timer.current_time = time;
                timer.is_running = false;
                timer.started_at = None;
                self.persist("switch", &name, "Active tracker loaded");
            }
        }
        true
    }

    /// Transient display name for the tracker under edit; independent of
    /// commit.
    pub fn set_active_tracker_name(&mut self, name: &str) {
        self.state.timer.active_tracker_name = name.to_string();
        self.persist("name", name, "Active tracker name set");
    }

    // ---------------------------
    // Notes
    // ---------------------------

    pub fn add_note(&mut self, content: &str) -> bool {
        self.add_note_at(content, now_ms())
    }

    pub fn add_note_at(&mut self, content: &str, now: i64) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        let id = next_id(now, self.state.notes.iter().map(|n| n.id()));
        self.state.notes.insert(
            0,
            Note::Text {
                id,
                content: content.to_string(),
                created_at: date::created_at_now(),
            },
        );
        self.persist("add", "note", "Note added");
        true
    }

    /// Replace the content of a text note. Todo-list notes have no
    /// content field; calling this on one is a no-op.
    pub fn update_note(&mut self, id: i64, content: &str) -> bool {
        let mut changed = false;
        for note in &mut self.state.notes {
            if note.id() == id
                && let Note::Text { content: c, .. } = note
            {
                *c = content.to_string();
                changed = true;
                break;
            }
        }
        if !changed {
            return false;
        }
        self.persist("edit", &id.to_string(), "Note updated");
        true
    }

    pub fn delete_note(&mut self, id: i64) -> bool {
        let before = self.state.notes.len();
        self.state.notes.retain(|n| n.id() != id);
        if self.state.notes.len() == before {
            return false;
        }
        self.persist("del", &id.to_string(), "Note deleted");
        true
    }

    pub fn clear_all_notes(&mut self) {
        self.state.notes.clear();
        self.persist("clear", "notes", "All notes deleted");
    }

    // ---------------------------
    // Todo lists
    // ---------------------------

    pub fn add_todo_list(&mut self, title: &str, items: Vec<TodoItem>) -> bool {
        self.add_todo_list_at(title, items, now_ms())
    }

    pub fn add_todo_list_at(&mut self, title: &str, items: Vec<TodoItem>, now: i64) -> bool {
        if title.trim().is_empty() {
            return false;
        }
        let id = next_id(now, self.state.notes.iter().map(|n| n.id()));
        self.state.notes.insert(
            0,
            Note::Todo {
                id,
                title: title.to_string(),
                items,
                created_at: date::created_at_now(),
            },
        );
        self.persist("add", "todo", "Todo list added");
        true
    }

    pub fn update_todo_list_title(&mut self, note_id: i64, title: &str) -> bool {
        let Some(Note::Todo { title: t, .. }) = self.find_todo_mut(note_id) else {
            return false;
        };
        *t = title.to_string();
        self.persist("edit", &note_id.to_string(), "Todo list renamed");
        true
    }

    pub fn add_todo_item(&mut self, note_id: i64, text: &str) -> bool {
        self.add_todo_item_at(note_id, text, now_ms())
    }

    pub fn add_todo_item_at(&mut self, note_id: i64, text: &str, now: i64) -> bool {
        let Some(Note::Todo { items, .. }) = self.find_todo_mut(note_id) else {
            return false;
        };
        let id = next_id(now, items.iter().map(|i| i.id));
        items.push(TodoItem::new(id, text));
        self.persist("add", &note_id.to_string(), "Todo item added");
        true
    }

    pub fn toggle_todo_item(&mut self, note_id: i64, item_id: i64) -> bool {
        let Some(Note::Todo { items, .. }) = self.find_todo_mut(note_id) else {
            return false;
        };
        let Some(item) = items.iter_mut().find(|i| i.id == item_id) else {
            return false;
        };
        item.completed = !item.completed;
        self.persist("edit", &note_id.to_string(), "Todo item toggled");
        true
    }

    pub fn update_todo_item(&mut self, note_id: i64, item_id: i64, text: &str) -> bool {
        let Some(Note::Todo { items, .. }) = self.find_todo_mut(note_id) else {
            return false;
        };
        let Some(item) = items.iter_mut().find(|i| i.id == item_id) else {
            return false;
        };
        item.text = text.to_string();
        self.persist("edit", &note_id.to_string(), "Todo item updated");
        true
    }

    pub fn delete_todo_item(&mut self, note_id: i64, item_id: i64) -> bool {
        let Some(Note::Todo { items, .. }) = self.find_todo_mut(note_id) else {
            return false;
        };
        let before = items.len();
        items.retain(|i| i.id != item_id);
        if items.len() == before {
            return false;
        }
        self.persist("del", &note_id.to_string(), "Todo item deleted");
        true
    }

    /// Locate a note by id and verify it is the todo variant.
    fn find_todo_mut(&mut self, note_id: i64) -> Option<&mut Note> {
        self.state
            .notes
            .iter_mut()
            .find(|n| n.id() == note_id && n.is_todo())
    }

    // ---------------------------
    // Preferences
    // ---------------------------

    pub fn set_theme(&mut self, theme: Theme) {
        self.state.theme = theme;
        self.persist("prefs", theme.as_str(), "Theme set");
    }

    pub fn set_dot_color(&mut self, color: &str) {
        self.state.dot_color = color.to_string();
        self.persist("prefs", color, "Dot color set");
    }
}
