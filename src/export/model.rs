// src/export/model.rs

use crate::models::tracker::Tracker;
use crate::utils::time::format_time;
use serde::Serialize;

/// Flat row shape for tracker export.
#[derive(Serialize, Clone, Debug)]
pub struct TrackerExport {
    pub id: i64,
    pub name: String,
    pub seconds: i64,
    pub duration: String, // "HH:MM:SS"
    pub created_at: String,
}

impl TrackerExport {
    pub fn from_tracker(t: &Tracker) -> Self {
        Self {
            id: t.id,
            name: t.name.clone(),
            seconds: t.time,
            duration: format_time(t.time),
            created_at: t.created_at.clone(),
        }
    }
}
