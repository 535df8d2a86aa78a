use crate::utils::date;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A named, persisted record of accumulated seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracker {
    pub id: i64,
    pub name: String,
    pub time: i64,          // accumulated seconds, never negative
    pub created_at: String, // ISO-8601, written in UTC
}

impl Tracker {
    pub fn new(id: i64, name: &str, time: i64) -> Self {
        Self {
            id,
            name: name.to_string(),
            time,
            created_at: date::created_at_now(),
        }
    }

    /// Creation instant in local time; None when the stored
    /// timestamp is unparseable.
    pub fn created_local(&self) -> Option<DateTime<Local>> {
        date::parse_created_at(&self.created_at)
    }
}

/// Partial field update for `update_tracker` (rename, time adjustment).
#[derive(Debug, Clone, Default)]
pub struct TrackerUpdate {
    pub name: Option<String>,
    pub time: Option<i64>,
}

impl TrackerUpdate {
    pub fn name(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            time: None,
        }
    }

    pub fn time(time: i64) -> Self {
        Self {
            name: None,
            time: Some(time),
        }
    }
}
