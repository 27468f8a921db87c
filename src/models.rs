use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary figures from `GET /stats`. All server-derived; the client never
/// recomputes or validates them, and absent fields decode as 0.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub streak: u64,
    #[serde(default)]
    pub volume: u64,
}

/// Per-day log counts keyed by `YYYY-MM-DD`. Derived from the log feed on
/// every poll, never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyCounts {
    pub days: BTreeMap<String, u64>,
}

impl DailyCounts {
    pub fn count(&self, date: &str) -> u64 {
        self.days.get(date).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// One poll's worth of data. Replaced wholesale on each successful fetch;
/// nothing in it is ever mutated incrementally.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub logs: Vec<String>,
    pub stats: Stats,
    pub fetched_at: DateTime<Utc>,
}
