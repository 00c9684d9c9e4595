// backend/src/models/mod.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ───────────────────────────────────────
// Participants & daily entries
// ───────────────────────────────────────
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Him {
    pub him_id: i64,
    pub f3_name: String,
    pub region: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct BurpeeEntry {
    pub burpee_id: i64,
    pub him_id: i64,
    pub date: NaiveDate,
    pub count: i32,
    pub updated_at: DateTime<Utc>,
}

// ───────────────────────────────────────
// Aggregates served by /api/stats
// ───────────────────────────────────────
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlobalStats {
    pub cumulative_burpee_count: i64,
    pub daily_burpee_count: i64,
}

#[derive(Debug, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct RegionStats {
    pub region: String,
    pub cumulative_burpee_count: i64,
    pub daily_burpee_count: i64,
}

#[derive(Debug, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct PaxCount {
    pub region: String,
    pub him: String, // f3_name
    pub count: i64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaxStats {
    pub top: Vec<PaxCount>,
    pub daily: Vec<PaxCount>,
}
