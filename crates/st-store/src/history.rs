//! Travel history rows and their summary statistics.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;
use st_core::{HistoryId, UserId};

/// One saved journey.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub id:              HistoryId,
    pub user:            UserId,
    pub start_location:  String,
    pub end_location:    String,
    /// Whole minutes.
    pub travel_time_min: i64,
    pub timestamp:       NaiveDateTime,
}

/// Aggregate view of a user's history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySummary {
    pub total:                     usize,
    /// Mean travel time in minutes; `None` for an empty history.
    pub average_duration:          Option<f64>,
    /// Most common destination.  Ties go to the alphabetically first one.
    pub most_frequent_destination: Option<String>,
}

pub fn summary(entries: &[HistoryEntry]) -> HistorySummary {
    let total = entries.len();
    let average_duration = (total > 0).then(|| {
        entries.iter().map(|e| e.travel_time_min as f64).sum::<f64>() / total as f64
    });

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for e in entries {
        *counts.entry(e.end_location.as_str()).or_default() += 1;
    }
    // Ascending key order plus a strict comparison keeps the smallest tie.
    let mut best: Option<(&str, usize)> = None;
    for (&dest, &n) in &counts {
        if best.is_none_or(|(_, m)| n > m) {
            best = Some((dest, n));
        }
    }

    HistorySummary {
        total,
        average_duration,
        most_frequent_destination: best.map(|(dest, _)| dest.to_string()),
    }
}
