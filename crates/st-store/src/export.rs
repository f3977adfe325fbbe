//! CSV export of travel history.

use std::path::Path;

use csv::Writer;

use crate::{HistoryEntry, StoreResult};
use crate::sqlite::TIMESTAMP_FORMAT;

/// Column order of the export.
pub const HISTORY_HEADER: [&str; 5] =
    ["id", "start_location", "end_location", "travel_time", "timestamp"];

/// Write `entries` to `path` (header row first), replacing any existing file.
pub fn export_history_csv(entries: &[HistoryEntry], path: &Path) -> StoreResult<()> {
    let mut out = Writer::from_path(path)?;
    out.write_record(HISTORY_HEADER)?;
    for e in entries {
        out.write_record(&[
            e.id.get().to_string(),
            e.start_location.clone(),
            e.end_location.clone(),
            e.travel_time_min.to_string(),
            e.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        ])?;
    }
    out.flush()?;
    log::debug!("exported {} history rows to {}", entries.len(), path.display());
    Ok(())
}
