//! SQLite store.
//!
//! Two tables:
//!
//! | Table            | Columns                                                        |
//! |------------------|----------------------------------------------------------------|
//! | `users`          | `id`, `username` (unique), `preferences` (JSON text)           |
//! | `travel_history` | `id`, `user_id`, `start_location`, `end_location`,             |
//! |                  | `route_data` (JSON text), `travel_time` (minutes), `timestamp` |
//!
//! Timestamps are UTC text in SQLite's `CURRENT_TIMESTAMP` layout.

use std::path::Path;

use chrono::{NaiveDateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use st_agent::RouteOption;
use st_core::{HistoryId, UserId};

use crate::{HistoryEntry, Preferences, StoreError, StoreResult};

/// Layout of the `timestamp` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        username    TEXT UNIQUE NOT NULL,
        preferences TEXT
    );
    CREATE TABLE IF NOT EXISTS travel_history (
        id             INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id        INTEGER NOT NULL,
        start_location TEXT NOT NULL,
        end_location   TEXT NOT NULL,
        route_data     TEXT,
        travel_time    INTEGER,
        timestamp      DATETIME DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (user_id) REFERENCES users (id)
    );";

/// Users, preferences and travel history in one SQLite database.
pub struct TransitStore {
    conn: Connection,
}

impl TransitStore {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn open(path: &Path) -> StoreResult<Self> {
        log::debug!("opening store at {}", path.display());
        Self::init(Connection::open(path)?)
    }

    /// A private database that disappears when the store is dropped.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        conn.execute(
            "INSERT OR IGNORE INTO users (id, username, preferences) VALUES (?1, ?2, '{}')",
            params![UserId::DEFAULT.get(), UserId::DEFAULT_NAME],
        )?;
        Ok(Self { conn })
    }

    // ── Users ─────────────────────────────────────────────────────────────────

    /// Id of `username`, creating the user with empty preferences if needed.
    pub fn ensure_user(&self, username: &str) -> StoreResult<UserId> {
        self.conn.execute(
            "INSERT OR IGNORE INTO users (username, preferences) VALUES (?1, '{}')",
            params![username],
        )?;
        let id: i64 = self.conn.query_row(
            "SELECT id FROM users WHERE username = ?1",
            params![username],
            |row| row.get(0),
        )?;
        Ok(UserId::from(id))
    }

    fn user_exists(&self, user: UserId) -> StoreResult<bool> {
        let found = self
            .conn
            .query_row("SELECT 1 FROM users WHERE id = ?1", params![user.get()], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    // ── History ───────────────────────────────────────────────────────────────

    /// Save a chosen route, stamped with the current UTC time.
    pub fn save_route(
        &self,
        user: UserId,
        start: &str,
        end: &str,
        option: &RouteOption,
    ) -> StoreResult<HistoryId> {
        self.save_route_at(user, start, end, option, Utc::now().naive_utc())
    }

    /// Save a chosen route with an explicit timestamp.
    ///
    /// The option is kept as JSON; its duration, rounded to whole minutes,
    /// becomes the travel time.
    pub fn save_route_at(
        &self,
        user: UserId,
        start: &str,
        end: &str,
        option: &RouteOption,
        at: NaiveDateTime,
    ) -> StoreResult<HistoryId> {
        if !self.user_exists(user)? {
            return Err(StoreError::UnknownUser(user));
        }
        let route_data = serde_json::to_string(option)?;
        let travel_time = option.duration_min.round() as i64;
        self.conn.execute(
            "INSERT INTO travel_history \
             (user_id, start_location, end_location, route_data, travel_time, timestamp) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                user.get(),
                start,
                end,
                route_data,
                travel_time,
                at.format(TIMESTAMP_FORMAT).to_string(),
            ],
        )?;
        let id = HistoryId::from(self.conn.last_insert_rowid());
        log::debug!("saved {start} -> {end} for {user} as {id}");
        Ok(id)
    }

    /// All journeys of `user`, newest first.
    pub fn history(&self, user: UserId) -> StoreResult<Vec<HistoryEntry>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, start_location, end_location, travel_time, timestamp \
             FROM travel_history WHERE user_id = ?1 \
             ORDER BY timestamp DESC, id DESC",
        )?;
        let rows = stmt.query_map(params![user.get()], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                // Older rows hold fractional minutes as REAL.
                row.get::<_, Option<f64>>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, start_location, end_location, travel_time, timestamp) = row?;
            entries.push(HistoryEntry {
                id: HistoryId::from(id),
                user,
                start_location,
                end_location,
                travel_time_min: travel_time.map_or(0, |t| t.round() as i64),
                timestamp: parse_timestamp(&timestamp)?,
            });
        }
        Ok(entries)
    }

    /// The route option saved with a history row, if the row exists.
    pub fn route(&self, id: HistoryId) -> StoreResult<Option<RouteOption>> {
        let data: Option<Option<String>> = self
            .conn
            .query_row(
                "SELECT route_data FROM travel_history WHERE id = ?1",
                params![id.get()],
                |row| row.get(0),
            )
            .optional()?;
        match data.flatten() {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    // ── Preferences ───────────────────────────────────────────────────────────

    /// Stored preferences, or the defaults when none are saved.
    pub fn preferences(&self, user: UserId) -> StoreResult<Preferences> {
        let text: Option<Option<String>> = self
            .conn
            .query_row(
                "SELECT preferences FROM users WHERE id = ?1",
                params![user.get()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(Preferences::from_json(text.flatten().as_deref().unwrap_or(""))?)
    }

    pub fn save_preferences(&self, user: UserId, prefs: &Preferences) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE users SET preferences = ?1 WHERE id = ?2",
            params![prefs.to_json()?, user.get()],
        )?;
        if changed == 0 {
            return Err(StoreError::UnknownUser(user));
        }
        Ok(())
    }
}

fn parse_timestamp(text: &str) -> StoreResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|_| StoreError::Timestamp(text.to_string()))
}
