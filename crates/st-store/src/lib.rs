//! `st-store` — persistence for users, preferences and travel history.
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`sqlite`]  | `TransitStore` (schema, users, history, preferences)      |
//! | [`prefs`]   | `Preferences` typed view over the stored JSON map         |
//! | [`history`] | `HistoryEntry`, `HistorySummary`, `summary`               |
//! | [`export`]  | `export_history_csv`                                      |
//! | [`error`]   | `StoreError`, `StoreResult<T>`                            |
//!
//! Every operation takes an explicit [`UserId`](st_core::UserId).  The
//! default user (`UserId::DEFAULT`, `default_user`) exists in every store.

pub mod error;
pub mod export;
pub mod history;
pub mod prefs;
pub mod sqlite;


pub use error::{StoreError, StoreResult};
pub use export::export_history_csv;
pub use history::{HistoryEntry, HistorySummary, summary};
pub use prefs::Preferences;
pub use sqlite::TransitStore;
