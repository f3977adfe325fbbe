//! Alert delivery.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use st_core::Clock;

use crate::monitor::{Alert, AlertKind};

/// Text sent by [`send_sos`].
pub const SOS_MESSAGE: &str = "SOS activated. User needs assistance.";

/// What an alert is about.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum AlertCategory {
    #[default]
    Info,
    Sos,
    Route(AlertKind),
}

impl std::fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertCategory::Info => f.write_str("info"),
            AlertCategory::Sos => f.write_str("sos"),
            AlertCategory::Route(kind) => write!(f, "{kind}"),
        }
    }
}

impl From<AlertKind> for AlertCategory {
    fn from(kind: AlertKind) -> Self {
        AlertCategory::Route(kind)
    }
}

/// A delivered alert.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AlertRecord {
    pub category:  AlertCategory,
    pub message:   String,
    pub timestamp: NaiveDateTime,
}

/// Delivers alerts to the user.
pub trait AlertDispatcher: Send + Sync {
    fn send(&self, message: &str, category: AlertCategory) -> AlertRecord;
}

impl<T: AlertDispatcher + ?Sized> AlertDispatcher for Box<T> {
    fn send(&self, message: &str, category: AlertCategory) -> AlertRecord {
        (**self).send(message, category)
    }
}

/// Writes alerts to the log at `warn` level.
#[derive(Debug, Clone, Default)]
pub struct LogDispatcher<C: Clock> {
    clock: C,
}

impl<C: Clock> LogDispatcher<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> AlertDispatcher for LogDispatcher<C> {
    fn send(&self, message: &str, category: AlertCategory) -> AlertRecord {
        log::warn!("[{category}] {message}");
        AlertRecord {
            category,
            message: message.to_string(),
            timestamp: self.clock.now(),
        }
    }
}

/// Send the emergency message.
pub fn send_sos(dispatcher: &dyn AlertDispatcher) -> AlertRecord {
    dispatcher.send(SOS_MESSAGE, AlertCategory::Sos)
}

/// Forward every monitor finding, preserving order.
pub fn dispatch_all(dispatcher: &dyn AlertDispatcher, alerts: &[Alert]) -> Vec<AlertRecord> {
    alerts
        .iter()
        .map(|a| dispatcher.send(&a.message, a.kind.into()))
        .collect()
}
