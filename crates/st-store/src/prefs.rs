//! User preferences.
//!
//! Stored as one JSON object per user.  The recognised keys below get typed
//! fields with defaults; anything else is kept verbatim in `extra` and
//! written back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use st_agent::AlertToggles;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub walking_speed:     String,
    /// Minutes.
    pub max_walking_time:  u32,
    pub crowd_tolerance:   String,
    /// 1–10.
    pub safety_priority:   u8,
    pub voice_guidance:    bool,
    pub congestion_alerts: bool,
    pub delay_alerts:      bool,
    pub safety_alerts:     bool,
    pub emergency_contact: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            walking_speed:     "moderate".to_string(),
            max_walking_time:  15,
            crowd_tolerance:   "moderate".to_string(),
            safety_priority:   7,
            voice_guidance:    true,
            congestion_alerts: true,
            delay_alerts:      true,
            safety_alerts:     true,
            emergency_contact: String::new(),
            extra:             Map::new(),
        }
    }
}

impl Preferences {
    /// Parse a stored blob.  Blank text means "nothing saved yet".
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// The alert kinds the monitor should report.
    pub fn alert_toggles(&self) -> AlertToggles {
        AlertToggles {
            congestion: self.congestion_alerts,
            safety:     self.safety_alerts,
            delay:      self.delay_alerts,
        }
    }

    pub fn has_emergency_contact(&self) -> bool {
        !self.emergency_contact.trim().is_empty()
    }
}
