//! The user-selected ranking key for route options.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// How the planner orders the options it returns.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    #[default]
    Fastest,
    LeastCrowded,
    Safest,
    /// Currently ranked like `Fastest`.
    Balanced,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Fastest,
        Priority::LeastCrowded,
        Priority::Safest,
        Priority::Balanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Fastest      => "Fastest",
            Priority::LeastCrowded => "Least Crowded",
            Priority::Safest       => "Safest",
            Priority::Balanced     => "Balanced",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "fastest"      => Ok(Priority::Fastest),
            "leastcrowded" => Ok(Priority::LeastCrowded),
            "safest"       => Ok(Priority::Safest),
            "balanced"     => Ok(Priority::Balanced),
            _ => Err(CoreError::UnknownPriority(s.to_string())),
        }
    }
}
