//! Spoken route guidance.

use crate::option::RouteOption;

/// Plays text aloud.  Returns whether playback succeeded.
pub trait VoicePlayer: Send + Sync {
    fn speak(&self, text: &str) -> bool;
}

impl<T: VoicePlayer + ?Sized> VoicePlayer for Box<T> {
    fn speak(&self, text: &str) -> bool {
        (**self).speak(text)
    }
}

/// Stand-in player that logs the text instead of synthesising audio.
#[derive(Debug, Clone)]
pub struct LogVoice {
    lang: String,
}

impl LogVoice {
    pub fn new(lang: impl Into<String>) -> Self {
        Self { lang: lang.into() }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }
}

impl Default for LogVoice {
    fn default() -> Self {
        Self::new("en")
    }
}

impl VoicePlayer for LogVoice {
    fn speak(&self, text: &str) -> bool {
        log::info!("voice ({}): {text}", self.lang);
        true
    }
}

/// `Your route from {origin} to {destination} will take approximately {n} minutes.`
///
/// Duration is printed with one decimal (`20.0`).
pub fn route_summary(origin: &str, destination: &str, option: &RouteOption) -> String {
    format!(
        "Your route from {origin} to {destination} will take approximately {:.1} minutes.",
        option.duration_min
    )
}

/// Speak `text` only when voice guidance is enabled.  Returns `false` when
/// disabled or when playback fails.
pub fn announce(player: &dyn VoicePlayer, enabled: bool, text: &str) -> bool {
    enabled && player.speak(text)
}
