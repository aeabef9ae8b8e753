//! Background music settings.

use serde::{Deserialize, Serialize};

/// DOM id of the background `<audio>` element.
pub const BACKGROUND_MUSIC_ID: &str = "background-music";

/// Starting volume, quiet enough not to startle anyone.
pub const DEFAULT_VOLUME: f32 = 0.3;

/// How the ambient track is played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Path or URL of the track. No track, no audio element.
    pub source: Option<String>,
    /// Playback volume in `[0, 1]`
    pub volume: f32,
    /// Restart the track when it ends
    pub looped: bool,
    /// Render the element but keep it silent
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            source: None,
            volume: DEFAULT_VOLUME,
            looped: true,
            muted: false,
        }
    }
}

impl AudioSettings {
    /// Volume actually applied to the element.
    pub fn effective_volume(&self) -> f32 {
        if self.muted || !self.volume.is_finite() {
            0.0
        } else {
            self.volume.clamp(0.0, 1.0)
        }
    }

    /// Whether an audio element should be rendered at all.
    pub fn is_enabled(&self) -> bool {
        self.source.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}
