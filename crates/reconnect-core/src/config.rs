//! Card configuration.
//!
//! Every knob has a default matching the original page, so an absent or
//! partial `config.toml` is fine:
//!
//! ```toml
//! palette = ["#ff9fb7", "#deaaf5"]
//! seed = 7
//!
//! [rain]
//! interval_ms = 600
//! size_px = { min = 12, max = 29 }
//! duration_secs = { min = 4.0, max = 8.0 }
//! delay_secs = { min = 0.0, max = 4.0 }
//!
//! [burst]
//! size_px = { min = 15, max = 29 }
//! lifetime_ms = 3000
//! fallback_width_px = 300.0
//!
//! [overlay]
//! visible_ms = 2500
//!
//! [audio]
//! source = "assets/music.mp3"
//! volume = 0.3
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::audio::AudioSettings;
use crate::error::{CardError, CardResult};
use crate::palette::{default_palette, is_hex_color};

/// Longest accepted animation duration or delay, in seconds.
pub const MAX_ANIMATION_SECS: f64 = 3600.0;

/// Inclusive `[min, max]` bounds for a randomized value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Span<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Continuous heart rain across the whole window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    /// Time between two spawned hearts
    pub interval_ms: u64,
    pub size_px: Span<u32>,
    /// Fall animation length
    pub duration_secs: Span<f64>,
    /// Delay before the fall starts
    pub delay_secs: Span<f64>,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            interval_ms: 600,
            size_px: Span::new(12, 29),
            duration_secs: Span::new(4.0, 8.0),
            delay_secs: Span::new(0.0, 4.0),
        }
    }
}

impl RainConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Single heart rising next to the buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    pub size_px: Span<u32>,
    /// Fixed time before the heart is removed
    pub lifetime_ms: u64,
    /// Width used when the container has not been measured or is collapsed
    pub fallback_width_px: f64,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            size_px: Span::new(15, 29),
            lifetime_ms: 3000,
            fallback_width_px: 300.0,
        }
    }
}

impl BurstConfig {
    pub fn lifetime(&self) -> Duration {
        Duration::from_millis(self.lifetime_ms)
    }
}

/// The playful "no" overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub visible_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self { visible_ms: 2500 }
    }
}

impl OverlayConfig {
    pub fn visible_for(&self) -> Duration {
        Duration::from_millis(self.visible_ms)
    }
}

/// Top-level card configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub rain: RainConfig,
    pub burst: BurstConfig,
    pub overlay: OverlayConfig,
    pub audio: AudioSettings,
    /// Heart colors, `#rgb` or `#rrggbb`
    pub palette: Vec<String>,
    /// Fixed RNG seed for reproducible decorations
    pub seed: Option<u64>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            rain: RainConfig::default(),
            burst: BurstConfig::default(),
            overlay: OverlayConfig::default(),
            audio: AudioSettings::default(),
            palette: default_palette(),
            seed: None,
        }
    }
}

impl CardConfig {
    /// Default location: `<config_dir>/reconnect/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("reconnect").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and defaults are used when nothing is there.
    pub fn load(path: Option<&Path>) -> CardResult<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file without validating it.
    pub fn from_file(path: &Path) -> CardResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!("Loaded card config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> CardResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Reject values that would make spawning or placement misbehave.
    pub fn validate(&self) -> CardResult<()> {
        if self.rain.interval_ms == 0 {
            return Err(invalid("rain.interval_ms must be greater than zero"));
        }
        check_size("rain.size_px", self.rain.size_px)?;
        check_seconds("rain.duration_secs", self.rain.duration_secs)?;
        check_seconds("rain.delay_secs", self.rain.delay_secs)?;

        check_size("burst.size_px", self.burst.size_px)?;
        if self.burst.lifetime_ms == 0 {
            return Err(invalid("burst.lifetime_ms must be greater than zero"));
        }
        if !self.burst.fallback_width_px.is_finite() || self.burst.fallback_width_px <= 0.0 {
            return Err(invalid("burst.fallback_width_px must be a positive number"));
        }

        if self.palette.is_empty() {
            return Err(invalid("palette must contain at least one color"));
        }
        if let Some(bad) = self.palette.iter().find(|c| !is_hex_color(c)) {
            return Err(invalid(format!("palette color {bad:?} is not a hex color")));
        }

        let volume = self.audio.volume;
        if !volume.is_finite() || !(0.0..=1.0).contains(&volume) {
            return Err(invalid(format!("audio.volume {volume} is outside [0, 1]")));
        }

        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> CardError {
    CardError::InvalidConfig(msg.into())
}

fn check_size(name: &str, span: Span<u32>) -> CardResult<()> {
    if span.min == 0 {
        return Err(invalid(format!("{name}.min must be at least 1")));
    }
    if !span.is_ordered() {
        return Err(invalid(format!("{name}.min is greater than {name}.max")));
    }
    Ok(())
}

fn check_seconds(name: &str, span: Span<f64>) -> CardResult<()> {
    if !span.min.is_finite() || !span.max.is_finite() || span.min < 0.0 {
        return Err(invalid(format!("{name} must be finite and non-negative")));
    }
    if span.max > MAX_ANIMATION_SECS {
        return Err(invalid(format!(
            "{name}.max must be at most {MAX_ANIMATION_SECS} seconds"
        )));
    }
    if !span.is_ordered() {
        return Err(invalid(format!("{name}.min is greater than {name}.max")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_page() {
        let config = CardConfig::default();
        assert_eq!(config.rain.interval(), Duration::from_millis(600));
        assert_eq!(config.rain.size_px, Span::new(12, 29));
        assert_eq!(config.rain.duration_secs, Span::new(4.0, 8.0));
        assert_eq!(config.rain.delay_secs, Span::new(0.0, 4.0));
        assert_eq!(config.burst.size_px, Span::new(15, 29));
        assert_eq!(config.burst.lifetime(), Duration::from_secs(3));
        assert_eq!(config.overlay.visible_for(), Duration::from_millis(2500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = CardConfig::from_toml_str(
            r#"
            seed = 42

            [rain]
            interval_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.rain.interval_ms, 250);
        assert_eq!(config.rain.size_px, Span::new(12, 29));
        assert_eq!(config.burst, BurstConfig::default());
        assert_eq!(config.palette.len(), 6);
    }

    #[test]
    fn rejects_inverted_span() {
        let mut config = CardConfig::default();
        config.rain.duration_secs = Span::new(8.0, 4.0);
        assert!(matches!(config.validate(), Err(CardError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_huge_seconds() {
        let mut config = CardConfig::default();
        config.rain.duration_secs = Span::new(1e20, 1e20);
        assert!(matches!(config.validate(), Err(CardError::InvalidConfig(_))));

        let mut config = CardConfig::default();
        config.rain.delay_secs = Span::new(0.0, MAX_ANIMATION_SECS + 1.0);
        assert!(config.validate().is_err());

        config.rain.delay_secs = Span::new(0.0, MAX_ANIMATION_SECS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_interval() {
        let mut config = CardConfig::default();
        config.rain.interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_or_bad_palette() {
        let mut config = CardConfig::default();
        config.palette.clear();
        assert!(config.validate().is_err());

        config.palette = vec!["pink".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pink"));
    }

    #[test]
    fn rejects_bad_fallback_width() {
        let mut config = CardConfig::default();
        config.burst.fallback_width_px = f64::NAN;
        assert!(config.validate().is_err());

        config.burst.fallback_width_px = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_loud_volume() {
        let mut config = CardConfig::default();
        config.audio.volume = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[overlay]\nvisible_ms = 1000\n").unwrap();

        let config = CardConfig::load(Some(&path)).unwrap();
        assert_eq!(config.overlay.visible_ms, 1000);
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(
            CardConfig::load(Some(&path)),
            Err(CardError::Io(_))
        ));
    }

    #[test]
    fn load_validates() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "palette = []\n").unwrap();
        assert!(matches!(
            CardConfig::load(Some(&path)),
            Err(CardError::InvalidConfig(_))
        ));
    }
}
