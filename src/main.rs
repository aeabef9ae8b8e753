#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use reconnect_core::{logging, CardConfig};

/// Card configuration, set once from the command line before launch
static CARD_CONFIG: OnceLock<CardConfig> = OnceLock::new();

/// Get the card configuration (defaults if launch did not set one)
pub fn get_card_config() -> CardConfig {
    CARD_CONFIG.get().cloned().unwrap_or_default()
}

/// Reconnect - a little card asking to reconnect
#[derive(Parser, Debug)]
#[command(name = "reconnect-desktop")]
#[command(about = "An interactive greeting card with raining hearts")]
struct Args {
    /// Config file (defaults to <config dir>/reconnect/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Background music file
    #[arg(short, long)]
    music: Option<String>,

    /// Music volume between 0 and 1
    #[arg(short, long)]
    volume: Option<f32>,

    /// Start with the music muted
    #[arg(long)]
    mute: bool,

    /// Fixed seed for reproducible hearts
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    /// Command line flags win over the config file.
    fn apply(&self, config: &mut CardConfig) {
        if let Some(ref music) = self.music {
            config.audio.source = Some(music.clone());
        }
        if let Some(volume) = self.volume {
            config.audio.volume = volume;
        }
        if self.mute {
            config.audio.muted = true;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

fn main() -> Result<()> {
    logging::init(logging::DEFAULT_FILTER)?;

    let args = Args::parse();

    let mut config = CardConfig::load(args.config.as_deref()).context("Failed to load card config")?;
    args.apply(&mut config);
    config.validate().context("Invalid command line options")?;

    tracing::info!(
        "Starting reconnect card (music: {})",
        config.audio.source.as_deref().unwrap_or("none")
    );

    let _ = CARD_CONFIG.set(config);

    // Card-sized portrait window
    let window_width = 520.0;
    let window_height = 760.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Can we reconnect?")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from([
            "reconnect-desktop",
            "--music",
            "song.mp3",
            "--volume",
            "0.5",
            "--mute",
            "--seed",
            "3",
        ]);
        let mut config = CardConfig::default();
        args.apply(&mut config);

        assert_eq!(config.audio.source.as_deref(), Some("song.mp3"));
        assert!((config.audio.volume - 0.5).abs() < f32::EPSILON);
        assert!(config.audio.muted);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn no_flags_keep_config() {
        let args = Args::parse_from(["reconnect-desktop"]);
        let mut config = CardConfig::default();
        args.apply(&mut config);
        assert_eq!(config, CardConfig::default());
    }

    #[test]
    fn unset_config_falls_back_to_defaults() {
        // Nothing in the test binary calls launch
        assert_eq!(crate::context::get_card_config(), CardConfig::default());
        assert_eq!(get_card_config(), crate::context::get_card_config());
    }
}
