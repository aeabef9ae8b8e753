//! Reconnect Card Core Library
//!
//! Everything the greeting card does, without a window.
//!
//! ## Overview
//!
//! The card asks a yes/no question. "Yes" reveals a message, "no" flashes
//! a playful overlay and floats a heart up next to the buttons, and hearts
//! rain down in the background the whole time.
//!
//! - [`Card`] maps the three user actions onto [`PanelState`]
//! - [`DecorationSpawner`] creates hearts and removes them when their
//!   lifetime is up
//! - [`DecorationContainer`] holds the hearts currently on screen
//!
//! ## Quick Start
//!
//! ```ignore
//! use reconnect_core::{Card, CardConfig, CardHosts};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let hosts = CardHosts::new();
//!     let card = Card::initialize(CardConfig::load(None)?, hosts.clone())?;
//!
//!     card.decline();
//!     assert_eq!(hosts.burst.len(), 1);
//!
//!     card.affirm();
//!     card.shutdown();
//!     Ok(())
//! }
//! ```

pub mod audio;
pub mod card;
pub mod config;
pub mod container;
pub mod decoration;
pub mod error;
pub mod logging;
pub mod palette;
pub mod panels;
pub mod spawner;

// Re-exports
pub use audio::{AudioSettings, BACKGROUND_MUSIC_ID};
pub use card::{Card, CardHosts};
pub use config::{BurstConfig, CardConfig, OverlayConfig, RainConfig, Span};
pub use container::{ContainerEvent, ContainerHandle, DecorationContainer, DecorationHost};
pub use decoration::{Decoration, DecorationId, DecorationKind, Placement};
pub use error::{CardError, CardResult};
pub use palette::PASTEL_PALETTE;
pub use panels::{Panel, PanelState, Stage};
pub use spawner::{DecorationSpawner, SpawnerHandle};
