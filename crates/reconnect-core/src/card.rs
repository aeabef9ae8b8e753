//! The card controller.
//!
//! [`Card::initialize`] is the single entry point a host calls once its UI
//! tree exists. It wires the injected containers to a spawner, starts the
//! heart rain and then maps the three user actions onto panel state.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::time::{self, Instant};

use crate::audio::AudioSettings;
use crate::config::CardConfig;
use crate::container::ContainerHandle;
use crate::decoration::DecorationId;
use crate::error::{CardError, CardResult};
use crate::panels::PanelState;
use crate::spawner::{DecorationSpawner, SpawnerHandle};

/// Containers the card draws hearts into.
#[derive(Clone, Debug, PartialEq)]
pub struct CardHosts {
    /// Full-window layer for the falling rain
    pub rain: ContainerHandle,
    /// Layer next to the buttons for rising hearts
    pub burst: ContainerHandle,
}

impl CardHosts {
    pub fn new() -> Self {
        Self {
            rain: ContainerHandle::new("heart-rain"),
            burst: ContainerHandle::new("heart-container"),
        }
    }
}

impl Default for CardHosts {
    fn default() -> Self {
        Self::new()
    }
}

/// A running card.
pub struct Card {
    config: CardConfig,
    hosts: CardHosts,
    spawner: Arc<DecorationSpawner>,
    panels: Arc<watch::Sender<PanelState>>,
    rain: Mutex<Option<SpawnerHandle>>,
}

impl Card {
    /// Validate `config`, start the heart rain and return the card.
    ///
    /// Fails if the configuration is invalid or if called outside a tokio
    /// runtime.
    pub fn initialize(config: CardConfig, hosts: CardHosts) -> CardResult<Self> {
        tokio::runtime::Handle::try_current().map_err(|_| CardError::NoRuntime)?;
        let spawner = Arc::new(DecorationSpawner::new(&config)?);

        let rain = spawner.spawn_continuous(hosts.rain.host(), config.rain.interval());
        let (panels, _) = watch::channel(PanelState::new());

        tracing::info!(
            interval_ms = config.rain.interval_ms,
            audio = config.audio.is_enabled(),
            "Card initialized"
        );

        Ok(Self {
            config,
            hosts,
            spawner,
            panels: Arc::new(panels),
            rain: Mutex::new(Some(rain)),
        })
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn hosts(&self) -> &CardHosts {
        &self.hosts
    }

    pub fn spawner(&self) -> &Arc<DecorationSpawner> {
        &self.spawner
    }

    pub fn audio(&self) -> &AudioSettings {
        &self.config.audio
    }

    /// Current panel visibility.
    pub fn panels(&self) -> PanelState {
        *self.panels.borrow()
    }

    /// Receive every panel change.
    pub fn subscribe(&self) -> watch::Receiver<PanelState> {
        self.panels.subscribe()
    }

    /// "Yes": show the affirmative panel.
    pub fn affirm(&self) {
        if self.panels.send_if_modified(PanelState::affirm) {
            tracing::debug!("Panels: affirmative");
        }
    }

    /// "No": flash the overlay and drop one rising heart.
    ///
    /// The overlay hides itself after the configured delay. Each call
    /// schedules its own hide and none is cancelled, so overlapping
    /// declines end when the earliest pending hide fires.
    pub fn decline(&self) -> DecorationId {
        if self.panels.send_if_modified(PanelState::decline) {
            tracing::debug!("Panels: overlay shown");
        }

        let heart = self.spawner.spawn_once(&self.hosts.burst.host());

        let panels = Arc::clone(&self.panels);
        let deadline = Instant::now() + self.config.overlay.visible_for();
        tokio::spawn(async move {
            time::sleep_until(deadline).await;
            if panels.send_if_modified(PanelState::hide_overlay) {
                tracing::debug!("Panels: overlay hidden");
            }
        });

        heart
    }

    /// "Back": return to the prompt. No-op unless the affirmative panel is
    /// showing; returns whether the panels changed.
    pub fn return_to_prompt(&self) -> bool {
        let changed = self.panels.send_if_modified(PanelState::return_to_prompt);
        if changed {
            tracing::debug!("Panels: prompt");
        } else {
            tracing::debug!("Ignoring return while the prompt is showing");
        }
        changed
    }

    /// Whether the heart rain is still running.
    pub fn is_raining(&self) -> bool {
        self.rain
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_cancelled())
    }

    /// Stop the heart rain. Hearts already on screen still expire.
    pub fn shutdown(&self) {
        if let Some(handle) = self.rain.lock().take() {
            handle.cancel();
            tracing::info!("Card shut down");
        }
    }
}

impl Drop for Card {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_requires_runtime() {
        let result = Card::initialize(CardConfig::default(), CardHosts::new());
        assert!(matches!(result, Err(CardError::NoRuntime)));
    }

    #[tokio::test]
    async fn initialize_rejects_invalid_config() {
        let mut config = CardConfig::default();
        config.rain.interval_ms = 0;
        let result = Card::initialize(config, CardHosts::new());
        assert!(matches!(result, Err(CardError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let card = Card::initialize(CardConfig::default(), CardHosts::new()).unwrap();
        assert!(card.is_raining());
        card.shutdown();
        card.shutdown();
        assert!(!card.is_raining());
    }
}
