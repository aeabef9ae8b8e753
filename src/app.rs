use std::sync::Arc;

use dioxus::prelude::*;
use reconnect_core::{Card, CardHosts, PanelState};
use reconnect_ui::{BackgroundMusic, DecorationLayer};

use crate::context::{get_card_config, SharedCard};
use crate::pages::ReconnectPage;
use crate::theme::{root_variables, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles, the heart containers, the card and its panel
/// state, then initializes the card once the tree is mounted.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_card_config);
    let hosts = use_hook(CardHosts::new);
    let mut card: Signal<SharedCard> = use_signal(|| None);
    let mut panels: Signal<PanelState> = use_signal(PanelState::new);

    // Provide card state to all child components
    use_context_provider(|| hosts.clone());
    use_context_provider(|| card);
    use_context_provider(|| panels);

    // Initialize the card on mount and mirror its panel state
    let init_hosts = hosts.clone();
    let init_config = config.clone();
    use_effect(move || {
        let hosts = init_hosts.clone();
        let config = init_config.clone();
        spawn(async move {
            match Card::initialize(config, hosts) {
                Ok(initialized) => {
                    let initialized = Arc::new(initialized);
                    let mut updates = initialized.subscribe();
                    card.set(Some(initialized));
                    tracing::info!("Card ready");

                    while updates.changed().await.is_ok() {
                        let state = *updates.borrow_and_update();
                        panels.set(state);
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to initialize card: {}", e);
                }
            }
        });
    });

    // Stop the rain when the window goes away
    use_drop(move || {
        if let Ok(current) = card.try_peek() {
            if let Some(ref running) = *current {
                running.shutdown();
            }
        }
    });

    rsx! {
        style { {root_variables()} }
        style { {GLOBAL_STYLES} }
        BackgroundMusic { settings: config.audio.clone() }
        DecorationLayer {
            container: hosts.rain.clone(),
            id: "heart-rain".to_string(),
            class: "heart-rain".to_string(),
        }
        ReconnectPage {}
    }
}
