//! Reconnect page - the whole card.
//!
//! Buttons call into the card; panel visibility is read back from the
//! panel signal the App keeps in sync with the card.

use dioxus::prelude::*;
use reconnect_core::Panel;
use reconnect_ui::OverlayMessage;

use crate::components::{AffirmativePanel, PromptPanel};
use crate::context::{use_card, use_hosts, use_panels};

/// Reconnect page component.
///
/// Clicks before the card has finished initializing are ignored.
#[component]
pub fn ReconnectPage() -> Element {
    let card = use_card();
    let panels = use_panels();
    let hosts = use_hosts();

    let on_yes = move |_| {
        if let Some(card) = card() {
            card.affirm();
        }
    };

    let on_no = move |_| {
        if let Some(card) = card() {
            card.decline();
        }
    };

    let on_back = move |_| {
        if let Some(card) = card() {
            card.return_to_prompt();
        }
    };

    let state = panels();

    rsx! {
        main { class: "card-page",
            div { class: "card",
                PromptPanel {
                    hidden: state.hidden_class(Panel::Prompt),
                    burst: hosts.burst.clone(),
                    on_yes: on_yes,
                    on_no: on_no,
                }
                AffirmativePanel {
                    hidden: state.hidden_class(Panel::Affirmative),
                    on_back: on_back,
                }
            }

            OverlayMessage { visible: state.is_visible(Panel::Overlay),
                p { class: "overlay-title", "Oh no!" }
                p { class: "overlay-text", "Are you sure? Maybe think about it once more \u{1F97A}" }
            }
        }
    }
}
