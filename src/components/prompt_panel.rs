//! The yes/no question.

use dioxus::prelude::*;
use reconnect_core::ContainerHandle;
use reconnect_ui::{Button, ButtonVariant, DecorationLayer};

/// Question panel with the answer buttons.
///
/// Rising hearts from "no" float up out of the layer behind the buttons.
#[component]
pub fn PromptPanel(
    hidden: &'static str,
    burst: ContainerHandle,
    on_yes: EventHandler<()>,
    on_no: EventHandler<()>,
) -> Element {
    rsx! {
        section { id: "message-section", class: "card-panel {hidden}",
            h1 { class: "card-title", "Hey you" }
            p { class: "card-text",
                "It's been a while, and I've missed talking to you. "
                "Life got busy and I let us drift, and I'm sorry for that."
            }
            p { class: "card-question", "Can we reconnect?" }

            div { class: "button-row",
                DecorationLayer {
                    container: burst,
                    id: "heart-container".to_string(),
                    class: "heart-container".to_string(),
                    measure: true,
                }
                Button {
                    variant: ButtonVariant::Yes,
                    id: "yes-btn".to_string(),
                    onclick: move |_| on_yes.call(()),
                    "Yes"
                }
                Button {
                    variant: ButtonVariant::No,
                    id: "no-btn".to_string(),
                    onclick: move |_| on_no.call(()),
                    "No"
                }
            }
        }
    }
}
