//! Message shown after "yes".

use dioxus::prelude::*;
use reconnect_ui::{Button, ButtonVariant};

#[component]
pub fn AffirmativePanel(hidden: &'static str, on_back: EventHandler<()>) -> Element {
    rsx! {
        section { id: "yes-section", class: "card-panel {hidden}",
            h2 { class: "card-title", "That makes me so happy" }
            p { class: "card-text",
                "Thank you for giving us another chance. "
                "Let's grab a coffee soon and catch up on everything we've missed."
            }
            p { class: "card-signoff", "Talk soon \u{2661}" }

            Button {
                variant: ButtonVariant::Back,
                id: "back-btn".to_string(),
                onclick: move |_| on_back.call(()),
                "Back"
            }
        }
    }
}
