//! Overlay Message Component
//!
//! Full-window message shown for a moment after "no". It is hidden by the
//! card's timer, never by a click.

use dioxus::prelude::*;

/// Returns the CSS class for the overlay in the given visibility
pub fn overlay_class(visible: bool) -> &'static str {
    if visible {
        "overlay-message"
    } else {
        "overlay-message hidden"
    }
}

/// Properties for the OverlayMessage component
#[derive(Clone, PartialEq, Props)]
pub struct OverlayMessageProps {
    pub visible: bool,
    pub children: Element,
}

#[component]
pub fn OverlayMessage(props: OverlayMessageProps) -> Element {
    rsx! {
        div {
            id: "overlay-message",
            class: overlay_class(props.visible),
            role: "status",
            "aria-live": "polite",
            div { class: "overlay-content", {props.children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_classes() {
        assert_eq!(overlay_class(true), "overlay-message");
        assert_eq!(overlay_class(false), "overlay-message hidden");
    }
}
