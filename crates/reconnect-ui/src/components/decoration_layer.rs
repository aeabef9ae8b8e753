//! Decoration Layer Component
//!
//! Renders the hearts currently attached to a container and re-renders on
//! every attach/detach.

use dioxus::prelude::*;
use reconnect_core::{ContainerHandle, Decoration};
use tokio::sync::broadcast::error::RecvError;

/// Properties for the DecorationLayer component
#[derive(Clone, PartialEq, Props)]
pub struct DecorationLayerProps {
    /// Container whose hearts are drawn
    pub container: ContainerHandle,
    /// DOM id of the layer
    pub id: String,
    /// CSS class of the layer element
    pub class: String,
    /// Report the rendered width back to the container on mount and resize
    #[props(default = false)]
    pub measure: bool,
}

/// A positioned layer of hearts
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     DecorationLayer {
///         container: hosts.burst.clone(),
///         id: "heart-container".to_string(),
///         class: "heart-container".to_string(),
///         measure: true,
///     }
/// }
/// ```
#[component]
pub fn DecorationLayer(props: DecorationLayerProps) -> Element {
    let mut hearts: Signal<Vec<Decoration>> = use_signal({
        let container = props.container.clone();
        move || container.snapshot()
    });

    let feed = props.container.clone();
    use_future(move || {
        let feed = feed.clone();
        async move {
            let mut events = feed.subscribe();
            // Catch anything attached between the initial snapshot and subscribing
            hearts.set(feed.snapshot());
            loop {
                match events.recv().await {
                    Ok(_) => hearts.set(feed.snapshot()),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::trace!(layer = feed.name(), skipped, "Heart layer lagged");
                        hearts.set(feed.snapshot());
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    });

    let measured = props.container.clone();
    let resized = props.container.clone();
    let measure = props.measure;

    rsx! {
        div {
            id: "{props.id}",
            class: "{props.class}",
            "aria-hidden": "true",
            onmounted: move |event| {
                let measured = measured.clone();
                async move {
                    if !measure {
                        return;
                    }
                    match event.get_client_rect().await {
                        Ok(rect) => {
                            tracing::debug!(layer = measured.name(), width = rect.width(), "Measured heart layer");
                            measured.set_width(rect.width());
                        }
                        Err(e) => tracing::warn!("Could not measure {}: {:?}", measured.name(), e),
                    }
                }
            },
            onresize: move |event| {
                if !measure {
                    return;
                }
                match event.get_border_box_size() {
                    Ok(size) => {
                        tracing::debug!(layer = resized.name(), width = size.width, "Heart layer resized");
                        resized.set_width(size.width);
                    }
                    Err(e) => tracing::warn!("Could not re-measure {}: {:?}", resized.name(), e),
                }
            },
            for heart in hearts() {
                div {
                    key: "{heart.id}",
                    class: heart.kind.class(),
                    style: heart.style(),
                }
            }
        }
    }
}
