//! Background Music Component
//!
//! Renders the ambient `<audio>` element and sets its volume once it is
//! mounted, since volume is not an HTML attribute.

use dioxus::prelude::*;
use reconnect_core::{AudioSettings, BACKGROUND_MUSIC_ID};

/// Script that applies `volume` to the background audio element.
pub fn volume_script(volume: f32) -> String {
    format!(
        "const el = document.getElementById('{BACKGROUND_MUSIC_ID}'); if (el) {{ el.volume = {volume:.2}; }}"
    )
}

/// Properties for the BackgroundMusic component
#[derive(Clone, PartialEq, Props)]
pub struct BackgroundMusicProps {
    pub settings: AudioSettings,
}

/// Ambient looping track
///
/// Renders nothing when no source is configured.
#[component]
pub fn BackgroundMusic(props: BackgroundMusicProps) -> Element {
    if !props.settings.is_enabled() {
        return rsx! {};
    }

    let source = props.settings.source.clone().unwrap_or_default();
    let volume = props.settings.effective_volume();

    rsx! {
        audio {
            id: BACKGROUND_MUSIC_ID,
            src: "{source}",
            autoplay: true,
            r#loop: props.settings.looped,
            muted: props.settings.muted,
            onmounted: move |_| {
                tracing::debug!(volume, "Applying background music volume");
                let _ = document::eval(&volume_script(volume));
            },
        }
    }
}
