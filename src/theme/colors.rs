//! Color constants for the card.
//!
//! Soft pastel palette. Heart colors themselves live in
//! `reconnect_core::palette`.

// === BACKGROUND ===
pub const CREAM: &str = "#fff7fa";
pub const BLUSH: &str = "#ffe4ee";
pub const CARD_WHITE: &str = "rgba(255, 255, 255, 0.85)";

// === ACCENTS ===
pub const ROSE: &str = "#ff9fb7";
pub const ROSE_DEEP: &str = "#e8718f";
pub const LILAC: &str = "#deaaf5";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#5b3a4a";
pub const TEXT_SECONDARY: &str = "rgba(91, 58, 74, 0.75)";

// === OVERLAY ===
pub const OVERLAY_SCRIM: &str = "rgba(91, 58, 74, 0.45)";
