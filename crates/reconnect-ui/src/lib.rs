//! Reconnect Card UI Components
//!
//! Dioxus components for the greeting card's soft pastel look.
//!
//! ## Design Notes
//!
//! - **Rose (#ff9fb7)**: primary "yes" action, hearts
//! - **Lilac (#deaaf5)**: secondary accents
//! - **Cream (#fff7fa)**: card background
//!
//! Hearts are rendered from a [`reconnect_core::ContainerHandle`]; the
//! components never decide when a heart appears or disappears.

pub mod components;

pub use components::*;
