//! Card context provider.
//!
//! Provides the running [`Card`] and its heart containers to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let card = use_card();
//! if let Some(card) = card() {
//!     card.affirm();
//! }
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use reconnect_core::{Card, CardHosts, PanelState};

/// Shared card type for context.
///
/// `None` until `Card::initialize` has run on the runtime.
pub type SharedCard = Option<Arc<Card>>;

pub use crate::get_card_config;

/// Hook to access the card from context.
pub fn use_card() -> Signal<SharedCard> {
    use_context::<Signal<SharedCard>>()
}

/// Hook to access the heart containers.
///
/// The containers exist before the card does, so layers can render
/// immediately.
pub fn use_hosts() -> CardHosts {
    use_context::<CardHosts>()
}

/// Hook to access the current panel visibility.
pub fn use_panels() -> Signal<PanelState> {
    use_context::<Signal<PanelState>>()
}
