//! Reusable card components.

mod background_music;
mod button;
mod decoration_layer;
mod overlay;

pub use background_music::*;
pub use button::*;
pub use decoration_layer::*;
pub use overlay::*;
