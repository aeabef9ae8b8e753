//! Page components for the reconnect card.

mod reconnect;

pub use reconnect::ReconnectPage;
