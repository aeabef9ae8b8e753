//! Console logging setup.
//!
//! ```ignore
//! reconnect_core::logging::init(reconnect_core::logging::DEFAULT_FILTER)?;
//! ```
//!
//! `RUST_LOG` overrides the default filter, e.g.
//! `RUST_LOG=reconnect_core=trace` to see every heart come and go.

use tracing_subscriber::EnvFilter;

use crate::error::{CardError, CardResult};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "reconnect=info,reconnect_core=info,reconnect_ui=info";

/// Filter from `RUST_LOG`, falling back to `default_filter`.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install the global fmt subscriber.
pub fn init(default_filter: &str) -> CardResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .try_init()
        .map_err(|e| CardError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
