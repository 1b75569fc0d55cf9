//! Static configuration for the muninn detection stack.
//!
//! [`MuninnConfig`] aggregates the per-subsystem sections: input transforms,
//! anchor generation, anchor-to-target matching, and model selection. Every
//! field has a static default, so a configuration file only needs to state
//! the values it overrides.

use std::path::Path;

use serde::de::DeserializeOwned;

pub mod configs;
mod error;
mod muninn;


pub use error::{Error, Result};
pub use muninn::MuninnConfig;

/// A configuration root that can be loaded from a TOML file.
pub trait Config: DeserializeOwned + Default {
    /// File the configuration is conventionally read from.
    const PATH: &'static str;

    /// Load the configuration from `path`.
    ///
    /// Fields missing from the file fall back to their static defaults.
    fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = toml::from_str(&std::fs::read_to_string(path)?)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}
