//! See [`Error`].

use miette::Diagnostic;
use thiserror::Error;

/// Error types for this crate.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("failed to read configuration file")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML, or holds unknown fields.
    #[error("failed to deserialize configuration")]
    Deserialize(#[from] toml::de::Error),
}

/// Type alias for [`Result<T, Error>`].
pub type Result<T> = std::result::Result<T, Error>;
