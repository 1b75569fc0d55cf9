//! See [`Error`].

use miette::Diagnostic;
use thiserror::Error;

/// Error types for this crate.
///
/// Every variant is an invalid anchor configuration. All of them are raised
/// eagerly, either when an [`AnchorGenerator`](crate::AnchorGenerator) is
/// constructed or at the start of a `generate` call, and abort the call
/// before any output is produced.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("`{name}` in anchor generator cannot be empty")]
    EmptyParameter { name: &'static str },

    #[error("got `{name}` of length {got}, but the number of pyramid levels is {expected}")]
    LevelCount {
        name: &'static str,
        got: usize,
        expected: usize,
    },

    #[error("anchor offset must be in [0, 1), got {offset}")]
    Offset { offset: f32 },

    #[error("anchor {kind} must be positive, got {value}")]
    NonPositive { kind: &'static str, value: f32 },

    #[error("got {got} feature map shapes, but the generator holds {expected} pyramid levels")]
    GridCount { got: usize, expected: usize },
}

/// Type alias for [`Result<T, Error>`].
pub type Result<T> = std::result::Result<T, Error>;
