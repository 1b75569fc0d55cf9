//! Dense anchor generation for feature pyramids.
//!
//! An [`AnchorGenerator`] precomputes a small set of canonical ("cell")
//! anchors per pyramid level at construction time, and tiles them across the
//! grid implied by the runtime feature map shapes:
//!
//! ```
//! use anchors::{AnchorGenerator, LevelParams};
//!
//! let generator = AnchorGenerator::new(
//!     LevelParams::Shared(vec![32.0]),
//!     LevelParams::Shared(vec![0.5, 1.0, 2.0]),
//!     vec![8, 16],
//!     0.0,
//! )?;
//!
//! let anchors = generator.generate(&[(64, 64), (32, 32)])?;
//! assert_eq!(anchors.levels().len(), 2);
//! # Ok::<(), anchors::Error>(())
//! ```

pub mod anchor;
pub mod broadcast;
mod config;
mod error;
mod grid;

pub use anchor::{AnchorGenerator, PyramidAnchors};
pub use broadcast::LevelParams;
pub use config::AnchorConfig;
pub use error::{Error, Result};
