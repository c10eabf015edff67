//! Core text wrapping and label metrics
//!
//! The wrapper is a pure function of its input. The label base only reads
//! from its font collaborator, described by the traits in [`font`].

mod error;
pub mod font;
mod label;
pub mod logging;
mod palette;
mod text;

pub use error::*;
pub use font::*;
pub use label::*;
pub use logging::*;
pub use palette::*;
pub use text::*;
