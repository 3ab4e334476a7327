//! Report rendering.
//!
//! Rendering is pure formatting: the same report and label always produce
//! byte-identical text.

mod markdown;
mod number;

pub use markdown::*;
pub use number::*;
