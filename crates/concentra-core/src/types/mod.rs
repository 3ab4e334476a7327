//! Core types for concentration analysis.

mod config;
mod holding;

pub use config::*;
pub use holding::*;
