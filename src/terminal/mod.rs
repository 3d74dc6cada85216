//! Shared terminal utilities.

mod output;

pub use output::*;
