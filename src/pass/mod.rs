//! Password generation.

pub mod charset;
mod generate;
mod shuffle;
mod strength;

pub use generate::{GenerateError, generate};
pub use shuffle::shuffle;
