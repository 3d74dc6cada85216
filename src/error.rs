//! Top-level error type and exit codes.

use thiserror::Error;

use crate::cli::ParseError;
use crate::pass::GenerateError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Usage(#[from] ParseError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Usage errors follow the `flag` convention of exiting with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) => 2,
            AppError::Generate(_) | AppError::Io(_) => 1,
        }
    }
}
