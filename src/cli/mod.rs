mod context;
mod flags;
mod help;
mod parse;
mod prompts;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use crate::error::AppError;

/// Run CLI mode and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    match Context::new(&args).and_then(|mut ctx| ctx.run()) {
        Ok(()) => 0,
        Err(e) => {
            match &e {
                AppError::Usage(_) => prompts::usage_error(&e.to_string()),
                _ => prompts::error(&e.to_string()),
            }
            e.exit_code()
        }
    }
}
