//! Diagnostics on stderr via `tracing`.

use std::io::stderr;

use crossterm::tty::IsTty;
use tracing::Level;

/// Install the stderr subscriber. Stdout carries only passwords.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_writer(stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_ansi(stderr().is_tty())
        .try_init();
}
