//! User-facing messages on stderr.

use std::io::stderr;

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

/// Print an error message to stderr, red when stderr is a terminal.
pub fn error(msg: &str) {
    if stderr().is_tty() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{msg}");
    }
}

/// Print a usage error followed by a pointer to `-h`.
pub fn usage_error(msg: &str) {
    error(msg);
    eprintln!("Run 'genpass -h' for usage.");
}
