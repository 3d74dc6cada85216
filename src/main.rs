use std::env;
use std::process;

mod cli;
mod entropy;
mod error;
mod logging;
mod pass;
mod settings;
mod terminal;

fn main() {
    harden_process();

    let args: Vec<String> = env::args().collect();
    process::exit(cli::run(args));
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
fn harden_process() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
fn harden_process() {}
