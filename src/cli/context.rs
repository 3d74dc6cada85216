//! CLI context - bundles settings and parsed flags.

use std::io::{self, Write};

use tracing::debug;
use zeroize::Zeroizing;

use super::{CliFlags, help};
use crate::entropy::EntropySource;
use crate::error::AppError;
use crate::logging;
use crate::pass;
use crate::settings::Settings;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self, AppError> {
        let flags = super::parse(args)?;
        Ok(Self {
            settings: Settings::default(),
            flags,
        })
    }

    /// Run CLI: info flags short-circuit, otherwise generate and print.
    pub fn run(&mut self) -> Result<(), AppError> {
        if self.handle_info_flags() {
            return Ok(());
        }
        self.apply_flags();
        logging::init(self.settings.verbose);
        if !self.flags.rest.is_empty() {
            debug!(args = ?self.flags.rest, "ignoring positional arguments");
        }
        let output = self.generate_output()?;
        let mut out = io::stdout().lock();
        out.write_all(&output)?;
        out.flush()?;
        Ok(())
    }

    /// Returns true when an info flag was handled and nothing else should run.
    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            print!("{}", help::help_text());
            return true;
        }
        if self.flags.version {
            println!("genpass {}", env!("CARGO_PKG_VERSION"));
            return true;
        }
        false
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.length = len;
        }
        if let Some(ref include) = self.flags.include {
            self.settings.include = include.clone();
        }
        if let Some(ref exclude) = self.flags.exclude {
            self.settings.exclude = exclude.clone();
        }
        if let Some(num) = self.flags.number {
            self.settings.count = num;
        }
        if let Some(seed) = self.flags.seed {
            self.settings.source = EntropySource::Seeded(seed);
        } else if self.flags.urandom {
            self.settings.source = EntropySource::Os;
        }
        self.settings.verbose = self.flags.verbose;
    }

    /// Generate every password up front so a failure prints nothing.
    fn generate_output(&self) -> Result<Zeroizing<Vec<u8>>, AppError> {
        debug!(source = self.settings.source.name(), "generating");
        let mut rng = self.settings.source.into_rng();
        let passwords = pass::generate(&self.settings, &mut *rng)?;

        let capacity = passwords.iter().map(|p| p.len() + 1).sum();
        let mut buf = Zeroizing::new(Vec::with_capacity(capacity));
        for password in &passwords {
            buf.extend_from_slice(password.as_bytes());
            buf.push(b'\n');
        }
        Ok(buf)
    }
}
