//! Password generation settings.

use crate::entropy::EntropySource;

pub const DEFAULT_LENGTH: usize = 12;
pub const DEFAULT_INCLUDE: &str = "l,u,n,s";

/// Upper bounds for `-len` and `-n`; the whole output is buffered before printing.
pub const MAX_LENGTH: usize = 4096;
pub const MAX_COUNT: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub include: String,
    pub exclude: String,
    pub count: usize,
    pub source: EntropySource,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include: String::from(DEFAULT_INCLUDE),
            exclude: String::new(),
            count: 1,
            source: EntropySource::Thread,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_every_category() {
        let settings = Settings::default();
        assert_eq!(settings.length, 12);
        assert_eq!(settings.include, "l,u,n,s");
        assert!(settings.exclude.is_empty());
        assert_eq!(settings.count, 1);
        assert_eq!(settings.source, EntropySource::Thread);
    }
}
