//! Password generation.

use std::collections::BTreeSet;

use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use thiserror::Error;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use super::charset::{self, CategorySet};
use super::strength::{Strength, entropy_bits};
use crate::settings::Settings;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("no characters available to generate password")]
    EmptyPool,
}

/// Characters that must never appear in a password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet(BTreeSet<char>);

impl ExclusionSet {
    pub fn parse(chars: &str) -> Self {
        ExclusionSet(chars.chars().collect())
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn count(&self) -> usize {
        self.0.len()
    }
}

/// Draw `length` characters uniformly from `pool` minus `excluded`.
///
/// The pool is filtered once up front, so an exclusion set that covers the
/// whole pool is reported instead of looping.
pub fn sample<R: Rng + ?Sized>(
    length: usize,
    pool: &[char],
    excluded: &ExclusionSet,
    rng: &mut R,
) -> Result<Zeroizing<String>, GenerateError> {
    let mut allowed: Vec<char> = pool
        .iter()
        .copied()
        .filter(|&c| !excluded.contains(c))
        .collect();
    if allowed.is_empty() {
        return Err(GenerateError::EmptyPool);
    }

    let between = Uniform::from(0..allowed.len());
    let mut password = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        password.push(allowed[between.sample(rng)]);
    }

    allowed.zeroize();
    Ok(password)
}

/// Generate `settings.count` passwords from the configured categories and exclusions.
pub fn generate<R: Rng + ?Sized>(
    settings: &Settings,
    rng: &mut R,
) -> Result<Vec<Zeroizing<String>>, GenerateError> {
    let categories = CategorySet::parse(&settings.include);
    let excluded = ExclusionSet::parse(&settings.exclude);
    if categories.is_empty() {
        debug!(include = %settings.include, "selector matched no categories");
    }

    let mut passwords = Vec::with_capacity(settings.count);
    for _ in 0..settings.count {
        let mut pool = charset::build_pool(&categories, rng);
        if passwords.is_empty() {
            let usable = pool.iter().filter(|&&c| !excluded.contains(c)).count();
            let bits = entropy_bits(settings.length, usable);
            debug!(
                usable,
                excluded = excluded.count(),
                entropy_bits = bits,
                strength = %Strength::of(bits),
                "effective pool"
            );
        }
        let password = sample(settings.length, &pool, &excluded, rng);
        pool.zeroize();
        passwords.push(password?);
    }

    Ok(passwords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn settings(length: usize, include: &str, exclude: &str) -> Settings {
        Settings {
            length,
            include: include.to_string(),
            exclude: exclude.to_string(),
            ..Settings::default()
        }
    }

    #[test]
    fn sample_has_requested_length() {
        let pool: Vec<char> = "abc".chars().collect();
        for len in [0, 1, 12, 64] {
            let pass = sample(len, &pool, &ExclusionSet::default(), &mut rng()).unwrap();
            assert_eq!(pass.chars().count(), len);
        }
    }

    #[test]
    fn sample_never_emits_excluded_chars() {
        let pool: Vec<char> = "abcdef".chars().collect();
        let excluded = ExclusionSet::parse("ace");
        let pass = sample(500, &pool, &excluded, &mut rng()).unwrap();
        assert!(pass.chars().all(|c| "bdf".contains(c)), "got {}", *pass);
    }

    #[test]
    fn sample_covers_every_allowed_char() {
        let pool: Vec<char> = "wxyz".chars().collect();
        let excluded = ExclusionSet::parse("x");
        let pass = sample(300, &pool, &excluded, &mut rng()).unwrap();
        for c in "wyz".chars() {
            assert!(pass.contains(c), "never drew {c}");
        }
    }

    #[test]
    fn sample_fails_on_empty_pool() {
        let err = sample(5, &[], &ExclusionSet::default(), &mut rng()).unwrap_err();
        assert_eq!(err, GenerateError::EmptyPool);
    }

    #[test]
    fn sample_fails_when_everything_is_excluded() {
        let pool: Vec<char> = "ab".chars().collect();
        let err = sample(0, &pool, &ExclusionSet::parse("ba"), &mut rng()).unwrap_err();
        assert_eq!(err, GenerateError::EmptyPool);
    }

    #[test]
    fn default_settings_produce_twelve_chars() {
        let passwords = generate(&Settings::default(), &mut rng()).unwrap();
        assert_eq!(passwords.len(), 1);
        assert_eq!(passwords[0].chars().count(), 12);
    }

    #[test]
    fn numeric_only_password() {
        let passwords = generate(&settings(8, "n", ""), &mut rng()).unwrap();
        assert_eq!(passwords[0].len(), 8);
        assert!(passwords[0].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn output_respects_categories_and_exclusions() {
        let passwords = generate(&settings(200, "ls", "aeiou!?"), &mut rng()).unwrap();
        let pass = &passwords[0];
        assert!(
            pass.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_punctuation())
        );
        assert!(!pass.chars().any(|c| "aeiou!?".contains(c)));
    }

    #[test]
    fn all_lowercase_excluded_is_an_error() {
        let err = generate(&settings(12, "l", "abcdefghijklmnopqrstuvwxyz"), &mut rng())
            .unwrap_err();
        assert_eq!(err, GenerateError::EmptyPool);
    }

    #[test]
    fn unknown_categories_are_an_error() {
        let err = generate(&settings(12, "q", ""), &mut rng()).unwrap_err();
        assert_eq!(err, GenerateError::EmptyPool);
    }

    #[test]
    fn count_controls_number_of_passwords() {
        let mut s = settings(10, "lu", "");
        s.count = 4;
        let passwords = generate(&s, &mut rng()).unwrap();
        assert_eq!(passwords.len(), 4);
        assert!(passwords.iter().all(|p| p.len() == 10));
    }

    #[test]
    fn same_seed_same_password() {
        let s = settings(24, "", "");
        let a = generate(&s, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate(&s, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(*a[0], *b[0]);
    }
}
