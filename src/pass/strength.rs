//! Entropy estimate for a generated password.

use std::fmt;

/// Bits of entropy in `length` independent uniform draws from `pool_size`
/// characters.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Grade by whole bits: below 36 weak, below 60 fair, below 128 strong.
    pub fn of(bits: f64) -> Self {
        match bits.floor() {
            b if b < 36.0 => Strength::Weak,
            b if b < 60.0 => Strength::Fair,
            b if b < 128.0 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strength::Weak => "weak",
            Strength::Fair => "fair",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very strong",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_password_is_strong() {
        let bits = entropy_bits(12, 94);
        assert!((bits - 78.65).abs() < 0.01, "{bits}");
        assert_eq!(Strength::of(bits), Strength::Strong);
    }

    #[test]
    fn empty_pool_or_length_has_no_entropy() {
        assert_eq!(entropy_bits(16, 0), 0.0);
        assert_eq!(entropy_bits(0, 94), 0.0);
        assert_eq!(Strength::of(0.0), Strength::Weak);
    }

    #[test]
    fn grade_boundaries() {
        assert_eq!(Strength::of(35.9), Strength::Weak);
        assert_eq!(Strength::of(36.0), Strength::Fair);
        assert_eq!(Strength::of(59.99), Strength::Fair);
        assert_eq!(Strength::of(60.0), Strength::Strong);
        assert_eq!(Strength::of(128.0), Strength::VeryStrong);
        assert!(Strength::Weak < Strength::VeryStrong);
        assert_eq!(Strength::VeryStrong.to_string(), "very strong");
    }
}
