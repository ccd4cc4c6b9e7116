//! The player's secret number.

use serde::{Deserialize, Serialize};

use super::error::GuessError;
use super::rng::GuessRng;

/// Smallest number the player may choose.
pub const MIN_SECRET: i32 = 1;

/// Largest number the player may choose.
pub const MAX_SECRET: i32 = 100;

/// A secret number, guaranteed to lie in `MIN_SECRET..=MAX_SECRET`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Secret(i32);

impl Secret {
    /// Validate and wrap a secret.
    pub fn new(value: i32) -> Result<Self, GuessError> {
        if (MIN_SECRET..=MAX_SECRET).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GuessError::SecretOutOfRange(value))
        }
    }

    /// Draw a secret uniformly from the full range.
    pub fn random(rng: &mut GuessRng) -> Self {
        Self(rng.gen_inclusive(MIN_SECRET, MAX_SECRET))
    }

    /// Get the raw value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Secret {
    type Error = GuessError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Secret> for i32 {
    fn from(secret: Secret) -> Self {
        secret.0
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Secret::new(1).map(Secret::value), Ok(1));
        assert_eq!(Secret::new(100).map(Secret::value), Ok(100));
        assert_eq!(Secret::new(0), Err(GuessError::SecretOutOfRange(0)));
        assert_eq!(Secret::new(101), Err(GuessError::SecretOutOfRange(101)));
        assert_eq!(Secret::new(-5), Err(GuessError::SecretOutOfRange(-5)));
    }

    #[test]
    fn test_random_stays_in_range() {
        let mut rng = GuessRng::new(11);
        for _ in 0..500 {
            let secret = Secret::random(&mut rng);
            assert!((MIN_SECRET..=MAX_SECRET).contains(&secret.value()));
        }
    }

    #[test]
    fn test_serde_validates() {
        let secret: Secret = serde_json::from_str("42").unwrap();
        assert_eq!(secret.value(), 42);
        assert_eq!(serde_json::to_string(&secret).unwrap(), "42");

        assert!(serde_json::from_str::<Secret>("0").is_err());
    }
}
