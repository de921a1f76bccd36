//! Character classes and their fixed alphabets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ForgeError;

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGIT: &str = "0123456789";
const SYMBOL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Characters commonly confused with one another when read or typed.
pub const AMBIGUOUS_CHARACTERS: &str = "Il1O0o";

/// A class of characters a policy can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    /// ASCII lowercase letters.
    Lower,
    /// ASCII uppercase letters.
    Upper,
    /// ASCII digits.
    Digit,
    /// ASCII punctuation.
    Symbol,
}

impl CharClass {
    /// All classes in canonical order.
    pub const ALL: [CharClass; 4] = [Self::Lower, Self::Upper, Self::Digit, Self::Symbol];

    /// The full alphabet of this class before any exclusion.
    pub fn alphabet(self) -> &'static str {
        match self {
            Self::Lower => LOWER,
            Self::Upper => UPPER,
            Self::Digit => DIGIT,
            Self::Symbol => SYMBOL,
        }
    }

    /// Returns the class a character belongs to, if any.
    pub fn of(c: char) -> Option<Self> {
        if c.is_ascii_lowercase() {
            Some(Self::Lower)
        } else if c.is_ascii_uppercase() {
            Some(Self::Upper)
        } else if c.is_ascii_digit() {
            Some(Self::Digit)
        } else if c.is_ascii_punctuation() {
            Some(Self::Symbol)
        } else {
            None
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lower => write!(f, "lower"),
            Self::Upper => write!(f, "upper"),
            Self::Digit => write!(f, "digit"),
            Self::Symbol => write!(f, "symbol"),
        }
    }
}

impl FromStr for CharClass {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" | "lowercase" => Ok(Self::Lower),
            "upper" | "uppercase" => Ok(Self::Upper),
            "digit" | "digits" => Ok(Self::Digit),
            "symbol" | "symbols" | "special" => Ok(Self::Symbol),
            other => Err(ForgeError::invalid_policy(format!(
                "unknown character class '{other}'"
            ))),
        }
    }
}
