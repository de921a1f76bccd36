//! Derived, immutable reports: entropy, composition and brute-force cost.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Entropy below this many bits is weak.
pub const FAIR_THRESHOLD_BITS: f64 = 40.0;
/// Entropy at or above this many bits is strong.
pub const STRONG_THRESHOLD_BITS: f64 = 60.0;
/// Entropy at or above this many bits is very strong.
pub const VERY_STRONG_THRESHOLD_BITS: f64 = 80.0;

/// Qualitative strength bucket derived from entropy bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthClass {
    /// Fewer than 40 bits.
    Weak,
    /// 40 to under 60 bits.
    Fair,
    /// 60 to under 80 bits.
    Strong,
    /// 80 bits or more.
    VeryStrong,
}

impl StrengthClass {
    /// Maps a bit count onto its bucket.
    pub fn from_bits(bits: f64) -> Self {
        if bits >= VERY_STRONG_THRESHOLD_BITS {
            Self::VeryStrong
        } else if bits >= STRONG_THRESHOLD_BITS {
            Self::Strong
        } else if bits >= FAIR_THRESHOLD_BITS {
            Self::Fair
        } else {
            Self::Weak
        }
    }
}

impl fmt::Display for StrengthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weak => write!(f, "weak"),
            Self::Fair => write!(f, "fair"),
            Self::Strong => write!(f, "strong"),
            Self::VeryStrong => write!(f, "very-strong"),
        }
    }
}

/// Size of a guess space in bits plus its qualitative bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntropyReport {
    /// log2 of the number of equally likely outcomes.
    pub bits_of_entropy: f64,
    /// Bucket for `bits_of_entropy`.
    pub classification: StrengthClass,
}

impl EntropyReport {
    /// Builds a report. Negative and NaN input becomes zero; positive
    /// infinity becomes `f64::MAX`.
    pub fn from_bits(bits: f64) -> Self {
        let bits = if bits.is_nan() || bits <= 0.0 {
            0.0
        } else {
            bits.min(f64::MAX)
        };
        Self {
            bits_of_entropy: bits,
            classification: StrengthClass::from_bits(bits),
        }
    }
}

/// Per-class character counts of a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionReport {
    /// Total number of characters.
    pub total_length: usize,
    /// Lowercase letters.
    pub lower: usize,
    /// Uppercase letters.
    pub upper: usize,
    /// Digits.
    pub digit: usize,
    /// Punctuation.
    pub symbol: usize,
    /// Characters outside every class.
    pub other: usize,
}

/// Expected cost of finding a secret by uniform guessing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BruteForceCostEstimate {
    /// Expected number of guesses, `2^bits / 2`. Saturates to infinity
    /// from 1025 bits upward; use `log2_attempts` for large spaces.
    pub estimated_attempts: f64,
    /// `log2(estimated_attempts)`, i.e. `bits - 1`. Finite for every
    /// finite entropy.
    pub log2_attempts: f64,
    /// Cost of one guess relative to a single SHA-256 evaluation.
    pub per_guess_cost: f64,
}

impl BruteForceCostEstimate {
    /// Builds an estimate for a guess space of `bits` of entropy.
    pub fn from_bits(bits: f64, per_guess_cost: f64) -> Self {
        Self {
            estimated_attempts: bits.exp2() / 2.0,
            log2_attempts: bits - 1.0,
            per_guess_cost,
        }
    }

    /// `log2` of [`BruteForceCostEstimate::wall_clock_seconds_at_rate`],
    /// which stays finite where the linear figure overflows.
    pub fn log2_wall_clock_seconds_at_rate(&self, attempts_per_second: f64) -> f64 {
        if attempts_per_second <= 0.0 || attempts_per_second.is_nan() {
            return f64::INFINITY;
        }
        self.log2_attempts + self.per_guess_cost.log2() - attempts_per_second.log2()
    }

    /// Expected wall-clock seconds for an attacker performing
    /// `attempts_per_second` baseline guesses per second.
    ///
    /// Returns infinity for a non-positive rate.
    pub fn wall_clock_seconds_at_rate(&self, attempts_per_second: f64) -> f64 {
        if attempts_per_second <= 0.0 || attempts_per_second.is_nan() {
            return f64::INFINITY;
        }
        self.estimated_attempts * self.per_guess_cost / attempts_per_second
    }
}
