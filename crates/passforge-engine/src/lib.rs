//! # passforge-engine
//!
//! The generation-and-hashing engine for PassForge.
//!
//! ## Modules
//!
//! - `random` — OS-backed and seeded random sources, unbiased index draws
//! - `policy` — Generation policy validation
//! - `password` — Policy-constrained password composition
//! - `strength` — Entropy and composition estimation
//! - `hashing` — Salted digest records, verification, and record codec
//! - `bruteforce` — Attack-cost estimation

pub mod bruteforce;
pub mod hashing;
pub mod password;
pub mod policy;
pub mod random;
pub mod strength;

pub use bruteforce::BruteForceEstimator;
pub use hashing::HashingEngine;
pub use password::{GeneratedPassword, PasswordComposer};
pub use policy::{PolicyValidator, ValidatedPolicy};
pub use random::{OsRandomSource, SeededRandomSource};
pub use strength::StrengthEstimator;
