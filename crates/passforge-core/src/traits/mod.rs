//! Core traits defined in `passforge-core` and implemented by other crates.

pub mod random;

pub use random::RandomSource;
