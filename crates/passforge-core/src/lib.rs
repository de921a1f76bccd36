//! # passforge-core
//!
//! Core crate for PassForge. Contains the generation policy model, the
//! hash record and algorithm types, derived reports, configuration
//! schemas, the injectable random source trait, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other PassForge crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::ForgeError;
pub use result::ForgeResult;
