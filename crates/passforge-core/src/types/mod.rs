//! Domain types shared across PassForge crates.

pub mod algorithm;
pub mod charset;
pub mod policy;
pub mod record;
pub mod report;

pub use algorithm::{DigestFunction, HashAlgorithmSpec, KDF_OUTPUT_LEN, KdfFunction};
pub use charset::{AMBIGUOUS_CHARACTERS, CharClass};
pub use policy::{Complexity, PasswordPolicy};
pub use record::{FORMAT_VERSION, HashRecord, MIN_SALT_LEN};
pub use report::{BruteForceCostEstimate, CompositionReport, EntropyReport, StrengthClass};
