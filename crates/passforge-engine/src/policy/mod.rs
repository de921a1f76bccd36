//! Policy validation.

pub mod validated;
pub mod validator;

pub use validated::ValidatedPolicy;
pub use validator::{MIN_POLICY_LENGTH, PolicyValidator};
