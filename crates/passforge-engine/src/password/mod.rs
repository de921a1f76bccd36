//! Password composition and the generated password type.

pub mod composer;
pub mod generated;

pub use composer::PasswordComposer;
pub use generated::GeneratedPassword;
