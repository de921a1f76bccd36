//! Salted digest records: hashing, verification, and storage layout.

pub mod codec;
pub mod compare;
pub mod digest;
pub mod engine;
pub mod kdf;
pub mod legacy;

pub use codec::{
    decode_record, encode_record, record_from_json, record_from_text, record_to_json,
    record_to_text,
};
pub use compare::constant_time_eq;
pub use engine::HashingEngine;
pub use legacy::import_sha256_hex;
