//! Random sources and unbiased sampling.

pub mod os;
pub mod sampling;
pub mod seeded;

pub use os::OsRandomSource;
pub use sampling::{shuffle, uniform_in_range, uniform_index};
pub use seeded::SeededRandomSource;
