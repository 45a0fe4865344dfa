//! Corpus preparation: the orthographic rule predicates and the derivation of
//! the capitalization flag byte array the encoders consume.

pub mod flags;
pub mod rules;

pub use flags::violation_flags;
pub use rules::expected_capital;
