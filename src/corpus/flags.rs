//! Derivation of the capitalization flag byte array.
//!
//! One bit per corpus character, packed MSB-first, eight characters per byte.
//! A bit is set when the character is an uppercase letter that no orthographic
//! rule accounts for. The resulting array is sparse for well-edited prose,
//! which is what makes it an interesting target for the encoders.

use crate::corpus::rules;

/// Builds the flag array for `text`: `ceil(len / 8)` bytes, with bit
/// `7 - i % 8` of byte `i / 8` set for each rule-violating capital at
/// character position `i`.
pub fn violation_flags(text: &[char]) -> Vec<u8> {
    let mut flags = vec![0u8; text.len().div_ceil(8)];
    for (i, &ch) in text.iter().enumerate() {
        if ch.is_uppercase() && !rules::expected_capital(text, i) {
            flags[i / 8] |= 1 << (7 - i % 8);
        }
    }
    flags
}
