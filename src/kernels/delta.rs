//! This module contains the pure, stateless kernel for universal
//! (Elias-delta) encoding of a byte stream.
//!
//! Each input byte `b` is encoded independently as the Elias-delta code of
//! `b + 1` (the shift keeps the argument positive, as Elias coding requires).
//! The codes are self-delimiting and written back to back with no separators,
//! terminator, or header. The encoder is write-only: no decoder exists and the
//! output is used solely to measure compressed size.

use crate::error::OrthopressError;
use crate::kernels::bitsink::BitSink;
use crate::traits::EntropyEncoder;

//==================================================================================
// 1. Core Type
//==================================================================================

/// A universal coder emitting one Elias-delta code per input byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeltaEncoder;

impl DeltaEncoder {
    /// Encodes every byte of `source` as the Elias-delta code of `byte + 1`.
    ///
    /// For `n = b + 1`, with `L = floor(log2 n)` and `LL = floor(log2 (L+1))`,
    /// the code is: `LL` zero bits, the `LL + 1`-bit binary form of `L + 1`
    /// (MSB first, leading bit always 1), then the low `L` bits of `n` (the
    /// mantissa, excluding the implicit leading 1), MSB first. `b = 0`
    /// degenerates to a single one bit.
    ///
    /// Accepts any byte sequence by construction; this never fails.
    pub fn encode(&self, source: &[u8]) -> Vec<u8> {
        let mut sink = BitSink::new();
        for &b in source {
            let n = u32::from(b) + 1;
            let len = n.ilog2();
            let len_len = (len + 1).ilog2();

            for _ in 0..len_len {
                sink.write_bit(0);
            }
            let header = len + 1;
            for i in (0..=len_len).rev() {
                sink.write_bit(((header >> i) & 1) as u8);
            }
            for i in (0..len).rev() {
                sink.write_bit(((n >> i) & 1) as u8);
            }
        }
        log::debug!("delta encoder: {} bits", sink.bits_written());
        sink.into_bytes()
    }
}

impl EntropyEncoder for DeltaEncoder {
    fn name(&self) -> &'static str {
        "delta"
    }

    fn encode(&self, source: &[u8]) -> Result<Vec<u8>, OrthopressError> {
        Ok(DeltaEncoder::encode(self, source))
    }
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Bit length of the Elias-delta code for one byte: `2*LL + L + 1`.
    fn expected_code_bits(b: u8) -> u64 {
        let n = u32::from(b) + 1;
        let len = n.ilog2();
        let len_len = (len + 1).ilog2();
        u64::from(2 * len_len + len + 1)
    }

    /// Builds the expected code for one byte as individual bits.
    fn expected_code(b: u8) -> Vec<u8> {
        let n = u32::from(b) + 1;
        let len = n.ilog2();
        let len_len = (len + 1).ilog2();
        let mut bits = vec![0u8; len_len as usize];
        for i in (0..=len_len).rev() {
            bits.push(((len + 1) >> i & 1) as u8);
        }
        for i in (0..len).rev() {
            bits.push((n >> i & 1) as u8);
        }
        bits
    }

    /// Packs a bit sequence the way the sink does: seed byte, eager extension.
    fn pack(bits: &[u8]) -> Vec<u8> {
        let mut buf = vec![0u8; bits.len() / 8 + 1];
        for (i, &bit) in bits.iter().enumerate() {
            if bit != 0 {
                buf[i / 8] |= 1 << (7 - i % 8);
            }
        }
        buf
    }

    #[test]
    fn test_zero_byte_encodes_to_single_high_bit() {
        let out = DeltaEncoder.encode(&[0u8]);
        assert_eq!(out, vec![0b1000_0000]);
    }

    #[test]
    fn test_byte_one_is_four_bits() {
        // n = 2: one zero bit, "10" for L+1 = 2, one mantissa bit 0 -> 0100.
        let out = DeltaEncoder.encode(&[1u8]);
        assert_eq!(out, vec![0b0100_0000]);
        assert_eq!(expected_code_bits(1), 4);
    }

    #[test]
    fn test_single_byte_codes_match_independent_packing() {
        for b in 0..=255u8 {
            let bits = expected_code(b);
            assert_eq!(bits.len() as u64, expected_code_bits(b), "byte {}", b);
            assert_eq!(DeltaEncoder.encode(&[b]), pack(&bits), "byte {}", b);
        }
        assert_eq!(expected_code_bits(0), 1);
        assert_eq!(expected_code_bits(255), 15); // n = 256: L = 8, LL = 3.
    }

    #[test]
    fn test_output_byte_length_covers_total_bits() {
        let input: Vec<u8> = (0..=255).collect();
        let total_bits: u64 = input.iter().map(|&b| expected_code_bits(b)).sum();
        let out = DeltaEncoder.encode(&input);
        // The sink appends its next zero byte eagerly on an exact boundary.
        let expected_len = (total_bits / 8 + 1) as usize;
        assert_eq!(out.len(), expected_len);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let input = b"the quick brown fox jumps over the lazy dog".to_vec();
        assert_eq!(DeltaEncoder.encode(&input), DeltaEncoder.encode(&input));
    }

    #[test]
    fn test_empty_input_yields_sink_seed_byte() {
        assert_eq!(DeltaEncoder.encode(&[]), vec![0]);
    }
}
