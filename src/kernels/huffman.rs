//! This module contains the static, two-pass Huffman coding kernel.
//!
//! Pass 1 builds a histogram of the byte values actually present in the
//! input. Pass 2 builds the merge tree bottom-up, assigning each value a
//! prefix-free code string, then packs the concatenated code strings into
//! bytes. Equal-frequency nodes are merged in creation order (leaves first,
//! in ascending byte-value order, then merged nodes), which makes the code
//! assignment fully deterministic.
//!
//! The encoder is write-only: no symbol table, bit-length header, or padding
//! count is serialized, so the output cannot be decoded, only sized.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::OrthopressError;
use crate::traits::EntropyEncoder;

//==================================================================================
// 1. Core Type
//==================================================================================

/// A static Huffman encoder over byte values.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanEncoder;

impl HuffmanEncoder {
    /// Encodes `source` with a code table built from its own histogram.
    ///
    /// Empty input yields empty output. An input using exactly one distinct
    /// byte value has no merge step to assign a code, so that value gets the
    /// fixed one-bit code `"0"`. The final partial byte is right-padded with
    /// zero bits.
    pub fn encode(&self, source: &[u8]) -> Result<Vec<u8>, OrthopressError> {
        if source.is_empty() {
            return Ok(Vec::new());
        }

        let mut histogram = [0u64; 256];
        for &b in source {
            histogram[b as usize] += 1;
        }
        let codes = build_codes(&histogram);

        let mut out = Vec::new();
        let mut current = 0u8;
        let mut filled = 0u32;
        let mut total_bits = 0u64;
        for &b in source {
            let code = codes[b as usize].as_ref().ok_or_else(|| {
                OrthopressError::InternalError(format!(
                    "no Huffman code for byte {} present in input",
                    b
                ))
            })?;
            total_bits += code.len() as u64;
            for bit in code.bytes() {
                if bit == b'1' {
                    current |= 1 << (7 - filled);
                }
                filled += 1;
                if filled == 8 {
                    out.push(current);
                    current = 0;
                    filled = 0;
                }
            }
        }
        if filled > 0 {
            out.push(current);
        }

        log::debug!("huffman encoder: {} bits", total_bits);
        Ok(out)
    }
}

impl EntropyEncoder for HuffmanEncoder {
    fn name(&self) -> &'static str {
        "huffman"
    }

    fn encode(&self, source: &[u8]) -> Result<Vec<u8>, OrthopressError> {
        HuffmanEncoder::encode(self, source)
    }
}

//==================================================================================
// 2. Private Core Logic (Merge Tree)
//==================================================================================

/// A pending tree node: its total frequency, a creation sequence number used
/// as a deterministic tie-break, and the byte values in its subtree.
struct MergeNode {
    freq: u64,
    seq: u64,
    symbols: Vec<u8>,
}

impl PartialEq for MergeNode {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}

impl Eq for MergeNode {}

impl Ord for MergeNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that BinaryHeap pops the lowest (frequency, sequence).
        (other.freq, other.seq).cmp(&(self.freq, self.seq))
    }
}

impl PartialOrd for MergeNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Builds the per-value code strings from a histogram.
///
/// Values absent from the input get no code. A histogram with exactly one
/// entry never enters the merge loop and falls back to the code `"0"`.
fn build_codes(histogram: &[u64; 256]) -> Vec<Option<String>> {
    let mut codes: Vec<Option<String>> = vec![None; 256];
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    for (value, &freq) in histogram.iter().enumerate() {
        if freq > 0 {
            heap.push(MergeNode {
                freq,
                seq,
                symbols: vec![value as u8],
            });
            seq += 1;
        }
    }

    if heap.len() == 1 {
        let only = heap.pop().unwrap();
        codes[only.symbols[0] as usize] = Some("0".to_string());
        return codes;
    }

    while heap.len() > 1 {
        let first = heap.pop().unwrap();
        let second = heap.pop().unwrap();
        for (node, bit) in [(&first, '0'), (&second, '1')] {
            for &symbol in &node.symbols {
                let code = codes[symbol as usize].get_or_insert_with(String::new);
                code.insert(0, bit);
            }
        }
        let mut symbols = first.symbols;
        symbols.extend(second.symbols);
        heap.push(MergeNode {
            freq: first.freq + second.freq,
            seq,
            symbols,
        });
        seq += 1;
    }

    codes
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
