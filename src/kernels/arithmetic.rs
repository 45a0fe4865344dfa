//! This module contains the adaptive order-0 arithmetic coding kernel.
//!
//! The coder maintains a finite-precision interval `[low, high]` of a
//! configurable bit width and an adaptive per-symbol frequency table seeded
//! with a count of 1 for every byte value (Laplace smoothing). Each symbol
//! narrows the interval proportionally to its estimated probability and then
//! increments its own count.
//!
//! Two deliberate departures from the canonical design are preserved because
//! this coder is write-only and only its output size is measured:
//!
//! - The secondary shift advances the interval without emitting the pending
//!   bits a canonical E3 underflow handler would produce.
//! - There is no end-of-input flush, so bits implied by the final interval are
//!   never emitted and the stream cannot reconstruct the last symbol(s).
//!
//! Interval narrowing uses floating-point proportional scaling rather than
//! scaled-integer arithmetic. With a small window and a frequency total that
//! has outgrown the interval range, the scaling can collapse a rare symbol's
//! sub-interval entirely; the coder then continues with wrapping arithmetic
//! instead of failing, since only the output size is ever consumed.

use crate::error::OrthopressError;
use crate::kernels::bitsink::BitSink;
use crate::traits::EntropyEncoder;

/// Number of symbols in the alphabet (bytes 0-255).
const NUM_SYMBOLS: usize = 256;

//==================================================================================
// 1. Core Type
//==================================================================================

/// An adaptive order-0 arithmetic encoder with a `window`-bit interval.
#[derive(Debug, Clone, Copy)]
pub struct ArithmeticEncoder {
    window: u32,
    max_value: u64,
}

impl ArithmeticEncoder {
    /// Creates an encoder with the given interval precision in bits.
    ///
    /// Widths below 2 cannot represent a nonzero probability range and are
    /// rejected. Widths above 53 are rejected as well: the interval range must
    /// stay exactly representable in an `f64` for the proportional scaling to
    /// be deterministic.
    pub fn new(window: u32) -> Result<Self, OrthopressError> {
        if !(2..=53).contains(&window) {
            return Err(OrthopressError::InvalidWindowWidth(window));
        }
        Ok(Self {
            window,
            max_value: 1u64 << window,
        })
    }

    /// Encodes `source`, returning the packed renormalization bits.
    ///
    /// All coding state (interval registers, frequency table, bit sink) is
    /// created fresh for this call and discarded afterwards.
    pub fn encode(&self, source: &[u8]) -> Vec<u8> {
        let mut counts = [1u64; NUM_SYMBOLS];
        self.encode_with_counts(source, &mut counts).0
    }

    /// The instrumentable entry point: the caller supplies the frequency
    /// table (left holding the final adapted counts) and receives, alongside
    /// the output, the number of steps at which the float scaling collapsed a
    /// sub-interval and inverted the bounds.
    fn encode_with_counts(
        &self,
        source: &[u8],
        counts: &mut [u64; NUM_SYMBOLS],
    ) -> (Vec<u8>, u64) {
        let mut sink = BitSink::new();
        let mask = self.max_value - 1;
        let top = 1u64 << (self.window - 1);

        let mut low: u64 = 0;
        let mut high: u64 = mask;
        let mut inverted_steps = 0u64;

        for &b in source {
            (low, high) = project(counts, b, low, high);
            if low > high {
                inverted_steps += 1;
            }

            // Top-bit agreement: emit settled bits and rescale. The vacated
            // low bit of `high` refills with 1, keeping the bound inclusive.
            while low & top == high & top {
                sink.write_bit(u8::from(low & top != 0));
                low = (low << 1) & mask;
                high = ((high << 1) & mask) | 1;
            }

            // Secondary shift: drop leading disagreeing bits below the top
            // without emitting anything. Not a canonical E3 handler.
            let pending = disagreeing_bits(low, high, self.window);
            for _ in 0..pending {
                low = (low << 1) & mask;
                high = ((high << 1) & mask) | 1;
            }

            counts[b as usize] += 1;
        }

        log::debug!(
            "arithmetic encoder: {} bits, {} inverted steps",
            sink.bits_written(),
            inverted_steps
        );
        (sink.into_bytes(), inverted_steps)
    }
}

impl EntropyEncoder for ArithmeticEncoder {
    fn name(&self) -> &'static str {
        "arithmetic"
    }

    fn encode(&self, source: &[u8]) -> Result<Vec<u8>, OrthopressError> {
        Ok(ArithmeticEncoder::encode(self, source))
    }
}

//==================================================================================
// 2. Private Core Logic
//==================================================================================

/// Narrows `[low, high]` to the sub-interval of `symbol`, proportionally to
/// its cumulative and own frequency.
fn project(counts: &[u64; NUM_SYMBOLS], symbol: u8, low: u64, high: u64) -> (u64, u64) {
    let cumulative: u64 = counts[..symbol as usize].iter().sum();
    let total: u64 = counts.iter().sum();

    let alpha = cumulative as f64 / total as f64;
    let beta = (cumulative + counts[symbol as usize]) as f64 / total as f64;
    let range = high.wrapping_sub(low).wrapping_add(1) as f64;

    // Wrapping arithmetic: once the frequency total outgrows the interval
    // range, the float scaling can truncate a rare symbol's sub-interval to
    // nothing and invert the bounds. The coder is write-only, so it presses
    // on mod 2^64 rather than failing on valid input.
    let new_low = low.wrapping_add((alpha * range) as u64);
    let new_high = low.wrapping_add((beta * range) as u64).wrapping_sub(1);
    (new_low, new_high)
}

/// Counts the most-significant bits below the top where `low` and `high`
/// disagree, scanning from bit `window - 2` down to the first agreement.
fn disagreeing_bits(low: u64, high: u64, window: u32) -> u32 {
    let mut count = 0;
    for offset in (0..window - 1).rev() {
        let probe = 1u64 << offset;
        if low & probe != high & probe {
            count += 1;
        } else {
            break;
        }
    }
    count
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
