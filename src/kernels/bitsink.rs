//! A growable, MSB-first bit accumulator shared by the delta and arithmetic
//! encoders.
//!
//! Bits are written most-significant-first within each byte. The buffer is
//! seeded with a single zero byte and extended by one zero byte every time the
//! current byte is exhausted, so an encoder that writes zero bits still
//! produces one zero byte of output. There is no flush or padding operation:
//! unused low bits of the final byte simply stay zero.

//==================================================================================
// 1. Core Type
//==================================================================================

/// An MSB-first bit sink over a growable byte buffer.
///
/// # Invariants
/// - `byte_offset` always indexes a valid, zero-initialized position in `buf`.
/// - `bit_offset` counts down from 7 to 0 within the current byte.
/// - Writing a bit only ever sets bits to 1; buffer bytes are never cleared.
#[derive(Debug, Clone)]
pub struct BitSink {
    buf: Vec<u8>,
    byte_offset: usize,
    bit_offset: u32,
    bits_written: u64,
}

impl BitSink {
    /// Creates a sink with one zero byte already appended.
    pub fn new() -> Self {
        Self {
            buf: vec![0],
            byte_offset: 0,
            bit_offset: 7,
            bits_written: 0,
        }
    }

    /// Appends one bit, extending the buffer by a zero byte when the current
    /// byte fills up. Any nonzero `bit` value is treated as a one bit.
    pub fn write_bit(&mut self, bit: u8) {
        if bit != 0 {
            self.buf[self.byte_offset] |= 1 << self.bit_offset;
        }
        self.bits_written += 1;
        if self.bit_offset == 0 {
            self.bit_offset = 7;
            self.byte_offset += 1;
            self.buf.push(0);
        } else {
            self.bit_offset -= 1;
        }
    }

    /// Total number of bits emitted so far.
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Consumes the sink and returns the packed bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for BitSink {
    fn default() -> Self {
        Self::new()
    }
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
