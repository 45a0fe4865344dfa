//! This module defines shared traits used across the different encoders.

use crate::error::OrthopressError;

/// A write-only, whole-buffer entropy coder.
///
/// Every encoder in `kernels` compresses one finite byte sequence per call and
/// returns an opaque blob whose only meaningful property is its size. All
/// per-call state (bit buffers, interval registers, frequency tables, code
/// tables) is created inside `encode` and discarded when it returns, so a
/// single encoder value may be reused across calls and shared between threads.
pub trait EntropyEncoder {
    /// A short, stable name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Compresses `source` and returns the packed output bytes.
    fn encode(&self, source: &[u8]) -> Result<Vec<u8>, OrthopressError>;
}
