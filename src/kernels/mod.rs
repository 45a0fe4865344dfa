//! The pure, self-contained entropy coding kernels.
//!
//! Each submodule implements one write-only byte-stream encoder used by the
//! harness to score the compressibility of a flag array:
//!
//! - `delta`: a universal (Elias-delta) coder, one self-delimiting code per byte.
//! - `arithmetic`: an adaptive order-0 arithmetic coder with a fixed-width interval.
//! - `huffman`: a static two-pass Huffman coder.
//!
//! The first two share the MSB-first `bitsink::BitSink`; the Huffman coder
//! packs its code strings directly into an 8-bit-aligned buffer.

pub mod arithmetic;
pub mod bitsink;
pub mod delta;
pub mod huffman;
