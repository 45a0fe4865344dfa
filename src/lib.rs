//! This file is the root of the `orthopress` crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`kernels`, `corpus`,
//!     etc.) so the Rust compiler knows they exist.
//! 2.  Exposing the crate version as a constant.
//!
//! The actual entry point for the research harness is `harness::run`, driven
//! by the `orthopress` binary in `main.rs`.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod config;
pub mod corpus;
pub mod error;
pub mod harness;
pub mod kernels;
pub mod model;
pub mod stats;
pub mod traits;
