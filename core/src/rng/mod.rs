//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, deterministic random number
//! generation. CRITICAL: All randomness in the simulator MUST go through
//! this module — tier draws and response values alike.

mod xorshift;

pub use xorshift::RngManager;
