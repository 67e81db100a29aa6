//! Property-based tests for secret-recover
//!
//! This test suite uses quickcheck to verify decoding and reconstruction
//! across random bases, magnitudes and polynomials.
//!
//! Run with: cargo test --test proptests

#[path = "proptests/codec.rs"]
mod codec;

#[path = "proptests/reconstruct.rs"]
mod reconstruct;
