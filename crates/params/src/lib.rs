//! Constant values for the dkex library
//!
//! Sizes, encodings and curve parameters shared by the curve backend,
//! the key exchange and the test suites.

#![no_std]

pub mod traditional;
