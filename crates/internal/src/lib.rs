//! Internal utilities for the dkex library
//!
//! Not part of the public API; shared by the other workspace crates.

pub mod constant_time;
