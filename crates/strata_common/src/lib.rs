//! Shared foundational types for the Strata snapshotting engine.
//!
//! This crate provides the hash types (64-bit XOR-combinable ABI hashes and
//! 128-bit integrity checksums) and the generic sorted-slice utilities the
//! snapshotter crates build on.

#![warn(missing_docs)]

pub mod hash;
pub mod sorted;

pub use hash::{AbiHash, ContentHash};
pub use sorted::strict_prefix_range;
