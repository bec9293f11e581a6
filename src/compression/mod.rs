//! The compression module runs the block transform pipeline.
//!
//! Forward, one block goes through these steps:
//! - Burrow Wheeler Transform: Sort the rotations so that symbols with a similar context end up together.
//! - Move To Front transform: Turn those clusters into runs of small ranks, mostly zeros.
//! - Framing: Prefix the ranks with the 32 bit big-endian row index of the original rotation.
//!
//! Decompression undoes the steps in reverse order. Entropy coding of the ranks and framing of
//! multi-block streams are left to the caller.
//!
pub mod compress_block;
pub mod frame;
