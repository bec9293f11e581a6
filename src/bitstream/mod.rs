//! The bitstream module carries the block frames in and out of memory.
//!
//! A frame is written with a BitWriter and read back with a BitReader. Both work MSB first,
//! so every multi-byte field on the wire is big-endian.
//!
//! Frames themselves are byte aligned, but both types are general MSB-first bit utilities:
//! reads and writes of any bit width work, and byte runs are handled at any bit offset.
//!
pub mod bitreader;
pub mod bitwriter;
