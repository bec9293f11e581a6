//! Helper tools for the block transform pipeline.
//!
//! - cli: Command line interface.
//! - data_in: Whole-input reads and output writes for the binary.
//! - freq_count: Symbol frequency count, used by the inverse BWT.
//! - mtf: Move-To-Front transform.
//! - options: Settings shared by the binary and the block pipeline.
//!
pub mod cli;
pub mod data_in;
pub mod freq_count;
pub mod mtf;
pub mod options;
