/// blocksort options - structs and impls shared by the binary and the block pipeline
use std::{fmt::Display, fmt::Formatter};

use log::LevelFilter;

/// Default maximum block length: 8 MiB.
pub const DEFAULT_BLOCK_LIMIT: usize = 8 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Defines the operational modes
pub enum Mode {
    /// BWT, then MTF, then frame
    Zip,
    /// Inverse of Zip
    Unzip,
    /// BWT only, framed
    Bwt,
    /// Inverse of Bwt
    Unbwt,
    /// MTF ranks only
    Mtf,
    /// Inverse of Mtf
    Unmtf,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
/// Defines all user settable options to control program behavior
pub struct BsOpts {
    /// Optional name of file to read for input (stdin when absent)
    pub file: Option<String>,
    /// Optional name of file to write (stdout when absent)
    pub output: Option<String>,
    /// Operation to perform on the block
    pub op_mode: Mode,
    /// Largest block, in bytes, the pipeline accepts
    pub block_limit: usize,
    /// Logging level
    pub verbosity: LevelFilter,
}

impl BsOpts {
    /// Instanciated on program start - sets default parameters
    pub fn new() -> Self {
        Self {
            file: None,
            output: None,
            op_mode: Mode::Zip,
            block_limit: DEFAULT_BLOCK_LIMIT,
            verbosity: LevelFilter::Warn,
        }
    }
}

impl Default for BsOpts {
    fn default() -> Self {
        Self::new()
    }
}
