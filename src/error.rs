//! Error types for the block transforms.
//!
//! Every failure is reported through [`BlockSortError`]. The variants fall into two coarse
//! groups, see [`ErrorKind`]: bad arguments handed to an operation, and encoded data that is
//! structurally broken. Transforms are pure, so a failed call never leaves partial output behind.

use std::io;

use thiserror::Error;

/// Coarse classification of a [`BlockSortError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An index, row pointer or length that does not fit the block it refers to.
    InvalidArgument,
    /// Encoded data that ends early or is otherwise inconsistent.
    MalformedInput,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlockSortError {
    /// Suffix index query outside `0..len`.
    #[error("suffix index {index} is out of range for a block of {len} symbols")]
    IndexOutOfRange { index: usize, len: usize },

    /// Row pointer for the inverse transform outside `0..len`.
    #[error("row index {first} is out of range for a block of {len} symbols")]
    FirstOutOfRange { first: usize, len: usize },

    /// Transformed block length disagrees with the length supplied by the framing layer.
    #[error("transformed block holds {actual} symbols, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Block longer than the configured limit (or than the 32 bit frame header can address).
    #[error("block of {len} bytes exceeds the limit of {limit} bytes")]
    BlockTooLarge { len: usize, limit: usize },

    /// Frame ended before the named part was complete.
    #[error("truncated {part}: needed {needed} bytes, found {found}")]
    Truncated {
        part: &'static str,
        needed: usize,
        found: usize,
    },
}

impl BlockSortError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlockSortError::Truncated { .. } => ErrorKind::MalformedInput,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

/// Lets the binary keep returning `io::Result` from its I/O paths.
impl From<BlockSortError> for io::Error {
    fn from(err: BlockSortError) -> Self {
        let kind = match err.kind() {
            ErrorKind::InvalidArgument => io::ErrorKind::InvalidInput,
            ErrorKind::MalformedInput => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, err)
    }
}

pub type Result<T> = std::result::Result<T, BlockSortError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kinds() {
        let e = BlockSortError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
        let e = BlockSortError::Truncated {
            part: "frame header",
            needed: 4,
            found: 2,
        };
        assert_eq!(e.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn io_conversion_keeps_message() {
        let e: io::Error = BlockSortError::FirstOutOfRange { first: 9, len: 4 }.into();
        assert_eq!(e.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(
            e.to_string(),
            "row index 9 is out of range for a block of 4 symbols"
        );

        let e: io::Error = BlockSortError::Truncated {
            part: "transformed block",
            needed: 10,
            found: 3,
        }
        .into();
        assert_eq!(e.kind(), io::ErrorKind::InvalidData);
    }
}
