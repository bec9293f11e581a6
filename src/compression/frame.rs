//! Single block wire format: `first` as a big-endian u32, then the `n` transformed symbols.
//!
//! The block length is not stored. The framing layer either passes it in or lets the length
//! of the frame imply it.

use log::trace;

use crate::bitstream::{bitreader::BitReader, bitwriter::BitWriter};
use crate::error::{BlockSortError, Result};

/// Size of the `first` field.
pub const HEADER_BYTES: usize = 4;

/// Longest block a frame can describe.
pub const MAX_FRAME_BLOCK: usize = u32::MAX as usize;

/// Frame a transformed block.
pub fn write_frame(first: usize, data: &[u8]) -> Result<Vec<u8>> {
    if data.len() > MAX_FRAME_BLOCK {
        return Err(BlockSortError::BlockTooLarge {
            len: data.len(),
            limit: MAX_FRAME_BLOCK,
        });
    }
    if first >= data.len() && !(first == 0 && data.is_empty()) {
        return Err(BlockSortError::FirstOutOfRange {
            first,
            len: data.len(),
        });
    }

    let mut bw = BitWriter::new(HEADER_BYTES + data.len());
    bw.out32(first as u32);
    bw.out_bytes(data);
    trace!("Framed {} symbols, first {}, at {}.", data.len(), first, bw.loc());
    Ok(bw.into_output())
}

/// Split a frame into `first` and the transformed block.
///
/// With `expected_len` the frame must hold exactly that many symbols: fewer is a truncated
/// frame, more is a length mismatch. Without it everything after the header is the block.
pub fn read_frame(frame: &[u8], expected_len: Option<usize>) -> Result<(usize, Vec<u8>)> {
    let mut br = BitReader::new(frame);
    let first = br.bint(32).ok_or(BlockSortError::Truncated {
        part: "frame header",
        needed: HEADER_BYTES,
        found: frame.len(),
    })?;

    let available = br.remaining();
    let len = match expected_len {
        Some(n) if available < n => {
            return Err(BlockSortError::Truncated {
                part: "transformed block",
                needed: n,
                found: available,
            })
        }
        Some(n) if available > n => {
            return Err(BlockSortError::LengthMismatch {
                expected: n,
                actual: available,
            })
        }
        Some(n) => n,
        None => available,
    };

    let data = br.bytes(len).ok_or(BlockSortError::Truncated {
        part: "transformed block",
        needed: len,
        found: available,
    })?;
    Ok((first, data))
}
