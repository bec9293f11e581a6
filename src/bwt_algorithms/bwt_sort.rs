use super::suffix_sort::CircularSuffixArray;
use crate::error::{BlockSortError, Result};
use crate::tools::freq_count::{bucket_starts, freqs};
use log::{debug, trace};

/// Burrows-Wheeler-Transform of one block.
/// Returns the row index of the original rotation ("first") and the last column of the sorted
/// rotation matrix. An empty block gives `(0, [])`.
pub fn bwt_encode(block: &[u8]) -> (usize, Vec<u8>) {
    let end = block.len();
    if end == 0 {
        return (0, Vec::new());
    }

    let csa = CircularSuffixArray::new(block);

    // The last column holds the symbol preceding each sorted suffix.
    let mut first = 0;
    let mut bwt = Vec::with_capacity(end);
    for (row, &offset) in csa.as_slice().iter().enumerate() {
        if offset == 0 {
            first = row;
            bwt.push(block[end - 1]);
        } else {
            bwt.push(block[offset - 1]);
        }
    }
    debug!("BWT of {} bytes, first is {}.", end, first);
    (first, bwt)
}

/// Decode a Burrows-Wheeler-Transform.
///
/// A stable counting sort of `bwt_in` gives the first column of the rotation matrix together
/// with `next`, the row holding each symbol's successor. Walking `next` from `first` then
/// yields the original block in O(n + 256) without rebuilding the matrix.
pub fn bwt_decode(first: usize, bwt_in: &[u8]) -> Result<Vec<u8>> {
    let end = bwt_in.len();
    if end == 0 && first == 0 {
        return Ok(Vec::new());
    }
    if first >= end {
        return Err(BlockSortError::FirstOutOfRange { first, len: end });
    }

    // Cumulative frequencies give the start of each symbol's run in the first column
    let mut starts = bucket_starts(&freqs(bwt_in));

    // Equal symbols land in the order they appear in bwt_in, which is what keeps rows aligned.
    let mut sorted = vec![0_u8; end];
    let mut next = vec![0_usize; end];
    for (i, &s) in bwt_in.iter().enumerate() {
        let at = starts[s as usize];
        sorted[at] = s;
        next[at] = i;
        starts[s as usize] += 1;
    }
    trace!("Successor table built for {} symbols.", end);

    let mut row = first;
    let mut block = Vec::with_capacity(end);
    for _ in 0..end {
        block.push(sorted[row]);
        row = next[row];
    }
    debug!("Inverse BWT restored {} bytes from first {}.", end, first);
    Ok(block)
}

/// [`bwt_decode`] for callers whose framing layer supplies the block length separately.
pub fn bwt_decode_exact(first: usize, bwt_in: &[u8], expected_len: usize) -> Result<Vec<u8>> {
    if bwt_in.len() != expected_len {
        return Err(BlockSortError::LengthMismatch {
            expected: expected_len,
            actual: bwt_in.len(),
        });
    }
    bwt_decode(first, bwt_in)
}
