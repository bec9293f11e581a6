use std::cmp::Ordering;

use log::{debug, trace};

use crate::error::{BlockSortError, Result};

/// Ranges shorter than this are finished with a comparison sort instead of more partitioning.
const SMALL_THRESH: usize = 16;

/// All circular suffixes of a block, in sorted order.
///
/// Suffixes are compared character by character, wrapping around to the start of the block,
/// for at most `len` characters. Suffixes that are still equal after that (only possible when
/// the block is rotationally periodic) are genuine ties and keep their starting order.
///
/// Sorting is a three-way radix quicksort driven by an explicit work stack, so highly
/// repetitive blocks cannot exhaust the call stack. Average cost is O(n log n) character
/// comparisons, but long runs of a repeated pattern degrade it towards O(n²).
#[derive(Debug, Clone)]
pub struct CircularSuffixArray {
    index: Vec<usize>,
}

impl CircularSuffixArray {
    /// Sort the circular suffixes of `block`.
    pub fn new(block: &[u8]) -> Self {
        let mut index = (0..block.len()).collect::<Vec<usize>>();
        sort_circular(block, &mut index);
        Self { index }
    }

    /// Number of suffixes (the block length).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Starting offset of the `i`-th smallest circular suffix.
    pub fn index(&self, i: usize) -> Result<usize> {
        self.index
            .get(i)
            .copied()
            .ok_or(BlockSortError::IndexOutOfRange {
                index: i,
                len: self.index.len(),
            })
    }

    /// The whole suffix permutation.
    pub fn as_slice(&self) -> &[usize] {
        &self.index
    }

    /// Sorted position of the suffix starting at offset 0. Zero for an empty block.
    pub fn first(&self) -> usize {
        self.index.iter().position(|&i| i == 0).unwrap_or(0)
    }
}

/// Character `depth` positions into the circular suffix starting at `offset`.
#[inline]
fn char_at(block: &[u8], offset: usize, depth: usize) -> u8 {
    // offset and depth are both below len, so one subtraction is enough
    let mut at = offset + depth;
    if at >= block.len() {
        at -= block.len();
    }
    block[at]
}

/// Compare two circular suffixes, skipping the first `depth` characters already known equal.
fn compare_from(block: &[u8], a: usize, b: usize, depth: usize) -> Ordering {
    for d in depth..block.len() {
        match char_at(block, a, d).cmp(&char_at(block, b, d)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Three-way radix quicksort of suffix offsets. Work items are half open `(lo, hi, depth)`
/// ranges whose members all share their first `depth` characters.
fn sort_circular(block: &[u8], index: &mut [usize]) {
    let n = block.len();
    let mut stack: Vec<(usize, usize, usize)> = Vec::with_capacity(64);
    if n > 1 {
        stack.push((0, n, 0));
    }
    let mut peak = stack.len();

    while let Some((lo, hi, depth)) = stack.pop() {
        // Every character compared: what is left is tied.
        if depth >= n {
            continue;
        }

        // Stable sort, so tied suffixes keep their order here as well.
        if hi - lo < SMALL_THRESH {
            index[lo..hi].sort_by(|&a, &b| compare_from(block, a, b, depth));
            continue;
        }

        let pivot = char_at(block, index[lo], depth);
        let mut lt = lo;
        let mut gt = hi;
        let mut i = lo + 1;
        while i < gt {
            match char_at(block, index[i], depth).cmp(&pivot) {
                Ordering::Less => {
                    index.swap(i, lt);
                    lt += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    gt -= 1;
                    index.swap(i, gt);
                }
                Ordering::Equal => i += 1,
            }
        }

        // [lo, lt) < pivot, [lt, gt) == pivot, [gt, hi) > pivot
        if hi - gt > 1 {
            stack.push((gt, hi, depth));
        }
        if gt - lt > 1 {
            stack.push((lt, gt, depth + 1));
        }
        if lt - lo > 1 {
            stack.push((lo, lt, depth));
        }
        peak = peak.max(stack.len());
    }

    if n > 0 {
        debug!("Sorted {} circular suffixes, work stack peaked at {}.", n, peak);
    }
    trace!("Suffix order: {:?}", &index[..n.min(32)]);
}
