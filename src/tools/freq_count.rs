/// Returns a frequency count of every byte value in the input data.
pub fn freqs(data: &[u8]) -> [usize; 256] {
    let mut freqs = [0_usize; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}

/// Converts a frequency count into the position where each symbol's bucket starts.
pub fn bucket_starts(freqs: &[usize; 256]) -> [usize; 256] {
    let mut starts = [0_usize; 256];
    for i in 0..255 {
        starts[i + 1] = starts[i] + freqs[i];
    }
    starts
}
