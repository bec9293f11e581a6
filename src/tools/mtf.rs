/// Move-To-Front session over the full byte alphabet.
///
/// `alphabet` lists the 256 byte values most recently used first, `rank` is its inverse
/// (`alphabet[rank[b]] == b`). A new session starts from ascending order; each encoded or
/// decoded symbol is moved to the front and everything ahead of it slides back one slot.
#[derive(Debug, Clone)]
pub struct MoveToFront {
    alphabet: [u8; 256],
    rank: [u8; 256],
}

impl MoveToFront {
    pub fn new() -> Self {
        let mut alphabet = [0_u8; 256];
        for (i, sym) in alphabet.iter_mut().enumerate() {
            *sym = i as u8;
        }
        Self {
            alphabet,
            rank: alphabet,
        }
    }

    /// Encode one symbol, returning its current rank.
    pub fn encode(&mut self, symbol: u8) -> u8 {
        let idx = self.rank[symbol as usize];
        self.promote(idx as usize);
        idx
    }

    /// Decode one rank, returning the symbol found there.
    pub fn decode(&mut self, idx: u8) -> u8 {
        let symbol = self.alphabet[idx as usize];
        self.promote(idx as usize);
        symbol
    }

    /// Current recency order, most recent first.
    pub fn alphabet(&self) -> &[u8; 256] {
        &self.alphabet
    }

    /// Move the symbol at `idx` to the front, shifting the ones ahead of it back by one.
    fn promote(&mut self, idx: usize) {
        let symbol = self.alphabet[idx];
        for j in (1..=idx).rev() {
            let moved = self.alphabet[j - 1];
            self.alphabet[j] = moved;
            self.rank[moved as usize] += 1;
        }
        self.alphabet[0] = symbol;
        self.rank[symbol as usize] = 0;
    }
}

impl Default for MoveToFront {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode data using Move To Front transform. Output has one rank per input byte.
pub fn mtf_encode(data: &[u8]) -> Vec<u8> {
    let mut mtf = MoveToFront::new();
    data.iter().map(|&byte| mtf.encode(byte)).collect()
}

/// Decode ranks produced by [`mtf_encode`] back into the original bytes.
pub fn mtf_decode(data: &[u8]) -> Vec<u8> {
    let mut mtf = MoveToFront::new();
    data.iter().map(|&idx| mtf.decode(idx)).collect()
}
