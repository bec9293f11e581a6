//! BitReader: reads an MSB-first packed bitstream from an in-memory buffer.
//!
//! Every read is all or nothing. A request for more bits than remain returns `None` and
//! leaves the cursor where it was, so callers can report exactly what was missing.

/// Reads bits, big-endian integers and bytes from a byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    source: &'a [u8],
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Number of unread bits.
    pub fn remaining_bits(&self) -> usize {
        (self.source.len() - self.cursor) * 8 - self.bit_index
    }

    /// Number of unread whole bytes.
    pub fn remaining(&self) -> usize {
        self.remaining_bits() / 8
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        let byte = *self.source.get(self.cursor)?;
        let bit = (byte >> (7 - self.bit_index)) & 1;
        self.bit_index += 1;
        if self.bit_index == 8 {
            self.bit_index = 0;
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<usize> of the next n bits, or None if fewer than n bits remain.
    pub fn bint(&mut self, mut n: usize) -> Option<usize> {
        debug_assert!(n <= usize::BITS as usize);
        if n > self.remaining_bits() {
            return None;
        }
        let mut result = 0_usize;
        while n > 0 {
            // Take whole bytes while we are aligned, single bits otherwise
            if self.bit_index == 0 && n >= 8 {
                result = result << 8 | self.source[self.cursor] as usize;
                self.cursor += 1;
                n -= 8;
            } else {
                result = result << 1 | self.bit()?;
                n -= 1;
            }
        }
        Some(result)
    }

    /// Returns a byte as an Option<u8>, or None if there is no more data to read.
    pub fn byte(&mut self) -> Option<u8> {
        self.bint(8).map(|byte| byte as u8)
    }

    /// Returns an Option<Vec<u8>> of n bytes, or None if fewer than n bytes remain.
    pub fn bytes(&mut self, n: usize) -> Option<Vec<u8>> {
        if n > self.remaining() {
            return None;
        }
        if self.bit_index == 0 {
            let out = self.source[self.cursor..self.cursor + n].to_vec();
            self.cursor += n;
            return Some(out);
        }
        (0..n).map(|_| self.byte()).collect()
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bit(), Some(1));
        for _ in 0..6 {
            assert_eq!(br.bit(), Some(0));
        }
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn bint_test() {
        let x = [0b00011011_u8];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bint(5), Some(3));
        assert_eq!(br.bint(1), Some(0));
        assert_eq!(br.bint(2), Some(3));
        assert_eq!(br.bint(1), None);
    }

    #[test]
    fn bint_32_is_big_endian() {
        let x = [0x00_u8, 0x00, 0x01, 0x02, 0xff];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bint(32), Some(0x0102));
        assert_eq!(br.remaining(), 1);
    }

    #[test]
    fn short_read_leaves_cursor() {
        let x = [0xab_u8, 0xcd];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bint(32), None);
        assert_eq!(br.loc(), "[0.0]");
        assert_eq!(br.bytes(3), None);
        assert_eq!(br.bytes(2), Some(vec![0xab, 0xcd]));
    }

    #[test]
    fn bytes_test() {
        let mut br = BitReader::new("Hello, world!".as_bytes());
        assert_eq!(br.byte(), Some(b'H'));
        assert_eq!(br.bytes(4), Some("ello".as_bytes().to_vec()));
        assert_eq!(br.remaining(), 8);
    }

    #[test]
    fn unaligned_bytes() {
        let x = [0xab_u8, 0xcd, 0xe0];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bint(4), Some(0xa));
        assert_eq!(br.bytes(2), Some(vec![0xbc, 0xde]));
        assert_eq!(br.loc(), "[2.4]");
    }
}
