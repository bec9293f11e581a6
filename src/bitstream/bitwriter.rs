/// Packs bits MSB first into an in-memory buffer. Multi-byte values go out big-endian.
pub struct BitWriter {
    /// Output buffer holding the finished bytes.
    output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
}

impl BitWriter {
    /// Create a new BitWriter with room for `capacity` bytes of output.
    pub fn new(capacity: usize) -> Self {
        Self {
            output: Vec::with_capacity(capacity),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal bitstream write function common to all out.XX functions.
    fn push_queue(&mut self) {
        // Once the queue can't take another 32 bits, move all full bytes to the output buffer.
        if self.q_bits > 32 {
            while self.q_bits > 7 {
                let byte = (self.queue >> (self.q_bits - 8)) as u8;
                self.output.push(byte);
                self.q_bits -= 8;
            }
        }
    }

    /// Put the low `n` bits of `data` on the stream (n <= 32).
    pub fn out_bits(&mut self, n: u8, data: u32) {
        debug_assert!(n <= 32);
        if n == 0 {
            return;
        }
        self.push_queue();
        self.queue <<= n;
        self.queue |= (data as u64) & (u64::MAX >> (64 - n));
        self.q_bits += n;
    }

    /// Put a byte on the stream.
    pub fn out8(&mut self, data: u8) {
        self.out_bits(8, data as u32);
    }

    /// Put a u32 on the stream, most significant byte first.
    pub fn out32(&mut self, data: u32) {
        self.out_bits(32, data);
    }

    /// Put a run of bytes on the stream. Byte aligned data bypasses the queue.
    pub fn out_bytes(&mut self, data: &[u8]) {
        if self.q_bits % 8 == 0 {
            self.drain_queue();
            self.output.extend_from_slice(data);
        } else {
            data.iter().for_each(|&x| self.out8(x));
        }
    }

    /// Move every full byte out of the queue.
    fn drain_queue(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits. Flush MUST be called before reading the output or data may be
    /// left in the internal queue.
    pub fn flush(&mut self) {
        self.drain_queue();
        if self.q_bits > 0 {
            let mut byte = (self.queue & (0xff >> (8 - self.q_bits)) as u64) as u8;
            byte <<= 8 - self.q_bits;
            self.output.push(byte);
            self.q_bits = 0;
        }
    }

    /// Flush and hand back the output buffer.
    pub fn into_output(mut self) -> Vec<u8> {
        self.flush();
        self.output
    }

    /// Debugging function. Report current position as [bytes.bits].
    pub fn loc(&self) -> String {
        let bits = self.output.len() * 8 + self.q_bits as usize;
        format!("[{}.{}]", bits / 8, bits % 8)
    }
}

#[cfg(test)]
mod test {
    use super::BitWriter;

    #[test]
    fn out8_test() {
        let mut bw = BitWriter::new(1);
        bw.out8(b'x');
        assert_eq!(bw.into_output(), "x".as_bytes());
    }

    #[test]
    fn out32_is_big_endian() {
        let mut bw = BitWriter::new(4);
        bw.out32(0x0102_0304);
        assert_eq!(bw.into_output(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn last_bits_test() {
        let mut bw = BitWriter::new(8);
        bw.out8(255);
        bw.out8(1);
        bw.out8(128);
        bw.out8(255);
        bw.out_bits(3, 7);
        assert_eq!(bw.loc(), "[4.3]");
        assert_eq!(bw.into_output(), vec![255, 1, 128, 255, 224]);
    }

    #[test]
    fn unaligned_bytes() {
        let mut bw = BitWriter::new(4);
        bw.out_bits(4, 0xa);
        bw.out_bytes(&[0xbc, 0xde]);
        assert_eq!(bw.into_output(), vec![0xab, 0xcd, 0xe0]);
    }

    #[test]
    fn many_words() {
        let mut bw = BitWriter::new(40);
        for i in 0..10_u32 {
            bw.out32(i);
        }
        let out = bw.into_output();
        assert_eq!(out.len(), 40);
        assert_eq!(&out[36..], &[0, 0, 0, 9]);
    }
}
