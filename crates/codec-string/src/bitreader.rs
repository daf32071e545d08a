//! Big-endian bit cursor over a configuration record.
//!
//! Bits are consumed most-significant first across byte boundaries. Reading past
//! the end of the buffer is not an error: missing bits read as zero and the cursor
//! keeps advancing, so a truncated record yields zero-filled fields instead of a
//! panic. Callers that need real data check the buffer length up front.

use byteorder::{BigEndian, ByteOrder};

/// Bit-level reader over a borrowed byte slice.
#[derive(Clone, Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Cursor position in bits from the start of `data`.
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current cursor position in bits.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total size of the underlying buffer in bits.
    pub fn len_bits(&self) -> usize {
        self.data.len().saturating_mul(8)
    }

    /// Bits left before the end of the buffer (0 once over-read).
    pub fn bits_left(&self) -> usize {
        self.len_bits().saturating_sub(self.pos)
    }

    /// Read `n` bits as an unsigned integer, MSB first.
    ///
    /// `n == 0` yields 0 and `n` above 64 is clamped to 64.
    pub fn read(&mut self, n: u32) -> u64 {
        let value = self.peek(n);
        self.skip(n.min(64) as usize);
        value
    }

    /// Read `n` bits without advancing.
    pub fn peek(&self, n: u32) -> u64 {
        if n == 0 {
            return 0;
        }
        let n = n.min(64);
        let window = self.window();
        window >> (64 - n)
    }

    pub fn read_bit(&mut self) -> bool {
        self.read(1) != 0
    }

    pub fn read_u8(&mut self, n: u32) -> u8 {
        debug_assert!(n <= 8);
        self.read(n.min(8)) as u8
    }

    pub fn read_u32(&mut self, n: u32) -> u32 {
        debug_assert!(n <= 32);
        self.read(n.min(32)) as u32
    }

    pub fn skip(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n);
    }

    /// The 64 bits starting at the cursor, zero-filled past the end.
    fn window(&self) -> u64 {
        let byte = self.pos / 8;
        let shift = (self.pos % 8) as u32;

        // 9 bytes cover any 64-bit read that starts mid-byte.
        let mut buf = [0u8; 9];
        if let Some(rest) = self.data.get(byte..) {
            let take = rest.len().min(buf.len());
            buf[..take].copy_from_slice(&rest[..take]);
        }

        let hi = BigEndian::read_u64(&buf[..8]);
        if shift == 0 {
            hi
        } else {
            (hi << shift) | (buf[8] as u64 >> (8 - shift))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_msb_first_across_bytes() {
        let data = [0b1010_1100, 0b0101_0011];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read(3), 0b101);
        assert_eq!(reader.read(7), 0b0_1100_01);
        assert!(!reader.read_bit());
        assert_eq!(reader.read(5), 0b1_0011);
        assert_eq!(reader.bits_left(), 0);
    }

    #[test]
    fn reads_full_64_bits_unaligned() {
        let data = [0xFF, 0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
        let mut reader = BitReader::new(&data);
        reader.skip(8);
        assert_eq!(reader.read(64), 0x0123_4567_89AB_CDEF);

        let mut reader = BitReader::new(&data);
        reader.skip(4);
        assert_eq!(reader.read(64), 0xF012_3456_789A_BCDE);
        assert_eq!(reader.bits_left(), 4);
    }

    #[test]
    fn read_48_bits() {
        let data = [0x90, 0x00, 0x00, 0x00, 0x00, 0x01];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read(48), 0x9000_0000_0001);
    }

    #[test]
    fn over_read_is_zero_filled() {
        let data = [0xFF];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read(12), 0xFF0);
        assert_eq!(reader.bits_left(), 0);
        assert_eq!(reader.read(32), 0);
        assert_eq!(reader.position(), 44);
    }

    #[test]
    fn empty_buffer_reads_zero() {
        let mut reader = BitReader::new(&[]);
        assert_eq!(reader.read(64), 0);
        assert!(!reader.read_bit());
        assert_eq!(reader.len_bits(), 0);
    }

    #[test]
    fn zero_width_and_clamp() {
        let data = [0xAB; 10];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read(0), 0);
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read(100), u64::from_be_bytes([0xAB; 8]));
        assert_eq!(reader.position(), 64);
    }

    #[test]
    fn peek_does_not_advance() {
        let data = [0xC0];
        let reader = BitReader::new(&data);
        assert_eq!(reader.peek(2), 0b11);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn skip_saturates() {
        let mut reader = BitReader::new(&[0x01]);
        reader.skip(usize::MAX);
        reader.skip(10);
        assert_eq!(reader.position(), usize::MAX);
        assert_eq!(reader.read(8), 0);
    }
}
