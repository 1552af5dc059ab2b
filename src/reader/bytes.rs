use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{WkbError, WkbResult};
use crate::Endianness;

/// A cursor over an in-memory WKB buffer.
///
/// Multibyte reads honor the reader's current byte order, which each WKB
/// record re-declares via [`set_byte_order`](Self::set_byte_order). Reads
/// past the end of the buffer fail with [`WkbError::Truncated`].
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
    byte_order: Endianness,
}

impl<'a> ByteReader<'a> {
    /// A reader over `buf` starting at position 0
    pub fn new(buf: &'a [u8], byte_order: Endianness) -> Self {
        Self {
            buf,
            pos: 0,
            byte_order,
        }
    }

    fn advance(&mut self, n: usize) -> WkbResult<&'a [u8]> {
        let remaining = self.remaining();
        if remaining < n {
            return Err(WkbError::Truncated {
                needed: n,
                remaining,
            });
        }
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Read a single byte
    pub fn read_u8(&mut self) -> WkbResult<u8> {
        Ok(self.advance(1)?[0])
    }

    /// Read a signed 32-bit integer in the current byte order
    pub fn read_i32(&mut self) -> WkbResult<i32> {
        let byte_order = self.byte_order;
        let bytes = self.advance(4)?;
        Ok(match byte_order {
            Endianness::BigEndian => BigEndian::read_i32(bytes),
            Endianness::LittleEndian => LittleEndian::read_i32(bytes),
        })
    }

    /// Read an unsigned 32-bit integer in the current byte order
    pub fn read_u32(&mut self) -> WkbResult<u32> {
        let byte_order = self.byte_order;
        let bytes = self.advance(4)?;
        Ok(match byte_order {
            Endianness::BigEndian => BigEndian::read_u32(bytes),
            Endianness::LittleEndian => LittleEndian::read_u32(bytes),
        })
    }

    /// Read an IEEE-754 binary64 value in the current byte order
    pub fn read_f64(&mut self) -> WkbResult<f64> {
        let byte_order = self.byte_order;
        let bytes = self.advance(8)?;
        Ok(match byte_order {
            Endianness::BigEndian => BigEndian::read_f64(bytes),
            Endianness::LittleEndian => LittleEndian::read_f64(bytes),
        })
    }

    /// The byte order used for subsequent multibyte reads
    pub fn byte_order(&self) -> Endianness {
        self.byte_order
    }

    /// Switch the byte order for subsequent multibyte reads
    pub fn set_byte_order(&mut self, byte_order: Endianness) {
        self.byte_order = byte_order;
    }

    /// Bytes left before the end of the buffer
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The current position from the start of the buffer
    pub fn position(&self) -> usize {
        self.pos
    }
}
