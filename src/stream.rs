/*
 * SPDX-FileCopyrightText: 2025 the swf-bitstream authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The cursor-based reader over a byte buffer.

use crate::error::StreamError;

#[cfg(feature = "alloc")]
use alloc::boxed::Box;

/// Sub-byte read state: bits already pulled from the buffer but not yet
/// consumed.
///
/// The state is only meaningful between consecutive bit reads. Every
/// byte-granular operation goes through [`BitCursor::reset`], so a stale
/// cache can never leak into a byte-aligned read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct BitCursor {
    /// Number of pending bits in `cache`, always less than 8 between calls.
    avail: u32,
    /// Pending bits, right-aligned; bits above `avail` are zero.
    cache: u64,
}

impl BitCursor {
    #[inline(always)]
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A cursor-based reader over an immutable byte buffer holding SWF-encoded
/// data.
///
/// The backing buffer is any `B: AsRef<[u8]>`: a `BitStream<&[u8]>` borrows
/// caller-owned bytes, while [`BitStream::from_copy`] duplicates them into a
/// private buffer released when the reader is dropped. Independent readers
/// may share one borrowed buffer.
///
/// Two read models share the cursor. Bit-granular reads
/// ([`read_ubits`](Self::read_ubits), [`read_sbits`](Self::read_sbits),
/// [`read_bool`](Self::read_bool)) consume fields of arbitrary width packed
/// most-significant-bit first. Byte-granular reads (everything else) first
/// force the cursor back to a byte boundary, discarding pending bits, then
/// read little-endian values of fixed width.
///
/// Every read is bounds-checked; a read that would pass the end of the
/// buffer returns [`StreamError::UnexpectedEof`] and leaves the cursor where
/// it was.
///
/// # Example
/// ```
/// use swf_bitstream::prelude::*;
///
/// let mut stream = BitStream::new(&[0b1011_0100, 0x2A][..]);
/// assert_eq!(stream.read_ubits(3).unwrap(), 0b101);
/// assert_eq!(stream.read_sbits(4).unwrap(), -0b110);
/// // a byte read realigns, dropping the one pending bit
/// assert_eq!(stream.read_u8().unwrap(), 0x2A);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BitStream<B: AsRef<[u8]>> {
    data: B,
    pos: usize,
    bits: BitCursor,
}

impl<B: AsRef<[u8]>> BitStream<B> {
    /// Create a new [`BitStream`] over a backing buffer.
    #[must_use]
    pub fn new(data: B) -> Self {
        Self {
            data,
            pos: 0,
            bits: BitCursor::default(),
        }
    }

    /// Return the backing buffer.
    pub fn into_inner(self) -> B {
        self.data
    }

    /// The whole backing buffer, regardless of the cursor position.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Length of the backing buffer in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.as_ref().len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.as_ref().is_empty()
    }

    /// Current byte position of the cursor.
    #[inline]
    #[must_use]
    pub fn tell(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the end of the buffer.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.len() - self.pos
    }

    /// Move the cursor back to the start of the buffer.
    pub fn rewind(&mut self) {
        self.pos = 0;
        self.bits.reset();
    }

    /// Move the cursor to an absolute byte position in `[0, len]`.
    pub fn seek_to(&mut self, pos: usize) -> Result<(), StreamError> {
        if pos > self.len() {
            return Err(StreamError::SeekOutOfBounds {
                pos: pos as i64,
                len: self.len(),
            });
        }
        self.pos = pos;
        self.bits.reset();
        Ok(())
    }

    /// Move the cursor by a signed byte offset relative to its current
    /// position.
    pub fn seek(&mut self, offset: i64) -> Result<(), StreamError> {
        let pos = (self.pos as i64)
            .checked_add(offset)
            .ok_or(StreamError::SeekOutOfBounds {
                pos: offset,
                len: self.len(),
            })?;
        if pos < 0 || pos as u64 > self.len() as u64 {
            return Err(StreamError::SeekOutOfBounds {
                pos,
                len: self.len(),
            });
        }
        self.pos = pos as usize;
        self.bits.reset();
        Ok(())
    }

    /// Discard pending bits without moving the byte cursor.
    ///
    /// Called implicitly by every byte-granular read; only needed explicitly
    /// by callers that mix bit reads with manual seeks.
    #[inline]
    pub fn align(&mut self) {
        self.bits.reset();
    }

    /// Read an unsigned bit field of `n` bits, `n` in `0..=32`, packed
    /// most-significant-bit first.
    ///
    /// The field may start anywhere and span byte boundaries. `n = 0` yields
    /// 0 without touching the stream.
    ///
    /// # Panics
    /// If `n > 32`.
    pub fn read_ubits(&mut self, n: u32) -> Result<u32, StreamError> {
        assert!(n <= 32, "bit fields are at most 32 bits wide");
        if n == 0 {
            return Ok(0);
        }
        if self.bits.avail < n {
            let needed = ((n - self.bits.avail) as usize).div_ceil(8);
            let data = self.data.as_ref();
            if self.pos + needed > data.len() {
                return Err(StreamError::UnexpectedEof {
                    pos: self.pos,
                    requested: needed,
                });
            }
            for _ in 0..needed {
                self.bits.cache = (self.bits.cache << 8) | u64::from(data[self.pos]);
                self.pos += 1;
            }
            self.bits.avail += 8 * needed as u32;
        }
        // at most 7 pending + 32 refilled bits in the cache here
        self.bits.avail -= n;
        let value = (self.bits.cache >> self.bits.avail) as u32;
        self.bits.cache &= (1u64 << self.bits.avail) - 1;
        Ok(value)
    }

    /// Read a signed bit field of `n` bits: the same extraction as
    /// [`read_ubits`](Self::read_ubits), with bit `n - 1` treated as the
    /// sign bit of a two's-complement value.
    pub fn read_sbits(&mut self, n: u32) -> Result<i32, StreamError> {
        let value = self.read_ubits(n)?;
        if n == 0 {
            return Ok(0);
        }
        let shift = 32 - n;
        Ok(((value << shift) as i32) >> shift)
    }

    /// Read a single-bit flag.
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool, StreamError> {
        Ok(self.read_ubits(1)? != 0)
    }

    /// Realign, bounds-check and consume `width` bytes.
    ///
    /// All byte-granular reads go through here, so the bounds check lives in
    /// exactly one place.
    #[inline]
    fn take(&mut self, width: usize) -> Result<&[u8], StreamError> {
        self.bits.reset();
        let start = self.pos;
        let end = start.checked_add(width).ok_or(StreamError::UnexpectedEof {
            pos: start,
            requested: width,
        })?;
        if end > self.data.as_ref().len() {
            return Err(StreamError::UnexpectedEof {
                pos: start,
                requested: width,
            });
        }
        self.pos = end;
        Ok(&self.data.as_ref()[start..end])
    }

    /// Read `n` uninterpreted bytes.
    #[inline]
    pub fn read_slice(&mut self, n: usize) -> Result<&[u8], StreamError> {
        self.take(n)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, StreamError> {
        Ok(self.take(1)?[0])
    }

    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, StreamError> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, StreamError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    #[inline]
    pub fn read_i16(&mut self) -> Result<i16, StreamError> {
        Ok(self.read_u16()? as i16)
    }

    #[inline]
    pub fn read_i32(&mut self) -> Result<i32, StreamError> {
        Ok(self.read_u32()? as i32)
    }

    /// Read a 16-bit 8.8 fixed-point value.
    #[inline]
    pub fn read_fixed8(&mut self) -> Result<f32, StreamError> {
        Ok(f32::from(self.read_i16()?) / 256.0)
    }

    /// Read a 32-bit 16.16 fixed-point value.
    #[inline]
    pub fn read_fixed16(&mut self) -> Result<f32, StreamError> {
        Ok(self.read_i32()? as f32 / 65536.0)
    }

    /// Read a little-endian IEEE-754 single-precision value.
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32, StreamError> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Read a double-precision value in SWF's word-swapped layout.
    ///
    /// SWF stores the high 32-bit half of the IEEE-754 representation
    /// first, then the low half, each half little-endian. The swap is a
    /// format contract, not a bug; existing assets depend on it.
    pub fn read_f64(&mut self) -> Result<f64, StreamError> {
        let raw = self.take(8)?;
        let mut bytes = [0u8; 8];
        bytes[..4].copy_from_slice(&raw[4..]);
        bytes[4..].copy_from_slice(&raw[..4]);
        Ok(f64::from_le_bytes(bytes))
    }

    /// Read an SWF EncodedU32 varint.
    ///
    /// Each byte contributes its low 7 bits, least significant first;
    /// reading continues while the high bit is set, but stops after 5 bytes
    /// regardless, returning the accumulated value. The cap bounds the scan
    /// on corrupt input; it is not an error.
    pub fn read_encoded_u32(&mut self) -> Result<u32, StreamError> {
        self.bits.reset();
        let data = self.data.as_ref();
        let mut value = 0u32;
        let mut used = 0;
        for i in 0..5 {
            let Some(&byte) = data.get(self.pos + i) else {
                return Err(StreamError::UnexpectedEof {
                    pos: self.pos + i,
                    requested: 1,
                });
            };
            used = i + 1;
            value |= u32::from(byte & 0x7f) << (7 * i);
            if byte & 0x80 == 0 {
                break;
            }
        }
        self.pos += used;
        Ok(value)
    }

    /// Read a null-terminated byte string, without the terminator.
    ///
    /// The cursor lands one past the terminator. Use
    /// [`read_str`](Self::read_str) when the bytes are known to be UTF-8.
    pub fn read_bytes_nul(&mut self) -> Result<&[u8], StreamError> {
        self.bits.reset();
        let start = self.pos;
        let nul = self.data.as_ref()[start..]
            .iter()
            .position(|&b| b == 0)
            .ok_or(StreamError::UnterminatedString { pos: start })?;
        self.pos = start + nul + 1;
        Ok(&self.data.as_ref()[start..start + nul])
    }

    /// Read a null-terminated UTF-8 string, without the terminator.
    pub fn read_str(&mut self) -> Result<&str, StreamError> {
        let start = self.pos;
        let bytes = self.read_bytes_nul()?;
        core::str::from_utf8(bytes).map_err(|_| StreamError::InvalidUtf8 { pos: start })
    }
}

impl<'a> BitStream<&'a [u8]> {
    /// Create a borrowing [`BitStream`] over a slice.
    ///
    /// Equivalent to [`BitStream::new`]; spelled out for symmetry with
    /// [`BitStream::from_copy`].
    #[must_use]
    pub fn from_slice(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

#[cfg(feature = "alloc")]
impl BitStream<Box<[u8]>> {
    /// Create an owning [`BitStream`] over a private copy of `data`.
    ///
    /// The copy is released when the reader is dropped; the caller's buffer
    /// can go away immediately.
    #[must_use]
    pub fn from_copy(data: &[u8]) -> Self {
        Self::new(data.into())
    }
}
