/*
 * SPDX-FileCopyrightText: 2025 the swf-bitstream authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The RECT record: a bounding box with a self-describing field width.

use crate::error::StreamError;
use crate::stream::BitStream;

/// A rectangle in twips, exactly as stored in the stream.
///
/// The field values are returned untranslated; scaling to pixels (20 twips
/// per pixel) is the caller's business.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemDbg, mem_dbg::MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Rect {
    /// Width of the rectangle in twips.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    /// Height of the rectangle in twips.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }
}

impl<B: AsRef<[u8]>> BitStream<B> {
    /// Read a RECT record: a 5-bit unsigned field width, then xMin, xMax,
    /// yMin, yMax as signed fields of that width.
    ///
    /// The cursor is byte-aligned on return.
    pub fn read_rect(&mut self) -> Result<Rect, StreamError> {
        self.align();
        let nbits = self.read_ubits(5)?;
        let rect = Rect {
            x_min: self.read_sbits(nbits)?,
            x_max: self.read_sbits(nbits)?,
            y_min: self.read_sbits(nbits)?,
            y_max: self.read_sbits(nbits)?,
        };
        self.align();
        Ok(rect)
    }
}
