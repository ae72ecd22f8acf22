/*
 * SPDX-FileCopyrightText: 2025 the swf-bitstream authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! RGB/RGBA colors and the CXFORM color transform.

use crate::error::StreamError;
use crate::records::fixed8;
use crate::stream::BitStream;

/// A color as stored in the stream, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemDbg, mem_dbg::MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

/// A color transform: per-channel multiply and add terms in R, G, B, A
/// order, decoded from 8.8 fixed point.
///
/// Channels the stream omits keep the identity: multiplier 1.0, addend 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemDbg, mem_dbg::MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorXform {
    pub mul: [f32; 4],
    pub add: [f32; 4],
}

impl ColorXform {
    pub const IDENTITY: ColorXform = ColorXform {
        mul: [1.0; 4],
        add: [0.0; 4],
    };
}

impl Default for ColorXform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<B: AsRef<[u8]>> BitStream<B> {
    /// Read three raw bytes as an opaque color, R, G, B order.
    pub fn read_rgb(&mut self) -> Result<Rgba, StreamError> {
        let b = self.read_slice(3)?;
        Ok(Rgba {
            r: b[0],
            g: b[1],
            b: b[2],
            a: 255,
        })
    }

    /// Read four raw bytes as a color, R, G, B, A order.
    pub fn read_rgba(&mut self) -> Result<Rgba, StreamError> {
        let b = self.read_slice(4)?;
        Ok(Rgba {
            r: b[0],
            g: b[1],
            b: b[2],
            a: b[3],
        })
    }

    /// Read a CXFORM record.
    ///
    /// Layout: a has-add flag, a has-mult flag, a shared 4-bit field width;
    /// then the multiply terms if present, then the add terms if present,
    /// each an 8.8 fixed-point field per channel. `with_alpha` selects
    /// between the three-channel CXFORM and the four-channel
    /// CXFORMWITHALPHA encoding; it changes how many fields are read, so it
    /// must match the enclosing tag. The cursor is byte-aligned on return.
    pub fn read_color_xform(&mut self, with_alpha: bool) -> Result<ColorXform, StreamError> {
        self.align();
        let has_add = self.read_bool()?;
        let has_mult = self.read_bool()?;
        let nbits = self.read_ubits(4)?;
        let channels = if with_alpha { 4 } else { 3 };
        let mut xform = ColorXform::IDENTITY;
        if has_mult {
            for mul in xform.mul.iter_mut().take(channels) {
                *mul = fixed8(self.read_sbits(nbits)?);
            }
        }
        if has_add {
            for add in xform.add.iter_mut().take(channels) {
                *add = fixed8(self.read_sbits(nbits)?);
            }
        }
        self.align();
        Ok(xform)
    }
}
