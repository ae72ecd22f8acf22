/*
 * SPDX-FileCopyrightText: 2025 the swf-bitstream authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The MATRIX record: a 2D affine transform with optional parts.

use crate::error::StreamError;
use crate::records::fixed16;
use crate::stream::BitStream;

/// A 2D affine transform.
///
/// Scale and rotate/skew terms are 16.16 fixed point in the stream;
/// translation is in raw twips. Omitted parts decode to the identity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemDbg, mem_dbg::MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    pub scale_x: f32,
    pub scale_y: f32,
    pub rotate_skew0: f32,
    pub rotate_skew1: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        scale_x: 1.0,
        scale_y: 1.0,
        rotate_skew0: 0.0,
        rotate_skew1: 0.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<B: AsRef<[u8]>> BitStream<B> {
    /// Read a MATRIX record.
    ///
    /// Layout: a has-scale flag and, if set, a 5-bit width followed by two
    /// 16.16 scale fields of that width; a has-rotate flag and, if set, a
    /// 5-bit width followed by two 16.16 rotate/skew fields; then an
    /// unconditional 5-bit width followed by the two signed translation
    /// fields. The cursor is byte-aligned on return.
    pub fn read_matrix(&mut self) -> Result<Matrix, StreamError> {
        self.align();
        let mut matrix = Matrix::IDENTITY;
        if self.read_bool()? {
            let nbits = self.read_ubits(5)?;
            matrix.scale_x = fixed16(self.read_sbits(nbits)?);
            matrix.scale_y = fixed16(self.read_sbits(nbits)?);
        }
        if self.read_bool()? {
            let nbits = self.read_ubits(5)?;
            matrix.rotate_skew0 = fixed16(self.read_sbits(nbits)?);
            matrix.rotate_skew1 = fixed16(self.read_sbits(nbits)?);
        }
        let nbits = self.read_ubits(5)?;
        matrix.translate_x = self.read_sbits(nbits)? as f32;
        matrix.translate_y = self.read_sbits(nbits)? as f32;
        self.align();
        Ok(matrix)
    }
}
