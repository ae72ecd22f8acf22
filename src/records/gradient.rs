/*
 * SPDX-FileCopyrightText: 2025 the swf-bitstream authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! GRADIENT and MORPHGRADIENT records.

use alloc::vec::Vec;

use crate::error::StreamError;
use crate::records::color::Rgba;
use crate::stream::BitStream;

/// One gradient stop.
///
/// Plain gradients carry a single ratio and color per stop, duplicated into
/// the start and end fields; morph gradients carry independent start and end
/// pairs describing the animation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemDbg, mem_dbg::MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientRecord {
    pub start_ratio: u8,
    pub end_ratio: u8,
    pub start_color: Rgba,
    pub end_color: Rgba,
}

/// An ordered sequence of gradient stops, at most 15 of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemDbg, mem_dbg::MemSize))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gradient {
    pub records: Vec<GradientRecord>,
}

impl Gradient {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<B: AsRef<[u8]>> BitStream<B> {
    /// Read a GRADIENT record: a count byte, then a ratio byte and a color
    /// per stop. `rgba` selects four-byte colors over three-byte ones and
    /// must match the enclosing tag.
    ///
    /// The count byte is masked to 15; its upper bits carry spread and
    /// interpolation modes, which this decoder ignores.
    pub fn read_gradient(&mut self, rgba: bool) -> Result<Gradient, StreamError> {
        let count = usize::from(self.read_u8()? & 15);
        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            let ratio = self.read_u8()?;
            let color = if rgba {
                self.read_rgba()?
            } else {
                self.read_rgb()?
            };
            records.push(GradientRecord {
                start_ratio: ratio,
                end_ratio: ratio,
                start_color: color,
                end_color: color,
            });
        }
        Ok(Gradient { records })
    }

    /// Read a MORPHGRADIENT record: a count byte, then per stop an
    /// interleaved start ratio, start RGBA, end ratio, end RGBA.
    pub fn read_morph_gradient(&mut self) -> Result<Gradient, StreamError> {
        let count = usize::from(self.read_u8()? & 15);
        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            records.push(GradientRecord {
                start_ratio: self.read_u8()?,
                start_color: self.read_rgba()?,
                end_ratio: self.read_u8()?,
                end_color: self.read_rgba()?,
            });
        }
        Ok(Gradient { records })
    }
}
