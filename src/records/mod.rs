/*
 * SPDX-FileCopyrightText: 2025 the swf-bitstream authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Compound records decoded from SWF tag bodies.
//!
//! Each record is plain data: the decoders on
//! [`BitStream`](crate::stream::BitStream) hold no state of their own, they
//! are fixed sequences of primitive reads. Several records open with a short
//! unsigned field giving the width of the signed fields that follow, because
//! SWF authoring tools shrink field widths to save space.
//!
//! Field order within a record is an exact-format contract: the cursor is
//! shared mutable state, so reading fields out of order mis-decodes
//! everything after them.

pub mod color;
#[cfg(feature = "alloc")]
pub mod gradient;
pub mod matrix;
pub mod rect;

pub use color::{ColorXform, Rgba};
#[cfg(feature = "alloc")]
pub use gradient::{Gradient, GradientRecord};
pub use matrix::Matrix;
pub use rect::Rect;

/// 16.16 fixed point to float.
#[inline(always)]
pub(crate) fn fixed16(value: i32) -> f32 {
    value as f32 / 65536.0
}

/// 8.8 fixed point to float.
#[inline(always)]
pub(crate) fn fixed8(value: i32) -> f32 {
    value as f32 / 256.0
}
