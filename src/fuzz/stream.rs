/*
 * SPDX-FileCopyrightText: 2025 the swf-bitstream authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    data: Vec<u8>,
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug, Clone)]
enum RandomCommand {
    UBits(u8),
    SBits(u8),
    Bool,
    Align,
    U8,
    U16,
    U32,
    I16,
    I32,
    Fixed8,
    Fixed16,
    F32,
    F64,
    EncodedU32,
    Str,
    BytesNul,
    Slice(u8),
    Seek(i16),
    SeekTo(u16),
    Rewind,
    Rect,
    Matrix,
    ColorXform(bool),
    Rgb,
    Rgba,
    Gradient(bool),
    MorphGradient,
}

/// Run an arbitrary command sequence over an arbitrary buffer.
///
/// Checks that no command panics or reads past the buffer, that the cursor
/// stays within bounds, and that failed reads leave the byte cursor where it
/// was.
pub fn harness(case: FuzzCase) {
    let len = case.data.len();
    let mut stream = BitStream::new(case.data.as_slice());
    for command in &case.commands {
        let before = stream.tell();
        let failed = match command {
            RandomCommand::UBits(n) => stream.read_ubits(u32::from(*n) % 33).is_err(),
            RandomCommand::SBits(n) => stream.read_sbits(u32::from(*n) % 33).is_err(),
            RandomCommand::Bool => stream.read_bool().is_err(),
            RandomCommand::Align => {
                stream.align();
                false
            }
            RandomCommand::U8 => stream.read_u8().is_err(),
            RandomCommand::U16 => stream.read_u16().is_err(),
            RandomCommand::U32 => stream.read_u32().is_err(),
            RandomCommand::I16 => stream.read_i16().is_err(),
            RandomCommand::I32 => stream.read_i32().is_err(),
            RandomCommand::Fixed8 => stream.read_fixed8().is_err(),
            RandomCommand::Fixed16 => stream.read_fixed16().is_err(),
            RandomCommand::F32 => stream.read_f32().is_err(),
            RandomCommand::F64 => stream.read_f64().is_err(),
            RandomCommand::EncodedU32 => stream.read_encoded_u32().is_err(),
            RandomCommand::Str => stream.read_str().is_err(),
            RandomCommand::BytesNul => stream.read_bytes_nul().is_err(),
            RandomCommand::Slice(n) => stream.read_slice(usize::from(*n)).is_err(),
            RandomCommand::Seek(offset) => stream.seek(i64::from(*offset)).is_err(),
            RandomCommand::SeekTo(pos) => stream.seek_to(usize::from(*pos)).is_err(),
            RandomCommand::Rewind => {
                stream.rewind();
                false
            }
            RandomCommand::Rect => stream.read_rect().is_err(),
            RandomCommand::Matrix => stream.read_matrix().is_err(),
            RandomCommand::ColorXform(with_alpha) => {
                stream.read_color_xform(*with_alpha).is_err()
            }
            RandomCommand::Rgb => stream.read_rgb().is_err(),
            RandomCommand::Rgba => stream.read_rgba().is_err(),
            RandomCommand::Gradient(rgba) => stream.read_gradient(*rgba).is_err(),
            RandomCommand::MorphGradient => stream.read_morph_gradient().is_err(),
        };
        assert!(stream.tell() <= len);
        // failed seeks and fixed-width reads must not move the byte cursor;
        // strings and composites may consume before hitting the end
        if failed {
            match command {
                RandomCommand::UBits(_)
                | RandomCommand::SBits(_)
                | RandomCommand::Bool
                | RandomCommand::U8
                | RandomCommand::U16
                | RandomCommand::U32
                | RandomCommand::I16
                | RandomCommand::I32
                | RandomCommand::Fixed8
                | RandomCommand::Fixed16
                | RandomCommand::F32
                | RandomCommand::F64
                | RandomCommand::Slice(_)
                | RandomCommand::Seek(_)
                | RandomCommand::SeekTo(_) => assert_eq!(stream.tell(), before),
                _ => {}
            }
        }
    }
}
