/*
 * SPDX-FileCopyrightText: 2025 the swf-bitstream authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! A minimal MSB-first bit packer used to build test vectors.

// not every test binary uses every helper
#![allow(dead_code)]

pub struct BitPacker {
    out: Vec<u8>,
    used: u32,
}

impl BitPacker {
    pub fn new() -> Self {
        Self {
            out: Vec::new(),
            used: 0,
        }
    }

    /// Append the low `n` bits of `value`, most significant first.
    pub fn ubits(&mut self, value: u32, n: u32) -> &mut Self {
        assert!(n <= 32);
        for i in (0..n).rev() {
            let bit = (value >> i) & 1;
            if self.used == 0 {
                self.out.push(0);
            }
            *self.out.last_mut().unwrap() |= (bit as u8) << (7 - self.used);
            self.used = (self.used + 1) % 8;
        }
        self
    }

    /// Append `value` as an `n`-bit two's-complement field.
    pub fn sbits(&mut self, value: i32, n: u32) -> &mut Self {
        let mask = if n == 32 { u32::MAX } else { (1u32 << n) - 1 };
        self.ubits(value as u32 & mask, n)
    }

    pub fn flag(&mut self, value: bool) -> &mut Self {
        self.ubits(u32::from(value), 1)
    }

    /// Pad with zero bits to the next byte boundary.
    pub fn align(&mut self) -> &mut Self {
        self.used = 0;
        self
    }

    /// Append a whole byte, padding to a byte boundary first.
    pub fn byte(&mut self, value: u8) -> &mut Self {
        self.align();
        self.out.push(value);
        self
    }

    /// Append whole bytes, padding to a byte boundary first.
    pub fn bytes(&mut self, data: &[u8]) -> &mut Self {
        self.align();
        self.out.extend_from_slice(data);
        self
    }

    pub fn finish(&self) -> Vec<u8> {
        self.out.clone()
    }
}
