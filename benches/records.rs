/*
 * SPDX-FileCopyrightText: 2025 the swf-bitstream authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use swf_bitstream::prelude::*;

// an 8-bit-wide RECT {-10, 20, -5, 15}, 5 bytes once padded
const RECT: [u8; 5] = [0x47, 0xB0, 0xA7, 0xD8, 0x78];

pub fn bench_rect(c: &mut Criterion) {
    let mut data = Vec::new();
    for _ in 0..10_000 {
        data.extend_from_slice(&RECT);
    }
    c.bench_function("read_rect", |b| {
        b.iter(|| {
            let mut stream = BitStream::new(data.as_slice());
            while stream.remaining() > 0 {
                black_box(stream.read_rect().unwrap());
            }
        })
    });
}

pub fn bench_encoded_u32(c: &mut Criterion) {
    let mut data = Vec::new();
    for i in 0..10_000u32 {
        let mut value = i.wrapping_mul(2_654_435_761);
        loop {
            let byte = (value & 0x7f) as u8;
            value >>= 7;
            if value == 0 {
                data.push(byte);
                break;
            }
            data.push(byte | 0x80);
        }
    }
    c.bench_function("read_encoded_u32", |b| {
        b.iter(|| {
            let mut stream = BitStream::new(data.as_slice());
            while stream.remaining() > 0 {
                black_box(stream.read_encoded_u32().unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_rect, bench_encoded_u32);
criterion_main!(benches);
