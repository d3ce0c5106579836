// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for layout transcoding throughput.

use criterion::{criterion_group, criterion_main, Criterion};
use layout_fmt::{FeatureMapLayout, KernelWeightLayout, Transcoder};

fn bench_kernel_weights(c: &mut Criterion) {
    let layout = KernelWeightLayout::new(3, 64, 64).unwrap();
    let src: Vec<u32> = (0..64 * 64 * 9).map(|v| v as u32).collect();

    c.bench_function("weight 3x3 64x64", |b| {
        b.iter(|| layout.format(std::hint::black_box(&src)).unwrap())
    });
}

fn bench_feature_maps(c: &mut Criterion) {
    let layout = FeatureMapLayout::new(3, 28, 50).unwrap();
    let src: Vec<u32> = (0..28 * 28 * 50).map(|v| v as u32).collect();

    c.bench_function("feature_maps 28x28 x50", |b| {
        b.iter(|| layout.format(std::hint::black_box(&src)).unwrap())
    });
}

criterion_group!(benches, bench_kernel_weights, bench_feature_maps);
criterion_main!(benches);
