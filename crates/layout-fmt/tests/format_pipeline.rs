// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: the full transcoding surface across all layout
//! families, exercising the properties the engine relies on — pure
//! deterministic addressing, padding (never compaction), and hard
//! rejection of undersized sources.

use layout_core::{Element, HALF_STRIDE, STRIDE};
use layout_fmt::{
    BatchNormLayout, BiasLayout, ConvFcWeightLayout, FcWeightLayout, FeatureMapLayout,
    FormatError, KernelWeightLayout, Transcoder,
};

/// A deterministic non-zero fill so zero always means "never written".
fn counting(len: usize) -> Vec<u32> {
    (0..len as u32).map(|v| v + 1).collect()
}

// ── Determinism ────────────────────────────────────────────────

#[test]
fn test_format_is_deterministic() {
    let w = KernelWeightLayout::new(3, 16, 4).unwrap();
    let src = counting(4 * 16 * 9);
    assert_eq!(w.format(&src).unwrap(), w.format(&src).unwrap());

    let fms = FeatureMapLayout::new(5, 9, 7).unwrap();
    let src = counting(81 * 7);
    assert_eq!(fms.format(&src).unwrap(), fms.format(&src).unwrap());
}

#[test]
fn test_size_depends_on_shape_only() {
    for dim in [1, 3, 5, 7] {
        let a = KernelWeightLayout::new(dim, 24, 6).unwrap();
        let b = KernelWeightLayout::new(dim, 24, 6).unwrap();
        assert_eq!(a.dest_len(), b.dest_len());
        assert!(a.dest_len() >= a.src_len().elements());
    }
}

// ── Padding, not compaction ────────────────────────────────────

#[test]
fn test_destination_never_smaller_than_source() {
    let w = KernelWeightLayout::new(3, 64, 3).unwrap();
    assert!(w.dest_len() >= 3 * 64 * 9);

    let c = ConvFcWeightLayout::new(512, 2);
    assert!(c.dest_len() >= 512 * 2);

    let f = FcWeightLayout::new(512, 2);
    assert!(f.dest_len() >= 512 * 2);

    let b = BiasLayout::conv(8);
    assert!(b.dest_len() >= 8);

    let fms = FeatureMapLayout::new(3, 10, 54).unwrap();
    assert!(fms.dest_len() >= 100 * 54);
}

#[test]
fn test_unwritten_addresses_stay_zero() {
    // fc_fcw writes exactly inputs elements per cell; everything else
    // in the cell is pad.
    let f = FcWeightLayout::new(100, 3);
    let out = f.format(&counting(300)).unwrap();
    for cell in 0..3 {
        let base = f.cell_addr(cell);
        assert!(out[base..base + 100].iter().all(|&v| v != 0));
        assert!(out[base + 100..base + f.cell_len()].iter().all(|&v| v == 0));
    }
}

// ── conv_fcw broadcast ─────────────────────────────────────────

#[test]
fn test_conv_fcw_copies_are_identical() {
    let w = ConvFcWeightLayout::new(48, 2);
    let src = counting(96);
    let out = w.format(&src).unwrap();

    for cell in 0..2 {
        for group in 0..w.cell_n_groups() {
            let expected = &src[cell * 48 + group * HALF_STRIDE..][..HALF_STRIDE];
            let base = w.group_addr(cell, group);
            for copy in 0..w.group_copies() {
                let at = base + copy * STRIDE;
                assert_eq!(
                    &out[at..at + HALF_STRIDE],
                    expected,
                    "cell {cell} group {group} copy {copy}",
                );
            }
        }
    }
}

// ── Boundary failures ──────────────────────────────────────────

#[test]
fn test_short_sources_are_rejected_not_truncated() {
    let w = KernelWeightLayout::new(3, 64, 3).unwrap();
    assert!(matches!(
        w.format(&vec![0u32; 63]),
        Err(FormatError::InsufficientInput { .. }),
    ));

    let b = BiasLayout::conv(64);
    assert!(b.format(&vec![0u32; 63]).is_err());

    let bn = BatchNormLayout::fc(64);
    assert!(bn.format(&vec![0u32; 63], &vec![0u32; 64]).is_err());

    let fms = FeatureMapLayout::new(3, 10, 54).unwrap();
    assert!(matches!(
        fms.format(&vec![0u32; 100]),
        Err(FormatError::LengthMismatch { .. }),
    ));
}

// ── Cross-family: one small model end to end ───────────────────

#[test]
fn test_small_model_end_to_end() {
    // conv1: 3x3 kernels, 4 in, 2 out, plus bias and batch-norm; an fc
    // head; and the input activations.
    let conv = KernelWeightLayout::new(3, 4, 2).unwrap();
    let conv_out = conv.format(&counting(2 * 4 * 9)).unwrap();
    assert_eq!(conv_out.len(), conv.dest_len());

    let bias = BiasLayout::conv(2);
    let bias_out = bias.format(&counting(2)).unwrap();
    assert_eq!(bias_out.len(), STRIDE);

    let bn = BatchNormLayout::conv(2);
    let bn_out = bn.format(&counting(2), &counting(2)).unwrap();
    assert_eq!(bn_out[bn.weight_addr(0)], 1);
    assert_eq!(bn_out[bn.bias_addr(0)], 1);

    let fc = FcWeightLayout::new(32, 10);
    let fc_out = fc.format(&counting(320)).unwrap();
    assert_eq!(fc_out.len(), 480 * 10);

    let fc_bias = BiasLayout::fc(10);
    let fcb_out = fc_bias.format(&counting(10)).unwrap();
    assert_eq!(fcb_out[9 * STRIDE], 10);

    let fms = FeatureMapLayout::with_options(3, 8, 4, 1, true).unwrap();
    let maps_out = fms.format(&counting(64 * 4)).unwrap();
    assert_eq!(maps_out.len(), fms.dest_len());
    assert_eq!(
        maps_out.iter().filter(|&&v| v != 0).count(),
        64 * 4,
        "every activation lands exactly once",
    );
}

// ── Element genericity ─────────────────────────────────────────

#[test]
fn test_f32_blob_is_bit_exact_with_u32_view() {
    // The same bytes transcoded as f32 or as u32 produce the same bytes:
    // the address arithmetic never interprets values.
    let fms = FeatureMapLayout::new(3, 6, 3).unwrap();
    let ints: Vec<u32> = (0..36 * 3).map(|v| 0x3f80_0000 + v as u32).collect();
    let floats: Vec<f32> = bytemuck::cast_slice(&ints).to_vec();

    let out_i = fms.format(&ints).unwrap();
    let out_f = fms.format(&floats).unwrap();
    assert_eq!(bytemuck::cast_slice::<f32, u8>(&out_f), bytemuck::cast_slice::<u32, u8>(&out_i));
}

#[test]
fn test_element_labels() {
    assert_eq!(<u32 as Element>::type_name(), "u32");
    assert_eq!(<f32 as Element>::type_name(), "f32");
}
