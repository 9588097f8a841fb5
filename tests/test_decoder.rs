//! End-to-end decoder behaviour over every transmitted bit position
//!
//! Words are produced with the crate's encoder, damaged on the data and
//! parity ports, and decoded combinationally.

use hammingrs::bits::{bits_from_u64, Bits};
use hammingrs::{format_bits, parse_bits, CodeConfig, DecodeOutcome, Decoder};

/// Flip the transmitted bit at `position`: data bits first, then parity
fn flip(data: &mut Bits, parity: &mut Bits, position: usize) {
    if position < data.len() {
        let bit = !data[position];
        data.set(position, bit);
    } else {
        let index = position - data.len();
        let bit = !parity[index];
        parity.set(index, bit);
    }
}

/// A spread of data words for `width` bits
fn sample_words(width: usize) -> Vec<Bits> {
    let mask = if width >= 64 { u64::MAX } else { (1u64 << width) - 1 };
    [0u64, u64::MAX, 0x5555_5555_5555_5555, 0xA5C3_0F96_1234_8765, 1, 1 << (width - 1)]
        .iter()
        .map(|&value| bits_from_u64(value & mask, width))
        .collect()
}

fn configs(width: usize) -> Vec<CodeConfig> {
    vec![CodeConfig::new(width), CodeConfig::secded(width)]
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_width_5_sec_scenario() {
    let decoder = Decoder::new(CodeConfig::new(5)).unwrap();
    let data = parse_bits("10110").unwrap();
    let parity = decoder.encoder().encode(&data).unwrap();
    assert_eq!(format_bits(&parity), "1011");

    let result = decoder.decode(&data, &parity).unwrap();
    assert_eq!(format_bits(&result.data), "10110");
    assert!(result.valid);

    for position in 0..9 {
        let (mut d, mut p) = (data.clone(), parity.clone());
        flip(&mut d, &mut p, position);
        let result = decoder.decode(&d, &p).unwrap();
        assert_eq!(format_bits(&result.data), "10110", "flip {}", position);
        assert!(result.valid);
    }
}

#[test]
fn test_width_5_secded_double_flip_scenario() {
    let decoder = Decoder::new(CodeConfig::secded(5)).unwrap();
    let data = parse_bits("10110").unwrap();
    let mut parity = decoder.encoder().encode(&data).unwrap();
    assert_eq!(format_bits(&parity), "01011");

    let mut damaged = data.clone();
    flip(&mut damaged, &mut parity, 0);
    flip(&mut damaged, &mut parity, 7);
    let result = decoder.decode(&damaged, &parity).unwrap();
    assert!(!result.valid);
    assert_eq!(result.outcome, DecodeOutcome::Uncorrectable);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_clean_words_decode_unchanged() {
    for width in 1..=40 {
        for config in configs(width) {
            let decoder = Decoder::new(config).unwrap();
            let encoder = decoder.encoder();
            for data in sample_words(width) {
                let parity = encoder.encode(&data).unwrap();
                let result = decoder.decode(&data, &parity).unwrap();
                assert_eq!(result.data, data);
                assert!(result.valid);
                assert_eq!(result.outcome, DecodeOutcome::Clean);
            }
        }
    }
}

#[test]
fn test_every_single_flip_is_corrected() {
    for width in 1..=40 {
        for config in configs(width) {
            let decoder = Decoder::new(config).unwrap();
            let encoder = decoder.encoder();
            let transmitted = width + decoder.code().parity_width();
            for data in sample_words(width) {
                let parity = encoder.encode(&data).unwrap();
                for position in 0..transmitted {
                    let (mut d, mut p) = (data.clone(), parity.clone());
                    flip(&mut d, &mut p, position);
                    let result = decoder.decode(&d, &p).unwrap();
                    assert_eq!(result.data, data, "{:?} flip {}", config, position);
                    assert!(result.valid);
                    assert!(matches!(result.outcome, DecodeOutcome::Corrected { .. }));
                }
            }
        }
    }
}

#[test]
fn test_every_double_flip_is_detected_with_secded() {
    for width in [1, 2, 4, 5, 8, 11, 12, 16, 26] {
        let decoder = Decoder::new(CodeConfig::secded(width)).unwrap();
        let encoder = decoder.encoder();
        let transmitted = width + decoder.code().parity_width();
        for data in sample_words(width) {
            let parity = encoder.encode(&data).unwrap();
            for p in 0..transmitted {
                for q in (p + 1)..transmitted {
                    let (mut d, mut par) = (data.clone(), parity.clone());
                    flip(&mut d, &mut par, p);
                    flip(&mut d, &mut par, q);
                    let result = decoder.decode(&d, &par).unwrap();
                    assert!(!result.valid, "width {} flips {} {}", width, p, q);
                    assert_eq!(result.outcome, DecodeOutcome::Uncorrectable);
                    // Nothing is flipped, so the raw data comes back
                    assert_eq!(result.data, d);
                }
            }
        }
    }
}

#[test]
fn test_disabled_correction_passes_raw_data() {
    for width in [1, 3, 4, 8, 13, 32] {
        for config in configs(width) {
            let decoder = Decoder::new(config.with_correction(false)).unwrap();
            let encoder = decoder.encoder();
            let transmitted = width + decoder.code().parity_width();
            let data = sample_words(width).remove(3);
            let parity = encoder.encode(&data).unwrap();

            for p in 0..transmitted {
                let (mut d, mut par) = (data.clone(), parity.clone());
                flip(&mut d, &mut par, p);
                let result = decoder.decode(&d, &par).unwrap();
                assert!(!result.valid);
                assert_eq!(result.data, d);

                for q in (p + 1)..transmitted {
                    let (mut d2, mut par2) = (d.clone(), par.clone());
                    flip(&mut d2, &mut par2, q);
                    let result = decoder.decode(&d2, &par2).unwrap();
                    assert!(!result.valid, "{:?} flips {} {}", config, p, q);
                    assert_eq!(result.data, d2);
                }
            }
        }
    }
}

#[test]
fn test_extra_parity_bit_flip_is_corrected() {
    let decoder = Decoder::new(CodeConfig::secded(8)).unwrap();
    let data = parse_bits("11001010").unwrap();
    let mut parity = decoder.encoder().encode(&data).unwrap();
    let top = parity.len() - 1;
    let bit = !parity[top];
    parity.set(top, bit);

    let result = decoder.decode(&data, &parity).unwrap();
    assert!(result.valid);
    assert_eq!(result.data, data);
    assert_eq!(
        result.outcome,
        DecodeOutcome::Corrected {
            bit: decoder.code().total_width() - 1
        }
    );
}

#[test]
fn test_single_parity_variant_detects_odd_flips() {
    let decoder = Decoder::new(CodeConfig::single_parity(9)).unwrap();
    let data = parse_bits("101100111").unwrap();
    let parity = decoder.encoder().encode(&data).unwrap();
    assert_eq!(parity.len(), 1);
    assert!(decoder.decode(&data, &parity).unwrap().valid);

    for position in 0..10 {
        let (mut d, mut p) = (data.clone(), parity.clone());
        flip(&mut d, &mut p, position);
        let result = decoder.decode(&d, &p).unwrap();
        assert!(!result.valid);
        assert_eq!(result.data, d);
    }
}

#[test]
fn test_wide_words() {
    let decoder = Decoder::new(CodeConfig::secded(200)).unwrap();
    let mut data = hammingrs::bits::zeros(200);
    for i in (0..200).step_by(3) {
        data.set(i, true);
    }
    let parity = decoder.encoder().encode(&data).unwrap();
    assert_eq!(parity.len(), 9);

    for position in [0, 63, 64, 127, 199, 200, 208] {
        let (mut d, mut p) = (data.clone(), parity.clone());
        flip(&mut d, &mut p, position);
        let result = decoder.decode(&d, &p).unwrap();
        assert!(result.valid);
        assert_eq!(result.data, data);
    }
}

#[test]
fn test_batch_decode_preserves_order() {
    let decoder = Decoder::new(CodeConfig::secded(16)).unwrap();
    let encoder = decoder.encoder();
    let words: Vec<(Bits, Bits)> = (0..64u64)
        .map(|i| {
            let data = bits_from_u64(i * 977, 16);
            let mut parity = encoder.encode(&data).unwrap();
            if i % 5 == 0 {
                let bit = !parity[0];
                parity.set(0, bit);
            }
            (data, parity)
        })
        .collect();

    let results = decoder.decode_batch(&words).unwrap();
    assert_eq!(results.len(), words.len());
    for ((data, _), result) in words.iter().zip(&results) {
        assert_eq!(&result.data, data);
        assert!(result.valid);
    }
}
