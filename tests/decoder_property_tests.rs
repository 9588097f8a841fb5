//! Property-based tests for the decoder
//!
//! Random widths, data words and flip positions, for every combination of
//! the extra parity bit and correction setting.

use hammingrs::bits::{bits_from_u64, Bits};
use hammingrs::{CodeConfig, DecodeOutcome, Decoder};
use proptest::prelude::*;

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

fn setup(width: usize, secded: bool, value: u64) -> (Decoder, Bits, Bits) {
    let decoder = Decoder::new(CodeConfig::new(width).with_extra_parity_bit(secded)).unwrap();
    let data = bits_from_u64(value, width);
    let parity = decoder.encoder().encode(&data).unwrap();
    (decoder, data, parity)
}

proptest! {
    /// Property: encoded words decode cleanly
    #[test]
    fn prop_clean_roundtrip(width in 1usize..=64, secded: bool, value: u64) {
        let (decoder, data, parity) = setup(width, secded, value);
        let result = decoder.decode(&data, &parity).unwrap();
        prop_assert_eq!(result.data, data);
        prop_assert!(result.valid);
        prop_assert_eq!(result.outcome, DecodeOutcome::Clean);
    }

    /// Property: any single flip is corrected
    #[test]
    fn prop_single_flip_corrected(
        width in 1usize..=64,
        secded: bool,
        value: u64,
        seed in any::<prop::sample::Index>(),
    ) {
        let (decoder, data, parity) = setup(width, secded, value);
        let position = seed.index(width + parity.len());
        let (mut d, mut p) = (data.clone(), parity);
        flip(&mut d, &mut p, position);

        let result = decoder.decode(&d, &p).unwrap();
        prop_assert_eq!(result.data, data);
        prop_assert!(result.valid);
    }

    /// Property: any double flip is flagged when an extra parity bit is present
    #[test]
    fn prop_double_flip_detected(
        width in 1usize..=64,
        value: u64,
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let (decoder, data, parity) = setup(width, true, value);
        let transmitted = width + parity.len();
        let p = a.index(transmitted);
        let q = b.index(transmitted);
        prop_assume!(p != q);

        let (mut d, mut par) = (data, parity);
        flip(&mut d, &mut par, p);
        flip(&mut d, &mut par, q);
        let result = decoder.decode(&d, &par).unwrap();
        prop_assert!(!result.valid);
        prop_assert_eq!(result.data, d);
    }

    /// Property: with correction disabled the data is never modified
    #[test]
    fn prop_detection_only_is_passthrough(
        width in 1usize..=64,
        secded: bool,
        value: u64,
        flips in prop::collection::btree_set(0usize..200, 1..3),
    ) {
        let decoder = Decoder::new(
            CodeConfig::new(width)
                .with_extra_parity_bit(secded)
                .with_correction(false),
        )
        .unwrap();
        let data = bits_from_u64(value, width);
        let parity = decoder.encoder().encode(&data).unwrap();
        let transmitted = width + parity.len();

        let (mut d, mut p) = (data, parity);
        let mut applied = std::collections::BTreeSet::new();
        for position in flips {
            applied.insert(position % transmitted);
        }
        for &position in &applied {
            flip(&mut d, &mut p, position);
        }

        let result = decoder.decode(&d, &p).unwrap();
        prop_assert_eq!(&result.data, &d);
        prop_assert!(!result.valid);
    }
}
