//! Configuration resolver: derived dimensions and code matrices
//!
//! Everything here runs once, when a codec is built. The resulting
//! [`ResolvedCode`] is immutable and shared by the decoder and encoder.
//!
//! ## Layouts
//!
//! A codeword of `total_width` bits exists in two orderings:
//!
//! ```text
//! systematic:      [ data (k, zero padded) | parity (r) | extra (0/1) ]
//! non-systematic:  Hamming positions 1..=block_length, parity bits at
//!                  powers of two, extra parity bit last
//! ```
//!
//! In the non-systematic layout column `j` of the parity-check matrix is the
//! binary form of `j + 1`, so a single flipped bit produces a syndrome equal
//! to its 1-based position. The basis transform S is a permutation made of
//! disjoint swaps, hence its own inverse.

use crate::config::CodeConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::gf2::BitMatrix;
use log::debug;

/// Largest supported number of Hamming parity bits
pub const MAX_PARITY_BITS: usize = 10;

/// Largest supported block length (without the extra parity bit)
pub const MAX_BLOCK_LENGTH: usize = (1 << MAX_PARITY_BITS) - 1;

/// Number of parity bits protecting `width` data bits, not counting the
/// extra parity bit
pub fn parity_bit_count(width: usize, single_parity: bool) -> usize {
    if single_parity {
        return 1;
    }
    let mut parity_bits = 2;
    while parity_bits < usize::BITS as usize - 1
        && (1usize << parity_bits) - parity_bits - 1 < width
    {
        parity_bits += 1;
    }
    parity_bits
}

/// Block length before the extra parity bit: `width` rounded up to the
/// nearest valid block size for the variant
pub fn block_length(width: usize, single_parity: bool) -> usize {
    if single_parity {
        width + 1
    } else {
        (1usize << parity_bit_count(width, false)) - 1
    }
}

/// Non-systematic index of the parity bit checked by row `i`
fn parity_slots(width: usize, single_parity: bool) -> Vec<usize> {
    if single_parity {
        vec![width]
    } else {
        (0..parity_bit_count(width, false))
            .map(|i| (1usize << i) - 1)
            .collect()
    }
}

/// Parity-check matrix H over the non-systematic layout
pub fn parity_check_matrix(width: usize, extra_bit: bool, single_parity: bool) -> BitMatrix {
    let parity_bits = parity_bit_count(width, single_parity);
    let block = block_length(width, single_parity);
    let extra = usize::from(extra_bit);
    let total = block + extra;

    BitMatrix::from_fn(parity_bits + extra, total, |row, col| {
        if single_parity || row == parity_bits {
            // Overall parity row
            true
        } else {
            col < block && ((col + 1) >> row) & 1 == 1
        }
    })
}

/// Basis transform S mapping systematic to non-systematic (and back)
pub fn basis_transform_matrix(width: usize, extra_bit: bool, single_parity: bool) -> BitMatrix {
    let parity_bits = parity_bit_count(width, single_parity);
    let block = block_length(width, single_parity);
    let data_capacity = block - parity_bits;
    let total = block + usize::from(extra_bit);

    let slots = parity_slots(width, single_parity);
    let is_slot = |i: usize| slots.contains(&i);

    // Data slots in systematic order that hold parity in the Hamming order,
    // and vice versa. Pairing them in order gives disjoint swaps.
    let low: Vec<usize> = (0..data_capacity).filter(|&i| is_slot(i)).collect();
    let high: Vec<usize> = (data_capacity..block).filter(|&i| !is_slot(i)).collect();
    debug_assert_eq!(low.len(), high.len());

    let mut partner: Vec<usize> = (0..total).collect();
    for (&a, &b) in low.iter().zip(&high) {
        partner[a] = b;
        partner[b] = a;
    }

    BitMatrix::from_fn(total, total, |row, col| partner[row] == col)
}

/// Check that the parameters describe a supported code
pub fn validate(
    width: usize,
    extra_bit: bool,
    single_parity: bool,
    correction_enabled: bool,
) -> ConfigResult<()> {
    if width == 0 {
        return Err(ConfigError::ZeroWidth);
    }
    if single_parity && extra_bit {
        return Err(ConfigError::SingleParityWithExtraBit);
    }
    if single_parity && correction_enabled {
        return Err(ConfigError::SingleParityWithCorrection);
    }

    let max = if single_parity {
        MAX_BLOCK_LENGTH - 1
    } else {
        MAX_BLOCK_LENGTH - MAX_PARITY_BITS
    };
    if width > max {
        return Err(ConfigError::WidthTooLarge { width, max });
    }
    Ok(())
}

/// A validated configuration with its derived dimensions and matrices
#[derive(Debug, Clone)]
pub struct ResolvedCode {
    config: CodeConfig,
    parity_bits: usize,
    block_length: usize,
    parity_check: BitMatrix,
    basis_transform: BitMatrix,
    parity_slots: Vec<usize>,
}

impl ResolvedCode {
    /// Validate `config` and compute H and S
    pub fn resolve(config: CodeConfig) -> ConfigResult<Self> {
        config.validate()?;

        let width = config.message_width;
        let single = config.single_parity_variant;
        let extra = config.extra_parity_bit;

        let code = Self {
            config,
            parity_bits: parity_bit_count(width, single),
            block_length: block_length(width, single),
            parity_check: parity_check_matrix(width, extra, single),
            basis_transform: basis_transform_matrix(width, extra, single),
            parity_slots: parity_slots(width, single),
        };
        debug_assert!(code.basis_transform.is_involution());

        debug!(
            "Resolved code: message_width={} parity_bits={} extra={} block_length={} total_width={}",
            width,
            code.parity_bits,
            code.extra_bits(),
            code.block_length,
            code.total_width()
        );
        Ok(code)
    }

    #[inline]
    pub fn config(&self) -> &CodeConfig {
        &self.config
    }

    #[inline]
    pub fn message_width(&self) -> usize {
        self.config.message_width
    }

    /// Hamming parity bits, excluding the extra parity bit
    #[inline]
    pub fn parity_bits(&self) -> usize {
        self.parity_bits
    }

    #[inline]
    pub fn extra_bits(&self) -> usize {
        self.config.extra_bits()
    }

    /// Width of the parity port (and of the syndrome)
    #[inline]
    pub fn parity_width(&self) -> usize {
        self.parity_bits + self.extra_bits()
    }

    #[inline]
    pub fn block_length(&self) -> usize {
        self.block_length
    }

    #[inline]
    pub fn total_width(&self) -> usize {
        self.block_length + self.extra_bits()
    }

    /// Data bits in the systematic block, including zero padding
    #[inline]
    pub fn data_capacity(&self) -> usize {
        self.block_length - self.parity_bits
    }

    /// Parity-check matrix H
    #[inline]
    pub fn parity_check(&self) -> &BitMatrix {
        &self.parity_check
    }

    /// Basis transform S (self-inverse)
    #[inline]
    pub fn basis_transform(&self) -> &BitMatrix {
        &self.basis_transform
    }

    /// Non-systematic index of the parity bit checked by each Hamming row
    #[inline]
    pub fn parity_slots(&self) -> &[usize] {
        &self.parity_slots
    }
}
