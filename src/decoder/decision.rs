//! Correction decision: whether to flip a bit, and which one

use crate::bits::{bits_to_index, BitsRef};
use crate::resolver::ResolvedCode;

/// Result of interpreting a syndrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectionDecision {
    /// A detected error may be repaired
    pub correctable: bool,
    /// 1-based position of the faulty bit in the non-systematic codeword.
    /// Only meaningful when `correctable` and the syndrome is nonzero.
    pub fault_bit_index: usize,
}

/// Interpret `syndrome` for the configured code.
///
/// Without an extra parity bit the syndrome is the fault position. With one,
/// the top bit is the overall parity check:
///
/// | top | rest     | meaning                         |
/// |-----|----------|---------------------------------|
/// | 0   | any      | even number of flips, not fixed |
/// | 1   | zero     | the extra parity bit itself     |
/// | 1   | nonzero  | flip at position `rest`         |
///
/// Correction is always refused when disabled in the configuration.
pub fn decide(code: &ResolvedCode, syndrome: &BitsRef) -> CorrectionDecision {
    let decision = if code.config().extra_parity_bit {
        let parity_bits = code.parity_bits();
        let overall = syndrome[parity_bits];
        let rest = &syndrome[..parity_bits];

        if !overall {
            CorrectionDecision {
                correctable: false,
                fault_bit_index: bits_to_index(rest),
            }
        } else if rest.not_any() {
            CorrectionDecision {
                correctable: true,
                fault_bit_index: code.total_width(),
            }
        } else {
            CorrectionDecision {
                correctable: true,
                fault_bit_index: bits_to_index(rest),
            }
        }
    } else {
        CorrectionDecision {
            correctable: true,
            fault_bit_index: bits_to_index(syndrome),
        }
    };

    CorrectionDecision {
        correctable: decision.correctable && code.config().correction_enabled,
        ..decision
    }
}
