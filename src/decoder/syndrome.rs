//! Syndrome engine
//!
//! The syndrome and the non-systematic codeword it was computed from travel
//! together as a [`SyndromeStage`]. In registered mode the decoder holds one
//! stage between clock steps so the pair always stays consistent.

use super::assembler::assemble;
use super::transform::to_non_systematic;
use crate::bits::{Bits, BitsRef};
use crate::resolver::ResolvedCode;

/// `H · codeword` over GF(2)
#[inline]
pub fn compute_syndrome(code: &ResolvedCode, non_systematic: &BitsRef) -> Bits {
    code.parity_check().mul_vec(non_systematic)
}

/// Output of the front half of the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyndromeStage {
    /// Received codeword in the non-systematic layout
    pub codeword: Bits,
    /// Parity checks of `codeword`, extra parity check in the top bit
    pub syndrome: Bits,
}

impl SyndromeStage {
    /// Run assembly, basis transform and syndrome computation for one word
    pub fn compute(code: &ResolvedCode, data: &BitsRef, parity: &BitsRef) -> Self {
        let systematic = assemble(code, data, parity);
        let codeword = to_non_systematic(code, &systematic);
        let syndrome = compute_syndrome(code, &codeword);
        Self { codeword, syndrome }
    }

    /// Any parity check failed
    #[inline]
    pub fn has_error(&self) -> bool {
        self.syndrome.any()
    }
}
