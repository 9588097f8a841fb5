//! Parity generation for a resolved code
//!
//! The encoder works in the same two layouts as the decoder: data is placed
//! in the systematic layout, moved to the non-systematic layout where each
//! Hamming parity bit sits on a column that is a unit vector of H, fixed up
//! there, and moved back.

use crate::bits::{Bits, BitsRef};
use crate::config::CodeConfig;
use crate::decoder::assembler::assemble;
use crate::decoder::transform::{to_non_systematic, to_systematic};
use crate::error::{ConfigResult, DecodeError, HammingResult};
use crate::resolver::ResolvedCode;
use std::sync::Arc;

/// Computes the parity port value for a data word
#[derive(Debug, Clone)]
pub struct Encoder {
    code: Arc<ResolvedCode>,
}

impl Encoder {
    pub fn new(config: CodeConfig) -> ConfigResult<Self> {
        Ok(Self::from_code(Arc::new(ResolvedCode::resolve(config)?)))
    }

    pub fn from_code(code: Arc<ResolvedCode>) -> Self {
        Self { code }
    }

    #[inline]
    pub fn code(&self) -> &ResolvedCode {
        &self.code
    }

    /// Parity bits (Hamming parity, then the extra parity bit) for `data`
    pub fn encode(&self, data: &BitsRef) -> HammingResult<Bits> {
        let code = &*self.code;
        if data.len() != code.message_width() {
            return Err(DecodeError::PortWidth {
                port: "data",
                expected: code.message_width(),
                actual: data.len(),
            });
        }

        let parity_width = code.parity_width();
        let systematic = assemble(code, data, &crate::bits::zeros(parity_width));
        let mut codeword = to_non_systematic(code, &systematic);

        // Parity slots are still zero, so each Hamming row sees only data
        let h = code.parity_check();
        for (row, &slot) in code.parity_slots().iter().enumerate() {
            let check = crate::gf2::dot(h.row(row), &codeword);
            codeword.set(slot, check);
        }

        if code.config().extra_parity_bit {
            let block = code.block_length();
            let overall = codeword[..block].count_ones() % 2 == 1;
            codeword.set(block, overall);
        }

        let systematic = to_systematic(code, &codeword);
        Ok(systematic[code.data_capacity()..].to_bitvec())
    }
}
