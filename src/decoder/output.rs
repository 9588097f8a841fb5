//! Output stage: apply the correction and leave the non-systematic layout

use super::decision::CorrectionDecision;
use super::syndrome::SyndromeStage;
use super::transform::to_systematic;
use super::types::{DecodeOutcome, DecodeResult};
use crate::resolver::ResolvedCode;
use log::{debug, warn};

/// Produce the decoded data for one syndrome stage.
///
/// A bit is flipped only when the syndrome is nonzero and the decision
/// allows it. The validity flag drops exactly when an error was detected
/// and not corrected.
pub fn apply_correction(
    code: &ResolvedCode,
    stage: &SyndromeStage,
    decision: &CorrectionDecision,
) -> DecodeResult {
    let has_error = stage.has_error();
    let mut codeword = stage.codeword.clone();

    let outcome = if !has_error {
        DecodeOutcome::Clean
    } else if let Some(bit) = decision
        .fault_bit_index
        .checked_sub(1)
        .filter(|&bit| decision.correctable && bit < codeword.len())
    {
        let flipped = !codeword[bit];
        codeword.set(bit, flipped);
        debug!("Corrected bit {} of {}", bit, codeword.len());
        DecodeOutcome::Corrected { bit }
    } else {
        warn!(
            "Uncorrectable error, syndrome {:b}",
            crate::bits::bits_to_u64(&stage.syndrome)
        );
        DecodeOutcome::Uncorrectable
    };

    let systematic = to_systematic(code, &codeword);
    let data = systematic[..code.message_width()].to_bitvec();

    DecodeResult {
        data,
        valid: outcome != DecodeOutcome::Uncorrectable,
        outcome,
    }
}
