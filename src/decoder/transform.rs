//! Basis transform between systematic and non-systematic layouts
//!
//! S is an involution, so one matrix serves both directions.

use crate::bits::{Bits, BitsRef};
use crate::resolver::ResolvedCode;

/// Systematic codeword to the layout where the syndrome names the fault
#[inline]
pub fn to_non_systematic(code: &ResolvedCode, systematic: &BitsRef) -> Bits {
    code.basis_transform().mul_vec(systematic)
}

/// Non-systematic codeword back to `[data | padding | parity]`
#[inline]
pub fn to_systematic(code: &ResolvedCode, non_systematic: &BitsRef) -> Bits {
    code.basis_transform().mul_vec(non_systematic)
}
