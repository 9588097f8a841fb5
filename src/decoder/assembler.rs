//! Codeword assembly: data and parity ports into one systematic codeword

use crate::bits::{Bits, BitsRef};
use crate::resolver::ResolvedCode;

/// Build the systematic codeword `[data | zero padding | parity]`.
///
/// Port widths are checked by the caller; this stage cannot fail.
pub fn assemble(code: &ResolvedCode, data: &BitsRef, parity: &BitsRef) -> Bits {
    debug_assert_eq!(data.len(), code.message_width());
    debug_assert_eq!(parity.len(), code.parity_width());

    let mut codeword = Bits::with_capacity(code.total_width());
    codeword.extend_from_bitslice(data);
    codeword.resize(code.data_capacity(), false);
    codeword.extend_from_bitslice(parity);
    codeword
}
