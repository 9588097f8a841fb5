//! Hamming decode pipeline
//!
//! ```text
//! data, parity
//!   ↓ assembler     systematic codeword
//!   ↓ transform     non-systematic codeword
//!   ↓ syndrome      H · codeword          ── registered in pipelined mode
//!   ↓ decision      correctable?, fault position
//!   ↓ output        flip, transform back, extract data
//! data_out, valid_out
//! ```
//!
//! [`Decoder::decode`] evaluates the whole chain combinationally.
//! [`Decoder::clock`] models one synchronization step: with pipelined
//! output it returns the word presented on the previous step, otherwise the
//! current one. [`Decoder::reset`] clears the registered stage.

pub mod assembler;
pub mod decision;
pub mod output;
pub mod syndrome;
pub mod transform;
pub mod types;

pub use decision::{decide, CorrectionDecision};
pub use syndrome::SyndromeStage;
pub use types::{DecodeOutcome, DecodeResult};

use crate::bits::{Bits, BitsRef};
use crate::config::CodeConfig;
use crate::encoder::Encoder;
use crate::error::{ConfigResult, DecodeError, HammingResult};
use crate::resolver::ResolvedCode;
use log::trace;
use rayon::prelude::*;
use std::sync::Arc;

/// Hamming decoder for one fixed configuration
#[derive(Debug, Clone)]
pub struct Decoder {
    code: Arc<ResolvedCode>,
    /// Registered syndrome stage (pipelined mode only)
    registered: Option<SyndromeStage>,
}

impl Decoder {
    /// Resolve and validate `config`. Fails before any decoding can happen.
    pub fn new(config: CodeConfig) -> ConfigResult<Self> {
        Ok(Self::from_code(Arc::new(ResolvedCode::resolve(config)?)))
    }

    /// Build on an already resolved code
    pub fn from_code(code: Arc<ResolvedCode>) -> Self {
        Self {
            code,
            registered: None,
        }
    }

    #[inline]
    pub fn code(&self) -> &ResolvedCode {
        &self.code
    }

    #[inline]
    pub fn config(&self) -> &CodeConfig {
        self.code.config()
    }

    /// Encoder sharing this decoder's matrices
    pub fn encoder(&self) -> Encoder {
        Encoder::from_code(Arc::clone(&self.code))
    }

    /// Steps between presenting a word and observing its result
    #[inline]
    pub fn latency(&self) -> usize {
        usize::from(self.config().pipelined_output)
    }

    fn check_ports(&self, data: &BitsRef, parity: &BitsRef) -> HammingResult<()> {
        if data.len() != self.code.message_width() {
            return Err(DecodeError::PortWidth {
                port: "data",
                expected: self.code.message_width(),
                actual: data.len(),
            });
        }
        if parity.len() != self.code.parity_width() {
            return Err(DecodeError::PortWidth {
                port: "parity",
                expected: self.code.parity_width(),
                actual: parity.len(),
            });
        }
        Ok(())
    }

    fn finish(&self, stage: &SyndromeStage) -> DecodeResult {
        let decision = decide(&self.code, &stage.syndrome);
        output::apply_correction(&self.code, stage, &decision)
    }

    /// Decode one word with no latency, ignoring pipeline state
    pub fn decode(&self, data: &BitsRef, parity: &BitsRef) -> HammingResult<DecodeResult> {
        self.check_ports(data, parity)?;
        Ok(self.finish(&SyndromeStage::compute(&self.code, data, parity)))
    }

    /// Advance one synchronization step with a new word on the ports.
    ///
    /// Pipelined: returns the result for the word captured on the previous
    /// step, or [`DecodeResult::idle`] right after construction or reset,
    /// and captures the current word. Otherwise identical to
    /// [`Decoder::decode`]. A port width error leaves the pipeline untouched.
    pub fn clock(&mut self, data: &BitsRef, parity: &BitsRef) -> HammingResult<DecodeResult> {
        self.check_ports(data, parity)?;
        let stage = SyndromeStage::compute(&self.code, data, parity);

        if !self.config().pipelined_output {
            return Ok(self.finish(&stage));
        }

        trace!("Capturing syndrome stage, error={}", stage.has_error());
        let result = match self.registered.replace(stage) {
            Some(previous) => self.finish(&previous),
            None => DecodeResult::idle(self.code.message_width()),
        };
        Ok(result)
    }

    /// Synchronous reset: drop the registered stage. The next
    /// [`Decoder::clock`] observes all-zero data with the validity flag
    /// cleared. No effect without pipelined output.
    pub fn reset(&mut self) {
        if self.registered.take().is_some() {
            trace!("Reset discarded a registered word");
        }
    }

    /// A word is held in the pipeline register
    pub fn has_pending(&self) -> bool {
        self.registered.is_some()
    }

    /// Decode many independent words in parallel, in input order
    pub fn decode_batch(&self, words: &[(Bits, Bits)]) -> HammingResult<Vec<DecodeResult>> {
        words
            .par_iter()
            .map(|(data, parity)| self.decode(data, parity))
            .collect()
    }
}
