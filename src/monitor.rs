//! Error counters wrapped around a decoder
//!
//! The decode pipeline itself keeps no statistics. [`MonitoredDecoder`]
//! observes every result leaving the pipeline and counts corrected and
//! detected errors, saturating at `u64::MAX`.

use crate::bits::BitsRef;
use crate::config::CodeConfig;
use crate::decoder::{DecodeOutcome, DecodeResult, Decoder};
use crate::error::{ConfigResult, HammingResult};

/// Error totals observed at the decoder output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorCounters {
    /// Words repaired by a single-bit correction
    pub errors_corrected: u64,
    /// Words with a nonzero syndrome, corrected or not
    pub errors_detected: u64,
}

impl ErrorCounters {
    /// Detected errors that were left in place
    pub fn errors_uncorrected(&self) -> u64 {
        self.errors_detected.saturating_sub(self.errors_corrected)
    }

    fn record(&mut self, result: &DecodeResult) {
        if !result.error_detected() {
            return;
        }
        self.errors_detected = self.errors_detected.saturating_add(1);
        if matches!(result.outcome, DecodeOutcome::Corrected { .. }) {
            self.errors_corrected = self.errors_corrected.saturating_add(1);
        }
    }
}

/// Decoder with output-side error counters
#[derive(Debug, Clone)]
pub struct MonitoredDecoder {
    decoder: Decoder,
    counters: ErrorCounters,
}

impl MonitoredDecoder {
    pub fn new(config: CodeConfig) -> ConfigResult<Self> {
        Ok(Self::from_decoder(Decoder::new(config)?))
    }

    pub fn from_decoder(decoder: Decoder) -> Self {
        Self {
            decoder,
            counters: ErrorCounters::default(),
        }
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    pub fn into_inner(self) -> Decoder {
        self.decoder
    }

    pub fn counters(&self) -> ErrorCounters {
        self.counters
    }

    pub fn clear_counters(&mut self) {
        self.counters = ErrorCounters::default();
    }

    /// Combinational decode, counted
    pub fn decode(&mut self, data: &BitsRef, parity: &BitsRef) -> HammingResult<DecodeResult> {
        let result = self.decoder.decode(data, parity)?;
        self.counters.record(&result);
        Ok(result)
    }

    /// One clock step, counting the word that leaves the pipeline
    pub fn clock(&mut self, data: &BitsRef, parity: &BitsRef) -> HammingResult<DecodeResult> {
        let result = self.decoder.clock(data, parity)?;
        self.counters.record(&result);
        Ok(result)
    }

    /// Reset the pipeline; counters keep their values
    pub fn reset(&mut self) {
        self.decoder.reset();
    }
}
