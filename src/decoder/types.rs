//! Types describing decoder output

use crate::bits::{zeros, Bits};
use std::fmt;

/// What the decoder concluded about one word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// Zero syndrome
    Clean,
    /// A single flip was repaired; `bit` is its 0-based non-systematic index
    Corrected { bit: usize },
    /// An error was detected and left in place
    Uncorrectable,
    /// Registered pipeline after reset, before the first word arrives
    Idle,
}

impl fmt::Display for DecodeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeOutcome::Clean => write!(f, "clean"),
            DecodeOutcome::Corrected { bit } => write!(f, "corrected bit {}", bit),
            DecodeOutcome::Uncorrectable => write!(f, "uncorrectable"),
            DecodeOutcome::Idle => write!(f, "idle"),
        }
    }
}

/// Decoded data together with its validity flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    /// Decoded (possibly corrected) message, `message_width` bits
    pub data: Bits,
    /// False when the data must not be trusted
    pub valid: bool,
    pub outcome: DecodeOutcome,
}

impl DecodeResult {
    /// Output of a registered pipeline that holds no word: all-zero data,
    /// validity flag cleared
    pub fn idle(message_width: usize) -> Self {
        Self {
            data: zeros(message_width),
            valid: false,
            outcome: DecodeOutcome::Idle,
        }
    }

    /// Some parity check failed for this word
    pub fn error_detected(&self) -> bool {
        matches!(
            self.outcome,
            DecodeOutcome::Corrected { .. } | DecodeOutcome::Uncorrectable
        )
    }

    pub fn is_idle(&self) -> bool {
        self.outcome == DecodeOutcome::Idle
    }
}
