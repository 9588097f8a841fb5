//! Code configuration
//!
//! A [`CodeConfig`] is fixed for the lifetime of a decoder. All derived
//! dimensions and matrices come from [`crate::resolver`].

use crate::error::ConfigResult;
use crate::resolver;

/// Parameters selecting one member of the Hamming family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeConfig {
    /// Number of data bits per word
    pub message_width: usize,
    /// Whether correctable errors are repaired (otherwise only flagged)
    pub correction_enabled: bool,
    /// Whether a global parity bit is appended (SECDED)
    pub extra_parity_bit: bool,
    /// Single even-parity check instead of a Hamming code
    pub single_parity_variant: bool,
    /// Whether the syndrome stage is registered (one step of latency)
    pub pipelined_output: bool,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            message_width: 8,
            correction_enabled: true,
            extra_parity_bit: false,
            single_parity_variant: false,
            pipelined_output: false,
        }
    }
}

impl CodeConfig {
    /// Single-error-correcting code for `message_width` data bits
    pub fn new(message_width: usize) -> Self {
        Self {
            message_width,
            ..Self::default()
        }
    }

    /// Single-error-correcting, double-error-detecting code
    pub fn secded(message_width: usize) -> Self {
        Self::new(message_width).with_extra_parity_bit(true)
    }

    /// Detection-only even parity over the message
    pub fn single_parity(message_width: usize) -> Self {
        Self::new(message_width)
            .with_single_parity_variant(true)
            .with_correction(false)
    }

    pub fn with_correction(mut self, enabled: bool) -> Self {
        self.correction_enabled = enabled;
        self
    }

    pub fn with_extra_parity_bit(mut self, enabled: bool) -> Self {
        self.extra_parity_bit = enabled;
        self
    }

    pub fn with_single_parity_variant(mut self, enabled: bool) -> Self {
        self.single_parity_variant = enabled;
        self
    }

    pub fn with_pipelined_output(mut self, enabled: bool) -> Self {
        self.pipelined_output = enabled;
        self
    }

    /// Extra parity bit count as a width (0 or 1)
    #[inline]
    pub fn extra_bits(&self) -> usize {
        usize::from(self.extra_parity_bit)
    }

    /// Check that the parameters describe a supported code
    pub fn validate(&self) -> ConfigResult<()> {
        resolver::validate(
            self.message_width,
            self.extra_parity_bit,
            self.single_parity_variant,
            self.correction_enabled,
        )
    }

    /// Load from the code arguments registered by [`crate::args::code_args`].
    /// The command line decodes one word at a time, so output is never
    /// pipelined.
    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let message_width = matches
            .get_one::<usize>("width")
            .copied()
            .unwrap_or(Self::default().message_width);

        Self {
            message_width,
            correction_enabled: !matches.get_flag("no-correct"),
            extra_parity_bit: matches.get_flag("secded"),
            single_parity_variant: matches.get_flag("single-parity"),
            pipelined_output: false,
        }
    }
}
