//! Error types for code configuration and decoder port usage
//!
//! Decode failures caused by channel errors are never reported through these
//! types: an uncorrectable word is a normal result with `valid == false`.

use thiserror::Error;

/// The parameters describe no supported code. Raised only while resolving a
/// configuration, never by a decode call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Message width of zero bits
    #[error("Message width must be at least 1 bit")]
    ZeroWidth,

    /// No supported block size can hold the message
    #[error("Message width {width} exceeds the largest supported block ({max} data bits)")]
    WidthTooLarge { width: usize, max: usize },

    /// Single-parity variant combined with an extra parity bit
    #[error("Single-parity variant cannot carry an extra parity bit")]
    SingleParityWithExtraBit,

    /// Single-parity variant combined with correction
    #[error("Single-parity variant cannot locate errors; correction must be disabled")]
    SingleParityWithCorrection,
}

/// Host-side misuse of the decoder ports or malformed bit strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A port was driven with the wrong number of bits
    #[error("Port {port} expects {expected} bits, got {actual}")]
    PortWidth {
        port: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Text could not be parsed as an MSB-first bit string
    #[error("Invalid bit string: {0:?}")]
    InvalidBitString(String),

    /// Configuration error surfaced while building a codec
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Type alias for Result with ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Type alias for Result with DecodeError
pub type HammingResult<T> = std::result::Result<T, DecodeError>;
