pub mod args;
pub mod bits;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod gf2;
pub mod monitor;
pub mod resolver;

pub use args::parse_args;
pub use bits::{format_bits, parse_bits, Bits, BitsRef};
pub use config::CodeConfig;
pub use decoder::{DecodeOutcome, DecodeResult, Decoder};
pub use encoder::Encoder;
pub use error::{ConfigError, DecodeError};
pub use monitor::{ErrorCounters, MonitoredDecoder};
pub use resolver::ResolvedCode;
