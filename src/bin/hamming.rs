//! Hamming encode/decode tool
//!
//! Bit strings are given most significant bit first. `decode` exits with
//! status 1 when the word carries an uncorrectable error.

use anyhow::{Context, Result};
use hammingrs::{format_bits, parse_args, parse_bits, CodeConfig, Decoder};
use std::process;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = parse_args();

    match matches.subcommand() {
        Some(("encode", sub)) => {
            let config = CodeConfig::from_args(sub);
            let decoder = Decoder::new(config).context("Invalid code configuration")?;
            let data = parse_bits(sub.get_one::<String>("data").unwrap())?;
            let parity = decoder.encoder().encode(&data)?;
            println!("{}", format_bits(&parity));
        }
        Some(("decode", sub)) => {
            let config = CodeConfig::from_args(sub);
            let decoder = Decoder::new(config).context("Invalid code configuration")?;
            let data = parse_bits(sub.get_one::<String>("data").unwrap())?;
            let parity = parse_bits(sub.get_one::<String>("parity").unwrap())?;

            let result = decoder
                .decode(&data, &parity)
                .context("Failed to decode word")?;

            if sub.get_flag("quiet") {
                println!("{}", format_bits(&result.data));
            } else {
                println!("data:    {}", format_bits(&result.data));
                println!("valid:   {}", result.valid);
                println!("outcome: {}", result.outcome);
            }

            if !result.valid {
                process::exit(1);
            }
        }
        _ => unreachable!("clap requires a subcommand"),
    }

    Ok(())
}
