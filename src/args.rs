use clap::{value_parser, Arg, ArgAction, Command};

/// Arguments selecting the code, shared by every subcommand
pub fn code_args() -> [Arg; 4] {
    [
        Arg::new("width")
            .short('w')
            .long("width")
            .help("Message width in bits")
            .value_name("BITS")
            .value_parser(value_parser!(usize))
            .required(true),
        Arg::new("secded")
            .short('e')
            .long("secded")
            .help("Append an extra parity bit (double-error detection)")
            .action(ArgAction::SetTrue),
        Arg::new("single-parity")
            .long("single-parity")
            .help("Use a single even-parity bit instead of a Hamming code")
            .action(ArgAction::SetTrue),
        Arg::new("no-correct")
            .long("no-correct")
            .help("Detect errors only, never correct")
            .action(ArgAction::SetTrue),
    ]
}

pub fn build_cli() -> Command {
    Command::new("hamming")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Hamming SEC/SECDED encoder and decoder")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommand(
            Command::new("encode")
                .visible_alias("e")
                .about("Compute parity bits for a data word")
                .args(code_args())
                .arg(
                    Arg::new("data")
                        .help("Data bits, most significant first")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("decode")
                .visible_alias("d")
                .about("Check and correct a data word against its parity bits")
                .args(code_args())
                .arg(
                    Arg::new("data")
                        .help("Data bits, most significant first")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("parity")
                        .help("Parity bits, most significant first")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("quiet")
                        .short('q')
                        .long("quiet")
                        .help("Print only the decoded data")
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_cli().get_matches()
}
