use clap::{Arg, Command, arg, value_parser};

pub use protars_decoys::consts::*;

pub fn create_decoys_cli() -> Command {
    Command::new(DECOYS_CMD)
        .about("Generate reverse or slide decoys for a set of target records.")
        .arg(
            Arg::new("records")
                .required(true)
                .help("JSON array of target records (.json or .json.gz)"),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .value_name("TYPE")
                .help("Decoy type: none, reverse or slide"),
        )
        .arg(
            arg!(--threads <threads>)
                .help("Maximum number of worker threads")
                .value_parser(value_parser!(usize)),
        )
        .arg(arg!(--identifier <identifier>).help("Prefix for decoy accessions and labels"))
        .arg(arg!(--config <config>).help("TOML file with decoy settings"))
        .arg(
            arg!(--output <output>)
                .help("Where to write the decoys; gzip'd when ending in .gz"),
        )
        .arg(
            arg!(--"with-targets")
                .help("Write the targets followed by their decoys")
                .action(clap::ArgAction::SetTrue),
        )
}
