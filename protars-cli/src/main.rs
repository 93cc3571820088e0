mod decoys;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "protars";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Decoy database tools for target-decoy false discovery rate estimation in proteomics.")
        .subcommand_required(true)
        .subcommand(decoys::cli::create_decoys_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // DECOYS
        //
        Some((decoys::cli::DECOYS_CMD, matches)) => {
            decoys::handlers::run_decoys(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
