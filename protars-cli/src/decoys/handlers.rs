use std::path::Path;
use std::str::FromStr;

use anyhow::{Result, bail};
use clap::ArgMatches;
use log::info;

use protars_core::utils::{read_records, write_records};
use protars_decoys::consts::*;
use protars_decoys::{DecoyConfig, DecoyType, generate_decoys};

///
/// Resolve the decoy settings: the config file (or defaults), then any
/// command line overrides on top.
///
pub fn decoy_config_from_matches(matches: &ArgMatches) -> Result<DecoyConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => DecoyConfig::try_from(Path::new(path))?,
        None => DecoyConfig::default(),
    };

    if let Some(decoy_type) = matches.get_one::<String>("type") {
        config.decoy_type = match DecoyType::from_str(decoy_type) {
            Ok(decoy_type) => decoy_type,
            Err(_) => bail!(
                "Unknown decoy type '{}'. Expected one of none, reverse, slide",
                decoy_type
            ),
        };
    }

    if let Some(&threads) = matches.get_one::<usize>("threads") {
        if threads == 0 {
            bail!("--threads must be at least 1");
        }
        config.max_threads = Some(threads);
    }

    if let Some(identifier) = matches.get_one::<String>("identifier") {
        if identifier.is_empty() {
            bail!("--identifier must not be empty");
        }
        config.decoy_identifier = identifier.to_string();
    }

    Ok(config)
}

pub fn run_decoys(matches: &ArgMatches) -> Result<()> {
    let records = matches
        .get_one::<String>("records")
        .expect("A path to target records is required.");

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);
    let with_targets = matches.get_flag("with-targets");

    let config = decoy_config_from_matches(matches)?;

    let records = read_records(Path::new(records))?;
    info!("Read {} target records", records.len());

    let decoys = generate_decoys(&records, &config)?;

    let output = Path::new(output);
    if with_targets {
        let mut database = records;
        database.extend(decoys);
        write_records(output, &database)?;
        info!("Wrote {} records to {:?}", database.len(), output);
    } else {
        write_records(output, &decoys)?;
        info!("Wrote {} decoys to {:?}", decoys.len(), output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::tempdir;

    use crate::decoys::cli::create_decoys_cli;

    const RECORDS: &str = "../tests/data/decoys/records.json";
    const CONFIG: &str = "../tests/data/decoys/decoys.toml";

    fn parse(args: &[&str]) -> ArgMatches {
        let mut argv = vec![DECOYS_CMD];
        argv.extend_from_slice(args);
        create_decoys_cli().try_get_matches_from(argv).unwrap()
    }

    #[rstest]
    fn test_defaults() {
        let config = decoy_config_from_matches(&parse(&[RECORDS])).unwrap();
        assert_eq!(config, DecoyConfig::default());
    }

    #[rstest]
    fn test_flags_override_config_file() {
        let matches = parse(&[RECORDS, "--config", CONFIG, "--type", "reverse", "--threads", "3"]);
        let config = decoy_config_from_matches(&matches).unwrap();

        assert_eq!(config.decoy_type, DecoyType::Reverse);
        assert_eq!(config.max_threads, Some(3));
        // not overridden
        assert_eq!(config.decoy_identifier, "REV");
    }

    #[rstest]
    #[case(&["--type", "scramble"])]
    #[case(&["--threads", "0"])]
    #[case(&["--identifier", ""])]
    fn test_bad_values_rejected(#[case] args: &[&str]) {
        let mut argv = vec![RECORDS];
        argv.extend_from_slice(args);
        assert_eq!(decoy_config_from_matches(&parse(&argv)).is_err(), true);
    }

    #[rstest]
    fn test_run_decoys_writes_decoys() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("decoys.json.gz");
        let output_str = output.to_str().unwrap();

        run_decoys(&parse(&[RECORDS, "--type", "slide", "--output", output_str])).unwrap();

        let decoys = read_records(&output).unwrap();
        assert_eq!(decoys.len(), 2);
        assert_eq!(decoys[0].accession, "DECOY_P12345");
        assert_eq!(decoys[0].sequence, "MDAFCHEKGI");
        assert_eq!(decoys.iter().all(|d| d.is_decoy), true);
    }

    #[rstest]
    fn test_run_decoys_with_targets() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("database.json");
        let output_str = output.to_str().unwrap();

        run_decoys(&parse(&[RECORDS, "--with-targets", "--output", output_str])).unwrap();

        let database = read_records(&output).unwrap();
        assert_eq!(database.len(), 4);
        assert_eq!(database[0].accession, "P12345");
        assert_eq!(database[2].accession, "DECOY_P12345");
        assert_eq!(database[2].sequence, "MKIHGFEDCA");
    }

    #[rstest]
    fn test_unsupported_type_writes_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("decoys.json");
        let output_str = output.to_str().unwrap();

        let result = run_decoys(&parse(&[RECORDS, "--type", "shuffle", "--output", output_str]));
        assert_eq!(result.is_err(), true);
        assert_eq!(output.exists(), false);
    }
}
