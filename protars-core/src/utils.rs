use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

use crate::models::BioPolymerRecord;

fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Get a writer that gzips its output when `path` ends in `.gz`.
///
pub fn get_dynamic_writer(path: &Path) -> Result<BufWriter<Box<dyn Write>>> {
    let file = File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
    let file: Box<dyn Write> = match is_gzipped(path) {
        true => Box::new(GzEncoder::new(file, Compression::default())),
        false => Box::new(file),
    };

    Ok(BufWriter::new(file))
}

///
/// Read a JSON array of records from a (possibly gzip'd) file.
///
pub fn read_records(path: &Path) -> Result<Vec<BioPolymerRecord>> {
    let reader = get_dynamic_reader(path)?;
    let records = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse records from {:?}", path))?;
    Ok(records)
}

///
/// Write records as a pretty-printed JSON array, gzip'd for `.gz` paths.
///
pub fn write_records(path: &Path, records: &[BioPolymerRecord]) -> Result<()> {
    let mut writer = get_dynamic_writer(path)?;
    serde_json::to_writer_pretty(&mut writer, records)
        .with_context(|| format!("Failed to write records to {:?}", path))?;
    writer.write_all(b"\n")?;

    // finish the gzip stream before the file handle drops
    let inner = writer.into_inner().map_err(|e| e.into_error())?;
    drop(inner);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::tempdir;

    #[rstest]
    fn test_read_records() {
        let records = read_records(Path::new("../tests/data/decoys/records.json")).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].accession, "P12345");
        assert_eq!(records[0].modifications.len(), 2);
        assert_eq!(records[1].is_contaminant, true);
    }

    #[rstest]
    #[case("records.json")]
    #[case("records.json.gz")]
    fn test_write_then_read(#[case] name: &str) {
        let dir = tempdir().unwrap();
        let path = dir.path().join(name);

        let mut record = BioPolymerRecord::new("P12345", "MABCDE");
        record.gene_names.push("TST1".to_string());
        write_records(&path, &[record]).unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sequence, "MABCDE");
        assert_eq!(records[0].gene_names, vec!["TST1".to_string()]);
    }

    #[rstest]
    fn test_missing_file() {
        let result = read_records(Path::new("../tests/data/decoys/missing.json"));
        assert_eq!(result.is_err(), true);
    }
}
