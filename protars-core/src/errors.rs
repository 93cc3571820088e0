use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("Modification at position {position} is outside sequence of length {length} in {accession}")]
    ModificationOutOfBounds {
        accession: String,
        position: usize,
        length: usize,
    },

    #[error("{kind} [{begin}, {end}] is outside sequence of length {length} in {accession}")]
    FeatureOutOfBounds {
        accession: String,
        kind: &'static str,
        begin: usize,
        end: usize,
        length: usize,
    },

    #[error("{kind} [{begin}, {end}] begins after it ends in {accession}")]
    InvertedFeature {
        accession: String,
        kind: &'static str,
        begin: usize,
        end: usize,
    },

    #[error("Variant modification at position {position} is outside variant sequence of length {length} in {accession} ({variation})")]
    VariantModificationOutOfBounds {
        accession: String,
        variation: String,
        position: usize,
        length: usize,
    },
}

pub type RecordResult<T> = std::result::Result<T, RecordError>;
