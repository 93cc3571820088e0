use std::path::PathBuf;
use std::sync::{Arc, Weak};

use serde::{Deserialize, Serialize};

use super::features::{DisulfideBond, ProteolysisProduct, Span, SpliceSite};
use super::modification::ModificationMap;
use super::variation::SequenceVariation;
use crate::consts::INITIATOR;
use crate::errors::{RecordError, RecordResult};

/// UniProt entry attributes carried through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryTags {
    pub dataset: Option<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
    pub version: Option<String>,
    pub xmlns: Option<String>,
}

///
/// A protein (or other biopolymer) with its positional annotations.
///
/// All positions are one-based. `sequence_variations` are expressed against
/// the consensus (non-variant) record, `applied_sequence_variations` against
/// this record's own sequence.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BioPolymerRecord {
    pub accession: String,
    #[serde(default)]
    pub organism: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    pub sequence: String,
    #[serde(default)]
    pub gene_names: Vec<String>,
    #[serde(default)]
    pub modifications: ModificationMap,
    #[serde(default)]
    pub proteolysis_products: Vec<ProteolysisProduct>,
    #[serde(default)]
    pub disulfide_bonds: Vec<DisulfideBond>,
    #[serde(default)]
    pub splice_sites: Vec<SpliceSite>,
    #[serde(default)]
    pub sequence_variations: Vec<SequenceVariation>,
    #[serde(default)]
    pub applied_sequence_variations: Vec<SequenceVariation>,
    #[serde(default)]
    pub is_contaminant: bool,
    #[serde(default)]
    pub is_decoy: bool,
    #[serde(default)]
    pub sample_name: Option<String>,
    #[serde(default)]
    pub database_path: Option<PathBuf>,
    #[serde(default)]
    pub entry_tags: Option<EntryTags>,

    /// Non-owning link to the consensus record this one was derived from
    #[serde(skip)]
    pub consensus: Option<Weak<BioPolymerRecord>>,
}

impl BioPolymerRecord {
    pub fn new(accession: &str, sequence: &str) -> Self {
        BioPolymerRecord {
            accession: accession.to_string(),
            sequence: sequence.to_string(),
            ..Default::default()
        }
    }

    pub fn with_consensus(mut self, consensus: &Arc<BioPolymerRecord>) -> Self {
        self.consensus = Some(Arc::downgrade(consensus));
        self
    }

    ///
    /// Upgrade the consensus link, if the consensus record is still alive
    ///
    pub fn consensus(&self) -> Option<Arc<BioPolymerRecord>> {
        self.consensus.as_ref().and_then(Weak::upgrade)
    }

    pub fn residues(&self) -> Vec<char> {
        self.sequence.chars().collect()
    }

    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn starts_with_initiator(&self) -> bool {
        self.sequence.starts_with(INITIATOR)
    }

    ///
    /// Length of the sequence unapplied variations are expressed against
    ///
    pub fn consensus_len(&self) -> usize {
        self.consensus()
            .map(|consensus| consensus.len())
            .unwrap_or_else(|| self.len())
    }

    ///
    /// Check that every positional annotation lies inside the sequence it
    /// refers to.
    ///
    pub fn validate(&self) -> RecordResult<()> {
        let length = self.len();

        for &position in self.modifications.keys() {
            if position == 0 || position > length {
                return Err(RecordError::ModificationOutOfBounds {
                    accession: self.accession.clone(),
                    position,
                    length,
                });
            }
        }

        for product in self.proteolysis_products.iter() {
            check_span(&self.accession, product, length)?;
        }
        for bond in self.disulfide_bonds.iter() {
            check_span(&self.accession, bond, length)?;
        }
        for site in self.splice_sites.iter() {
            check_span(&self.accession, site, length)?;
        }

        let consensus_length = self.consensus_len();
        for variation in self.sequence_variations.iter() {
            check_variation(&self.accession, variation, consensus_length)?;
        }
        for variation in self.applied_sequence_variations.iter() {
            check_variation(&self.accession, variation, length)?;
        }

        Ok(())
    }
}

fn check_span<S: Span>(accession: &str, span: &S, length: usize) -> RecordResult<()> {
    if span.begin() > span.end() {
        return Err(RecordError::InvertedFeature {
            accession: accession.to_string(),
            kind: S::KIND,
            begin: span.begin(),
            end: span.end(),
        });
    }
    if span.begin() == 0 || span.end() > length {
        return Err(RecordError::FeatureOutOfBounds {
            accession: accession.to_string(),
            kind: S::KIND,
            begin: span.begin(),
            end: span.end(),
            length,
        });
    }
    Ok(())
}

fn check_variation(
    accession: &str,
    variation: &SequenceVariation,
    reference_length: usize,
) -> RecordResult<()> {
    check_span(accession, variation, reference_length)?;

    let variant_length = (reference_length as isize + variation.length_delta()).max(0) as usize;
    for &position in variation.modifications.keys() {
        if position == 0 || position > variant_length {
            return Err(RecordError::VariantModificationOutOfBounds {
                accession: accession.to_string(),
                variation: variation.simple_string(),
                position,
                length: variant_length,
            });
        }
    }
    Ok(())
}
