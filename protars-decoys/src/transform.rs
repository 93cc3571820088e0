use log::{debug, warn};

use protars_core::models::{
    BioPolymerRecord, DisulfideBond, ModificationMap, ProteolysisProduct, SequenceVariation,
    SpliceSite,
};

use crate::error::DecoyResult;

///
/// A structure-preserving sequence transform together with the rules that
/// carry every positional annotation through it.
///
/// An implementor is a coordinate frame built for one reference sequence:
/// the record's own sequence for its own annotations and applied
/// variations, the consensus sequence for unapplied variations.
///
pub trait DecoyTransform {
    fn for_reference(residues: &[char]) -> Self
    where
        Self: Sized;

    /// Decoy residues for the reference sequence the frame was built for
    fn sequence(&self, residues: &[char]) -> Vec<char>;

    /// Decoy position of the one-based `position`
    fn position(&self, position: usize) -> usize;

    fn proteolysis_products(
        &self,
        products: &[ProteolysisProduct],
        identifier: &str,
    ) -> Vec<ProteolysisProduct>;

    fn disulfide_bonds(&self, bonds: &[DisulfideBond], identifier: &str) -> Vec<DisulfideBond>;

    fn splice_sites(&self, sites: &[SpliceSite], identifier: &str) -> Vec<SpliceSite>;

    fn sequence_variations(
        &self,
        variations: &[SequenceVariation],
        identifier: &str,
    ) -> Vec<SequenceVariation>;

    fn modifications(&self, modifications: &ModificationMap) -> ModificationMap {
        remap_modifications(modifications, |position| self.position(position))
    }

    ///
    /// Whether the decoy fails to differ from its target
    ///
    fn is_degenerate(&self, target: &[char], decoy: &[char]) -> bool {
        target.len() > 1 && target == decoy
    }
}

///
/// Re-key a modification map through `map`.
///
pub fn remap_modifications<F>(modifications: &ModificationMap, map: F) -> ModificationMap
where
    F: Fn(usize) -> usize,
{
    let mut remapped = ModificationMap::new();
    for (&position, mods) in modifications.iter() {
        remapped
            .entry(map(position))
            .or_default()
            .extend(mods.iter().cloned());
    }
    remapped
}

///
/// Build the decoy of a single record.
///
/// The record is validated first; descriptive fields are copied verbatim and
/// only the sequence and positional annotations go through `T`.
///
pub fn build_decoy<T: DecoyTransform>(
    record: &BioPolymerRecord,
    identifier: &str,
) -> DecoyResult<BioPolymerRecord> {
    record.validate()?;

    let residues = record.residues();
    let frame = T::for_reference(&residues);
    let decoy_residues = frame.sequence(&residues);

    if frame.is_degenerate(&residues, &decoy_residues) {
        warn!(
            "Decoy for {} reproduces its target sequence {}",
            record.accession, record.sequence
        );
    }

    // unapplied variations live in the consensus coordinate frame
    let consensus = record.consensus();
    let consensus_frame = match consensus.as_ref() {
        Some(consensus) => T::for_reference(&consensus.residues()),
        None => T::for_reference(&residues),
    };

    debug!(
        "Built decoy for {} ({} residues, {} variations)",
        record.accession,
        residues.len(),
        record.sequence_variations.len() + record.applied_sequence_variations.len()
    );

    Ok(BioPolymerRecord {
        accession: format!("{}_{}", identifier, record.accession),
        organism: record.organism.clone(),
        name: record.name.clone(),
        full_name: record.full_name.clone(),
        sequence: decoy_residues.into_iter().collect(),
        gene_names: record.gene_names.clone(),
        modifications: frame.modifications(&record.modifications),
        proteolysis_products: frame.proteolysis_products(&record.proteolysis_products, identifier),
        disulfide_bonds: frame.disulfide_bonds(&record.disulfide_bonds, identifier),
        splice_sites: frame.splice_sites(&record.splice_sites, identifier),
        sequence_variations: consensus_frame
            .sequence_variations(&record.sequence_variations, identifier),
        applied_sequence_variations: frame
            .sequence_variations(&record.applied_sequence_variations, identifier),
        is_contaminant: record.is_contaminant,
        is_decoy: true,
        sample_name: record.sample_name.clone(),
        database_path: record.database_path.clone(),
        entry_tags: record.entry_tags.clone(),
        consensus: None,
    })
}
