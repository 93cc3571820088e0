//! Slide decoys: residues moved by the reflected-translation permutation in
//! [crate::permutation], initiator residue kept in front.

use protars_core::consts::INITIATOR;
use protars_core::models::{DisulfideBond, ProteolysisProduct, SequenceVariation, SpliceSite};

use crate::consts::DEFAULT_SHIFT;
use crate::coordinates::ReverseCoordinates;
use crate::permutation::{adjusted_shift, permute, slide_run};
use crate::transform::{DecoyTransform, remap_modifications};
use crate::variants::{
    initiator_change, starts_with_initiator, variant_description, variant_length,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTransform {
    pub length: usize,
    pub initiator: bool,
    pub shift: usize,
}

impl SlideTransform {
    pub fn new(length: usize, initiator: bool) -> Self {
        let permuted = if initiator {
            length.saturating_sub(1)
        } else {
            length
        };
        SlideTransform {
            length,
            initiator,
            shift: adjusted_shift(DEFAULT_SHIFT, permuted),
        }
    }

    ///
    /// Same pinning rule over a sequence of a different length
    ///
    pub fn resized(&self, length: usize) -> Self {
        SlideTransform::new(length, self.initiator)
    }

    ///
    /// Permute a one-based position over the whole sequence, ignoring the
    /// initiator. Bonds and splice sites are not pinned.
    ///
    fn unpinned(&self, position: usize) -> usize {
        permute(position - 1, self.shift, self.length, false) + 1
    }

    fn variation(&self, variation: &SequenceVariation, identifier: &str) -> Vec<SequenceVariation> {
        let mut decoys = Vec::with_capacity(1);
        let mut original: Vec<char> = variation.original.chars().collect();
        let mut variant: Vec<char> = variation.variant.chars().collect();

        if variation.begin == 1 {
            let original_initiator = starts_with_initiator(&original);
            let variant_initiator = starts_with_initiator(&variant);
            if original_initiator && !variant_initiator {
                decoys.push(initiator_change(identifier, variation));
            }
            if original_initiator {
                original.remove(0);
            }
            if variant_initiator {
                variant.remove(0);
            }
        }

        // NOTE: anchors use the reverse mirror rather than the permutation,
        // so they do not follow the slid residues.
        let (begin, end) = ReverseCoordinates::new(self.length, self.initiator).variant_anchor(
            variation.begin,
            variation.end,
            original.len(),
        );

        let allele = self.resized(variant_length(self.length, variation));

        decoys.push(SequenceVariation {
            begin,
            end,
            original: slide_run(&original).into_iter().collect(),
            variant: slide_run(&variant).into_iter().collect(),
            description: variant_description(identifier, &variation.description),
            modifications: remap_modifications(&variation.modifications, |position| {
                allele.position(position)
            }),
        });
        decoys
    }
}

impl DecoyTransform for SlideTransform {
    fn for_reference(residues: &[char]) -> Self {
        SlideTransform::new(residues.len(), residues.first() == Some(&INITIATOR))
    }

    fn sequence(&self, residues: &[char]) -> Vec<char> {
        let length = residues.len();
        (0..length)
            .map(|i| residues[permute(i, self.shift, length, self.initiator)])
            .collect()
    }

    fn position(&self, position: usize) -> usize {
        if self.initiator && position == 1 {
            return 1;
        }
        permute(position - 1, self.shift, self.length, self.initiator) + 1
    }

    fn proteolysis_products(
        &self,
        products: &[ProteolysisProduct],
        _identifier: &str,
    ) -> Vec<ProteolysisProduct> {
        // residues are not tracked under a slide, only the lengths survive
        products.to_vec()
    }

    fn disulfide_bonds(&self, bonds: &[DisulfideBond], identifier: &str) -> Vec<DisulfideBond> {
        bonds
            .iter()
            .map(|bond| {
                let (a, b) = (self.unpinned(bond.begin), self.unpinned(bond.end));
                DisulfideBond::new(
                    a.min(b),
                    a.max(b),
                    &format!("{} DISULFIDE BOND: {}", identifier, bond.description),
                )
            })
            .collect()
    }

    fn splice_sites(&self, sites: &[SpliceSite], identifier: &str) -> Vec<SpliceSite> {
        sites
            .iter()
            .map(|site| {
                let (a, b) = (self.unpinned(site.begin), self.unpinned(site.end));
                SpliceSite::new(
                    a.min(b),
                    a.max(b),
                    &format!("{} SPLICE SITE: {}", identifier, site.description),
                )
            })
            .collect()
    }

    fn sequence_variations(
        &self,
        variations: &[SequenceVariation],
        identifier: &str,
    ) -> Vec<SequenceVariation> {
        variations
            .iter()
            .flat_map(|variation| self.variation(variation, identifier))
            .collect()
    }
}
