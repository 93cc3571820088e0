//! Reverse decoys: the sequence read backwards, initiator residue kept in
//! front.

use protars_core::models::{DisulfideBond, ProteolysisProduct, SequenceVariation, SpliceSite};

use crate::coordinates::ReverseCoordinates;
use crate::transform::{DecoyTransform, remap_modifications};
use crate::validate::is_palindromic;
use crate::variants::{starts_with_initiator, trim_leading, variant_description, variant_length};

/// How a variation interacts with the initiator residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InitiatorOverlap {
    /// Starts at residue 1 and keeps (or removes) a pinned initiator
    Anchored,
    /// Single residue at position 1 turning into the initiator
    Gain,
    /// Does not start at residue 1, or there is nothing to pin
    None,
}

impl InitiatorOverlap {
    fn classify(
        variation: &SequenceVariation,
        original: &[char],
        variant: &[char],
        initiator: bool,
    ) -> Self {
        if variation.begin != 1 {
            return InitiatorOverlap::None;
        }
        let original_initiator = starts_with_initiator(original);
        let variant_initiator = starts_with_initiator(variant);

        if original_initiator && !variant_initiator {
            // start loss
            InitiatorOverlap::Anchored
        } else if variant_initiator && original.len() + variant.len() > 2 {
            InitiatorOverlap::Anchored
        } else if variant_initiator {
            InitiatorOverlap::Gain
        } else if initiator {
            InitiatorOverlap::Anchored
        } else {
            InitiatorOverlap::None
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReverseTransform {
    coordinates: ReverseCoordinates,
}

impl ReverseTransform {
    fn variation(&self, variation: &SequenceVariation, identifier: &str) -> SequenceVariation {
        let length = self.coordinates.length;
        let mut original: Vec<char> = variation.original.chars().collect();
        let mut variant: Vec<char> = variation.variant.chars().collect();

        let overlap =
            InitiatorOverlap::classify(variation, &original, &variant, self.coordinates.initiator);

        let (begin, end) = match overlap {
            // nothing but residue 1 is covered: it stays pinned in front
            InitiatorOverlap::Anchored if variation.end == 1 => (1, 1),
            InitiatorOverlap::Anchored => {
                trim_leading(&mut original);
                trim_leading(&mut variant);
                (length + 2 - variation.end, length)
            }
            InitiatorOverlap::Gain => (1, 1),
            InitiatorOverlap::None if self.coordinates.initiator => (
                length + 2 - variation.end,
                length + 2 - variation.begin,
            ),
            InitiatorOverlap::None => self.coordinates.range(variation.begin, variation.end),
        };

        original.reverse();
        variant.reverse();

        let allele = self
            .coordinates
            .resized(variant_length(length, variation));

        SequenceVariation {
            begin,
            end,
            original: original.into_iter().collect(),
            variant: variant.into_iter().collect(),
            description: variant_description(identifier, &variation.description),
            modifications: remap_modifications(&variation.modifications, |position| {
                allele.position(position)
            }),
        }
    }
}

impl DecoyTransform for ReverseTransform {
    fn for_reference(residues: &[char]) -> Self {
        ReverseTransform {
            coordinates: ReverseCoordinates::for_residues(residues),
        }
    }

    fn sequence(&self, residues: &[char]) -> Vec<char> {
        let mut reversed = residues.to_vec();
        if self.coordinates.initiator && !reversed.is_empty() {
            reversed[1..].reverse();
        } else {
            reversed.reverse();
        }
        reversed
    }

    fn position(&self, position: usize) -> usize {
        self.coordinates.position(position)
    }

    fn proteolysis_products(
        &self,
        products: &[ProteolysisProduct],
        identifier: &str,
    ) -> Vec<ProteolysisProduct> {
        products
            .iter()
            .map(|product| {
                let (begin, end) = self
                    .coordinates
                    .proteolysis_product(product.begin, product.end);
                ProteolysisProduct::new(
                    begin,
                    end,
                    &format!("{} {}", identifier, product.product_type),
                )
            })
            .collect()
    }

    fn disulfide_bonds(&self, bonds: &[DisulfideBond], identifier: &str) -> Vec<DisulfideBond> {
        bonds
            .iter()
            .map(|bond| {
                let (begin, end) = self.coordinates.disulfide_bond(bond.begin, bond.end);
                DisulfideBond::new(begin, end, &format!("{} {}", identifier, bond.description))
            })
            .collect()
    }

    fn splice_sites(&self, sites: &[SpliceSite], identifier: &str) -> Vec<SpliceSite> {
        sites
            .iter()
            .map(|site| {
                let (begin, end) = self.coordinates.splice_site(site.begin, site.end);
                SpliceSite::new(begin, end, &format!("{} {}", identifier, site.description))
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
            .map(|variation| self.variation(variation, identifier))
            .collect()
    }

    fn is_degenerate(&self, target: &[char], _decoy: &[char]) -> bool {
        let scrambled = if self.coordinates.initiator && !target.is_empty() {
            &target[1..]
        } else {
            target
        };
        scrambled.len() > 1 && is_palindromic(scrambled, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use protars_core::models::{Modification, ModificationMap};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn frame(sequence: &str) -> ReverseTransform {
        ReverseTransform::for_reference(&chars(sequence))
    }

    fn remap(sequence: &str, variation: SequenceVariation) -> SequenceVariation {
        frame(sequence).variation(&variation, "DECOY")
    }

    #[rstest]
    #[case("MABCDE", "MEDCBA")]
    #[case("ABCDE", "EDCBA")]
    #[case("M", "M")]
    #[case("", "")]
    fn test_sequence(#[case] input: &str, #[case] expected: &str) {
        let residues = chars(input);
        assert_eq!(frame(input).sequence(&residues), chars(expected));
    }

    #[rstest]
    fn test_interior_variation_with_initiator() {
        let decoy = remap("MACDEFGHIK", SequenceVariation::new(3, 3, "C", "Z", "substitution"));
        assert_eq!((decoy.begin, decoy.end), (9, 9));
        assert_eq!(decoy.original, "C");
        assert_eq!(decoy.variant, "Z");
        assert_eq!(decoy.description, "DECOY VARIANT: substitution");
    }

    #[rstest]
    fn test_interior_variation_reverses_runs() {
        let decoy = remap("MACDEFGHIK", SequenceVariation::new(3, 5, "CDE", "QRS", "block"));
        assert_eq!((decoy.begin, decoy.end), (7, 9));
        assert_eq!(decoy.original, "EDC");
        assert_eq!(decoy.variant, "SRQ");
    }

    #[rstest]
    fn test_variation_without_initiator() {
        let decoy = remap("ACDEFGHIKL", SequenceVariation::new(3, 4, "DE", "W", "deletion"));
        assert_eq!((decoy.begin, decoy.end), (7, 8));
        assert_eq!(decoy.original, "ED");
        assert_eq!(decoy.variant, "W");
    }

    #[rstest]
    fn test_start_loss_is_trimmed_and_anchored_at_end() {
        let decoy = remap("MACDEFGHIK", SequenceVariation::new(1, 3, "MAC", "VAC", "start lost"));
        assert_eq!((decoy.begin, decoy.end), (9, 10));
        assert_eq!(decoy.original, "CA");
        assert_eq!(decoy.variant, "CA");
    }

    #[rstest]
    fn test_initiator_retained_multi_residue() {
        let decoy = remap("MACDEFGHIK", SequenceVariation::new(1, 2, "MA", "MGG", "extension"));
        assert_eq!((decoy.begin, decoy.end), (10, 10));
        assert_eq!(decoy.original, "A");
        assert_eq!(decoy.variant, "GG");
    }

    #[rstest]
    fn test_variation_on_initiator_only_stays_pinned() {
        let decoy = remap("MACDEFGHIK", SequenceVariation::new(1, 1, "M", "MM", "extension"));
        assert_eq!((decoy.begin, decoy.end), (1, 1));
        assert_eq!(decoy.original, "M");
        assert_eq!(decoy.variant, "MM");
    }

    #[rstest]
    fn test_initiator_gain() {
        let decoy = remap("ACDEFGHIKL", SequenceVariation::new(1, 1, "A", "M", "gain"));
        assert_eq!((decoy.begin, decoy.end), (1, 1));
        assert_eq!(decoy.original, "A");
        assert_eq!(decoy.variant, "M");
    }

    #[rstest]
    fn test_first_residue_without_initiator_mirrors() {
        let decoy = remap("ACDEFGHIKL", SequenceVariation::new(1, 2, "AC", "W", "deletion"));
        assert_eq!((decoy.begin, decoy.end), (9, 10));
        assert_eq!(decoy.original, "CA");
    }

    #[rstest]
    fn test_variant_modifications_use_variant_length() {
        let mut modifications = ModificationMap::new();
        modifications.insert(3, vec![Modification::new("Acetylation")]);

        let same_length = SequenceVariation::new(3, 3, "C", "K", "")
            .with_modifications(modifications.clone());
        let insertion = SequenceVariation::new(3, 3, "C", "KR", "")
            .with_modifications(modifications);

        let decoy = remap("MACDEFGHIK", same_length);
        assert_eq!(decoy.modifications.contains_key(&9), true);

        // the allele is 11 residues long
        let decoy = remap("MACDEFGHIK", insertion);
        assert_eq!(decoy.modifications.contains_key(&10), true);
    }

    #[rstest]
    fn test_labels() {
        let transform = frame("ACDEFGHIKL");
        let products =
            transform.proteolysis_products(&[ProteolysisProduct::new(2, 4, "chain")], "DECOY");
        assert_eq!(products, vec![ProteolysisProduct::new(7, 9, "DECOY chain")]);

        let bonds = transform.disulfide_bonds(&[DisulfideBond::new(2, 9, "2-9")], "REV");
        assert_eq!(bonds, vec![DisulfideBond::new(2, 9, "REV 2-9")]);

        let sites = transform.splice_sites(&[SpliceSite::new(1, 1, "junction")], "DECOY");
        assert_eq!(sites, vec![SpliceSite::new(10, 10, "DECOY junction")]);
    }

    #[rstest]
    #[case("MABCBA", true)]
    #[case("ABCBA", true)]
    #[case("MABCDE", false)]
    #[case("MA", false)]
    fn test_is_degenerate(#[case] target: &str, #[case] expected: bool) {
        let residues = chars(target);
        let transform = frame(target);
        let decoy = transform.sequence(&residues);
        assert_eq!(transform.is_degenerate(&residues, &decoy), expected);
    }
}
