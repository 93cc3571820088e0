//! Mirror-image coordinate rules for reverse decoys.
//!
//! All positions are one-based. When the sequence starts with the initiator
//! residue, position 1 stays put and positions `2..=L` mirror onto `L..=2`.

///
/// Coordinate frame of a reversed sequence of `length` residues.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReverseCoordinates {
    pub length: usize,
    pub initiator: bool,
}

impl ReverseCoordinates {
    pub fn new(length: usize, initiator: bool) -> Self {
        ReverseCoordinates { length, initiator }
    }

    ///
    /// Frame for `residues`, pinning a leading initiator if present
    ///
    pub fn for_residues(residues: &[char]) -> Self {
        ReverseCoordinates::new(
            residues.len(),
            residues.first() == Some(&protars_core::consts::INITIATOR),
        )
    }

    ///
    /// Same pinning rule over a sequence of a different length, e.g. a
    /// variant allele
    ///
    pub fn resized(&self, length: usize) -> Self {
        ReverseCoordinates::new(length, self.initiator)
    }

    ///
    /// Plain mirror through the sequence, ignoring the initiator
    ///
    pub fn mirror(&self, position: usize) -> usize {
        self.length + 1 - position
    }

    ///
    /// Position of residue `position` once reversed.
    ///
    pub fn position(&self, position: usize) -> usize {
        match (self.initiator, position) {
            (true, 1) => 1,
            (true, p) => self.length + 2 - p,
            (false, p) => self.mirror(p),
        }
    }

    ///
    /// Mirror a range so that it still reads begin <= end
    ///
    pub fn range(&self, begin: usize, end: usize) -> (usize, usize) {
        (self.mirror(end), self.mirror(begin))
    }

    ///
    /// Proteolysis products keep their bounds under a pinned initiator: they
    /// denote fixed terminal fragments. Otherwise they mirror.
    ///
    pub fn proteolysis_product(&self, begin: usize, end: usize) -> (usize, usize) {
        if self.initiator {
            (begin, end)
        } else {
            self.range(begin, end)
        }
    }

    ///
    /// Both bond endpoints follow their residues; a bond anchored on the
    /// initiator stays anchored on it.
    ///
    pub fn disulfide_bond(&self, begin: usize, end: usize) -> (usize, usize) {
        let (a, b) = (self.position(begin), self.position(end));
        (a.min(b), a.max(b))
    }

    pub fn splice_site(&self, begin: usize, end: usize) -> (usize, usize) {
        match (self.initiator, begin, end) {
            (true, 1, 1) => (1, 1),
            (true, 1, _) => {
                let decoy_end = self.length + 1 - begin;
                (decoy_end + begin - end, decoy_end)
            }
            (true, _, _) => (self.length + 2 - end, self.length + 2 - begin),
            (false, _, _) => self.range(begin, end),
        }
    }

    ///
    /// Mirror anchor for a variant spanning `begin..=end` whose (trimmed)
    /// original run has `original_length` residues.
    ///
    /// end' = L - begin + 2 + [end == L] - [begin == 1],
    /// begin' = end' - original_length + 1
    ///
    /// `end'` overshoots by one when the variant starts at 1 or 2 and runs to
    /// the last residue; it is clamped to L and `begin'` keeps the width.
    ///
    pub fn variant_anchor(
        &self,
        begin: usize,
        end: usize,
        original_length: usize,
    ) -> (usize, usize) {
        let decoy_end = (self.length + 2 - begin + usize::from(end == self.length)
            - usize::from(begin == 1))
        .min(self.length);
        // an empty original run anchors on a single position
        let decoy_begin = (decoy_end + 1)
            .saturating_sub(original_length.max(1))
            .max(1);
        (decoy_begin, decoy_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(true, 1, 1)]
    #[case(true, 3, 5)]
    #[case(true, 6, 2)]
    #[case(false, 1, 6)]
    #[case(false, 3, 4)]
    fn test_position(#[case] initiator: bool, #[case] position: usize, #[case] expected: usize) {
        let frame = ReverseCoordinates::new(6, initiator);
        assert_eq!(frame.position(position), expected);
    }

    #[rstest]
    fn test_position_is_an_involution() {
        for initiator in [true, false] {
            let frame = ReverseCoordinates::new(17, initiator);
            for p in 1..=17 {
                assert_eq!(frame.position(frame.position(p)), p);
            }
        }
    }

    #[rstest]
    #[case(true, (2, 4), (2, 4))]
    #[case(false, (2, 4), (7, 9))]
    #[case(false, (1, 10), (1, 10))]
    fn test_proteolysis_product(
        #[case] initiator: bool,
        #[case] input: (usize, usize),
        #[case] expected: (usize, usize),
    ) {
        let frame = ReverseCoordinates::new(10, initiator);
        assert_eq!(frame.proteolysis_product(input.0, input.1), expected);
    }

    #[rstest]
    #[case(true, (3, 8), (4, 9))]
    #[case(true, (1, 5), (1, 7))]
    #[case(false, (3, 8), (3, 8))]
    #[case(false, (2, 4), (7, 9))]
    fn test_disulfide_bond(
        #[case] initiator: bool,
        #[case] input: (usize, usize),
        #[case] expected: (usize, usize),
    ) {
        let frame = ReverseCoordinates::new(10, initiator);
        assert_eq!(frame.disulfide_bond(input.0, input.1), expected);
    }

    #[rstest]
    #[case(true, (1, 1), (1, 1))]
    #[case(true, (1, 3), (8, 10))]
    #[case(true, (4, 6), (6, 8))]
    #[case(false, (4, 6), (5, 7))]
    fn test_splice_site(
        #[case] initiator: bool,
        #[case] input: (usize, usize),
        #[case] expected: (usize, usize),
    ) {
        let frame = ReverseCoordinates::new(10, initiator);
        assert_eq!(frame.splice_site(input.0, input.1), expected);
    }

    #[rstest]
    fn test_splice_site_preserves_width() {
        for initiator in [true, false] {
            let frame = ReverseCoordinates::new(12, initiator);
            for begin in 1..=12 {
                for end in begin..=12 {
                    let (b, e) = frame.splice_site(begin, end);
                    assert!(b <= e);
                    assert_eq!(e - b, end - begin);
                }
            }
        }
    }

    #[rstest]
    #[case((3, 3, 1), (9, 9))]
    #[case((1, 3, 2), (9, 10))]
    #[case((5, 10, 6), (3, 8))]
    #[case((1, 1, 0), (10, 10))]
    #[case((1, 10, 9), (2, 10))]
    #[case((2, 10, 9), (2, 10))]
    fn test_variant_anchor(
        #[case] input: (usize, usize, usize),
        #[case] expected: (usize, usize),
    ) {
        let frame = ReverseCoordinates::new(10, true);
        assert_eq!(frame.variant_anchor(input.0, input.1, input.2), expected);
    }

    #[rstest]
    fn test_variant_anchor_stays_inside_sequence() {
        for initiator in [true, false] {
            let frame = ReverseCoordinates::new(12, initiator);
            for begin in 1..=12 {
                for end in begin..=12 {
                    let (b, e) = frame.variant_anchor(begin, end, end - begin + 1);
                    assert!(b >= 1 && b <= e && e <= 12, "({begin}, {end}) -> ({b}, {e})");
                }
            }
        }
    }
}
