use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::features::Span;
use super::modification::ModificationMap;

///
/// An allelic difference between a reference sequence and an observed one.
///
/// `begin` and `end` are one-based and inclusive, and always expressed in the
/// coordinate space of the reference (original) sequence: an insertion or
/// deletion therefore covers `end - begin + 1` original residues while its
/// `variant` run may be longer or shorter.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceVariation {
    pub begin: usize,
    pub end: usize,
    pub original: String,
    pub variant: String,
    #[serde(default)]
    pub description: String,
    /// Modifications scoped to the variant allele, keyed by one-based position
    #[serde(default)]
    pub modifications: ModificationMap,
}

impl SequenceVariation {
    pub fn new(begin: usize, end: usize, original: &str, variant: &str, description: &str) -> Self {
        SequenceVariation {
            begin,
            end,
            original: original.to_string(),
            variant: variant.to_string(),
            description: description.to_string(),
            modifications: ModificationMap::new(),
        }
    }

    ///
    /// Variation whose end is implied by the length of the original run
    ///
    pub fn at_position(position: usize, original: &str, variant: &str, description: &str) -> Self {
        let span = original.chars().count().max(1);
        SequenceVariation::new(position, position + span - 1, original, variant, description)
    }

    pub fn with_modifications(mut self, modifications: ModificationMap) -> Self {
        self.modifications = modifications;
        self
    }

    pub fn is_valid(&self) -> bool {
        self.begin > 0 && self.end >= self.begin
    }

    ///
    /// Change in sequence length once this variation is applied
    ///
    pub fn length_delta(&self) -> isize {
        self.variant.chars().count() as isize - self.original.chars().count() as isize
    }

    ///
    /// Compact notation, e.g. `C3K`
    ///
    pub fn simple_string(&self) -> String {
        format!("{}{}{}", self.original, self.begin, self.variant)
    }
}

impl Span for SequenceVariation {
    const KIND: &'static str = "Sequence variation";

    fn begin(&self) -> usize {
        self.begin
    }

    fn end(&self) -> usize {
        self.end
    }
}

impl Display for SequenceVariation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_string())
    }
}
