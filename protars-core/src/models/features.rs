use serde::{Deserialize, Serialize};

///
/// A one-based, inclusive range annotated on a record
///
pub trait Span {
    /// Human readable name of the annotation kind, used in error messages
    const KIND: &'static str;

    fn begin(&self) -> usize;

    fn end(&self) -> usize;

    ///
    /// Number of residues covered; zero for an inverted range
    ///
    fn width(&self) -> usize {
        (self.end() + 1).saturating_sub(self.begin())
    }
}

/// A known cleavage fragment, e.g. a signal peptide or mature chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteolysisProduct {
    pub begin: usize,
    pub end: usize,
    pub product_type: String,
}

/// A covalent cross-link between two residues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisulfideBond {
    pub begin: usize,
    pub end: usize,
    pub description: String,
}

/// An exon junction annotated over a residue range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpliceSite {
    pub begin: usize,
    pub end: usize,
    pub description: String,
}

impl ProteolysisProduct {
    pub fn new(begin: usize, end: usize, product_type: &str) -> Self {
        ProteolysisProduct {
            begin,
            end,
            product_type: product_type.to_string(),
        }
    }
}

impl DisulfideBond {
    pub fn new(begin: usize, end: usize, description: &str) -> Self {
        DisulfideBond {
            begin,
            end,
            description: description.to_string(),
        }
    }
}

impl SpliceSite {
    pub fn new(begin: usize, end: usize, description: &str) -> Self {
        SpliceSite {
            begin,
            end,
            description: description.to_string(),
        }
    }
}

impl Span for ProteolysisProduct {
    const KIND: &'static str = "Proteolysis product";

    fn begin(&self) -> usize {
        self.begin
    }

    fn end(&self) -> usize {
        self.end
    }
}

impl Span for DisulfideBond {
    const KIND: &'static str = "Disulfide bond";

    fn begin(&self) -> usize {
        self.begin
    }

    fn end(&self) -> usize {
        self.end
    }
}

impl Span for SpliceSite {
    const KIND: &'static str = "Splice site";

    fn begin(&self) -> usize {
        self.begin
    }

    fn end(&self) -> usize {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(ProteolysisProduct::new(1, 5, "chain"), 5)]
    #[case(ProteolysisProduct::new(4, 4, "peptide"), 1)]
    #[case(ProteolysisProduct::new(6, 2, "broken"), 0)]
    fn test_width(#[case] product: ProteolysisProduct, #[case] expected: usize) {
        assert_eq!(product.width(), expected);
    }

    #[rstest]
    fn test_kinds() {
        assert_eq!(DisulfideBond::KIND, "Disulfide bond");
        assert_eq!(SpliceSite::KIND, "Splice site");
    }
}
