use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A localized modification that may occupy one residue of a record.
///
/// Decoy generation treats modifications as opaque payloads: only the
/// position they are keyed under changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modification {
    pub id: String,
    #[serde(default)]
    pub modification_type: Option<String>,
    /// Residue motif the modification targets, e.g. `K`
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub location_restriction: Option<String>,
    #[serde(default)]
    pub monoisotopic_mass: Option<f64>,
}

impl Modification {
    pub fn new(id: &str) -> Self {
        Modification {
            id: id.to_string(),
            modification_type: None,
            target: None,
            location_restriction: None,
            monoisotopic_mass: None,
        }
    }
}

impl Display for Modification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Some(target) => write!(f, "{} on {}", self.id, target),
            None => write!(f, "{}", self.id),
        }
    }
}

/// One-based position -> modifications possible at that position.
///
/// Position 1 is the N-terminus regardless of residue identity. A `BTreeMap`
/// keeps serialized output stable across runs.
pub type ModificationMap = BTreeMap<usize, Vec<Modification>>;
