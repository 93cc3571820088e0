pub mod features;
pub mod modification;
pub mod record;
pub mod variation;

// re-export for cleaner imports
pub use self::features::{DisulfideBond, ProteolysisProduct, Span, SpliceSite};
pub use self::modification::{Modification, ModificationMap};
pub use self::record::{BioPolymerRecord, EntryTags};
pub use self::variation::SequenceVariation;
