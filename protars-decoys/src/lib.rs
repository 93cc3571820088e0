//! # protars-decoys
//!
//! Deterministic decoy generation for target-decoy false discovery rate
//! estimation.
//!
//! ## Purpose
//!
//! Given fully resolved target records, this crate derives one decoy per
//! record. Only the sequence and the positional annotations change: every
//! modification, proteolysis product, disulfide bond, splice site and
//! sequence variation is carried through the same transform as the
//! residues it sits on.
//!
//! ## Transforms
//!
//! - **Reverse** ([ReverseTransform]): the sequence read backwards.
//! - **Slide** ([SlideTransform]): residues moved by the reflected-translation
//!   permutation in [permutation].
//!
//! Both keep a leading initiator methionine in place.
//!
//! ## Example
//!
//! ```rust
//! use protars_core::models::BioPolymerRecord;
//! use protars_decoys::{DecoyConfig, DecoyType, generate_decoys};
//!
//! let records = vec![BioPolymerRecord::new("P12345", "MABCDE")];
//! let decoys = generate_decoys(&records, &DecoyConfig::new(DecoyType::Reverse)).unwrap();
//!
//! assert_eq!(decoys[0].accession, "DECOY_P12345");
//! assert_eq!(decoys[0].sequence, "MEDCBA");
//! ```
//!
pub mod config;
pub mod coordinates;
pub mod error;
pub mod generator;
pub mod permutation;
pub mod reverse;
pub mod slide;
pub mod transform;
pub mod validate;
pub mod variants;

// re-export things
pub use config::*;
pub use error::*;
pub use generator::*;
pub use reverse::*;
pub use slide::*;
pub use transform::*;

// constants
pub mod consts {
    pub const DECOYS_CMD: &str = "decoys";
    pub const DEFAULT_DECOY_IDENTIFIER: &str = "DECOY";
    pub const DEFAULT_SHIFT: usize = 20;
    pub const DEFAULT_OUT: &str = "decoys.json";
}
