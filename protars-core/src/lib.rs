//! # protars-core
//!
//! Shared data model for protars: biopolymer records, their localized
//! modifications, and the positional annotations (proteolysis products,
//! disulfide bonds, splice sites, sequence variations) that travel with them.
//!
//! Records are produced by external loaders and treated as immutable
//! snapshots; every transformation in the workspace builds new records.

pub mod errors;
pub mod models;
pub mod utils;

pub mod consts {
    /// Initiator residue, never scrambled by decoy transforms
    pub const INITIATOR: char = 'M';
}
