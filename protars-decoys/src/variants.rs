//! Helpers shared by the reverse and slide handling of sequence variations.

use protars_core::consts::INITIATOR;
use protars_core::models::SequenceVariation;

pub fn starts_with_initiator(run: &[char]) -> bool {
    run.first() == Some(&INITIATOR)
}

///
/// Drop the first residue of a run, if any
///
pub fn trim_leading(run: &mut Vec<char>) {
    if !run.is_empty() {
        run.remove(0);
    }
}

///
/// Length of the reference sequence once `variation` has been applied to it
///
pub fn variant_length(reference_length: usize, variation: &SequenceVariation) -> usize {
    (reference_length as isize + variation.length_delta()).max(0) as usize
}

pub fn variant_description(identifier: &str, description: &str) -> String {
    format!("{} VARIANT: {}", identifier, description)
}

///
/// Single-residue variation recording that `variation` removes the
/// initiator residue.
///
pub fn initiator_change(identifier: &str, variation: &SequenceVariation) -> SequenceVariation {
    SequenceVariation::new(
        1,
        1,
        &INITIATOR.to_string(),
        "",
        &format!(
            "{} VARIANT: Initiator Methionine Change in {}",
            identifier, variation.description
        ),
    )
}
