//! Reflected-translation index permutation used by slide decoys.
//!
//! Even indices move forward by `shift`, odd indices move backward; any
//! candidate that falls off either end of the sequence is reflected back in
//! until it lands inside `[0, length)`. The mapping must stay bit-for-bit
//! stable: downstream FDR tooling compares decoys across runs and tools.

use crate::consts::DEFAULT_SHIFT;

///
/// Map `index` to its source index in a slide decoy.
///
/// With `initiator` set, index 0 is pinned and the remaining `length - 1`
/// positions are permuted among themselves.
///
/// # Arguments
/// - index: zero-based index in `[0, length)`
/// - shift: translation distance, see [adjusted_shift]
/// - length: full sequence length
/// - initiator: whether the sequence starts with a fixed initiator residue
///
pub fn permute(index: usize, shift: usize, length: usize, initiator: bool) -> usize {
    if initiator {
        if index == 0 || length == 0 {
            return index;
        }
        return reflect(index - 1, shift, length - 1) + 1;
    }
    reflect(index, shift, length)
}

fn reflect(index: usize, shift: usize, length: usize) -> usize {
    // nothing to move, and the reflection below would never settle on an
    // empty space
    if length <= 1 {
        return index;
    }

    let length = length as isize;
    let shift = shift as isize;
    let index = index as isize;

    let mut candidate = if index % 2 == 0 {
        index + shift
    } else {
        index - shift
    };

    loop {
        if candidate < 0 {
            candidate = -candidate - 1;
        } else if candidate >= length {
            candidate = 2 * length - candidate - 1;
        } else {
            return candidate as usize;
        }
    }
}

///
/// Bump `shift` by one when it is a whole multiple of the permuted length,
/// where every index would reflect back onto its neighbour pairing.
///
pub fn adjusted_shift(shift: usize, length: usize) -> usize {
    if length > 0 && shift % length == 0 {
        shift + 1
    } else {
        shift
    }
}

///
/// Slide a standalone run of residues (no initiator pinning), using the
/// default shift adjusted for the run's own length.
///
pub fn slide_run(residues: &[char]) -> Vec<char> {
    let length = residues.len();
    let shift = adjusted_shift(DEFAULT_SHIFT, length);
    (0..length)
        .map(|i| residues[permute(i, shift, length, false)])
        .collect()
}
