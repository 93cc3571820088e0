//! Sanity checks on generated decoys.
//!
//! A palindromic target reverses onto itself, so its reverse decoy produces
//! exactly the target peptides and contributes nothing to the null model.

///
/// Count residue pairs that match reading inward from both ends. The middle
/// residue of a fully palindromic odd-length sequence counts as a match.
///
pub fn palindromic_degree(residues: &[char]) -> usize {
    let length = residues.len();
    let mut degree = 0;
    for i in 0..length.div_ceil(2) {
        if residues[i] != residues[length - 1 - i] {
            break;
        }
        degree += 1;
    }
    degree
}

///
/// Whether `residues` reads (close enough to) the same in both directions.
///
/// With no cutoff the whole sequence must be a palindrome; otherwise at
/// least `cutoff` pairs must match from the ends inward. An empty sequence
/// is never palindromic.
///
pub fn is_palindromic(residues: &[char], cutoff: Option<usize>) -> bool {
    if residues.is_empty() {
        return false;
    }
    let degree = palindromic_degree(residues);
    match cutoff {
        Some(cutoff) => degree >= cutoff,
        None => degree == residues.len().div_ceil(2),
    }
}
