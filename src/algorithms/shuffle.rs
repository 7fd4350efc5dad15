//! Random permutations.

use rand::Rng;

/// A copy of `sequence` in uniformly random order.
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    return shuffle_with(sequence, &mut rand::thread_rng());
}

/// Like [`shuffle`], drawing from `rng`.
///
/// Elements are drawn one at a time, uniformly and without replacement,
/// from a working copy. The input is never touched.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(sequence: &[T], rng: &mut R) -> Vec<T> {
    let mut remaining = sequence.to_vec();
    let mut result = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let index = rng.gen_range(0..remaining.len());
        result.push(remaining.swap_remove(index));
    }

    return result;
}
