//! Pairing up sequences index by index.

use smallvec::SmallVec;

use crate::collection::each;
use crate::ops::fold;

/// One tuple of a zip: the i-th element of every input, `None` where an
/// input is too short.
pub type Row<T> = SmallVec<[Option<T>; 4]>;

/// Zip sequences into rows, padding shorter inputs with `None`.
///
/// There are as many rows as the longest input has elements.
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Vec<Row<T>> {
    let longest = fold(
        sequences,
        |len, sequence| if sequence.len() > *len { Some(sequence.len()) } else { None },
        0,
    );

    let mut result = Vec::with_capacity(longest);
    for index in 0..longest {
        let mut row = Row::new();
        each(sequences, |sequence, _, _| row.push(sequence.get(index).cloned()));
        result.push(row);
    }
    return result;
}
