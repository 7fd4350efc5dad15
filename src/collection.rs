//! Uniform traversal over the two collection shapes.
//!
//! Every operation in this crate walks its input through [`each`]. A
//! collection is either an ordered sequence, visited by ascending index, or
//! a [`Mapping`], visited in its own enumeration order.

use std::hash::Hash;

use crate::mapping::Mapping;

/// A borrowed view of either collection shape.
pub enum Collection<'a, K: Clone + Eq + Hash, V> {
    Sequence(&'a [V]),
    Mapping(&'a Mapping<K, V>),
}

impl<K: Clone + Eq + Hash, V> Clone for Collection<'_, K, V> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<K: Clone + Eq + Hash, V> Copy for Collection<'_, K, V> {}

impl<K: Clone + Eq + Hash, V> Collection<'_, K, V> {
    /// Number of elements a traversal visits.
    pub fn len(&self) -> usize {
        match self {
            Collection::Sequence(items) => items.len(),
            Collection::Mapping(mapping) => mapping.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }
}

/// Where a visited value lives in its collection.
#[derive(Debug, PartialEq, Eq)]
pub enum Key<'a, K> {
    Index(usize),
    Name(&'a K),
}

impl<K> Clone for Key<'_, K> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<K> Copy for Key<'_, K> {}

/// Anything that can be traversed as a [`Collection`].
///
/// Sequences report `usize` as their key type even though they hand out
/// [`Key::Index`] positions; the key type only matters for mappings.
pub trait AsCollection {
    type Key: Clone + Eq + Hash;
    type Value;

    fn as_collection(&self) -> Collection<'_, Self::Key, Self::Value>;
}

impl<V> AsCollection for [V] {
    type Key = usize;
    type Value = V;

    fn as_collection(&self) -> Collection<'_, usize, V> {
        return Collection::Sequence(self);
    }
}

impl<V> AsCollection for Vec<V> {
    type Key = usize;
    type Value = V;

    fn as_collection(&self) -> Collection<'_, usize, V> {
        return Collection::Sequence(self.as_slice());
    }
}

impl<V, const N: usize> AsCollection for [V; N] {
    type Key = usize;
    type Value = V;

    fn as_collection(&self) -> Collection<'_, usize, V> {
        return Collection::Sequence(self.as_slice());
    }
}

impl<K: Clone + Eq + Hash, V> AsCollection for Mapping<K, V> {
    type Key = K;
    type Value = V;

    fn as_collection(&self) -> Collection<'_, K, V> {
        return Collection::Mapping(self);
    }
}

impl<K: Clone + Eq + Hash, V> AsCollection for Collection<'_, K, V> {
    type Key = K;
    type Value = V;

    fn as_collection(&self) -> Collection<'_, K, V> {
        return *self;
    }
}

/// Call `visitor(value, key, collection)` for every element.
///
/// Sequences are visited from index 0 upward; mappings in enumeration order.
/// The visitor is called for its side effects only.
pub fn each<'a, C, F>(collection: &'a C, mut visitor: F)
where
    C: AsCollection + ?Sized,
    F: FnMut(&'a C::Value, Key<'a, C::Key>, Collection<'a, C::Key, C::Value>),
{
    let view = collection.as_collection();
    match view {
        Collection::Sequence(items) => {
            for (i, item) in items.iter().enumerate() {
                visitor(item, Key::Index(i), view);
            }
        }
        Collection::Mapping(mapping) => {
            for (name, value) in mapping.iter() {
                visitor(value, Key::Name(name), view);
            }
        }
    }
}

/// The smallest index holding a value equal to `target`.
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    let mut found = None;

    each(sequence, |item, key, _| {
        if found.is_some() || item != target {
            return;
        }
        if let Key::Index(i) = key {
            found = Some(i);
        }
    });

    return found;
}

/// The first element, or the first `count` elements.
///
/// Without a count the result holds at most one element. A count larger
/// than the sequence is clamped.
pub fn first<T>(sequence: &[T], count: Option<usize>) -> &[T] {
    let n = count.unwrap_or(1).min(sequence.len());
    return &sequence[..n];
}

/// The last element, or the last `count` elements.
pub fn last<T>(sequence: &[T], count: Option<usize>) -> &[T] {
    let n = count.unwrap_or(1).min(sequence.len());
    return &sequence[sequence.len() - n..];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_visits_sequence_in_index_order() {
        let items = vec!["a", "b", "c"];
        let mut seen = Vec::new();

        each(&items, |value, key, collection| {
            assert_eq!(collection.len(), 3);
            seen.push((*value, key));
        });

        assert_eq!(seen, vec![
            ("a", Key::Index(0)),
            ("b", Key::Index(1)),
            ("c", Key::Index(2)),
        ]);
    }

    #[test]
    fn each_visits_mapping_in_enumeration_order() {
        let mapping = Mapping::from([("b", 2), ("a", 1), ("c", 3)]);
        let mut seen = Vec::new();

        each(&mapping, |value, key, _| {
            if let Key::Name(name) = key {
                seen.push((*name, *value));
            }
        });

        assert_eq!(seen, vec![("b", 2), ("a", 1), ("c", 3)]);
    }

    #[test]
    fn each_on_empty_does_nothing() {
        let items: Vec<i32> = Vec::new();
        let mut calls = 0;
        each(&items, |_, _, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn index_of_first_match_wins() {
        assert_eq!(index_of(&[10, 20, 30, 20], &20), Some(1));
        assert_eq!(index_of(&[10, 20, 30], &10), Some(0));
        assert_eq!(index_of(&[10, 20, 30], &40), None);
        assert_eq!(index_of::<i32>(&[], &1), None);
    }

    #[test]
    fn first_and_last() {
        let items = [1, 2, 3];

        assert_eq!(first(&items, None), &[1]);
        assert_eq!(first(&items, Some(0)), &[] as &[i32]);
        assert_eq!(first(&items, Some(2)), &[1, 2]);
        assert_eq!(first(&items, Some(5)), &[1, 2, 3]);

        assert_eq!(last(&items, None), &[3]);
        assert_eq!(last(&items, Some(0)), &[] as &[i32]);
        assert_eq!(last(&items, Some(2)), &[2, 3]);
        assert_eq!(last(&items, Some(5)), &[1, 2, 3]);

        let empty: [i32; 0] = [];
        assert!(first(&empty, None).is_empty());
        assert!(last(&empty, None).is_empty());
    }
}
