//! Stable sorting by a derived key.

use crate::lookup::Field;
use crate::lookup::Lookup;
use crate::ops::map;

/// Derives the key an element is sorted by.
///
/// A closure returns the key directly; a [`Field`] reads it from a named
/// property. `None` marks an absent key.
pub trait SortKey<T> {
    type Key: PartialOrd;

    fn key(&mut self, item: &T) -> Option<Self::Key>;
}

impl<T, K, F> SortKey<T> for F
where
    F: FnMut(&T) -> Option<K>,
    K: PartialOrd,
{
    type Key = K;

    fn key(&mut self, item: &T) -> Option<K> {
        return self(item);
    }
}

impl<T, Q> SortKey<T> for Field<'_, Q>
where
    T: Lookup<Q>,
    T::Output: PartialOrd + Clone,
    Q: ?Sized,
{
    type Key = T::Output;

    fn key(&mut self, item: &T) -> Option<T::Output> {
        return item.lookup(self.0).cloned();
    }
}

/// Whether two adjacent keys must trade places.
///
/// Absent keys belong after present ones. Equal keys never swap, which is
/// what keeps the sort stable.
fn out_of_order<K: PartialOrd>(left: &Option<K>, right: &Option<K>) -> bool {
    match (left, right) {
        (None, Some(_)) => true,
        (Some(l), Some(r)) => l > r,
        _ => false,
    }
}

/// A copy of `sequence` sorted ascending by key, absent keys last.
///
/// Each key is derived once. Elements with equal keys, and elements that
/// both lack a key, keep their relative order.
pub fn sort_by<T: Clone, S: SortKey<T>>(sequence: &[T], mut key: S) -> Vec<T> {
    let mut keyed = map(sequence, |item| (key.key(item), item.clone()));
    let len = keyed.len();

    // Bubble sort: every pass settles the largest remaining key at the end.
    for pass in 0..len {
        let mut swapped = false;
        for j in 0..len - pass - 1 {
            if out_of_order(&keyed[j].0, &keyed[j + 1].0) {
                keyed.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    return keyed.into_iter().map(|(_, item)| item).collect();
}
