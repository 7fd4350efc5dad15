//! Named lookups on elements.
//!
//! `pluck` and `sort_by` can address an element's property by name. An
//! element opts in by implementing [`Lookup`] for the kind of name it
//! understands.

use std::borrow::Borrow;
use std::hash::Hash;

use crate::mapping::Mapping;

/// Look up a property by name.
pub trait Lookup<Q: ?Sized> {
    type Output;

    /// The property's value, or `None` when the element has no such property.
    fn lookup(&self, name: &Q) -> Option<&Self::Output>;
}

impl<K, V, Q> Lookup<Q> for Mapping<K, V>
where
    K: Clone + Eq + Hash + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = V;

    fn lookup(&self, name: &Q) -> Option<&V> {
        return self.get(name);
    }
}

impl<T> Lookup<usize> for [T] {
    type Output = T;

    fn lookup(&self, name: &usize) -> Option<&T> {
        return self.get(*name);
    }
}

impl<T> Lookup<usize> for Vec<T> {
    type Output = T;

    fn lookup(&self, name: &usize) -> Option<&T> {
        return self.get(*name);
    }
}

/// A property name, used where a closure would otherwise derive a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field<'a, Q: ?Sized>(pub &'a Q);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_lookup() {
        let person: Mapping<String, u32> = Mapping::from([("age".to_string(), 30)]);
        assert_eq!(person.lookup("age"), Some(&30));
        assert_eq!(person.lookup("name"), None);
    }

    #[test]
    fn sequence_lookup_by_index() {
        let row = vec!["x", "y"];
        assert_eq!(row.lookup(&1), Some(&"y"));
        assert_eq!(row.lookup(&2), None);
    }
}
