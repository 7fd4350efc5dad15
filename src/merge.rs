//! Merging key mappings into one another.

use std::hash::Hash;

use crate::collection::Key;
use crate::collection::each;
use crate::mapping::Mapping;

/// Copy every entry of every source into `destination`.
///
/// Sources are applied in order and each source in its enumeration order,
/// so later sources win when they share a key.
pub fn extend<'d, K, V>(destination: &'d mut Mapping<K, V>, sources: &[&Mapping<K, V>]) -> &'d mut Mapping<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    each(sources, |source, _, _| {
        each(*source, |value, key, _| {
            if let Key::Name(name) = key {
                destination.insert(name.clone(), value.clone());
            }
        });
    });
    return destination;
}

/// Fill in keys of `destination` that are absent, leaving present ones alone.
///
/// When several sources supply the same missing key the earliest source
/// wins, since the key is present after its first write.
pub fn defaults<'d, K, V>(destination: &'d mut Mapping<K, V>, sources: &[&Mapping<K, V>]) -> &'d mut Mapping<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    each(sources, |source, _, _| {
        each(*source, |value, key, _| {
            if let Key::Name(name) = key {
                if !destination.contains_key(name) {
                    destination.insert(name.clone(), value.clone());
                }
            }
        });
    });
    return destination;
}
