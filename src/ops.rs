//! Collection operations derived from [`each`].
//!
//! Nothing here loops over a collection directly. Everything is built on
//! `each`, or on `reduce`/`fold`, which are themselves built on `each`.
//!
//! # The absent-result rule
//!
//! `reduce` and `fold` leave the accumulator untouched when `combine`
//! returns `None`. `contains`, `every` and `some` lean on this: once their
//! outcome is settled they return `None` for every later element, which
//! keeps the settled value and skips the predicate.

use crate::collection::AsCollection;
use crate::collection::each;
use crate::lookup::Lookup;
use crate::truthy::Truthy;

/// Elements for which `predicate` is truthy, in iteration order.
///
/// The predicate is called exactly once per element.
pub fn filter<C, P, R>(collection: &C, mut predicate: P) -> Vec<C::Value>
where
    C: AsCollection + ?Sized,
    C::Value: Clone,
    P: FnMut(&C::Value) -> R,
    R: Truthy,
{
    let mut result = Vec::new();
    each(collection, |item, _, _| {
        if predicate(item).is_truthy() {
            result.push(item.clone());
        }
    });
    return result;
}

/// Elements for which `predicate` is falsy, in iteration order.
pub fn reject<C, P, R>(collection: &C, mut predicate: P) -> Vec<C::Value>
where
    C: AsCollection + ?Sized,
    C::Value: Clone,
    P: FnMut(&C::Value) -> R,
    R: Truthy,
{
    return filter(collection, |item| !predicate(item).is_truthy());
}

/// The first occurrence of each distinct value, in order.
pub fn uniq<T: PartialEq + Clone>(sequence: &[T]) -> Vec<T> {
    let mut result: Vec<T> = Vec::new();
    each(sequence, |item, _, _| {
        if !contains(&result, item) {
            result.push(item.clone());
        }
    });
    return result;
}

/// `transform` applied to every element, in iteration order.
pub fn map<C, F, U>(collection: &C, mut transform: F) -> Vec<U>
where
    C: AsCollection + ?Sized,
    F: FnMut(&C::Value) -> U,
{
    let mut result = Vec::new();
    each(collection, |item, _, _| result.push(transform(item)));
    return result;
}

/// The property `name` of every element, `None` where it is missing.
pub fn pluck<C, Q>(collection: &C, name: &Q) -> Vec<Option<<C::Value as Lookup<Q>>::Output>>
where
    C: AsCollection + ?Sized,
    C::Value: Lookup<Q>,
    <C::Value as Lookup<Q>>::Output: Clone,
    Q: ?Sized,
{
    return map(collection, |item| item.lookup(name).cloned());
}

/// Combine elements pairwise into one value.
///
/// Without a seed the first element becomes the accumulator and is never
/// passed to `combine`. Every later element calls `combine(accumulator,
/// element)`; a `None` result leaves the accumulator as it was. An empty
/// collection without a seed reduces to `None`.
pub fn reduce<C, F>(collection: &C, mut combine: F, seed: Option<C::Value>) -> Option<C::Value>
where
    C: AsCollection + ?Sized,
    C::Value: Clone,
    F: FnMut(&C::Value, &C::Value) -> Option<C::Value>,
{
    let mut accumulator = seed;
    each(collection, |item, _, _| {
        accumulator = match accumulator.take() {
            None => Some(item.clone()),
            Some(current) => match combine(&current, item) {
                Some(next) => Some(next),
                None => Some(current),
            },
        };
    });
    return accumulator;
}

/// The seeded form of [`reduce`], with an accumulator of any type.
pub fn fold<C, A, F>(collection: &C, mut combine: F, seed: A) -> A
where
    C: AsCollection + ?Sized,
    F: FnMut(&A, &C::Value) -> Option<A>,
{
    let mut accumulator = seed;
    each(collection, |item, _, _| {
        if let Some(next) = combine(&accumulator, item) {
            accumulator = next;
        }
    });
    return accumulator;
}

/// Whether some element equals `target`.
pub fn contains<C>(collection: &C, target: &C::Value) -> bool
where
    C: AsCollection + ?Sized,
    C::Value: PartialEq,
{
    return fold(
        collection,
        |found, item| if *found { None } else { Some(item == target) },
        false,
    );
}

/// Whether `predicate` is truthy for every element. True when empty.
pub fn every<C, P, R>(collection: &C, mut predicate: P) -> bool
where
    C: AsCollection + ?Sized,
    P: FnMut(&C::Value) -> R,
    R: Truthy,
{
    return fold(
        collection,
        |passing, item| if *passing { Some(predicate(item).is_truthy()) } else { None },
        true,
    );
}

/// Whether `predicate` is truthy for at least one element. False when empty.
///
/// The predicate is not called again after the first success.
pub fn some<C, P, R>(collection: &C, mut predicate: P) -> bool
where
    C: AsCollection + ?Sized,
    P: FnMut(&C::Value) -> R,
    R: Truthy,
{
    return fold(
        collection,
        |found, item| if *found { None } else { Some(predicate(item).is_truthy()) },
        false,
    );
}
