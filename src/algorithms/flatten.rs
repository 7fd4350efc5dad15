//! Flattening arbitrarily nested sequences.

use crate::collection::each;

/// A value, or a sequence of further nested values.
#[derive(Clone, Debug, PartialEq)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn leaf(value: T) -> Nested<T> {
        return Nested::Leaf(value);
    }

    pub fn list(items: impl IntoIterator<Item = Nested<T>>) -> Nested<T> {
        return Nested::List(items.into_iter().collect());
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        return Nested::List(items);
    }
}

/// Every leaf value, depth first and left to right.
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut result = Vec::new();
    each(nested, |node, _, _| descend(node, &mut result));
    return result;
}

fn descend<T: Clone>(node: &Nested<T>, result: &mut Vec<T>) {
    match node {
        Nested::Leaf(value) => result.push(value.clone()),
        Nested::List(children) => each(children, |child, _, _| descend(child, result)),
    }
}
