//! Cache results by argument value.
//!
//! The memo key is the JSON serialization of the argument value, so several
//! arguments are passed as a tuple and keyed like a JSON array. Keys are
//! only canonical for primitive arguments: numbers, strings, booleans, and
//! tuples or arrays of those. Maps with unordered keys make no such promise.
//!
//! The table grows with every distinct argument and is never evicted.

use std::marker::PhantomData;

use rustc_hash::FxHashMap;
use serde::Serialize;
use thiserror::Error;
use tracing::trace;

/// Error returned when a call cannot be keyed.
#[derive(Debug, Error)]
pub enum MemoizeError {
    #[error("arguments cannot be serialized into a memo key: {0}")]
    Key(#[from] serde_json::Error),
}

/// A wrapper that calls its function once per distinct argument value.
pub struct Memoize<A, R, F> {
    func: F,
    /// Map from serialized arguments to result.
    table: FxHashMap<String, R>,
    _args: PhantomData<fn(A)>,
}

/// Wrap `func` so that repeated arguments reuse the stored result.
pub fn memoize<A, R, F>(func: F) -> Memoize<A, R, F>
where
    A: Serialize,
    F: FnMut(A) -> R,
    R: Clone,
{
    return Memoize {
        func,
        table: FxHashMap::default(),
        _args: PhantomData,
    };
}

impl<A, R, F> Memoize<A, R, F>
where
    A: Serialize,
    F: FnMut(A) -> R,
    R: Clone,
{
    /// Return the stored result for `args`, computing it on first sight.
    pub fn call(&mut self, args: A) -> Result<R, MemoizeError> {
        let key = serde_json::to_string(&args)?;
        if let Some(result) = self.table.get(&key) {
            return Ok(result.clone());
        }

        trace!(key = %key, "memoize: miss");
        let result = (self.func)(args);
        self.table.insert(key, result.clone());
        return Ok(result);
    }

    /// Number of distinct argument values seen.
    #[inline]
    pub fn len(&self) -> usize {
        return self.table.len();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.table.is_empty();
    }
}
