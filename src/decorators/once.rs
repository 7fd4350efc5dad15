//! Call a function at most once.

use std::marker::PhantomData;

use tracing::debug;

/// A wrapper that runs its function on the first call only.
///
/// The wrapper is either not yet called (`result` is `None`) or called, in
/// which case every later call returns a clone of the first result without
/// touching the function again.
pub struct Once<A, R, F> {
    func: F,
    result: Option<R>,
    _args: PhantomData<fn(A)>,
}

/// Wrap `func` so that it runs at most once.
pub fn once<A, R, F>(func: F) -> Once<A, R, F>
where
    F: FnMut(A) -> R,
    R: Clone,
{
    return Once {
        func,
        result: None,
        _args: PhantomData,
    };
}

impl<A, R, F> Once<A, R, F>
where
    F: FnMut(A) -> R,
    R: Clone,
{
    /// Call the wrapped function, or return the cached result.
    ///
    /// Arguments to every call after the first are ignored.
    pub fn call(&mut self, args: A) -> R {
        if let Some(result) = &self.result {
            return result.clone();
        }

        debug!("once: running wrapped function");
        let result = (self.func)(args);
        self.result = Some(result.clone());
        return result;
    }

    /// Whether the wrapped function has run.
    #[inline]
    pub fn is_called(&self) -> bool {
        return self.result.is_some();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_exactly_once() {
        let mut num = 0;
        let mut increment = once(|()| {
            num += 1;
            num
        });

        assert!(!increment.is_called());
        assert_eq!(increment.call(()), 1);
        assert_eq!(increment.call(()), 1);
        assert_eq!(increment.call(()), 1);
        assert!(increment.is_called());

        drop(increment);
        assert_eq!(num, 1);
    }

    #[test]
    fn later_arguments_are_ignored() {
        let mut add = once(|(a, b): (i32, i32)| a + b);
        assert_eq!(add.call((1, 2)), 3);
        assert_eq!(add.call((10, 20)), 3);
    }

    #[test]
    fn separate_wrappers_are_independent() {
        let mut first = once(|n: i32| n * 2);
        let mut second = once(|n: i32| n * 2);

        assert_eq!(first.call(1), 2);
        assert_eq!(second.call(5), 10);
        assert_eq!(first.call(5), 2);
    }
}
