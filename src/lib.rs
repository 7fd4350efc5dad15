//! Underbar - functional helpers built from a handful of primitives.
//!
//! Every collection operation here is derived from one traversal,
//! [`each`], which walks either shape of [`Collection`]: an ordered
//! sequence or an insertion-ordered [`Mapping`].
//!
//! # Quick Start
//!
//! ```
//! use underbar::Mapping;
//! use underbar::filter;
//! use underbar::reduce;
//! use underbar::sort_by;
//! use underbar::Field;
//!
//! let evens = filter(&[1, 2, 3, 4], |n| n % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let sum = reduce(&[1, 2, 3], |total, n| Some(total + n), Some(0));
//! assert_eq!(sum, Some(6));
//!
//! let rows: Vec<Mapping<&str, i32>> = vec![
//!     Mapping::from([("n", 3)]),
//!     Mapping::from([("n", 1)]),
//! ];
//! let sorted = sort_by(&rows, Field("n"));
//! assert_eq!(sorted[0].get("n"), Some(&1));
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | `collection` | `each`, `index_of`, `first`, `last` |
//! | `ops` | filter, reject, uniq, map, pluck, reduce, fold, contains, every, some |
//! | `merge` | `extend`, `defaults` |
//! | `decorators` | `once`, `memoize`, `delay`, `throttle` |
//! | `algorithms` | shuffle, invoke, sort_by, zip, flatten, intersection, difference |
//!
//! Absent values are `None` throughout: a reduce with no seed, a missing
//! property, a zip position past the end of a shorter input.

pub mod algorithms;
pub mod collection;
pub mod decorators;
pub mod lookup;
pub mod mapping;
pub mod merge;
pub mod ops;
pub mod truthy;

pub use algorithms::Invocation;
pub use algorithms::InvokeError;
pub use algorithms::Method;
pub use algorithms::Methods;
pub use algorithms::Nested;
pub use algorithms::Row;
pub use algorithms::SortKey;
pub use algorithms::difference;
pub use algorithms::flatten;
pub use algorithms::intersection;
pub use algorithms::invoke;
pub use algorithms::shuffle;
pub use algorithms::shuffle_with;
pub use algorithms::sort_by;
pub use algorithms::zip;
pub use collection::AsCollection;
pub use collection::Collection;
pub use collection::Key;
pub use collection::each;
pub use collection::first;
pub use collection::index_of;
pub use collection::last;
pub use decorators::Clock;
pub use decorators::DelayError;
pub use decorators::Memoize;
pub use decorators::MemoizeError;
pub use decorators::Once;
pub use decorators::SystemClock;
pub use decorators::Throttle;
pub use decorators::delay;
pub use decorators::memoize;
pub use decorators::once;
pub use decorators::throttle;
pub use decorators::throttle_with_clock;
pub use lookup::Field;
pub use lookup::Lookup;
pub use mapping::Mapping;
pub use merge::defaults;
pub use merge::extend;
pub use ops::contains;
pub use ops::every;
pub use ops::filter;
pub use ops::fold;
pub use ops::map;
pub use ops::pluck;
pub use ops::reduce;
pub use ops::reject;
pub use ops::some;
pub use ops::uniq;
pub use truthy::Truthy;
pub use truthy::identity;
pub use truthy::truthy;
