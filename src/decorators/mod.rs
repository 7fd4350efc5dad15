//! Stateful function wrappers.
//!
//! Each decorator returns a small owned object holding its own state.
//! Wrappers made by separate calls share nothing. Calls take `&mut self`,
//! so one wrapper can only be driven from one place at a time; to share a
//! wrapper across threads, put it behind a `Mutex`, which also makes its
//! check-then-act transitions atomic.
//!
//! | Decorator | State | Behavior |
//! |-----------|-------|----------|
//! | `once` | called or not | first result is cached forever |
//! | `memoize` | table of results | one call per distinct argument value |
//! | `throttle` | window start | at most one call per window |
//! | `delay` | none | one deferred call on the runtime |

pub mod clock;
pub mod delay;
pub mod memoize;
pub mod once;
pub mod throttle;

pub use clock::Clock;
pub use clock::SystemClock;
pub use delay::DelayError;
pub use delay::delay;
pub use memoize::Memoize;
pub use memoize::MemoizeError;
pub use memoize::memoize;
pub use once::Once;
pub use once::once;
pub use throttle::Throttle;
pub use throttle::throttle;
pub use throttle::throttle_with_clock;
