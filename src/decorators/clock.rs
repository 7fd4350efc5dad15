//! Time sources for decorators that measure elapsed time.

use std::time::Instant;

/// A source of monotonic instants.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The system's monotonic clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        return Instant::now();
    }
}

/// Any closure returning an instant is a clock, which lets tests drive time
/// by hand.
impl<F: Fn() -> Instant> Clock for F {
    #[inline]
    fn now(&self) -> Instant {
        return self();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Duration;

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn closure_clock() {
        let base = Instant::now();
        let offset = Cell::new(Duration::ZERO);
        let clock = || base + offset.get();

        assert_eq!(clock.now(), base);
        offset.set(Duration::from_millis(5));
        assert_eq!(clock.now(), base + Duration::from_millis(5));
    }
}
