//! Drop calls that arrive too soon after the last one that ran.

use std::marker::PhantomData;
use std::time::Duration;
use std::time::Instant;

use tracing::trace;

use super::clock::Clock;
use super::clock::SystemClock;

/// A wrapper that runs its function at most once per window.
///
/// The first window opens when the wrapper is built, and every call that
/// runs opens a new one. A call runs when more than `window` has elapsed
/// since the window opened; any other call is dropped, not queued.
pub struct Throttle<A, R, F, C = SystemClock> {
    func: F,
    window: Duration,
    window_start: Instant,
    clock: C,
    _args: PhantomData<fn(A) -> R>,
}

/// Wrap `func` so it runs at most once per `window`, timed by the system clock.
pub fn throttle<A, R, F>(func: F, window: Duration) -> Throttle<A, R, F, SystemClock>
where
    F: FnMut(A) -> R,
{
    return throttle_with_clock(func, window, SystemClock);
}

/// Like [`throttle`], reading time from `clock`.
pub fn throttle_with_clock<A, R, F, C>(func: F, window: Duration, clock: C) -> Throttle<A, R, F, C>
where
    F: FnMut(A) -> R,
    C: Clock,
{
    let window_start = clock.now();
    return Throttle {
        func,
        window,
        window_start,
        clock,
        _args: PhantomData,
    };
}

impl<A, R, F, C> Throttle<A, R, F, C>
where
    F: FnMut(A) -> R,
    C: Clock,
{
    /// Run the wrapped function if the window has passed.
    ///
    /// Returns the function's result, or `None` when the call was dropped.
    pub fn call(&mut self, args: A) -> Option<R> {
        let now = self.clock.now();
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed <= self.window {
            trace!(?elapsed, window = ?self.window, "throttle: call dropped");
            return None;
        }

        self.window_start = now;
        return Some((self.func)(args));
    }

    /// The length of the window.
    #[inline]
    pub fn window(&self) -> Duration {
        return self.window;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const WINDOW: Duration = Duration::from_millis(100);

    fn manual_clock() -> (Instant, Cell<Duration>) {
        return (Instant::now(), Cell::new(Duration::ZERO));
    }

    #[test]
    fn window_opens_at_construction() {
        let (base, offset) = manual_clock();
        let mut throttled = throttle_with_clock(|n: i32| n + 1, WINDOW, || base + offset.get());

        offset.set(Duration::from_millis(10));
        assert_eq!(throttled.call(1), None);
        offset.set(Duration::from_millis(101));
        assert_eq!(throttled.call(1), Some(2));
    }

    #[test]
    fn burst_runs_once() {
        let (base, offset) = manual_clock();
        let mut calls = 0;
        let mut throttled = throttle_with_clock(|()| calls += 1, WINDOW, || base + offset.get());

        // 0ms to 149ms; only the call at 101ms runs.
        for _ in 0..150 {
            throttled.call(());
            offset.set(offset.get() + Duration::from_millis(1));
        }

        drop(throttled);
        assert_eq!(calls, 1);
    }

    #[test]
    fn boundary_is_exclusive() {
        let (base, offset) = manual_clock();
        let mut throttled = throttle_with_clock(|()| (), WINDOW, || base + offset.get());

        offset.set(WINDOW);
        assert!(throttled.call(()).is_none());
        offset.set(WINDOW + Duration::from_millis(1));
        assert!(throttled.call(()).is_some());
        offset.set(WINDOW * 2 + Duration::from_millis(1));
        assert!(throttled.call(()).is_none());
    }

    #[test]
    fn window_reanchors_after_each_run() {
        let (base, offset) = manual_clock();
        let mut throttled = throttle_with_clock(|t: u64| t, WINDOW, || base + offset.get());

        let mut fired = Vec::new();
        for ms in (0..=450).step_by(10) {
            offset.set(Duration::from_millis(ms));
            if let Some(t) = throttled.call(ms) {
                fired.push(t);
            }
        }

        // Each run starts a new window, so runs are spaced just over 100ms.
        assert_eq!(fired, vec![110, 220, 330, 440]);
    }

    #[test]
    fn dropped_calls_do_not_move_the_window() {
        let (base, offset) = manual_clock();
        let mut throttled = throttle_with_clock(|()| (), WINDOW, || base + offset.get());

        offset.set(Duration::from_millis(101));
        assert!(throttled.call(()).is_some());
        offset.set(Duration::from_millis(160));
        assert!(throttled.call(()).is_none());
        offset.set(Duration::from_millis(202));
        assert!(throttled.call(()).is_some());
    }
}
