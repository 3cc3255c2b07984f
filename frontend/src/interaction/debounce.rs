use std::cell::RefCell;
use std::rc::Rc;

use super::timer::{BrowserTimer, Timer};

/// Delays `action` until `wait_ms` have passed without another call.
///
/// Each call drops the pending handle, so only the most recent arguments are
/// ever delivered.
pub struct Debounced<A: 'static, T: Timer = BrowserTimer> {
    wait_ms: u32,
    timer: T,
    action: Rc<dyn Fn(A)>,
    pending: RefCell<Option<T::Handle>>,
}

impl<A: 'static, T: Timer> Debounced<A, T> {
    pub fn with_timer(timer: T, wait_ms: u32, action: impl Fn(A) + 'static) -> Self {
        Self {
            wait_ms,
            timer,
            action: Rc::new(action),
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self, args: A) {
        let action = self.action.clone();
        let handle = self.timer.after(self.wait_ms, Box::new(move || action(args)));
        // The superseded handle is dropped here, outside the borrow.
        let superseded = self.pending.replace(Some(handle));
        drop(superseded);
    }
}

/// Browser flavoured `debounce(func, wait)`.
pub fn debounce<A: 'static>(wait_ms: u32, action: impl Fn(A) + 'static) -> Debounced<A> {
    Debounced::with_timer(BrowserTimer, wait_ms, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::timer::manual::ManualTimer;

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl Fn(u32) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        (calls, move |value| sink.borrow_mut().push(value))
    }

    #[test]
    fn test_burst_collapses_to_last_call() {
        let timer = Rc::new(ManualTimer::default());
        let (calls, action) = recorder();
        let debounced = Debounced::with_timer(timer.clone(), 10, action);

        for value in 1..=5 {
            debounced.call(value);
            timer.advance(3);
        }
        assert!(calls.borrow().is_empty());

        timer.advance(10);
        assert_eq!(*calls.borrow(), vec![5]);
    }

    #[test]
    fn test_quiet_periods_fire_separately() {
        let timer = Rc::new(ManualTimer::default());
        let (calls, action) = recorder();
        let debounced = Debounced::with_timer(timer.clone(), 10, action);

        debounced.call(1);
        timer.advance(10);
        debounced.call(2);
        timer.advance(10);

        assert_eq!(*calls.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_does_not_fire_before_wait() {
        let timer = Rc::new(ManualTimer::default());
        let (calls, action) = recorder();
        let debounced = Debounced::with_timer(timer.clone(), 10, action);

        debounced.call(7);
        timer.advance(9);
        assert!(calls.borrow().is_empty());
        timer.advance(1);
        assert_eq!(*calls.borrow(), vec![7]);
    }

    #[test]
    fn test_dropping_debounced_cancels_pending_call() {
        let timer = Rc::new(ManualTimer::default());
        let (calls, action) = recorder();
        let debounced = Debounced::with_timer(timer.clone(), 10, action);

        debounced.call(1);
        drop(debounced);
        timer.advance(50);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_at_most_once_per_window_under_constant_calls() {
        let timer = Rc::new(ManualTimer::default());
        let (calls, action) = recorder();
        let debounced = Debounced::with_timer(timer.clone(), 10, action);

        // A call every millisecond never leaves a quiet window.
        for value in 0..100 {
            debounced.call(value);
            timer.advance(1);
        }
        assert!(calls.borrow().is_empty());

        timer.advance(10);
        assert_eq!(*calls.borrow(), vec![99]);
    }
}
