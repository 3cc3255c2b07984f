use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Something that can run a callback after a delay.
///
/// Dropping the returned handle must cancel the callback if it hasn't run yet.
pub trait Timer {
    type Handle;

    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` backed timer. Dropping a `Timeout` calls `clearTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    type Handle = Timeout;

    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, callback)
    }
}

impl<T: Timer> Timer for Rc<T> {
    type Handle = T::Handle;

    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        (**self).after(millis, callback)
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use super::Timer;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Scheduled {
        due: u64,
        cancelled: Rc<Cell<bool>>,
        callback: Box<dyn FnOnce()>,
    }

    /// Deterministic clock for driving timers from tests.
    #[derive(Default)]
    pub struct ManualTimer {
        now: Cell<u64>,
        queue: RefCell<Vec<Scheduled>>,
    }

    pub struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl ManualTimer {
        pub fn advance(&self, millis: u64) {
            let now = self.now.get() + millis;
            self.now.set(now);
            let due: Vec<Scheduled> = {
                let mut queue = self.queue.borrow_mut();
                let (due, waiting) = queue.drain(..).partition(|s| s.due <= now);
                *queue = waiting;
                due
            };
            for scheduled in due {
                if !scheduled.cancelled.get() {
                    (scheduled.callback)();
                }
            }
        }
    }

    impl Timer for ManualTimer {
        type Handle = ManualHandle;

        fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.queue.borrow_mut().push(Scheduled {
                due: self.now.get() + u64::from(millis),
                cancelled: cancelled.clone(),
                callback,
            });
            ManualHandle(cancelled)
        }
    }
}
