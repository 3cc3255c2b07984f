use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::timer::{BrowserTimer, Timer};
use crate::config::{CTA_LOADING_MS, ISSUE_PRESS_REVERT_MS};

/// A flag that lowers itself a fixed time after being raised.
///
/// `on_change` sees every transition. Dropping the flag cancels a pending
/// revert.
struct TimedFlag<T: Timer> {
    timer: T,
    duration_ms: u32,
    raised: Rc<Cell<bool>>,
    on_change: Rc<dyn Fn(bool)>,
    pending: RefCell<Option<T::Handle>>,
}

impl<T: Timer> TimedFlag<T> {
    fn new(timer: T, duration_ms: u32, on_change: impl Fn(bool) + 'static) -> Self {
        Self {
            timer,
            duration_ms,
            raised: Rc::new(Cell::new(false)),
            on_change: Rc::new(on_change),
            pending: RefCell::new(None),
        }
    }

    fn is_raised(&self) -> bool {
        self.raised.get()
    }

    /// Raises the flag and restarts the countdown to lowering it.
    fn raise(&self) {
        self.raised.set(true);
        (self.on_change)(true);

        let raised = self.raised.clone();
        let on_change = self.on_change.clone();
        let handle = self.timer.after(
            self.duration_ms,
            Box::new(move || {
                raised.set(false);
                on_change(false);
            }),
        );
        let superseded = self.pending.replace(Some(handle));
        drop(superseded);
    }
}

/// Temporary "Loading..." state of a call-to-action button.
pub struct LoadingState<T: Timer = BrowserTimer>(TimedFlag<T>);

impl LoadingState {
    pub fn new(on_change: impl Fn(bool) + 'static) -> Self {
        Self::with_timer(BrowserTimer, on_change)
    }
}

impl<T: Timer> LoadingState<T> {
    pub fn with_timer(timer: T, on_change: impl Fn(bool) + 'static) -> Self {
        Self(TimedFlag::new(timer, CTA_LOADING_MS, on_change))
    }

    /// Starts loading; a button that is already loading is left alone.
    pub fn start(&self) -> bool {
        if self.0.is_raised() {
            return false;
        }
        self.0.raise();
        true
    }

    pub fn is_loading(&self) -> bool {
        self.0.is_raised()
    }
}

/// Brief squeeze of an issue row after a click. Each click restarts it.
pub struct IssuePress<T: Timer = BrowserTimer>(TimedFlag<T>);

impl IssuePress {
    pub fn new(on_change: impl Fn(bool) + 'static) -> Self {
        Self::with_timer(BrowserTimer, on_change)
    }
}

impl<T: Timer> IssuePress<T> {
    pub fn with_timer(timer: T, on_change: impl Fn(bool) + 'static) -> Self {
        Self(TimedFlag::new(timer, ISSUE_PRESS_REVERT_MS, on_change))
    }

    pub fn press(&self) {
        self.0.raise();
    }

    pub fn is_pressed(&self) -> bool {
        self.0.is_raised()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::timer::manual::ManualTimer;

    fn transitions() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |raised| sink.borrow_mut().push(raised))
    }

    #[test]
    fn test_loading_reverts_exactly_after_two_seconds() {
        let timer = Rc::new(ManualTimer::default());
        let (seen, on_change) = transitions();
        let loading = LoadingState::with_timer(timer.clone(), on_change);

        assert!(loading.start());
        assert!(loading.is_loading());

        timer.advance(1_999);
        assert!(loading.is_loading());
        assert_eq!(*seen.borrow(), vec![true]);

        timer.advance(1);
        assert!(!loading.is_loading());
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_click_while_loading_does_not_extend() {
        let timer = Rc::new(ManualTimer::default());
        let (seen, on_change) = transitions();
        let loading = LoadingState::with_timer(timer.clone(), on_change);

        loading.start();
        timer.advance(1_000);
        assert!(!loading.start());

        timer.advance(1_000);
        assert!(!loading.is_loading());
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_loading_can_restart_after_revert() {
        let timer = Rc::new(ManualTimer::default());
        let (_seen, on_change) = transitions();
        let loading = LoadingState::with_timer(timer.clone(), on_change);

        loading.start();
        timer.advance(2_000);
        assert!(loading.start());
        assert!(loading.is_loading());
    }

    #[test]
    fn test_issue_press_releases_after_150ms() {
        let timer = Rc::new(ManualTimer::default());
        let (seen, on_change) = transitions();
        let press = IssuePress::with_timer(timer.clone(), on_change);

        press.press();
        timer.advance(149);
        assert!(press.is_pressed());

        timer.advance(1);
        assert!(!press.is_pressed());
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_repeat_press_restarts_countdown() {
        let timer = Rc::new(ManualTimer::default());
        let (_seen, on_change) = transitions();
        let press = IssuePress::with_timer(timer.clone(), on_change);

        press.press();
        timer.advance(100);
        press.press();

        timer.advance(149);
        assert!(press.is_pressed());
        timer.advance(1);
        assert!(!press.is_pressed());
    }

    #[test]
    fn test_dropping_cancels_revert() {
        let timer = Rc::new(ManualTimer::default());
        let (seen, on_change) = transitions();
        let press = IssuePress::with_timer(timer.clone(), on_change);

        press.press();
        drop(press);
        timer.advance(500);
        assert_eq!(*seen.borrow(), vec![true]);
    }
}
