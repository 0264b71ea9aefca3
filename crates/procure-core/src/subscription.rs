//! Scoped event subscriptions
//!
//! A `Subscription` owns the release step of something that was registered
//! (a window listener, a timer). The release runs exactly once: on explicit
//! `release`, or when the guard is dropped, including during unwinding.

use std::fmt;

pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Release now instead of at drop
    pub fn release(mut self) {
        self.run_release();
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = count.clone();
        (count, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn test_drop_releases_once() {
        let (count, release) = counter();
        {
            let subscription = Subscription::new(release);
            assert!(subscription.is_active());
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_explicit_release_does_not_run_again_on_drop() {
        let (count, release) = counter();
        Subscription::new(release).release();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_early_return_releases() {
        let (count, release) = counter();
        let mounted = |fail: bool| -> Result<(), ()> {
            let _subscription = Subscription::new(release);
            if fail {
                return Err(());
            }
            Ok(())
        };
        assert!(mounted(true).is_err());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_panic_releases() {
        let (count, release) = counter();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _subscription = Subscription::new(release);
            panic!("render failed");
        }));
        assert!(result.is_err());
        assert_eq!(count.get(), 1);
    }
}
