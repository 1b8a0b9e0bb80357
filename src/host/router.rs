//! Router - Reactive current location
//!
//! The router only tracks *where* the app is. Reading [`Router::location`]
//! inside an effect subscribes to navigation, which is how navigation-aware
//! components notice route changes.
//!
//! # Example
//!
//! ```ignore
//! let router = Router::new("/");
//! let location = router.location();
//!
//! let _stop = effect(move || println!("now at {}", location.get()));
//!
//! router.push("/settings");
//! router.back();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{signal, Signal};

/// Cloneable handle to the navigation state.
#[derive(Clone)]
pub struct Router {
    location: Signal<String>,
    history: Rc<RefCell<Vec<String>>>,
}

impl Router {
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            location: signal(initial.clone()),
            history: Rc::new(RefCell::new(vec![initial])),
        }
    }

    /// Reactive current location.
    pub fn location(&self) -> Signal<String> {
        self.location.clone()
    }

    /// Current location (tracked when read inside an effect).
    pub fn current(&self) -> String {
        self.location.get()
    }

    /// Number of entries in the history stack.
    pub fn history_len(&self) -> usize {
        self.history.borrow().len()
    }

    /// Navigate to `path`, adding a history entry.
    /// Returns false when `path` is already the current location.
    pub fn push(&self, path: impl Into<String>) -> bool {
        let path = path.into();
        if !self.is_new_location(&path) {
            return false;
        }
        self.history.borrow_mut().push(path.clone());
        log::debug!("router: push {}", path);
        self.location.set(path);
        true
    }

    /// Navigate to `path`, replacing the current history entry.
    /// Returns false when `path` is already the current location.
    pub fn replace(&self, path: impl Into<String>) -> bool {
        let path = path.into();
        if !self.is_new_location(&path) {
            return false;
        }
        if let Some(top) = self.history.borrow_mut().last_mut() {
            *top = path.clone();
        }
        log::debug!("router: replace {}", path);
        self.location.set(path);
        true
    }

    /// Go back one entry. Returns false at the start of history.
    pub fn back(&self) -> bool {
        let previous = {
            let mut history = self.history.borrow_mut();
            if history.len() < 2 {
                return false;
            }
            history.pop();
            history.last().cloned()
        };

        match previous {
            Some(path) => {
                log::debug!("router: back to {}", path);
                self.location.set(path);
                true
            }
            None => false,
        }
    }

    fn is_new_location(&self, path: &str) -> bool {
        self.history.borrow().last().map(String::as_str) != Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use spark_signals::effect;

    #[test]
    fn test_push_and_back() {
        let router = Router::new("/");

        assert!(router.push("/a"));
        assert!(router.push("/b"));
        assert_eq!(router.current(), "/b");
        assert_eq!(router.history_len(), 3);

        assert!(router.back());
        assert_eq!(router.current(), "/a");
        assert!(router.back());
        assert!(!router.back());
        assert_eq!(router.current(), "/");
    }

    #[test]
    fn test_duplicate_navigation_ignored() {
        let router = Router::new("/home");

        assert!(!router.push("/home"));
        assert!(!router.replace("/home"));
        assert_eq!(router.history_len(), 1);
    }

    #[test]
    fn test_replace_keeps_history_length() {
        let router = Router::new("/");
        router.push("/a");

        assert!(router.replace("/b"));
        assert_eq!(router.history_len(), 2);
        assert_eq!(router.current(), "/b");

        router.back();
        assert_eq!(router.current(), "/");
    }

    #[test]
    fn test_location_is_reactive() {
        let router = Router::new("/");
        let runs = Rc::new(Cell::new(0));

        let location = router.location();
        let runs_clone = runs.clone();
        let _stop = effect(move || {
            let _ = location.get();
            runs_clone.set(runs_clone.get() + 1);
        });

        assert_eq!(runs.get(), 1);
        router.push("/next");
        assert_eq!(runs.get(), 2);
    }
}
