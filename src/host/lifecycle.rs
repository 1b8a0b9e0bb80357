//! Lifecycle - Mount/unmount hooks of a host component
//!
//! Hooks run once, in registration order. A component mounts once and
//! unmounts once; repeated calls are ignored.

use std::cell::RefCell;
use std::rc::Rc;

type Hook = Box<dyn FnOnce()>;

#[derive(Default)]
struct LifecycleState {
    mounted: bool,
    unmounted: bool,
    on_mounted: Vec<Hook>,
    on_unmounted: Vec<Hook>,
}

/// Cloneable handle to a component's lifecycle.
#[derive(Clone, Default)]
pub struct Lifecycle {
    state: Rc<RefCell<LifecycleState>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook to run when the component is mounted.
    ///
    /// Hooks registered after mount never run.
    pub fn on_mounted(&self, f: impl FnOnce() + 'static) {
        let mut state = self.state.borrow_mut();
        if state.mounted {
            log::warn!("on_mounted registered after mount; hook dropped");
            return;
        }
        state.on_mounted.push(Box::new(f));
    }

    /// Register a hook to run when the component is unmounted.
    pub fn on_unmounted(&self, f: impl FnOnce() + 'static) {
        let mut state = self.state.borrow_mut();
        if state.unmounted {
            log::warn!("on_unmounted registered after unmount; hook dropped");
            return;
        }
        state.on_unmounted.push(Box::new(f));
    }

    /// Mark the component mounted and run its mounted hooks.
    pub fn mount(&self) {
        let hooks = {
            let mut state = self.state.borrow_mut();
            if state.mounted || state.unmounted {
                return;
            }
            state.mounted = true;
            std::mem::take(&mut state.on_mounted)
        };

        for hook in hooks {
            hook();
        }
    }

    /// Mark the component unmounted and run its unmounted hooks.
    pub fn unmount(&self) {
        let hooks = {
            let mut state = self.state.borrow_mut();
            if state.unmounted {
                return;
            }
            state.mounted = false;
            state.unmounted = true;
            state.on_mounted.clear();
            std::mem::take(&mut state.on_unmounted)
        };

        for hook in hooks {
            hook();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.state.borrow().mounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_mounted_hooks_run_once_in_order() {
        let lifecycle = Lifecycle::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for i in 0..2 {
            let order = order.clone();
            lifecycle.on_mounted(move || order.borrow_mut().push(i));
        }

        assert!(!lifecycle.is_mounted());
        lifecycle.mount();
        lifecycle.mount();

        assert!(lifecycle.is_mounted());
        assert_eq!(*order.borrow(), vec![0, 1]);
    }

    #[test]
    fn test_hook_after_mount_is_dropped() {
        let lifecycle = Lifecycle::new();
        lifecycle.mount();

        let ran = Rc::new(Cell::new(false));
        let ran_clone = ran.clone();
        lifecycle.on_mounted(move || ran_clone.set(true));
        lifecycle.mount();

        assert!(!ran.get());
    }

    #[test]
    fn test_unmount_runs_hooks() {
        let lifecycle = Lifecycle::new();
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        lifecycle.on_unmounted(move || count_clone.set(count_clone.get() + 1));

        lifecycle.mount();
        lifecycle.unmount();
        lifecycle.unmount();

        assert_eq!(count.get(), 1);
        assert!(!lifecycle.is_mounted());
    }

    #[test]
    fn test_hook_may_register_from_inside_mount() {
        let lifecycle = Lifecycle::new();
        let unmounted = Rc::new(Cell::new(false));

        let inner = lifecycle.clone();
        let unmounted_clone = unmounted.clone();
        lifecycle.on_mounted(move || {
            inner.on_unmounted(move || unmounted_clone.set(true));
        });

        lifecycle.mount();
        lifecycle.unmount();

        assert!(unmounted.get());
    }
}
