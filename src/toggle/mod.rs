//! Model Toggle - Show/hide state synchronized with a bound value.
//!
//! [`use_model_toggle`] turns a host's visibility cell into a component that
//! can be shown and hidden by user code *and* by an externally bound value:
//!
//! - **Uncontrolled** (`model_value` is `None`, or nobody listens to
//!   `update:modelValue`): `show`/`hide` change visibility immediately.
//! - **Controlled** (a listener is bound and `model_value` is set): `show`/`hide`
//!   only ask the host to update the bound value. Visibility changes when that
//!   value flows back in through the model watcher, carrying the original
//!   triggering event.
//!
//! # Pattern: EffectScope-based Cleanup
//!
//! Both watchers (bound value, navigation) live in one EffectScope that is
//! stopped by [`ModelToggle::dispose`] or when the host component unmounts.
//!
//! # Pending payload
//!
//! A controlled request records its triggering event until the next
//! [`tick::flush`](crate::tick::flush). If the bound value round-trips before
//! then, `before-show`/`before-hide` carry that event. Each request's cleanup
//! only clears the slot if it still holds *its* event, so an older request
//! never erases a newer one.
//!
//! # Example
//!
//! ```ignore
//! use spark_model_toggle::*;
//! use spark_signals::signal;
//!
//! let props = ModelToggleProps::default();
//! let emitter: Emitter<KeyboardEvent> = Emitter::new();
//! let showing = signal(false);
//! let component = ComponentHandle::new().with_router(router);
//!
//! let toggle = use_model_toggle(
//!     ModelToggleOptions::new(props, emitter.clone(), showing.clone(), component.clone())
//!         .with_hide_on_route_change(signal(true))
//!         .with_process_on_mount(true),
//! );
//!
//! component.mount();
//! toggle.toggle(Some(Rc::new(KeyboardEvent::new("Enter"))));
//! ```

mod options;

pub use options::{CanShowFn, ModelToggleOptions, TransitionHandler};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{effect, effect_scope, Signal};

use crate::emitter::{Emitted, Emitter};
use crate::tick::next_tick;
use crate::types::{same_payload, ModelToggleProps, ModelValue, Payload, RenderTarget, ToggleEvent};

// =============================================================================
// Controller state
// =============================================================================

struct ToggleInner<E: 'static> {
    props: ModelToggleProps,
    emitter: Emitter<E>,
    showing: Signal<bool>,
    render_target: RenderTarget,
    can_show: Option<CanShowFn<E>>,
    handle_show: Option<TransitionHandler<E>>,
    handle_hide: Option<TransitionHandler<E>>,
    /// Most recent triggering event awaiting the bound value round-trip
    payload: RefCell<Payload<E>>,
    stop_watchers: RefCell<Option<Box<dyn FnOnce()>>>,
    disposed: Cell<bool>,
}

impl<E: 'static> ToggleInner<E> {
    fn toggle(self: &Rc<Self>, evt: Payload<E>) {
        if self.showing.get() {
            self.hide(evt);
        } else {
            self.show(evt);
        }
    }

    fn show(self: &Rc<Self>, evt: Payload<E>) {
        if self.props.disable.get() {
            log::trace!("show ignored: disabled");
            return;
        }
        if let Some(can_show) = &self.can_show {
            if !can_show(evt.as_deref()) {
                log::trace!("show ignored: rejected by can_show");
                return;
            }
        }

        self.request(true, evt);
    }

    fn hide(self: &Rc<Self>, evt: Payload<E>) {
        if self.render_target.is_server() || self.props.disable.get() {
            log::trace!("hide ignored: server render or disabled");
            return;
        }

        self.request(false, evt);
    }

    /// Shared tail of `show`/`hide`: ask the binding, and process directly
    /// unless the bound value will flow back in.
    fn request(self: &Rc<Self>, value: bool, evt: Payload<E>) {
        let server = self.render_target.is_server();
        let listener = self.emitter.has_listener(ToggleEvent::UpdateModelValue);
        // Props don't change mid-call; decide on the value seen before emitting
        let bound = self.props.model_value.get();

        if listener && !server {
            // Recorded before emitting so a synchronous write-back sees it
            self.hold_payload(evt.clone());
            self.emitter.emit(Emitted::UpdateModelValue(value));
        }

        if bound.is_none() || !listener || server {
            if value {
                self.process_show(evt);
            } else {
                self.process_hide(evt);
            }
        }
    }

    fn hold_payload(self: &Rc<Self>, evt: Payload<E>) {
        *self.payload.borrow_mut() = evt.clone();

        let inner = Rc::downgrade(self);
        next_tick(move || {
            let Some(inner) = inner.upgrade() else {
                return;
            };
            let mut slot = inner.payload.borrow_mut();
            if same_payload(&*slot, &evt) {
                *slot = None;
            }
        });
    }

    fn process_show(&self, evt: Payload<E>) {
        if self.showing.get() {
            return;
        }

        self.showing.set(true);
        log::debug!("model toggle: shown");

        self.emitter.emit(Emitted::BeforeShow(evt.clone()));

        match &self.handle_show {
            Some(handle_show) => handle_show(evt),
            None => self.emitter.emit(Emitted::Show(evt)),
        }
    }

    fn process_hide(&self, evt: Payload<E>) {
        if !self.showing.get() {
            return;
        }

        self.showing.set(false);
        log::debug!("model toggle: hidden");

        self.emitter.emit(Emitted::BeforeHide(evt.clone()));

        match &self.handle_hide {
            Some(handle_hide) => handle_hide(evt),
            None => self.emitter.emit(Emitted::Hide(evt)),
        }
    }

    /// Reconcile a new bound value into visibility.
    fn process_model_change(&self, val: ModelValue) {
        if self.props.disable.get() && val == Some(true) {
            // A disabled component can't be forced open from outside
            if self.emitter.has_listener(ToggleEvent::UpdateModelValue) {
                log::debug!("model toggle: disabled, rejecting bound value");
                self.emitter.emit(Emitted::UpdateModelValue(false));
            }
        } else if (val == Some(true)) != self.showing.get() {
            let evt = self.payload.borrow().clone();
            if val == Some(true) {
                self.process_show(evt);
            } else {
                self.process_hide(evt);
            }
        }
    }

    fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }
        let stop = self.stop_watchers.borrow_mut().take();
        if let Some(stop) = stop {
            stop();
        }
    }
}

// =============================================================================
// Public handle
// =============================================================================

/// Show/hide/toggle entry points returned by [`use_model_toggle`].
pub struct ModelToggle<E: 'static> {
    inner: Rc<ToggleInner<E>>,
}

impl<E: 'static> Clone for ModelToggle<E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E: 'static> ModelToggle<E> {
    /// Request visibility. No-op while disabled or rejected by `can_show`.
    ///
    /// When `update:modelValue` is bound, `evt` is held as the pending payload
    /// until the host calls [`tick::flush`](crate::tick::flush). Settling
    /// effects with `spark_signals::flush_sync` alone does not release it, and
    /// a later external change would carry this event.
    pub fn show(&self, evt: Payload<E>) {
        self.inner.show(evt);
    }

    /// Request hiding. No-op while disabled or during a server render.
    ///
    /// Same pending-payload contract as [`ModelToggle::show`]: the host must
    /// drive [`tick::flush`](crate::tick::flush) to release `evt`.
    pub fn hide(&self, evt: Payload<E>) {
        self.inner.hide(evt);
    }

    /// `hide` when visible, `show` otherwise.
    pub fn toggle(&self, evt: Payload<E>) {
        self.inner.toggle(evt);
    }

    pub fn is_showing(&self) -> bool {
        self.inner.showing.get()
    }

    /// Stop the bound-value and navigation watchers.
    ///
    /// Called automatically when the host component unmounts. The entry
    /// points keep working afterwards, but external changes are no longer
    /// reconciled.
    pub fn dispose(&self) {
        self.inner.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }
}

// =============================================================================
// use_model_toggle
// =============================================================================

/// Create a model toggle for a host component.
///
/// Installs a watcher on `props.model_value` and, when both
/// `hide_on_route_change` and a router are present, a navigation watcher.
/// Watchers react to *changes* only; use `process_on_mount` to honor a bound
/// value that is already set at creation time.
pub fn use_model_toggle<E: 'static>(options: ModelToggleOptions<E>) -> ModelToggle<E> {
    let ModelToggleOptions {
        props,
        emitter,
        showing,
        component,
        render_target,
        can_show,
        handle_show,
        handle_hide,
        hide_on_route_change,
        process_on_mount,
    } = options;

    let inner = Rc::new(ToggleInner {
        props,
        emitter,
        showing,
        render_target,
        can_show,
        handle_show,
        handle_hide,
        payload: RefCell::new(None),
        stop_watchers: RefCell::new(None),
        disposed: Cell::new(false),
    });

    let scope = effect_scope(false);

    let inner_model = inner.clone();
    let route_watch = hide_on_route_change
        .zip(component.router().cloned())
        .map(|(flag, router)| (flag, router, inner.clone()));

    scope.run(move || {
        let model_value = inner_model.props.model_value.clone();
        let last_model: Cell<Option<ModelValue>> = Cell::new(None);

        let _model_watch = effect(move || {
            let val = model_value.get();
            // First run only records the starting value
            match last_model.replace(Some(val)) {
                Some(previous) if previous != val => inner_model.process_model_change(val),
                _ => {}
            }
        });

        if let Some((flag, router, inner_route)) = route_watch {
            let location = router.location();
            let last_location: RefCell<Option<String>> = RefCell::new(None);

            let _route_watch = effect(move || {
                let current = location.get();
                let previous = last_location.replace(Some(current.clone()));
                if previous.is_none() || previous.as_deref() == Some(current.as_str()) {
                    return;
                }

                if flag.get() && inner_route.showing.get() {
                    log::debug!("model toggle: route changed to {}, hiding", current);
                    inner_route.hide(None);
                }
            });
        }
    });

    *inner.stop_watchers.borrow_mut() = Some(Box::new(move || {
        scope.stop();
    }));

    let lifecycle = component.lifecycle();

    if process_on_mount {
        let inner_mount = inner.clone();
        lifecycle.on_mounted(move || {
            let val = inner_mount.props.model_value.get();
            inner_mount.process_model_change(val);
        });
    }

    let inner_unmount = Rc::downgrade(&inner);
    lifecycle.on_unmounted(move || {
        if let Some(inner) = inner_unmount.upgrade() {
            inner.dispose();
        }
    });

    ModelToggle { inner }
}

// =============================================================================
// Tests
// =============================================================================
