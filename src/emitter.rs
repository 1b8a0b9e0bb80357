//! Emitter - Named event dispatch for a single component
//!
//! Each component owns one [`Emitter`]. Parents subscribe per event kind and
//! the toggle emits lifecycle notifications through it. The set of kinds with
//! at least one listener is what the toggle inspects to decide whether the
//! bound value is two-way bound.
//!
//! # Example
//!
//! ```ignore
//! use spark_model_toggle::{Emitter, Emitted, ToggleEvent};
//!
//! let emitter: Emitter<KeyboardEvent> = Emitter::new();
//!
//! let cleanup = emitter.on(ToggleEvent::Show, |event| {
//!     println!("shown by {:?}", event.payload());
//! });
//!
//! emitter.emit(Emitted::Show(None));
//! cleanup();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::{Payload, ToggleEvent, ToggleEvents};

// =============================================================================
// TYPES
// =============================================================================

/// An emitted event together with its argument.
#[derive(Debug)]
pub enum Emitted<E> {
    UpdateModelValue(bool),
    BeforeShow(Payload<E>),
    Show(Payload<E>),
    BeforeHide(Payload<E>),
    Hide(Payload<E>),
}

impl<E> Emitted<E> {
    pub fn kind(&self) -> ToggleEvent {
        match self {
            Emitted::UpdateModelValue(_) => ToggleEvent::UpdateModelValue,
            Emitted::BeforeShow(_) => ToggleEvent::BeforeShow,
            Emitted::Show(_) => ToggleEvent::Show,
            Emitted::BeforeHide(_) => ToggleEvent::BeforeHide,
            Emitted::Hide(_) => ToggleEvent::Hide,
        }
    }

    /// Triggering event carried by lifecycle notifications.
    ///
    /// Always `None` for `update:modelValue`.
    pub fn payload(&self) -> Option<&Rc<E>> {
        match self {
            Emitted::UpdateModelValue(_) => None,
            Emitted::BeforeShow(p) | Emitted::Show(p) | Emitted::BeforeHide(p) | Emitted::Hide(p) => {
                p.as_ref()
            }
        }
    }
}

/// Handler invoked with each emitted event of the subscribed kind.
pub type EmitHandler<E> = Rc<dyn Fn(&Emitted<E>)>;

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

struct HandlerRegistry<E> {
    handlers: Vec<(usize, ToggleEvent, EmitHandler<E>)>,
    next_id: usize,
}

impl<E> HandlerRegistry<E> {
    fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

// =============================================================================
// EMITTER
// =============================================================================

/// Cloneable handle to a component's event registry.
pub struct Emitter<E> {
    registry: Rc<RefCell<HandlerRegistry<E>>>,
}

impl<E> Clone for Emitter<E> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<E> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Emitter<E> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(HandlerRegistry::new())),
        }
    }

    /// Subscribe to one event kind.
    /// Returns cleanup function.
    pub fn on<F>(&self, kind: ToggleEvent, handler: F) -> impl FnOnce() + use<F, E>
    where
        F: Fn(&Emitted<E>) + 'static,
        E: 'static,
    {
        let id = {
            let mut reg = self.registry.borrow_mut();
            let id = reg.next_id();
            reg.handlers.push((id, kind, Rc::new(handler)));
            id
        };

        let registry = Rc::downgrade(&self.registry);
        move || {
            if let Some(registry) = registry.upgrade() {
                registry
                    .borrow_mut()
                    .handlers
                    .retain(|(handler_id, _, _)| *handler_id != id);
            }
        }
    }

    /// Subscribe to `update:modelValue`, the two-way binding channel.
    /// Returns cleanup function.
    pub fn on_update_model_value<F>(&self, handler: F) -> impl FnOnce() + use<F, E>
    where
        F: Fn(bool) + 'static,
        E: 'static,
    {
        self.on(ToggleEvent::UpdateModelValue, move |event| {
            if let Emitted::UpdateModelValue(value) = event {
                handler(*value);
            }
        })
    }

    /// Dispatch to every handler of the event's kind, in registration order.
    ///
    /// Handlers are collected first so they can subscribe, unsubscribe or emit
    /// again while running.
    pub fn emit(&self, event: Emitted<E>) {
        let kind = event.kind();
        let handlers: Vec<EmitHandler<E>> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .filter(|(_, handler_kind, _)| *handler_kind == kind)
            .map(|(_, _, handler)| handler.clone())
            .collect();

        log::trace!("emit {} to {} handler(s)", kind, handlers.len());

        for handler in handlers {
            handler(&event);
        }
    }

    /// Kinds that currently have at least one listener.
    pub fn listeners(&self) -> ToggleEvents {
        self.registry
            .borrow()
            .handlers
            .iter()
            .fold(ToggleEvents::empty(), |acc, (_, kind, _)| acc | kind.flag())
    }

    pub fn has_listener(&self, kind: ToggleEvent) -> bool {
        self.listeners().contains(kind.flag())
    }

    /// Remove every handler.
    pub fn clear(&self) {
        self.registry.borrow_mut().handlers.clear();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_reaches_matching_kind_only() {
        let emitter: Emitter<()> = Emitter::new();
        let shows = Rc::new(Cell::new(0));
        let hides = Rc::new(Cell::new(0));

        let shows_clone = shows.clone();
        let _c1 = emitter.on(ToggleEvent::Show, move |_| shows_clone.set(shows_clone.get() + 1));
        let hides_clone = hides.clone();
        let _c2 = emitter.on(ToggleEvent::Hide, move |_| hides_clone.set(hides_clone.get() + 1));

        emitter.emit(Emitted::Show(None));
        emitter.emit(Emitted::Show(None));
        emitter.emit(Emitted::Hide(None));

        assert_eq!(shows.get(), 2);
        assert_eq!(hides.get(), 1);
    }

    #[test]
    fn test_cleanup_unsubscribes() {
        let emitter: Emitter<()> = Emitter::new();
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let cleanup = emitter.on(ToggleEvent::BeforeShow, move |_| count_clone.set(count_clone.get() + 1));
        assert!(emitter.has_listener(ToggleEvent::BeforeShow));

        emitter.emit(Emitted::BeforeShow(None));
        cleanup();
        emitter.emit(Emitted::BeforeShow(None));

        assert_eq!(count.get(), 1);
        assert!(!emitter.has_listener(ToggleEvent::BeforeShow));
    }

    #[test]
    fn test_listeners_set() {
        let emitter: Emitter<()> = Emitter::new();
        assert_eq!(emitter.listeners(), ToggleEvents::empty());

        let _c1 = emitter.on_update_model_value(|_| {});
        let _c2 = emitter.on(ToggleEvent::Hide, |_| {});

        assert_eq!(
            emitter.listeners(),
            ToggleEvents::UPDATE_MODEL_VALUE | ToggleEvents::HIDE
        );
        assert!(emitter.has_listener(ToggleEvent::UpdateModelValue));
        assert!(!emitter.has_listener(ToggleEvent::Show));

        emitter.clear();
        assert_eq!(emitter.listeners(), ToggleEvents::empty());
    }

    #[test]
    fn test_update_model_value_handler_gets_bool() {
        let emitter: Emitter<()> = Emitter::new();
        let values = Rc::new(RefCell::new(Vec::new()));
        let values_clone = values.clone();

        let _cleanup = emitter.on_update_model_value(move |v| values_clone.borrow_mut().push(v));

        emitter.emit(Emitted::UpdateModelValue(true));
        emitter.emit(Emitted::UpdateModelValue(false));

        assert_eq!(*values.borrow(), vec![true, false]);
    }

    #[test]
    fn test_payload_is_forwarded() {
        let emitter: Emitter<String> = Emitter::new();
        let trigger = Rc::new("click".to_string());
        let seen: Rc<RefCell<Option<Rc<String>>>> = Rc::new(RefCell::new(None));

        let seen_clone = seen.clone();
        let _cleanup = emitter.on(ToggleEvent::BeforeHide, move |event| {
            *seen_clone.borrow_mut() = event.payload().cloned();
        });

        emitter.emit(Emitted::BeforeHide(Some(trigger.clone())));

        let seen = seen.borrow();
        assert!(Rc::ptr_eq(seen.as_ref().unwrap(), &trigger));
    }

    #[test]
    fn test_handler_may_reenter_emitter() {
        let emitter: Emitter<()> = Emitter::new();
        let hides = Rc::new(Cell::new(0));

        let hides_clone = hides.clone();
        let _c1 = emitter.on(ToggleEvent::Hide, move |_| hides_clone.set(hides_clone.get() + 1));

        let inner = emitter.clone();
        let _c2 = emitter.on(ToggleEvent::Show, move |_| {
            // Subscribing and emitting from inside a handler must not panic
            let _late = inner.on(ToggleEvent::BeforeShow, |_| {});
            inner.emit(Emitted::Hide(None));
        });

        emitter.emit(Emitted::Show(None));

        assert_eq!(hides.get(), 1);
        assert!(emitter.has_listener(ToggleEvent::BeforeShow));
    }
}
