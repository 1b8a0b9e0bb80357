//! Configuration bundle for [`use_model_toggle`](super::use_model_toggle).

use spark_signals::Signal;

use crate::emitter::Emitter;
use crate::host::ComponentHandle;
use crate::types::{ModelToggleProps, Payload, RenderTarget};

/// Guard deciding whether a show request may proceed.
pub type CanShowFn<E> = Box<dyn Fn(Option<&E>) -> bool>;

/// Override for the default `show`/`hide` notification.
pub type TransitionHandler<E> = Box<dyn Fn(Payload<E>)>;

/// Everything a model toggle needs from its host.
///
/// `props`, `emitter`, `showing` and `component` are required; every other
/// field is an optional collaborator and defaults to "not configured".
pub struct ModelToggleOptions<E: 'static> {
    pub props: ModelToggleProps,
    pub emitter: Emitter<E>,
    /// Visibility cell, owned by the host and written only by the toggle.
    pub showing: Signal<bool>,
    pub component: ComponentHandle,
    pub render_target: RenderTarget,
    pub can_show: Option<CanShowFn<E>>,
    /// Replaces the `show` notification; responsible for any equivalent event.
    pub handle_show: Option<TransitionHandler<E>>,
    /// Replaces the `hide` notification; responsible for any equivalent event.
    pub handle_hide: Option<TransitionHandler<E>>,
    /// When set and true, a route change hides the component.
    pub hide_on_route_change: Option<Signal<bool>>,
    /// Reconcile the bound value once the component has mounted.
    pub process_on_mount: bool,
}

impl<E: 'static> ModelToggleOptions<E> {
    pub fn new(
        props: ModelToggleProps,
        emitter: Emitter<E>,
        showing: Signal<bool>,
        component: ComponentHandle,
    ) -> Self {
        Self {
            props,
            emitter,
            showing,
            component,
            render_target: RenderTarget::default(),
            can_show: None,
            handle_show: None,
            handle_hide: None,
            hide_on_route_change: None,
            process_on_mount: false,
        }
    }

    pub fn with_render_target(mut self, target: RenderTarget) -> Self {
        self.render_target = target;
        self
    }

    pub fn with_can_show(mut self, f: impl Fn(Option<&E>) -> bool + 'static) -> Self {
        self.can_show = Some(Box::new(f));
        self
    }

    pub fn with_handle_show(mut self, f: impl Fn(Payload<E>) + 'static) -> Self {
        self.handle_show = Some(Box::new(f));
        self
    }

    pub fn with_handle_hide(mut self, f: impl Fn(Payload<E>) + 'static) -> Self {
        self.handle_hide = Some(Box::new(f));
        self
    }

    pub fn with_hide_on_route_change(mut self, flag: Signal<bool>) -> Self {
        self.hide_on_route_change = Some(flag);
        self
    }

    pub fn with_process_on_mount(mut self, enabled: bool) -> Self {
        self.process_on_mount = enabled;
        self
    }
}
