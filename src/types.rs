//! Core types for spark-model-toggle.
//!
//! These types define the vocabulary shared by the emitter, the host
//! collaborators and the toggle controller: the tri-state bound value,
//! triggering payloads, event names and the render target.

use std::rc::Rc;

use spark_signals::{signal, Signal};

// =============================================================================
// Bound value & payload
// =============================================================================

/// Externally bound visibility value.
///
/// - `None` - uncontrolled, the internal visibility cell is authoritative
/// - `Some(true)` / `Some(false)` - controlled, the bound value drives visibility
pub type ModelValue = Option<bool>;

/// The event that triggered a show/hide request.
///
/// Payloads are compared by identity (`Rc::ptr_eq`), never by value, so two
/// clicks carrying equal data are still two distinct triggers.
pub type Payload<E> = Option<Rc<E>>;

/// Identity comparison of two payloads. Two empty payloads are the same.
pub fn same_payload<E>(a: &Payload<E>, b: &Payload<E>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

// =============================================================================
// Event names
// =============================================================================

/// Events a model toggle can emit.
///
/// The names returned by [`ToggleEvent::name`] must match the host exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleEvent {
    /// `update:modelValue` - asks the host to update the bound value
    UpdateModelValue,
    /// `before-show` - visibility just turned on
    BeforeShow,
    /// `show` - default completion notification for show
    Show,
    /// `before-hide` - visibility just turned off
    BeforeHide,
    /// `hide` - default completion notification for hide
    Hide,
}

impl ToggleEvent {
    /// Every event, in declaration order.
    pub const ALL: [ToggleEvent; 5] = [
        ToggleEvent::UpdateModelValue,
        ToggleEvent::BeforeShow,
        ToggleEvent::Show,
        ToggleEvent::BeforeHide,
        ToggleEvent::Hide,
    ];

    /// Host-facing event name.
    pub const fn name(self) -> &'static str {
        match self {
            ToggleEvent::UpdateModelValue => "update:modelValue",
            ToggleEvent::BeforeShow => "before-show",
            ToggleEvent::Show => "show",
            ToggleEvent::BeforeHide => "before-hide",
            ToggleEvent::Hide => "hide",
        }
    }

    /// Look an event up by its host-facing name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.name() == name)
    }

    /// The single-bit flag for this event.
    pub const fn flag(self) -> ToggleEvents {
        match self {
            ToggleEvent::UpdateModelValue => ToggleEvents::UPDATE_MODEL_VALUE,
            ToggleEvent::BeforeShow => ToggleEvents::BEFORE_SHOW,
            ToggleEvent::Show => ToggleEvents::SHOW,
            ToggleEvent::BeforeHide => ToggleEvents::BEFORE_HIDE,
            ToggleEvent::Hide => ToggleEvents::HIDE,
        }
    }
}

impl std::fmt::Display for ToggleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Declared emit list of a component using the model toggle.
pub const MODEL_TOGGLE_EMITS: [&str; 5] = [
    ToggleEvent::UpdateModelValue.name(),
    ToggleEvent::BeforeShow.name(),
    ToggleEvent::Show.name(),
    ToggleEvent::BeforeHide.name(),
    ToggleEvent::Hide.name(),
];

bitflags::bitflags! {
    /// Set of events that currently have at least one listener.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ToggleEvents: u8 {
        const UPDATE_MODEL_VALUE = 1 << 0;
        const BEFORE_SHOW = 1 << 1;
        const SHOW = 1 << 2;
        const BEFORE_HIDE = 1 << 3;
        const HIDE = 1 << 4;
    }
}

// =============================================================================
// Render target
// =============================================================================

/// Where the component is being rendered.
///
/// Resolved once at startup and passed explicitly to each controller.
/// `Server` is a non-interactive render pass: binding updates and
/// user-facing hide requests are suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    Client,
    Server,
}

impl RenderTarget {
    pub fn is_server(self) -> bool {
        self == RenderTarget::Server
    }
}

impl Default for RenderTarget {
    fn default() -> Self {
        if cfg!(feature = "ssr") {
            RenderTarget::Server
        } else {
            RenderTarget::Client
        }
    }
}

// =============================================================================
// Props
// =============================================================================

/// Host props read by the toggle.
///
/// Both are reactive so the host can drive them; the toggle only reads them.
#[derive(Clone)]
pub struct ModelToggleProps {
    /// Suppresses user-facing show/hide.
    pub disable: Signal<bool>,
    /// Tri-state external binding.
    pub model_value: Signal<ModelValue>,
}

impl ModelToggleProps {
    /// Props with static initial values.
    pub fn new(disable: bool, model_value: ModelValue) -> Self {
        Self {
            disable: signal(disable),
            model_value: signal(model_value),
        }
    }
}

impl Default for ModelToggleProps {
    fn default() -> Self {
        Self::new(false, None)
    }
}

// =============================================================================
// Tests
// =============================================================================
