//! # spark-model-toggle
//!
//! Reactive show/hide toggle for components.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! A component owns a `Signal<bool>` visibility cell. [`use_model_toggle`]
//! returns `show`/`hide`/`toggle` entry points that keep that cell in sync
//! with an optional two-way bound value (`model_value`):
//!
//! ```text
//! show(evt) ──► update:modelValue=true ──► host writes model_value
//!     │                                           │
//!     └── uncontrolled ──► process_show ◄── model watcher (carries evt)
//! ```
//!
//! Lifecycle notifications (`before-show`, `show`, `before-hide`, `hide`) go
//! through the component's [`Emitter`]. Work that must wait for the current
//! reactive batch to settle is queued on the [`tick`] queue.
//!
//! ## Modules
//!
//! - [`types`] - Core types (ModelValue, Payload, ToggleEvent, RenderTarget, props)
//! - [`emitter`] - Per-component named event dispatch
//! - [`tick`] - Continuations run after the reactive batch settles
//! - [`host`] - Component lifecycle and router
//! - [`toggle`] - The model toggle controller

pub mod emitter;
pub mod host;
pub mod tick;
pub mod toggle;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use emitter::{EmitHandler, Emitted, Emitter};

pub use host::{ComponentHandle, Lifecycle, Router};

pub use tick::{flush, next_tick, pending_ticks, reset_tick_queue};

pub use toggle::{
    use_model_toggle, CanShowFn, ModelToggle, ModelToggleOptions, TransitionHandler,
};
