//! Host collaborators - What a component provides to the toggle
//!
//! - [`Lifecycle`] - mount/unmount hooks
//! - [`Router`] - reactive current location (optional)
//! - [`ComponentHandle`] - the component instance tying both together

mod lifecycle;
mod router;

pub use lifecycle::Lifecycle;
pub use router::Router;

/// Handle to the host component instance.
#[derive(Clone, Default)]
pub struct ComponentHandle {
    lifecycle: Lifecycle,
    router: Option<Router>,
}

impl ComponentHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the app router, making the component navigation-aware.
    pub fn with_router(mut self, router: Router) -> Self {
        self.router = Some(router);
        self
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn router(&self) -> Option<&Router> {
        self.router.as_ref()
    }

    /// Shorthand for `lifecycle().mount()`.
    pub fn mount(&self) {
        self.lifecycle.mount();
    }

    /// Shorthand for `lifecycle().unmount()`.
    pub fn unmount(&self) {
        self.lifecycle.unmount();
    }
}
