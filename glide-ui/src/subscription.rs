//! Ownership guard for listeners and observers registered on a host.

use std::{any::Any, fmt};

/// Keeps a host registration alive and removes it when cancelled.
///
/// Cancellation and release are separate: [`Subscription::cancel`] stops
/// delivery immediately, while backend resources captured by the
/// registration (for example a JS closure that may currently be running)
/// are only released when the subscription is dropped.
#[must_use = "dropping a subscription cancels it"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
    _resources: Option<Box<dyn Any>>,
}

impl Subscription {
    /// Creates a subscription that runs `cancel` once.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
            _resources: None,
        }
    }

    /// Creates a subscription that also owns backend resources until drop.
    pub fn with_resources(cancel: impl FnOnce() + 'static, resources: impl Any) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
            _resources: Some(Box::new(resources)),
        }
    }

    /// A subscription with nothing to cancel.
    pub fn noop() -> Self {
        Self {
            cancel: None,
            _resources: None,
        }
    }

    /// Stops delivery. Calling this more than once has no further effect.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Whether [`Subscription::cancel`] has already run.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_none()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
