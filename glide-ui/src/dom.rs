//! Element handle capability consumed by components.
//!
//! ## Usage
//!
//! Components receive a [`Document`] and resolve their elements through it
//! instead of reaching for a global page. Every backend (the in-memory
//! [`crate::headless`] document, the browser backend in `web`) implements
//! the same two traits, so one component instance can be driven by either.

use std::{
    fmt,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{px::Px, style::StyleProperty, subscription::Subscription};

/// Shared handle to a host element.
pub type ElementRef = Rc<dyn Element>;

/// Callback invoked by listeners and observers.
pub type Callback = Rc<dyn Fn()>;

/// Callback scheduled once, for example on the next animation frame.
pub type OnceCallback = Box<dyn FnOnce()>;

/// Process-unique identity of an element handle.
///
/// Two handles to the same host node report the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

impl ElementId {
    /// Allocates a fresh id.
    pub fn next() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Rebuilds an id previously obtained from [`ElementId::raw`].
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Operations a component may perform on a host element.
pub trait Element {
    /// Identity of the underlying host node.
    fn id(&self) -> ElementId;

    /// First descendant matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<ElementRef>;

    /// All descendants matching `selector`, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<ElementRef>;

    /// Width of the element's border box as laid out on screen.
    fn bounding_width(&self) -> Px;

    /// Layout width of the element, including padding and borders.
    fn offset_width(&self) -> Px;

    /// Resolved value of a computed style property, if the host knows it.
    fn computed_style(&self, property: &str) -> Option<String>;

    /// Writes an inline style declaration.
    fn set_style(&self, property: StyleProperty, value: &str);

    /// Toggles the element's `disabled` state.
    fn set_disabled(&self, disabled: bool);

    /// Whether the element is still part of its document.
    fn is_connected(&self) -> bool;

    /// Registers a click listener until the returned subscription is cancelled.
    fn add_click_listener(&self, handler: Callback) -> Subscription;

    /// Observes changes of the element's box size until the returned
    /// subscription is cancelled.
    fn observe_size(&self, handler: Callback) -> Subscription;
}

/// Page-level capabilities.
pub trait Document {
    /// First element in the page matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<ElementRef>;

    /// Whether the page is still parsing.
    fn is_loading(&self) -> bool;

    /// Runs `handler` once the page content has loaded.
    fn on_content_loaded(&self, handler: OnceCallback);

    /// Runs `handler` before the next repaint.
    fn request_animation_frame(&self, handler: OnceCallback);
}
