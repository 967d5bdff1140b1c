//! glide-ui is the host layer that glide components are written against.
//!
//! # Element handles
//!
//! Components never touch a global page. They receive a [`Document`] and
//! resolve [`Element`] handles through it, read layout measurements
//! ([`Element::bounding_width`], [`Element::offset_width`],
//! [`Element::computed_style`]) and write inline styles back with typed
//! values from [`style`].
//!
//! ```
//! use glide_ui::{Element, Px, StyleProperty, Transform};
//! # #[cfg(feature = "headless")]
//! # {
//! use glide_ui::headless::HeadlessElement;
//!
//! let strip = HeadlessElement::new("ul").width(960.0);
//! strip.set_style(
//!     StyleProperty::Transform,
//!     &Transform::TranslateX(Px(-320.0)).to_string(),
//! );
//! assert_eq!(
//!     strip.style(StyleProperty::Transform).as_deref(),
//!     Some("translateX(-320px)")
//! );
//! # }
//! ```
//!
//! # Backends
//!
//! - [`headless`] (feature `headless`): an in-memory page for tests and tools.
//! - `web` (wasm targets): the browser DOM through `web-sys`.
//!
//! # Subscriptions
//!
//! Listeners and observers return a [`Subscription`]. Cancelling it, or
//! dropping it, stops delivery.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod dom;
#[cfg(feature = "headless")]
pub mod headless;
pub mod logging;
pub mod px;
pub mod style;
pub mod subscription;
#[cfg(target_family = "wasm")]
pub mod web;

pub use crate::{
    dom::{Callback, Document, Element, ElementId, ElementRef, OnceCallback},
    px::Px,
    style::{
        Cursor, Easing, LengthParseError, StyleProperty, Transform, Transition, TransitionSpec,
        parse_column_gap, parse_length,
    },
    subscription::Subscription,
};
