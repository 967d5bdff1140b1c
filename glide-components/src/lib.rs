//! Page components for glide-ui hosts.
//!
//! # Usage
//!
//! Components attach to markup that already exists on the page and drive it
//! through the [`glide_ui::Document`] they are given.
//!
//! ```no_run
//! # #[cfg(target_family = "wasm")]
//! # fn main() {
//! use std::rc::Rc;
//!
//! use glide_components::slider::{SliderArgs, mount_when_ready};
//! use glide_ui::web::WebDocument;
//!
//! glide_ui::logging::init_tracing();
//! if let Some(document) = WebDocument::from_window() {
//!     let slider = mount_when_ready(Rc::new(document), SliderArgs::default());
//!     // Keep `slider` alive for as long as the page is shown.
//!     std::mem::forget(slider);
//! }
//! # }
//! # #[cfg(not(target_family = "wasm"))]
//! # fn main() {}
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod slider;
