//! Browser backend over `web-sys`.
//!
//! ## Usage
//!
//! ```ignore
//! let document = glide_ui::web::WebDocument::from_window().expect("running in a browser");
//! let document: std::rc::Rc<dyn glide_ui::Document> = std::rc::Rc::new(document);
//! ```

use std::rc::Rc;

use js_sys::{Function, WeakMap};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

use crate::{
    dom::{Callback, Document, Element, ElementId, ElementRef, OnceCallback},
    px::Px,
    style::StyleProperty,
    subscription::Subscription,
};

thread_local! {
    static ELEMENT_IDS: WeakMap = WeakMap::new();
}

fn element_id(element: &web_sys::Element) -> ElementId {
    ELEMENT_IDS.with(|ids| {
        if let Some(raw) = ids.get(element).as_f64() {
            return ElementId::from_raw(raw as u64);
        }
        let id = ElementId::next();
        ids.set(element, &JsValue::from_f64(id.raw() as f64));
        id
    })
}

/// A live DOM element.
#[derive(Clone, Debug)]
pub struct WebElement {
    element: web_sys::Element,
    window: web_sys::Window,
}

impl WebElement {
    /// Wraps a DOM element.
    pub fn new(element: web_sys::Element, window: web_sys::Window) -> Self {
        Self { element, window }
    }

    /// The wrapped DOM element.
    pub fn raw(&self) -> &web_sys::Element {
        &self.element
    }

    fn wrap(&self, element: web_sys::Element) -> ElementRef {
        Rc::new(Self::new(element, self.window.clone()))
    }

    fn html(&self) -> Option<&web_sys::HtmlElement> {
        self.element.dyn_ref::<web_sys::HtmlElement>()
    }
}

impl Element for WebElement {
    fn id(&self) -> ElementId {
        element_id(&self.element)
    }

    fn query_selector(&self, selector: &str) -> Option<ElementRef> {
        let found = self.element.query_selector(selector).ok().flatten()?;
        Some(self.wrap(found))
    }

    fn query_selector_all(&self, selector: &str) -> Vec<ElementRef> {
        let Ok(list) = self.element.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(|element| self.wrap(element))
            .collect()
    }

    fn bounding_width(&self) -> Px {
        Px(self.element.get_bounding_client_rect().width() as f32)
    }

    fn offset_width(&self) -> Px {
        self.html()
            .map(|html| Px(html.offset_width() as f32))
            .unwrap_or(Px::ZERO)
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        let style = self.window.get_computed_style(&self.element).ok().flatten()?;
        style.get_property_value(property).ok()
    }

    fn set_style(&self, property: StyleProperty, value: &str) {
        if let Some(html) = self.html()
            && let Err(err) = html.style().set_property(property.css_name(), value)
        {
            tracing::debug!(?err, property = property.css_name(), "style write rejected");
        }
    }

    fn set_disabled(&self, disabled: bool) {
        let result = if disabled {
            self.element.set_attribute("disabled", "")
        } else {
            self.element.remove_attribute("disabled")
        };
        if let Err(err) = result {
            tracing::debug!(?err, "disabled attribute update rejected");
        }
    }

    fn is_connected(&self) -> bool {
        self.element.is_connected()
    }

    fn add_click_listener(&self, handler: Callback) -> Subscription {
        let closure = Closure::<dyn FnMut()>::new(move || handler());
        let function: Function = closure.as_ref().unchecked_ref::<Function>().clone();
        if let Err(err) = self
            .element
            .add_event_listener_with_callback("click", &function)
        {
            tracing::debug!(?err, "click listener registration failed");
            return Subscription::noop();
        }
        let target = self.element.clone();
        Subscription::with_resources(
            move || {
                let _ = target.remove_event_listener_with_callback("click", &function);
            },
            closure,
        )
    }

    fn observe_size(&self, handler: Callback) -> Subscription {
        let closure =
            Closure::<dyn FnMut(js_sys::Array, web_sys::ResizeObserver)>::new(move |_, _| {
                handler()
            });
        let observer = match web_sys::ResizeObserver::new(closure.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(err) => {
                tracing::debug!(?err, "ResizeObserver unavailable");
                return Subscription::noop();
            }
        };
        observer.observe(&self.element);
        Subscription::with_resources(move || observer.disconnect(), closure)
    }
}

/// The page a [`WebElement`] lives in.
#[derive(Clone, Debug)]
pub struct WebDocument {
    document: web_sys::Document,
    window: web_sys::Window,
}

impl WebDocument {
    /// Resolves the current window's document.
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { document, window })
    }
}

impl Document for WebDocument {
    fn query_selector(&self, selector: &str) -> Option<ElementRef> {
        let element = self.document.query_selector(selector).ok().flatten()?;
        Some(Rc::new(WebElement::new(element, self.window.clone())))
    }

    fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }

    fn on_content_loaded(&self, handler: OnceCallback) {
        let callback = Closure::once_into_js(move || handler());
        if let Err(err) = self
            .document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        {
            tracing::debug!(?err, "DOMContentLoaded registration failed");
        }
    }

    fn request_animation_frame(&self, handler: OnceCallback) {
        let callback = Closure::once_into_js(move || handler());
        if let Err(err) = self.window.request_animation_frame(callback.unchecked_ref()) {
            tracing::debug!(?err, "requestAnimationFrame failed");
        }
    }
}
