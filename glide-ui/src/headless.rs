//! In-memory host document.
//!
//! ## Usage
//!
//! Build a page without a browser, drive layout changes and clicks by hand,
//! and inspect the inline styles a component wrote.
//!
//! ```
//! use glide_ui::{Document, Element, Px, headless::{HeadlessDocument, HeadlessElement}};
//!
//! let document = HeadlessDocument::new();
//! let panel = HeadlessElement::new("div").class("panel").width(480.0);
//! document.body().append(&panel);
//!
//! let found = document.query_selector(".panel").expect("panel is attached");
//! assert_eq!(found.bounding_width(), Px(480.0));
//! ```
//!
//! Layout is not computed: every element reports the width it was given.
//! Selectors are single compound selectors (`tag`, `.class`, `#id`,
//! `[attr]`, `[attr="value"]` and combinations of them); combinators match
//! nothing.

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeMap, VecDeque},
    fmt,
    rc::{Rc, Weak},
};

use smallvec::SmallVec;

use crate::{
    dom::{Callback, Document, Element, ElementId, ElementRef, OnceCallback},
    px::Px,
    style::StyleProperty,
    subscription::Subscription,
};

#[derive(Default)]
struct NodeState {
    classes: SmallVec<[String; 2]>,
    attributes: BTreeMap<String, String>,
    width: Px,
    computed: BTreeMap<String, String>,
    inline: BTreeMap<StyleProperty, String>,
    style_writes: usize,
    disabled: bool,
    children: Vec<HeadlessElement>,
    click_listeners: Vec<(u64, Callback)>,
    size_observers: Vec<(u64, Callback)>,
    next_registration: u64,
}

type Registrations = fn(&mut NodeState) -> &mut Vec<(u64, Callback)>;

fn click_listeners(state: &mut NodeState) -> &mut Vec<(u64, Callback)> {
    &mut state.click_listeners
}

fn size_observers(state: &mut NodeState) -> &mut Vec<(u64, Callback)> {
    &mut state.size_observers
}

struct Node {
    id: ElementId,
    tag: String,
    is_root: bool,
    parent: RefCell<Weak<Node>>,
    state: RefCell<NodeState>,
}

/// An element of a [`HeadlessDocument`].
///
/// Cloning yields another handle to the same node.
#[derive(Clone)]
pub struct HeadlessElement {
    node: Rc<Node>,
}

impl HeadlessElement {
    /// Creates a detached element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_root_flag(tag.into(), false)
    }

    fn with_root_flag(tag: String, is_root: bool) -> Self {
        Self {
            node: Rc::new(Node {
                id: ElementId::next(),
                tag: tag.to_ascii_lowercase(),
                is_root,
                parent: RefCell::new(Weak::new()),
                state: RefCell::new(NodeState::default()),
            }),
        }
    }

    /// Adds a class name.
    pub fn class(self, class: impl Into<String>) -> Self {
        self.node.state.borrow_mut().classes.push(class.into());
        self
    }

    /// Sets an attribute. Names are stored lowercased, as in HTML documents.
    pub fn attr(self, name: &str, value: impl Into<String>) -> Self {
        self.node
            .state
            .borrow_mut()
            .attributes
            .insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Sets the initial laid-out width without notifying observers.
    pub fn width(self, width: f32) -> Self {
        self.node.state.borrow_mut().width = Px(width);
        self
    }

    /// Sets a computed style value reported by [`Element::computed_style`].
    pub fn computed(self, property: &str, value: impl Into<String>) -> Self {
        self.set_computed(property, value);
        self
    }

    /// Replaces a computed style value after construction.
    pub fn set_computed(&self, property: &str, value: impl Into<String>) {
        self.node
            .state
            .borrow_mut()
            .computed
            .insert(property.to_string(), value.into());
    }

    /// Appends `child`, detaching it from any previous parent.
    pub fn append(&self, child: &HeadlessElement) {
        child.remove();
        *child.node.parent.borrow_mut() = Rc::downgrade(&self.node);
        self.node.state.borrow_mut().children.push(child.clone());
    }

    /// Detaches the element from its parent.
    pub fn remove(&self) {
        let parent = self.node.parent.replace(Weak::new()).upgrade();
        if let Some(parent) = parent {
            parent
                .state
                .borrow_mut()
                .children
                .retain(|c| !Rc::ptr_eq(&c.node, &self.node));
        }
    }

    /// Changes the laid-out width and notifies size observers if it differs.
    pub fn set_width(&self, width: f32) {
        let observers: Vec<Callback> = {
            let mut state = self.node.state.borrow_mut();
            if state.width == Px(width) {
                return;
            }
            state.width = Px(width);
            state.size_observers.iter().map(|(_, cb)| cb.clone()).collect()
        };
        for observer in observers {
            observer();
        }
    }

    /// Simulates a user click. Disabled elements do not dispatch.
    ///
    /// Returns whether any listener ran.
    pub fn click(&self) -> bool {
        let listeners: Vec<Callback> = {
            let state = self.node.state.borrow();
            if state.disabled {
                return false;
            }
            state.click_listeners.iter().map(|(_, cb)| cb.clone()).collect()
        };
        for listener in &listeners {
            listener();
        }
        !listeners.is_empty()
    }

    /// Current inline value of `property`.
    pub fn style(&self, property: StyleProperty) -> Option<String> {
        self.node.state.borrow().inline.get(&property).cloned()
    }

    /// Number of inline style writes performed so far.
    pub fn style_writes(&self) -> usize {
        self.node.state.borrow().style_writes
    }

    /// Whether the element is disabled.
    pub fn is_disabled(&self) -> bool {
        self.node.state.borrow().disabled
    }

    /// Number of live click listeners.
    pub fn click_listener_count(&self) -> usize {
        self.node.state.borrow().click_listeners.len()
    }

    /// Number of live size observers.
    pub fn size_observer_count(&self) -> usize {
        self.node.state.borrow().size_observers.len()
    }

    /// Returns a type-erased handle for component APIs.
    pub fn to_ref(&self) -> ElementRef {
        Rc::new(self.clone())
    }

    fn register(&self, handler: Callback, pick: Registrations) -> Subscription {
        let key = {
            let mut state = self.node.state.borrow_mut();
            let key = state.next_registration;
            state.next_registration += 1;
            pick(&mut *state).push((key, handler));
            key
        };
        let node = Rc::downgrade(&self.node);
        Subscription::new(move || {
            if let Some(node) = node.upgrade() {
                pick(&mut *node.state.borrow_mut()).retain(|(k, _)| *k != key);
            }
        })
    }

    fn matches(&self, selector: &Selector) -> bool {
        if let Some(tag) = &selector.tag
            && *tag != self.node.tag
        {
            return false;
        }
        let state = self.node.state.borrow();
        if let Some(id) = &selector.id
            && state.attributes.get("id") != Some(id)
        {
            return false;
        }
        if !selector
            .classes
            .iter()
            .all(|class| state.classes.iter().any(|c| c == class))
        {
            return false;
        }
        selector.attributes.iter().all(|(name, value)| {
            match (state.attributes.get(name), value) {
                (None, _) => false,
                (Some(_), None) => true,
                (Some(actual), Some(expected)) => actual == expected,
            }
        })
    }

    fn collect_matches(&self, selector: &Selector, out: &mut Vec<HeadlessElement>, first_only: bool) {
        let children = self.node.state.borrow().children.clone();
        for child in children {
            if first_only && !out.is_empty() {
                return;
            }
            if child.matches(selector) {
                out.push(child.clone());
            }
            child.collect_matches(selector, out, first_only);
        }
    }

    fn find(&self, selector: &str, first_only: bool) -> Vec<HeadlessElement> {
        let Some(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        self.collect_matches(&selector, &mut out, first_only);
        if first_only {
            out.truncate(1);
        }
        out
    }
}

impl fmt::Debug for HeadlessElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.node.state.borrow();
        f.debug_struct("HeadlessElement")
            .field("id", &self.node.id)
            .field("tag", &self.node.tag)
            .field("classes", &state.classes)
            .field("width", &state.width)
            .finish()
    }
}

impl Element for HeadlessElement {
    fn id(&self) -> ElementId {
        self.node.id
    }

    fn query_selector(&self, selector: &str) -> Option<ElementRef> {
        self.find(selector, true).first().map(HeadlessElement::to_ref)
    }

    fn query_selector_all(&self, selector: &str) -> Vec<ElementRef> {
        self.find(selector, false)
            .iter()
            .map(HeadlessElement::to_ref)
            .collect()
    }

    fn bounding_width(&self) -> Px {
        self.node.state.borrow().width
    }

    fn offset_width(&self) -> Px {
        self.node.state.borrow().width
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        self.node.state.borrow().computed.get(property).cloned()
    }

    fn set_style(&self, property: StyleProperty, value: &str) {
        let mut state = self.node.state.borrow_mut();
        state.inline.insert(property, value.to_string());
        state.style_writes += 1;
    }

    fn set_disabled(&self, disabled: bool) {
        self.node.state.borrow_mut().disabled = disabled;
    }

    fn is_connected(&self) -> bool {
        let mut current = self.node.clone();
        loop {
            if current.is_root {
                return true;
            }
            let parent = current.parent.borrow().upgrade();
            match parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn add_click_listener(&self, handler: Callback) -> Subscription {
        self.register(handler, click_listeners)
    }

    fn observe_size(&self, handler: Callback) -> Subscription {
        self.register(handler, size_observers)
    }
}

#[derive(Default)]
struct DocumentState {
    loading: Cell<bool>,
    loaded_handlers: RefCell<Vec<OnceCallback>>,
    frames: RefCell<VecDeque<OnceCallback>>,
}

/// An in-memory page with a `body` root.
///
/// Cloning yields another handle to the same page.
///
/// Elements only hold a weak link to their parent, so the page's `body`
/// lives as long as some handle to the document does. Once every
/// `HeadlessDocument` handle is dropped, all elements report
/// [`Element::is_connected`] as `false`.
#[derive(Clone)]
pub struct HeadlessDocument {
    body: HeadlessElement,
    state: Rc<DocumentState>,
}

impl Default for HeadlessDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDocument {
    /// Creates an empty, fully loaded page.
    pub fn new() -> Self {
        Self {
            body: HeadlessElement::with_root_flag("body".to_string(), true),
            state: Rc::new(DocumentState::default()),
        }
    }

    /// The root element; descendants of it are connected.
    pub fn body(&self) -> &HeadlessElement {
        &self.body
    }

    /// Marks the page as still parsing.
    pub fn set_loading(&self, loading: bool) {
        self.state.loading.set(loading);
    }

    /// Finishes loading and runs content-loaded handlers in registration order.
    pub fn finish_loading(&self) {
        self.state.loading.set(false);
        let handlers = std::mem::take(&mut *self.state.loaded_handlers.borrow_mut());
        for handler in handlers {
            handler();
        }
    }

    /// Runs the callbacks queued for the next frame.
    ///
    /// Callbacks requested while the frame runs are deferred to the
    /// following frame. Returns how many callbacks ran.
    pub fn run_frame(&self) -> usize {
        let frame = std::mem::take(&mut *self.state.frames.borrow_mut());
        let ran = frame.len();
        for callback in frame {
            callback();
        }
        ran
    }

    /// Number of callbacks waiting for the next frame.
    pub fn pending_frames(&self) -> usize {
        self.state.frames.borrow().len()
    }

    /// Returns a type-erased handle for component APIs.
    pub fn to_ref(&self) -> Rc<dyn Document> {
        Rc::new(self.clone())
    }
}

impl fmt::Debug for HeadlessDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessDocument")
            .field("loading", &self.state.loading.get())
            .field("pending_frames", &self.pending_frames())
            .finish()
    }
}

impl Document for HeadlessDocument {
    fn query_selector(&self, selector: &str) -> Option<ElementRef> {
        let selector_parsed = Selector::parse(selector)?;
        if self.body.matches(&selector_parsed) {
            return Some(self.body.to_ref());
        }
        Element::query_selector(&self.body, selector)
    }

    fn is_loading(&self) -> bool {
        self.state.loading.get()
    }

    fn on_content_loaded(&self, handler: OnceCallback) {
        self.state.loaded_handlers.borrow_mut().push(handler);
    }

    fn request_animation_frame(&self, handler: OnceCallback) {
        self.state.frames.borrow_mut().push_back(handler);
    }
}

#[derive(Debug, Default, PartialEq)]
struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, Option<String>)>,
}

impl Selector {
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() || input.contains([' ', '>', '+', '~', ',']) {
            return None;
        }
        let mut selector = Selector::default();
        let mut rest = input;

        let tag_end = rest.find(['.', '#', '[']).unwrap_or(rest.len());
        if tag_end > 0 {
            let tag = &rest[..tag_end];
            if tag != "*" {
                selector.tag = Some(tag.to_ascii_lowercase());
            }
            rest = &rest[tag_end..];
        }

        while let Some(first) = rest.chars().next() {
            match first {
                '.' | '#' => {
                    let body = &rest[1..];
                    let end = body.find(['.', '#', '[']).unwrap_or(body.len());
                    let name = &body[..end];
                    if name.is_empty() {
                        return None;
                    }
                    if first == '.' {
                        selector.classes.push(name.to_string());
                    } else {
                        selector.id = Some(name.to_string());
                    }
                    rest = &body[end..];
                }
                '[' => {
                    let close = rest.find(']')?;
                    let inner = &rest[1..close];
                    let (name, value) = match inner.split_once('=') {
                        Some((name, value)) => {
                            let value = value.trim().trim_matches(['"', '\'']);
                            (name.trim(), Some(value.to_string()))
                        }
                        None => (inner.trim(), None),
                    };
                    if name.is_empty() {
                        return None;
                    }
                    selector
                        .attributes
                        .push((name.to_ascii_lowercase(), value));
                    rest = &rest[close + 1..];
                }
                _ => return None,
            }
        }
        Some(selector)
    }
}
