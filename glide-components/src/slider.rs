//! Responsive item slider with paged previous/next navigation.
//!
//! ## Usage
//!
//! Page through a row of product cards, testimonials or logos where the
//! number of visible items depends on the viewport width.
//!
//! The slider binds to markup of this shape:
//!
//! ```html
//! <div class="slider">
//!   <button data-slider-prevBtn>‹</button>
//!   <ul class="slider-list">
//!     <li class="slider-list__item">…</li>
//!   </ul>
//!   <button data-slider-nextBtn>›</button>
//! </div>
//! ```
//!
//! It moves `.slider-list` with a horizontal translate, so the container is
//! expected to clip its overflow. Both controls are optional.

mod claim;
mod navigation;
mod pagination;
#[cfg(test)]
mod tests;

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

use derive_setters::Setters;
use glide_ui::{
    Document, ElementRef, Px, StyleProperty, Subscription, Transform, Transition,
    parse_column_gap,
};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::animation::{POP_START_SCALE, item_transition, page_transition};

use self::{
    claim::ContainerClaim,
    navigation::NavButton,
};

pub use self::{
    navigation::{DISABLED_OPACITY, NavDirection},
    pagination::{PaginationState, visible_item_count},
};

/// Selector of the container used when none is configured.
pub const DEFAULT_SELECTOR: &str = ".slider";
/// Selector of the strip that holds the items.
pub const LIST_SELECTOR: &str = ".slider-list";
/// Selector of one item.
pub const ITEM_SELECTOR: &str = ".slider-list__item";
/// Selector of the "previous" control.
pub const PREV_SELECTOR: &str = "[data-slider-prevBtn]";
/// Selector of the "next" control.
pub const NEXT_SELECTOR: &str = "[data-slider-nextBtn]";

/// Cosmetic effect played on the item that becomes current after a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EnterEffect {
    /// The item pops from a shrunk, transparent state to full size.
    #[default]
    Pop,
    /// Only the strip moves.
    None,
}

/// How a navigation request is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Eased move, used for user navigation.
    Animated,
    /// Instantaneous jump, used after layout changes.
    Instant,
}

/// Configuration of a slider instance.
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct SliderArgs {
    /// Selector of the container element.
    #[setters(into)]
    pub selector: String,
    /// Effect played on the newly current item during animated moves.
    pub enter_effect: EnterEffect,
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            enter_effect: EnterEffect::default(),
        }
    }
}

/// Reasons a slider could not bind to the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachError {
    /// No element matches the configured selector.
    #[error("no slider container matches `{selector}`")]
    ContainerNotFound {
        /// The configured selector.
        selector: String,
    },
    /// The container has no `.slider-list` strip.
    #[error("slider container `{selector}` has no `.slider-list` element")]
    MissingList {
        /// The configured selector.
        selector: String,
    },
    /// Another slider already controls this container.
    #[error("slider container `{selector}` is already controlled by another slider")]
    ContainerClaimed {
        /// The configured selector.
        selector: String,
    },
}

struct SliderInner {
    document: Rc<dyn Document>,
    selector: String,
    container: ElementRef,
    list: ElementRef,
    items: Vec<ElementRef>,
    buttons: Vec<NavButton>,
    enter_effect: EnterEffect,
    state: RefCell<PaginationState>,
    subscriptions: RefCell<Vec<Subscription>>,
    claim: RefCell<ContainerClaim>,
    attached: Cell<bool>,
}

impl SliderInner {
    fn remeasure(&self) {
        if !self.attached.get() {
            return;
        }
        if !self.container.is_connected() {
            debug!(selector = %self.selector, "slider container left the document");
            self.teardown();
            return;
        }
        let Some(first) = self.items.first() else {
            return;
        };

        let container_width = self.container.bounding_width();
        let item_width = first.offset_width();
        let gap = self.gap();
        let index = {
            let mut state = self.state.borrow_mut();
            state.update_metrics(container_width, item_width, gap);
            debug!(
                selector = %self.selector,
                container = %container_width,
                item = %state.item_width(),
                gap = %state.gap(),
                max_index = state.max_index(),
                index = state.current_index(),
                "slider remeasured"
            );
            state.current_index()
        };
        self.go_to(isize::try_from(index).unwrap_or(isize::MAX), Motion::Instant);
    }

    fn gap(&self) -> Px {
        let Some(value) = self.list.computed_style("gap") else {
            return Px::ZERO;
        };
        match parse_column_gap(&value) {
            Ok(gap) => gap,
            Err(err) => {
                trace!(%err, "slider gap unreadable, using 0");
                Px::ZERO
            }
        }
    }

    fn go_to(&self, target: isize, motion: Motion) {
        if !self.attached.get() {
            return;
        }
        let (index, offset) = {
            let mut state = self.state.borrow_mut();
            if state.item_count() == 0 {
                return;
            }
            let index = state.set_index(target);
            (index, state.offset())
        };
        trace!(selector = %self.selector, target, index, ?motion, "slider go_to");

        let transition = match motion {
            Motion::Animated => page_transition(),
            Motion::Instant => Transition::None,
        };
        self.list
            .set_style(StyleProperty::Transition, &transition.to_string());
        self.list.set_style(
            StyleProperty::Transform,
            &Transform::TranslateX(offset).to_string(),
        );

        if motion == Motion::Animated && self.enter_effect == EnterEffect::Pop {
            self.pop_in(index);
        }
        self.update_navigation_affordances();
    }

    fn pop_in(&self, index: usize) {
        let Some(item) = self.items.get(index).cloned() else {
            return;
        };
        item.set_style(StyleProperty::Transition, &Transition::None.to_string());
        item.set_style(
            StyleProperty::Transform,
            &Transform::Scale(POP_START_SCALE).to_string(),
        );
        item.set_style(StyleProperty::Opacity, "0");

        self.document.request_animation_frame(Box::new(move || {
            item.set_style(StyleProperty::Transition, &item_transition().to_string());
            item.set_style(StyleProperty::Transform, &Transform::Scale(1.0).to_string());
            item.set_style(StyleProperty::Opacity, "1");
        }));
    }

    fn step_by(&self, delta: isize) {
        let target = self.state.borrow().relative_target(delta);
        self.go_to(target, Motion::Animated);
    }

    fn update_navigation_affordances(&self) {
        let state = *self.state.borrow();
        for button in &self.buttons {
            let disabled = match button.direction {
                NavDirection::Previous => state.is_at_start(),
                NavDirection::Next => state.is_at_end(),
            };
            button.apply(disabled);
        }
    }

    fn teardown(&self) {
        if !self.attached.replace(false) {
            return;
        }
        for subscription in self.subscriptions.borrow_mut().iter_mut() {
            subscription.cancel();
        }
        self.claim.borrow_mut().release();
        debug!(selector = %self.selector, "slider detached");
    }
}

/// # Slider
///
/// Controller that keeps a strip of items paged inside its container.
///
/// ## Usage
///
/// Attach once per container. The slider remeasures whenever the container
/// is resized and moves one item per click on its controls.
///
/// ## Parameters
///
/// - `document` — the page the container lives in.
/// - `args` — configures the container selector and enter effect; see
///   [`SliderArgs`].
///
/// ## Examples
///
/// ```
/// use glide_components::slider::{Motion, Slider, SliderArgs};
/// use glide_ui::headless::{HeadlessDocument, HeadlessElement};
///
/// let document = HeadlessDocument::new();
/// let container = HeadlessElement::new("div").class("slider").width(1000.0);
/// let list = HeadlessElement::new("ul").class("slider-list").computed("gap", "20px");
/// for _ in 0..6 {
///     list.append(&HeadlessElement::new("li").class("slider-list__item").width(300.0));
/// }
/// container.append(&list);
/// document.body().append(&container);
///
/// let slider = Slider::attach(document.to_ref(), SliderArgs::default()).expect("container exists");
/// assert_eq!(slider.max_index(), 3);
///
/// slider.go_to(10, Motion::Animated);
/// assert_eq!(slider.current_index(), 3);
/// ```
pub struct Slider {
    inner: Rc<SliderInner>,
}

impl Slider {
    /// Binds a slider to the container matching `args.selector`.
    ///
    /// Returns `None` when the page has no usable container, leaving the
    /// page untouched.
    pub fn attach(document: Rc<dyn Document>, args: SliderArgs) -> Option<Self> {
        match Self::try_attach(document, args) {
            Ok(slider) => Some(slider),
            Err(err @ AttachError::ContainerNotFound { .. }) => {
                debug!(%err, "slider not attached");
                None
            }
            Err(err) => {
                warn!(%err, "slider not attached");
                None
            }
        }
    }

    /// Binds a slider, reporting why binding was impossible.
    ///
    /// # Errors
    ///
    /// Returns an [`AttachError`] when the container or its strip is missing,
    /// or when the container is already controlled by another slider.
    pub fn try_attach(document: Rc<dyn Document>, args: SliderArgs) -> Result<Self, AttachError> {
        let SliderArgs {
            selector,
            enter_effect,
        } = args;
        let Some(container) = document.query_selector(&selector) else {
            return Err(AttachError::ContainerNotFound { selector });
        };
        let Some(list) = container.query_selector(LIST_SELECTOR) else {
            return Err(AttachError::MissingList { selector });
        };
        let Some(claim) = ContainerClaim::acquire(container.id()) else {
            return Err(AttachError::ContainerClaimed { selector });
        };

        let items = container.query_selector_all(ITEM_SELECTOR);
        let buttons: Vec<NavButton> = [
            (NavDirection::Previous, PREV_SELECTOR),
            (NavDirection::Next, NEXT_SELECTOR),
        ]
        .into_iter()
        .filter_map(|(direction, control)| {
            container
                .query_selector(control)
                .map(|element| NavButton::new(direction, element))
        })
        .collect();

        if enter_effect == EnterEffect::Pop {
            let transition = item_transition().to_string();
            for item in &items {
                item.set_style(StyleProperty::Transition, &transition);
            }
        }

        let inner = Rc::new(SliderInner {
            document,
            selector,
            container,
            list,
            state: RefCell::new(PaginationState::new(items.len())),
            items,
            buttons,
            enter_effect,
            subscriptions: RefCell::new(Vec::new()),
            claim: RefCell::new(claim),
            attached: Cell::new(true),
        });

        let mut subscriptions = Vec::with_capacity(1 + inner.buttons.len());
        let weak = Rc::downgrade(&inner);
        subscriptions.push(inner.container.observe_size(Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.remeasure();
            }
        })));
        for button in &inner.buttons {
            let weak = Rc::downgrade(&inner);
            let delta = button.direction.delta();
            subscriptions.push(button.element.add_click_listener(Rc::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.step_by(delta);
                }
            })));
        }
        *inner.subscriptions.borrow_mut() = subscriptions;

        debug!(
            selector = %inner.selector,
            items = inner.items.len(),
            controls = inner.buttons.len(),
            "slider attached"
        );
        inner.remeasure();
        inner.update_navigation_affordances();
        Ok(Self { inner })
    }

    /// Recomputes item metrics from the current layout and re-renders the
    /// current index without animation.
    pub fn remeasure(&self) {
        self.inner.remeasure();
    }

    /// Moves to `target`, clamped into `0..=max_index`.
    pub fn go_to(&self, target: isize, motion: Motion) {
        self.inner.go_to(target, motion);
    }

    /// Moves one item in `direction` with animation, as a control click does.
    pub fn step(&self, direction: NavDirection) {
        self.inner.step_by(direction.delta());
    }

    /// Re-applies the enabled/disabled state of both controls.
    pub fn update_navigation_affordances(&self) {
        self.inner.update_navigation_affordances();
    }

    /// Snapshot of the pagination state.
    pub fn state(&self) -> PaginationState {
        *self.inner.state.borrow()
    }

    /// Index of the left-most visible item.
    pub fn current_index(&self) -> usize {
        self.state().current_index()
    }

    /// Largest reachable index.
    pub fn max_index(&self) -> usize {
        self.state().max_index()
    }

    /// The selector this slider was attached with.
    pub fn selector(&self) -> &str {
        &self.inner.selector
    }

    /// Whether the slider still reacts to resizes and clicks.
    pub fn is_attached(&self) -> bool {
        self.inner.attached.get()
    }

    /// Disconnects the size observer and control listeners and releases the
    /// container for another slider.
    pub fn detach(self) {
        self.inner.teardown();
    }
}

impl Drop for Slider {
    fn drop(&mut self) {
        self.inner.teardown();
    }
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("selector", &self.inner.selector)
            .field("attached", &self.inner.attached.get())
            .field("state", &*self.inner.state.borrow())
            .finish()
    }
}

/// A slider that attaches once the page has finished loading.
#[derive(Clone, Default)]
pub struct PendingSlider {
    slot: Rc<RefCell<Option<Slider>>>,
}

impl PendingSlider {
    /// Whether the slider has attached.
    pub fn is_mounted(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Runs `f` with the attached slider, if any.
    pub fn with<R>(&self, f: impl FnOnce(&Slider) -> R) -> Option<R> {
        self.slot.borrow().as_ref().map(f)
    }

    /// Takes ownership of the attached slider.
    pub fn take(&self) -> Option<Slider> {
        self.slot.borrow_mut().take()
    }
}

impl fmt::Debug for PendingSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSlider")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

/// Attaches a slider now if the page has loaded, otherwise when its content
/// has loaded.
///
/// ## Examples
///
/// ```
/// use glide_components::slider::{SliderArgs, mount_when_ready};
/// use glide_ui::headless::{HeadlessDocument, HeadlessElement};
///
/// let document = HeadlessDocument::new();
/// document.set_loading(true);
/// let container = HeadlessElement::new("div").class("slider");
/// container.append(&HeadlessElement::new("ul").class("slider-list"));
/// document.body().append(&container);
///
/// let pending = mount_when_ready(document.to_ref(), SliderArgs::default());
/// assert!(!pending.is_mounted());
/// document.finish_loading();
/// assert!(pending.is_mounted());
/// ```
pub fn mount_when_ready(document: Rc<dyn Document>, args: SliderArgs) -> PendingSlider {
    let pending = PendingSlider::default();
    if document.is_loading() {
        let slot = pending.slot.clone();
        let page = document.clone();
        document.on_content_loaded(Box::new(move || {
            *slot.borrow_mut() = Slider::attach(page, args);
        }));
    } else {
        *pending.slot.borrow_mut() = Slider::attach(document, args);
    }
    pending
}
