//! Timing constants shared by animated components.

use std::time::Duration;

use glide_ui::{Easing, StyleProperty, Transition, TransitionSpec};

/// Duration of a paging move.
pub const PAGE_DURATION: Duration = Duration::from_millis(500);

/// Ease-out-quad approximation used for paging moves.
pub const PAGE_EASING: Easing = Easing::CubicBezier(0.25, 0.46, 0.45, 0.94);

/// Duration of an item's enter effect.
pub const ITEM_DURATION: Duration = Duration::from_millis(600);

/// Scale an item starts from when it pops in.
pub const POP_START_SCALE: f32 = 0.8;

/// Transition applied to the strip for an animated move.
pub fn page_transition() -> Transition {
    Transition::single(TransitionSpec::new(
        StyleProperty::Transform,
        PAGE_DURATION,
        PAGE_EASING,
    ))
}

/// Transition applied to items so their transform and opacity ease.
pub fn item_transition() -> Transition {
    Transition::list(&[
        TransitionSpec::new(StyleProperty::Transform, ITEM_DURATION, Easing::Ease),
        TransitionSpec::new(StyleProperty::Opacity, ITEM_DURATION, Easing::Ease),
    ])
}
