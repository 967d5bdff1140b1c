//! Enabled/disabled presentation of the previous and next controls.

use glide_ui::{Cursor, ElementRef, StyleProperty};

/// Opacity of a control that cannot be used.
pub const DISABLED_OPACITY: f32 = 0.3;

/// Which way a control moves the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    /// Towards the first item.
    Previous,
    /// Towards the last item.
    Next,
}

impl NavDirection {
    /// Index delta requested by one click.
    pub fn delta(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// A navigation control resolved inside the slider container.
#[derive(Clone)]
pub(crate) struct NavButton {
    pub(crate) direction: NavDirection,
    pub(crate) element: ElementRef,
}

impl NavButton {
    pub(crate) fn new(direction: NavDirection, element: ElementRef) -> Self {
        Self { direction, element }
    }

    /// Writes the control's disabled state, opacity and cursor.
    pub(crate) fn apply(&self, disabled: bool) {
        let element = &self.element;
        element.set_disabled(disabled);
        let (opacity, cursor) = if disabled {
            (DISABLED_OPACITY, Cursor::NotAllowed)
        } else {
            (1.0, Cursor::Pointer)
        };
        element.set_style(StyleProperty::Opacity, &opacity.to_string());
        element.set_style(StyleProperty::Cursor, &cursor.to_string());
    }
}
