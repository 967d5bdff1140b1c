//! Typed inline style values written to host elements.
//!
//! Components never build CSS strings by hand; they compose the values in
//! this module and let [`fmt::Display`] render the declaration text that
//! the host element receives through [`crate::Element::set_style`].

use std::{fmt, time::Duration};

use smallvec::SmallVec;
use thiserror::Error;

use crate::px::Px;

/// Inline style properties a component may mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    /// `transform`
    Transform,
    /// `transition`
    Transition,
    /// `opacity`
    Opacity,
    /// `cursor`
    Cursor,
}

impl StyleProperty {
    /// Returns the CSS property name.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::Transition => "transition",
            Self::Opacity => "opacity",
            Self::Cursor => "cursor",
        }
    }
}

/// A single transform function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// `translateX(<px>)`
    TranslateX(Px),
    /// `scale(<factor>)`
    Scale(f32),
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TranslateX(px) => write!(f, "translateX({px})"),
            Self::Scale(factor) => write!(f, "scale({factor})"),
        }
    }
}

/// Timing function of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// The `ease` keyword.
    Ease,
    /// `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f32, f32, f32, f32),
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ease => f.write_str("ease"),
            Self::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// One `<property> <duration> <easing>` entry of a transition list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    /// Animated property.
    pub property: StyleProperty,
    /// Duration of the transition.
    pub duration: Duration,
    /// Timing function.
    pub easing: Easing,
}

impl TransitionSpec {
    /// Creates a transition entry.
    pub const fn new(property: StyleProperty, duration: Duration, easing: Easing) -> Self {
        Self {
            property,
            duration,
            easing,
        }
    }
}

impl fmt::Display for TransitionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}s {}",
            self.property.css_name(),
            self.duration.as_secs_f32(),
            self.easing
        )
    }
}

/// Value of the `transition` property.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// `none`: changes apply as an instantaneous jump.
    None,
    /// A comma separated list of timed transitions.
    Timed(SmallVec<[TransitionSpec; 2]>),
}

impl Transition {
    /// A transition of a single property.
    pub fn single(spec: TransitionSpec) -> Self {
        Self::Timed(SmallVec::from_slice(&[spec]))
    }

    /// A transition of several properties.
    pub fn list(specs: &[TransitionSpec]) -> Self {
        if specs.is_empty() {
            Self::None
        } else {
            Self::Timed(SmallVec::from_slice(specs))
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Timed(specs) => {
                for (i, spec) in specs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{spec}")?;
                }
                Ok(())
            }
        }
    }
}

/// Mouse cursor shown over an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// `pointer`
    Pointer,
    /// `not-allowed`
    NotAllowed,
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pointer => "pointer",
            Self::NotAllowed => "not-allowed",
        })
    }
}

/// Errors produced while reading a computed length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthParseError {
    /// The computed value was empty.
    #[error("empty length value")]
    Empty,
    /// A keyword such as `normal` that carries no pixel value.
    #[error("length keyword `{0}` has no pixel value")]
    Keyword(String),
    /// The numeric part could not be parsed.
    #[error("invalid length `{0}`")]
    Invalid(String),
    /// Lengths in this position must not be negative.
    #[error("negative length `{0}`")]
    Negative(String),
}

/// Parses a computed pixel length such as `20px`, `12.5px` or `0`.
///
/// Only pixel lengths are accepted because computed styles always resolve
/// to pixels.
pub fn parse_length(value: &str) -> Result<Px, LengthParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(LengthParseError::Empty);
    }
    let number = value.strip_suffix("px").unwrap_or(value).trim_end();
    if number.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
        return Err(LengthParseError::Keyword(value.to_string()));
    }
    let parsed: f32 = number
        .parse()
        .map_err(|_| LengthParseError::Invalid(value.to_string()))?;
    if !parsed.is_finite() {
        return Err(LengthParseError::Invalid(value.to_string()));
    }
    if parsed < 0.0 {
        return Err(LengthParseError::Negative(value.to_string()));
    }
    Ok(Px(parsed))
}

/// Parses the column component of a computed `gap` value.
///
/// `gap` is a shorthand for `row-gap column-gap`; when both are present the
/// second one spaces items along a row.
pub fn parse_column_gap(value: &str) -> Result<Px, LengthParseError> {
    let mut parts = value.split_whitespace();
    let row = parts.next().ok_or(LengthParseError::Empty)?;
    match parts.next() {
        Some(column) => parse_length(column),
        None => parse_length(row),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_paging_transition() {
        let transition = Transition::single(TransitionSpec::new(
            StyleProperty::Transform,
            Duration::from_millis(500),
            Easing::CubicBezier(0.25, 0.46, 0.45, 0.94),
        ));
        assert_eq!(
            transition.to_string(),
            "transform 0.5s cubic-bezier(0.25, 0.46, 0.45, 0.94)"
        );
        assert_eq!(Transition::None.to_string(), "none");
    }

    #[test]
    fn renders_transition_list() {
        let transition = Transition::list(&[
            TransitionSpec::new(
                StyleProperty::Transform,
                Duration::from_millis(600),
                Easing::Ease,
            ),
            TransitionSpec::new(
                StyleProperty::Opacity,
                Duration::from_millis(600),
                Easing::Ease,
            ),
        ]);
        assert_eq!(
            transition.to_string(),
            "transform 0.6s ease, opacity 0.6s ease"
        );
        assert_eq!(Transition::list(&[]), Transition::None);
    }

    #[test]
    fn renders_transforms() {
        assert_eq!(
            Transform::TranslateX(Px(-640.0)).to_string(),
            "translateX(-640px)"
        );
        assert_eq!(Transform::Scale(0.8).to_string(), "scale(0.8)");
        assert_eq!(Transform::Scale(1.0).to_string(), "scale(1)");
    }

    #[test]
    fn parses_lengths() {
        assert_eq!(parse_length("20px"), Ok(Px(20.0)));
        assert_eq!(parse_length(" 12.5px "), Ok(Px(12.5)));
        assert_eq!(parse_length("0"), Ok(Px::ZERO));
        assert_eq!(parse_length(""), Err(LengthParseError::Empty));
        assert_eq!(
            parse_length("normal"),
            Err(LengthParseError::Keyword("normal".into()))
        );
        assert_eq!(
            parse_length("-4px"),
            Err(LengthParseError::Negative("-4px".into()))
        );
        assert!(matches!(
            parse_length("2em"),
            Err(LengthParseError::Invalid(_))
        ));
    }

    #[test]
    fn gap_prefers_column_component() {
        assert_eq!(parse_column_gap("20px"), Ok(Px(20.0)));
        assert_eq!(parse_column_gap("10px 24px"), Ok(Px(24.0)));
        assert_eq!(parse_column_gap("   "), Err(LengthParseError::Empty));
    }
}
