//! Logical pixel lengths for host layout measurements.
//!
//! Host environments report box sizes as fractional CSS pixels, so [`Px`]
//! wraps an `f32`. Values may be negative (strip offsets move left), but
//! measured sizes read through [`Px::sanitized`] are never negative or NaN.
//!
//! # Example
//!
//! ```
//! use glide_ui::px::Px;
//!
//! let item = Px(300.0);
//! let gap = Px(20.0);
//! let step = item + gap;
//! assert_eq!(step, Px(320.0));
//! assert_eq!((-(step * 3.0)).to_string(), "-960px");
//! ```

use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

/// A length in logical (CSS) pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Px(pub f32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0.0);

    /// Returns the raw `f32` value.
    pub fn to_f32(self) -> f32 {
        self.0
    }

    /// Clamps a measured length into a usable size.
    ///
    /// NaN and negative values become zero, infinities become zero as well
    /// since no host reports an infinite box.
    pub fn sanitized(self) -> Self {
        if self.0.is_finite() && self.0 > 0.0 {
            self
        } else {
            Self::ZERO
        }
    }

    /// Multiplies by an item count.
    pub fn times(self, count: usize) -> Self {
        Self(self.0 * count as f32)
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `-0px` is legal CSS but reads badly in inline styles.
        let value = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{value}px")
    }
}

impl Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f32> for Px {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Neg for Px {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
