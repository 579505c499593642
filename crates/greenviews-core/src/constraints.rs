//! Layout constraints for widgets.
//!
//! A parent hands a widget a [`Constraints`] box; per axis that box reads as
//! one of three [`MeasureSpec`] modes, which is what size-to-content widgets
//! actually branch on.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Layout constraints that specify minimum and maximum sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

/// How one axis of a [`Constraints`] box constrains the widget.
///
/// Bounds are always finite and `min <= max`, so [`MeasureSpec::resolve`]
/// never yields NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MeasureSpec {
    /// The parent dictates this exact extent.
    Exactly(f32),
    /// The widget picks its extent within `[min, max]`.
    AtMost {
        /// Smallest allowed extent
        min: f32,
        /// Largest allowed extent
        max: f32,
    },
    /// No upper bound.
    Unspecified {
        /// Smallest allowed extent
        min: f32,
    },
}

impl MeasureSpec {
    fn from_range(min: f32, max: f32) -> Self {
        let min = if min.is_finite() { min.max(0.0) } else { 0.0 };
        if !max.is_finite() {
            return Self::Unspecified { min };
        }
        let max = max.max(min);
        if max == min {
            Self::Exactly(max)
        } else {
            Self::AtMost { min, max }
        }
    }

    /// Resolve a preferred extent against this spec.
    #[must_use]
    pub fn resolve(self, preferred: f32) -> f32 {
        match self {
            Self::Exactly(size) => size,
            Self::AtMost { min, max } => preferred.max(min).min(max),
            Self::Unspecified { min } => preferred.max(min),
        }
    }
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Create tight constraints that allow only the exact size.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Create unbounded constraints.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Horizontal measure spec.
    #[must_use]
    pub fn width_spec(&self) -> MeasureSpec {
        MeasureSpec::from_range(self.min_width, self.max_width)
    }

    /// Vertical measure spec.
    #[must_use]
    pub fn height_spec(&self) -> MeasureSpec {
        MeasureSpec::from_range(self.min_height, self.max_height)
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_default() {
        let c = Constraints::default();
        assert_eq!(c.min_width, 0.0);
        assert_eq!(c.max_width, f32::INFINITY);
    }

    #[test]
    fn test_constraints_tight() {
        let c = Constraints::tight(Size::new(100.0, 50.0));
        assert_eq!(c.width_spec(), MeasureSpec::Exactly(100.0));
        assert_eq!(c.height_spec(), MeasureSpec::Exactly(50.0));
    }

    #[test]
    fn test_constraints_loose_is_at_most() {
        let c = Constraints::loose(Size::new(100.0, 50.0));
        assert_eq!(
            c.width_spec(),
            MeasureSpec::AtMost {
                min: 0.0,
                max: 100.0
            }
        );
    }

    #[test]
    fn test_constraints_unbounded_is_unspecified() {
        let c = Constraints::unbounded();
        assert_eq!(c.width_spec(), MeasureSpec::Unspecified { min: 0.0 });
    }

    #[test]
    fn test_infinite_tight_is_unspecified() {
        let c = Constraints::tight(Size::new(f32::INFINITY, f32::INFINITY));
        assert_eq!(c.width_spec(), MeasureSpec::Unspecified { min: 0.0 });
        assert_eq!(c.height_spec().resolve(40.0), 40.0);
    }

    #[test]
    fn test_inverted_or_nan_bounds_stay_finite() {
        let c = Constraints::new(200.0, 100.0, f32::NAN, 50.0);
        assert_eq!(c.width_spec(), MeasureSpec::Exactly(200.0));
        assert_eq!(
            c.height_spec(),
            MeasureSpec::AtMost {
                min: 0.0,
                max: 50.0
            }
        );
    }

    #[test]
    fn test_measure_spec_resolve() {
        assert_eq!(MeasureSpec::Exactly(30.0).resolve(100.0), 30.0);
        let at_most = MeasureSpec::AtMost {
            min: 150.0,
            max: 300.0,
        };
        assert_eq!(at_most.resolve(100.0), 150.0);
        assert_eq!(at_most.resolve(200.0), 200.0);
        assert_eq!(at_most.resolve(400.0), 300.0);
        assert_eq!(MeasureSpec::Unspecified { min: 10.0 }.resolve(100.0), 100.0);
        assert_eq!(MeasureSpec::Unspecified { min: 10.0 }.resolve(f32::NAN), 10.0);
    }
}
