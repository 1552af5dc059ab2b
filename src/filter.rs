//! Read-time coordinate filtering.
//!
//! WKB carries NaN and infinite ordinates without complaint; a
//! [`PointFiniteFilter`] lets a reader drop such points instead of
//! materializing them. Rejected points are removed, not errors: a container
//! whose points are all rejected is itself dropped, and the drop propagates
//! up to the root.

use crate::geometry::Point;

/// Which numeric classes a filter accepts beyond finite values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FiniteFilterType {
    /// Accept finite ordinates only
    #[default]
    Finite,
    /// Accept finite and NaN ordinates, dropping infinites
    FiniteAndNan,
    /// Accept finite and infinite ordinates, dropping NaNs
    FiniteAndInfinite,
}

/// A per-point predicate applied while reading.
///
/// X and Y are always tested; Z and M only when the corresponding flag is
/// set and the ordinate is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointFiniteFilter {
    /// The accepted numeric classes
    pub filter_type: FiniteFilterType,
    /// Whether to test Z ordinates
    pub filter_z: bool,
    /// Whether to test M ordinates
    pub filter_m: bool,
}

impl PointFiniteFilter {
    /// A filter over X and Y with the given acceptance policy
    pub fn new(filter_type: FiniteFilterType) -> Self {
        Self {
            filter_type,
            filter_z: false,
            filter_m: false,
        }
    }

    /// Whether every tested ordinate of `point` is acceptable
    pub fn accept(&self, point: &Point) -> bool {
        if !self.accept_value(point.x()) || !self.accept_value(point.y()) {
            return false;
        }
        if self.filter_z {
            if let Some(z) = point.z() {
                if !self.accept_value(z) {
                    return false;
                }
            }
        }
        if self.filter_m {
            if let Some(m) = point.m() {
                if !self.accept_value(m) {
                    return false;
                }
            }
        }
        true
    }

    fn accept_value(&self, value: f64) -> bool {
        match self.filter_type {
            FiniteFilterType::Finite => value.is_finite(),
            FiniteFilterType::FiniteAndNan => value.is_finite() || value.is_nan(),
            FiniteFilterType::FiniteAndInfinite => value.is_finite() || value.is_infinite(),
        }
    }
}
