use crate::common::Dimension;

/// A single position with X and Y ordinates and optional Z and M.
///
/// The point's dimension is derived from which optional ordinates are
/// present; containers use it to enforce Z/M consistency across their
/// children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) z: Option<f64>,
    pub(crate) m: Option<f64>,
}

impl Point {
    /// A 2D point
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    /// A point with an elevation
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    /// A point with a measure
    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: Some(m),
        }
    }

    /// A point with both elevation and measure
    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    /// Assemble a point from its ordinates
    pub fn from_parts(x: f64, y: f64, z: Option<f64>, m: Option<f64>) -> Self {
        Self { x, y, z, m }
    }

    /// The X ordinate
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The Y ordinate
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The Z ordinate, if present
    #[inline]
    pub fn z(&self) -> Option<f64> {
        self.z
    }

    /// The M ordinate, if present
    #[inline]
    pub fn m(&self) -> Option<f64> {
        self.m
    }

    /// The dimension implied by the present ordinates
    pub fn dimension(&self) -> Dimension {
        Dimension::from_flags(self.z.is_some(), self.m.is_some())
    }
}
