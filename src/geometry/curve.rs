use crate::common::{Dimension, GeometryType};
use crate::error::{WkbError, WkbResult};
use crate::geometry::{CircularString, LineString};

/// Any concrete curve: the member type of curve containers.
///
/// [`CompoundCurve`] members and [`CurvePolygon`] rings are curves, as are
/// the children a MULTICURVE record may carry.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    /// A straight-segment curve
    LineString(LineString),
    /// An arc-interpolated curve
    CircularString(CircularString),
    /// A stitched curve
    CompoundCurve(CompoundCurve),
}

impl Curve {
    /// The WKB type of this curve
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Curve::LineString(_) => GeometryType::LineString,
            Curve::CircularString(_) => GeometryType::CircularString,
            Curve::CompoundCurve(_) => GeometryType::CompoundCurve,
        }
    }

    /// The dimension of this curve
    pub fn dimension(&self) -> Dimension {
        match self {
            Curve::LineString(ls) => ls.dimension(),
            Curve::CircularString(cs) => cs.dimension(),
            Curve::CompoundCurve(cc) => cc.dimension(),
        }
    }

    /// The total number of points in this curve
    pub fn num_points(&self) -> usize {
        match self {
            Curve::LineString(ls) => ls.num_points(),
            Curve::CircularString(cs) => cs.num_points(),
            Curve::CompoundCurve(cc) => cc.num_points(),
        }
    }

    /// Whether this curve has no points
    pub fn is_empty(&self) -> bool {
        match self {
            Curve::LineString(ls) => ls.is_empty(),
            Curve::CircularString(cs) => cs.is_empty(),
            Curve::CompoundCurve(cc) => cc.is_empty(),
        }
    }
}

impl From<LineString> for Curve {
    fn from(value: LineString) -> Self {
        Curve::LineString(value)
    }
}

impl From<CircularString> for Curve {
    fn from(value: CircularString) -> Self {
        Curve::CircularString(value)
    }
}

impl From<CompoundCurve> for Curve {
    fn from(value: CompoundCurve) -> Self {
        Curve::CompoundCurve(value)
    }
}

/// A single continuous curve stitched from line strings and circular strings.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundCurve {
    pub(crate) dim: Dimension,
    pub(crate) curves: Vec<Curve>,
}

impl CompoundCurve {
    /// An empty compound curve of the given dimension
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            curves: Vec::new(),
        }
    }

    /// Append a member curve.
    ///
    /// Members are restricted to line strings and circular strings; a nested
    /// compound curve is rejected, as is a dimension mismatch.
    pub fn add_curve(&mut self, curve: impl Into<Curve>) -> WkbResult<()> {
        let curve = curve.into();
        if matches!(curve, Curve::CompoundCurve(_)) {
            return Err(WkbError::InvalidChildType {
                container: GeometryType::CompoundCurve,
                child: GeometryType::CompoundCurve,
            });
        }
        if curve.dimension() != self.dim {
            return Err(WkbError::DimensionMismatch {
                expected: self.dim,
                actual: curve.dimension(),
            });
        }
        self.curves.push(curve);
        Ok(())
    }

    /// The dimension of this compound curve
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// The member curves in order
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// The number of member curves
    pub fn num_curves(&self) -> usize {
        self.curves.len()
    }

    /// The member at `i`, if in bounds
    pub fn curve(&self, i: usize) -> Option<&Curve> {
        self.curves.get(i)
    }

    /// The total number of points across all members
    pub fn num_points(&self) -> usize {
        self.curves.iter().map(Curve::num_points).sum()
    }

    /// Whether the compound curve has no members
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

/// A surface whose rings may be any curve type.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePolygon {
    pub(crate) dim: Dimension,
    pub(crate) rings: Vec<Curve>,
}

impl CurvePolygon {
    /// An empty curve polygon of the given dimension
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            rings: Vec::new(),
        }
    }

    /// Append a ring, which must match the curve polygon's dimension
    pub fn add_ring(&mut self, ring: impl Into<Curve>) -> WkbResult<()> {
        let ring = ring.into();
        if ring.dimension() != self.dim {
            return Err(WkbError::DimensionMismatch {
                expected: self.dim,
                actual: ring.dimension(),
            });
        }
        self.rings.push(ring);
        Ok(())
    }

    /// The dimension of this curve polygon
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// All rings, exterior first
    pub fn rings(&self) -> &[Curve] {
        &self.rings
    }

    /// The number of rings
    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// The exterior ring, if any ring exists
    pub fn exterior(&self) -> Option<&Curve> {
        self.rings.first()
    }

    /// The total number of points across all rings
    pub fn num_points(&self) -> usize {
        self.rings.iter().map(Curve::num_points).sum()
    }

    /// Whether the curve polygon has no rings
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}
