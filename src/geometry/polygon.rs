use crate::common::Dimension;
use crate::error::{WkbError, WkbResult};
use crate::geometry::LineString;

/// A surface bounded by an exterior ring and zero or more interior rings.
///
/// Rings are stored exterior first. Ring closure is not validated here; that
/// belongs to a separate validation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub(crate) dim: Dimension,
    pub(crate) rings: Vec<LineString>,
}

impl Polygon {
    /// An empty polygon of the given dimension
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            rings: Vec::new(),
        }
    }

    /// Build from a ring sequence, exterior first
    pub fn from_rings(dim: Dimension, rings: Vec<LineString>) -> WkbResult<Self> {
        let mut polygon = Self::new(dim);
        for ring in rings {
            polygon.add_ring(ring)?;
        }
        Ok(polygon)
    }

    /// Append a ring, which must match the polygon's dimension
    pub fn add_ring(&mut self, ring: LineString) -> WkbResult<()> {
        if ring.dimension() != self.dim {
            return Err(WkbError::DimensionMismatch {
                expected: self.dim,
                actual: ring.dimension(),
            });
        }
        self.rings.push(ring);
        Ok(())
    }

    /// The dimension of this polygon
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// All rings, exterior first
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    /// The number of rings
    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// The exterior ring, if any ring exists
    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    /// The interior rings (everything after the exterior)
    pub fn interiors(&self) -> &[LineString] {
        if self.rings.is_empty() {
            &[]
        } else {
            &self.rings[1..]
        }
    }

    /// The total number of points across all rings
    pub fn num_points(&self) -> usize {
        self.rings.iter().map(LineString::num_points).sum()
    }

    /// Whether the polygon has no rings
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

/// A polygon restricted to a single ring of three distinct vertices.
///
/// The vertex count is not validated; the type exists for the wire code and
/// for TIN membership.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub(crate) dim: Dimension,
    pub(crate) rings: Vec<LineString>,
}

impl Triangle {
    /// An empty triangle of the given dimension
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            rings: Vec::new(),
        }
    }

    /// Build from a ring sequence
    pub fn from_rings(dim: Dimension, rings: Vec<LineString>) -> WkbResult<Self> {
        let mut triangle = Self::new(dim);
        for ring in rings {
            triangle.add_ring(ring)?;
        }
        Ok(triangle)
    }

    /// Append a ring, which must match the triangle's dimension
    pub fn add_ring(&mut self, ring: LineString) -> WkbResult<()> {
        if ring.dimension() != self.dim {
            return Err(WkbError::DimensionMismatch {
                expected: self.dim,
                actual: ring.dimension(),
            });
        }
        self.rings.push(ring);
        Ok(())
    }

    /// The dimension of this triangle
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// All rings, exterior first
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    /// The number of rings
    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// The total number of points across all rings
    pub fn num_points(&self) -> usize {
        self.rings.iter().map(LineString::num_points).sum()
    }

    /// Whether the triangle has no rings
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}
