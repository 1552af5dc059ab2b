use crate::common::Dimension;
use crate::error::{WkbError, WkbResult};
use crate::geometry::{Polygon, Triangle};

/// A contiguous collection of polygons sharing common boundary edges.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyhedralSurface {
    pub(crate) dim: Dimension,
    pub(crate) polygons: Vec<Polygon>,
}

impl PolyhedralSurface {
    /// An empty polyhedral surface of the given dimension
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            polygons: Vec::new(),
        }
    }

    /// Append a patch, which must match the surface's dimension
    pub fn add_polygon(&mut self, polygon: Polygon) -> WkbResult<()> {
        if polygon.dimension() != self.dim {
            return Err(WkbError::DimensionMismatch {
                expected: self.dim,
                actual: polygon.dimension(),
            });
        }
        self.polygons.push(polygon);
        Ok(())
    }

    /// The dimension of this surface
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// The patches in order
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// The number of patches
    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// The patch at `i`, if in bounds
    pub fn polygon(&self, i: usize) -> Option<&Polygon> {
        self.polygons.get(i)
    }

    /// The total number of points across all patches
    pub fn num_points(&self) -> usize {
        self.polygons.iter().map(Polygon::num_points).sum()
    }

    /// Whether the surface has no patches
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

/// A triangulated irregular network: a surface made of triangle patches.
#[derive(Debug, Clone, PartialEq)]
pub struct Tin {
    pub(crate) dim: Dimension,
    pub(crate) triangles: Vec<Triangle>,
}

impl Tin {
    /// An empty TIN of the given dimension
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            triangles: Vec::new(),
        }
    }

    /// Append a triangle patch, which must match the TIN's dimension
    pub fn add_triangle(&mut self, triangle: Triangle) -> WkbResult<()> {
        if triangle.dimension() != self.dim {
            return Err(WkbError::DimensionMismatch {
                expected: self.dim,
                actual: triangle.dimension(),
            });
        }
        self.triangles.push(triangle);
        Ok(())
    }

    /// The dimension of this TIN
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// The triangles in order
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// The number of triangles
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// The triangle at `i`, if in bounds
    pub fn triangle(&self, i: usize) -> Option<&Triangle> {
        self.triangles.get(i)
    }

    /// The total number of points across all triangles
    pub fn num_points(&self) -> usize {
        self.triangles.iter().map(Triangle::num_points).sum()
    }

    /// Whether the TIN has no triangles
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}
