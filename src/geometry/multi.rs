use crate::common::Dimension;
use crate::error::{WkbError, WkbResult};
use crate::geometry::{LineString, Point, Polygon};

/// A collection of points.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    pub(crate) dim: Dimension,
    pub(crate) points: Vec<Point>,
}

impl MultiPoint {
    /// An empty multipoint of the given dimension
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            points: Vec::new(),
        }
    }

    /// Append a point, which must match the multipoint's dimension
    pub fn add_point(&mut self, point: Point) -> WkbResult<()> {
        if point.dimension() != self.dim {
            return Err(WkbError::DimensionMismatch {
                expected: self.dim,
                actual: point.dimension(),
            });
        }
        self.points.push(point);
        Ok(())
    }

    /// The dimension of this multipoint
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// The points in order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The number of points
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// The point at `i`, if in bounds
    pub fn point(&self, i: usize) -> Option<&Point> {
        self.points.get(i)
    }

    /// Whether the multipoint has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A collection of line strings.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    pub(crate) dim: Dimension,
    pub(crate) line_strings: Vec<LineString>,
}

impl MultiLineString {
    /// An empty multilinestring of the given dimension
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            line_strings: Vec::new(),
        }
    }

    /// Append a line string, which must match the container's dimension
    pub fn add_line_string(&mut self, line_string: LineString) -> WkbResult<()> {
        if line_string.dimension() != self.dim {
            return Err(WkbError::DimensionMismatch {
                expected: self.dim,
                actual: line_string.dimension(),
            });
        }
        self.line_strings.push(line_string);
        Ok(())
    }

    /// The dimension of this multilinestring
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// The line strings in order
    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    /// The number of line strings
    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }

    /// The line string at `i`, if in bounds
    pub fn line_string(&self, i: usize) -> Option<&LineString> {
        self.line_strings.get(i)
    }

    /// The total number of points across all members
    pub fn num_points(&self) -> usize {
        self.line_strings.iter().map(LineString::num_points).sum()
    }

    /// Whether the multilinestring has no members
    pub fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }
}

/// A collection of polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    pub(crate) dim: Dimension,
    pub(crate) polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// An empty multipolygon of the given dimension
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            polygons: Vec::new(),
        }
    }

    /// Append a polygon, which must match the container's dimension
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

    /// The dimension of this multipolygon
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// The polygons in order
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// The number of polygons
    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// The polygon at `i`, if in bounds
    pub fn polygon(&self, i: usize) -> Option<&Polygon> {
        self.polygons.get(i)
    }

    /// The total number of points across all members
    pub fn num_points(&self) -> usize {
        self.polygons.iter().map(Polygon::num_points).sum()
    }

    /// Whether the multipolygon has no members
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}
