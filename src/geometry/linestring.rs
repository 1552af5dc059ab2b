use crate::common::Dimension;
use crate::error::{WkbError, WkbResult};
use crate::geometry::Point;

/// A curve connecting its points by straight line segments.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    pub(crate) dim: Dimension,
    pub(crate) points: Vec<Point>,
}

impl LineString {
    /// An empty line string of the given dimension
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            points: Vec::new(),
        }
    }

    /// Build from a point sequence, checking each point against `dim`
    pub fn from_points(dim: Dimension, points: Vec<Point>) -> WkbResult<Self> {
        let mut line = Self::new(dim);
        for point in points {
            line.add_point(point)?;
        }
        Ok(line)
    }

    /// Append a point, which must match the line string's dimension
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

    /// The dimension of this line string
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

    /// Whether the line string has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A curve interpolated through consecutive arc triplets.
///
/// Structurally identical to [`LineString`]; the distinction only matters for
/// the wire type code and for how consumers interpolate between points.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularString {
    pub(crate) dim: Dimension,
    pub(crate) points: Vec<Point>,
}

impl CircularString {
    /// An empty circular string of the given dimension
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            points: Vec::new(),
        }
    }

    /// Build from a point sequence, checking each point against `dim`
    pub fn from_points(dim: Dimension, points: Vec<Point>) -> WkbResult<Self> {
        let mut arc = Self::new(dim);
        for point in points {
            arc.add_point(point)?;
        }
        Ok(arc)
    }

    /// Append a point, which must match the circular string's dimension
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

    /// The dimension of this circular string
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

    /// Whether the circular string has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
