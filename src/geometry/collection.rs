use crate::common::{Dimension, GeometryType};
use crate::error::{WkbError, WkbResult};
use crate::geometry::Geometry;

/// The child types a MULTICURVE record may carry
const CURVE_TYPES: [GeometryType; 3] = [
    GeometryType::LineString,
    GeometryType::CircularString,
    GeometryType::CompoundCurve,
];

/// The child types a MULTISURFACE record may carry
const SURFACE_TYPES: [GeometryType; 3] = [
    GeometryType::Polygon,
    GeometryType::Triangle,
    GeometryType::CurvePolygon,
];

/// An ordered, heterogeneous collection of geometries.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    pub(crate) dim: Dimension,
    pub(crate) geometries: Vec<Geometry>,
}

impl GeometryCollection {
    /// An empty collection of the given dimension
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            geometries: Vec::new(),
        }
    }

    /// Append a geometry, which must match the collection's dimension
    pub fn add_geometry(&mut self, geometry: impl Into<Geometry>) -> WkbResult<()> {
        let geometry = geometry.into();
        if geometry.dimension() != self.dim {
            return Err(WkbError::DimensionMismatch {
                expected: self.dim,
                actual: geometry.dimension(),
            });
        }
        self.geometries.push(geometry);
        Ok(())
    }

    /// The dimension of this collection
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// The children in order
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    /// The number of children
    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    /// The child at `i`, if in bounds
    pub fn geometry(&self, i: usize) -> Option<&Geometry> {
        self.geometries.get(i)
    }

    /// The total number of points across all children
    pub fn num_points(&self) -> usize {
        self.geometries.iter().map(Geometry::num_points).sum()
    }

    /// Whether the collection has no children
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// Whether every child is a curve, making this collection logically a
    /// MultiCurve. False for an empty collection.
    pub fn is_multi_curve(&self) -> bool {
        !self.geometries.is_empty()
            && self
                .geometries
                .iter()
                .all(|g| CURVE_TYPES.contains(&g.geometry_type()))
    }

    /// Whether every child is a surface, making this collection logically a
    /// MultiSurface. False for an empty collection.
    pub fn is_multi_surface(&self) -> bool {
        !self.geometries.is_empty()
            && self
                .geometries
                .iter()
                .all(|g| SURFACE_TYPES.contains(&g.geometry_type()))
    }
}

/// A borrow of a [`GeometryCollection`] that encodes under the abstract
/// MULTICURVE or MULTISURFACE type code instead of GEOMETRYCOLLECTION.
///
/// The code family is selected from the collection's children at
/// construction; a collection that is neither all-curve nor all-surface
/// falls back to the plain GEOMETRYCOLLECTION code. Only the type code
/// changes: payload bytes are identical to writing the collection directly.
#[derive(Debug, Clone, Copy)]
pub struct ExtendedGeometryCollection<'a> {
    collection: &'a GeometryCollection,
    geometry_type: GeometryType,
}

impl<'a> ExtendedGeometryCollection<'a> {
    /// Wrap a collection, selecting the abstract code its children permit
    pub fn new(collection: &'a GeometryCollection) -> Self {
        let geometry_type = if collection.is_multi_curve() {
            GeometryType::MultiCurve
        } else if collection.is_multi_surface() {
            GeometryType::MultiSurface
        } else {
            GeometryType::GeometryCollection
        };
        Self {
            collection,
            geometry_type,
        }
    }

    /// The wrapped collection
    pub fn collection(&self) -> &'a GeometryCollection {
        self.collection
    }

    /// The type code family this wrapper encodes under
    pub fn geometry_type(&self) -> GeometryType {
        self.geometry_type
    }
}
