//! The owned geometry model the codec reads into and writes from.
//!
//! Every geometry value carries its WKB type, its Z/M dimensionality and its
//! children. Construction is builder-style: create an empty container for a
//! [`Dimension`](crate::Dimension), then add children; each `add_*` operation
//! enforces that children agree with the container on Z/M presence. The model
//! answers structural queries only (counts, indexed access, dimensionality,
//! envelope); simplicity, ring closure and topology are out of scope.

mod collection;
mod curve;
mod envelope;
mod linestring;
mod multi;
mod point;
mod polygon;
mod surface;

pub use collection::{ExtendedGeometryCollection, GeometryCollection};
pub use curve::{CompoundCurve, Curve, CurvePolygon};
pub use envelope::{Envelope, EnvelopeBuilder};
pub use linestring::{CircularString, LineString};
pub use multi::{MultiLineString, MultiPoint, MultiPolygon};
pub use point::Point;
pub use polygon::{Polygon, Triangle};
pub use surface::{PolyhedralSurface, Tin};

use crate::common::{Dimension, GeometryType, WkbGeometryCode};

/// Any concrete geometry.
///
/// The abstract WKB types (GEOMETRY, CURVE, SURFACE, MULTICURVE,
/// MULTISURFACE) have no variant here: records carrying the MULTICURVE or
/// MULTISURFACE code decode to a [`GeometryCollection`], whose
/// [`is_multi_curve`](GeometryCollection::is_multi_curve) /
/// [`is_multi_surface`](GeometryCollection::is_multi_surface) predicates
/// recover the abstract identity.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A point
    Point(Point),
    /// A line string
    LineString(LineString),
    /// A circular string
    CircularString(CircularString),
    /// A polygon
    Polygon(Polygon),
    /// A triangle
    Triangle(Triangle),
    /// A compound curve
    CompoundCurve(CompoundCurve),
    /// A curve polygon
    CurvePolygon(CurvePolygon),
    /// A multipoint
    MultiPoint(MultiPoint),
    /// A multilinestring
    MultiLineString(MultiLineString),
    /// A multipolygon
    MultiPolygon(MultiPolygon),
    /// A polyhedral surface
    PolyhedralSurface(PolyhedralSurface),
    /// A TIN
    Tin(Tin),
    /// A geometry collection
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The WKB type of this geometry
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::CircularString(_) => GeometryType::CircularString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::Triangle(_) => GeometryType::Triangle,
            Geometry::CompoundCurve(_) => GeometryType::CompoundCurve,
            Geometry::CurvePolygon(_) => GeometryType::CurvePolygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::PolyhedralSurface(_) => GeometryType::PolyhedralSurface,
            Geometry::Tin(_) => GeometryType::Tin,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// The dimension of this geometry
    pub fn dimension(&self) -> Dimension {
        match self {
            Geometry::Point(g) => g.dimension(),
            Geometry::LineString(g) => g.dimension(),
            Geometry::CircularString(g) => g.dimension(),
            Geometry::Polygon(g) => g.dimension(),
            Geometry::Triangle(g) => g.dimension(),
            Geometry::CompoundCurve(g) => g.dimension(),
            Geometry::CurvePolygon(g) => g.dimension(),
            Geometry::MultiPoint(g) => g.dimension(),
            Geometry::MultiLineString(g) => g.dimension(),
            Geometry::MultiPolygon(g) => g.dimension(),
            Geometry::PolyhedralSurface(g) => g.dimension(),
            Geometry::Tin(g) => g.dimension(),
            Geometry::GeometryCollection(g) => g.dimension(),
        }
    }

    /// The total number of points reachable from this geometry
    pub fn num_points(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::LineString(g) => g.num_points(),
            Geometry::CircularString(g) => g.num_points(),
            Geometry::Polygon(g) => g.num_points(),
            Geometry::Triangle(g) => g.num_points(),
            Geometry::CompoundCurve(g) => g.num_points(),
            Geometry::CurvePolygon(g) => g.num_points(),
            Geometry::MultiPoint(g) => g.num_points(),
            Geometry::MultiLineString(g) => g.num_points(),
            Geometry::MultiPolygon(g) => g.num_points(),
            Geometry::PolyhedralSurface(g) => g.num_points(),
            Geometry::Tin(g) => g.num_points(),
            Geometry::GeometryCollection(g) => g.num_points(),
        }
    }

    /// Whether this geometry contains no points.
    ///
    /// A point itself is never empty: it always has X and Y ordinates, even
    /// when they are NaN.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(_) => false,
            Geometry::LineString(g) => g.is_empty(),
            Geometry::CircularString(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::Triangle(g) => g.is_empty(),
            Geometry::CompoundCurve(g) => g.is_empty(),
            Geometry::CurvePolygon(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
            Geometry::PolyhedralSurface(g) => g.is_empty(),
            Geometry::Tin(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
        }
    }

    /// The ISO WKB code this geometry encodes under
    pub fn wkb_code(&self) -> WkbGeometryCode {
        WkbGeometryCode::new(self.geometry_type(), self.dimension())
    }

    /// The minimum bounding envelope, or `None` for a point-free geometry
    pub fn envelope(&self) -> Option<Envelope> {
        let mut builder = EnvelopeBuilder::new(self.dimension());
        builder.add_geometry(self);
        builder.finish()
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<CircularString> for Geometry {
    fn from(value: CircularString) -> Self {
        Geometry::CircularString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<Triangle> for Geometry {
    fn from(value: Triangle) -> Self {
        Geometry::Triangle(value)
    }
}

impl From<CompoundCurve> for Geometry {
    fn from(value: CompoundCurve) -> Self {
        Geometry::CompoundCurve(value)
    }
}

impl From<CurvePolygon> for Geometry {
    fn from(value: CurvePolygon) -> Self {
        Geometry::CurvePolygon(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Geometry::MultiPoint(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Geometry::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Geometry::MultiPolygon(value)
    }
}

impl From<PolyhedralSurface> for Geometry {
    fn from(value: PolyhedralSurface) -> Self {
        Geometry::PolyhedralSurface(value)
    }
}

impl From<Tin> for Geometry {
    fn from(value: Tin) -> Self {
        Geometry::Tin(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Geometry::GeometryCollection(value)
    }
}

impl From<Curve> for Geometry {
    fn from(value: Curve) -> Self {
        match value {
            Curve::LineString(ls) => Geometry::LineString(ls),
            Curve::CircularString(cs) => Geometry::CircularString(cs),
            Curve::CompoundCurve(cc) => Geometry::CompoundCurve(cc),
        }
    }
}
