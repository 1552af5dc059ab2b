use crate::common::Dimension;
use crate::geometry::{
    CircularString, CompoundCurve, Curve, CurvePolygon, Geometry, GeometryCollection, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, PolyhedralSurface, Polygon, Tin, Triangle,
};

/// The axis-aligned minimum bounding box of a geometry.
///
/// X and Y bounds are always present; Z and M bounds exist when the geometry
/// carries the ordinate and at least one such ordinate is not NaN. `has_z` /
/// `has_m` reflect the root geometry's dimension independently of whether
/// bounds could be computed.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Minimum X
    pub min_x: f64,
    /// Maximum X
    pub max_x: f64,
    /// Minimum Y
    pub min_y: f64,
    /// Maximum Y
    pub max_y: f64,
    /// Minimum Z, if any Z bound exists
    pub min_z: Option<f64>,
    /// Maximum Z, if any Z bound exists
    pub max_z: Option<f64>,
    /// Minimum M, if any M bound exists
    pub min_m: Option<f64>,
    /// Maximum M, if any M bound exists
    pub max_m: Option<f64>,
    /// Whether the source geometry carries Z ordinates
    pub has_z: bool,
    /// Whether the source geometry carries M ordinates
    pub has_m: bool,
}

impl Envelope {
    /// The envelope's dimension flags as a [`Dimension`]
    pub fn dimension(&self) -> Dimension {
        Dimension::from_flags(self.has_z, self.has_m)
    }
}

/// Folds per-axis minima and maxima over a geometry tree.
///
/// NaN ordinates never contribute to a bound. An axis that receives no
/// usable ordinate stays empty, and [`finish`](Self::finish) returns `None`
/// when either the X or the Y axis is empty.
#[derive(Debug, Clone)]
pub struct EnvelopeBuilder {
    has_z: bool,
    has_m: bool,
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    min_z: f64,
    max_z: f64,
    min_m: f64,
    max_m: f64,
}

impl EnvelopeBuilder {
    /// A builder whose Z/M flags come from the root geometry's dimension
    pub fn new(dim: Dimension) -> Self {
        Self {
            has_z: dim.has_z(),
            has_m: dim.has_m(),
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
            min_z: f64::INFINITY,
            max_z: f64::NEG_INFINITY,
            min_m: f64::INFINITY,
            max_m: f64::NEG_INFINITY,
        }
    }

    /// Fold a single point
    pub fn add_point(&mut self, point: &Point) {
        if !point.x().is_nan() {
            self.min_x = self.min_x.min(point.x());
            self.max_x = self.max_x.max(point.x());
        }
        if !point.y().is_nan() {
            self.min_y = self.min_y.min(point.y());
            self.max_y = self.max_y.max(point.y());
        }
        if let Some(z) = point.z() {
            if !z.is_nan() {
                self.min_z = self.min_z.min(z);
                self.max_z = self.max_z.max(z);
            }
        }
        if let Some(m) = point.m() {
            if !m.is_nan() {
                self.min_m = self.min_m.min(m);
                self.max_m = self.max_m.max(m);
            }
        }
    }

    /// Fold every point of a line string
    pub fn add_line_string(&mut self, line_string: &LineString) {
        for point in line_string.points() {
            self.add_point(point);
        }
    }

    /// Fold every point of a circular string
    pub fn add_circular_string(&mut self, circular_string: &CircularString) {
        for point in circular_string.points() {
            self.add_point(point);
        }
    }

    /// Fold every ring of a polygon
    pub fn add_polygon(&mut self, polygon: &Polygon) {
        for ring in polygon.rings() {
            self.add_line_string(ring);
        }
    }

    /// Fold every ring of a triangle
    pub fn add_triangle(&mut self, triangle: &Triangle) {
        for ring in triangle.rings() {
            self.add_line_string(ring);
        }
    }

    /// Fold a curve of any kind
    pub fn add_curve(&mut self, curve: &Curve) {
        match curve {
            Curve::LineString(ls) => self.add_line_string(ls),
            Curve::CircularString(cs) => self.add_circular_string(cs),
            Curve::CompoundCurve(cc) => self.add_compound_curve(cc),
        }
    }

    /// Fold every member of a compound curve
    pub fn add_compound_curve(&mut self, compound_curve: &CompoundCurve) {
        for curve in compound_curve.curves() {
            self.add_curve(curve);
        }
    }

    /// Fold every ring of a curve polygon
    pub fn add_curve_polygon(&mut self, curve_polygon: &CurvePolygon) {
        for ring in curve_polygon.rings() {
            self.add_curve(ring);
        }
    }

    /// Fold every point of a multipoint
    pub fn add_multi_point(&mut self, multi_point: &MultiPoint) {
        for point in multi_point.points() {
            self.add_point(point);
        }
    }

    /// Fold every member of a multilinestring
    pub fn add_multi_line_string(&mut self, multi_line_string: &MultiLineString) {
        for line_string in multi_line_string.line_strings() {
            self.add_line_string(line_string);
        }
    }

    /// Fold every member of a multipolygon
    pub fn add_multi_polygon(&mut self, multi_polygon: &MultiPolygon) {
        for polygon in multi_polygon.polygons() {
            self.add_polygon(polygon);
        }
    }

    /// Fold every patch of a polyhedral surface
    pub fn add_polyhedral_surface(&mut self, surface: &PolyhedralSurface) {
        for polygon in surface.polygons() {
            self.add_polygon(polygon);
        }
    }

    /// Fold every triangle of a TIN
    pub fn add_tin(&mut self, tin: &Tin) {
        for triangle in tin.triangles() {
            self.add_triangle(triangle);
        }
    }

    /// Fold every child of a collection
    pub fn add_geometry_collection(&mut self, collection: &GeometryCollection) {
        for geometry in collection.geometries() {
            self.add_geometry(geometry);
        }
    }

    /// Fold any geometry
    pub fn add_geometry(&mut self, geometry: &Geometry) {
        match geometry {
            Geometry::Point(g) => self.add_point(g),
            Geometry::LineString(g) => self.add_line_string(g),
            Geometry::CircularString(g) => self.add_circular_string(g),
            Geometry::Polygon(g) => self.add_polygon(g),
            Geometry::Triangle(g) => self.add_triangle(g),
            Geometry::CompoundCurve(g) => self.add_compound_curve(g),
            Geometry::CurvePolygon(g) => self.add_curve_polygon(g),
            Geometry::MultiPoint(g) => self.add_multi_point(g),
            Geometry::MultiLineString(g) => self.add_multi_line_string(g),
            Geometry::MultiPolygon(g) => self.add_multi_polygon(g),
            Geometry::PolyhedralSurface(g) => self.add_polyhedral_surface(g),
            Geometry::Tin(g) => self.add_tin(g),
            Geometry::GeometryCollection(g) => self.add_geometry_collection(g),
        }
    }

    /// The folded envelope, or `None` when no X or no Y bound exists
    pub fn finish(self) -> Option<Envelope> {
        if self.min_x > self.max_x || self.min_y > self.max_y {
            return None;
        }
        let (min_z, max_z) = if self.min_z <= self.max_z {
            (Some(self.min_z), Some(self.max_z))
        } else {
            (None, None)
        };
        let (min_m, max_m) = if self.min_m <= self.max_m {
            (Some(self.min_m), Some(self.max_m))
        } else {
            (None, None)
        };
        Some(Envelope {
            min_x: self.min_x,
            max_x: self.max_x,
            min_y: self.min_y,
            max_y: self.max_y,
            min_z,
            max_z,
            min_m,
            max_m,
            has_z: self.has_z,
            has_m: self.has_m,
        })
    }
}
