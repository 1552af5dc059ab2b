use crate::error::WkbResult;
use crate::geometry::Geometry;
use crate::writer::collection::{geometry_collection_wkb_size, write_geometry_collection};
use crate::writer::curve::{
    compound_curve_wkb_size, curve_polygon_wkb_size, write_compound_curve, write_curve_polygon,
};
use crate::writer::linestring::{
    circular_string_wkb_size, line_string_wkb_size, write_circular_string, write_line_string,
};
use crate::writer::multi::{
    multi_line_string_wkb_size, multi_point_wkb_size, multi_polygon_wkb_size,
    write_multi_line_string, write_multi_point, write_multi_polygon,
};
use crate::writer::point::{point_wkb_size, write_point};
use crate::writer::polygon::{polygon_wkb_size, triangle_wkb_size, write_polygon, write_triangle};
use crate::writer::surface::{
    polyhedral_surface_wkb_size, tin_wkb_size, write_polyhedral_surface, write_tin,
};
use crate::writer::ByteWriter;

/// The number of bytes this geometry takes up when encoded as WKB
pub fn geometry_wkb_size(geom: &Geometry) -> usize {
    match geom {
        Geometry::Point(g) => point_wkb_size(g.dimension()),
        Geometry::LineString(g) => line_string_wkb_size(g),
        Geometry::CircularString(g) => circular_string_wkb_size(g),
        Geometry::Polygon(g) => polygon_wkb_size(g),
        Geometry::Triangle(g) => triangle_wkb_size(g),
        Geometry::CompoundCurve(g) => compound_curve_wkb_size(g),
        Geometry::CurvePolygon(g) => curve_polygon_wkb_size(g),
        Geometry::MultiPoint(g) => multi_point_wkb_size(g),
        Geometry::MultiLineString(g) => multi_line_string_wkb_size(g),
        Geometry::MultiPolygon(g) => multi_polygon_wkb_size(g),
        Geometry::PolyhedralSurface(g) => polyhedral_surface_wkb_size(g),
        Geometry::Tin(g) => tin_wkb_size(g),
        Geometry::GeometryCollection(g) => geometry_collection_wkb_size(g),
    }
}

/// Write any geometry as a full WKB record
pub fn write_geometry(out: &mut ByteWriter, geom: &Geometry) -> WkbResult<()> {
    match geom {
        Geometry::Point(g) => write_point(out, g),
        Geometry::LineString(g) => write_line_string(out, g),
        Geometry::CircularString(g) => write_circular_string(out, g),
        Geometry::Polygon(g) => write_polygon(out, g),
        Geometry::Triangle(g) => write_triangle(out, g),
        Geometry::CompoundCurve(g) => write_compound_curve(out, g),
        Geometry::CurvePolygon(g) => write_curve_polygon(out, g),
        Geometry::MultiPoint(g) => write_multi_point(out, g),
        Geometry::MultiLineString(g) => write_multi_line_string(out, g),
        Geometry::MultiPolygon(g) => write_multi_polygon(out, g),
        Geometry::PolyhedralSurface(g) => write_polyhedral_surface(out, g),
        Geometry::Tin(g) => write_tin(out, g),
        Geometry::GeometryCollection(g) => write_geometry_collection(out, g),
    }
}
