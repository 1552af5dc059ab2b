use crate::common::GeometryType;
use crate::error::WkbResult;
use crate::geometry::{MultiLineString, MultiPoint, MultiPolygon};
use crate::writer::linestring::{line_string_wkb_size, write_line_string};
use crate::writer::point::{point_wkb_size, write_point};
use crate::writer::polygon::{polygon_wkb_size, write_polygon};
use crate::writer::{write_count, write_header, ByteWriter};

/// The number of bytes this MultiPoint takes up when encoded as WKB
pub fn multi_point_wkb_size(geom: &MultiPoint) -> usize {
    let header = 1 + 4 + 4;
    header + geom.num_points() * point_wkb_size(geom.dimension())
}

/// Write a MultiPoint record encoded as WKB.
///
/// Each member point is a full child record with its own header.
pub fn write_multi_point(out: &mut ByteWriter, geom: &MultiPoint) -> WkbResult<()> {
    write_header(out, GeometryType::MultiPoint, geom.dimension());
    write_count(out, geom.num_points())?;
    for point in geom.points() {
        write_point(out, point)?;
    }
    Ok(())
}

/// The number of bytes this MultiLineString takes up when encoded as WKB
pub fn multi_line_string_wkb_size(geom: &MultiLineString) -> usize {
    let header = 1 + 4 + 4;
    geom.line_strings()
        .iter()
        .fold(header, |acc, ls| acc + line_string_wkb_size(ls))
}

/// Write a MultiLineString record encoded as WKB
pub fn write_multi_line_string(out: &mut ByteWriter, geom: &MultiLineString) -> WkbResult<()> {
    write_header(out, GeometryType::MultiLineString, geom.dimension());
    write_count(out, geom.num_line_strings())?;
    for line_string in geom.line_strings() {
        write_line_string(out, line_string)?;
    }
    Ok(())
}

/// The number of bytes this MultiPolygon takes up when encoded as WKB
pub fn multi_polygon_wkb_size(geom: &MultiPolygon) -> usize {
    let header = 1 + 4 + 4;
    geom.polygons()
        .iter()
        .fold(header, |acc, polygon| acc + polygon_wkb_size(polygon))
}

/// Write a MultiPolygon record encoded as WKB
pub fn write_multi_polygon(out: &mut ByteWriter, geom: &MultiPolygon) -> WkbResult<()> {
    write_header(out, GeometryType::MultiPolygon, geom.dimension());
    write_count(out, geom.num_polygons())?;
    for polygon in geom.polygons() {
        write_polygon(out, polygon)?;
    }
    Ok(())
}
