use crate::common::GeometryType;
use crate::error::WkbResult;
use crate::geometry::{CompoundCurve, Curve, CurvePolygon};
use crate::writer::linestring::{
    circular_string_wkb_size, line_string_wkb_size, write_circular_string, write_line_string,
};
use crate::writer::{write_count, write_header, ByteWriter};

/// The number of bytes this curve takes up when encoded as a full WKB record
pub fn curve_wkb_size(geom: &Curve) -> usize {
    match geom {
        Curve::LineString(ls) => line_string_wkb_size(ls),
        Curve::CircularString(cs) => circular_string_wkb_size(cs),
        Curve::CompoundCurve(cc) => compound_curve_wkb_size(cc),
    }
}

/// Write a curve of any kind as a full WKB record
pub fn write_curve(out: &mut ByteWriter, geom: &Curve) -> WkbResult<()> {
    match geom {
        Curve::LineString(ls) => write_line_string(out, ls),
        Curve::CircularString(cs) => write_circular_string(out, cs),
        Curve::CompoundCurve(cc) => write_compound_curve(out, cc),
    }
}

/// The number of bytes this CompoundCurve takes up when encoded as WKB
pub fn compound_curve_wkb_size(geom: &CompoundCurve) -> usize {
    let header = 1 + 4 + 4;
    geom.curves()
        .iter()
        .fold(header, |acc, curve| acc + curve_wkb_size(curve))
}

/// Write a CompoundCurve record encoded as WKB.
///
/// Members are full child records carrying their own byte order and type
/// code.
pub fn write_compound_curve(out: &mut ByteWriter, geom: &CompoundCurve) -> WkbResult<()> {
    write_header(out, GeometryType::CompoundCurve, geom.dimension());
    write_count(out, geom.num_curves())?;
    for curve in geom.curves() {
        write_curve(out, curve)?;
    }
    Ok(())
}

/// The number of bytes this CurvePolygon takes up when encoded as WKB
pub fn curve_polygon_wkb_size(geom: &CurvePolygon) -> usize {
    let header = 1 + 4 + 4;
    geom.rings()
        .iter()
        .fold(header, |acc, ring| acc + curve_wkb_size(ring))
}

/// Write a CurvePolygon record encoded as WKB.
///
/// Unlike a Polygon's bare rings, curve rings are full child records.
pub fn write_curve_polygon(out: &mut ByteWriter, geom: &CurvePolygon) -> WkbResult<()> {
    write_header(out, GeometryType::CurvePolygon, geom.dimension());
    write_count(out, geom.num_rings())?;
    for ring in geom.rings() {
        write_curve(out, ring)?;
    }
    Ok(())
}
