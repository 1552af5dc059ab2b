use crate::common::GeometryType;
use crate::error::WkbResult;
use crate::geometry::{Polygon, Triangle};
use crate::writer::linestring::write_line_string_body;
use crate::writer::{write_count, write_header, ByteWriter};

/// The number of bytes this Polygon takes up when encoded as WKB
pub fn polygon_wkb_size(geom: &Polygon) -> usize {
    let header = 1 + 4 + 4;
    let each_coord = geom.dimension().size() * 8;
    geom.rings()
        .iter()
        .fold(header, |acc, ring| acc + 4 + ring.num_points() * each_coord)
}

/// Write a Polygon record encoded as WKB.
///
/// Rings are bare point sequences: no per-ring byte order or type code.
pub fn write_polygon(out: &mut ByteWriter, geom: &Polygon) -> WkbResult<()> {
    write_header(out, GeometryType::Polygon, geom.dimension());
    write_count(out, geom.num_rings())?;
    for ring in geom.rings() {
        write_line_string_body(out, ring)?;
    }
    Ok(())
}

/// The number of bytes this Triangle takes up when encoded as WKB
pub fn triangle_wkb_size(geom: &Triangle) -> usize {
    let header = 1 + 4 + 4;
    let each_coord = geom.dimension().size() * 8;
    geom.rings()
        .iter()
        .fold(header, |acc, ring| acc + 4 + ring.num_points() * each_coord)
}

/// Write a Triangle record encoded as WKB
pub fn write_triangle(out: &mut ByteWriter, geom: &Triangle) -> WkbResult<()> {
    write_header(out, GeometryType::Triangle, geom.dimension());
    write_count(out, geom.num_rings())?;
    for ring in geom.rings() {
        write_line_string_body(out, ring)?;
    }
    Ok(())
}
