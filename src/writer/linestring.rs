use crate::common::GeometryType;
use crate::error::WkbResult;
use crate::geometry::{CircularString, LineString};
use crate::writer::point::write_coord;
use crate::writer::{write_count, write_header, ByteWriter};

/// The number of bytes this LineString takes up when encoded as WKB
pub fn line_string_wkb_size(geom: &LineString) -> usize {
    let header = 1 + 4 + 4;
    header + geom.num_points() * geom.dimension().size() * 8
}

/// Write a LineString record encoded as WKB
pub fn write_line_string(out: &mut ByteWriter, geom: &LineString) -> WkbResult<()> {
    write_header(out, GeometryType::LineString, geom.dimension());
    write_line_string_body(out, geom)
}

/// Write a line string's point count and coordinates, without record framing.
///
/// Polygon and triangle rings are encoded this way.
pub(crate) fn write_line_string_body(out: &mut ByteWriter, geom: &LineString) -> WkbResult<()> {
    write_count(out, geom.num_points())?;
    for point in geom.points() {
        write_coord(out, point);
    }
    Ok(())
}

/// The number of bytes this CircularString takes up when encoded as WKB
pub fn circular_string_wkb_size(geom: &CircularString) -> usize {
    let header = 1 + 4 + 4;
    header + geom.num_points() * geom.dimension().size() * 8
}

/// Write a CircularString record encoded as WKB
pub fn write_circular_string(out: &mut ByteWriter, geom: &CircularString) -> WkbResult<()> {
    write_header(out, GeometryType::CircularString, geom.dimension());
    write_count(out, geom.num_points())?;
    for point in geom.points() {
        write_coord(out, point);
    }
    Ok(())
}
