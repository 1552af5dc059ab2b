use crate::common::{Dimension, GeometryType};
use crate::error::WkbResult;
use crate::geometry::Point;
use crate::writer::{write_header, ByteWriter};

/// The number of bytes a Point of this dimension takes up when encoded as WKB
pub fn point_wkb_size(dim: Dimension) -> usize {
    let header = 1 + 4;
    let coords = dim.size() * 8;
    header + coords
}

/// Write a bare coordinate tuple, without any record framing
pub(crate) fn write_coord(out: &mut ByteWriter, point: &Point) {
    out.write_f64(point.x());
    out.write_f64(point.y());
    if let Some(z) = point.z() {
        out.write_f64(z);
    }
    if let Some(m) = point.m() {
        out.write_f64(m);
    }
}

/// Write a Point record encoded as WKB
pub fn write_point(out: &mut ByteWriter, geom: &Point) -> WkbResult<()> {
    write_header(out, GeometryType::Point, geom.dimension());
    write_coord(out, geom);
    Ok(())
}
