use crate::common::GeometryType;
use crate::error::WkbResult;
use crate::geometry::{PolyhedralSurface, Tin};
use crate::writer::polygon::{polygon_wkb_size, triangle_wkb_size, write_polygon, write_triangle};
use crate::writer::{write_count, write_header, ByteWriter};

/// The number of bytes this PolyhedralSurface takes up when encoded as WKB
pub fn polyhedral_surface_wkb_size(geom: &PolyhedralSurface) -> usize {
    let header = 1 + 4 + 4;
    geom.polygons()
        .iter()
        .fold(header, |acc, polygon| acc + polygon_wkb_size(polygon))
}

/// Write a PolyhedralSurface record encoded as WKB
pub fn write_polyhedral_surface(out: &mut ByteWriter, geom: &PolyhedralSurface) -> WkbResult<()> {
    write_header(out, GeometryType::PolyhedralSurface, geom.dimension());
    write_count(out, geom.num_polygons())?;
    for polygon in geom.polygons() {
        write_polygon(out, polygon)?;
    }
    Ok(())
}

/// The number of bytes this TIN takes up when encoded as WKB
pub fn tin_wkb_size(geom: &Tin) -> usize {
    let header = 1 + 4 + 4;
    geom.triangles()
        .iter()
        .fold(header, |acc, triangle| acc + triangle_wkb_size(triangle))
}

/// Write a TIN record encoded as WKB
pub fn write_tin(out: &mut ByteWriter, geom: &Tin) -> WkbResult<()> {
    write_header(out, GeometryType::Tin, geom.dimension());
    write_count(out, geom.num_triangles())?;
    for triangle in geom.triangles() {
        write_triangle(out, triangle)?;
    }
    Ok(())
}
