use crate::common::GeometryType;
use crate::error::WkbResult;
use crate::geometry::{ExtendedGeometryCollection, GeometryCollection};
use crate::writer::geometry::{geometry_wkb_size, write_geometry};
use crate::writer::{write_count, write_header, ByteWriter};

/// The number of bytes this GeometryCollection takes up when encoded as WKB
pub fn geometry_collection_wkb_size(geom: &GeometryCollection) -> usize {
    let header = 1 + 4 + 4;
    geom.geometries()
        .iter()
        .fold(header, |acc, child| acc + geometry_wkb_size(child))
}

/// Write a GeometryCollection record encoded as WKB
pub fn write_geometry_collection(out: &mut ByteWriter, geom: &GeometryCollection) -> WkbResult<()> {
    write_header(out, GeometryType::GeometryCollection, geom.dimension());
    write_collection_body(out, geom)
}

/// Write a collection under the abstract MULTICURVE / MULTISURFACE code
/// selected by the wrapper.
///
/// Payload bytes are identical to [`write_geometry_collection`]; only the
/// type code differs.
pub fn write_extended_geometry_collection(
    out: &mut ByteWriter,
    geom: &ExtendedGeometryCollection,
) -> WkbResult<()> {
    write_header(out, geom.geometry_type(), geom.collection().dimension());
    write_collection_body(out, geom.collection())
}

fn write_collection_body(out: &mut ByteWriter, geom: &GeometryCollection) -> WkbResult<()> {
    write_count(out, geom.num_geometries())?;
    for child in geom.geometries() {
        write_geometry(out, child)?;
    }
    Ok(())
}
