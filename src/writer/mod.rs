//! Encode geometries to Well-Known Binary.
//!
//! Every record in the output, child records included, uses the byte
//! order the [`ByteWriter`] was constructed with, and the ISO additive type
//! codes (base + 1000 for Z + 2000 for M). Re-reading the output and writing
//! it again under the same byte order is byte-identical.

mod bytes;
mod collection;
mod curve;
mod geometry;
mod linestring;
mod multi;
mod options;
mod point;
mod polygon;
mod surface;

pub use bytes::ByteWriter;
pub use collection::{
    geometry_collection_wkb_size, write_extended_geometry_collection, write_geometry_collection,
};
pub use curve::{
    compound_curve_wkb_size, curve_polygon_wkb_size, curve_wkb_size, write_compound_curve,
    write_curve, write_curve_polygon,
};
pub use geometry::{geometry_wkb_size, write_geometry};
pub use linestring::{
    circular_string_wkb_size, line_string_wkb_size, write_circular_string, write_line_string,
};
pub use multi::{
    multi_line_string_wkb_size, multi_point_wkb_size, multi_polygon_wkb_size,
    write_multi_line_string, write_multi_point, write_multi_polygon,
};
pub use options::WriteOptions;
pub use point::{point_wkb_size, write_point};
pub use polygon::{polygon_wkb_size, triangle_wkb_size, write_polygon, write_triangle};
pub use surface::{polyhedral_surface_wkb_size, tin_wkb_size, write_polyhedral_surface, write_tin};

use crate::common::{Dimension, GeometryType, WkbGeometryCode};
use crate::error::{WkbError, WkbResult};
use crate::geometry::{ExtendedGeometryCollection, Geometry};

/// Encode a geometry as a standalone WKB buffer
pub fn to_wkb(geom: &Geometry, options: &WriteOptions) -> WkbResult<Vec<u8>> {
    let mut out = ByteWriter::with_capacity(options.endianness, geometry_wkb_size(geom));
    write_geometry(&mut out, geom)?;
    Ok(out.into_bytes())
}

/// Encode a collection under its abstract code as a standalone WKB buffer
pub fn to_extended_wkb(
    geom: &ExtendedGeometryCollection,
    options: &WriteOptions,
) -> WkbResult<Vec<u8>> {
    let mut out = ByteWriter::with_capacity(
        options.endianness,
        geometry_collection_wkb_size(geom.collection()),
    );
    write_extended_geometry_collection(&mut out, geom)?;
    Ok(out.into_bytes())
}

/// Write a record header: the byte-order byte, then the type code
pub(crate) fn write_header(out: &mut ByteWriter, geometry_type: GeometryType, dim: Dimension) {
    let byte_order = out.byte_order();
    out.write_u8(byte_order.into());
    out.write_u32(WkbGeometryCode::new(geometry_type, dim).value());
}

/// Write a child count, which must fit the wire format's u32
pub(crate) fn write_count(out: &mut ByteWriter, len: usize) -> WkbResult<()> {
    let count = u32::try_from(len)
        .map_err(|_| WkbError::MalformedHeader(format!("child count {len} does not fit in u32")))?;
    out.write_u32(count);
    Ok(())
}
