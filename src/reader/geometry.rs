use crate::common::{Dimension, Endianness, GeometryType, WkbGeometryCode};
use crate::error::{WkbError, WkbResult};
use crate::filter::PointFiniteFilter;
use crate::geometry::{
    CircularString, CompoundCurve, Curve, CurvePolygon, Geometry, GeometryCollection, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, PolyhedralSurface, Polygon, Tin, Triangle,
};
use crate::reader::ByteReader;

/// byte order + type code
const HEADER_BYTES: usize = 5;

/// Per-read state shared by the whole descent
pub(crate) struct ReadContext<'f> {
    pub(crate) filter: Option<&'f PointFiniteFilter>,
    pub(crate) max_depth: usize,
}

impl ReadContext<'_> {
    fn accepts(&self, point: &Point) -> bool {
        self.filter.map_or(true, |f| f.accept(point))
    }

    /// Whether containers emptied by the filter are dropped
    fn prunes_empty(&self) -> bool {
        self.filter.is_some()
    }
}

/// Read one record header and switch the reader to the record's byte order.
///
/// Returns the decoded type and dimension plus the raw code for error
/// reporting.
fn read_header(reader: &mut ByteReader) -> WkbResult<(GeometryType, Dimension, u32)> {
    if reader.remaining() < HEADER_BYTES {
        return Err(WkbError::MalformedHeader(format!(
            "record header needs {HEADER_BYTES} bytes, {} remaining",
            reader.remaining()
        )));
    }
    let byte_order = reader.read_u8()?;
    let byte_order = Endianness::try_from(byte_order).map_err(|_| {
        WkbError::MalformedHeader(format!("unexpected byte-order byte: {byte_order}"))
    })?;
    reader.set_byte_order(byte_order);
    let code = reader.read_u32()?;
    let (geometry_type, dim) = WkbGeometryCode::from_raw(code).decode()?;
    Ok((geometry_type, dim, code))
}

/// Read one full geometry record, recursing into child records.
///
/// Child records re-declare their own byte order, so the reader's order on
/// entry never influences their payloads. Returns `None` when the filter
/// pruned the record away.
pub(crate) fn read_tagged_geometry(
    reader: &mut ByteReader,
    ctx: &ReadContext,
    depth: usize,
) -> WkbResult<Option<Geometry>> {
    if depth > ctx.max_depth {
        return Err(WkbError::DepthLimitExceeded(ctx.max_depth));
    }
    let (geometry_type, dim, code) = read_header(reader)?;

    let geometry = match geometry_type {
        GeometryType::Point => {
            let point = read_coord(reader, dim)?;
            if !ctx.accepts(&point) {
                return Ok(None);
            }
            Geometry::Point(point)
        }
        GeometryType::LineString => read_line_string_body(reader, dim, ctx)?.into(),
        GeometryType::CircularString => read_circular_string_body(reader, dim, ctx)?.into(),
        GeometryType::Polygon => read_polygon_body(reader, dim, ctx)?.into(),
        GeometryType::Triangle => read_triangle_body(reader, dim, ctx)?.into(),
        GeometryType::CompoundCurve => read_compound_curve_body(reader, dim, ctx)?.into(),
        GeometryType::CurvePolygon => read_curve_polygon_body(reader, dim, ctx)?.into(),
        GeometryType::MultiPoint => read_multi_point_body(reader, dim, ctx)?.into(),
        GeometryType::MultiLineString => read_multi_line_string_body(reader, dim, ctx)?.into(),
        GeometryType::MultiPolygon => read_multi_polygon_body(reader, dim, ctx)?.into(),
        GeometryType::PolyhedralSurface => read_polyhedral_surface_body(reader, dim, ctx)?.into(),
        GeometryType::Tin => read_tin_body(reader, dim, ctx)?.into(),
        GeometryType::GeometryCollection => {
            read_geometry_collection_body(reader, dim, ctx, depth)?.into()
        }
        // The abstract multi-codes materialize as plain collections
        GeometryType::MultiCurve => read_multi_curve_body(reader, dim, ctx)?.into(),
        GeometryType::MultiSurface => read_multi_surface_body(reader, dim, ctx)?.into(),
        GeometryType::Geometry | GeometryType::Curve | GeometryType::Surface => {
            return Err(WkbError::UnknownTypeCode(code));
        }
    };

    // A container the filter emptied out is dropped; the drop propagates
    // through the enclosing containers. Points are never empty.
    if ctx.prunes_empty() && geometry.is_empty() {
        return Ok(None);
    }
    Ok(Some(geometry))
}

/// Read one bare coordinate tuple in the current record's byte order
fn read_coord(reader: &mut ByteReader, dim: Dimension) -> WkbResult<Point> {
    let x = reader.read_f64()?;
    let y = reader.read_f64()?;
    let z = if dim.has_z() {
        Some(reader.read_f64()?)
    } else {
        None
    };
    let m = if dim.has_m() {
        Some(reader.read_f64()?)
    } else {
        None
    };
    Ok(Point::from_parts(x, y, z, m))
}

fn read_line_string_body(
    reader: &mut ByteReader,
    dim: Dimension,
    ctx: &ReadContext,
) -> WkbResult<LineString> {
    let num_points = reader.read_u32()?;
    let mut line_string = LineString::new(dim);
    for _ in 0..num_points {
        let point = read_coord(reader, dim)?;
        if ctx.accepts(&point) {
            line_string.points.push(point);
        }
    }
    Ok(line_string)
}

fn read_circular_string_body(
    reader: &mut ByteReader,
    dim: Dimension,
    ctx: &ReadContext,
) -> WkbResult<CircularString> {
    let num_points = reader.read_u32()?;
    let mut circular_string = CircularString::new(dim);
    for _ in 0..num_points {
        let point = read_coord(reader, dim)?;
        if ctx.accepts(&point) {
            circular_string.points.push(point);
        }
    }
    Ok(circular_string)
}

fn read_polygon_body(
    reader: &mut ByteReader,
    dim: Dimension,
    ctx: &ReadContext,
) -> WkbResult<Polygon> {
    let num_rings = reader.read_u32()?;
    let mut polygon = Polygon::new(dim);
    for _ in 0..num_rings {
        let ring = read_line_string_body(reader, dim, ctx)?;
        if ctx.prunes_empty() && ring.is_empty() {
            continue;
        }
        polygon.rings.push(ring);
    }
    Ok(polygon)
}

fn read_triangle_body(
    reader: &mut ByteReader,
    dim: Dimension,
    ctx: &ReadContext,
) -> WkbResult<Triangle> {
    let num_rings = reader.read_u32()?;
    let mut triangle = Triangle::new(dim);
    for _ in 0..num_rings {
        let ring = read_line_string_body(reader, dim, ctx)?;
        if ctx.prunes_empty() && ring.is_empty() {
            continue;
        }
        triangle.rings.push(ring);
    }
    Ok(triangle)
}

/// Read a full curve child record, restricted to `container`'s allowed set
fn read_curve_child(
    reader: &mut ByteReader,
    container: GeometryType,
    ctx: &ReadContext,
) -> WkbResult<Curve> {
    let (child_type, child_dim, _) = read_header(reader)?;
    match child_type {
        GeometryType::LineString => Ok(Curve::LineString(read_line_string_body(
            reader, child_dim, ctx,
        )?)),
        GeometryType::CircularString => Ok(Curve::CircularString(read_circular_string_body(
            reader, child_dim, ctx,
        )?)),
        GeometryType::CompoundCurve if container != GeometryType::CompoundCurve => Ok(
            Curve::CompoundCurve(read_compound_curve_body(reader, child_dim, ctx)?),
        ),
        other => Err(WkbError::InvalidChildType {
            container,
            child: other,
        }),
    }
}

fn read_compound_curve_body(
    reader: &mut ByteReader,
    dim: Dimension,
    ctx: &ReadContext,
) -> WkbResult<CompoundCurve> {
    let num_curves = reader.read_u32()?;
    let mut compound_curve = CompoundCurve::new(dim);
    for _ in 0..num_curves {
        let curve = read_curve_child(reader, GeometryType::CompoundCurve, ctx)?;
        if ctx.prunes_empty() && curve.is_empty() {
            continue;
        }
        compound_curve.curves.push(curve);
    }
    Ok(compound_curve)
}

fn read_curve_polygon_body(
    reader: &mut ByteReader,
    dim: Dimension,
    ctx: &ReadContext,
) -> WkbResult<CurvePolygon> {
    let num_rings = reader.read_u32()?;
    let mut curve_polygon = CurvePolygon::new(dim);
    for _ in 0..num_rings {
        let ring = read_curve_child(reader, GeometryType::CurvePolygon, ctx)?;
        if ctx.prunes_empty() && ring.is_empty() {
            continue;
        }
        curve_polygon.rings.push(ring);
    }
    Ok(curve_polygon)
}

fn read_multi_point_body(
    reader: &mut ByteReader,
    dim: Dimension,
    ctx: &ReadContext,
) -> WkbResult<MultiPoint> {
    let num_points = reader.read_u32()?;
    let mut multi_point = MultiPoint::new(dim);
    for _ in 0..num_points {
        let (child_type, child_dim, _) = read_header(reader)?;
        if child_type != GeometryType::Point {
            return Err(WkbError::InvalidChildType {
                container: GeometryType::MultiPoint,
                child: child_type,
            });
        }
        let point = read_coord(reader, child_dim)?;
        if ctx.accepts(&point) {
            multi_point.points.push(point);
        }
    }
    Ok(multi_point)
}

fn read_multi_line_string_body(
    reader: &mut ByteReader,
    dim: Dimension,
    ctx: &ReadContext,
) -> WkbResult<MultiLineString> {
    let num_line_strings = reader.read_u32()?;
    let mut multi_line_string = MultiLineString::new(dim);
    for _ in 0..num_line_strings {
        let (child_type, child_dim, _) = read_header(reader)?;
        if child_type != GeometryType::LineString {
            return Err(WkbError::InvalidChildType {
                container: GeometryType::MultiLineString,
                child: child_type,
            });
        }
        let line_string = read_line_string_body(reader, child_dim, ctx)?;
        if ctx.prunes_empty() && line_string.is_empty() {
            continue;
        }
        multi_line_string.line_strings.push(line_string);
    }
    Ok(multi_line_string)
}

fn read_multi_polygon_body(
    reader: &mut ByteReader,
    dim: Dimension,
    ctx: &ReadContext,
) -> WkbResult<MultiPolygon> {
    let num_polygons = reader.read_u32()?;
    let mut multi_polygon = MultiPolygon::new(dim);
    for _ in 0..num_polygons {
        let (child_type, child_dim, _) = read_header(reader)?;
        if child_type != GeometryType::Polygon {
            return Err(WkbError::InvalidChildType {
                container: GeometryType::MultiPolygon,
                child: child_type,
            });
        }
        let polygon = read_polygon_body(reader, child_dim, ctx)?;
        if ctx.prunes_empty() && polygon.is_empty() {
            continue;
        }
        multi_polygon.polygons.push(polygon);
    }
    Ok(multi_polygon)
}

fn read_polyhedral_surface_body(
    reader: &mut ByteReader,
    dim: Dimension,
    ctx: &ReadContext,
) -> WkbResult<PolyhedralSurface> {
    let num_polygons = reader.read_u32()?;
    let mut surface = PolyhedralSurface::new(dim);
    for _ in 0..num_polygons {
        let (child_type, child_dim, _) = read_header(reader)?;
        if child_type != GeometryType::Polygon {
            return Err(WkbError::InvalidChildType {
                container: GeometryType::PolyhedralSurface,
                child: child_type,
            });
        }
        let polygon = read_polygon_body(reader, child_dim, ctx)?;
        if ctx.prunes_empty() && polygon.is_empty() {
            continue;
        }
        surface.polygons.push(polygon);
    }
    Ok(surface)
}

fn read_tin_body(reader: &mut ByteReader, dim: Dimension, ctx: &ReadContext) -> WkbResult<Tin> {
    let num_triangles = reader.read_u32()?;
    let mut tin = Tin::new(dim);
    for _ in 0..num_triangles {
        let (child_type, child_dim, _) = read_header(reader)?;
        if child_type != GeometryType::Triangle {
            return Err(WkbError::InvalidChildType {
                container: GeometryType::Tin,
                child: child_type,
            });
        }
        let triangle = read_triangle_body(reader, child_dim, ctx)?;
        if ctx.prunes_empty() && triangle.is_empty() {
            continue;
        }
        tin.triangles.push(triangle);
    }
    Ok(tin)
}

fn read_geometry_collection_body(
    reader: &mut ByteReader,
    dim: Dimension,
    ctx: &ReadContext,
    depth: usize,
) -> WkbResult<GeometryCollection> {
    let num_geometries = reader.read_u32()?;
    let mut collection = GeometryCollection::new(dim);
    for _ in 0..num_geometries {
        if let Some(child) = read_tagged_geometry(reader, ctx, depth + 1)? {
            collection.geometries.push(child);
        }
    }
    Ok(collection)
}

fn read_multi_curve_body(
    reader: &mut ByteReader,
    dim: Dimension,
    ctx: &ReadContext,
) -> WkbResult<GeometryCollection> {
    let num_curves = reader.read_u32()?;
    let mut collection = GeometryCollection::new(dim);
    for _ in 0..num_curves {
        let curve = read_curve_child(reader, GeometryType::MultiCurve, ctx)?;
        if ctx.prunes_empty() && curve.is_empty() {
            continue;
        }
        collection.geometries.push(curve.into());
    }
    Ok(collection)
}

fn read_multi_surface_body(
    reader: &mut ByteReader,
    dim: Dimension,
    ctx: &ReadContext,
) -> WkbResult<GeometryCollection> {
    let num_surfaces = reader.read_u32()?;
    let mut collection = GeometryCollection::new(dim);
    for _ in 0..num_surfaces {
        let (child_type, child_dim, _) = read_header(reader)?;
        let child: Geometry = match child_type {
            GeometryType::Polygon => read_polygon_body(reader, child_dim, ctx)?.into(),
            GeometryType::Triangle => read_triangle_body(reader, child_dim, ctx)?.into(),
            GeometryType::CurvePolygon => read_curve_polygon_body(reader, child_dim, ctx)?.into(),
            other => {
                return Err(WkbError::InvalidChildType {
                    container: GeometryType::MultiSurface,
                    child: other,
                })
            }
        };
        if ctx.prunes_empty() && child.is_empty() {
            continue;
        }
        collection.geometries.push(child);
    }
    Ok(collection)
}
