use crate::{Dimension, GeometryType, WkbGeometryCode};

use crate::error::WkbError;

const ALL_TYPES: [GeometryType; 18] = [
    GeometryType::Geometry,
    GeometryType::Point,
    GeometryType::LineString,
    GeometryType::Polygon,
    GeometryType::MultiPoint,
    GeometryType::MultiLineString,
    GeometryType::MultiPolygon,
    GeometryType::GeometryCollection,
    GeometryType::CircularString,
    GeometryType::CompoundCurve,
    GeometryType::CurvePolygon,
    GeometryType::MultiCurve,
    GeometryType::MultiSurface,
    GeometryType::Curve,
    GeometryType::Surface,
    GeometryType::PolyhedralSurface,
    GeometryType::Tin,
    GeometryType::Triangle,
];

const ALL_DIMS: [Dimension; 4] = [
    Dimension::Xy,
    Dimension::Xyz,
    Dimension::Xym,
    Dimension::Xyzm,
];

/// Encoding then decoding recovers every (type, dimension) pair.
#[test]
fn code_bijection() {
    for geometry_type in ALL_TYPES {
        for dim in ALL_DIMS {
            let code = WkbGeometryCode::new(geometry_type, dim);
            assert_eq!(code.decode().unwrap(), (geometry_type, dim));
        }
    }
}

#[test]
fn iso_codes_are_additive() {
    assert_eq!(
        WkbGeometryCode::new(GeometryType::Point, Dimension::Xy).value(),
        1
    );
    assert_eq!(
        WkbGeometryCode::new(GeometryType::MultiPolygon, Dimension::Xyz).value(),
        1006
    );
    assert_eq!(
        WkbGeometryCode::new(GeometryType::CircularString, Dimension::Xym).value(),
        2008
    );
    assert_eq!(
        WkbGeometryCode::new(GeometryType::Triangle, Dimension::Xyzm).value(),
        3017
    );
    assert_eq!(
        WkbGeometryCode::new(GeometryType::MultiCurve, Dimension::Xy).value(),
        11
    );
    assert_eq!(
        WkbGeometryCode::new(GeometryType::MultiSurface, Dimension::Xyz).value(),
        1012
    );
}

/// EWKB marks Z and M with high bits instead of additive offsets; decoding
/// accepts both families.
#[test]
fn ewkb_flag_codes_decode() {
    assert_eq!(
        WkbGeometryCode::from_raw(0x80000006).decode().unwrap(),
        (GeometryType::MultiPolygon, Dimension::Xyz)
    );
    assert_eq!(
        WkbGeometryCode::from_raw(0x40000001).decode().unwrap(),
        (GeometryType::Point, Dimension::Xym)
    );
    assert_eq!(
        WkbGeometryCode::from_raw(0xC0000002).decode().unwrap(),
        (GeometryType::LineString, Dimension::Xyzm)
    );
    // Mixed marking: additive Z plus flagged M
    assert_eq!(
        WkbGeometryCode::from_raw(0x40000000 + 1003).decode().unwrap(),
        (GeometryType::Polygon, Dimension::Xyzm)
    );
}

#[test]
fn unknown_codes_are_rejected() {
    for raw in [18u32, 999, 1018, 4001, 0x20000001] {
        assert!(matches!(
            WkbGeometryCode::from_raw(raw).decode(),
            Err(WkbError::UnknownTypeCode(code)) if code == raw
        ));
    }
}

#[test]
fn geometry_codes_follow_type_and_dimension() {
    use super::data::*;
    use crate::geometry::Geometry;

    assert_eq!(Geometry::from(point_2d()).wkb_code().value(), 1);
    assert_eq!(Geometry::from(line_string_zm()).wkb_code().value(), 3002);
    assert_eq!(Geometry::from(multi_polygon_z()).wkb_code().value(), 1006);
    assert_eq!(Geometry::from(curve_collection_2d()).wkb_code().value(), 7);
}

#[test]
fn abstract_types() {
    assert!(GeometryType::Geometry.is_abstract());
    assert!(GeometryType::Curve.is_abstract());
    assert!(GeometryType::Surface.is_abstract());
    assert!(GeometryType::MultiCurve.is_abstract());
    assert!(GeometryType::MultiSurface.is_abstract());
    assert!(!GeometryType::GeometryCollection.is_abstract());
    assert!(!GeometryType::CompoundCurve.is_abstract());
}
