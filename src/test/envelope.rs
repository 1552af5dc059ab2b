use approx::assert_relative_eq;

use crate::geometry::{Envelope, EnvelopeBuilder, Geometry, LineString, MultiPoint, Point};
use crate::reader::{read_geometry, ReadOptions};
use crate::writer::{to_wkb, WriteOptions};
use crate::{Dimension, Endianness};

use super::data::*;

#[test]
fn point_envelope_is_degenerate() {
    let envelope = Geometry::Point(point_zm()).envelope().unwrap();
    assert_eq!(envelope.min_x, envelope.max_x);
    assert_eq!(envelope.min_y, envelope.max_y);
    assert_eq!(envelope.min_z, Some(12.5));
    assert_eq!(envelope.max_z, Some(12.5));
    assert_eq!(envelope.min_m, Some(301.75));
    assert_eq!(envelope.max_m, Some(301.75));
    assert!(envelope.has_z);
    assert!(envelope.has_m);
    assert_eq!(envelope.dimension(), Dimension::Xyzm);
}

#[test]
fn line_string_envelope() {
    let envelope = Geometry::LineString(line_string_z()).envelope().unwrap();
    assert_relative_eq!(envelope.min_x, 7.43861);
    assert_relative_eq!(envelope.max_x, 7.48007);
    assert_relative_eq!(envelope.min_y, 46.92703);
    assert_relative_eq!(envelope.max_y, 46.95108);
    assert_eq!(envelope.min_z, Some(542.0));
    assert_eq!(envelope.max_z, Some(568.25));
    assert!(envelope.has_z);
    assert!(!envelope.has_m);
    assert_eq!(envelope.min_m, None);
}

#[test]
fn envelope_folds_nested_structure() {
    let envelope = Geometry::GeometryCollection(geometry_collection_2d())
        .envelope()
        .unwrap();
    // Spans the point, the line string and the polygon
    assert_relative_eq!(envelope.min_x, -71.064544);
    assert_relative_eq!(envelope.max_x, 40.0);
    assert_relative_eq!(envelope.min_y, -35.036463112927535);
    assert_relative_eq!(envelope.max_y, 42.28787);
    assert!(!envelope.has_z);
    assert!(!envelope.has_m);
}

#[test]
fn curve_polygon_envelope_covers_all_rings() {
    let envelope = Geometry::CurvePolygon(curve_polygon_2d()).envelope().unwrap();
    assert_relative_eq!(envelope.min_x, 0.0);
    assert_relative_eq!(envelope.max_x, 8.0);
    assert_relative_eq!(envelope.min_y, 0.0);
    assert_relative_eq!(envelope.max_y, 4.0);
}

#[test]
fn empty_geometry_has_no_envelope() {
    assert_eq!(Geometry::LineString(LineString::new(Dimension::Xy)).envelope(), None);
    assert_eq!(Geometry::MultiPoint(MultiPoint::new(Dimension::Xyz)).envelope(), None);
}

/// NaN ordinates never contribute to a bound, but the Z/M flags survive.
#[test]
fn nan_ordinates_are_skipped() {
    let line = LineString::from_points(
        Dimension::Xyz,
        vec![
            Point::xyz(1.0, 10.0, f64::NAN),
            Point::xyz(f64::NAN, 20.0, f64::NAN),
            Point::xyz(3.0, f64::NAN, f64::NAN),
        ],
    )
    .unwrap();
    let envelope = Geometry::LineString(line).envelope().unwrap();
    assert_eq!(envelope.min_x, 1.0);
    assert_eq!(envelope.max_x, 3.0);
    assert_eq!(envelope.min_y, 10.0);
    assert_eq!(envelope.max_y, 20.0);
    assert!(envelope.has_z);
    assert_eq!(envelope.min_z, None);
    assert_eq!(envelope.max_z, None);
}

#[test]
fn all_nan_axis_leaves_envelope_undefined() {
    let line = LineString::from_points(
        Dimension::Xy,
        vec![Point::new(f64::NAN, 1.0), Point::new(f64::NAN, 2.0)],
    )
    .unwrap();
    assert_eq!(Geometry::LineString(line).envelope(), None);
}

/// Envelope stability under encoding: `envelope(read(write(g))) == envelope(g)`.
#[test]
fn envelope_survives_round_trip() {
    let geometries: Vec<Geometry> = vec![
        point_2d().into(),
        line_string_zm().into(),
        polygon_2d_with_interior().into(),
        compound_curve_2d().into(),
        multi_polygon_z().into(),
        tin_z().into(),
        geometry_collection_2d().into(),
    ];

    for geom in geometries {
        for endianness in [Endianness::LittleEndian, Endianness::BigEndian] {
            let buf = to_wkb(&geom, &WriteOptions { endianness }).unwrap();
            let decoded = read_geometry(&buf, &ReadOptions::default()).unwrap().unwrap();
            assert_eq!(decoded.envelope(), geom.envelope());
        }
    }
}

#[test]
fn builder_accumulates_across_geometries() {
    let mut builder = EnvelopeBuilder::new(Dimension::Xy);
    builder.add_point(&Point::new(-5.0, 2.0));
    builder.add_line_string(&line_string_2d());
    let envelope = builder.finish().unwrap();
    assert_eq!(envelope.min_x, -5.0);
    assert_relative_eq!(envelope.max_x, 20.421998);

    assert_eq!(EnvelopeBuilder::new(Dimension::Xy).finish(), None);
}

#[test]
fn envelope_equality_requires_matching_flags() {
    let xy = Geometry::Point(point_2d()).envelope().unwrap();
    let xyz = Geometry::Point(point_z()).envelope().unwrap();
    assert_ne!(xy, xyz);

    let again = Geometry::Point(point_2d()).envelope().unwrap();
    assert_eq!(xy, again);

    let shifted = Envelope {
        max_x: xy.max_x + 1.0,
        ..xy.clone()
    };
    assert_ne!(xy, shifted);
}
