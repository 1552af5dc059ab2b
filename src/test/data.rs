//! Geometry fixtures shared across the test modules.

use crate::geometry::{
    CircularString, CompoundCurve, CurvePolygon, GeometryCollection, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, PolyhedralSurface, Polygon, Tin, Triangle,
};
use crate::Dimension;

pub fn point_2d() -> Point {
    Point::new(-71.064544, 42.28787)
}

pub fn point_z() -> Point {
    Point::xyz(-71.064544, 42.28787, 12.5)
}

pub fn point_m() -> Point {
    Point::xym(-71.064544, 42.28787, 301.75)
}

pub fn point_zm() -> Point {
    Point::xyzm(-71.064544, 42.28787, 12.5, 301.75)
}

pub fn line_string_2d() -> LineString {
    LineString::from_points(
        Dimension::Xy,
        vec![
            Point::new(18.889800697319032, -35.036463112927535),
            Point::new(19.56915, -34.733768),
            Point::new(20.421998, -33.927934),
        ],
    )
    .unwrap()
}

pub fn line_string_z() -> LineString {
    LineString::from_points(
        Dimension::Xyz,
        vec![
            Point::xyz(7.43861, 46.95108, 542.0),
            Point::xyz(7.45123, 46.94897, 551.5),
            Point::xyz(7.46891, 46.93211, 568.25),
            Point::xyz(7.48007, 46.92703, 560.0),
        ],
    )
    .unwrap()
}

pub fn line_string_zm() -> LineString {
    LineString::from_points(
        Dimension::Xyzm,
        vec![
            Point::xyzm(7.43861, 46.95108, 542.0, 0.0),
            Point::xyzm(7.45123, 46.94897, 551.5, 14.2),
            Point::xyzm(7.46891, 46.93211, 568.25, 29.8),
        ],
    )
    .unwrap()
}

pub fn circular_string_2d() -> CircularString {
    CircularString::from_points(
        Dimension::Xy,
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 0.0),
        ],
    )
    .unwrap()
}

fn ring(coords: &[(f64, f64)]) -> LineString {
    LineString::from_points(
        Dimension::Xy,
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect(),
    )
    .unwrap()
}

pub fn polygon_2d() -> Polygon {
    Polygon::from_rings(
        Dimension::Xy,
        vec![ring(&[
            (30.0, 10.0),
            (40.0, 40.0),
            (20.0, 40.0),
            (10.0, 20.0),
            (30.0, 10.0),
        ])],
    )
    .unwrap()
}

pub fn polygon_2d_with_interior() -> Polygon {
    Polygon::from_rings(
        Dimension::Xy,
        vec![
            ring(&[
                (35.0, 10.0),
                (45.0, 45.0),
                (15.0, 40.0),
                (10.0, 20.0),
                (35.0, 10.0),
            ]),
            ring(&[(20.0, 30.0), (35.0, 35.0), (30.0, 20.0), (20.0, 30.0)]),
        ],
    )
    .unwrap()
}

pub fn polygon_z() -> Polygon {
    Polygon::from_rings(
        Dimension::Xyz,
        vec![LineString::from_points(
            Dimension::Xyz,
            vec![
                Point::xyz(30.0, 10.0, 5.0),
                Point::xyz(40.0, 40.0, 6.0),
                Point::xyz(20.0, 40.0, 7.5),
                Point::xyz(30.0, 10.0, 5.0),
            ],
        )
        .unwrap()],
    )
    .unwrap()
}

pub fn triangle_2d() -> Triangle {
    Triangle::from_rings(
        Dimension::Xy,
        vec![ring(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0), (0.0, 0.0)])],
    )
    .unwrap()
}

pub fn compound_curve_2d() -> CompoundCurve {
    let mut compound = CompoundCurve::new(Dimension::Xy);
    compound
        .add_curve(
            CircularString::from_points(
                Dimension::Xy,
                vec![
                    Point::new(3451392.813, 5481785.917),
                    Point::new(3451401.622, 5481796.453),
                    Point::new(3451409.995, 5481806.744),
                ],
            )
            .unwrap(),
        )
        .unwrap();
    compound
        .add_curve(
            LineString::from_points(
                Dimension::Xy,
                vec![
                    Point::new(3451409.995, 5481806.744),
                    Point::new(3451435.452, 5481836.47),
                ],
            )
            .unwrap(),
        )
        .unwrap();
    compound
}

pub fn curve_polygon_2d() -> CurvePolygon {
    let mut exterior = CompoundCurve::new(Dimension::Xy);
    exterior
        .add_curve(
            CircularString::from_points(
                Dimension::Xy,
                vec![
                    Point::new(0.0, 0.0),
                    Point::new(4.0, 4.0),
                    Point::new(8.0, 0.0),
                ],
            )
            .unwrap(),
        )
        .unwrap();
    exterior
        .add_curve(
            LineString::from_points(
                Dimension::Xy,
                vec![Point::new(8.0, 0.0), Point::new(0.0, 0.0)],
            )
            .unwrap(),
        )
        .unwrap();

    let mut curve_polygon = CurvePolygon::new(Dimension::Xy);
    curve_polygon.add_ring(exterior).unwrap();
    curve_polygon
        .add_ring(ring(&[(2.0, 1.0), (5.0, 1.0), (4.0, 2.0), (2.0, 1.0)]))
        .unwrap();
    curve_polygon
}

pub fn multi_point_2d() -> MultiPoint {
    let mut multi = MultiPoint::new(Dimension::Xy);
    multi.add_point(Point::new(10.0, 40.0)).unwrap();
    multi.add_point(Point::new(40.0, 30.0)).unwrap();
    multi.add_point(Point::new(20.0, 20.0)).unwrap();
    multi.add_point(Point::new(30.0, 10.0)).unwrap();
    multi
}

pub fn multi_point_zm() -> MultiPoint {
    let mut multi = MultiPoint::new(Dimension::Xyzm);
    multi
        .add_point(Point::xyzm(10.0, 40.0, 1.0, 0.5))
        .unwrap();
    multi
        .add_point(Point::xyzm(40.0, 30.0, 2.0, 1.5))
        .unwrap();
    multi
}

pub fn multi_line_string_2d() -> MultiLineString {
    let mut multi = MultiLineString::new(Dimension::Xy);
    multi
        .add_line_string(ring(&[(10.0, 10.0), (20.0, 20.0), (10.0, 40.0)]))
        .unwrap();
    multi
        .add_line_string(ring(&[
            (40.0, 40.0),
            (30.0, 30.0),
            (40.0, 20.0),
            (30.0, 10.0),
        ]))
        .unwrap();
    multi
}

/// One polygon of a single 15-point ring, 2.5D
pub fn multi_polygon_z() -> MultiPolygon {
    let points = (0..15)
        .map(|i| {
            let angle = (i as f64) * std::f64::consts::TAU / 14.0;
            Point::xyz(
                -104.8 + angle.cos() * 0.25,
                39.7 + angle.sin() * 0.25,
                1600.0 + (i as f64) * 3.5,
            )
        })
        .collect();
    let ring = LineString::from_points(Dimension::Xyz, points).unwrap();
    let mut multi = MultiPolygon::new(Dimension::Xyz);
    multi
        .add_polygon(Polygon::from_rings(Dimension::Xyz, vec![ring]).unwrap())
        .unwrap();
    multi
}

pub fn polyhedral_surface_z() -> PolyhedralSurface {
    let face = |coords: &[(f64, f64, f64)]| {
        Polygon::from_rings(
            Dimension::Xyz,
            vec![LineString::from_points(
                Dimension::Xyz,
                coords.iter().map(|&(x, y, z)| Point::xyz(x, y, z)).collect(),
            )
            .unwrap()],
        )
        .unwrap()
    };
    let mut surface = PolyhedralSurface::new(Dimension::Xyz);
    surface
        .add_polygon(face(&[
            (0.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (1.0, 1.0, 0.0),
            (1.0, 0.0, 0.0),
            (0.0, 0.0, 0.0),
        ]))
        .unwrap();
    surface
        .add_polygon(face(&[
            (0.0, 0.0, 0.0),
            (0.0, 0.0, 1.0),
            (0.0, 1.0, 1.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 0.0),
        ]))
        .unwrap();
    surface
        .add_polygon(face(&[
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (1.0, 0.0, 1.0),
            (0.0, 0.0, 1.0),
            (0.0, 0.0, 0.0),
        ]))
        .unwrap();
    surface
}

pub fn tin_z() -> Tin {
    let patch = |coords: &[(f64, f64, f64)]| {
        Triangle::from_rings(
            Dimension::Xyz,
            vec![LineString::from_points(
                Dimension::Xyz,
                coords.iter().map(|&(x, y, z)| Point::xyz(x, y, z)).collect(),
            )
            .unwrap()],
        )
        .unwrap()
    };
    let mut tin = Tin::new(Dimension::Xyz);
    tin.add_triangle(patch(&[
        (0.0, 0.0, 0.0),
        (0.0, 0.0, 1.0),
        (0.0, 1.0, 0.0),
        (0.0, 0.0, 0.0),
    ]))
    .unwrap();
    tin.add_triangle(patch(&[
        (0.0, 0.0, 0.0),
        (0.0, 1.0, 0.0),
        (1.0, 1.0, 0.0),
        (0.0, 0.0, 0.0),
    ]))
    .unwrap();
    tin
}

pub fn geometry_collection_2d() -> GeometryCollection {
    let mut collection = GeometryCollection::new(Dimension::Xy);
    collection.add_geometry(point_2d()).unwrap();
    collection.add_geometry(line_string_2d()).unwrap();
    collection.add_geometry(polygon_2d()).unwrap();
    collection
}

/// A collection whose children are all curves: two line strings of 3 and 10
/// points
pub fn curve_collection_2d() -> GeometryCollection {
    let first = line_string_2d();
    let second = LineString::from_points(
        Dimension::Xy,
        vec![
            Point::new(-83.02579, 42.33143),
            Point::new(-82.95192, 42.34632),
            Point::new(-82.86035, 42.35091),
            Point::new(-82.78083, 42.38159),
            Point::new(-82.66843, 42.45481),
            Point::new(-82.59831, 42.54322),
            Point::new(-82.51262, 42.61927),
            Point::new(-82.5403, 42.84817),
            Point::new(-82.64453, 43.02914),
            Point::new(-76.52909336488278, 44.2390383216843),
        ],
    )
    .unwrap();

    let mut collection = GeometryCollection::new(Dimension::Xy);
    collection.add_geometry(first).unwrap();
    collection.add_geometry(second).unwrap();
    collection
}

/// A collection whose children are all surfaces
pub fn surface_collection_2d() -> GeometryCollection {
    let mut collection = GeometryCollection::new(Dimension::Xy);
    collection.add_geometry(polygon_2d_with_interior()).unwrap();
    collection.add_geometry(curve_polygon_2d()).unwrap();
    collection
}
