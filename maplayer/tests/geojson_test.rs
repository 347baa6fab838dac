// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::thread;

use maplayer::{geojson, AltitudeReference, Error, ErrorKind, Position};

const FEATURES: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": {"name": "Dinagat Islands", "elevation": 12},
      "geometry": {"type": "Point", "coordinates": [125.6, 10.1]}
    },
    {
      "type": "Feature",
      "properties": {"name": "Surigao"},
      "geometry": {"type": "Point", "coordinates": [125.5, 9.8, 20]}
    }
  ]
}"#;

const MIXED: &str = r#"{
  "type": "GeometryCollection",
  "geometries": [
    {"type": "Point", "coordinates": [100.0, 0.0]},
    {"type": "LineString", "coordinates": [[101.0, 0.0], [102.0, 1.0]]},
    {
      "type": "Polygon",
      "coordinates": [
        [[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]],
        [[100.8, 0.8], [100.8, 0.2], [100.2, 0.2], [100.2, 0.8], [100.8, 0.8]]
      ]
    },
    {
      "type": "MultiLineString",
      "coordinates": [
        [[170.0, 45.0], [180.0, 45.0]],
        [[-180.0, 45.0], [-170.0, 45.0]]
      ]
    }
  ]
}"#;

#[test]
fn point_becomes_single_icon() {
    let layer = geojson::parse(r#"{"type": "Point", "coordinates": [30, 10]}"#)
        .expect("point should parse");

    assert_eq!(layer.len(), 1);
    let icon = layer.icons().next().expect("layer should contain an icon");
    assert_eq!(icon.location().position, Position::with_altitude(10.0, 30.0, 0.0));
    assert_eq!(icon.title(), None);
}

#[test]
fn polygon_keeps_ring_order() {
    let layer = geojson::parse(
        r#"{"type": "Polygon", "coordinates": [[[30, 10], [40, 40], [20, 40], [10, 20], [30, 10]]]}"#,
    )
    .expect("polygon should parse");

    let polygon = layer.polygons().next().expect("layer should contain a polygon");
    assert_eq!(polygon.rings().len(), 1);

    let ring: Vec<(f64, f64)> = polygon.rings()[0]
        .iter()
        .map(|p| (p.longitude, p.latitude))
        .collect();
    assert_eq!(
        ring,
        vec![(30.0, 10.0), (40.0, 40.0), (20.0, 40.0), (10.0, 20.0), (30.0, 10.0)]
    );
}

#[test]
fn feature_collection_yields_icons_in_order() {
    let layer = geojson::parse(FEATURES).expect("features should parse");

    let icons: Vec<_> = layer.icons().collect();
    assert_eq!(icons.len(), 2);
    assert_eq!(icons[0].location().position.longitude, 125.6);
    assert_eq!(icons[1].location().position.longitude, 125.5);

    // properties are not carried over
    assert!(icons.iter().all(|icon| icon.title().is_none()));

    assert_eq!(
        icons[0].location().altitude_reference,
        AltitudeReference::Surface
    );
    assert_eq!(
        icons[1].location().altitude_reference,
        AltitudeReference::Ellipsoid
    );
}

#[test]
fn geometry_collection_flattens_in_document_order() {
    let layer = geojson::parse(MIXED).expect("collection should parse");

    let kinds: Vec<&str> = layer
        .elements()
        .iter()
        .map(|element| {
            if element.as_icon().is_some() {
                "icon"
            } else if element.as_polyline().is_some() {
                "polyline"
            } else {
                "polygon"
            }
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["icon", "polyline", "polygon", "polyline", "polyline"]
    );

    let polygon = layer.polygons().next().expect("layer should contain a polygon");
    assert_eq!(polygon.interiors().len(), 1);
}

#[test]
fn geometry_collection_rejects_feature() {
    let e = geojson::parse(
        r#"{
          "type": "GeometryCollection",
          "geometries": [
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 2]}}
          ]
        }"#,
    )
    .unwrap_err();

    assert_eq!(e.kind(), ErrorKind::Semantic);
    assert!(matches!(e, Error::UnknownGeometry { found } if found == "Feature"));
}

#[test]
fn feature_collection_rejects_geometry_entry() {
    let e = geojson::parse(
        r#"{"type": "FeatureCollection", "features": [{"type": "Point", "coordinates": [1, 2]}]}"#,
    )
    .unwrap_err();

    assert!(matches!(e, Error::NotAFeature { found } if found == "Point"));
}

#[test]
fn rejects_forbidden_members() {
    let e = geojson::parse(
        r#"{"type": "Point", "coordinates": [1, 2], "features": []}"#,
    )
    .unwrap_err();
    assert!(matches!(e, Error::ForbiddenMember { member: "features", .. }));

    let e = geojson::parse(
        r#"{"type": "FeatureCollection", "features": [], "coordinates": [1, 2]}"#,
    )
    .unwrap_err();
    assert!(matches!(e, Error::ForbiddenMember { member: "coordinates", .. }));
}

#[test]
fn rejects_null_feature_geometry() {
    let e = geojson::parse(r#"{"type": "Feature", "properties": {}, "geometry": null}"#)
        .unwrap_err();
    assert_eq!(e, Error::NullGeometry);
}

#[test]
fn coordinate_bounds_are_inclusive() {
    for valid in ["[180, -90]", "[-180, 90]", "[0, 0, -12.5]"] {
        let text = format!(r#"{{"type": "Point", "coordinates": {valid}}}"#);
        assert!(geojson::parse(&text).is_ok(), "{valid} should be accepted");
    }

    for invalid in ["[180.0001, 0]", "[0, -90.005]", "[-181, 0]", "[0, 91]"] {
        let text = format!(r#"{{"type": "Point", "coordinates": {invalid}}}"#);
        let e = geojson::parse(&text).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Semantic, "{invalid} should be rejected");
    }
}

#[test]
fn rejects_invalid_rings() {
    let too_short = r#"{"type": "Polygon", "coordinates": [[[0, 0], [1, 1], [0, 0]]]}"#;
    assert!(matches!(
        geojson::parse(too_short),
        Err(Error::RingTooShort { .. })
    ));

    let open = r#"{"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1]]]}"#;
    assert!(matches!(geojson::parse(open), Err(Error::RingNotClosed { .. })));

    let altitude_differs =
        r#"{"type": "Polygon", "coordinates": [[[30, 10, 5], [40, 40], [20, 40], [30, 10]]]}"#;
    assert!(matches!(
        geojson::parse(altitude_differs),
        Err(Error::RingNotClosed { .. })
    ));
}

#[test]
fn rejects_malformed_coordinates() {
    for coordinates in [r#"["30", 10]"#, "[true, 10]", "[{}, 10]", "[[30], 10]", "[null, 10]"] {
        let text = format!(r#"{{"type": "Point", "coordinates": {coordinates}}}"#);
        let e = geojson::parse(&text).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Syntax, "{coordinates} should be rejected");
    }

    let e = geojson::parse(r#"{"type": "Point", "coordinates": []}"#).unwrap_err();
    assert!(matches!(e, Error::MissingCoordinates { .. }));
}

#[test]
fn any_altitude_promotes_the_path() {
    let layer = geojson::parse(
        r#"{"type": "LineString", "coordinates": [[30, 10, 2, 5], [10, 30], [40, 40]]}"#,
    )
    .expect("line should parse");

    let path = layer.polylines().next().expect("layer should contain a line").path();
    assert_eq!(path.altitude_reference(), AltitudeReference::Ellipsoid);
    assert_eq!(path.positions()[0].altitude, 2.0);
    assert_eq!(path.positions()[1].altitude, 0.0);
}

#[test]
fn rejects_empty_input() {
    assert_eq!(geojson::parse(""), Err(Error::EmptyInput));
    assert_eq!(geojson::parse(" \n\t"), Err(Error::EmptyInput));
    assert_eq!(geojson::parse("{").unwrap_err().kind(), ErrorKind::Syntax);
}

#[test]
fn parsing_is_idempotent_across_threads() {
    let first = geojson::parse(MIXED).expect("collection should parse");
    let second = geojson::parse(MIXED).expect("collection should parse");
    assert_eq!(first, second);

    let layers: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| geojson::parse(MIXED))).collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("parser thread should not panic"))
            .collect()
    });

    for layer in layers {
        assert_eq!(layer.as_ref(), Ok(&first));
    }
}

/// Wraps a point in `depth` geometry collections.
fn nested_collections(depth: usize) -> String {
    format!(
        r#"{}{{"type": "Point", "coordinates": [1, 2]}}{}"#,
        r#"{"type": "GeometryCollection", "geometries": ["#.repeat(depth),
        "]}".repeat(depth)
    )
}

#[test]
fn nested_geometry_collections_resolve_to_primitives() {
    let layer = geojson::parse(
        r#"{"type": "GeometryCollection", "geometries": [
            {"type": "Point", "coordinates": [1, 2]},
            {"type": "GeometryCollection", "geometries": [
                {"type": "LineString", "coordinates": [[1, 2], [3, 4]]},
                {"type": "GeometryCollection", "geometries": []}
            ]},
            {"type": "Point", "coordinates": [5, 6]}
        ]}"#,
    )
    .expect("nested collections should parse");

    assert_eq!(layer.len(), 3);
    assert!(layer.elements()[0].as_icon().is_some());
    assert!(layer.elements()[1].as_polyline().is_some());
    assert_eq!(
        layer.elements()[2].as_icon().map(|icon| icon.location().position),
        Some(Position::new(6.0, 5.0))
    );
}

#[test]
fn collection_nesting_is_bounded_by_json_depth() {
    let layer = geojson::parse(&nested_collections(62)).expect("62 levels should parse");
    assert_eq!(layer.icons().count(), 1);

    let e = geojson::parse(&nested_collections(63)).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Syntax);
    assert!(e.to_string().contains("recursion limit"), "{e}");
}

#[test]
fn feature_in_collection_rejects_nested_features() {
    let e = geojson::parse(
        r#"{"type": "FeatureCollection", "features": [
            {
              "type": "Feature",
              "geometry": {"type": "Point", "coordinates": [1, 2]},
              "features": []
            }
        ]}"#,
    )
    .unwrap_err();

    assert_eq!(e.kind(), ErrorKind::Semantic);
    assert!(matches!(
        e,
        Error::ForbiddenMember { object, member: "features" } if object == "Feature"
    ));
}

#[test]
fn multi_point_yields_icon_per_position() {
    let layer = geojson::parse(
        r#"{"type": "MultiPoint", "coordinates": [[10, 40, 5], [40, 30], [20, 20], [30, 10]]}"#,
    )
    .expect("multi point should parse");

    let icons: Vec<_> = layer.icons().collect();
    assert_eq!(icons.len(), 4);
    assert_eq!(icons[0].location().position, Position::with_altitude(40.0, 10.0, 5.0));
    assert_eq!(
        icons[0].location().altitude_reference,
        AltitudeReference::Ellipsoid
    );
    assert_eq!(icons[3].location().altitude_reference, AltitudeReference::Surface);
}

#[test]
fn multi_polygon_yields_polygon_per_entry() {
    let layer = geojson::parse(
        r#"{"type": "MultiPolygon", "coordinates": [
            [[[30, 20], [45, 40], [10, 40], [30, 20]]],
            [
              [[15, 5], [40, 10], [10, 20], [5, 10], [15, 5]],
              [[20, 10], [10, 15], [15, 12], [20, 10]]
            ]
        ]}"#,
    )
    .expect("multi polygon should parse");

    let polygons: Vec<_> = layer.polygons().collect();
    assert_eq!(polygons.len(), 2);
    assert_eq!(polygons[0].rings().len(), 1);
    assert_eq!(polygons[1].interiors().len(), 1);
    assert_eq!(polygons[1].rings()[0].len(), 5);

    let e = geojson::parse(
        r#"{"type": "MultiPolygon", "coordinates": [[[[0, 0], [1, 0], [1, 1], [0, 1]]]]}"#,
    )
    .unwrap_err();
    assert!(matches!(e, Error::RingNotClosed { .. }));
}
