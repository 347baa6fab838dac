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

use ::geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};
use serde_json::Map;

use crate::model::{AltitudeReference, Element, Layer, Path, Point};

impl Layer {
    /// Returns the layer as GeoJSON feature collection with one feature per
    /// element in document order.
    ///
    /// Altitudes are written only for positions that aren't on the surface.
    /// Icon titles are kept as `title` property.
    #[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
    pub fn to_geojson(&self) -> GeoJson {
        let features = self.elements().iter().map(to_feature).collect();

        GeoJson::FeatureCollection(FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        })
    }
}

fn to_feature(element: &Element) -> Feature {
    let (value, properties) = match element {
        Element::Icon(icon) => {
            let properties = icon.title().map(|title| {
                let mut properties = Map::new();
                properties.insert("title".to_string(), title.into());
                properties
            });
            (Value::Point(point(icon.location())), properties)
        }
        Element::Polyline(line) => (Value::LineString(path(line.path())), None),
        Element::Polygon(polygon) => (
            Value::Polygon(polygon.rings().iter().map(path).collect()),
            None,
        ),
    };

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties,
        foreign_members: None,
    }
}

fn point(point: &Point) -> Vec<f64> {
    let p = point.position;
    match point.altitude_reference {
        AltitudeReference::Surface => vec![p.longitude, p.latitude],
        _ => vec![p.longitude, p.latitude, p.altitude],
    }
}

fn path(path: &Path) -> Vec<Vec<f64>> {
    path.iter()
        .map(|&position| point(&Point::new(position, path.altitude_reference())))
        .collect()
}
