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

use std::str::FromStr;

use log::debug;
use serde_json::{Map, Value};

use crate::error::Error;
use crate::factory::{DefaultFactory, ElementFactory};
use crate::model::{AltitudeReference, Geometry, Layer, Path, Point, Position};
use crate::options::ParseOptions;
use crate::validate::{self, AltitudeInference};

/// Members a geometry object must not carry.
const GEOMETRY_FORBIDDEN: &[&str] = &["geometry", "properties", "features"];

/// Members a feature collection must not carry.
const COLLECTION_FORBIDDEN: &[&str] = &["geometry", "coordinates", "geometries"];

/// Parses a GeoJSON document into a layer of default elements.
///
/// # Examples
///
/// ```
/// use maplayer::{geojson, AltitudeReference};
///
/// # fn main() -> Result<(), maplayer::Error> {
/// let layer = geojson::parse(r#"{"type": "Point", "coordinates": [30, 10]}"#)?;
///
/// let icon = layer.icons().next().expect("layer should have an icon");
/// assert_eq!(icon.location().position.longitude, 30.0);
/// assert_eq!(icon.location().position.latitude, 10.0);
/// assert_eq!(icon.location().altitude_reference, AltitudeReference::Surface);
/// #     Ok(())
/// # }
/// ```
pub fn parse(text: &str) -> Result<Layer, Error> {
    parse_with(text, &DefaultFactory, &ParseOptions::default())
}

/// Parses a GeoJSON document with the elements built by the `factory`.
pub fn parse_with<F>(text: &str, factory: &F, options: &ParseOptions) -> Result<Layer, Error>
where
    F: ElementFactory + ?Sized,
{
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let root: Value = serde_json::from_str(text)?;
    let mut parser = Parser {
        options: *options,
        warned: false,
    };

    let geometries = parser.document(&root)?;

    let mut layer = factory.new_layer();
    for geometry in geometries {
        geometry.append_to(factory, &mut layer);
    }

    debug!("parsed GeoJSON document with {} elements", layer.len());
    Ok(layer)
}

/// Discriminator of a GeoJSON geometry object.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl FromStr for GeometryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Point" => Ok(Self::Point),
            "MultiPoint" => Ok(Self::MultiPoint),
            "LineString" => Ok(Self::LineString),
            "MultiLineString" => Ok(Self::MultiLineString),
            "Polygon" => Ok(Self::Polygon),
            "MultiPolygon" => Ok(Self::MultiPolygon),
            "GeometryCollection" => Ok(Self::GeometryCollection),
            _ => Err(Error::UnknownGeometry {
                found: s.to_string(),
            }),
        }
    }
}

/// Recursive descent over the JSON tree.
///
/// Locations are tracked as JSON pointers into the document.
struct Parser {
    options: ParseOptions,
    warned: bool,
}

impl Parser {
    fn document(&mut self, root: &Value) -> Result<Vec<Geometry>, Error> {
        let object = as_object(root, "")?;

        match type_of(object, "")? {
            "FeatureCollection" => self.feature_collection(object),
            "Feature" => Ok(vec![self.feature(object, "")?]),
            _ => Ok(vec![self.geometry(object, "")?]),
        }
    }

    fn feature_collection(&mut self, object: &Map<String, Value>) -> Result<Vec<Geometry>, Error> {
        validate::no_members(object, COLLECTION_FORBIDDEN)?;

        let features = as_array(member(object, "features", "")?, "/features")?;
        let mut geometries = Vec::with_capacity(features.len());

        for (i, feature) in features.iter().enumerate() {
            let at = format!("/features/{i}");
            let feature = as_object(feature, &at)?;
            let kind = type_of(feature, &at)?;
            if kind != "Feature" {
                return Err(Error::NotAFeature {
                    found: kind.to_string(),
                });
            }
            geometries.push(self.feature(feature, &at)?);
        }

        Ok(geometries)
    }

    /// Unwraps the geometry of a feature. Its properties are ignored.
    fn feature(&mut self, object: &Map<String, Value>, at: &str) -> Result<Geometry, Error> {
        let geometry = match object.get("geometry") {
            None | Some(Value::Null) => return Err(Error::NullGeometry),
            Some(geometry) => geometry,
        };
        validate::no_members(object, &["features"])?;

        let at = format!("{at}/geometry");
        self.geometry(as_object(geometry, &at)?, &at)
    }

    fn geometry(&mut self, object: &Map<String, Value>, at: &str) -> Result<Geometry, Error> {
        let kind: GeometryKind = type_of(object, at)?.parse()?;

        let geometry = match kind {
            GeometryKind::Point => {
                let (coordinates, at) = coordinates(object, at)?;
                Geometry::Point(self.point(coordinates, &at)?)
            }
            GeometryKind::MultiPoint => {
                let (coordinates, at) = coordinates(object, at)?;
                let entries = as_array(coordinates, &at)?;
                let mut points = Vec::with_capacity(entries.len());
                for (i, entry) in entries.iter().enumerate() {
                    points.push(self.point(entry, &format!("{at}/{i}"))?);
                }
                Geometry::MultiPoint(points)
            }
            GeometryKind::LineString => {
                let (coordinates, at) = coordinates(object, at)?;
                Geometry::LineString(self.line(coordinates, &at)?)
            }
            GeometryKind::MultiLineString => {
                let (coordinates, at) = coordinates(object, at)?;
                let entries = as_array(coordinates, &at)?;
                let mut lines = Vec::with_capacity(entries.len());
                for (i, entry) in entries.iter().enumerate() {
                    lines.push(self.line(entry, &format!("{at}/{i}"))?);
                }
                Geometry::MultiLineString(lines)
            }
            GeometryKind::Polygon => {
                let (coordinates, at) = coordinates(object, at)?;
                Geometry::Polygon(self.polygon(coordinates, &at)?)
            }
            GeometryKind::MultiPolygon => {
                let (coordinates, at) = coordinates(object, at)?;
                let entries = as_array(coordinates, &at)?;
                let mut polygons = Vec::with_capacity(entries.len());
                for (i, entry) in entries.iter().enumerate() {
                    polygons.push(self.polygon(entry, &format!("{at}/{i}"))?);
                }
                Geometry::MultiPolygon(polygons)
            }
            GeometryKind::GeometryCollection => {
                let at = format!("{at}/geometries");
                let entries = as_array(member(object, "geometries", &at)?, &at)?;
                let mut geometries = Vec::with_capacity(entries.len());
                for (i, entry) in entries.iter().enumerate() {
                    let at = format!("{at}/{i}");
                    geometries.push(self.geometry(as_object(entry, &at)?, &at)?);
                }
                Geometry::GeometryCollection(geometries)
            }
        };

        validate::no_members(object, GEOMETRY_FORBIDDEN)?;
        Ok(geometry)
    }

    fn point(&mut self, value: &Value, at: &str) -> Result<Point, Error> {
        let (position, has_altitude) = position(value, at)?;
        let mut inference = self.inference();
        inference.observe(has_altitude);
        Ok(inference.finish_point(position))
    }

    fn line(&mut self, value: &Value, at: &str) -> Result<Path, Error> {
        let mut inference = self.inference();
        let positions = self.positions(value, at, &mut inference)?;
        validate::line(&positions, at)?;
        Ok(inference.finish(positions))
    }

    fn polygon(&mut self, value: &Value, at: &str) -> Result<Vec<Path>, Error> {
        let entries = as_array(value, at)?;
        if entries.is_empty() {
            return Err(Error::EmptyPolygon {
                location: pointer(at),
            });
        }

        let mut rings = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let mut inference = self.inference();
            let positions = self.positions(entry, &format!("{at}/{i}"), &mut inference)?;
            // the ring must be closed with the altitudes as written
            validate::ring(&positions)?;
            rings.push(inference.finish(positions));
        }

        Ok(rings)
    }

    fn positions(
        &mut self,
        value: &Value,
        at: &str,
        inference: &mut AltitudeInference,
    ) -> Result<Vec<Position>, Error> {
        let entries = as_array(value, at)?;
        let mut positions = Vec::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            let (position, has_altitude) = position(entry, &format!("{at}/{i}"))?;
            inference.observe(has_altitude);
            positions.push(position);
        }

        if inference.is_mixed() {
            validate::warn_mixed_altitudes(&mut self.warned, self.options.altitude_policy);
        }

        Ok(positions)
    }

    fn inference(&self) -> AltitudeInference {
        AltitudeInference::new(self.options.altitude_policy, AltitudeReference::Ellipsoid)
    }
}

/// Reads a position from `[longitude, latitude, altitude?, ...]`.
///
/// Returns whether the position has an explicit altitude. Components beyond
/// the altitude are ignored.
fn position(value: &Value, at: &str) -> Result<(Position, bool), Error> {
    let components = as_array(value, at)?;
    if components.len() < 2 {
        return Err(Error::MissingCoordinates {
            found: value.to_string(),
            location: pointer(at),
        });
    }

    let longitude = as_number(&components[0], &format!("{at}/0"))?;
    let latitude = as_number(&components[1], &format!("{at}/1"))?;
    let altitude = components
        .get(2)
        .map(|v| as_number(v, &format!("{at}/2")))
        .transpose()?;

    let position = validate::position(longitude, latitude, altitude, &pointer(at))?;
    Ok((position, altitude.is_some()))
}

/// Returns the `coordinates` member with its location.
fn coordinates<'v>(object: &'v Map<String, Value>, at: &str) -> Result<(&'v Value, String), Error> {
    let at = format!("{at}/coordinates");
    Ok((member(object, "coordinates", &at)?, at))
}

/// Returns the JSON pointer of a location, with `/` for the root.
fn pointer(at: &str) -> String {
    if at.is_empty() {
        "/".to_string()
    } else {
        at.to_string()
    }
}

fn member<'v>(object: &'v Map<String, Value>, name: &str, at: &str) -> Result<&'v Value, Error> {
    object
        .get(name)
        .ok_or_else(|| Error::syntax_at(format!("missing \"{name}\" member"), pointer(at)))
}

fn type_of<'v>(object: &'v Map<String, Value>, at: &str) -> Result<&'v str, Error> {
    let at = format!("{at}/type");
    member(object, "type", &at)?
        .as_str()
        .ok_or_else(|| Error::syntax_at("\"type\" must be a string", pointer(&at)))
}

fn as_object<'v>(value: &'v Value, at: &str) -> Result<&'v Map<String, Value>, Error> {
    value
        .as_object()
        .ok_or_else(|| Error::syntax_at(format!("expected an object, instead saw {value}"), pointer(at)))
}

fn as_array<'v>(value: &'v Value, at: &str) -> Result<&'v Vec<Value>, Error> {
    value
        .as_array()
        .ok_or_else(|| Error::syntax_at(format!("expected an array, instead saw {value}"), pointer(at)))
}

fn as_number(value: &Value, at: &str) -> Result<f64, Error> {
    value
        .as_f64()
        .ok_or_else(|| Error::syntax_at(format!("expected a number, instead saw {value}"), pointer(at)))
}
