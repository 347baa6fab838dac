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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Layer, Path, Point};
use crate::factory::ElementFactory;

/// Validated geometry decoded from a document.
///
/// Each variant carries its payload after all coordinate and ring checks
/// passed. Turning a geometry into layer elements can't fail.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geometry {
    Point(Point),
    MultiPoint(Vec<Point>),
    LineString(Path),
    MultiLineString(Vec<Path>),
    /// Rings of a polygon with the outer boundary first.
    Polygon(Vec<Path>),
    MultiPolygon(Vec<Vec<Path>>),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// Builds the elements of this geometry with the `factory` and appends
    /// them to the `layer` in document order.
    pub fn append_to<F>(self, factory: &F, layer: &mut Layer)
    where
        F: ElementFactory + ?Sized,
    {
        match self {
            Self::Point(point) => append_icon(factory, layer, point),
            Self::MultiPoint(points) => points
                .into_iter()
                .for_each(|point| append_icon(factory, layer, point)),
            Self::LineString(path) => append_polyline(factory, layer, path),
            Self::MultiLineString(paths) => paths
                .into_iter()
                .for_each(|path| append_polyline(factory, layer, path)),
            Self::Polygon(rings) => append_polygon(factory, layer, rings),
            Self::MultiPolygon(polygons) => polygons
                .into_iter()
                .for_each(|rings| append_polygon(factory, layer, rings)),
            Self::GeometryCollection(geometries) => geometries
                .into_iter()
                .for_each(|geometry| geometry.append_to(factory, layer)),
        }
    }
}

fn append_icon<F: ElementFactory + ?Sized>(factory: &F, layer: &mut Layer, point: Point) {
    let mut icon = factory.new_icon();
    icon.set_location(point);
    layer.push(icon);
}

fn append_polyline<F: ElementFactory + ?Sized>(factory: &F, layer: &mut Layer, path: Path) {
    let mut line = factory.new_polyline();
    line.set_path(path);
    layer.push(line);
}

fn append_polygon<F: ElementFactory + ?Sized>(factory: &F, layer: &mut Layer, rings: Vec<Path>) {
    let mut polygon = factory.new_polygon();
    polygon.set_rings(rings);
    layer.push(polygon);
}
