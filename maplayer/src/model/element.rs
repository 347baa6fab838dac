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

use super::{Path, Point};

/// Opaque blue as ARGB.
pub const DEFAULT_COLOR: u32 = 0xff0000ff;

/// Fully transparent as ARGB.
pub const TRANSPARENT: u32 = 0x00ffffff;

/// Outline of polylines and polygons.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stroke {
    /// ARGB color.
    pub color: u32,
    pub width: u32,
    pub dashed: bool,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            width: 1,
            dashed: false,
        }
    }
}

/// Marker rendered at a point.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Icon {
    location: Point,
    title: Option<String>,
    image: Option<String>,
    visible: bool,
}

impl Default for Icon {
    fn default() -> Self {
        Self {
            location: Point::default(),
            title: None,
            image: None,
            visible: true,
        }
    }
}

impl Icon {
    pub fn location(&self) -> &Point {
        &self.location
    }

    pub fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// Reference to the image shown as marker, e.g. an URL.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn set_image(&mut self, image: Option<String>) {
        self.image = image;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Line rendered along a path.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polyline {
    path: Path,
    stroke: Stroke,
    visible: bool,
}

impl Default for Polyline {
    fn default() -> Self {
        Self {
            path: Path::default(),
            stroke: Stroke::default(),
            visible: true,
        }
    }
}

impl Polyline {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_path(&mut self, path: Path) {
        self.path = path;
    }

    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    pub fn stroke_mut(&mut self) -> &mut Stroke {
        &mut self.stroke
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Area bounded by rings.
///
/// The first ring is the outer boundary, all following rings are holes. Each
/// ring is closed and has at least 4 positions.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    rings: Vec<Path>,
    fill_color: u32,
    stroke: Stroke,
    visible: bool,
}

impl Default for Polygon {
    fn default() -> Self {
        Self {
            rings: Vec::new(),
            fill_color: DEFAULT_COLOR,
            stroke: Stroke::default(),
            visible: true,
        }
    }
}

impl Polygon {
    pub fn rings(&self) -> &[Path] {
        &self.rings
    }

    pub fn set_rings(&mut self, rings: Vec<Path>) {
        self.rings = rings;
    }

    /// Returns the outer boundary.
    pub fn exterior(&self) -> Option<&Path> {
        self.rings.first()
    }

    /// Returns the holes.
    pub fn interiors(&self) -> &[Path] {
        self.rings.get(1..).unwrap_or_default()
    }

    pub fn fill_color(&self) -> u32 {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: u32) {
        self.fill_color = color;
    }

    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    pub fn stroke_mut(&mut self) -> &mut Stroke {
        &mut self.stroke
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl From<&Polygon> for geo::Polygon<f64> {
    fn from(polygon: &Polygon) -> Self {
        let exterior = polygon
            .exterior()
            .map(geo::LineString::from)
            .unwrap_or_else(|| geo::LineString::new(Vec::new()));
        let interiors = polygon
            .interiors()
            .iter()
            .map(geo::LineString::from)
            .collect();
        geo::Polygon::new(exterior, interiors)
    }
}

/// Element of a [`Layer`](super::Layer).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Element {
    Icon(Icon),
    Polyline(Polyline),
    Polygon(Polygon),
}

impl Element {
    pub fn as_icon(&self) -> Option<&Icon> {
        match self {
            Self::Icon(icon) => Some(icon),
            _ => None,
        }
    }

    pub fn as_polyline(&self) -> Option<&Polyline> {
        match self {
            Self::Polyline(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Self::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Self::Icon(icon) => icon.is_visible(),
            Self::Polyline(line) => line.is_visible(),
            Self::Polygon(polygon) => polygon.is_visible(),
        }
    }
}

impl From<Icon> for Element {
    fn from(icon: Icon) -> Self {
        Self::Icon(icon)
    }
}

impl From<Polyline> for Element {
    fn from(line: Polyline) -> Self {
        Self::Polyline(line)
    }
}

impl From<Polygon> for Element {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}
