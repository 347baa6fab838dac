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

use std::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Position;

/// How an altitude is interpreted relative to a datum.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AltitudeReference {
    /// Altitudes are ignored and the geometry is placed on the ground.
    #[default]
    Surface,
    /// Altitude above the WGS84 ellipsoid.
    Ellipsoid,
    /// Altitude above the geoid (mean sea level).
    Geoid,
}

/// Ordered sequence of positions tagged with their altitude reference.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path {
    positions: Vec<Position>,
    altitude_reference: AltitudeReference,
}

impl Path {
    pub fn new(positions: Vec<Position>, altitude_reference: AltitudeReference) -> Self {
        Self {
            positions,
            altitude_reference,
        }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn altitude_reference(&self) -> AltitudeReference {
        self.altitude_reference
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn first(&self) -> Option<&Position> {
        self.positions.first()
    }

    pub fn last(&self) -> Option<&Position> {
        self.positions.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, Position> {
        self.positions.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

impl From<&Path> for geo::LineString<f64> {
    fn from(path: &Path) -> Self {
        path.iter()
            .map(|&p| geo::Coord::from(p))
            .collect::<Vec<_>>()
            .into()
    }
}

/// A single position with the altitude reference of its source.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub position: Position,
    pub altitude_reference: AltitudeReference,
}

impl Point {
    pub fn new(position: Position, altitude_reference: AltitudeReference) -> Self {
        Self {
            position,
            altitude_reference,
        }
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(p: Point) -> Self {
        p.position.into()
    }
}
