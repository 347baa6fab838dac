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

use std::error;
use std::fmt;

use crate::model::Position;

/// Classification of an [`Error`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    /// The caller handed over no text at all.
    Precondition,
    /// The text can't be tokenized into the expected document shape.
    Syntax,
    /// The document is well-formed but violates a geometry rule.
    Semantic,
}

/// Terminal error of a parse.
///
/// The first violation aborts the parse and no partial layer is returned.
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// The input text is empty or contains only whitespace.
    EmptyInput,
    /// Malformed document, missing required member or wrong value type.
    Syntax { message: String, position: String },
    /// Fewer than two components where a position is expected.
    MissingCoordinates { found: String, location: String },
    LongitudeOutOfRange { value: f64, location: String },
    LatitudeOutOfRange { value: f64, location: String },
    /// The discriminator names no known geometry.
    UnknownGeometry { found: String },
    /// An entry of a feature collection isn't a feature.
    NotAFeature { found: String },
    /// A feature without a geometry.
    NullGeometry,
    /// An object carries a member its type must not have.
    ForbiddenMember { object: String, member: &'static str },
    RingTooShort { positions: Vec<Position> },
    RingNotClosed { first: Position, last: Position },
    LineTooShort { positions: usize, location: String },
    EmptyPolygon { location: String },
    /// A placemark point with more than one coordinate tuple.
    MultiplePointPositions { count: usize },
    /// A coordinates element without any tuple.
    EmptyCoordinates { position: String },
}

impl Error {
    pub(crate) fn syntax_at<M, P>(message: M, position: P) -> Self
    where
        M: Into<String>,
        P: Into<String>,
    {
        Self::Syntax {
            message: message.into(),
            position: position.into(),
        }
    }

    /// Returns whether this is a precondition, syntax or semantic error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::Precondition,
            Self::Syntax { .. } | Self::MissingCoordinates { .. } => ErrorKind::Syntax,
            _ => ErrorKind::Semantic,
        }
    }
}

fn join(positions: &[Position]) -> String {
    positions
        .iter()
        .map(Position::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "input text cannot be empty"),
            Self::Syntax { message, position } => write!(f, "{message} (at {position})"),
            Self::MissingCoordinates { found, location } => write!(
                f,
                "coordinates must contain at least longitude and latitude, instead saw {found} at {location}"
            ),
            Self::LongitudeOutOfRange { value, location } => write!(
                f,
                "longitude must be in the range [-180, 180], instead saw {value} at {location}"
            ),
            Self::LatitudeOutOfRange { value, location } => write!(
                f,
                "latitude must be in the range [-90, 90], instead saw {value} at {location}"
            ),
            Self::UnknownGeometry { found } => {
                write!(f, "expected a geometry type, instead saw \"{found}\"")
            }
            Self::NotAFeature { found } => {
                write!(f, "features must have type \"Feature\", instead saw \"{found}\"")
            }
            Self::NullGeometry => write!(f, "feature geometry cannot be null"),
            Self::ForbiddenMember { object, member } => {
                write!(f, "{object} cannot have a \"{member}\" member")
            }
            Self::RingTooShort { positions } => write!(
                f,
                "polygon ring must have at least 4 positions and the first and last position must be the same, instead saw [{}]",
                join(positions)
            ),
            Self::RingNotClosed { first, last } => write!(
                f,
                "first and last position of each polygon ring must be the same, instead saw first {first} and last {last}"
            ),
            Self::LineTooShort {
                positions,
                location,
            } => write!(
                f,
                "line string must contain at least 2 positions, instead saw {positions} at {location}"
            ),
            Self::EmptyPolygon { location } => {
                write!(f, "polygon must contain at least one ring at {location}")
            }
            Self::MultiplePointPositions { count } => write!(
                f,
                "point can only contain one position, instead saw {count}"
            ),
            Self::EmptyCoordinates { position } => {
                write!(f, "coordinates cannot be empty (at {position})")
            }
        }
    }
}

impl error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        let position = format!("line {} column {}", e.line(), e.column());
        Self::syntax_at(e.to_string(), position)
    }
}
