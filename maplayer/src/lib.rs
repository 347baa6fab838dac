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

//! Map layers from GeoJSON and KML documents.
//!
//! This crate turns a GeoJSON or KML text into a [`Layer`] of [icons],
//! [polylines] and [polygons]. Both front-ends validate every coordinate and
//! polygon ring and stop at the first violation, so a layer is either built
//! completely or not at all. The [`ElementFactory`] decides how elements are
//! constructed.
//!
//! # Examples
//!
//! Parse a feature collection and look at its icons:
//!
//! ```
//! use maplayer::geojson;
//!
//! # fn main() -> Result<(), maplayer::Error> {
//! let layer = geojson::parse(
//!     r#"{
//!       "type": "FeatureCollection",
//!       "features": [
//!         {"type": "Feature", "geometry": {"type": "Point", "coordinates": [30, 10]}},
//!         {"type": "Feature", "geometry": {"type": "Point", "coordinates": [40, 20, 150]}}
//!       ]
//!     }"#,
//! )?;
//!
//! for icon in layer.icons() {
//!     let point = icon.location();
//!     println!("{} ({:?})", point.position, point.altitude_reference);
//! }
//! # assert_eq!(layer.len(), 2);
//! #     Ok(())
//! # }
//! ```
//!
//! A KML placemark is read the same way:
//!
//! ```
//! use maplayer::kml;
//!
//! # fn main() -> Result<(), maplayer::Error> {
//! let layer = kml::parse(
//!     "<Placemark><name>city</name><Point><coordinates>-107.55,43</coordinates></Point></Placemark>",
//! )?;
//! assert_eq!(layer.icons().next().and_then(|icon| icon.title()), Some("city"));
//! #     Ok(())
//! # }
//! ```
//!
//! [icons]: crate::Icon
//! [polylines]: crate::Polyline
//! [polygons]: crate::Polygon

#[macro_use]
mod macros;

mod error;
mod factory;
mod options;

pub mod geojson;
pub mod kml;
pub mod model;
pub mod validate;

pub use error::{Error, ErrorKind};
pub use factory::{DefaultFactory, ElementFactory};
pub use model::*;
pub use options::{AltitudePolicy, ParseOptions};
