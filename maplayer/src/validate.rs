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

//! Rules shared by the GeoJSON and KML front-ends.

use std::ops::RangeInclusive;

use log::warn;
use serde_json::{Map, Value};

use crate::error::Error;
use crate::model::{AltitudeReference, Path, Point, Position};
use crate::options::AltitudePolicy;

pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Validates the components of a position found at `location`.
///
/// A missing altitude defaults to 0.
pub fn position(
    longitude: f64,
    latitude: f64,
    altitude: Option<f64>,
    location: &str,
) -> Result<Position, Error> {
    if let Some(value) = [Some(longitude), Some(latitude), altitude]
        .into_iter()
        .flatten()
        .find(|v| !v.is_finite())
    {
        return Err(Error::syntax_at(
            format!("coordinate must be a finite number, instead saw {value}"),
            location,
        ));
    }

    if !LONGITUDE_RANGE.contains(&longitude) {
        return Err(Error::LongitudeOutOfRange {
            value: longitude,
            location: location.to_string(),
        });
    }

    if !LATITUDE_RANGE.contains(&latitude) {
        return Err(Error::LatitudeOutOfRange {
            value: latitude,
            location: location.to_string(),
        });
    }

    Ok(position!(latitude, longitude, altitude.unwrap_or_default()))
}

/// Validates that the positions form a closed polygon ring.
pub fn ring(positions: &[Position]) -> Result<(), Error> {
    match (positions.first(), positions.last()) {
        _ if positions.len() < 4 => Err(Error::RingTooShort {
            positions: positions.to_vec(),
        }),
        (Some(first), Some(last)) if first != last => Err(Error::RingNotClosed {
            first: *first,
            last: *last,
        }),
        _ => Ok(()),
    }
}

/// Validates that the positions form a line of at least two positions.
pub fn line(positions: &[Position], location: &str) -> Result<(), Error> {
    if positions.len() < 2 {
        return Err(Error::LineTooShort {
            positions: positions.len(),
            location: location.to_string(),
        });
    }
    Ok(())
}

/// Rejects the `object` if it has any of the `forbidden` members.
pub fn no_members(object: &Map<String, Value>, forbidden: &[&'static str]) -> Result<(), Error> {
    match forbidden.iter().find(|&&member| object.contains_key(member)) {
        Some(&member) => Err(Error::ForbiddenMember {
            object: object
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("object")
                .to_string(),
            member,
        }),
        None => Ok(()),
    }
}

/// Infers the altitude reference of a path from its positions.
///
/// The front-ends feed whether each position carried an explicit altitude.
/// Paths that stay on the surface get all altitudes set to 0.
#[derive(Debug)]
pub struct AltitudeInference {
    policy: AltitudePolicy,
    elevated: AltitudeReference,
    any_explicit: bool,
    any_missing: bool,
}

impl AltitudeInference {
    /// Creates an inference promoting paths to the `elevated` reference.
    pub fn new(policy: AltitudePolicy, elevated: AltitudeReference) -> Self {
        Self {
            policy,
            elevated,
            any_explicit: false,
            any_missing: false,
        }
    }

    pub fn observe(&mut self, has_altitude: bool) {
        if has_altitude {
            self.any_explicit = true;
        } else {
            self.any_missing = true;
        }
    }

    /// Returns whether positions with and without altitude were observed.
    pub fn is_mixed(&self) -> bool {
        self.any_explicit && self.any_missing
    }

    pub fn reference(&self) -> AltitudeReference {
        let elevated = match self.policy {
            AltitudePolicy::AnyExplicit => self.any_explicit,
            AltitudePolicy::AllExplicit => self.any_explicit && !self.any_missing,
        };

        if elevated {
            self.elevated
        } else {
            AltitudeReference::Surface
        }
    }

    pub fn finish(self, mut positions: Vec<Position>) -> Path {
        let reference = self.reference();
        if reference == AltitudeReference::Surface {
            positions.iter_mut().for_each(|p| p.altitude = 0.0);
        }
        Path::new(positions, reference)
    }

    pub fn finish_point(self, mut position: Position) -> Point {
        let reference = self.reference();
        if reference == AltitudeReference::Surface {
            position.altitude = 0.0;
        }
        Point::new(position, reference)
    }
}

/// Logs once per parse that mixed altitudes are resolved by the policy.
pub(crate) fn warn_mixed_altitudes(warned: &mut bool, policy: AltitudePolicy) {
    if !*warned {
        warn!(
            "geometry mixes positions with and without altitude, resolved by {policy:?} policy"
        );
        *warned = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_inclusive_bounds() {
        assert!(position(180.0, -90.0, None, "/").is_ok());
        assert!(position(-180.0, 90.0, Some(12.0), "/").is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            position(180.0001, 0.0, None, "/"),
            Err(Error::LongitudeOutOfRange { value, .. }) if value == 180.0001
        ));
        assert!(matches!(
            position(0.0, -90.005, None, "/"),
            Err(Error::LatitudeOutOfRange { value, .. }) if value == -90.005
        ));
    }

    #[test]
    fn rejects_non_finite() {
        let e = position(0.0, 0.0, Some(f64::NAN), "byte 3").unwrap_err();
        assert_eq!(e.kind(), crate::ErrorKind::Syntax);
    }

    #[test]
    fn defaults_altitude_to_zero() {
        let p = position(30.0, 10.0, None, "/").unwrap();
        assert_eq!(p, position!(10.0, 30.0, 0.0));
    }

    #[test]
    fn accepts_closed_ring_of_four() {
        let ring_positions = [
            position!(0.0, 0.0),
            position!(0.0, 1.0),
            position!(1.0, 1.0),
            position!(0.0, 0.0),
        ];
        assert_eq!(ring(&ring_positions), Ok(()));
    }

    #[test]
    fn rejects_short_or_open_ring() {
        let short = [
            position!(0.0, 0.0),
            position!(0.0, 1.0),
            position!(0.0, 0.0),
        ];
        assert!(matches!(ring(&short), Err(Error::RingTooShort { .. })));
        assert!(matches!(ring(&[]), Err(Error::RingTooShort { .. })));

        let open = [
            position!(0.0, 0.0, 5.0),
            position!(0.0, 1.0),
            position!(1.0, 1.0),
            position!(0.0, 0.0),
        ];
        assert!(matches!(ring(&open), Err(Error::RingNotClosed { .. })));
    }

    #[test]
    fn rejects_forbidden_member() {
        let object = serde_json::json!({"type": "Polygon", "properties": {}});
        let e = no_members(object.as_object().unwrap(), &["geometry", "properties"]).unwrap_err();
        assert_eq!(e.to_string(), "Polygon cannot have a \"properties\" member");
    }

    #[test]
    fn promotes_once_with_any_explicit() {
        let mut inference =
            AltitudeInference::new(AltitudePolicy::AnyExplicit, AltitudeReference::Ellipsoid);
        inference.observe(true);
        inference.observe(false);

        assert!(inference.is_mixed());
        let path = inference.finish(vec![
            position!(10.0, 30.0, 3.0),
            position!(30.0, 10.0),
        ]);
        assert_eq!(path.altitude_reference(), AltitudeReference::Ellipsoid);
        assert_eq!(path.positions()[0].altitude, 3.0);
    }

    #[test]
    fn stays_on_surface_with_all_explicit() {
        let mut inference =
            AltitudeInference::new(AltitudePolicy::AllExplicit, AltitudeReference::Geoid);
        inference.observe(true);
        inference.observe(false);

        let path = inference.finish(vec![
            position!(10.0, 30.0, 3.0),
            position!(30.0, 10.0),
        ]);
        assert_eq!(path.altitude_reference(), AltitudeReference::Surface);
        assert_eq!(path.positions()[0].altitude, 0.0);
    }

    #[test]
    fn point_without_altitude_is_on_surface() {
        let mut inference =
            AltitudeInference::new(AltitudePolicy::AnyExplicit, AltitudeReference::Ellipsoid);
        inference.observe(false);
        let point = inference.finish_point(position!(10.0, 30.0));
        assert_eq!(point.altitude_reference, AltitudeReference::Surface);
    }
}
