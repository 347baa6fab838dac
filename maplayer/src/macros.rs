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

/// Creates a [`Position`] from latitude, longitude and an optional altitude.
///
/// ```
/// use maplayer::position;
///
/// let p = position!(10.0, 30.0);
/// assert_eq!(p.longitude, 30.0);
/// assert_eq!(position!(10.0, 30.0, 5.0).altitude, 5.0);
/// ```
///
/// [`Position`]: crate::Position
#[macro_export]
macro_rules! position {
    ($latitude:expr, $longitude:expr) => {
        $crate::Position::new($latitude, $longitude)
    };
    ($latitude:expr, $longitude:expr, $altitude:expr) => {
        $crate::Position::with_altitude($latitude, $longitude, $altitude)
    };
}
