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

/// Rule deciding when a path leaves the surface.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AltitudePolicy {
    /// A single position with an explicit altitude promotes the whole path.
    /// The promotion is never undone by later positions without altitude.
    #[default]
    AnyExplicit,
    /// Every position of the path must carry an altitude.
    AllExplicit,
}

/// Options of the GeoJSON and KML front-ends.
///
/// ```
/// use maplayer::{AltitudePolicy, ParseOptions};
///
/// let options = ParseOptions::new().with_altitude_policy(AltitudePolicy::AllExplicit);
/// assert_eq!(options.altitude_policy, AltitudePolicy::AllExplicit);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ParseOptions {
    pub altitude_policy: AltitudePolicy,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_altitude_policy(mut self, altitude_policy: AltitudePolicy) -> Self {
        self.altitude_policy = altitude_policy;
        self
    }
}
