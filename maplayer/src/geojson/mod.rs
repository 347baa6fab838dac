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

//! GeoJSON front-end.
//!
//! The document is read into a JSON tree and walked top down. Feature
//! collections and features are unwrapped, geometry collections are resolved
//! recursively down to primitive geometries. Every object is checked against
//! the members its type must not carry, so a document mixing up features and
//! geometries is rejected instead of being guessed at.
//!
//! The JSON tree is read with the recursion limit of `serde_json`, which
//! allows 127 nested arrays and objects. Each geometry collection takes two
//! of these levels, so a document can wrap a point in up to 62 nested
//! geometry collections. Deeper documents are rejected with a syntax error
//! instead of exhausting the stack.

#[cfg(feature = "geojson")]
mod export;
mod parser;

pub use parser::{parse, parse_with};
