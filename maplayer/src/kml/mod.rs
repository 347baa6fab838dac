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

//! KML front-end.
//!
//! The document is walked tag by tag without building a tree. `Document`
//! and `Folder` containers are descended into and every `Placemark` yields
//! at most one element from its `Point`, `LineString` or `Polygon`. Shared
//! `Style` declarations are collected along the way and applied to the
//! placemarks referencing them once the walk is complete. Any other tag is
//! skipped with its whole subtree.

mod parser;
mod reader;
mod skip;
mod style;

pub use parser::{parse, parse_with};
