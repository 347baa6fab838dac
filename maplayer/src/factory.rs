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

use crate::model::{Icon, Layer, Polygon, Polyline};

/// Constructs the elements a parser appends to its layer.
///
/// Every call returns a fresh element with default contents. Parsers never
/// create elements on their own, so an implementation can observe or
/// decorate all constructions.
pub trait ElementFactory {
    fn new_layer(&self) -> Layer;

    fn new_icon(&self) -> Icon;

    fn new_polyline(&self) -> Polyline;

    fn new_polygon(&self) -> Polygon;
}

/// Factory creating default elements.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct DefaultFactory;

impl ElementFactory for DefaultFactory {
    fn new_layer(&self) -> Layer {
        Layer::default()
    }

    fn new_icon(&self) -> Icon {
        Icon::default()
    }

    fn new_polyline(&self) -> Polyline {
        Polyline::default()
    }

    fn new_polygon(&self) -> Polygon {
        Polygon::default()
    }
}
