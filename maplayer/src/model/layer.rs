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

use super::{Element, Stroke, DEFAULT_COLOR};

/// Ordered collection of map elements in document order.
///
/// Besides the elements, the layer carries the style applied to all of them.
/// A style setter only touches the elements when the value differs from the
/// layer's current one, so elements styled individually (e.g. by a KML
/// `<Style>`) keep their style until the layer's style changes.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layer {
    elements: Vec<Element>,
    fill_color: u32,
    stroke: Stroke,
    polygons_visible: bool,
    polylines_visible: bool,
    icons_visible: bool,
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            fill_color: DEFAULT_COLOR,
            stroke: Stroke::default(),
            polygons_visible: true,
            polylines_visible: true,
            icons_visible: true,
        }
    }
}

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.elements.get_mut(index)
    }

    pub fn push<E: Into<Element>>(&mut self, element: E) {
        self.elements.push(element.into());
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn icons(&self) -> impl Iterator<Item = &super::Icon> {
        self.elements.iter().filter_map(Element::as_icon)
    }

    pub fn polylines(&self) -> impl Iterator<Item = &super::Polyline> {
        self.elements.iter().filter_map(Element::as_polyline)
    }

    pub fn polygons(&self) -> impl Iterator<Item = &super::Polygon> {
        self.elements.iter().filter_map(Element::as_polygon)
    }

    /// Sets the ARGB fill color of all polygons.
    pub fn set_fill_color(&mut self, color: u32) {
        if self.fill_color == color {
            return;
        }

        self.fill_color = color;
        for element in &mut self.elements {
            if let Element::Polygon(polygon) = element {
                polygon.set_fill_color(color);
            }
        }
    }

    /// Sets the ARGB color of polylines and polygon outlines.
    pub fn set_stroke_color(&mut self, color: u32) {
        if self.stroke.color == color {
            return;
        }

        self.stroke.color = color;
        self.for_each_stroke(|stroke| stroke.color = color);
    }

    /// Sets whether polylines and polygon outlines are dashed.
    pub fn set_stroke_dashed(&mut self, dashed: bool) {
        if self.stroke.dashed == dashed {
            return;
        }

        self.stroke.dashed = dashed;
        self.for_each_stroke(|stroke| stroke.dashed = dashed);
    }

    /// Sets the width of polylines and polygon outlines.
    pub fn set_stroke_width(&mut self, width: u32) {
        if self.stroke.width == width {
            return;
        }

        self.stroke.width = width;
        self.for_each_stroke(|stroke| stroke.width = width);
    }

    pub fn set_polygons_visible(&mut self, visible: bool) {
        if self.polygons_visible == visible {
            return;
        }

        self.polygons_visible = visible;
        for element in &mut self.elements {
            if let Element::Polygon(polygon) = element {
                polygon.set_visible(visible);
            }
        }
    }

    pub fn set_polylines_visible(&mut self, visible: bool) {
        if self.polylines_visible == visible {
            return;
        }

        self.polylines_visible = visible;
        for element in &mut self.elements {
            if let Element::Polyline(line) = element {
                line.set_visible(visible);
            }
        }
    }

    pub fn set_icons_visible(&mut self, visible: bool) {
        if self.icons_visible == visible {
            return;
        }

        self.icons_visible = visible;
        for element in &mut self.elements {
            if let Element::Icon(icon) = element {
                icon.set_visible(visible);
            }
        }
    }

    /// Removes all polygons and returns them in document order.
    pub fn remove_polygons(&mut self) -> Vec<Element> {
        self.remove_where(|e| matches!(e, Element::Polygon(_)))
    }

    /// Removes all polylines and returns them in document order.
    pub fn remove_polylines(&mut self) -> Vec<Element> {
        self.remove_where(|e| matches!(e, Element::Polyline(_)))
    }

    /// Removes all icons and returns them in document order.
    pub fn remove_icons(&mut self) -> Vec<Element> {
        self.remove_where(|e| matches!(e, Element::Icon(_)))
    }

    fn for_each_stroke<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Stroke),
    {
        for element in &mut self.elements {
            match element {
                Element::Polyline(line) => f(line.stroke_mut()),
                Element::Polygon(polygon) => f(polygon.stroke_mut()),
                Element::Icon(_) => {}
            }
        }
    }

    fn remove_where<P>(&mut self, predicate: P) -> Vec<Element>
    where
        P: Fn(&Element) -> bool,
    {
        let (removed, kept): (Vec<_>, Vec<_>) =
            self.elements.drain(..).partition(|e| predicate(e));
        self.elements = kept;
        removed
    }
}

impl<'a> IntoIterator for &'a Layer {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Icon, Polygon, Polyline};

    fn mixed_layer() -> Layer {
        let mut layer = Layer::new();
        layer.push(Icon::default());
        layer.push(Polygon::default());
        layer.push(Polyline::default());
        layer.push(Polygon::default());
        layer
    }

    #[test]
    fn recolors_polygons_only() {
        let mut layer = mixed_layer();
        layer.set_fill_color(0xffff0000);

        assert!(layer.polygons().all(|p| p.fill_color() == 0xffff0000));
        assert_eq!(layer.polygons().count(), 2);
    }

    #[test]
    fn strokes_lines_and_polygons() {
        let mut layer = mixed_layer();
        layer.set_stroke_color(0xff00ff00);
        layer.set_stroke_width(3);
        layer.set_stroke_dashed(true);

        for line in layer.polylines() {
            assert_eq!(
                line.stroke(),
                &Stroke {
                    color: 0xff00ff00,
                    width: 3,
                    dashed: true
                }
            );
        }
        assert!(layer.polygons().all(|p| p.stroke().width == 3));
    }

    #[test]
    fn unchanged_style_keeps_element_style() {
        let mut layer = Layer::new();
        let mut polygon = Polygon::default();
        polygon.set_fill_color(0xff123456);
        layer.push(polygon);

        // same as the layer default
        layer.set_fill_color(DEFAULT_COLOR);
        assert_eq!(layer.polygons().next().unwrap().fill_color(), 0xff123456);
    }

    #[test]
    fn toggles_visibility_by_kind() {
        let mut layer = mixed_layer();
        layer.set_polygons_visible(false);

        let visible: Vec<_> = layer.elements().iter().map(Element::is_visible).collect();
        assert_eq!(visible, vec![true, false, true, false]);

        layer.set_icons_visible(false);
        layer.set_polylines_visible(false);
        assert!(layer.elements().iter().all(|e| !e.is_visible()));
    }

    #[test]
    fn removes_by_kind_in_order() {
        let mut layer = mixed_layer();
        let removed = layer.remove_polygons();

        assert_eq!(removed.len(), 2);
        assert_eq!(layer.len(), 2);
        assert!(layer.get(0).unwrap().as_icon().is_some());
        assert!(layer.get(1).unwrap().as_polyline().is_some());

        assert_eq!(layer.remove_icons().len(), 1);
        assert_eq!(layer.remove_polylines().len(), 1);
        assert!(layer.is_empty());
    }
}
