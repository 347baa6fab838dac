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

use crate::model::{Element, Stroke, TRANSPARENT};

/// Shared style declared by a `<Style id="...">` element.
///
/// Only the attributes the layer elements carry are kept. Unset attributes
/// leave the element untouched.
#[derive(Clone, PartialEq, Debug, Default)]
pub(crate) struct Style {
    pub icon_href: Option<String>,
    pub line_color: Option<u32>,
    pub line_width: Option<u32>,
    pub poly_color: Option<u32>,
    pub fill: Option<bool>,
    pub outline: Option<bool>,
}

impl Style {
    pub fn apply(&self, element: &mut Element) {
        match element {
            Element::Icon(icon) => {
                if let Some(href) = &self.icon_href {
                    icon.set_image(Some(href.clone()));
                }
            }
            Element::Polyline(line) => self.apply_line(line.stroke_mut()),
            Element::Polygon(polygon) => {
                self.apply_line(polygon.stroke_mut());
                if let Some(color) = self.poly_color {
                    polygon.set_fill_color(color);
                }
                if self.fill == Some(false) {
                    polygon.set_fill_color(TRANSPARENT);
                }
                if self.outline == Some(false) {
                    polygon.stroke_mut().color = TRANSPARENT;
                }
            }
        }
    }

    fn apply_line(&self, stroke: &mut Stroke) {
        if let Some(color) = self.line_color {
            stroke.color = color;
        }
        if let Some(width) = self.line_width {
            stroke.width = width;
        }
    }
}

/// Converts a KML `aabbggrr` color into ARGB.
pub(crate) fn parse_color(text: &str) -> Option<u32> {
    let hex = text.strip_prefix('#').unwrap_or(text);
    if hex.len() != 8 {
        return None;
    }

    let abgr = u32::from_str_radix(hex, 16).ok()?;
    let alpha = abgr & 0xff000000;
    let blue = (abgr >> 16) & 0xff;
    let green = abgr & 0x0000ff00;
    let red = abgr & 0xff;

    Some(alpha | red << 16 | green | blue)
}

/// Reads a KML boolean, which is either `0`/`1` or `false`/`true`.
pub(crate) fn parse_flag(text: &str) -> Option<bool> {
    match text {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

/// Reads a line width in pixels, rounded to whole pixels.
pub(crate) fn parse_width(text: &str) -> Option<u32> {
    let width: f64 = text.parse().ok()?;
    if !width.is_finite() || width < 0.0 || width > u32::MAX as f64 {
        return None;
    }
    Some(width.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Icon, Polygon, Polyline, DEFAULT_COLOR};

    #[test]
    fn converts_abgr_to_argb() {
        assert_eq!(parse_color("ff0000ff"), Some(0xffff0000));
        assert_eq!(parse_color("7f00ff00"), Some(0x7f00ff00));
        assert_eq!(parse_color("#80ff0000"), Some(0x800000ff));
        assert_eq!(parse_color("ff00ff"), None);
        assert_eq!(parse_color("zz0000ff"), None);
    }

    #[test]
    fn reads_flags_and_widths() {
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("yes"), None);

        assert_eq!(parse_width("2.6"), Some(3));
        assert_eq!(parse_width("-1"), None);
        assert_eq!(parse_width("wide"), None);
    }

    #[test]
    fn applies_to_matching_element_kind() {
        let style = Style {
            icon_href: Some("pin.png".to_string()),
            line_color: Some(0xffff0000),
            line_width: Some(4),
            poly_color: Some(0x8000ff00),
            ..Style::default()
        };

        let mut icon = Element::Icon(Icon::default());
        style.apply(&mut icon);
        assert_eq!(icon.as_icon().and_then(Icon::image), Some("pin.png"));

        let mut line = Element::Polyline(Polyline::default());
        style.apply(&mut line);
        let stroke = line.as_polyline().unwrap().stroke();
        assert_eq!((stroke.color, stroke.width), (0xffff0000, 4));

        let mut polygon = Element::Polygon(Polygon::default());
        style.apply(&mut polygon);
        assert_eq!(polygon.as_polygon().unwrap().fill_color(), 0x8000ff00);
    }

    #[test]
    fn hides_disabled_fill_and_outline() {
        let style = Style {
            fill: Some(false),
            outline: Some(false),
            ..Style::default()
        };

        let mut polygon = Element::Polygon(Polygon::default());
        style.apply(&mut polygon);

        let polygon = polygon.as_polygon().unwrap();
        assert_eq!(polygon.fill_color(), TRANSPARENT);
        assert_eq!(polygon.stroke().color, TRANSPARENT);
        assert_ne!(polygon.stroke().color, DEFAULT_COLOR);
    }
}
