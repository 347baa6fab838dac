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

use std::collections::HashMap;

use log::{debug, trace};

use super::reader::{Tag, Token, TokenReader};
use super::skip::Skipper;
use super::style::{parse_color, parse_flag, parse_width, Style};
use crate::error::Error;
use crate::factory::{DefaultFactory, ElementFactory};
use crate::model::{AltitudeReference, Element, Geometry, Layer, Path, Point, Position};
use crate::options::ParseOptions;
use crate::validate::{self, AltitudeInference};

/// Parses a KML document into a layer of default elements.
///
/// # Examples
///
/// ```
/// use maplayer::{kml, AltitudeReference};
///
/// # fn main() -> Result<(), maplayer::Error> {
/// let layer = kml::parse(
///     r#"<kml xmlns="http://www.opengis.net/kml/2.2">
///       <Placemark>
///         <name>city</name>
///         <Point><coordinates>-107.55,43,0</coordinates></Point>
///       </Placemark>
///     </kml>"#,
/// )?;
///
/// let icon = layer.icons().next().expect("layer should have an icon");
/// assert_eq!(icon.title(), Some("city"));
/// assert_eq!(icon.location().altitude_reference, AltitudeReference::Geoid);
/// #     Ok(())
/// # }
/// ```
pub fn parse(text: &str) -> Result<Layer, Error> {
    parse_with(text, &DefaultFactory, &ParseOptions::default())
}

/// Parses a KML document with the elements built by the `factory`.
pub fn parse_with<F>(text: &str, factory: &F, options: &ParseOptions) -> Result<Layer, Error>
where
    F: ElementFactory + ?Sized,
{
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut layer = factory.new_layer();
    let mut parser = Parser {
        reader: TokenReader::new(text),
        factory,
        options: *options,
        namespace: None,
        styles: HashMap::new(),
        pending: Vec::new(),
        warned: false,
    };

    parser.document(&mut layer)?;

    debug!(
        "parsed KML document with {} elements and {} styles",
        layer.len(),
        parser.styles.len()
    );
    Ok(layer)
}

/// Tag walk over a KML document.
///
/// Elements are appended as soon as their placemark is complete. Style
/// references are kept as (element index, style URL) and resolved once the
/// whole document was read.
struct Parser<'a, F: ?Sized> {
    reader: TokenReader<'a>,
    factory: &'a F,
    options: ParseOptions,
    /// Namespace of the document element. Tags of other namespaces are
    /// skipped.
    namespace: Option<Vec<u8>>,
    styles: HashMap<String, Style>,
    pending: Vec<(usize, String)>,
    warned: bool,
}

impl<'a, F> Parser<'a, F>
where
    F: ElementFactory + ?Sized,
{
    fn document(&mut self, layer: &mut Layer) -> Result<(), Error> {
        let root = match self.next_significant()? {
            Token::Start(tag) => tag,
            _ => return Err(self.reader.syntax("expected a start tag")),
        };
        self.namespace = root.namespace.clone();

        match root.name.as_str() {
            "Placemark" => self.placemark(layer)?,
            _ => self.containers(layer)?,
        }

        match self.next_significant()? {
            Token::Eof => {}
            _ => {
                return Err(self
                    .reader
                    .syntax(format!("unexpected content after </{}>", root.name)))
            }
        }

        self.resolve_styles(layer);
        Ok(())
    }

    /// Returns the next token that isn't whitespace between tags.
    fn next_significant(&mut self) -> Result<Token, Error> {
        loop {
            match self.reader.next()? {
                Token::Text(text) if text.trim().is_empty() => continue,
                token => return Ok(token),
            }
        }
    }

    /// Walks the children of the current tag until its end tag.
    ///
    /// Text between children is ignored. Children of a foreign namespace
    /// are skipped without being visited.
    fn children<V>(&mut self, mut visit: V) -> Result<(), Error>
    where
        V: FnMut(&mut Self, Tag) -> Result<(), Error>,
    {
        loop {
            match self.reader.next()? {
                Token::Start(tag) if tag.namespace != self.namespace => self.skip(tag)?,
                Token::Start(tag) => visit(self, tag)?,
                Token::Text(_) => {}
                Token::End(_) => return Ok(()),
                Token::Eof => return Err(self.reader.syntax("unexpected end of document")),
            }
        }
    }

    /// Walks nested `Document` and `Folder` containers below the current
    /// tag until its end tag.
    ///
    /// The nesting is tracked by a depth counter, so documents nested
    /// arbitrarily deep don't grow the stack.
    fn containers(&mut self, layer: &mut Layer) -> Result<(), Error> {
        let mut depth = 1usize;

        while depth > 0 {
            match self.reader.next()? {
                Token::Start(tag) if tag.namespace != self.namespace => self.skip(tag)?,
                Token::Start(tag) => match tag.name.as_str() {
                    "Document" | "Folder" => depth += 1,
                    "Placemark" => self.placemark(layer)?,
                    "Style" => self.style(tag)?,
                    _ => self.skip(tag)?,
                },
                Token::Text(_) => {}
                Token::End(_) => depth -= 1,
                Token::Eof => return Err(self.reader.syntax("unexpected end of document")),
            }
        }

        Ok(())
    }

    fn placemark(&mut self, layer: &mut Layer) -> Result<(), Error> {
        let mut title = None;
        let mut style_url = None;
        let mut geometry = None;

        self.children(|p, tag| {
            match tag.name.as_str() {
                "name" => {
                    let text = p.text_content(&tag.name)?;
                    title = (!text.is_empty()).then_some(text);
                }
                "styleUrl" => style_url = Some(p.text_content(&tag.name)?),
                "Point" | "LineString" | "Polygon" if geometry.is_some() => p.skip(tag)?,
                "Point" => geometry = Some(Geometry::Point(p.point()?)),
                "LineString" => geometry = Some(Geometry::LineString(p.line_string()?)),
                "Polygon" => geometry = Some(Geometry::Polygon(p.polygon()?)),
                _ => p.skip(tag)?,
            }
            Ok(())
        })?;

        // a title alone yields no element
        let Some(geometry) = geometry else {
            return Ok(());
        };

        let index = layer.len();
        geometry.append_to(self.factory, layer);

        if let Some(Element::Icon(icon)) = layer.get_mut(index) {
            icon.set_title(title);
        }
        if let Some(url) = style_url {
            self.pending.push((index, url));
        }

        Ok(())
    }

    fn point(&mut self) -> Result<Point, Error> {
        let mut inference = self.inference();
        let mut positions = self.coordinates_child("Point", &mut inference)?;

        if positions.len() > 1 {
            return Err(Error::MultiplePointPositions {
                count: positions.len(),
            });
        }

        match positions.pop() {
            Some(position) => Ok(inference.finish_point(position)),
            None => Err(Error::EmptyCoordinates {
                position: self.reader.position(),
            }),
        }
    }

    fn line_string(&mut self) -> Result<Path, Error> {
        let mut inference = self.inference();
        let positions = self.coordinates_child("LineString", &mut inference)?;
        validate::line(&positions, &self.reader.position())?;
        Ok(inference.finish(positions))
    }

    fn polygon(&mut self) -> Result<Vec<Path>, Error> {
        let mut outer = None;
        let mut inner = Vec::new();

        self.children(|p, tag| {
            match tag.name.as_str() {
                "outerBoundaryIs" if outer.is_none() => outer = Some(p.boundary(&tag.name)?),
                "innerBoundaryIs" => inner.push(p.boundary(&tag.name)?),
                _ => p.skip(tag)?,
            }
            Ok(())
        })?;

        match outer {
            Some(outer) => {
                let mut rings = Vec::with_capacity(inner.len() + 1);
                rings.push(outer);
                rings.append(&mut inner);
                Ok(rings)
            }
            None => Err(Error::EmptyPolygon {
                location: self.reader.position(),
            }),
        }
    }

    /// Reads the `LinearRing` of an outer or inner boundary.
    fn boundary(&mut self, name: &str) -> Result<Path, Error> {
        let mut ring = None;

        self.children(|p, tag| {
            if tag.name == "LinearRing" && ring.is_none() {
                ring = Some(p.linear_ring()?);
                Ok(())
            } else {
                p.skip(tag)
            }
        })?;

        ring.ok_or_else(|| {
            self.reader
                .syntax(format!("<{name}> must have a <LinearRing> child"))
        })
    }

    fn linear_ring(&mut self) -> Result<Path, Error> {
        let mut inference = self.inference();
        let positions = self.coordinates_child("LinearRing", &mut inference)?;
        // the ring must be closed with the altitudes as written
        validate::ring(&positions)?;
        Ok(inference.finish(positions))
    }

    /// Reads the positions of the `coordinates` child of a geometry tag.
    fn coordinates_child(
        &mut self,
        parent: &str,
        inference: &mut AltitudeInference,
    ) -> Result<Vec<Position>, Error> {
        let mut positions = None;

        self.children(|p, tag| {
            if tag.name == "coordinates" && positions.is_none() {
                let text = p.text_content(&tag.name)?;
                positions = Some(tuples(&text, &p.reader.position(), inference)?);
                Ok(())
            } else {
                p.skip(tag)
            }
        })?;

        let positions = positions.ok_or_else(|| {
            self.reader
                .syntax(format!("<{parent}> must have a <coordinates> child"))
        })?;

        if inference.is_mixed() {
            validate::warn_mixed_altitudes(&mut self.warned, self.options.altitude_policy);
        }

        Ok(positions)
    }

    fn style(&mut self, tag: Tag) -> Result<(), Error> {
        let mut style = Style::default();

        self.children(|p, tag| match tag.name.as_str() {
            "IconStyle" => p.icon_style(&mut style),
            "LineStyle" => p.line_style(&mut style),
            "PolyStyle" => p.poly_style(&mut style),
            _ => p.skip(tag),
        })?;

        match tag.id {
            Some(id) => {
                self.styles.insert(id, style);
            }
            None => trace!("dropping style without id"),
        }
        Ok(())
    }

    fn icon_style(&mut self, style: &mut Style) -> Result<(), Error> {
        self.children(|p, tag| match tag.name.as_str() {
            "Icon" => p.children(|p, tag| match tag.name.as_str() {
                "href" => {
                    let href = p.text_content(&tag.name)?;
                    style.icon_href = (!href.is_empty()).then_some(href);
                    Ok(())
                }
                _ => p.skip(tag),
            }),
            _ => p.skip(tag),
        })
    }

    fn line_style(&mut self, style: &mut Style) -> Result<(), Error> {
        self.children(|p, tag| {
            match tag.name.as_str() {
                "color" => style.line_color = Some(p.value(&tag.name, parse_color)?),
                "width" => style.line_width = Some(p.value(&tag.name, parse_width)?),
                _ => p.skip(tag)?,
            }
            Ok(())
        })
    }

    fn poly_style(&mut self, style: &mut Style) -> Result<(), Error> {
        self.children(|p, tag| {
            match tag.name.as_str() {
                "color" => style.poly_color = Some(p.value(&tag.name, parse_color)?),
                "fill" => style.fill = Some(p.value(&tag.name, parse_flag)?),
                "outline" => style.outline = Some(p.value(&tag.name, parse_flag)?),
                _ => p.skip(tag)?,
            }
            Ok(())
        })
    }

    /// Reads the text of a simple element and converts it with `convert`.
    fn value<T>(&mut self, name: &str, convert: fn(&str) -> Option<T>) -> Result<T, Error> {
        let text = self.text_content(name)?;
        convert(&text).ok_or_else(|| {
            self.reader
                .syntax(format!("invalid <{name}> value \"{text}\""))
        })
    }

    /// Collects the trimmed text of the current tag until its end tag.
    ///
    /// Comments inside the text are dropped, so `a<!-- -->b` reads as `ab`
    /// and `a <!-- --> b` as `a  b`.
    fn text_content(&mut self, name: &str) -> Result<String, Error> {
        let mut text = String::new();
        loop {
            match self.reader.next()? {
                Token::Text(chunk) => text.push_str(&chunk),
                Token::End(_) => return Ok(text.trim().to_string()),
                Token::Start(tag) => {
                    return Err(self
                        .reader
                        .syntax(format!("<{name}> cannot contain <{}>", tag.name)))
                }
                Token::Eof => return Err(self.reader.syntax("unexpected end of document")),
            }
        }
    }

    /// Discards the subtree opened by `tag`.
    fn skip(&mut self, tag: Tag) -> Result<(), Error> {
        trace!("skipping <{}> at {}", tag.name, self.reader.position());

        let mut skipper = Skipper::new()
            .feed(&Token::Start(tag))
            .map_err(|e| self.reader.syntax(e))?;

        while !skipper.is_done() {
            let token = self.reader.next()?;
            skipper = skipper.feed(&token).map_err(|e| self.reader.syntax(e))?;
        }

        Ok(())
    }

    fn inference(&self) -> AltitudeInference {
        AltitudeInference::new(self.options.altitude_policy, AltitudeReference::Geoid)
    }

    /// Applies the shared styles referenced by the placemarks.
    ///
    /// References to undeclared styles are ignored.
    fn resolve_styles(&mut self, layer: &mut Layer) {
        for (index, url) in self.pending.drain(..) {
            let id = url.rsplit_once('#').map_or(url.as_str(), |(_, id)| id);
            match (self.styles.get(id), layer.get_mut(index)) {
                (Some(style), Some(element)) => style.apply(element),
                _ => trace!("ignoring unknown style {url}"),
            }
        }
    }
}

/// Splits coordinate text into `longitude,latitude[,altitude]` tuples.
fn tuples(
    text: &str,
    location: &str,
    inference: &mut AltitudeInference,
) -> Result<Vec<Position>, Error> {
    if text.trim().is_empty() {
        return Err(Error::EmptyCoordinates {
            position: location.to_string(),
        });
    }

    let mut positions = Vec::new();
    for tuple in text.split_whitespace() {
        let components: Vec<&str> = tuple.split(',').collect();
        match components.len() {
            0 | 1 => {
                return Err(Error::MissingCoordinates {
                    found: tuple.to_string(),
                    location: location.to_string(),
                })
            }
            2 | 3 => {}
            _ => {
                return Err(Error::syntax_at(
                    format!("coordinate tuple can have at most 3 components, instead saw {tuple}"),
                    location,
                ))
            }
        }

        let number = |component: &str| {
            component.parse::<f64>().map_err(|_| {
                Error::syntax_at(
                    format!("expected a number, instead saw \"{component}\""),
                    location,
                )
            })
        };

        let longitude = number(components[0])?;
        let latitude = number(components[1])?;
        let altitude = components.get(2).copied().map(number).transpose()?;

        positions.push(validate::position(longitude, latitude, altitude, location)?);
        inference.observe(altitude.is_some());
    }

    Ok(positions)
}
