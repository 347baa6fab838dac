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

//! JavaScript bindings of the GeoJSON and KML front-ends.

use maplayer::{geojson, kml, Layer, ParseOptions};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // fails only if a logger is already set
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Reads the parse options from a JS object, or the defaults if absent.
fn parse_options(options: JsValue) -> Result<ParseOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(ParseOptions::default());
    }
    Ok(serde_wasm_bindgen::from_value(options)?)
}

#[wasm_bindgen(js_name = Layer)]
pub struct JsLayer {
    inner: Layer,
}

#[wasm_bindgen(js_class = Layer)]
impl JsLayer {
    /// Parses a GeoJSON text. The options may be left `undefined`.
    #[wasm_bindgen(js_name = fromGeoJson)]
    pub fn from_geojson(text: &str, options: JsValue) -> Result<JsLayer, JsValue> {
        let options = parse_options(options)?;
        let inner = geojson::parse_with(text, &maplayer::DefaultFactory, &options)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { inner })
    }

    /// Parses a KML text. The options may be left `undefined`.
    #[wasm_bindgen(js_name = fromKml)]
    pub fn from_kml(text: &str, options: JsValue) -> Result<JsLayer, JsValue> {
        let options = parse_options(options)?;
        let inner = kml::parse_with(text, &maplayer::DefaultFactory, &options)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(getter)]
    pub fn elements(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.inner.elements())?)
    }

    #[wasm_bindgen(js_name = setFillColor)]
    pub fn set_fill_color(&mut self, color: u32) {
        self.inner.set_fill_color(color);
    }

    #[wasm_bindgen(js_name = setStrokeColor)]
    pub fn set_stroke_color(&mut self, color: u32) {
        self.inner.set_stroke_color(color);
    }

    #[wasm_bindgen(js_name = setStrokeWidth)]
    pub fn set_stroke_width(&mut self, width: u32) {
        self.inner.set_stroke_width(width);
    }

    #[wasm_bindgen(js_name = setStrokeDashed)]
    pub fn set_stroke_dashed(&mut self, dashed: bool) {
        self.inner.set_stroke_dashed(dashed);
    }

    #[wasm_bindgen(js_name = setPolygonsVisible)]
    pub fn set_polygons_visible(&mut self, visible: bool) {
        self.inner.set_polygons_visible(visible);
    }

    #[wasm_bindgen(js_name = setPolylinesVisible)]
    pub fn set_polylines_visible(&mut self, visible: bool) {
        self.inner.set_polylines_visible(visible);
    }

    #[wasm_bindgen(js_name = setIconsVisible)]
    pub fn set_icons_visible(&mut self, visible: bool) {
        self.inner.set_icons_visible(visible);
    }

    /// Removes all polygons and returns them.
    #[wasm_bindgen(js_name = removePolygons)]
    pub fn remove_polygons(&mut self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.remove_polygons())?)
    }

    #[wasm_bindgen(js_name = removePolylines)]
    pub fn remove_polylines(&mut self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.remove_polylines())?)
    }

    #[wasm_bindgen(js_name = removeIcons)]
    pub fn remove_icons(&mut self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.remove_icons())?)
    }

    /// Exports the layer as GeoJSON feature collection text.
    #[wasm_bindgen(js_name = toGeoJson)]
    pub fn to_geojson(&self) -> String {
        self.inner.to_geojson().to_string()
    }

    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner)?)
    }
}

impl From<Layer> for JsLayer {
    fn from(value: Layer) -> Self {
        Self { inner: value }
    }
}

impl From<JsLayer> for Layer {
    fn from(value: JsLayer) -> Self {
        value.inner
    }
}
