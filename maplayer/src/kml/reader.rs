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

use quick_xml::events::Event;
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use crate::error::Error;

/// Start tag reduced to what the walk needs.
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct Tag {
    /// Local name without prefix.
    pub name: String,
    /// Namespace the tag is bound to.
    pub namespace: Option<Vec<u8>>,
    /// Value of the `id` attribute.
    pub id: Option<String>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) enum Token {
    Start(Tag),
    End(String),
    Text(String),
    Eof,
}

/// Pull reader over a KML document.
///
/// Comments, processing instructions and declarations are dropped. Text is
/// reported untrimmed, so whitespace around a dropped comment survives.
/// Empty elements are reported as start and end tag.
pub(crate) struct TokenReader<'a> {
    reader: NsReader<&'a [u8]>,
}

impl<'a> TokenReader<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut reader = NsReader::from_str(text);
        reader.config_mut().expand_empty_elements = true;
        Self { reader }
    }

    /// Describes the current position in the document.
    pub fn position(&self) -> String {
        format!("byte {}", self.reader.buffer_position())
    }

    pub fn syntax<M: Into<String>>(&self, message: M) -> Error {
        Error::syntax_at(message, self.position())
    }

    pub fn next(&mut self) -> Result<Token, Error> {
        loop {
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(e) => return Err(self.syntax(e.to_string())),
            };

            let token = match event {
                Event::Start(start) => {
                    let (resolved, local) = self.reader.resolve_element(start.name());
                    let namespace = match resolved {
                        ResolveResult::Bound(ns) => Some(ns.0.to_vec()),
                        ResolveResult::Unbound => None,
                        ResolveResult::Unknown(prefix) => {
                            return Err(self.syntax(format!(
                                "unknown namespace prefix \"{}\"",
                                String::from_utf8_lossy(&prefix)
                            )));
                        }
                    };
                    let name = String::from_utf8_lossy(local.as_ref()).into_owned();

                    let id = match start.try_get_attribute("id") {
                        Ok(Some(attr)) => match attr.unescape_value() {
                            Ok(value) => Some(value.into_owned()),
                            Err(e) => return Err(self.syntax(e.to_string())),
                        },
                        Ok(None) => None,
                        Err(e) => return Err(self.syntax(e.to_string())),
                    };

                    Token::Start(Tag {
                        name,
                        namespace,
                        id,
                    })
                }
                Event::End(end) => {
                    Token::End(String::from_utf8_lossy(end.local_name().as_ref()).into_owned())
                }
                Event::Text(text) => match text.unescape() {
                    Ok(text) => Token::Text(text.into_owned()),
                    Err(e) => return Err(self.syntax(e.to_string())),
                },
                Event::CData(data) => Token::Text(String::from_utf8_lossy(&data).into_owned()),
                Event::Eof => Token::Eof,
                _ => continue,
            };

            return Ok(token);
        }
    }
}
