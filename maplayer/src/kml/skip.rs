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

use super::reader::Token;

/// Automaton discarding a subtree of unknown content.
///
/// It is fed the start tag of the subtree and then every following token.
/// The depth counts the open tags of the subtree and the automaton is done
/// once the start tag is closed again.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Skipper {
    Seeking,
    InSubtree(usize),
    Done,
}

impl Skipper {
    pub fn new() -> Self {
        Self::Seeking
    }

    pub fn is_done(&self) -> bool {
        *self == Self::Done
    }

    pub fn feed(self, token: &Token) -> Result<Self, &'static str> {
        match (self, token) {
            (Self::Seeking, Token::Start(_)) => Ok(Self::InSubtree(1)),
            (Self::Seeking, _) => Err("expected a start tag to skip"),
            (Self::InSubtree(depth), Token::Start(_)) => Ok(Self::InSubtree(depth + 1)),
            (Self::InSubtree(1), Token::End(_)) => Ok(Self::Done),
            (Self::InSubtree(depth), Token::End(_)) => Ok(Self::InSubtree(depth - 1)),
            (Self::InSubtree(_), Token::Eof) => Err("unexpected end of document"),
            (Self::InSubtree(depth), Token::Text(_)) => Ok(Self::InSubtree(depth)),
            (Self::Done, _) => Err("subtree was already skipped"),
        }
    }
}
