// Copyright 2026 The html5oak Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::ErrorKind;
use crate::interface::Attribute;
use crate::tendril::StrTendril;
use crate::tokenizer::states;

pub use self::TagKind::{EndTag, StartTag};

/// A `DOCTYPE` token.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Doctype {
    pub name: Option<StrTendril>,
    pub public_id: Option<StrTendril>,
    pub system_id: Option<StrTendril>,
    pub force_quirks: bool,
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum TagKind {
    StartTag,
    EndTag,
}

/// A tag token.
///
/// End tags carry their attributes too; the tokenizer has already flagged
/// them with *end-tag-with-attributes* and the tree builder ignores them.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Tag {
    pub kind: TagKind,
    pub name: StrTendril,
    pub self_closing: bool,
    pub attrs: Vec<Attribute>,
}

impl Tag {
    /// Are the tags equivalent when we don't care about attribute order?
    /// Also ignores the self-closing flag. This is the comparison the
    /// Noah's Ark clause needs.
    pub fn equiv_modulo_attr_order(&self, other: &Tag) -> bool {
        if (self.kind != other.kind) || (self.name != other.name) {
            return false;
        }

        let mut self_attrs = self.attrs.clone();
        let mut other_attrs = other.attrs.clone();
        self_attrs.sort();
        other_attrs.sort();

        self_attrs == other_attrs
    }

    pub(crate) fn get_attribute(&self, name: &str) -> Option<&StrTendril> {
        self.attrs
            .iter()
            .find(|attr| attr.name.ns.is_none() && &*attr.name.local == name)
            .map(|attr| &attr.value)
    }
}

/// A token emitted by the tokenizer.
///
/// Character tokens carry exactly one scalar value; a run of text arrives
/// as a sequence of them. Parse errors travel in the token stream so their
/// position relative to tokens is preserved.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Token {
    Doctype(Doctype),
    Tag(Tag),
    Comment(StrTendril),
    Character(char),
    Eof,
    ParseError(ErrorKind),
}

/// What the sink wants the tokenizer to do after a token, beyond carrying
/// on. The tree builder uses this to put the machine into the raw-text
/// family of states for elements like `<title>` and `<script>`.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub enum TokenSinkResult {
    Continue,
    Plaintext,
    RawData(states::RawKind),
}

/// Types which can receive tokens from the tokenizer.
pub trait TokenSink {
    /// Process a token. `offset` is the scalar-value position in the input
    /// at which the token was completed.
    fn process_token(&mut self, token: Token, offset: usize) -> TokenSinkResult;

    /// Signal that tokenization reached the end of the input.
    fn end(&mut self) {}

    /// Used in the markup declaration open state to decide whether
    /// `<![CDATA[` opens a real CDATA section. By default it never does,
    /// and CDATA is tokenized as a bogus comment.
    fn adjusted_current_node_present_but_not_in_html_namespace(&self) -> bool {
        false
    }
}
