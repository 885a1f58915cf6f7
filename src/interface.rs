// Copyright 2026 The html5oak Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Names, attributes, and the quirks-mode flag shared by the tokenizer
//! and the tree builder.

use crate::tendril::StrTendril;

/// The namespaces that can appear on a parsed name.
///
/// Elements are always in [`Html`], [`MathMl`], or [`Svg`]. The remaining
/// variants occur only on attributes adjusted inside foreign content.
///
/// [`Html`]: Namespace::Html
/// [`MathMl`]: Namespace::MathMl
/// [`Svg`]: Namespace::Svg
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Debug)]
pub enum Namespace {
    Html,
    MathMl,
    Svg,
    XLink,
    Xml,
    XmlNs,
}

impl Namespace {
    /// The namespace URL, as it would appear in a DOM.
    pub fn url(self) -> &'static str {
        match self {
            Namespace::Html => "http://www.w3.org/1999/xhtml",
            Namespace::MathMl => "http://www.w3.org/1998/Math/MathML",
            Namespace::Svg => "http://www.w3.org/2000/svg",
            Namespace::XLink => "http://www.w3.org/1999/xlink",
            Namespace::Xml => "http://www.w3.org/XML/1998/namespace",
            Namespace::XmlNs => "http://www.w3.org/2000/xmlns/",
        }
    }
}

/// A qualified name: an optional prefix, an optional namespace, and a
/// local name.
///
/// The tokenizer creates every attribute with no prefix and no namespace;
/// the tree builder fills these in for the handful of attributes the
/// "adjust foreign attributes" table names (`xlink:href` and friends).
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug)]
pub struct QualName {
    pub prefix: Option<&'static str>,
    pub ns: Option<Namespace>,
    pub local: StrTendril,
}

impl QualName {
    /// A name with no prefix and no namespace, as the tokenizer makes them.
    pub fn plain(local: StrTendril) -> QualName {
        QualName {
            prefix: None,
            ns: None,
            local,
        }
    }
}

/// A single element attribute: name and value, in source order.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Debug)]
pub struct Attribute {
    pub name: QualName,
    pub value: StrTendril,
}

/// The document's quirks mode, determined by the DOCTYPE token.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Debug)]
pub enum QuirksMode {
    Quirks,
    LimitedQuirks,
    NoQuirks,
}
