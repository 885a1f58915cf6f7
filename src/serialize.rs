// Copyright 2026 The html5oak Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Serialization back to markup, per the HTML fragment serialization
//! algorithm.

use crate::dom::{Document, NodeData, NodeId};
use crate::interface::Namespace;

/// Elements with no end tag and no children.
fn is_void(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "basefont"
            | "bgsound"
            | "br"
            | "col"
            | "embed"
            | "frame"
            | "hr"
            | "img"
            | "input"
            | "keygen"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Elements whose text children are emitted without escaping.
fn serializes_raw_text(name: &str) -> bool {
    matches!(
        name,
        "style" | "script" | "xmp" | "iframe" | "noembed" | "noframes" | "plaintext"
    )
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

/// Serialize the document back to HTML text.
pub fn to_html(doc: &Document) -> String {
    let mut out = String::new();
    for &child in doc.children(NodeId::DOCUMENT) {
        serialize_node(doc, child, &mut out);
    }
    out
}

fn serialize_node(doc: &Document, id: NodeId, out: &mut String) {
    match doc.data(id) {
        NodeData::Document => {
            for &child in doc.children(id) {
                serialize_node(doc, child, out);
            }
        },

        NodeData::Doctype { name, .. } => {
            out.push_str("<!DOCTYPE ");
            out.push_str(name);
            out.push('>');
        },

        NodeData::Comment { contents } => {
            out.push_str("<!--");
            out.push_str(contents);
            out.push_str("-->");
        },

        NodeData::Text { contents } => {
            let raw = doc
                .parent(id)
                .and_then(|p| doc.elem_name(p))
                .map_or(false, |(ns, name)| {
                    ns == Namespace::Html && serializes_raw_text(name)
                });
            if raw {
                out.push_str(contents);
            } else {
                escape_text(contents, out);
            }
        },

        NodeData::Element { ns, name, attrs } => {
            out.push('<');
            out.push_str(name);
            for attr in attrs {
                out.push(' ');
                if let Some(prefix) = attr.name.prefix {
                    out.push_str(prefix);
                    out.push(':');
                }
                out.push_str(&attr.name.local);
                out.push_str("=\"");
                escape_attr(&attr.value, out);
                out.push('"');
            }
            out.push('>');

            if *ns == Namespace::Html && is_void(name) {
                return;
            }

            // Reparsing swallows a newline right after these start tags, so
            // emit a protective one when the content starts with a newline.
            if *ns == Namespace::Html && matches!(&**name, "pre" | "textarea" | "listing") {
                if let Some(&first) = doc.children(id).first() {
                    if let NodeData::Text { contents } = doc.data(first) {
                        if contents.starts_with('\n') {
                            out.push('\n');
                        }
                    }
                }
            }

            for &child in doc.children(id) {
                serialize_node(doc, child, out);
            }

            out.push_str("</");
            out.push_str(name);
            out.push('>');
        },
    }
}

#[cfg(test)]
mod test {
    use super::to_html;
    use crate::dom::{Document, NodeId};
    use crate::interface::{Attribute, Namespace, QualName};
    use crate::tendril::StrTendril;

    #[test]
    fn escapes_text_and_attributes() {
        let mut doc = Document::new();
        let a = doc.create_element(
            Namespace::Html,
            StrTendril::from("a"),
            vec![Attribute {
                name: QualName::plain(StrTendril::from("title")),
                value: StrTendril::from("a \"quote\" & more"),
            }],
        );
        doc.append(NodeId::DOCUMENT, a);
        for c in "1 < 2 & 3".chars() {
            doc.append_text(a, c);
        }
        assert_eq!(
            to_html(&doc),
            "<a title=\"a &quot;quote&quot; &amp; more\">1 &lt; 2 &amp; 3</a>"
        );
    }

    #[test]
    fn void_elements_have_no_end_tag() {
        let mut doc = Document::new();
        let br = doc.create_element(Namespace::Html, StrTendril::from("br"), vec![]);
        doc.append(NodeId::DOCUMENT, br);
        assert_eq!(to_html(&doc), "<br>");
    }

    #[test]
    fn raw_text_children_are_not_escaped() {
        let mut doc = Document::new();
        let script = doc.create_element(Namespace::Html, StrTendril::from("script"), vec![]);
        doc.append(NodeId::DOCUMENT, script);
        for c in "if (a < b) {}".chars() {
            doc.append_text(script, c);
        }
        assert_eq!(to_html(&doc), "<script>if (a < b) {}</script>");
    }

    #[test]
    fn pre_leading_newline_is_doubled() {
        let mut doc = Document::new();
        let pre = doc.create_element(Namespace::Html, StrTendril::from("pre"), vec![]);
        doc.append(NodeId::DOCUMENT, pre);
        for c in "\nfoo".chars() {
            doc.append_text(pre, c);
        }
        assert_eq!(to_html(&doc), "<pre>\n\nfoo</pre>");
    }
}
