// Copyright 2026 The html5oak Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The arena DOM.
//!
//! Nodes live in a single `Vec` owned by the [`Document`], identified by
//! [`NodeId`]s handed out at creation and never reused. Node 0 is the
//! Document itself. Nodes are never freed; the adoption agency algorithm
//! re-parents them but the slot stays put, so every id handed out stays
//! valid for the life of the document.

use crate::interface::{Attribute, Namespace, QuirksMode};
use crate::tendril::StrTendril;

/// A stable identifier for a node in a [`Document`].
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    /// The Document node itself.
    pub const DOCUMENT: NodeId = NodeId(0);
}

/// The data carried by one node.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum NodeData {
    Document,
    Doctype {
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    },
    Element {
        ns: Namespace,
        name: StrTendril,
        attrs: Vec<Attribute>,
    },
    Text {
        contents: StrTendril,
    },
    Comment {
        contents: StrTendril,
    },
}

/// One arena slot.
#[derive(Clone, Debug)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub data: NodeData,
}

/// A parsed document: the node arena plus the quirks mode the parser
/// settled on.
pub struct Document {
    nodes: Vec<Node>,
    pub quirks_mode: QuirksMode,
}

impl Default for Document {
    fn default() -> Document {
        Document::new()
    }
}

impl Document {
    pub fn new() -> Document {
        Document {
            nodes: vec![Node {
                parent: None,
                children: vec![],
                data: NodeData::Document,
            }],
            quirks_mode: QuirksMode::NoQuirks,
        }
    }

    fn new_node(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: vec![],
            data,
        });
        id
    }

    pub fn create_element(
        &mut self,
        ns: Namespace,
        name: StrTendril,
        attrs: Vec<Attribute>,
    ) -> NodeId {
        self.new_node(NodeData::Element { ns, name, attrs })
    }

    pub fn create_comment(&mut self, contents: StrTendril) -> NodeId {
        self.new_node(NodeData::Comment { contents })
    }

    pub fn create_text(&mut self, contents: StrTendril) -> NodeId {
        self.new_node(NodeData::Text { contents })
    }

    pub fn create_doctype(
        &mut self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    ) -> NodeId {
        self.new_node(NodeData::Doctype {
            name,
            public_id,
            system_id,
        })
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0].data
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// The element's namespace and local name; None for non-elements.
    pub fn elem_name(&self, id: NodeId) -> Option<(Namespace, &str)> {
        match self.nodes[id.0].data {
            NodeData::Element { ns, ref name, .. } => Some((ns, name)),
            _ => None,
        }
    }

    pub fn attrs(&self, id: NodeId) -> &[Attribute] {
        match self.nodes[id.0].data {
            NodeData::Element { ref attrs, .. } => attrs,
            _ => &[],
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&StrTendril> {
        self.attrs(id)
            .iter()
            .find(|attr| attr.name.ns.is_none() && &*attr.name.local == name)
            .map(|attr| &attr.value)
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// old parent first if it has one.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        self.remove_from_parent(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Insert `child` immediately before `sibling` under the sibling's
    /// parent.
    pub fn insert_before(&mut self, sibling: NodeId, child: NodeId) {
        self.remove_from_parent(child);
        let parent = self.nodes[sibling.0]
            .parent
            .expect("insert_before target has no parent");
        let index = self.nodes[parent.0]
            .children
            .iter()
            .position(|&c| c == sibling)
            .expect("sibling not found in parent's child list");
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(index, child);
    }

    pub fn remove_from_parent(&mut self, child: NodeId) {
        let Some(parent) = self.nodes[child.0].parent.take() else {
            return;
        };
        self.nodes[parent.0].children.retain(|&c| c != child);
    }

    /// Move all children of `from` to the end of `to`, preserving order.
    pub fn reparent_children(&mut self, from: NodeId, to: NodeId) {
        let children = std::mem::take(&mut self.nodes[from.0].children);
        for &child in &children {
            self.nodes[child.0].parent = Some(to);
        }
        self.nodes[to.0].children.extend(children);
    }

    /// Append one character of text at the end of `parent`, merging with a
    /// trailing Text child so text nodes never end up adjacent.
    pub fn append_text(&mut self, parent: NodeId, c: char) {
        if let Some(&last) = self.nodes[parent.0].children.last() {
            if let NodeData::Text { ref mut contents } = self.nodes[last.0].data {
                contents.push_char(c);
                return;
            }
        }
        let text = self.create_text(StrTendril::from_char(c));
        self.append(parent, text);
    }

    /// Insert one character of text immediately before `sibling`, merging
    /// with the preceding Text sibling when there is one.
    pub fn insert_text_before(&mut self, sibling: NodeId, c: char) {
        let parent = self.nodes[sibling.0]
            .parent
            .expect("insert_text_before target has no parent");
        let index = self.nodes[parent.0]
            .children
            .iter()
            .position(|&n| n == sibling)
            .expect("sibling not found in parent's child list");
        if index > 0 {
            let prev = self.nodes[parent.0].children[index - 1];
            if let NodeData::Text { ref mut contents } = self.nodes[prev.0].data {
                contents.push_char(c);
                return;
            }
        }
        let text = self.create_text(StrTendril::from_char(c));
        self.insert_before(sibling, text);
    }

    /// Add attributes the element does not already have, preserving the
    /// order in which they first appeared.
    pub fn add_attrs_if_missing(&mut self, id: NodeId, new_attrs: Vec<Attribute>) {
        let NodeData::Element { ref mut attrs, .. } = self.nodes[id.0].data else {
            panic!("add_attrs_if_missing called on a non-element");
        };
        for attr in new_attrs {
            if !attrs.iter().any(|a| a.name.local == attr.name.local) {
                attrs.push(attr);
            }
        }
    }

    /// The `html` element, once it exists.
    pub fn html_root(&self) -> Option<NodeId> {
        self.children(NodeId::DOCUMENT)
            .iter()
            .copied()
            .find(|&id| matches!(self.elem_name(id), Some((Namespace::Html, "html"))))
    }

    /// Render the tree in the html5lib test format.
    pub fn dump(&self) -> String {
        let mut buf = String::new();
        for &child in self.children(NodeId::DOCUMENT) {
            self.dump_node(&mut buf, 1, child);
        }
        buf
    }

    /// Like `dump`, but starting from the children of the root `html`
    /// element, the way fragment tests are serialized.
    pub fn dump_fragment(&self) -> String {
        let mut buf = String::new();
        if let Some(root) = self.html_root() {
            for &child in self.children(root) {
                self.dump_node(&mut buf, 1, child);
            }
        }
        buf
    }

    fn dump_node(&self, buf: &mut String, indent: usize, id: NodeId) {
        buf.push('|');
        buf.push_str(&" ".repeat(indent));

        match self.nodes[id.0].data {
            NodeData::Document => panic!("should not reach Document"),

            NodeData::Doctype {
                ref name,
                ref public_id,
                ref system_id,
            } => {
                buf.push_str("<!DOCTYPE ");
                buf.push_str(name);
                if !public_id.is_empty() || !system_id.is_empty() {
                    buf.push_str(&format!(" \"{public_id}\" \"{system_id}\""));
                }
                buf.push_str(">\n");
            },

            NodeData::Text { ref contents } => {
                buf.push('"');
                buf.push_str(contents);
                buf.push_str("\"\n");
            },

            NodeData::Comment { ref contents } => {
                buf.push_str("<!-- ");
                buf.push_str(contents);
                buf.push_str(" -->\n");
            },

            NodeData::Element {
                ns,
                ref name,
                ref attrs,
            } => {
                buf.push('<');
                match ns {
                    Namespace::Svg => buf.push_str("svg "),
                    Namespace::MathMl => buf.push_str("math "),
                    _ => (),
                }
                buf.push_str(name);
                buf.push_str(">\n");

                let mut attrs = attrs.clone();
                attrs.sort_by(|x, y| x.name.local.cmp(&y.name.local));

                for attr in attrs {
                    buf.push('|');
                    buf.push_str(&" ".repeat(indent + 2));
                    match attr.name.ns {
                        Some(Namespace::XLink) => buf.push_str("xlink "),
                        Some(Namespace::Xml) => buf.push_str("xml "),
                        Some(Namespace::XmlNs) => buf.push_str("xmlns "),
                        _ => (),
                    }
                    buf.push_str(&format!("{}=\"{}\"\n", attr.name.local, attr.value));
                }

                // Template contents go under their own rail.
                if ns == Namespace::Html && &**name == "template" {
                    buf.push('|');
                    buf.push_str(&" ".repeat(indent + 2));
                    buf.push_str("content\n");
                    for &child in self.children(id) {
                        self.dump_node(buf, indent + 4, child);
                    }
                    return;
                }
            },
        }

        for &child in self.children(id) {
            self.dump_node(buf, indent + 2, child);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::interface::QualName;

    fn elem(doc: &mut Document, name: &str) -> NodeId {
        doc.create_element(Namespace::Html, StrTendril::from(name), vec![])
    }

    #[test]
    fn append_and_parent_links_agree() {
        let mut doc = Document::new();
        let html = elem(&mut doc, "html");
        let body = elem(&mut doc, "body");
        doc.append(NodeId::DOCUMENT, html);
        doc.append(html, body);

        assert_eq!(doc.parent(body), Some(html));
        assert_eq!(doc.children(html), &[body]);
        assert_eq!(doc.html_root(), Some(html));
    }

    #[test]
    fn text_nodes_merge_instead_of_becoming_adjacent() {
        let mut doc = Document::new();
        let p = elem(&mut doc, "p");
        doc.append(NodeId::DOCUMENT, p);
        for c in "hi".chars() {
            doc.append_text(p, c);
        }
        assert_eq!(doc.children(p).len(), 1);
        let text = doc.children(p)[0];
        assert_eq!(
            doc.data(text),
            &NodeData::Text {
                contents: StrTendril::from("hi")
            }
        );
    }

    #[test]
    fn insert_text_before_merges_with_preceding_sibling() {
        let mut doc = Document::new();
        let body = elem(&mut doc, "body");
        let table = elem(&mut doc, "table");
        doc.append(NodeId::DOCUMENT, body);
        doc.append_text(body, 'A');
        doc.append(body, table);
        doc.insert_text_before(table, 'B');
        doc.insert_text_before(table, 'C');

        assert_eq!(doc.children(body).len(), 2);
        let text = doc.children(body)[0];
        assert_eq!(
            doc.data(text),
            &NodeData::Text {
                contents: StrTendril::from("ABC")
            }
        );
    }

    #[test]
    fn reparent_children_moves_everything_in_order() {
        let mut doc = Document::new();
        let a = elem(&mut doc, "a");
        let b = elem(&mut doc, "b");
        let x = elem(&mut doc, "x");
        let y = elem(&mut doc, "y");
        doc.append(a, x);
        doc.append(a, y);
        doc.reparent_children(a, b);

        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), &[x, y]);
        assert_eq!(doc.parent(x), Some(b));
    }

    #[test]
    fn add_attrs_if_missing_keeps_first_seen() {
        let mut doc = Document::new();
        let attr = |name: &str, value: &str| Attribute {
            name: QualName::plain(StrTendril::from(name)),
            value: StrTendril::from(value),
        };
        let html = doc.create_element(
            Namespace::Html,
            StrTendril::from("html"),
            vec![attr("lang", "en")],
        );
        doc.add_attrs_if_missing(html, vec![attr("lang", "fr"), attr("dir", "ltr")]);

        let attrs = doc.attrs(html);
        assert_eq!(attrs.len(), 2);
        assert_eq!(&*attrs[0].value, "en");
        assert_eq!(&*attrs[1].name.local, "dir");
    }

    #[test]
    fn dump_renders_html5lib_format() {
        let mut doc = Document::new();
        let html = elem(&mut doc, "html");
        let body = elem(&mut doc, "body");
        doc.append(NodeId::DOCUMENT, html);
        doc.append(html, body);
        doc.append_text(body, 'x');

        assert_eq!(doc.dump(), "| <html>\n|   <body>\n|     \"x\"\n");
    }
}
