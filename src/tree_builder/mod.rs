// Copyright 2026 The html5oak Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The HTML5 tree builder.
//!
//! Owns the document arena, the stack of open elements, and the list of
//! active formatting elements, and drives them from the token stream. The
//! per-mode rules live in `rules.rs`; this module holds the shared
//! machinery those rules call into: insertion locations (including foster
//! parenting), scope queries, the formatting-element reconstruction and
//! adoption agency algorithms, and the foreign content dispatch.

use self::types::*;

use crate::dom::{Document, NodeId};
use crate::error::{ErrorKind, ParseError};
use crate::interface::{Attribute, Namespace, QualName, QuirksMode};
use crate::tendril::StrTendril;
use crate::tokenizer;
use crate::tokenizer::states as tok_state;
use crate::tokenizer::states::RawKind;
use crate::tokenizer::{Doctype, EndTag, StartTag, Tag, TokenSink, TokenSinkResult};
use crate::tree_builder::tag_sets::*;

use log::{debug, warn};
use std::fmt;
use std::mem;

mod tag_sets;

mod data;
mod rules;
mod types;

/// Tree builder options, with an impl for Default.
#[derive(Copy, Clone)]
pub struct TreeBuilderOpts {
    /// Is scripting enabled?
    ///
    /// This affects how `<noscript>` elements are parsed:
    ///   - If scripting **is** enabled then the contents of a `<noscript>`
    ///     element are parsed as a single text node
    ///   - If scripting is **not** enabled then the contents of a
    ///     `<noscript>` element are parsed as a normal tree of nodes
    pub scripting_enabled: bool,

    /// Is this document being parsed from the `srcdoc` attribute of an
    /// `<iframe>` element? This affects quirks-mode inference from the
    /// `<!DOCTYPE>`.
    pub iframe_srcdoc: bool,

    /// Should we drop the DOCTYPE (if any) from the tree?
    pub drop_doctype: bool,

    /// Initial quirks mode. Default: NoQuirks
    pub quirks_mode: QuirksMode,
}

impl Default for TreeBuilderOpts {
    fn default() -> TreeBuilderOpts {
        TreeBuilderOpts {
            scripting_enabled: false,
            iframe_srcdoc: false,
            drop_doctype: false,
            quirks_mode: QuirksMode::NoQuirks,
        }
    }
}

pub enum PushFlag {
    Push,
    NoPush,
}

enum Bookmark {
    Replace(NodeId),
    InsertAfter(NodeId),
}

/// The HTML tree builder.
pub struct TreeBuilder {
    /// Options controlling the behavior of the tree builder.
    opts: TreeBuilderOpts,

    /// The document being built.
    pub doc: Document,

    /// Parse errors from both stages, in emission order.
    pub errors: Vec<ParseError>,

    /// Insertion mode.
    mode: InsertionMode,

    /// Original insertion mode, used by Text and InTableText modes.
    orig_mode: Option<InsertionMode>,

    /// Stack of template insertion modes.
    template_modes: Vec<InsertionMode>,

    /// Pending table character tokens.
    pending_table_text: Vec<char>,

    /// Quirks mode as set by the parser.
    quirks_mode: QuirksMode,

    /// Stack of open elements, most recently added at end.
    open_elems: Vec<NodeId>,

    /// List of active formatting elements.
    active_formatting: Vec<FormatEntry>,

    //§ the-element-pointers
    /// Head element pointer.
    head_elem: Option<NodeId>,

    /// Form element pointer.
    form_elem: Option<NodeId>,
    //§ END
    /// Frameset-ok flag.
    frameset_ok: bool,

    /// Ignore a following U+000A LINE FEED?
    ignore_lf: bool,

    /// Is foster parenting enabled?
    foster_parenting: bool,

    /// The context element for the fragment parsing algorithm.
    context_elem: Option<NodeId>,

    /// Offset of the token being processed, for error positions.
    current_offset: usize,
}

impl TreeBuilder {
    /// Create a new tree builder for document parsing.
    ///
    /// The tree builder is also a `TokenSink`.
    pub fn new(opts: TreeBuilderOpts) -> TreeBuilder {
        TreeBuilder {
            opts,
            doc: Document::new(),
            errors: vec![],
            mode: InsertionMode::Initial,
            orig_mode: None,
            template_modes: vec![],
            pending_table_text: vec![],
            quirks_mode: opts.quirks_mode,
            open_elems: vec![],
            active_formatting: vec![],
            head_elem: None,
            form_elem: None,
            frameset_ok: true,
            ignore_lf: false,
            foster_parenting: false,
            context_elem: None,
            current_offset: 0,
        }
    }

    /// Create a new tree builder for fragment parsing with the given
    /// context element.
    ///
    /// <https://html.spec.whatwg.org/multipage/#parsing-html-fragments>
    pub fn new_for_fragment(
        opts: TreeBuilderOpts,
        context_ns: Namespace,
        context_name: &str,
    ) -> TreeBuilder {
        let mut tb = TreeBuilder::new(opts);

        // The context element lives in the same arena but stays detached.
        let context = tb
            .doc
            .create_element(context_ns, StrTendril::from(context_name), vec![]);
        tb.context_elem = Some(context);
        if context_ns == Namespace::Html && context_name == "template" {
            tb.template_modes.push(InsertionMode::InTemplate);
        }

        // Let root be a new html element with no attributes; append it to
        // the Document; the stack of open elements is just root.
        tb.create_root(vec![]);
        tb.mode = tb.reset_insertion_mode();
        tb
    }

    // Step 4 of the fragment parsing algorithm: set the tokenization state
    // for the context element.
    pub fn tokenizer_state_for_context_elem(&self, scripting_enabled: bool) -> tok_state::State {
        let context = self.context_elem.expect("no context element");
        let Some((Namespace::Html, name)) = self.doc.elem_name(context) else {
            return tok_state::Data;
        };
        match name {
            "title" | "textarea" => tok_state::RawData(tok_state::Rcdata),

            "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
                tok_state::RawData(tok_state::Rawtext)
            },

            "script" => tok_state::RawData(tok_state::ScriptData),

            "noscript" => {
                if scripting_enabled {
                    tok_state::RawData(tok_state::Rawtext)
                } else {
                    tok_state::Data
                }
            },

            "plaintext" => tok_state::Plaintext,

            _ => tok_state::Data,
        }
    }

    /// The local name of the context element, used to seed the
    /// tokenizer's appropriate-end-tag check.
    pub fn context_elem_name(&self) -> Option<String> {
        let context = self.context_elem?;
        self.doc.elem_name(context).map(|(_, name)| name.to_string())
    }

    fn process_to_completion(&mut self, mut token: Token) -> TokenSinkResult {
        loop {
            let should_have_acknowledged_self_closing_flag = matches!(
                token,
                Token::Tag(Tag {
                    self_closing: true,
                    kind: StartTag,
                    ..
                })
            );
            let result = if self.is_foreign(&token) {
                self.step_foreign(token)
            } else {
                let mode = self.mode;
                self.step(mode, token)
            };
            match result {
                ProcessResult::Done => {
                    if should_have_acknowledged_self_closing_flag {
                        self.parse_error(
                            ErrorKind::NonVoidHtmlElementStartTagWithTrailingSolidus,
                            "unacknowledged self-closing tag",
                        );
                    }
                    return TokenSinkResult::Continue;
                },
                ProcessResult::DoneAckSelfClosing => return TokenSinkResult::Continue,
                ProcessResult::Reprocess(m, t) => {
                    self.mode = m;
                    token = t;
                },
                ProcessResult::ToPlaintext => return TokenSinkResult::Plaintext,
                ProcessResult::ToRawData(k) => return TokenSinkResult::RawData(k),
            }
        }
    }

    /// Are we parsing a HTML fragment?
    pub fn is_fragment(&self) -> bool {
        self.context_elem.is_some()
    }

    /// <https://html.spec.whatwg.org/multipage/#appropriate-place-for-inserting-a-node>
    fn appropriate_place_for_insertion(&self, override_target: Option<NodeId>) -> InsertionPoint {
        declare_tag_set!(foster_target = "table" "tbody" "tfoot" "thead" "tr");
        let target = override_target.unwrap_or_else(|| self.current_node());
        if !(self.foster_parenting && self.elem_in(target, foster_target)) {
            // No foster parenting (the common case). Template contents are
            // the template element itself in this DOM.
            return InsertionPoint::LastChild(target);
        }

        // Foster parenting
        let mut iter = self.open_elems.iter().rev().peekable();
        while let Some(&elem) = iter.next() {
            if self.html_elem_named(elem, "template") {
                return InsertionPoint::LastChild(elem);
            } else if self.html_elem_named(elem, "table") {
                return InsertionPoint::TableFosterParenting {
                    table: elem,
                    prev_element: **iter.peek().unwrap(),
                };
            }
        }
        InsertionPoint::LastChild(self.html_elem())
    }

    fn insert_at(&mut self, insertion_point: InsertionPoint, child: NodeOrText) {
        match insertion_point {
            InsertionPoint::LastChild(parent) => match child {
                NodeOrText::AppendNode(node) => self.doc.append(parent, node),
                NodeOrText::AppendChar(c) => self.doc.append_text(parent, c),
            },
            InsertionPoint::TableFosterParenting {
                table,
                prev_element,
            } => {
                if self.doc.parent(table).is_some() {
                    match child {
                        NodeOrText::AppendNode(node) => self.doc.insert_before(table, node),
                        NodeOrText::AppendChar(c) => self.doc.insert_text_before(table, c),
                    }
                } else {
                    match child {
                        NodeOrText::AppendNode(node) => self.doc.append(prev_element, node),
                        NodeOrText::AppendChar(c) => self.doc.append_text(prev_element, c),
                    }
                }
            },
        }
    }

    // Insert at the "appropriate place for inserting a node".
    fn insert_appropriately(&mut self, child: NodeOrText, override_target: Option<NodeId>) {
        let insertion_point = self.appropriate_place_for_insertion(override_target);
        self.insert_at(insertion_point, child);
    }

    fn parse_error(&mut self, kind: ErrorKind, _msg: &'static str) {
        debug!("parse error: {_msg}");
        self.errors.push(ParseError {
            kind,
            offset: Some(self.current_offset),
        });
    }

    fn unexpected<T: fmt::Debug>(&mut self, _thing: &T) -> ProcessResult {
        debug!(
            "unexpected token {:?} in insertion mode {:?}",
            _thing, self.mode
        );
        self.parse_error(ErrorKind::UnexpectedToken, "unexpected token");
        ProcessResult::Done
    }

    fn assert_named(&self, node: NodeId, name: &str) {
        assert!(self.html_elem_named(node, name));
    }

    fn position_in_active_formatting(&self, element: NodeId) -> Option<usize> {
        self.active_formatting.iter().position(|n| match n {
            FormatEntry::Marker => false,
            FormatEntry::Element(node, _) => *node == element,
        })
    }

    fn set_quirks_mode(&mut self, mode: QuirksMode) {
        self.quirks_mode = mode;
        self.doc.quirks_mode = mode;
    }

    fn stop_parsing(&mut self) -> ProcessResult {
        ProcessResult::Done
    }

    //§ parsing-elements-that-contain-only-text
    // Switch to `Text` insertion mode, save the old mode, and
    // switch the tokenizer to a raw-data state.
    // The latter only takes effect after the current / next
    // `process_token` of a start tag returns!
    fn to_raw_text_mode(&mut self, k: RawKind) -> ProcessResult {
        self.orig_mode = Some(self.mode);
        self.mode = InsertionMode::Text;
        ProcessResult::ToRawData(k)
    }

    // The generic raw text / RCDATA parsing algorithm.
    fn parse_raw_data(&mut self, tag: Tag, k: RawKind) -> ProcessResult {
        self.insert_element_for(tag);
        self.to_raw_text_mode(k)
    }
    //§ END

    fn current_node(&self) -> NodeId {
        *self.open_elems.last().expect("no current element")
    }

    fn adjusted_current_node(&self) -> NodeId {
        if self.open_elems.len() == 1 {
            if let Some(ctx) = self.context_elem {
                return ctx;
            }
        }
        self.current_node()
    }

    fn elem_ns_name(&self, elem: NodeId) -> (Namespace, &str) {
        self.doc
            .elem_name(elem)
            .expect("non-element on the stack of open elements")
    }

    fn elem_in<TagSet>(&self, elem: NodeId, set: TagSet) -> bool
    where
        TagSet: Fn(Namespace, &str) -> bool,
    {
        let (ns, name) = self.elem_ns_name(elem);
        set(ns, name)
    }

    fn html_elem_named(&self, elem: NodeId, name: &str) -> bool {
        matches!(self.doc.elem_name(elem), Some((Namespace::Html, n)) if n == name)
    }

    fn in_html_elem_named(&self, name: &str) -> bool {
        self.open_elems
            .iter()
            .any(|&elem| self.html_elem_named(elem, name))
    }

    fn current_node_named(&self, name: &str) -> bool {
        self.html_elem_named(self.current_node(), name)
    }

    fn current_node_in<TagSet>(&self, set: TagSet) -> bool
    where
        TagSet: Fn(Namespace, &str) -> bool,
    {
        self.elem_in(self.current_node(), set)
    }

    fn in_scope<TagSet, Pred>(&self, scope: TagSet, pred: Pred) -> bool
    where
        TagSet: Fn(Namespace, &str) -> bool,
        Pred: Fn(NodeId) -> bool,
    {
        for &node in self.open_elems.iter().rev() {
            if pred(node) {
                return true;
            }
            let (ns, name) = self.elem_ns_name(node);
            if scope(ns, name) {
                return false;
            }
        }

        // supposed to be impossible, because <html> is always in scope
        false
    }

    fn in_scope_named<TagSet>(&self, scope: TagSet, name: &str) -> bool
    where
        TagSet: Fn(Namespace, &str) -> bool,
    {
        self.in_scope(scope, |elem| self.html_elem_named(elem, name))
    }

    /// The `html` element, the first entry on the stack.
    fn html_elem(&self) -> NodeId {
        self.open_elems[0]
    }

    /// The second element on the stack, if it's an HTML body element.
    fn body_elem(&self) -> Option<NodeId> {
        if self.open_elems.len() <= 1 {
            return None;
        }
        let node = self.open_elems[1];
        self.html_elem_named(node, "body").then_some(node)
    }

    /// Signal an error depending on the state of the stack of open
    /// elements at the end of the body.
    fn check_body_end(&mut self) {
        declare_tag_set!(body_end_ok =
            "dd" "dt" "li" "optgroup" "option" "p" "rp" "rt" "tbody" "td" "tfoot" "th"
            "thead" "tr" "body" "html");

        for i in 0..self.open_elems.len() {
            let elem = self.open_elems[i];
            if !self.elem_in(elem, body_end_ok) {
                self.parse_error(
                    ErrorKind::UnexpectedToken,
                    "unexpected open element at end of body",
                );
                // The spec suggests reporting at most one.
                return;
            }
        }
    }

    /// <https://html.spec.whatwg.org/#generate-implied-end-tags>
    fn generate_implied_end_tags<TagSet>(&mut self, set: TagSet)
    where
        TagSet: Fn(Namespace, &str) -> bool,
    {
        loop {
            let Some(&elem) = self.open_elems.last() else {
                return;
            };
            if !self.elem_in(elem, &set) {
                return;
            }
            self.pop();
        }
    }

    fn generate_implied_end_except(&mut self, except: &str) {
        self.generate_implied_end_tags(|ns, name| {
            if ns == Namespace::Html && name == except {
                false
            } else {
                cursory_implied_end(ns, name)
            }
        });
    }
    //§ END

    // Pop elements until the current element is in the set.
    fn pop_until_current<TagSet>(&mut self, tag_set: TagSet)
    where
        TagSet: Fn(Namespace, &str) -> bool,
    {
        while !self.current_node_in(&tag_set) {
            self.open_elems.pop();
        }
    }

    // Pop elements until an element from the set has been popped. Returns
    // the number of elements popped.
    fn pop_until<P>(&mut self, pred: P) -> usize
    where
        P: Fn(Namespace, &str) -> bool,
    {
        let mut n = 0;
        loop {
            n += 1;
            match self.open_elems.pop() {
                None => break,
                Some(elem) => {
                    if self.elem_in(elem, &pred) {
                        break;
                    }
                },
            }
        }
        n
    }

    fn pop_until_named(&mut self, name: &str) -> usize {
        self.pop_until(|ns, local| ns == Namespace::Html && local == name)
    }

    /// Pop elements until one with the specified name has been popped.
    /// Signal an error if it was not the first one.
    fn expect_to_close(&mut self, name: &str) {
        if self.pop_until_named(name) != 1 {
            self.parse_error(
                ErrorKind::UnexpectedToken,
                "unexpected open element while closing",
            );
        }
    }

    fn close_p_element(&mut self) {
        declare_tag_set!(implied = [cursory_implied_end] - "p");
        self.generate_implied_end_tags(implied);
        self.expect_to_close("p");
    }

    fn close_p_element_in_button_scope(&mut self) {
        if self.in_scope_named(button_scope, "p") {
            self.close_p_element();
        }
    }

    // Check <input> tags for type=hidden
    fn is_type_hidden(&self, tag: &Tag) -> bool {
        match tag.get_attribute("type") {
            None => false,
            Some(value) => value.eq_ignore_ascii_case("hidden"),
        }
    }

    fn foster_parent_in_body(&mut self, token: Token) -> ProcessResult {
        warn!("foster parenting");
        self.foster_parenting = true;
        let res = self.step(InsertionMode::InBody, token);
        self.foster_parenting = false;
        res
    }

    fn process_chars_in_table(&mut self, token: Token) -> ProcessResult {
        declare_tag_set!(table_outer = "table" "tbody" "tfoot" "thead" "tr");
        if self.current_node_in(table_outer) {
            assert!(self.pending_table_text.is_empty());
            self.orig_mode = Some(self.mode);
            ProcessResult::Reprocess(InsertionMode::InTableText, token)
        } else {
            self.parse_error(ErrorKind::UnexpectedToken, "unexpected characters in table");
            self.foster_parent_in_body(token)
        }
    }

    /// <https://html.spec.whatwg.org/multipage/#reset-the-insertion-mode-appropriately>
    fn reset_insertion_mode(&self) -> InsertionMode {
        for (i, &open_elem) in self.open_elems.iter().enumerate().rev() {
            let last = i == 0;
            let node = match (last, self.context_elem) {
                (true, Some(ctx)) => ctx,
                _ => open_elem,
            };
            let Some((Namespace::Html, name)) = self.doc.elem_name(node) else {
                continue;
            };
            match name {
                "select" => {
                    for &ancestor in self.open_elems[0..i].iter().rev() {
                        if self.html_elem_named(ancestor, "template") {
                            return InsertionMode::InSelect;
                        } else if self.html_elem_named(ancestor, "table") {
                            return InsertionMode::InSelectInTable;
                        }
                    }
                    return InsertionMode::InSelect;
                },
                "td" | "th" if !last => return InsertionMode::InCell,
                "tr" => return InsertionMode::InRow,
                "tbody" | "thead" | "tfoot" => return InsertionMode::InTableBody,
                "caption" => return InsertionMode::InCaption,
                "colgroup" => return InsertionMode::InColumnGroup,
                "table" => return InsertionMode::InTable,
                "template" => return *self.template_modes.last().unwrap(),
                "head" if !last => return InsertionMode::InHead,
                "body" => return InsertionMode::InBody,
                "frameset" => return InsertionMode::InFrameset,
                "html" => {
                    return match self.head_elem {
                        None => InsertionMode::BeforeHead,
                        Some(_) => InsertionMode::AfterHead,
                    };
                },
                _ => (),
            }
        }
        InsertionMode::InBody
    }

    fn close_the_cell(&mut self) {
        self.generate_implied_end_tags(cursory_implied_end);
        if self.pop_until(td_th) != 1 {
            self.parse_error(
                ErrorKind::UnexpectedToken,
                "expected to close <td> or <th> with cell",
            );
        }
        self.clear_active_formatting_to_marker();
    }

    fn append_char(&mut self, c: char) -> ProcessResult {
        self.insert_appropriately(NodeOrText::AppendChar(c), None);
        ProcessResult::Done
    }

    fn append_comment(&mut self, text: StrTendril) -> ProcessResult {
        let comment = self.doc.create_comment(text);
        self.insert_appropriately(NodeOrText::AppendNode(comment), None);
        ProcessResult::Done
    }

    fn append_comment_to_doc(&mut self, text: StrTendril) -> ProcessResult {
        let comment = self.doc.create_comment(text);
        self.doc.append(NodeId::DOCUMENT, comment);
        ProcessResult::Done
    }

    fn append_comment_to_html(&mut self, text: StrTendril) -> ProcessResult {
        let target = self.html_elem();
        let comment = self.doc.create_comment(text);
        self.doc.append(target, comment);
        ProcessResult::Done
    }

    //§ creating-and-inserting-nodes
    fn create_root(&mut self, attrs: Vec<Attribute>) {
        let elem = self
            .doc
            .create_element(Namespace::Html, StrTendril::from("html"), attrs);
        self.push(elem);
        self.doc.append(NodeId::DOCUMENT, elem);
    }

    /// <https://html.spec.whatwg.org/multipage/#create-an-element-for-the-token>
    fn insert_element(
        &mut self,
        push: PushFlag,
        ns: Namespace,
        name: StrTendril,
        attrs: Vec<Attribute>,
    ) -> NodeId {
        let elem = self.doc.create_element(ns, name, attrs);
        let insertion_point = self.appropriate_place_for_insertion(None);
        self.insert_at(insertion_point, NodeOrText::AppendNode(elem));

        match push {
            PushFlag::Push => self.push(elem),
            PushFlag::NoPush => (),
        }
        elem
    }

    fn insert_element_for(&mut self, tag: Tag) -> NodeId {
        self.insert_element(PushFlag::Push, Namespace::Html, tag.name, tag.attrs)
    }

    fn insert_and_pop_element_for(&mut self, tag: Tag) -> NodeId {
        self.insert_element(PushFlag::NoPush, Namespace::Html, tag.name, tag.attrs)
    }

    fn insert_phantom(&mut self, name: &str) -> NodeId {
        self.insert_element(PushFlag::Push, Namespace::Html, StrTendril::from(name), vec![])
    }
    //§ END

    fn push(&mut self, elem: NodeId) {
        self.open_elems.push(elem);
    }

    fn pop(&mut self) -> NodeId {
        self.open_elems.pop().expect("no current element")
    }

    fn remove_from_stack(&mut self, elem: NodeId) {
        if let Some(position) = self.open_elems.iter().rposition(|&x| x == elem) {
            self.open_elems.remove(position);
        }
    }

    fn is_marker_or_open(&self, entry: &FormatEntry) -> bool {
        match *entry {
            FormatEntry::Marker => true,
            FormatEntry::Element(node, _) => self.open_elems.iter().rev().any(|&n| n == node),
        }
    }

    /// <https://html.spec.whatwg.org/#reconstruct-the-active-formatting-elements>
    fn reconstruct_active_formatting_elements(&mut self) {
        // Step 1-2: nothing to do if the list is empty, or ends with a
        // marker or an element that is still open.
        match self.active_formatting.last() {
            None => return,
            Some(last) if self.is_marker_or_open(last) => return,
            _ => (),
        }

        // Step 3-7 (rewind/advance): find the earliest entry after the
        // last marker-or-open entry.
        let mut entry_index = self.active_formatting.len() - 1;
        loop {
            if entry_index == 0 {
                break;
            }
            entry_index -= 1;
            if self.is_marker_or_open(&self.active_formatting[entry_index]) {
                entry_index += 1;
                break;
            }
        }

        loop {
            // Step 8 (create): insert an HTML element for the token for
            // which the entry was created.
            let tag = match self.active_formatting[entry_index] {
                FormatEntry::Element(_, ref t) => t.clone(),
                FormatEntry::Marker => {
                    panic!("found marker during formatting element reconstruction")
                },
            };

            let new_element = self.insert_element(
                PushFlag::Push,
                Namespace::Html,
                tag.name.clone(),
                tag.attrs.clone(),
            );

            // Step 9: replace the entry.
            self.active_formatting[entry_index] = FormatEntry::Element(new_element, tag);

            // Step 10: repeat until we've replaced the last entry.
            if entry_index == self.active_formatting.len() - 1 {
                break;
            }
            entry_index += 1;
        }
    }

    fn create_formatting_element_for(&mut self, tag: Tag) -> NodeId {
        // Noah's Ark: at most three identical entries above the last
        // marker; remove the earliest if this would make a fourth.
        let mut first_match = None;
        let mut matches = 0usize;
        for (i, entry) in self.active_formatting.iter().enumerate().rev() {
            match entry {
                FormatEntry::Marker => break,
                FormatEntry::Element(_, old_tag) => {
                    if tag.equiv_modulo_attr_order(old_tag) {
                        first_match = Some(i);
                        matches += 1;
                    }
                },
            }
        }

        if matches >= 3 {
            self.active_formatting
                .remove(first_match.expect("matches with no index"));
        }

        let elem = self.insert_element(
            PushFlag::Push,
            Namespace::Html,
            tag.name.clone(),
            tag.attrs.clone(),
        );
        self.active_formatting
            .push(FormatEntry::Element(elem, tag));
        elem
    }

    fn clear_active_formatting_to_marker(&mut self) {
        loop {
            match self.active_formatting.pop() {
                None | Some(FormatEntry::Marker) => break,
                _ => (),
            }
        }
    }

    /// The "any other end tag" rules of the in-body insertion mode.
    fn process_end_tag_in_body(&mut self, tag: Tag) {
        // Look back for a matching open element.
        let mut match_idx = None;
        for (i, &elem) in self.open_elems.iter().enumerate().rev() {
            if self.html_elem_named(elem, &tag.name) {
                match_idx = Some(i);
                break;
            }

            if self.elem_in(elem, special_tag) {
                self.parse_error(
                    ErrorKind::UnexpectedToken,
                    "found special tag while closing generic tag",
                );
                return;
            }
        }

        let Some(match_idx) = match_idx else {
            // Impossible, because the root <html> element is special.
            self.unexpected(&tag);
            return;
        };

        let name = tag.name.clone();
        self.generate_implied_end_except(&name);

        if match_idx != self.open_elems.len() - 1 {
            // mis-nested tags
            self.unexpected(&tag);
        }
        self.open_elems.truncate(match_idx);
    }

    /// <https://html.spec.whatwg.org/multipage/#adoption-agency-algorithm>
    fn adoption_agency(&mut self, subject: &str) {
        // 1. - 2.
        if self.current_node_named(subject)
            && self
                .position_in_active_formatting(self.current_node())
                .is_none()
        {
            self.pop();
            return;
        }

        // 3. (outer loop counter, bounded at 8)
        for _ in 0..8 {
            // 6. Find the formatting element: the last element between the
            // end of the list and the last marker with the subject's name.
            let mut fmt_entry = None;
            for (i, entry) in self.active_formatting.iter().enumerate().rev() {
                match entry {
                    FormatEntry::Marker => break,
                    FormatEntry::Element(node, tag) => {
                        if &*tag.name == subject {
                            fmt_entry = Some((i, *node, tag.clone()));
                            break;
                        }
                    },
                }
            }

            let Some((fmt_elem_index, fmt_elem, fmt_elem_tag)) = fmt_entry else {
                return self.process_end_tag_in_body(Tag {
                    kind: EndTag,
                    name: StrTendril::from(subject),
                    self_closing: false,
                    attrs: vec![],
                });
            };

            let Some(fmt_elem_stack_index) =
                self.open_elems.iter().rposition(|&n| n == fmt_elem)
            else {
                self.parse_error(ErrorKind::UnexpectedToken, "formatting element not open");
                self.active_formatting.remove(fmt_elem_index);
                return;
            };

            // 8.
            if !self.in_scope(default_scope, |n| n == fmt_elem) {
                self.parse_error(ErrorKind::UnexpectedToken, "formatting element not in scope");
                return;
            }

            // 9.
            if self.current_node() != fmt_elem {
                self.parse_error(
                    ErrorKind::UnexpectedToken,
                    "formatting element not current node",
                );
            }

            // 10. The furthest block: the topmost special element below
            // the formatting element.
            let maybe_furthest_block = self
                .open_elems
                .iter()
                .enumerate()
                .skip(fmt_elem_stack_index)
                .find(|&(_, &open_element)| self.elem_in(open_element, special_tag))
                .map(|(i, &h)| (i, h));

            let Some((furthest_block_index, furthest_block)) = maybe_furthest_block else {
                // 11.
                self.open_elems.truncate(fmt_elem_stack_index);
                self.active_formatting.remove(fmt_elem_index);
                return;
            };

            // 12.
            let common_ancestor = self.open_elems[fmt_elem_stack_index - 1];

            // 13.
            let mut bookmark = Bookmark::Replace(fmt_elem);

            // 14.
            let mut node;
            let mut node_index = furthest_block_index;
            let mut last_node = furthest_block;

            // 14.1.
            let mut inner_counter = 0;
            loop {
                // 14.2.
                inner_counter += 1;

                // 14.3.
                node_index -= 1;
                node = self.open_elems[node_index];

                // 14.4.
                if node == fmt_elem {
                    break;
                }

                // 14.5.
                if inner_counter > 3 {
                    if let Some(position) = self.position_in_active_formatting(node) {
                        self.active_formatting.remove(position);
                    }
                    self.open_elems.remove(node_index);
                    continue;
                }

                let Some(node_formatting_index) = self.position_in_active_formatting(node)
                else {
                    // 14.6.
                    self.open_elems.remove(node_index);
                    continue;
                };

                // 14.7. Replace node with a fresh element created from its
                // original tag token.
                let tag = match self.active_formatting[node_formatting_index] {
                    FormatEntry::Element(ref h, ref t) => {
                        assert_eq!(*h, node);
                        t.clone()
                    },
                    FormatEntry::Marker => panic!("found marker during adoption agency"),
                };
                let new_element =
                    self.doc
                        .create_element(Namespace::Html, tag.name.clone(), tag.attrs.clone());
                self.open_elems[node_index] = new_element;
                self.active_formatting[node_formatting_index] =
                    FormatEntry::Element(new_element, tag);
                node = new_element;

                // 14.8.
                if last_node == furthest_block {
                    bookmark = Bookmark::InsertAfter(node);
                }

                // 14.9.
                self.doc.append(node, last_node);

                // 14.10.
                last_node = node;
            }

            // 15.
            self.doc.remove_from_parent(last_node);
            self.insert_appropriately(NodeOrText::AppendNode(last_node), Some(common_ancestor));

            // 16.
            let new_element = self.doc.create_element(
                Namespace::Html,
                fmt_elem_tag.name.clone(),
                fmt_elem_tag.attrs.clone(),
            );
            let new_entry = FormatEntry::Element(new_element, fmt_elem_tag);

            // 17.
            self.doc.reparent_children(furthest_block, new_element);

            // 18.
            self.doc.append(furthest_block, new_element);

            // 19.
            match bookmark {
                Bookmark::Replace(to_replace) => {
                    let index = self
                        .position_in_active_formatting(to_replace)
                        .expect("bookmark not found in active formatting elements");
                    self.active_formatting[index] = new_entry;
                },
                Bookmark::InsertAfter(previous) => {
                    let index = self
                        .position_in_active_formatting(previous)
                        .expect("bookmark not found in active formatting elements")
                        + 1;
                    self.active_formatting.insert(index, new_entry);
                    let old_index = self
                        .position_in_active_formatting(fmt_elem)
                        .expect("formatting element not found in active formatting elements");
                    self.active_formatting.remove(old_index);
                },
            }

            // 20.
            self.remove_from_stack(fmt_elem);
            let new_furthest_block_index = self
                .open_elems
                .iter()
                .position(|&n| n == furthest_block)
                .expect("furthest block missing from open element stack");
            self.open_elems
                .insert(new_furthest_block_index + 1, new_element);

            // 21. and around again.
        }
    }

    fn handle_misnested_a_tags(&mut self, tag: &Tag) {
        let mut node = None;
        for entry in self.active_formatting.iter().rev() {
            match entry {
                FormatEntry::Marker => break,
                FormatEntry::Element(n, t) => {
                    if &*t.name == "a" {
                        node = Some(*n);
                        break;
                    }
                },
            }
        }
        let Some(node) = node else {
            return;
        };

        self.unexpected(tag);
        self.adoption_agency("a");
        if let Some(index) = self.position_in_active_formatting(node) {
            self.active_formatting.remove(index);
        }
        self.remove_from_stack(node);
    }

    //§ tree-construction
    fn is_foreign(&self, token: &Token) -> bool {
        if let Token::Eof = *token {
            return false;
        }

        if self.open_elems.is_empty() {
            return false;
        }

        let current = self.adjusted_current_node();
        let (ns, name) = self.elem_ns_name(current);
        if ns == Namespace::Html {
            return false;
        }

        if mathml_text_integration_point(ns, name) {
            match *token {
                Token::Character(..) => return false,
                Token::Tag(Tag {
                    kind: StartTag,
                    ref name,
                    ..
                }) if !matches!(&**name, "mglyph" | "malignmark") => {
                    return false;
                },
                _ => (),
            }
        }

        if svg_html_integration_point(ns, name) {
            match *token {
                Token::Character(..) => return false,
                Token::Tag(Tag { kind: StartTag, .. }) => return false,
                _ => (),
            }
        }

        if ns == Namespace::MathMl && name == "annotation-xml" {
            match *token {
                Token::Tag(Tag {
                    kind: StartTag,
                    ref name,
                    ..
                }) if &**name == "svg" => return false,
                Token::Character(..) | Token::Tag(Tag { kind: StartTag, .. }) => {
                    return !self.is_annotation_xml_integration_point(current);
                },
                _ => {},
            };
        }

        true
    }
    //§ END

    fn is_annotation_xml_integration_point(&self, elem: NodeId) -> bool {
        match self.doc.attr(elem, "encoding") {
            Some(value) => {
                value.eq_ignore_ascii_case("text/html")
                    || value.eq_ignore_ascii_case("application/xhtml+xml")
            },
            None => false,
        }
    }

    fn enter_foreign(&mut self, mut tag: Tag, ns: Namespace) -> ProcessResult {
        match ns {
            Namespace::MathMl => adjust_mathml_attributes(&mut tag),
            Namespace::Svg => adjust_svg_attributes(&mut tag),
            _ => (),
        }
        adjust_foreign_attributes(&mut tag);

        if tag.self_closing {
            self.insert_element(PushFlag::NoPush, ns, tag.name, tag.attrs);
            ProcessResult::DoneAckSelfClosing
        } else {
            self.insert_element(PushFlag::Push, ns, tag.name, tag.attrs);
            ProcessResult::Done
        }
    }

    fn foreign_start_tag(&mut self, mut tag: Tag) -> ProcessResult {
        let current_ns = self.elem_ns_name(self.adjusted_current_node()).0;
        match current_ns {
            Namespace::MathMl => adjust_mathml_attributes(&mut tag),
            Namespace::Svg => {
                adjust_svg_tag_name(&mut tag);
                adjust_svg_attributes(&mut tag);
            },
            _ => (),
        }
        adjust_foreign_attributes(&mut tag);
        if tag.self_closing {
            self.insert_element(PushFlag::NoPush, current_ns, tag.name, tag.attrs);
            ProcessResult::DoneAckSelfClosing
        } else {
            self.insert_element(PushFlag::Push, current_ns, tag.name, tag.attrs);
            ProcessResult::Done
        }
    }

    fn unexpected_start_tag_in_foreign_content(&mut self, tag: Tag) -> ProcessResult {
        self.unexpected(&tag);
        while !self.current_node_in(|ns, name| {
            ns == Namespace::Html
                || mathml_text_integration_point(ns, name)
                || svg_html_integration_point(ns, name)
        }) {
            self.pop();
        }
        self.step(self.mode, Token::Tag(tag))
    }
}

fn adjust_svg_tag_name(tag: &mut Tag) {
    let replacement = match &*tag.name {
        "altglyph" => "altGlyph",
        "altglyphdef" => "altGlyphDef",
        "altglyphitem" => "altGlyphItem",
        "animatecolor" => "animateColor",
        "animatemotion" => "animateMotion",
        "animatetransform" => "animateTransform",
        "clippath" => "clipPath",
        "feblend" => "feBlend",
        "fecolormatrix" => "feColorMatrix",
        "fecomponenttransfer" => "feComponentTransfer",
        "fecomposite" => "feComposite",
        "feconvolvematrix" => "feConvolveMatrix",
        "fediffuselighting" => "feDiffuseLighting",
        "fedisplacementmap" => "feDisplacementMap",
        "fedistantlight" => "feDistantLight",
        "fedropshadow" => "feDropShadow",
        "feflood" => "feFlood",
        "fefunca" => "feFuncA",
        "fefuncb" => "feFuncB",
        "fefuncg" => "feFuncG",
        "fefuncr" => "feFuncR",
        "fegaussianblur" => "feGaussianBlur",
        "feimage" => "feImage",
        "femerge" => "feMerge",
        "femergenode" => "feMergeNode",
        "femorphology" => "feMorphology",
        "feoffset" => "feOffset",
        "fepointlight" => "fePointLight",
        "fespecularlighting" => "feSpecularLighting",
        "fespotlight" => "feSpotLight",
        "fetile" => "feTile",
        "feturbulence" => "feTurbulence",
        "foreignobject" => "foreignObject",
        "glyphref" => "glyphRef",
        "lineargradient" => "linearGradient",
        "radialgradient" => "radialGradient",
        "textpath" => "textPath",
        _ => return,
    };
    tag.name = StrTendril::from(replacement);
}

fn adjust_attributes<F>(tag: &mut Tag, mut map: F)
where
    F: FnMut(&str) -> Option<QualName>,
{
    for attr in &mut tag.attrs {
        if let Some(replacement) = map(&attr.name.local) {
            attr.name = replacement;
        }
    }
}

fn camel(local: &str) -> Option<QualName> {
    Some(QualName::plain(StrTendril::from(local)))
}

fn adjust_svg_attributes(tag: &mut Tag) {
    adjust_attributes(tag, |k| match k {
        "attributename" => camel("attributeName"),
        "attributetype" => camel("attributeType"),
        "basefrequency" => camel("baseFrequency"),
        "baseprofile" => camel("baseProfile"),
        "calcmode" => camel("calcMode"),
        "clippathunits" => camel("clipPathUnits"),
        "diffuseconstant" => camel("diffuseConstant"),
        "edgemode" => camel("edgeMode"),
        "filterunits" => camel("filterUnits"),
        "glyphref" => camel("glyphRef"),
        "gradienttransform" => camel("gradientTransform"),
        "gradientunits" => camel("gradientUnits"),
        "kernelmatrix" => camel("kernelMatrix"),
        "kernelunitlength" => camel("kernelUnitLength"),
        "keypoints" => camel("keyPoints"),
        "keysplines" => camel("keySplines"),
        "keytimes" => camel("keyTimes"),
        "lengthadjust" => camel("lengthAdjust"),
        "limitingconeangle" => camel("limitingConeAngle"),
        "markerheight" => camel("markerHeight"),
        "markerunits" => camel("markerUnits"),
        "markerwidth" => camel("markerWidth"),
        "maskcontentunits" => camel("maskContentUnits"),
        "maskunits" => camel("maskUnits"),
        "numoctaves" => camel("numOctaves"),
        "pathlength" => camel("pathLength"),
        "patterncontentunits" => camel("patternContentUnits"),
        "patterntransform" => camel("patternTransform"),
        "patternunits" => camel("patternUnits"),
        "pointsatx" => camel("pointsAtX"),
        "pointsaty" => camel("pointsAtY"),
        "pointsatz" => camel("pointsAtZ"),
        "preservealpha" => camel("preserveAlpha"),
        "preserveaspectratio" => camel("preserveAspectRatio"),
        "primitiveunits" => camel("primitiveUnits"),
        "refx" => camel("refX"),
        "refy" => camel("refY"),
        "repeatcount" => camel("repeatCount"),
        "repeatdur" => camel("repeatDur"),
        "requiredextensions" => camel("requiredExtensions"),
        "requiredfeatures" => camel("requiredFeatures"),
        "specularconstant" => camel("specularConstant"),
        "specularexponent" => camel("specularExponent"),
        "spreadmethod" => camel("spreadMethod"),
        "startoffset" => camel("startOffset"),
        "stddeviation" => camel("stdDeviation"),
        "stitchtiles" => camel("stitchTiles"),
        "surfacescale" => camel("surfaceScale"),
        "systemlanguage" => camel("systemLanguage"),
        "tablevalues" => camel("tableValues"),
        "targetx" => camel("targetX"),
        "targety" => camel("targetY"),
        "textlength" => camel("textLength"),
        "viewbox" => camel("viewBox"),
        "viewtarget" => camel("viewTarget"),
        "xchannelselector" => camel("xChannelSelector"),
        "ychannelselector" => camel("yChannelSelector"),
        "zoomandpan" => camel("zoomAndPan"),
        _ => None,
    });
}

fn adjust_mathml_attributes(tag: &mut Tag) {
    adjust_attributes(tag, |k| match k {
        "definitionurl" => camel("definitionURL"),
        _ => None,
    });
}

fn adjust_foreign_attributes(tag: &mut Tag) {
    fn foreign(prefix: Option<&'static str>, ns: Namespace, local: &str) -> Option<QualName> {
        Some(QualName {
            prefix,
            ns: Some(ns),
            local: StrTendril::from(local),
        })
    }

    adjust_attributes(tag, |k| match k {
        "xlink:actuate" => foreign(Some("xlink"), Namespace::XLink, "actuate"),
        "xlink:arcrole" => foreign(Some("xlink"), Namespace::XLink, "arcrole"),
        "xlink:href" => foreign(Some("xlink"), Namespace::XLink, "href"),
        "xlink:role" => foreign(Some("xlink"), Namespace::XLink, "role"),
        "xlink:show" => foreign(Some("xlink"), Namespace::XLink, "show"),
        "xlink:title" => foreign(Some("xlink"), Namespace::XLink, "title"),
        "xlink:type" => foreign(Some("xlink"), Namespace::XLink, "type"),
        "xml:lang" => foreign(Some("xml"), Namespace::Xml, "lang"),
        "xml:space" => foreign(Some("xml"), Namespace::Xml, "space"),
        "xmlns" => foreign(None, Namespace::XmlNs, "xmlns"),
        "xmlns:xlink" => foreign(Some("xmlns"), Namespace::XmlNs, "xlink"),
        _ => None,
    });
}

impl TokenSink for TreeBuilder {
    fn process_token(&mut self, token: tokenizer::Token, offset: usize) -> TokenSinkResult {
        self.current_offset = offset;
        let ignore_lf = mem::replace(&mut self.ignore_lf, false);

        // Handle `ParseError` and `Doctype`; convert everything else to
        // the local `Token` type.
        let token = match token {
            tokenizer::Token::ParseError(kind) => {
                self.errors.push(ParseError::new(kind, offset));
                return TokenSinkResult::Continue;
            },

            tokenizer::Token::Doctype(dt) => {
                if self.mode == InsertionMode::Initial {
                    let (err, quirk) = data::doctype_error_and_quirks(&dt, self.opts.iframe_srcdoc);
                    if err {
                        self.parse_error(ErrorKind::UnexpectedToken, "bad DOCTYPE");
                    }
                    let Doctype {
                        name,
                        public_id,
                        system_id,
                        force_quirks: _,
                    } = dt;
                    if !self.opts.drop_doctype {
                        let node = self.doc.create_doctype(
                            name.unwrap_or_default(),
                            public_id.unwrap_or_default(),
                            system_id.unwrap_or_default(),
                        );
                        self.doc.append(NodeId::DOCUMENT, node);
                    }
                    self.set_quirks_mode(quirk);

                    self.mode = InsertionMode::BeforeHtml;
                } else {
                    self.parse_error(ErrorKind::UnexpectedToken, "DOCTYPE in body");
                }
                return TokenSinkResult::Continue;
            },

            tokenizer::Token::Tag(x) => Token::Tag(x),
            tokenizer::Token::Comment(x) => Token::Comment(x),
            tokenizer::Token::Eof => Token::Eof,

            tokenizer::Token::Character(c) => {
                if ignore_lf && c == '\n' {
                    return TokenSinkResult::Continue;
                }
                Token::Character(c)
            },
        };

        self.process_to_completion(token)
    }

    fn end(&mut self) {
        self.open_elems.clear();
    }

    fn adjusted_current_node_present_but_not_in_html_namespace(&self) -> bool {
        !self.open_elems.is_empty()
            && self.elem_ns_name(self.adjusted_current_node()).0 != Namespace::Html
    }
}
