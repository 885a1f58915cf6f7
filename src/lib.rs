// Copyright 2026 The html5oak Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A WHATWG-conformant HTML5 parser.
//!
//! The parser is total: any input produces a [`Document`], with malformed
//! constructs repaired per the spec's recovery rules and reported as
//! [`ParseError`]s carrying WHATWG error codes.
//!
//! ```
//! let (doc, errors) = html5oak::parse_with_errors("<!DOCTYPE html><p>Test</p attr>");
//! assert_eq!(errors[0].kind, html5oak::ErrorKind::EndTagWithAttributes);
//! println!("{}", doc.dump());
//! ```
//!
//! The two stages can also be used separately: [`tokenize`] runs only the
//! tokenizer, and [`Tokenizer`]/[`TreeBuilder`] expose the machinery for
//! callers that need to drive it themselves (the conformance harness
//! does).

pub use crate::dom::{Document, Node, NodeData, NodeId};
pub use crate::error::{ErrorKind, ParseError};
pub use crate::interface::{Attribute, Namespace, QualName, QuirksMode};
pub use crate::serialize::to_html;
pub use crate::tokenizer::{Doctype, Tag, TagKind, Token, Tokenizer, TokenizerOpts};
pub use crate::tree_builder::{TreeBuilder, TreeBuilderOpts};

pub mod dom;
pub mod error;
pub mod input;
pub mod interface;
pub mod serialize;
pub mod tokenizer;
pub mod tree_builder;

mod data;

mod util {
    pub mod str;
}

/// Re-export the tendril crate.
pub mod tendril {
    pub use ::tendril::*;
}

use crate::input::InputStream;
use crate::tokenizer::{TokenSink, TokenSinkResult};

/// Options for [`parse_with_opts`].
#[derive(Clone, Default)]
pub struct ParseOpts {
    /// Enable the scripted content model: the contents of `<noscript>`
    /// parse as raw text instead of markup. Default: false.
    pub scripting: bool,

    /// Parse as a fragment with this context element. Spelled as in
    /// html5lib test files: a bare name is an HTML element; an `svg ` or
    /// `math ` prefix selects the foreign namespace (`"svg title"`,
    /// `"math mi"`).
    pub fragment_context: Option<String>,
}

fn context_name(context: &str) -> (Namespace, &str) {
    if let Some(name) = context.strip_prefix("svg ") {
        (Namespace::Svg, name)
    } else if let Some(name) = context.strip_prefix("math ") {
        (Namespace::MathMl, name)
    } else {
        (Namespace::Html, context)
    }
}

/// Parse a document (or fragment) with explicit options.
pub fn parse_with_opts(input: &str, opts: ParseOpts) -> (Document, Vec<ParseError>) {
    let tb_opts = TreeBuilderOpts {
        scripting_enabled: opts.scripting,
        ..Default::default()
    };

    let (tb, tok_opts) = match opts.fragment_context {
        Some(ref context) => {
            let (ns, name) = context_name(context);
            let tb = TreeBuilder::new_for_fragment(tb_opts, ns, name);
            let tok_opts = TokenizerOpts {
                initial_state: Some(tb.tokenizer_state_for_context_elem(opts.scripting)),
                last_start_tag_name: tb.context_elem_name(),
            };
            (tb, tok_opts)
        },
        None => (TreeBuilder::new(tb_opts), TokenizerOpts::default()),
    };

    let mut tok = Tokenizer::new(tb, tok_opts);
    let mut input = InputStream::new(input);
    tok.run(&mut input);

    let tb = tok.sink;
    (tb.doc, tb.errors)
}

/// Parse a document, discarding the error diagnostics.
pub fn parse(input: &str) -> Document {
    parse_with_opts(input, ParseOpts::default()).0
}

/// Parse a document and return the parse errors alongside it, in
/// emission order.
pub fn parse_with_errors(input: &str) -> (Document, Vec<ParseError>) {
    parse_with_opts(input, ParseOpts::default())
}

/// Parse with the scripting flag set, which changes the `<noscript>`
/// content model.
pub fn parse_with_scripting(input: &str) -> Document {
    parse_with_opts(
        input,
        ParseOpts {
            scripting: true,
            ..Default::default()
        },
    )
    .0
}

/// Parse a fragment with the given context element. The parsed children
/// hang off the `html` root element of the returned document.
pub fn parse_fragment(input: &str, context: &str) -> Document {
    parse_with_opts(
        input,
        ParseOpts {
            fragment_context: Some(context.to_string()),
            ..Default::default()
        },
    )
    .0
}

/// Run the tokenizer alone, from the Data state, and split its output
/// into the token list (terminated by exactly one [`Token::Eof`]) and the
/// error list.
pub fn tokenize(input: &str) -> (Vec<Token>, Vec<ParseError>) {
    struct Collector {
        tokens: Vec<Token>,
        errors: Vec<ParseError>,
    }

    impl TokenSink for Collector {
        fn process_token(&mut self, token: Token, offset: usize) -> TokenSinkResult {
            match token {
                Token::ParseError(kind) => self.errors.push(ParseError::new(kind, offset)),
                token => self.tokens.push(token),
            }
            TokenSinkResult::Continue
        }
    }

    let mut tok = Tokenizer::new(
        Collector {
            tokens: vec![],
            errors: vec![],
        },
        TokenizerOpts::default(),
    );
    let mut input = InputStream::new(input);
    tok.run(&mut input);
    (tok.sink.tokens, tok.sink.errors)
}
