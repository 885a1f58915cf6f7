// Copyright 2026 The html5oak Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Behavior of the public `tokenize` entry point: token shapes, error
//! codes, and their relative order.

use html5oak::{tokenize, ErrorKind, TagKind, Token};

fn text_of(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter_map(|t| match t {
            Token::Character(c) => Some(*c),
            _ => None,
        })
        .collect()
}

fn tags_of(tokens: &[Token]) -> Vec<(TagKind, String)> {
    tokens
        .iter()
        .filter_map(|t| match t {
            Token::Tag(tag) => Some((tag.kind, tag.name.to_string())),
            _ => None,
        })
        .collect()
}

#[test]
fn tokens_and_errors_are_split() {
    let (tokens, errors) = tokenize("<p>Test</p attr>");
    assert!(tokens
        .iter()
        .all(|t| !matches!(t, Token::ParseError(_))));
    assert_eq!(
        tags_of(&tokens),
        vec![
            (TagKind::StartTag, "p".to_string()),
            (TagKind::EndTag, "p".to_string()),
        ]
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::EndTagWithAttributes);
}

#[test]
fn character_tokens_carry_one_scalar_each() {
    let (tokens, _) = tokenize("ab");
    assert_eq!(
        tokens,
        vec![
            Token::Character('a'),
            Token::Character('b'),
            Token::Eof,
        ]
    );
}

#[test]
fn token_stream_ends_with_exactly_one_eof() {
    for input in ["", "x", "<div>", "<!-- unterminated", "&am"] {
        let (tokens, _) = tokenize(input);
        assert_eq!(tokens.last(), Some(&Token::Eof), "input {input:?}");
        let eof_count = tokens.iter().filter(|t| **t == Token::Eof).count();
        assert_eq!(eof_count, 1, "input {input:?}");
    }
}

#[test]
fn errors_preserve_emission_order() {
    let (_, errors) = tokenize("\u{1}<p x=1 x=2>&#0;");
    let kinds: Vec<ErrorKind> = errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::ControlCharacterInInputStream,
            ErrorKind::DuplicateAttribute,
            ErrorKind::NullCharacterReference,
        ]
    );
}

#[test]
fn error_offsets_are_scalar_positions() {
    let (_, errors) = tokenize("ab&#0;");
    assert_eq!(errors.len(), 1);
    // The error is reported at the ampersand that began the reference.
    assert_eq!(errors[0].offset, Some(2));
}

#[test]
fn doctype_token_shape() {
    let (tokens, errors) = tokenize("<!doctype HTML>");
    let doctype = tokens
        .iter()
        .find_map(|t| match t {
            Token::Doctype(d) => Some(d),
            _ => None,
        })
        .expect("no doctype token");
    assert_eq!(doctype.name.as_deref(), Some("html"));
    assert_eq!(doctype.public_id, None);
    assert_eq!(doctype.system_id, None);
    assert!(!doctype.force_quirks);
    assert!(errors.is_empty());
}

#[test]
fn entity_runs_decode() {
    let (tokens, errors) = tokenize("&NotEqualTilde;&fjlig;");
    assert_eq!(text_of(&tokens), "\u{2242}\u{338}fj");
    assert!(errors.is_empty());
}

#[test]
fn eof_in_comment() {
    let (tokens, errors) = tokenize("<!-- never closed");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::EofInComment);
    assert!(tokens
        .iter()
        .any(|t| matches!(t, Token::Comment(c) if &**c == " never closed")));
}

#[test]
fn cdata_outside_foreign_content_is_a_bogus_comment() {
    let (tokens, errors) = tokenize("<![CDATA[x]]>");
    assert_eq!(errors[0].kind, ErrorKind::CdataInHtmlContent);
    assert!(tokens
        .iter()
        .any(|t| matches!(t, Token::Comment(c) if &**c == "[CDATA[x]]")));
}

#[test]
fn self_closing_flag_is_reported() {
    let (tokens, _) = tokenize("<br/>");
    match &tokens[0] {
        Token::Tag(tag) => {
            assert_eq!(tag.kind, TagKind::StartTag);
            assert!(tag.self_closing);
        },
        other => panic!("expected a tag, got {other:?}"),
    }
}

#[test]
fn solitary_ampersand_is_literal() {
    let (tokens, errors) = tokenize("fish & chips");
    assert_eq!(text_of(&tokens), "fish & chips");
    assert!(errors.is_empty());
}
