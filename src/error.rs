// Copyright 2026 The html5oak Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parse error codes.
//!
//! Parse errors are diagnostics, not failures: the parser always produces
//! a document. Each tokenizer-stage error carries one of the codes named
//! by the WHATWG spec, spelled here exactly as the spec spells them
//! (`unexpected-null-character` and so on). Tree-construction-stage
//! recovery errors have no names in the spec and are reported as
//! [`ErrorKind::UnexpectedToken`].

use std::fmt;
use std::str::FromStr;

macro_rules! error_kinds {
    ($( $string:literal => $variant:ident, )*) => {
        /// A parse error code.
        ///
        /// The named variants are the [WHATWG parse errors]
        /// (https://html.spec.whatwg.org/multipage/parsing.html#parse-errors).
        #[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Debug)]
        pub enum ErrorKind {
            $( $variant, )*
            /// A tree-construction-stage recovery error. The spec calls
            /// these simply "parse error" without assigning a code.
            UnexpectedToken,
        }

        impl ErrorKind {
            /// The spec's spelling of this error code.
            pub fn as_str(&self) -> &'static str {
                match *self {
                    $( ErrorKind::$variant => $string, )*
                    ErrorKind::UnexpectedToken => "unexpected-token",
                }
            }
        }

        impl FromStr for ErrorKind {
            type Err = ();

            fn from_str(s: &str) -> Result<ErrorKind, ()> {
                match s {
                    $( $string => Ok(ErrorKind::$variant), )*
                    "unexpected-token" => Ok(ErrorKind::UnexpectedToken),
                    _ => Err(()),
                }
            }
        }
    };
}

error_kinds! {
    "abrupt-closing-of-empty-comment" => AbruptClosingOfEmptyComment,
    "abrupt-doctype-public-identifier" => AbruptDoctypePublicIdentifier,
    "abrupt-doctype-system-identifier" => AbruptDoctypeSystemIdentifier,
    "absence-of-digits-in-numeric-character-reference" => AbsenceOfDigitsInNumericCharacterReference,
    "cdata-in-html-content" => CdataInHtmlContent,
    "character-reference-outside-unicode-range" => CharacterReferenceOutsideUnicodeRange,
    "control-character-in-input-stream" => ControlCharacterInInputStream,
    "control-character-reference" => ControlCharacterReference,
    "duplicate-attribute" => DuplicateAttribute,
    "end-tag-with-attributes" => EndTagWithAttributes,
    "end-tag-with-trailing-solidus" => EndTagWithTrailingSolidus,
    "eof-before-tag-name" => EofBeforeTagName,
    "eof-in-cdata" => EofInCdata,
    "eof-in-comment" => EofInComment,
    "eof-in-doctype" => EofInDoctype,
    "eof-in-script-html-comment-like-text" => EofInScriptHtmlCommentLikeText,
    "eof-in-tag" => EofInTag,
    "incorrectly-closed-comment" => IncorrectlyClosedComment,
    "incorrectly-opened-comment" => IncorrectlyOpenedComment,
    "invalid-character-sequence-after-doctype-name" => InvalidCharacterSequenceAfterDoctypeName,
    "invalid-first-character-of-tag-name" => InvalidFirstCharacterOfTagName,
    "missing-attribute-value" => MissingAttributeValue,
    "missing-doctype-name" => MissingDoctypeName,
    "missing-doctype-public-identifier" => MissingDoctypePublicIdentifier,
    "missing-doctype-system-identifier" => MissingDoctypeSystemIdentifier,
    "missing-end-tag-name" => MissingEndTagName,
    "missing-quote-before-doctype-public-identifier" => MissingQuoteBeforeDoctypePublicIdentifier,
    "missing-quote-before-doctype-system-identifier" => MissingQuoteBeforeDoctypeSystemIdentifier,
    "missing-semicolon-after-character-reference" => MissingSemicolonAfterCharacterReference,
    "missing-whitespace-after-doctype-public-keyword" => MissingWhitespaceAfterDoctypePublicKeyword,
    "missing-whitespace-after-doctype-system-keyword" => MissingWhitespaceAfterDoctypeSystemKeyword,
    "missing-whitespace-before-doctype-name" => MissingWhitespaceBeforeDoctypeName,
    "missing-whitespace-between-attributes" => MissingWhitespaceBetweenAttributes,
    "missing-whitespace-between-doctype-public-and-system-identifiers" => MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
    "nested-comment" => NestedComment,
    "noncharacter-character-reference" => NoncharacterCharacterReference,
    "noncharacter-in-input-stream" => NoncharacterInInputStream,
    "non-void-html-element-start-tag-with-trailing-solidus" => NonVoidHtmlElementStartTagWithTrailingSolidus,
    "null-character-reference" => NullCharacterReference,
    "surrogate-character-reference" => SurrogateCharacterReference,
    "surrogate-in-input-stream" => SurrogateInInputStream,
    "unexpected-character-after-doctype-system-identifier" => UnexpectedCharacterAfterDoctypeSystemIdentifier,
    "unexpected-character-in-attribute-name" => UnexpectedCharacterInAttributeName,
    "unexpected-character-in-unquoted-attribute-value" => UnexpectedCharacterInUnquotedAttributeValue,
    "unexpected-equals-sign-before-attribute-name" => UnexpectedEqualsSignBeforeAttributeName,
    "unexpected-null-character" => UnexpectedNullCharacter,
    "unexpected-question-mark-instead-of-tag-name" => UnexpectedQuestionMarkInsteadOfTagName,
    "unexpected-solidus-in-tag" => UnexpectedSolidusInTag,
    "unknown-named-character-reference" => UnknownNamedCharacterReference,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parse error: the code plus, when known, the scalar-value offset into
/// the input at which it was detected.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct ParseError {
    pub kind: ErrorKind,
    pub offset: Option<usize>,
}

impl ParseError {
    pub fn new(kind: ErrorKind, offset: usize) -> ParseError {
        ParseError {
            kind,
            offset: Some(offset),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "{} at offset {}", self.kind, offset),
            None => self.kind.fmt(f),
        }
    }
}

#[cfg(test)]
mod test {
    use super::ErrorKind;

    #[test]
    fn spec_spelling_round_trips() {
        for kind in [
            ErrorKind::UnexpectedNullCharacter,
            ErrorKind::EofInTag,
            ErrorKind::NestedComment,
            ErrorKind::AbruptClosingOfEmptyComment,
            ErrorKind::MissingSemicolonAfterCharacterReference,
        ] {
            assert_eq!(kind.as_str().parse::<ErrorKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!("eof-in-frobnicator".parse::<ErrorKind>().is_err());
    }
}
