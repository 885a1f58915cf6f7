// Copyright 2026 The html5oak Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Character reference resolution.
//!
//! Named references use longest-match against the WHATWG table: the
//! machine consumes the whole alphanumeric run after the ampersand, then
//! probes progressively shorter prefixes, pushing whatever it did not
//! match back onto the input. Legacy references (no trailing semicolon)
//! match too, except inside attribute values when followed by `=` or an
//! alphanumeric, where the ampersand stays literal.

use crate::data;
use crate::error::ErrorKind;
use crate::input::InputStream;
use crate::tokenizer::{TokenSink, Tokenizer};

use log::debug;

/// One resolved reference: one or two scalar values, or nothing (the
/// ampersand stands for itself).
#[derive(Clone, Copy, Debug)]
pub(super) struct CharRef {
    pub(super) chars: [char; 2],
    pub(super) num_chars: u8,
}

impl CharRef {
    pub(super) const EMPTY: CharRef = CharRef {
        chars: ['\0', '\0'],
        num_chars: 0,
    };

    fn from_expansion(chars: [char; 2]) -> CharRef {
        CharRef {
            chars,
            num_chars: if chars[1] == '\0' { 1 } else { 2 },
        }
    }

    fn single(c: char) -> CharRef {
        CharRef {
            chars: [c, '\0'],
            num_chars: 1,
        }
    }
}

impl<Sink: TokenSink> Tokenizer<Sink> {
    /// Resolve the reference starting after an already-consumed `&`.
    pub(super) fn char_ref(&mut self, input: &mut InputStream) -> CharRef {
        match input.peek() {
            Some(c) if c.is_ascii_alphanumeric() => self.named_char_ref(input),
            Some('#') => {
                input.next();
                self.numeric_char_ref(input)
            },
            // Includes end of input: the ampersand is literal.
            _ => CharRef::EMPTY,
        }
    }

    fn named_char_ref(&mut self, input: &mut InputStream) -> CharRef {
        let in_attr = self.is_consumed_in_attribute();

        let mut name = String::new();
        while let Some(c) = input.peek() {
            if !c.is_ascii_alphanumeric() {
                break;
            }
            input.next();
            name.push(c);
        }
        let has_semicolon = input.peek() == Some(';');
        debug!("named character reference candidate {name:?}");

        // A full match including the semicolon wins outright.
        if has_semicolon && name.len() < data::LONGEST_ENTITY_NAME {
            let mut full = name.clone();
            full.push(';');
            if let Some(expansion) = data::named_entity(&full) {
                input.next();
                return CharRef::from_expansion(expansion);
            }
        }

        // Otherwise the longest legacy prefix, if any.
        let limit = name.len().min(data::LONGEST_ENTITY_NAME);
        for len in (1..=limit).rev() {
            let Some(expansion) = data::named_entity(&name[..len]) else {
                continue;
            };
            let following = if len < name.len() {
                Some(name.as_bytes()[len] as char)
            } else {
                input.peek()
            };
            if in_attr {
                let blocked =
                    matches!(following, Some(c) if c == '=' || c.is_ascii_alphanumeric());
                if blocked {
                    input.push_front(&name);
                    return CharRef::EMPTY;
                }
            }
            self.emit_error(ErrorKind::MissingSemicolonAfterCharacterReference);
            input.push_front(&name[len..]);
            return CharRef::from_expansion(expansion);
        }

        // No match at all. An alphanumeric run closed by a semicolon is an
        // ambiguous ampersand; either way everything goes back on the input.
        if has_semicolon && !name.is_empty() {
            self.emit_error(ErrorKind::UnknownNamedCharacterReference);
        }
        input.push_front(&name);
        CharRef::EMPTY
    }

    fn numeric_char_ref(&mut self, input: &mut InputStream) -> CharRef {
        let hex_marker = match input.peek() {
            Some(c @ ('x' | 'X')) => {
                input.next();
                Some(c)
            },
            _ => None,
        };
        let base: u32 = if hex_marker.is_some() { 16 } else { 10 };

        let mut num: u32 = 0;
        let mut num_too_big = false;
        let mut seen_digit = false;
        while let Some(digit) = input.peek().and_then(|c| c.to_digit(base)) {
            input.next();
            num = num.wrapping_mul(base);
            if num > 0x10FFFF {
                // We might overflow, and the value is definitely invalid.
                // Keep parsing digits but don't use the result.
                num_too_big = true;
            }
            num = num.wrapping_add(digit);
            seen_digit = true;
        }

        if !seen_digit {
            self.emit_error(ErrorKind::AbsenceOfDigitsInNumericCharacterReference);
            match hex_marker {
                Some(marker) => {
                    input.unread(marker);
                    input.unread('#');
                },
                None => input.unread('#'),
            }
            return CharRef::EMPTY;
        }

        match input.peek() {
            Some(';') => {
                input.next();
            },
            _ => self.emit_error(ErrorKind::MissingSemicolonAfterCharacterReference),
        }
        self.finish_numeric(num, num_too_big)
    }

    fn finish_numeric(&mut self, num: u32, num_too_big: bool) -> CharRef {
        fn conv(n: u32) -> char {
            char::from_u32(n).expect("invalid scalar missed by the error cases")
        }

        let (c, error) = match num {
            0x00 => ('\u{fffd}', Some(ErrorKind::NullCharacterReference)),
            _ if num_too_big || num > 0x10FFFF => {
                ('\u{fffd}', Some(ErrorKind::CharacterReferenceOutsideUnicodeRange))
            },
            0xD800..=0xDFFF => ('\u{fffd}', Some(ErrorKind::SurrogateCharacterReference)),
            0x80..=0x9F => {
                let c = data::C1_REPLACEMENTS[(num - 0x80) as usize].unwrap_or(conv(num));
                (c, Some(ErrorKind::ControlCharacterReference))
            },
            n if (n & 0xFFFE) == 0xFFFE || matches!(n, 0xFDD0..=0xFDEF) => {
                (conv(n), Some(ErrorKind::NoncharacterCharacterReference))
            },
            0x01..=0x08 | 0x0B | 0x0D..=0x1F | 0x7F => {
                (conv(num), Some(ErrorKind::ControlCharacterReference))
            },
            n => (conv(n), None),
        };

        if let Some(kind) = error {
            self.emit_error(kind);
        }
        CharRef::single(c)
    }
}
