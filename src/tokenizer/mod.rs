// Copyright 2026 The html5oak Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The HTML5 tokenizer.

pub use self::interface::{Doctype, Tag, TagKind, Token};
pub use self::interface::{EndTag, StartTag};
pub use self::interface::{TokenSink, TokenSinkResult};

use self::char_ref::CharRef;
use self::states::{DoubleEscaped, Escaped};
use self::states::{DoubleQuoted, SingleQuoted, Unquoted};
use self::states::{Public, System};
use self::states::{Rawtext, Rcdata, ScriptData, ScriptDataEscaped};

use crate::error::ErrorKind;
use crate::input::InputStream;
use crate::interface::{Attribute, QualName};
use crate::tendril::StrTendril;
use crate::util::str::{is_noncharacter, is_stray_control, lower_ascii_letter};

use log::trace;
use mac::unwrap_or_return;
use std::mem;

mod char_ref;
mod interface;
pub mod states;

/// Whether the state machine can keep stepping or has exhausted the input.
enum ProcessResult {
    Continue,
    Suspend,
}

fn missing_doctype_id_error(kind: states::DoctypeIdKind) -> ErrorKind {
    match kind {
        Public => ErrorKind::MissingDoctypePublicIdentifier,
        System => ErrorKind::MissingDoctypeSystemIdentifier,
    }
}

fn missing_quote_doctype_id_error(kind: states::DoctypeIdKind) -> ErrorKind {
    match kind {
        Public => ErrorKind::MissingQuoteBeforeDoctypePublicIdentifier,
        System => ErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier,
    }
}

fn abrupt_doctype_id_error(kind: states::DoctypeIdKind) -> ErrorKind {
    match kind {
        Public => ErrorKind::AbruptDoctypePublicIdentifier,
        System => ErrorKind::AbruptDoctypeSystemIdentifier,
    }
}

fn missing_whitespace_after_doctype_keyword_error(kind: states::DoctypeIdKind) -> ErrorKind {
    match kind {
        Public => ErrorKind::MissingWhitespaceAfterDoctypePublicKeyword,
        System => ErrorKind::MissingWhitespaceAfterDoctypeSystemKeyword,
    }
}

fn option_push(opt_str: &mut Option<StrTendril>, c: char) {
    match *opt_str {
        Some(ref mut s) => s.push_char(c),
        None => *opt_str = Some(StrTendril::from_char(c)),
    }
}

/// Tokenizer options, with an impl for `Default`.
#[derive(Clone, Default)]
pub struct TokenizerOpts {
    /// Initial state override. Only the test runner and the fragment
    /// parsing algorithm should use a non-`None` value.
    pub initial_state: Option<states::State>,

    /// Last start tag, seeding the "appropriate end tag" check. Only the
    /// test runner and the fragment parsing algorithm should use a
    /// non-`None` value.
    pub last_start_tag_name: Option<String>,
}

/// The HTML tokenizer.
pub struct Tokenizer<Sink> {
    /// Destination for tokens we emit.
    pub sink: Sink,

    /// The abstract machine state as described in the spec.
    state: states::State,

    /// Offset of the most recently consumed scalar, reported with tokens
    /// and errors.
    current_offset: usize,

    /// Discard a U+FEFF BYTE ORDER MARK if we see one? Only done at the
    /// beginning of the stream.
    discard_bom: bool,

    /// Current input character. Just consumed, may reconsume.
    current_char: char,

    /// Should we reconsume the current input character?
    reconsume: bool,

    /// Current tag kind.
    current_tag_kind: TagKind,

    /// Current tag name.
    current_tag_name: StrTendril,

    /// Current tag is self-closing?
    current_tag_self_closing: bool,

    /// Current tag attributes.
    current_tag_attrs: Vec<Attribute>,

    /// Current attribute name.
    current_attr_name: StrTendril,

    /// Current attribute value.
    current_attr_value: StrTendril,

    /// Current comment.
    current_comment: StrTendril,

    /// Current doctype token.
    current_doctype: Doctype,

    /// Last start tag name, for use in checking "appropriate end tag".
    last_start_tag_name: Option<StrTendril>,

    /// The "temporary buffer" mentioned in the spec.
    temp_buf: StrTendril,
}

impl<Sink: TokenSink> Tokenizer<Sink> {
    /// Create a new tokenizer which feeds tokens to a particular `TokenSink`.
    pub fn new(sink: Sink, mut opts: TokenizerOpts) -> Tokenizer<Sink> {
        let start_tag_name = opts
            .last_start_tag_name
            .take()
            .map(|s| StrTendril::from(&*s));
        let state = opts.initial_state.unwrap_or(states::Data);
        Tokenizer {
            sink,
            state,
            current_offset: 0,
            discard_bom: true,
            current_char: '\0',
            reconsume: false,
            current_tag_kind: StartTag,
            current_tag_name: StrTendril::new(),
            current_tag_self_closing: false,
            current_tag_attrs: vec![],
            current_attr_name: StrTendril::new(),
            current_attr_value: StrTendril::new(),
            current_comment: StrTendril::new(),
            current_doctype: Doctype::default(),
            last_start_tag_name: start_tag_name,
            temp_buf: StrTendril::new(),
        }
    }

    /// Run the machine over the whole input, then apply the EOF rules and
    /// notify the sink that tokenization is over.
    pub fn run(&mut self, input: &mut InputStream) {
        if self.discard_bom {
            self.discard_bom = false;
            if input.peek() == Some('\u{feff}') {
                input.next();
            }
        }
        while let ProcessResult::Continue = self.step(input) {}

        self.current_offset = input.offset();
        loop {
            match self.eof_step() {
                ProcessResult::Continue => (),
                ProcessResult::Suspend => break,
            }
        }
        self.sink.end();
    }

    fn process_token(&mut self, token: Token) -> TokenSinkResult {
        self.sink.process_token(token, self.current_offset)
    }

    fn process_token_and_continue(&mut self, token: Token) {
        assert!(matches!(
            self.process_token(token),
            TokenSinkResult::Continue
        ));
    }

    //§ preprocessing-the-input-stream
    // Flag noncharacters and stray controls as the stream delivers them.
    // Surrogates cannot occur: the input arrived as &str. Newline folding
    // already happened inside the InputStream.
    fn get_preprocessed_char(&mut self, c: char) -> char {
        if is_noncharacter(c) {
            self.emit_error(ErrorKind::NoncharacterInInputStream);
        } else if is_stray_control(c) {
            self.emit_error(ErrorKind::ControlCharacterInInputStream);
        }
        trace!("got character {c:?}");
        self.current_char = c;
        c
    }

    //§ tokenization
    // Get the next input character, if one is available.
    fn get_char(&mut self, input: &mut InputStream) -> Option<char> {
        if self.reconsume {
            self.reconsume = false;
            Some(self.current_char)
        } else {
            let offset = input.offset();
            let c = input.next()?;
            self.current_offset = offset;
            Some(self.get_preprocessed_char(c))
        }
    }

    fn peek(&mut self, input: &mut InputStream) -> Option<char> {
        if self.reconsume {
            Some(self.current_char)
        } else {
            input.peek()
        }
    }

    fn discard_char(&mut self, input: &mut InputStream) {
        if self.reconsume {
            self.reconsume = false;
        } else {
            input.next();
        }
    }

    fn emit_error(&mut self, kind: ErrorKind) {
        self.process_token_and_continue(Token::ParseError(kind));
    }

    fn emit_char(&mut self, c: char) {
        self.process_token_and_continue(Token::Character(c));
    }

    fn emit_current_tag(&mut self) -> ProcessResult {
        self.finish_attribute();

        let name = mem::take(&mut self.current_tag_name);
        match self.current_tag_kind {
            StartTag => {
                self.last_start_tag_name = Some(name.clone());
            },
            EndTag => {
                if !self.current_tag_attrs.is_empty() {
                    self.emit_error(ErrorKind::EndTagWithAttributes);
                }
                if self.current_tag_self_closing {
                    self.emit_error(ErrorKind::EndTagWithTrailingSolidus);
                }
            },
        }

        let token = Token::Tag(Tag {
            kind: self.current_tag_kind,
            name,
            self_closing: self.current_tag_self_closing,
            attrs: mem::take(&mut self.current_tag_attrs),
        });

        match self.process_token(token) {
            TokenSinkResult::Continue => ProcessResult::Continue,
            TokenSinkResult::Plaintext => {
                self.state = states::Plaintext;
                ProcessResult::Continue
            },
            TokenSinkResult::RawData(kind) => {
                self.state = states::RawData(kind);
                ProcessResult::Continue
            },
        }
    }

    fn emit_temp_buf(&mut self) {
        let buf = mem::take(&mut self.temp_buf);
        for c in buf.chars() {
            self.emit_char(c);
        }
    }

    fn emit_current_comment(&mut self) {
        let comment = mem::take(&mut self.current_comment);
        self.process_token_and_continue(Token::Comment(comment));
    }

    fn emit_current_doctype(&mut self) {
        let doctype = mem::take(&mut self.current_doctype);
        self.process_token_and_continue(Token::Doctype(doctype));
    }

    fn emit_eof(&mut self) {
        self.process_token_and_continue(Token::Eof);
    }

    fn discard_tag(&mut self) {
        self.current_tag_name.clear();
        self.current_tag_self_closing = false;
        self.current_tag_attrs = vec![];
    }

    fn create_tag(&mut self, kind: TagKind, c: char) {
        self.discard_tag();
        self.current_tag_name.push_char(c);
        self.current_tag_kind = kind;
    }

    fn have_appropriate_end_tag(&self) -> bool {
        match self.last_start_tag_name.as_ref() {
            Some(last) => {
                (self.current_tag_kind == EndTag) && (*self.current_tag_name == **last)
            },
            None => false,
        }
    }

    fn create_attribute(&mut self, c: char) {
        self.finish_attribute();
        self.current_attr_name.push_char(c);
    }

    fn finish_attribute(&mut self) {
        if self.current_attr_name.is_empty() {
            return;
        }

        // Check for a duplicate attribute. The first occurrence wins; this
        // one is dropped.
        let dup = {
            let name = &*self.current_attr_name;
            self.current_tag_attrs
                .iter()
                .any(|a| &*a.name.local == name)
        };

        if dup {
            self.emit_error(ErrorKind::DuplicateAttribute);
            self.current_attr_name.clear();
            self.current_attr_value.clear();
        } else {
            let name = mem::take(&mut self.current_attr_name);
            self.current_tag_attrs.push(Attribute {
                // The tree builder will adjust the namespace if necessary.
                // This only happens in foreign elements.
                name: QualName::plain(name),
                value: mem::take(&mut self.current_attr_value),
            });
        }
    }

    fn doctype_id(&mut self, kind: states::DoctypeIdKind) -> &mut Option<StrTendril> {
        match kind {
            Public => &mut self.current_doctype.public_id,
            System => &mut self.current_doctype.system_id,
        }
    }

    fn clear_doctype_id(&mut self, kind: states::DoctypeIdKind) {
        let id = self.doctype_id(kind);
        match *id {
            Some(ref mut s) => s.clear(),
            None => *id = Some(StrTendril::new()),
        }
    }

    fn is_consumed_in_attribute(&self) -> bool {
        matches!(self.state, states::AttributeValue(_))
    }

    fn consume_char_ref(&mut self, input: &mut InputStream) {
        let char_ref = self.char_ref(input);
        self.process_char_ref(char_ref);
    }

    fn process_char_ref(&mut self, char_ref: CharRef) {
        let CharRef {
            mut chars,
            mut num_chars,
        } = char_ref;

        if num_chars == 0 {
            chars[0] = '&';
            num_chars = 1;
        }

        for i in 0..num_chars {
            let c = chars[i as usize];
            match self.state {
                states::Data | states::RawData(states::Rcdata) => self.emit_char(c),
                states::AttributeValue(_) => self.current_attr_value.push_char(c),
                _ => panic!(
                    "state {:?} should not be reachable in process_char_ref",
                    self.state
                ),
            }
        }
    }
}
//§ END

// Shorthand for common state machine behaviors.
macro_rules! shorthand (
    ( $me:ident : emit $c:expr                     ) => ( $me.emit_char($c)                             );
    ( $me:ident : error $kind:ident                ) => ( $me.emit_error(ErrorKind::$kind)              );
    ( $me:ident : create_tag $kind:ident $c:expr   ) => ( $me.create_tag($kind, $c)                     );
    ( $me:ident : push_tag $c:expr                 ) => ( $me.current_tag_name.push_char($c)            );
    ( $me:ident : discard_tag                      ) => ( $me.discard_tag()                             );
    ( $me:ident : discard_char $input:expr         ) => ( $me.discard_char($input)                      );
    ( $me:ident : push_temp $c:expr                ) => ( $me.temp_buf.push_char($c)                    );
    ( $me:ident : clear_temp                       ) => ( $me.temp_buf.clear()                          );
    ( $me:ident : create_attr $c:expr              ) => ( $me.create_attribute($c)                      );
    ( $me:ident : push_name $c:expr                ) => ( $me.current_attr_name.push_char($c)           );
    ( $me:ident : push_value $c:expr               ) => ( $me.current_attr_value.push_char($c)          );
    ( $me:ident : push_comment $c:expr             ) => ( $me.current_comment.push_char($c)             );
    ( $me:ident : append_comment $c:expr           ) => ( $me.current_comment.push_slice($c)            );
    ( $me:ident : emit_comment                     ) => ( $me.emit_current_comment()                    );
    ( $me:ident : clear_comment                    ) => ( $me.current_comment.clear()                   );
    ( $me:ident : create_doctype                   ) => ( $me.current_doctype = Doctype::default()      );
    ( $me:ident : push_doctype_name $c:expr        ) => ( option_push(&mut $me.current_doctype.name, $c) );
    ( $me:ident : push_doctype_id $k:ident $c:expr ) => ( option_push($me.doctype_id($k), $c)           );
    ( $me:ident : clear_doctype_id $k:ident        ) => ( $me.clear_doctype_id($k)                      );
    ( $me:ident : force_quirks                     ) => ( $me.current_doctype.force_quirks = true       );
    ( $me:ident : emit_doctype                     ) => ( $me.emit_current_doctype()                    );
    ( $me:ident : emit_temp                        ) => ( $me.emit_temp_buf()                           );
);

// A little DSL for sequencing shorthand actions.
macro_rules! go (
    // A pattern like $($cmd:tt)* ; $($rest:tt)* causes parse ambiguity.
    // We have to tell the parser how much lookahead we need.

    ( $me:ident : $a:tt                   ; $($rest:tt)* ) => ({ shorthand!($me: $a);          go!($me: $($rest)*); });
    ( $me:ident : $a:tt $b:tt             ; $($rest:tt)* ) => ({ shorthand!($me: $a $b);       go!($me: $($rest)*); });
    ( $me:ident : $a:tt $b:tt $c:tt       ; $($rest:tt)* ) => ({ shorthand!($me: $a $b $c);    go!($me: $($rest)*); });
    ( $me:ident : $a:tt $b:tt $c:tt $d:tt ; $($rest:tt)* ) => ({ shorthand!($me: $a $b $c $d); go!($me: $($rest)*); });

    // These can only come at the end.

    ( $me:ident : to $s:ident                    ) => ({ $me.state = states::$s; return ProcessResult::Continue;           });
    ( $me:ident : to $s:ident $k1:expr           ) => ({ $me.state = states::$s($k1); return ProcessResult::Continue;      });
    ( $me:ident : to $s:ident $k1:ident $k2:expr ) => ({ $me.state = states::$s($k1($k2)); return ProcessResult::Continue; });

    ( $me:ident : reconsume $s:ident                    ) => ({ $me.reconsume = true; go!($me: to $s);         });
    ( $me:ident : reconsume $s:ident $k1:expr           ) => ({ $me.reconsume = true; go!($me: to $s $k1);     });
    ( $me:ident : reconsume $s:ident $k1:ident $k2:expr ) => ({ $me.reconsume = true; go!($me: to $s $k1 $k2); });

    ( $me:ident : consume_char_ref $input:expr ) => ({ $me.consume_char_ref($input); return ProcessResult::Continue; });

    // We have a default next state after emitting a tag, but the sink can override.
    ( $me:ident : emit_tag $s:ident ) => ({
        $me.state = states::$s;
        return $me.emit_current_tag();
    });

    ( $me:ident : eof ) => ({ $me.emit_eof(); return ProcessResult::Suspend; });

    // If nothing else matched, it's a single command
    ( $me:ident : $($cmd:tt)+ ) => ( shorthand!($me: $($cmd)+) );

    // or nothing.
    ( $me:ident : ) => (());
);

// This is a macro because it can cause early return
// from the function where it is used.
macro_rules! get_char ( ($me:expr, $input:expr) => (
    unwrap_or_return!($me.get_char($input), ProcessResult::Suspend)
));

macro_rules! peek ( ($me:expr, $input:expr) => (
    unwrap_or_return!($me.peek($input), ProcessResult::Suspend)
));

impl<Sink: TokenSink> Tokenizer<Sink> {
    #[allow(clippy::never_loop)]
    fn step(&mut self, input: &mut InputStream) -> ProcessResult {
        trace!("processing in state {:?}", self.state);
        match self.state {
            //§ data-state
            states::Data => loop {
                match get_char!(self, input) {
                    '&' => go!(self: consume_char_ref input),
                    '<' => go!(self: to TagOpen),
                    '\0' => go!(self: error UnexpectedNullCharacter; emit '\0'),
                    c => go!(self: emit c),
                }
            },

            //§ rcdata-state
            states::RawData(Rcdata) => loop {
                match get_char!(self, input) {
                    '&' => go!(self: consume_char_ref input),
                    '<' => go!(self: to RawLessThanSign Rcdata),
                    '\0' => go!(self: error UnexpectedNullCharacter; emit '\u{fffd}'),
                    c => go!(self: emit c),
                }
            },

            //§ rawtext-state
            states::RawData(Rawtext) => loop {
                match get_char!(self, input) {
                    '<' => go!(self: to RawLessThanSign Rawtext),
                    '\0' => go!(self: error UnexpectedNullCharacter; emit '\u{fffd}'),
                    c => go!(self: emit c),
                }
            },

            //§ script-data-state
            states::RawData(ScriptData) => loop {
                match get_char!(self, input) {
                    '<' => go!(self: to RawLessThanSign ScriptData),
                    '\0' => go!(self: error UnexpectedNullCharacter; emit '\u{fffd}'),
                    c => go!(self: emit c),
                }
            },

            //§ script-data-escaped-state
            states::RawData(ScriptDataEscaped(Escaped)) => loop {
                match get_char!(self, input) {
                    '-' => go!(self: emit '-'; to ScriptDataEscapedDash Escaped),
                    '<' => go!(self: to RawLessThanSign ScriptDataEscaped Escaped),
                    '\0' => go!(self: error UnexpectedNullCharacter; emit '\u{fffd}'),
                    c => go!(self: emit c),
                }
            },

            //§ script-data-double-escaped-state
            states::RawData(ScriptDataEscaped(DoubleEscaped)) => loop {
                match get_char!(self, input) {
                    '-' => go!(self: emit '-'; to ScriptDataEscapedDash DoubleEscaped),
                    '<' => go!(self: emit '<'; to RawLessThanSign ScriptDataEscaped DoubleEscaped),
                    '\0' => go!(self: error UnexpectedNullCharacter; emit '\u{fffd}'),
                    c => go!(self: emit c),
                }
            },

            //§ plaintext-state
            states::Plaintext => loop {
                match get_char!(self, input) {
                    '\0' => go!(self: error UnexpectedNullCharacter; emit '\u{fffd}'),
                    c => go!(self: emit c),
                }
            },

            //§ tag-open-state
            states::TagOpen => loop {
                match get_char!(self, input) {
                    '!' => go!(self: to MarkupDeclarationOpen),
                    '/' => go!(self: to EndTagOpen),
                    '?' => go!(self: error UnexpectedQuestionMarkInsteadOfTagName; clear_comment;
                                     reconsume BogusComment),
                    c => match lower_ascii_letter(c) {
                        Some(cl) => go!(self: create_tag StartTag cl; to TagName),
                        None => go!(self: error InvalidFirstCharacterOfTagName; emit '<';
                                          reconsume Data),
                    },
                }
            },

            //§ end-tag-open-state
            states::EndTagOpen => loop {
                match get_char!(self, input) {
                    '>' => go!(self: error MissingEndTagName; to Data),
                    c => match lower_ascii_letter(c) {
                        Some(cl) => go!(self: create_tag EndTag cl; to TagName),
                        None => go!(self: error InvalidFirstCharacterOfTagName; clear_comment;
                                          reconsume BogusComment),
                    },
                }
            },

            //§ tag-name-state
            states::TagName => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => go!(self: to BeforeAttributeName),
                    '/' => go!(self: to SelfClosingStartTag),
                    '>' => go!(self: emit_tag Data),
                    '\0' => go!(self: error UnexpectedNullCharacter; push_tag '\u{fffd}'),
                    c => go!(self: push_tag (c.to_ascii_lowercase())),
                }
            },

            //§ script-data-escaped-less-than-sign-state
            states::RawLessThanSign(ScriptDataEscaped(Escaped)) => loop {
                match get_char!(self, input) {
                    '/' => go!(self: clear_temp; to RawEndTagOpen ScriptDataEscaped Escaped),
                    c => match lower_ascii_letter(c) {
                        Some(cl) => go!(self: clear_temp; push_temp cl; emit '<'; emit c;
                                              to ScriptDataEscapeStart DoubleEscaped),
                        None => go!(self: emit '<'; reconsume RawData ScriptDataEscaped Escaped),
                    },
                }
            },

            //§ script-data-double-escaped-less-than-sign-state
            states::RawLessThanSign(ScriptDataEscaped(DoubleEscaped)) => loop {
                match get_char!(self, input) {
                    '/' => go!(self: clear_temp; emit '/'; to ScriptDataDoubleEscapeEnd),
                    _ => go!(self: reconsume RawData ScriptDataEscaped DoubleEscaped),
                }
            },

            //§ rcdata-less-than-sign-state rawtext-less-than-sign-state script-data-less-than-sign-state
            // otherwise
            states::RawLessThanSign(kind) => loop {
                match get_char!(self, input) {
                    '/' => go!(self: clear_temp; to RawEndTagOpen kind),
                    '!' if kind == ScriptData => go!(self: emit '<'; emit '!';
                                                           to ScriptDataEscapeStart Escaped),
                    _ => go!(self: emit '<'; reconsume RawData kind),
                }
            },

            //§ rcdata-end-tag-open-state rawtext-end-tag-open-state script-data-end-tag-open-state script-data-escaped-end-tag-open-state
            states::RawEndTagOpen(kind) => loop {
                let c = get_char!(self, input);
                match lower_ascii_letter(c) {
                    Some(cl) => go!(self: create_tag EndTag cl; push_temp c; to RawEndTagName kind),
                    None => go!(self: emit '<'; emit '/'; reconsume RawData kind),
                }
            },

            //§ rcdata-end-tag-name-state rawtext-end-tag-name-state script-data-end-tag-name-state script-data-escaped-end-tag-name-state
            states::RawEndTagName(kind) => loop {
                let c = get_char!(self, input);
                if self.have_appropriate_end_tag() {
                    match c {
                        '\t' | '\n' | '\x0C' | ' ' => go!(self: clear_temp; to BeforeAttributeName),
                        '/' => go!(self: clear_temp; to SelfClosingStartTag),
                        '>' => go!(self: clear_temp; emit_tag Data),
                        _ => (),
                    }
                }

                match lower_ascii_letter(c) {
                    Some(cl) => go!(self: push_tag cl; push_temp c),
                    None => go!(self: discard_tag; emit '<'; emit '/'; emit_temp;
                                      reconsume RawData kind),
                }
            },

            //§ script-data-double-escape-start-state
            states::ScriptDataEscapeStart(DoubleEscaped) => loop {
                let c = get_char!(self, input);
                match c {
                    '\t' | '\n' | '\x0C' | ' ' | '/' | '>' => {
                        let esc = if &*self.temp_buf == "script" {
                            DoubleEscaped
                        } else {
                            Escaped
                        };
                        go!(self: emit c; to RawData ScriptDataEscaped esc);
                    },
                    _ => match lower_ascii_letter(c) {
                        Some(cl) => go!(self: push_temp cl; emit c),
                        None => go!(self: reconsume RawData ScriptDataEscaped Escaped),
                    },
                }
            },

            //§ script-data-escape-start-state
            states::ScriptDataEscapeStart(Escaped) => loop {
                match get_char!(self, input) {
                    '-' => go!(self: emit '-'; to ScriptDataEscapeStartDash),
                    _ => go!(self: reconsume RawData ScriptData),
                }
            },

            //§ script-data-escape-start-dash-state
            states::ScriptDataEscapeStartDash => loop {
                match get_char!(self, input) {
                    '-' => go!(self: emit '-'; to ScriptDataEscapedDashDash Escaped),
                    _ => go!(self: reconsume RawData ScriptData),
                }
            },

            //§ script-data-escaped-dash-state script-data-double-escaped-dash-state
            states::ScriptDataEscapedDash(kind) => loop {
                match get_char!(self, input) {
                    '-' => go!(self: emit '-'; to ScriptDataEscapedDashDash kind),
                    '<' => {
                        if kind == DoubleEscaped {
                            go!(self: emit '<');
                        }
                        go!(self: to RawLessThanSign ScriptDataEscaped kind);
                    },
                    '\0' => go!(self: error UnexpectedNullCharacter; emit '\u{fffd}';
                                      to RawData ScriptDataEscaped kind),
                    c => go!(self: emit c; to RawData ScriptDataEscaped kind),
                }
            },

            //§ script-data-escaped-dash-dash-state script-data-double-escaped-dash-dash-state
            states::ScriptDataEscapedDashDash(kind) => loop {
                match get_char!(self, input) {
                    '-' => go!(self: emit '-'),
                    '<' => {
                        if kind == DoubleEscaped {
                            go!(self: emit '<');
                        }
                        go!(self: to RawLessThanSign ScriptDataEscaped kind);
                    },
                    '>' => go!(self: emit '>'; to RawData ScriptData),
                    '\0' => go!(self: error UnexpectedNullCharacter; emit '\u{fffd}';
                                      to RawData ScriptDataEscaped kind),
                    c => go!(self: emit c; to RawData ScriptDataEscaped kind),
                }
            },

            //§ script-data-double-escape-end-state
            states::ScriptDataDoubleEscapeEnd => loop {
                let c = get_char!(self, input);
                match c {
                    '\t' | '\n' | '\x0C' | ' ' | '/' | '>' => {
                        let esc = if &*self.temp_buf == "script" {
                            Escaped
                        } else {
                            DoubleEscaped
                        };
                        go!(self: emit c; to RawData ScriptDataEscaped esc);
                    },
                    _ => match lower_ascii_letter(c) {
                        Some(cl) => go!(self: push_temp cl; emit c),
                        None => go!(self: reconsume RawData ScriptDataEscaped DoubleEscaped),
                    },
                }
            },

            //§ before-attribute-name-state
            states::BeforeAttributeName => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '/' => go!(self: to SelfClosingStartTag),
                    '>' => go!(self: emit_tag Data),
                    '=' => go!(self: error UnexpectedEqualsSignBeforeAttributeName;
                                     create_attr '='; to AttributeName),
                    '\0' => go!(self: error UnexpectedNullCharacter; create_attr '\u{fffd}';
                                      to AttributeName),
                    c => match lower_ascii_letter(c) {
                        Some(cl) => go!(self: create_attr cl; to AttributeName),
                        None => {
                            if matches!(c, '"' | '\'' | '<') {
                                go!(self: error UnexpectedCharacterInAttributeName);
                            }
                            go!(self: create_attr c; to AttributeName);
                        },
                    },
                }
            },

            //§ attribute-name-state
            states::AttributeName => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => go!(self: to AfterAttributeName),
                    '/' => go!(self: to SelfClosingStartTag),
                    '=' => go!(self: to BeforeAttributeValue),
                    '>' => go!(self: emit_tag Data),
                    '\0' => go!(self: error UnexpectedNullCharacter; push_name '\u{fffd}'),
                    c => match lower_ascii_letter(c) {
                        Some(cl) => go!(self: push_name cl),
                        None => {
                            if matches!(c, '"' | '\'' | '<') {
                                go!(self: error UnexpectedCharacterInAttributeName);
                            }
                            go!(self: push_name c);
                        },
                    },
                }
            },

            //§ after-attribute-name-state
            states::AfterAttributeName => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '/' => go!(self: to SelfClosingStartTag),
                    '=' => go!(self: to BeforeAttributeValue),
                    '>' => go!(self: emit_tag Data),
                    '\0' => go!(self: error UnexpectedNullCharacter; create_attr '\u{fffd}';
                                      to AttributeName),
                    c => match lower_ascii_letter(c) {
                        Some(cl) => go!(self: create_attr cl; to AttributeName),
                        None => {
                            if matches!(c, '"' | '\'' | '<') {
                                go!(self: error UnexpectedCharacterInAttributeName);
                            }
                            go!(self: create_attr c; to AttributeName);
                        },
                    },
                }
            },

            //§ before-attribute-value-state
            // Use peek so we can handle the first attribute character along
            // with the rest.
            states::BeforeAttributeValue => loop {
                match peek!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => go!(self: discard_char input),
                    '"' => go!(self: discard_char input; to AttributeValue DoubleQuoted),
                    '\'' => go!(self: discard_char input; to AttributeValue SingleQuoted),
                    '>' => go!(self: discard_char input; error MissingAttributeValue;
                                     emit_tag Data),
                    _ => go!(self: to AttributeValue Unquoted),
                }
            },

            //§ attribute-value-(double-quoted)-state
            states::AttributeValue(DoubleQuoted) => loop {
                match get_char!(self, input) {
                    '"' => go!(self: to AfterAttributeValueQuoted),
                    '&' => go!(self: consume_char_ref input),
                    '\0' => go!(self: error UnexpectedNullCharacter; push_value '\u{fffd}'),
                    c => go!(self: push_value c),
                }
            },

            //§ attribute-value-(single-quoted)-state
            states::AttributeValue(SingleQuoted) => loop {
                match get_char!(self, input) {
                    '\'' => go!(self: to AfterAttributeValueQuoted),
                    '&' => go!(self: consume_char_ref input),
                    '\0' => go!(self: error UnexpectedNullCharacter; push_value '\u{fffd}'),
                    c => go!(self: push_value c),
                }
            },

            //§ attribute-value-(unquoted)-state
            states::AttributeValue(Unquoted) => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => go!(self: to BeforeAttributeName),
                    '&' => go!(self: consume_char_ref input),
                    '>' => go!(self: emit_tag Data),
                    '\0' => go!(self: error UnexpectedNullCharacter; push_value '\u{fffd}'),
                    c => {
                        if matches!(c, '"' | '\'' | '<' | '=' | '`') {
                            go!(self: error UnexpectedCharacterInUnquotedAttributeValue);
                        }
                        go!(self: push_value c);
                    },
                }
            },

            //§ after-attribute-value-(quoted)-state
            states::AfterAttributeValueQuoted => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => go!(self: to BeforeAttributeName),
                    '/' => go!(self: to SelfClosingStartTag),
                    '>' => go!(self: emit_tag Data),
                    _ => go!(self: error MissingWhitespaceBetweenAttributes;
                                   reconsume BeforeAttributeName),
                }
            },

            //§ self-closing-start-tag-state
            states::SelfClosingStartTag => loop {
                match get_char!(self, input) {
                    '>' => {
                        self.current_tag_self_closing = true;
                        go!(self: emit_tag Data);
                    },
                    _ => go!(self: error UnexpectedSolidusInTag; reconsume BeforeAttributeName),
                }
            },

            //§ bogus-comment-state
            states::BogusComment => loop {
                match get_char!(self, input) {
                    '>' => go!(self: emit_comment; to Data),
                    '\0' => go!(self: error UnexpectedNullCharacter; push_comment '\u{fffd}'),
                    c => go!(self: push_comment c),
                }
            },

            //§ markup-declaration-open-state
            states::MarkupDeclarationOpen => loop {
                if input.eat("--", u8::eq) {
                    go!(self: clear_comment; to CommentStart);
                } else if input.eat("doctype", u8::eq_ignore_ascii_case) {
                    go!(self: to Doctype);
                } else if input.eat("[CDATA[", u8::eq) {
                    if self
                        .sink
                        .adjusted_current_node_present_but_not_in_html_namespace()
                    {
                        go!(self: to CdataSection);
                    }
                    go!(self: error CdataInHtmlContent; clear_comment;
                              append_comment "[CDATA["; to BogusComment);
                } else {
                    go!(self: error IncorrectlyOpenedComment; clear_comment; to BogusComment);
                }
            },

            //§ comment-start-state
            states::CommentStart => loop {
                match get_char!(self, input) {
                    '-' => go!(self: to CommentStartDash),
                    '>' => go!(self: error AbruptClosingOfEmptyComment; emit_comment; to Data),
                    _ => go!(self: reconsume Comment),
                }
            },

            //§ comment-start-dash-state
            states::CommentStartDash => loop {
                match get_char!(self, input) {
                    '-' => go!(self: to CommentEnd),
                    '>' => go!(self: error AbruptClosingOfEmptyComment; emit_comment; to Data),
                    _ => go!(self: push_comment '-'; reconsume Comment),
                }
            },

            //§ comment-state
            states::Comment => loop {
                match get_char!(self, input) {
                    c @ '<' => go!(self: push_comment c; to CommentLessThanSign),
                    '-' => go!(self: to CommentEndDash),
                    '\0' => go!(self: error UnexpectedNullCharacter; push_comment '\u{fffd}'),
                    c => go!(self: push_comment c),
                }
            },

            //§ comment-less-than-sign-state
            states::CommentLessThanSign => loop {
                match get_char!(self, input) {
                    c @ '!' => go!(self: push_comment c; to CommentLessThanSignBang),
                    c @ '<' => go!(self: push_comment c),
                    _ => go!(self: reconsume Comment),
                }
            },

            //§ comment-less-than-sign-bang-state
            states::CommentLessThanSignBang => loop {
                match get_char!(self, input) {
                    '-' => go!(self: to CommentLessThanSignBangDash),
                    _ => go!(self: reconsume Comment),
                }
            },

            //§ comment-less-than-sign-bang-dash-state
            states::CommentLessThanSignBangDash => loop {
                match get_char!(self, input) {
                    '-' => go!(self: to CommentLessThanSignBangDashDash),
                    _ => go!(self: reconsume CommentEndDash),
                }
            },

            //§ comment-less-than-sign-bang-dash-dash-state
            states::CommentLessThanSignBangDashDash => loop {
                match get_char!(self, input) {
                    '>' => go!(self: reconsume CommentEnd),
                    _ => go!(self: error NestedComment; reconsume CommentEnd),
                }
            },

            //§ comment-end-dash-state
            states::CommentEndDash => loop {
                match get_char!(self, input) {
                    '-' => go!(self: to CommentEnd),
                    _ => go!(self: push_comment '-'; reconsume Comment),
                }
            },

            //§ comment-end-state
            states::CommentEnd => loop {
                match get_char!(self, input) {
                    '>' => go!(self: emit_comment; to Data),
                    '!' => go!(self: to CommentEndBang),
                    '-' => go!(self: push_comment '-'),
                    _ => go!(self: append_comment "--"; reconsume Comment),
                }
            },

            //§ comment-end-bang-state
            states::CommentEndBang => loop {
                match get_char!(self, input) {
                    '-' => go!(self: append_comment "--!"; to CommentEndDash),
                    '>' => go!(self: error IncorrectlyClosedComment; emit_comment; to Data),
                    _ => go!(self: append_comment "--!"; reconsume Comment),
                }
            },

            //§ doctype-state
            states::Doctype => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => go!(self: to BeforeDoctypeName),
                    '>' => go!(self: reconsume BeforeDoctypeName),
                    _ => go!(self: error MissingWhitespaceBeforeDoctypeName;
                                   reconsume BeforeDoctypeName),
                }
            },

            //§ before-doctype-name-state
            states::BeforeDoctypeName => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '\0' => go!(self: error UnexpectedNullCharacter; create_doctype;
                                      push_doctype_name '\u{fffd}'; to DoctypeName),
                    '>' => go!(self: error MissingDoctypeName; create_doctype; force_quirks;
                                     emit_doctype; to Data),
                    c => go!(self: create_doctype; push_doctype_name (c.to_ascii_lowercase());
                                   to DoctypeName),
                }
            },

            //§ doctype-name-state
            states::DoctypeName => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => go!(self: to AfterDoctypeName),
                    '>' => go!(self: emit_doctype; to Data),
                    '\0' => go!(self: error UnexpectedNullCharacter;
                                      push_doctype_name '\u{fffd}'),
                    c => go!(self: push_doctype_name (c.to_ascii_lowercase())),
                }
            },

            //§ after-doctype-name-state
            states::AfterDoctypeName => loop {
                if input.eat("public", u8::eq_ignore_ascii_case) {
                    go!(self: to AfterDoctypeKeyword Public);
                } else if input.eat("system", u8::eq_ignore_ascii_case) {
                    go!(self: to AfterDoctypeKeyword System);
                } else {
                    match get_char!(self, input) {
                        '\t' | '\n' | '\x0C' | ' ' => (),
                        '>' => go!(self: emit_doctype; to Data),
                        _ => go!(self: error InvalidCharacterSequenceAfterDoctypeName;
                                       force_quirks; reconsume BogusDoctype),
                    }
                }
            },

            //§ after-doctype-public-keyword-state after-doctype-system-keyword-state
            states::AfterDoctypeKeyword(kind) => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => go!(self: to BeforeDoctypeIdentifier kind),
                    '"' => {
                        self.emit_error(missing_whitespace_after_doctype_keyword_error(kind));
                        go!(self: clear_doctype_id kind; to DoctypeIdentifierDoubleQuoted kind);
                    },
                    '\'' => {
                        self.emit_error(missing_whitespace_after_doctype_keyword_error(kind));
                        go!(self: clear_doctype_id kind; to DoctypeIdentifierSingleQuoted kind);
                    },
                    '>' => {
                        self.emit_error(missing_doctype_id_error(kind));
                        go!(self: force_quirks; emit_doctype; to Data);
                    },
                    _ => {
                        self.emit_error(missing_quote_doctype_id_error(kind));
                        go!(self: force_quirks; reconsume BogusDoctype);
                    },
                }
            },

            //§ before-doctype-public-identifier-state before-doctype-system-identifier-state
            states::BeforeDoctypeIdentifier(kind) => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '"' => go!(self: clear_doctype_id kind; to DoctypeIdentifierDoubleQuoted kind),
                    '\'' => go!(self: clear_doctype_id kind; to DoctypeIdentifierSingleQuoted kind),
                    '>' => {
                        self.emit_error(missing_doctype_id_error(kind));
                        go!(self: force_quirks; emit_doctype; to Data);
                    },
                    _ => {
                        self.emit_error(missing_quote_doctype_id_error(kind));
                        go!(self: force_quirks; reconsume BogusDoctype);
                    },
                }
            },

            //§ doctype-public-identifier-(double-quoted)-state doctype-system-identifier-(double-quoted)-state
            states::DoctypeIdentifierDoubleQuoted(kind) => loop {
                match get_char!(self, input) {
                    '"' => go!(self: to AfterDoctypeIdentifier kind),
                    '\0' => go!(self: error UnexpectedNullCharacter;
                                      push_doctype_id kind '\u{fffd}'),
                    '>' => {
                        self.emit_error(abrupt_doctype_id_error(kind));
                        go!(self: force_quirks; emit_doctype; to Data);
                    },
                    c => go!(self: push_doctype_id kind c),
                }
            },

            //§ doctype-public-identifier-(single-quoted)-state doctype-system-identifier-(single-quoted)-state
            states::DoctypeIdentifierSingleQuoted(kind) => loop {
                match get_char!(self, input) {
                    '\'' => go!(self: to AfterDoctypeIdentifier kind),
                    '\0' => go!(self: error UnexpectedNullCharacter;
                                      push_doctype_id kind '\u{fffd}'),
                    '>' => {
                        self.emit_error(abrupt_doctype_id_error(kind));
                        go!(self: force_quirks; emit_doctype; to Data);
                    },
                    c => go!(self: push_doctype_id kind c),
                }
            },

            //§ after-doctype-public-identifier-state
            states::AfterDoctypeIdentifier(Public) => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => {
                        go!(self: to BetweenDoctypePublicAndSystemIdentifiers)
                    },
                    '>' => go!(self: emit_doctype; to Data),
                    '"' => go!(self: error MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers;
                                     clear_doctype_id System;
                                     to DoctypeIdentifierDoubleQuoted System),
                    '\'' => go!(self: error MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers;
                                      clear_doctype_id System;
                                      to DoctypeIdentifierSingleQuoted System),
                    _ => go!(self: error MissingQuoteBeforeDoctypeSystemIdentifier; force_quirks;
                                   reconsume BogusDoctype),
                }
            },

            //§ after-doctype-system-identifier-state
            states::AfterDoctypeIdentifier(System) => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '>' => go!(self: emit_doctype; to Data),
                    _ => go!(self: error UnexpectedCharacterAfterDoctypeSystemIdentifier;
                                   reconsume BogusDoctype),
                }
            },

            //§ between-doctype-public-and-system-identifiers-state
            states::BetweenDoctypePublicAndSystemIdentifiers => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '>' => go!(self: emit_doctype; to Data),
                    '"' => go!(self: clear_doctype_id System;
                                     to DoctypeIdentifierDoubleQuoted System),
                    '\'' => go!(self: clear_doctype_id System;
                                      to DoctypeIdentifierSingleQuoted System),
                    _ => go!(self: error MissingQuoteBeforeDoctypeSystemIdentifier; force_quirks;
                                   reconsume BogusDoctype),
                }
            },

            //§ bogus-doctype-state
            states::BogusDoctype => loop {
                match get_char!(self, input) {
                    '>' => go!(self: emit_doctype; to Data),
                    '\0' => go!(self: error UnexpectedNullCharacter),
                    _ => (),
                }
            },

            //§ cdata-section-state
            states::CdataSection => loop {
                match get_char!(self, input) {
                    ']' => go!(self: to CdataSectionBracket),
                    c => go!(self: emit c),
                }
            },

            //§ cdata-section-bracket-state
            states::CdataSectionBracket => loop {
                match get_char!(self, input) {
                    ']' => go!(self: to CdataSectionEnd),
                    _ => go!(self: emit ']'; reconsume CdataSection),
                }
            },

            //§ cdata-section-end-state
            states::CdataSectionEnd => loop {
                match get_char!(self, input) {
                    ']' => go!(self: emit ']'),
                    '>' => go!(self: to Data),
                    _ => go!(self: emit ']'; emit ']'; reconsume CdataSection),
                }
            },
            //§ END
        }
    }

    fn eof_step(&mut self) -> ProcessResult {
        trace!("processing EOF in state {:?}", self.state);
        match self.state {
            states::Data
            | states::RawData(Rcdata)
            | states::RawData(Rawtext)
            | states::RawData(ScriptData)
            | states::Plaintext => go!(self: eof),

            states::TagName
            | states::BeforeAttributeName
            | states::AttributeName
            | states::AfterAttributeName
            | states::AttributeValue(_)
            | states::AfterAttributeValueQuoted
            | states::SelfClosingStartTag => go!(self: error EofInTag; to Data),

            states::BeforeAttributeValue => go!(self: reconsume AttributeValue Unquoted),

            states::RawData(ScriptDataEscaped(_))
            | states::ScriptDataEscapedDash(_)
            | states::ScriptDataEscapedDashDash(_) => {
                go!(self: error EofInScriptHtmlCommentLikeText; to Data)
            },

            states::TagOpen => go!(self: error EofBeforeTagName; emit '<'; to Data),

            states::EndTagOpen => go!(self: error EofBeforeTagName; emit '<'; emit '/'; to Data),

            states::RawLessThanSign(ScriptDataEscaped(DoubleEscaped)) => {
                go!(self: to RawData ScriptDataEscaped DoubleEscaped)
            },

            states::RawLessThanSign(kind) => go!(self: emit '<'; to RawData kind),

            states::RawEndTagOpen(kind) => go!(self: emit '<'; emit '/'; to RawData kind),

            states::RawEndTagName(kind) => {
                go!(self: discard_tag; emit '<'; emit '/'; emit_temp; to RawData kind)
            },

            states::ScriptDataEscapeStart(DoubleEscaped) => {
                go!(self: to RawData ScriptDataEscaped Escaped)
            },

            states::ScriptDataEscapeStart(Escaped) | states::ScriptDataEscapeStartDash => {
                go!(self: to RawData ScriptData)
            },

            states::ScriptDataDoubleEscapeEnd => {
                go!(self: to RawData ScriptDataEscaped DoubleEscaped)
            },

            states::CommentStart
            | states::CommentStartDash
            | states::Comment
            | states::CommentEndDash
            | states::CommentEnd
            | states::CommentEndBang => go!(self: error EofInComment; emit_comment; to Data),

            states::CommentLessThanSign | states::CommentLessThanSignBang => {
                go!(self: reconsume Comment)
            },

            states::CommentLessThanSignBangDash => go!(self: reconsume CommentEndDash),

            states::CommentLessThanSignBangDashDash => go!(self: reconsume CommentEnd),

            states::MarkupDeclarationOpen => {
                go!(self: error IncorrectlyOpenedComment; clear_comment; to BogusComment)
            },

            states::Doctype | states::BeforeDoctypeName => {
                go!(self: error EofInDoctype; create_doctype; force_quirks; emit_doctype; to Data)
            },

            states::DoctypeName
            | states::AfterDoctypeName
            | states::AfterDoctypeKeyword(_)
            | states::BeforeDoctypeIdentifier(_)
            | states::DoctypeIdentifierDoubleQuoted(_)
            | states::DoctypeIdentifierSingleQuoted(_)
            | states::AfterDoctypeIdentifier(_)
            | states::BetweenDoctypePublicAndSystemIdentifiers => {
                go!(self: error EofInDoctype; force_quirks; emit_doctype; to Data)
            },

            states::BogusDoctype => go!(self: emit_doctype; to Data),

            states::BogusComment => go!(self: emit_comment; to Data),

            states::CdataSection => go!(self: error EofInCdata; to Data),

            states::CdataSectionBracket => go!(self: emit ']'; to CdataSection),

            states::CdataSectionEnd => go!(self: emit ']'; emit ']'; to CdataSection),
        }
    }
}

#[cfg(test)]
mod test {
    use super::states;
    use super::{option_push, StrTendril};
    use super::{TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts};
    use crate::error::ErrorKind;
    use crate::input::InputStream;

    struct Accumulator {
        tokens: Vec<Token>,
    }

    impl TokenSink for Accumulator {
        fn process_token(&mut self, token: Token, _offset: usize) -> TokenSinkResult {
            self.tokens.push(token);
            TokenSinkResult::Continue
        }
    }

    fn tokenize_with(input: &str, opts: TokenizerOpts) -> Vec<Token> {
        let mut tok = Tokenizer::new(Accumulator { tokens: vec![] }, opts);
        let mut input = InputStream::new(input);
        tok.run(&mut input);
        tok.sink.tokens
    }

    fn tokenize(input: &str) -> Vec<Token> {
        tokenize_with(input, TokenizerOpts::default())
    }

    fn text_of(tokens: &[Token]) -> String {
        tokens
            .iter()
            .filter_map(|t| match t {
                Token::Character(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    fn errors_of(tokens: &[Token]) -> Vec<ErrorKind> {
        tokens
            .iter()
            .filter_map(|t| match t {
                Token::ParseError(e) => Some(*e),
                _ => None,
            })
            .collect()
    }

    fn first_tag(tokens: &[Token]) -> &super::Tag {
        tokens
            .iter()
            .find_map(|t| match t {
                Token::Tag(tag) => Some(tag),
                _ => None,
            })
            .expect("no tag token")
    }

    #[test]
    fn push_to_None_gives_singleton() {
        let mut s: Option<StrTendril> = None;
        option_push(&mut s, 'x');
        assert_eq!(s, Some(StrTendril::from("x")));
    }

    #[test]
    fn simple_tag_with_attributes() {
        let tokens = tokenize("<a HREF='x' empty checked>");
        let tag = first_tag(&tokens);
        assert_eq!(tag.kind, TagKind::StartTag);
        assert_eq!(&*tag.name, "a");
        assert_eq!(tag.attrs.len(), 3);
        assert_eq!(&*tag.attrs[0].name.local, "href");
        assert_eq!(&*tag.attrs[0].value, "x");
        assert_eq!(&*tag.attrs[1].name.local, "empty");
        assert_eq!(&*tag.attrs[1].value, "");
    }

    #[test]
    fn duplicate_attribute_is_dropped() {
        let tokens = tokenize("<a x=1 x=2>");
        let tag = first_tag(&tokens);
        assert_eq!(tag.attrs.len(), 1);
        assert_eq!(&*tag.attrs[0].value, "1");
        assert_eq!(errors_of(&tokens), vec![ErrorKind::DuplicateAttribute]);
    }

    #[test]
    fn end_tag_with_attributes_is_flagged() {
        let tokens = tokenize("</p attr>");
        assert!(errors_of(&tokens).contains(&ErrorKind::EndTagWithAttributes));
    }

    #[test]
    fn named_references_resolve() {
        assert_eq!(text_of(&tokenize("&amp; &lt;&gt; &copy; &notin;")), "& <> \u{a9} \u{2209}");
    }

    #[test]
    fn legacy_reference_pushes_back_suffix() {
        let tokens = tokenize("&notit;");
        assert_eq!(text_of(&tokens), "\u{ac}it;");
        assert_eq!(
            errors_of(&tokens),
            vec![ErrorKind::MissingSemicolonAfterCharacterReference]
        );
    }

    #[test]
    fn unknown_named_reference() {
        let tokens = tokenize("&noSuchEntity;");
        assert_eq!(text_of(&tokens), "&noSuchEntity;");
        assert_eq!(
            errors_of(&tokens),
            vec![ErrorKind::UnknownNamedCharacterReference]
        );
    }

    #[test]
    fn legacy_reference_in_attribute_stays_literal_before_equals() {
        let tokens = tokenize("<a href=\"?a=b&copy=c\">");
        let tag = first_tag(&tokens);
        assert_eq!(&*tag.attrs[0].value, "?a=b&copy=c");
        assert!(errors_of(&tokens).is_empty());
    }

    #[test]
    fn legacy_reference_in_attribute_resolves_at_end() {
        let tokens = tokenize("<a alt=\"&copy\">");
        let tag = first_tag(&tokens);
        assert_eq!(&*tag.attrs[0].value, "\u{a9}");
        assert_eq!(
            errors_of(&tokens),
            vec![ErrorKind::MissingSemicolonAfterCharacterReference]
        );
    }

    #[test]
    fn numeric_references() {
        assert_eq!(text_of(&tokenize("&#169;&#xA9;&#XA9;")), "\u{a9}\u{a9}\u{a9}");

        let tokens = tokenize("&#0;");
        assert_eq!(text_of(&tokens), "\u{fffd}");
        assert_eq!(errors_of(&tokens), vec![ErrorKind::NullCharacterReference]);

        let tokens = tokenize("&#x110000;");
        assert_eq!(text_of(&tokens), "\u{fffd}");
        assert_eq!(
            errors_of(&tokens),
            vec![ErrorKind::CharacterReferenceOutsideUnicodeRange]
        );

        let tokens = tokenize("&#x92;");
        assert_eq!(text_of(&tokens), "\u{2019}");
        assert_eq!(errors_of(&tokens), vec![ErrorKind::ControlCharacterReference]);
    }

    #[test]
    fn numeric_reference_without_digits() {
        let tokens = tokenize("&#x;");
        assert_eq!(text_of(&tokens), "&#x;");
        assert_eq!(
            errors_of(&tokens),
            vec![ErrorKind::AbsenceOfDigitsInNumericCharacterReference]
        );
    }

    #[test]
    fn null_passes_through_data_state() {
        let tokens = tokenize("a\0b");
        assert_eq!(text_of(&tokens), "a\0b");
        assert_eq!(errors_of(&tokens), vec![ErrorKind::UnexpectedNullCharacter]);
    }

    #[test]
    fn newlines_are_normalized() {
        assert_eq!(text_of(&tokenize("a\r\nb\rc")), "a\nb\nc");
    }

    #[test]
    fn bom_is_discarded() {
        assert_eq!(text_of(&tokenize("\u{feff}x")), "x");
    }

    #[test]
    fn abrupt_empty_comment() {
        let tokens = tokenize("<!-->");
        assert_eq!(
            errors_of(&tokens),
            vec![ErrorKind::AbruptClosingOfEmptyComment]
        );
        assert!(tokens.contains(&Token::Comment(StrTendril::new())));
    }

    #[test]
    fn nested_comment_error() {
        let tokens = tokenize("<!-- <!-- --> -->");
        assert_eq!(errors_of(&tokens), vec![ErrorKind::NestedComment]);
    }

    #[test]
    fn bogus_comment_from_question_mark() {
        let tokens = tokenize("<?php ?>");
        assert_eq!(
            errors_of(&tokens),
            vec![ErrorKind::UnexpectedQuestionMarkInsteadOfTagName]
        );
        assert!(tokens.contains(&Token::Comment(StrTendril::from("?php ?"))));
    }

    #[test]
    fn doctype_with_ids() {
        let tokens =
            tokenize("<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \"http://x\">");
        let doctype = tokens
            .iter()
            .find_map(|t| match t {
                Token::Doctype(d) => Some(d),
                _ => None,
            })
            .expect("no doctype");
        assert_eq!(doctype.name.as_deref(), Some("html"));
        assert_eq!(doctype.public_id.as_deref(), Some("-//W3C//DTD HTML 4.01//EN"));
        assert_eq!(doctype.system_id.as_deref(), Some("http://x"));
        assert!(!doctype.force_quirks);
    }

    #[test]
    fn eof_in_tag() {
        let tokens = tokenize("<a href=");
        assert_eq!(errors_of(&tokens), vec![ErrorKind::EofInTag]);
        assert_eq!(tokens.last(), Some(&Token::Eof));
    }

    #[test]
    fn lone_lt_at_eof() {
        let tokens = tokenize("<");
        assert_eq!(errors_of(&tokens), vec![ErrorKind::EofBeforeTagName]);
        assert_eq!(text_of(&tokens), "<");
    }

    #[test]
    fn rawtext_appropriate_end_tag() {
        let opts = TokenizerOpts {
            initial_state: Some(states::RawData(states::Rawtext)),
            last_start_tag_name: Some("style".to_string()),
        };
        let tokens = tokenize_with("a</b>c</style>", opts);
        assert_eq!(text_of(&tokens), "a</b>c");
        let tag = first_tag(&tokens);
        assert_eq!(tag.kind, TagKind::EndTag);
        assert_eq!(&*tag.name, "style");
    }

    #[test]
    fn script_double_escape() {
        let tokens = tokenize_with(
            "<!--<script>alert('</x>')</script>-->",
            TokenizerOpts {
                initial_state: Some(states::RawData(states::ScriptData)),
                last_start_tag_name: Some("script".to_string()),
            },
        );
        // Everything is text: the inner </x> does not terminate anything
        // and the script end tag inside the double-escaped region is text.
        assert_eq!(text_of(&tokens), "<!--<script>alert('</x>')</script>-->");
    }

    #[test]
    fn exactly_one_eof_token() {
        for input in ["", "x", "<a>", "<!--", "&copy", "<![CDATA["] {
            let tokens = tokenize(input);
            let eofs = tokens.iter().filter(|t| **t == Token::Eof).count();
            assert_eq!(eofs, 1, "input {input:?}");
            assert_eq!(tokens.last(), Some(&Token::Eof), "input {input:?}");
        }
    }

    #[test]
    fn error_offsets_point_into_input() {
        let mut tok = Tokenizer::new(Offsets { offsets: vec![] }, TokenizerOpts::default());
        let mut input = InputStream::new("ab\0");
        tok.run(&mut input);
        assert_eq!(tok.sink.offsets, vec![2]);

        struct Offsets {
            offsets: Vec<usize>,
        }
        impl TokenSink for Offsets {
            fn process_token(&mut self, token: Token, offset: usize) -> TokenSinkResult {
                if matches!(token, Token::ParseError(_)) {
                    self.offsets.push(offset);
                }
                TokenSinkResult::Continue
            }
        }
    }
}
