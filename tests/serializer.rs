// Copyright 2026 The html5oak Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Serialization round-trips: re-parsing the serializer's output must
//! reproduce the same tree.

use html5oak::{parse, to_html};

fn assert_round_trip(input: &str) {
    let doc = parse(input);
    let html = to_html(&doc);
    let reparsed = parse(&html);
    assert_eq!(
        doc.dump(),
        reparsed.dump(),
        "\ninput: {input:?}\nserialized: {html:?}\n"
    );
}

#[test]
fn round_trips() {
    for input in [
        "",
        "<!DOCTYPE html><p>Hello</p>",
        "<p>First<p>Second<p>Third",
        "<div class=\"a\" id=b><span>x</span></div>",
        "<b><i>Bold and Italic</b> Just Italic</i>",
        "<table><tr><td>x</td></tr></table>",
        "<p>&amp; &lt; &gt; &copy;</p>",
        "<ul><li>one<li>two</ul>",
        "<script>if (a < b) { c(); }</script>",
        "<textarea><p>not markup</textarea>",
        "<pre>\nkeeps\n  whitespace</pre>",
        "<svg><circle cx=\"50\" cy=\"50\" r=\"40\"/></svg>",
        "<p title=\"a &quot;b&quot; c\">attr quoting</p>",
        "text with a stray < sign",
        "<hr><br><img src=x>",
    ] {
        assert_round_trip(input);
    }
}

#[test]
fn serializes_basic_document() {
    let doc = parse("<!DOCTYPE html><p>x</p>");
    assert_eq!(
        to_html(&doc),
        "<!DOCTYPE html><html><head></head><body><p>x</p></body></html>"
    );
}

#[test]
fn empty_input_yields_the_skeleton_document() {
    let doc = parse("");
    assert_eq!(
        to_html(&doc),
        "<html><head></head><body></body></html>"
    );
}
