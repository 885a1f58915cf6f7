// Copyright 2026 The html5oak Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Various sets of HTML tag names, and the scope predicates built from
//! them. A set is a predicate over (namespace, local name).

use crate::interface::Namespace;

/// Declare a tag set as a predicate function. Sets can be derived from an
/// existing one by adding or removing names.
macro_rules! declare_tag_set (
    ($vis:vis $name:ident = [$base:ident] + $($tag:tt)+) => {
        $vis fn $name(ns: Namespace, local: &str) -> bool {
            $base(ns, local) || (ns == Namespace::Html && matches!(local, $($tag)|+))
        }
    };
    ($vis:vis $name:ident = [$base:ident] - $($tag:tt)+) => {
        $vis fn $name(ns: Namespace, local: &str) -> bool {
            $base(ns, local) && !(ns == Namespace::Html && matches!(local, $($tag)|+))
        }
    };
    ($vis:vis $name:ident = $($tag:tt)+) => {
        $vis fn $name(ns: Namespace, local: &str) -> bool {
            ns == Namespace::Html && matches!(local, $($tag)|+)
        }
    };
);

pub(crate) use declare_tag_set;

/// <https://html.spec.whatwg.org/#has-an-element-in-scope>
pub(crate) fn default_scope(ns: Namespace, local: &str) -> bool {
    match ns {
        Namespace::Html => matches!(
            local,
            "applet" | "caption" | "html" | "table" | "td" | "th" | "marquee" | "object"
                | "template"
        ),
        Namespace::MathMl => mathml_text_integration_point(ns, local) || local == "annotation-xml",
        Namespace::Svg => svg_html_integration_point(ns, local),
        _ => false,
    }
}

declare_tag_set!(pub(crate) list_item_scope = [default_scope] + "ol" "ul");
declare_tag_set!(pub(crate) button_scope = [default_scope] + "button");
declare_tag_set!(pub(crate) table_scope = "html" "table" "template");

/// Everything *except* optgroup and option is a select-scope boundary.
pub(crate) fn select_scope(ns: Namespace, local: &str) -> bool {
    !(ns == Namespace::Html && matches!(local, "optgroup" | "option"))
}

declare_tag_set!(pub(crate) table_body_context = "tbody" "tfoot" "thead" "template" "html");
declare_tag_set!(pub(crate) table_row_context = "tr" "template" "html");

declare_tag_set!(pub(crate) td_th = "td" "th");

declare_tag_set!(pub(crate) cursory_implied_end =
    "dd" "dt" "li" "option" "optgroup" "p" "rb" "rp" "rt" "rtc");

declare_tag_set!(pub(crate) thorough_implied_end = [cursory_implied_end]
    + "caption" "colgroup" "tbody" "td" "tfoot" "th" "thead" "tr");

declare_tag_set!(pub(crate) heading_tag = "h1" "h2" "h3" "h4" "h5" "h6");

/// <https://html.spec.whatwg.org/#special>
pub(crate) fn special_tag(ns: Namespace, local: &str) -> bool {
    match ns {
        Namespace::Html => matches!(
            local,
            "address" | "applet" | "area" | "article" | "aside" | "base" | "basefont"
                | "bgsound" | "blockquote" | "body" | "br" | "button" | "caption" | "center"
                | "col" | "colgroup" | "dd" | "details" | "dir" | "div" | "dl" | "dt" | "embed"
                | "fieldset" | "figcaption" | "figure" | "footer" | "form" | "frame"
                | "frameset" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "head" | "header"
                | "hgroup" | "hr" | "html" | "iframe" | "img" | "input" | "keygen" | "li"
                | "link" | "listing" | "main" | "marquee" | "menu" | "meta" | "nav" | "noembed"
                | "noframes" | "noscript" | "object" | "ol" | "p" | "param" | "plaintext"
                | "pre" | "script" | "search" | "section" | "select" | "source" | "style"
                | "summary" | "table" | "tbody" | "td" | "template" | "textarea" | "tfoot"
                | "th" | "thead" | "title" | "tr" | "track" | "ul" | "wbr" | "xmp"
        ),
        Namespace::MathMl => mathml_text_integration_point(ns, local) || local == "annotation-xml",
        Namespace::Svg => svg_html_integration_point(ns, local),
        _ => false,
    }
}

/// <https://html.spec.whatwg.org/#mathml-text-integration-point>
pub(crate) fn mathml_text_integration_point(ns: Namespace, local: &str) -> bool {
    ns == Namespace::MathMl && matches!(local, "mi" | "mo" | "mn" | "ms" | "mtext")
}

/// <https://html.spec.whatwg.org/#html-integration-point>
///
/// The MathML `annotation-xml` case depends on an attribute value and is
/// handled separately by the tree builder.
pub(crate) fn svg_html_integration_point(ns: Namespace, local: &str) -> bool {
    ns == Namespace::Svg && matches!(local, "foreignObject" | "desc" | "title")
}
