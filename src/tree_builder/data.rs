// Copyright 2026 The html5oak Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! DOCTYPE classification, per the rules attached to the initial
//! insertion mode.

use crate::interface::QuirksMode::{self, LimitedQuirks, NoQuirks, Quirks};
use crate::tokenizer::Doctype;

/// A public identifier with any of these prefixes (matched
/// case-insensitively) forces quirks mode.
static QUIRKY_PUBLIC_PREFIXES: &[&str] = &[
    "+//silmaril//dtd html pro v0r11 19970101//",
    "-//advasoft ltd//dtd html 3.0 aswedit + extensions//",
    "-//as//dtd html 3.0 aswedit + extensions//",
    "-//ietf//dtd html 2.0 level 1//",
    "-//ietf//dtd html 2.0 level 2//",
    "-//ietf//dtd html 2.0 strict level 1//",
    "-//ietf//dtd html 2.0 strict level 2//",
    "-//ietf//dtd html 2.0 strict//",
    "-//ietf//dtd html 2.0//",
    "-//ietf//dtd html 2.1e//",
    "-//ietf//dtd html 3.0//",
    "-//ietf//dtd html 3.2 final//",
    "-//ietf//dtd html 3.2//",
    "-//ietf//dtd html 3//",
    "-//ietf//dtd html level 0//",
    "-//ietf//dtd html level 1//",
    "-//ietf//dtd html level 2//",
    "-//ietf//dtd html level 3//",
    "-//ietf//dtd html strict level 0//",
    "-//ietf//dtd html strict level 1//",
    "-//ietf//dtd html strict level 2//",
    "-//ietf//dtd html strict level 3//",
    "-//ietf//dtd html strict//",
    "-//ietf//dtd html//",
    "-//metrius//dtd metrius presentational//",
    "-//microsoft//dtd internet explorer 2.0 html strict//",
    "-//microsoft//dtd internet explorer 2.0 html//",
    "-//microsoft//dtd internet explorer 2.0 tables//",
    "-//microsoft//dtd internet explorer 3.0 html strict//",
    "-//microsoft//dtd internet explorer 3.0 html//",
    "-//microsoft//dtd internet explorer 3.0 tables//",
    "-//netscape comm. corp.//dtd html//",
    "-//netscape comm. corp.//dtd strict html//",
    "-//o'reilly and associates//dtd html 2.0//",
    "-//o'reilly and associates//dtd html extended 1.0//",
    "-//o'reilly and associates//dtd html extended relaxed 1.0//",
    "-//softquad software//dtd hotmetal pro 6.0::19990601::extensions to html 4.0//",
    "-//softquad//dtd hotmetal pro 4.0::19971010::extensions to html 4.0//",
    "-//spyglass//dtd html 2.0 extended//",
    "-//sq//dtd html 2.0 hotmetal + extensions//",
    "-//sun microsystems corp.//dtd hotjava html//",
    "-//sun microsystems corp.//dtd hotjava strict html//",
    "-//w3c//dtd html 3 1995-03-24//",
    "-//w3c//dtd html 3.2 draft//",
    "-//w3c//dtd html 3.2 final//",
    "-//w3c//dtd html 3.2//",
    "-//w3c//dtd html 3.2s draft//",
    "-//w3c//dtd html 4.0 frameset//",
    "-//w3c//dtd html 4.0 transitional//",
    "-//w3c//dtd html experimental 19960712//",
    "-//w3c//dtd html experimental 970421//",
    "-//w3c//dtd w3 html//",
    "-//w3o//dtd w3 html 3.0//",
    "-//webtechs//dtd mozilla html 2.0//",
    "-//webtechs//dtd mozilla html//",
];

/// Full public identifiers (matched case-insensitively) that force quirks
/// mode outright.
static QUIRKY_PUBLIC_MATCHES: &[&str] = &[
    "-//w3o//dtd w3 html strict 3.0//en//",
    "-/w3c/dtd html 4.0 transitional/en",
    "html",
];

/// Quirky when the system identifier is absent.
static HTML4_PUBLIC_PREFIXES: &[&str] = &[
    "-//w3c//dtd html 4.01 frameset//",
    "-//w3c//dtd html 4.01 transitional//",
];

static LIMITED_QUIRKY_PUBLIC_PREFIXES: &[&str] = &[
    "-//w3c//dtd xhtml 1.0 frameset//",
    "-//w3c//dtd xhtml 1.0 transitional//",
];

static QUIRKY_SYSTEM_MATCHES: &[&str] =
    &["http://www.ibm.com/data/dtd/v11/ibmxhtml1-transitional.dtd"];

/// Whether this DOCTYPE token should draw a parse error, and which quirks
/// mode it puts the document into. Documents from an iframe `srcdoc`
/// attribute never leave no-quirks mode.
pub(crate) fn doctype_error_and_quirks(doctype: &Doctype, iframe_srcdoc: bool) -> (bool, QuirksMode) {
    fn opt_to_ascii_lower(opt: &Option<crate::tendril::StrTendril>) -> Option<String> {
        opt.as_ref().map(|s| s.to_ascii_lowercase())
    }

    let name = opt_to_ascii_lower(&doctype.name);
    let public = opt_to_ascii_lower(&doctype.public_id);
    let system = opt_to_ascii_lower(&doctype.system_id);

    let err = match (name.as_deref(), public.as_deref(), system.as_deref()) {
        (Some("html"), None, None) | (Some("html"), None, Some("about:legacy-compat")) => false,
        _ => true,
    };

    let quirk = {
        let contains_pub_prefix = |haystack: &[&str]| {
            public
                .as_deref()
                .map_or(false, |p| haystack.iter().any(|&q| p.starts_with(q)))
        };

        if iframe_srcdoc {
            NoQuirks
        } else if doctype.force_quirks || name.as_deref() != Some("html") {
            Quirks
        } else if public
            .as_deref()
            .map_or(false, |p| QUIRKY_PUBLIC_MATCHES.contains(&p))
        {
            Quirks
        } else if system
            .as_deref()
            .map_or(false, |s| QUIRKY_SYSTEM_MATCHES.contains(&s))
        {
            Quirks
        } else if contains_pub_prefix(QUIRKY_PUBLIC_PREFIXES) {
            Quirks
        } else if system.is_none() && contains_pub_prefix(HTML4_PUBLIC_PREFIXES) {
            Quirks
        } else if contains_pub_prefix(LIMITED_QUIRKY_PUBLIC_PREFIXES) {
            LimitedQuirks
        } else if system.is_some() && contains_pub_prefix(HTML4_PUBLIC_PREFIXES) {
            LimitedQuirks
        } else {
            NoQuirks
        }
    };

    (err, quirk)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tendril::StrTendril;

    fn doctype(name: &str, public_id: Option<&str>, system_id: Option<&str>) -> Doctype {
        Doctype {
            name: Some(StrTendril::from(name)),
            public_id: public_id.map(StrTendril::from),
            system_id: system_id.map(StrTendril::from),
            force_quirks: false,
        }
    }

    #[test]
    fn modern_doctype_is_clean() {
        assert_eq!(
            doctype_error_and_quirks(&doctype("html", None, None), false),
            (false, NoQuirks)
        );
        assert_eq!(
            doctype_error_and_quirks(&doctype("html", None, Some("about:legacy-compat")), false),
            (false, NoQuirks)
        );
    }

    #[test]
    fn html4_transitional_is_quirky_without_system_id() {
        let public = Some("-//W3C//DTD HTML 4.01 Transitional//EN");
        assert_eq!(
            doctype_error_and_quirks(&doctype("html", public, None), false).1,
            Quirks
        );
        assert_eq!(
            doctype_error_and_quirks(
                &doctype("html", public, Some("http://www.w3.org/TR/html4/loose.dtd")),
                false
            )
            .1,
            LimitedQuirks
        );
    }

    #[test]
    fn legacy_prefixes_are_quirky() {
        let d = doctype("html", Some("-//IETF//DTD HTML 2.0//EN"), None);
        assert_eq!(doctype_error_and_quirks(&d, false).1, Quirks);
    }

    #[test]
    fn missing_name_forces_quirks() {
        let d = Doctype::default();
        assert_eq!(doctype_error_and_quirks(&d, false).1, Quirks);
        assert_eq!(doctype_error_and_quirks(&d, true).1, NoQuirks);
    }

    #[test]
    fn xhtml_transitional_is_limited_quirks() {
        let d = doctype("html", Some("-//W3C//DTD XHTML 1.0 Transitional//EN"), None);
        assert_eq!(doctype_error_and_quirks(&d, false).1, LimitedQuirks);
    }
}
