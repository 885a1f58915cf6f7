// Copyright 2026 The html5oak Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_document() -> String {
    let mut page = String::from(
        "<!DOCTYPE html><html><head><title>bench</title>\
         <style>p { margin: 0 }</style></head><body>",
    );
    for i in 0..500 {
        page.push_str(&format!(
            "<div class=\"row r{i}\"><p>Paragraph &num;{i} &amp; counting</p>\
             <table><tr><td>a</td><td>b</td></tr></table></div>"
        ));
    }
    page.push_str("</body></html>");
    page
}

fn bench_parse(c: &mut Criterion) {
    let page = sample_document();

    c.bench_function("parse document", |b| {
        b.iter(|| html5oak::parse(black_box(&page)))
    });

    c.bench_function("tokenize document", |b| {
        b.iter(|| html5oak::tokenize(black_box(&page)))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
