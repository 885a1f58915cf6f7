// Copyright 2026 The html5oak Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tree-construction tests in the html5lib `.dat` format, embedded here
//! so the suite runs without fixture files. The serialization being
//! compared is `Document::dump`, which follows the html5lib tree format.

use std::collections::HashMap;
use std::mem::replace;

use html5oak::{parse_with_opts, ParseOpts};

fn parse_tests(input: &str) -> Vec<HashMap<String, String>> {
    let mut tests = vec![];
    let mut test = HashMap::new();
    let mut key: Option<String> = None;
    let mut val = String::new();

    macro_rules! finish_val (
        () => {
            match key.take() {
                None => (),
                Some(key) => {
                    assert!(test.insert(key, replace(&mut val, String::new())).is_none());
                },
            }
        }
    );

    macro_rules! finish_test (
        () => {
            if !test.is_empty() {
                tests.push(replace(&mut test, HashMap::new()));
            }
        }
    );

    for line in input.lines() {
        if let Some(rest) = line.strip_prefix('#') {
            finish_val!();
            if line == "#data" {
                finish_test!();
            }
            key = Some(rest.to_string());
        } else {
            val.push_str(line);
            val.push('\n');
        }
    }

    finish_val!();
    finish_test!();
    tests
}

fn run_test(fields: &HashMap<String, String>, scripting: bool) {
    let mut data = fields.get("data").expect("missing data").to_string();
    data.pop();
    let expected = fields
        .get("document")
        .expect("missing document")
        .trim_end_matches('\n');
    let context = fields
        .get("document-fragment")
        .map(|c| c.trim_end_matches('\n').to_string());

    let opts = ParseOpts {
        scripting,
        fragment_context: context.clone(),
    };
    let (doc, _errors) = parse_with_opts(&data, opts);
    let result = match context {
        None => doc.dump(),
        Some(_) => doc.dump_fragment(),
    };
    let result = result.trim_end_matches('\n');

    assert_eq!(
        result, expected,
        "\ninput: {data}\ngot:\n{result}\nexpected:\n{expected}\n"
    );
}

fn run_cases(cases: &str) {
    for fields in parse_tests(cases) {
        let scripting_flags: &[bool] = if fields.contains_key("script-off") {
            &[false]
        } else if fields.contains_key("script-on") {
            &[true]
        } else {
            &[false, true]
        };
        for &scripting in scripting_flags {
            run_test(&fields, scripting);
        }
    }
}

#[test]
fn documents() {
    run_cases(
        r#"#data
<html><head><title>Hello</title></head><body><p>World</p></body></html>
#errors
#document
| <html>
|   <head>
|     <title>
|       "Hello"
|   <body>
|     <p>
|       "World"

#data
<p>First<p>Second<p>Third
#errors
#document
| <html>
|   <head>
|   <body>
|     <p>
|       "First"
|     <p>
|       "Second"
|     <p>
|       "Third"

#data

#errors
#document
| <html>
|   <head>
|   <body>

#data
<p>Test</p attr>
#errors
#document
| <html>
|   <head>
|   <body>
|     <p>
|       "Test"

#data
a<!--b-->
#errors
#document
| <html>
|   <head>
|   <body>
|     "a"
|     <!-- b -->

#data
<html><body></body></html><!--x-->
#errors
#document
| <html>
|   <head>
|   <body>
| <!-- x -->
"#,
    );
}

#[test]
fn character_references() {
    run_cases(
        r#"#data
<p>&amp; &lt; &gt; &copy; &#169; &#x00A9;</p>
#errors
#document
| <html>
|   <head>
|   <body>
|     <p>
|       "& < > © © ©"
"#,
    );
}

#[test]
fn adoption_agency() {
    run_cases(
        r#"#data
<b><i>Bold and Italic</b> Just Italic</i>
#errors
#document
| <html>
|   <head>
|   <body>
|     <b>
|       <i>
|         "Bold and Italic"
|     <i>
|       " Just Italic"

#data
<b>1<p>2</b>3</p>
#errors
#document
| <html>
|   <head>
|   <body>
|     <b>
|       "1"
|     <p>
|       <b>
|         "2"
|       "3"

#data
<a>1<p>2</a>3</p>
#errors
#document
| <html>
|   <head>
|   <body>
|     <a>
|       "1"
|     <p>
|       <a>
|         "2"
|       "3"

#data
<p>1<s>2<p>3
#errors
#document
| <html>
|   <head>
|   <body>
|     <p>
|       "1"
|       <s>
|         "2"
|     <p>
|       <s>
|         "3"
"#,
    );
}

#[test]
fn noahs_ark_clause() {
    // A fourth equivalent <b> evicts the earliest entry above the last
    // marker, so reconstruction in the second paragraph clones only
    // three. Distinct attributes are not equivalent and all survive.
    run_cases(
        r#"#data
<p><b><b><b><b>x<p>y
#errors
#document
| <html>
|   <head>
|   <body>
|     <p>
|       <b>
|         <b>
|           <b>
|             <b>
|               "x"
|     <p>
|       <b>
|         <b>
|           <b>
|             "y"

#data
<p><b id=1><b id=2><b id=3><b id=4>x<p>y
#errors
#document
| <html>
|   <head>
|   <body>
|     <p>
|       <b>
|         id="1"
|         <b>
|           id="2"
|           <b>
|             id="3"
|             <b>
|               id="4"
|               "x"
|     <p>
|       <b>
|         id="1"
|         <b>
|           id="2"
|           <b>
|             id="3"
|             <b>
|               id="4"
|               "y"
"#,
    );
}

#[test]
fn tables() {
    run_cases(
        r#"#data
<!DOCTYPE html><table><tr><td>x</td></tr></table>
#errors
#document
| <!DOCTYPE html>
| <html>
|   <head>
|   <body>
|     <table>
|       <tbody>
|         <tr>
|           <td>
|             "x"

#data
<table><td>x
#errors
#document
| <html>
|   <head>
|   <body>
|     <table>
|       <tbody>
|         <tr>
|           <td>
|             "x"

#data
A<table>B<tr><td>C</td></tr>D</table>
#errors
#document
| <html>
|   <head>
|   <body>
|     "ABD"
|     <table>
|       <tbody>
|         <tr>
|           <td>
|             "C"
"#,
    );
}

#[test]
fn foreign_content() {
    run_cases(
        r#"#data
<div><svg><circle cx="50" cy="50" r="40"/></svg></div>
#errors
#document
| <html>
|   <head>
|   <body>
|     <div>
|       <svg svg>
|         <svg circle>
|           cx="50"
|           cy="50"
|           r="40"

#data
<math><mi>x</mi></math>y
#errors
#document
| <html>
|   <head>
|   <body>
|     <math math>
|       <math mi>
|         "x"
|     "y"

#data
<svg><foreignObject><div>d</div></foreignObject></svg>
#errors
#document
| <html>
|   <head>
|   <body>
|     <svg svg>
|       <svg foreignObject>
|         <div>
|           "d"
"#,
    );
}

#[test]
fn raw_text_elements() {
    run_cases(
        r#"#data
<script>a<b</script>x
#errors
#document
| <html>
|   <head>
|     <script>
|       "a<b"
|   <body>
|     "x"

#data
<pre>
foo</pre>
#errors
#document
| <html>
|   <head>
|   <body>
|     <pre>
|       "foo"
"#,
    );
}

#[test]
fn noscript_content_model() {
    run_cases(
        r#"#data
<head><noscript><p>x</noscript></head>
#script-on
#errors
#document
| <html>
|   <head>
|     <noscript>
|       "<p>x"
|   <body>

#data
<head><noscript><p>x</noscript></head>
#script-off
#errors
#document
| <html>
|   <head>
|     <noscript>
|   <body>
|     <p>
|       "x"
"#,
    );
}

#[test]
fn templates() {
    run_cases(
        r#"#data
<template>foo</template>
#errors
#document
| <html>
|   <head>
|     <template>
|       content
|         "foo"
|   <body>
"#,
    );
}

#[test]
fn select_elements() {
    run_cases(
        r#"#data
<select><option>A<option>B</select>
#errors
#document
| <html>
|   <head>
|   <body>
|     <select>
|       <option>
|         "A"
|       <option>
|         "B"
"#,
    );
}

#[test]
fn framesets() {
    run_cases(
        r#"#data
<frameset><frame></frameset>
#errors
#document
| <html>
|   <head>
|   <frameset>
|     <frame>
"#,
    );
}

#[test]
fn fragments() {
    run_cases(
        r#"#data
<td>x</td>
#errors
#document-fragment
tr
#document
| <td>
|   "x"

#data
x</title>y
#errors
#document-fragment
title
#document
| "xy"
"#,
    );
}

#[test]
fn multi_line_text() {
    run_cases(
        r#"#data
<pre>

foo</pre>
#errors
#document
| <html>
|   <head>
|   <body>
|     <pre>
|       "
foo"
"#,
    );
}
