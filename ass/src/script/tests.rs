/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: CC0-1.0
 */

use super::{
    *,
    scriptread::ReadScriptExt,
    scriptwrite::WriteScriptExt,
};
use std::io::Cursor;

const SIMPLE: &str = "\
[Script Info]
Title: Example

[Events]
Format: Start, End, Text
Dialogue: 0:00:01.00,0:00:02.00,Hi

";

#[test]
fn test_read_sections_in_order() {

    let script = Cursor::new(SIMPLE).read_script().unwrap();
    let headers: Vec<&str> = script.sections()
        .iter()
        .map(|section| section.header.as_str())
        .collect();

    assert_eq!(headers, ["Script Info", "Events"]);
    assert_eq!(script.section("Script Info").unwrap().lines, ["Title: Example"]);
    assert_eq!(
        script.section("Events").unwrap().lines,
        ["Format: Start, End, Text", "Dialogue: 0:00:01.00,0:00:02.00,Hi"],
    );
}

#[test]
fn test_read_missing_section() {

    let script = Cursor::new(SIMPLE).read_script().unwrap();

    assert!(script.section("Fonts").is_none());
}

#[test]
fn test_read_drops_blank_lines() {

    let script = Cursor::new("[A]\n\n\none\n   \ntwo\n").read_script().unwrap();

    assert_eq!(script.section("A").unwrap().lines, ["one", "two"]);
}

#[test]
fn test_read_trims_lines() {

    let script = Cursor::new("[A]\n  padded  \n").read_script().unwrap();

    assert_eq!(script.section("A").unwrap().lines, ["padded"]);
}

#[test]
fn test_read_strips_byte_order_mark() {

    let script = Cursor::new("\u{feff}[A]\nline\n").read_script().unwrap();

    assert_eq!(script.section("A").unwrap().lines, ["line"]);
}

#[test]
fn test_read_keeps_bracketed_content_intact() {

    // Only a line that is nothing but `[name]` opens a section.
    let script = Cursor::new("[A]\n[not a header\nstill [not] one\n").read_script().unwrap();

    assert_eq!(script.sections().len(), 1);
    assert_eq!(script.section("A").unwrap().lines, ["[not a header", "still [not] one"]);
}

#[test]
fn test_read_orphaned_line() {
    match Cursor::new("\nstray\n[A]\n").read_script() {
        Err(ReadError::OrphanedLine { line }) => assert_eq!(line, 2),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_read_merges_duplicate_headers() {

    let script = Cursor::new("[A]\none\n[B]\nmiddle\n[A]\ntwo\n").read_script().unwrap();

    assert_eq!(script.sections().len(), 2);
    assert_eq!(script.section("A").unwrap().lines, ["one", "two"]);
    assert_eq!(script.section("B").unwrap().lines, ["middle"]);
}

#[test]
fn test_open_section_appends_then_reuses() {

    let mut script = Script::new();

    script.open_section("A").lines.push("one".to_owned());
    script.open_section("A").lines.push("two".to_owned());

    assert_eq!(script.sections().len(), 1);
    assert_eq!(script.section("A").unwrap().lines, ["one", "two"]);
}

#[test]
fn test_write_layout() {

    let script = Script {
        sections: vec![
            Section {
                header: "A".to_owned(),
                lines: vec!["one".to_owned()],
            },
        ],
    };
    let mut buffer = vec![];

    buffer.write_script(&script).unwrap();

    assert_eq!(String::from_utf8(buffer).unwrap(), "[A]\none\n\n");
}

#[test]
fn test_cycle() {

    let script = Cursor::new(SIMPLE).read_script().unwrap();
    let mut buffer = vec![];

    buffer.write_script(&script).unwrap();

    assert_eq!(String::from_utf8(buffer).unwrap(), SIMPLE);
}
