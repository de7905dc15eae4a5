/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a
 * copy of the MPL was not distributed with this file, You can obtain one at
 * https://mozilla.org/MPL/2.0/.
 *
 * Copyright 2021 William Swartzendruber
 *
 * SPDX-License-Identifier: MPL-2.0
 */

use ass::{
    events::Events,
    script::ReadScriptExt,
};
use std::{
    fs::File,
    io::{stdin, BufReader, Read},
};
use clap::{app_from_crate, crate_authors, crate_description, crate_name, crate_version, Arg};

fn main() {

    let matches = app_from_crate!()
        .arg(Arg::with_name("input")
            .index(1)
            .value_name("INPUT-FILE")
            .help("Input ASS file; use - for STDIN")
            .required(true)
        )
        .after_help(format!("This utility will dump the section structure and event timing of \
            an ASS subtitle file.\n\n\
            Copyright © 2021 William Swartzendruber\n\
            Licensed under the Mozilla Public License 2.0\n\
            <{}>", env!("CARGO_PKG_REPOSITORY")).as_str())
        .get_matches();
    let input_value = matches.value_of("input").unwrap();
    let (mut stdin_read, mut file_read);
    let mut input = BufReader::<&mut dyn Read>::new(
        if input_value == "-" {
            stdin_read = stdin();
            &mut stdin_read
        } else {
            file_read = File::open(input_value)
                .expect("Could not open input file for reading.");
            &mut file_read
        }
    );

    let script = match input.read_script() {
        Ok(script) => script,
        Err(err) => panic!("Could not read script: {}", err),
    };

    //
    // SECTIONS
    //

    for section in script.sections() {
        println!("section({})", section.header);
        println!("  content_lines = {}", section.lines.len());
    }

    //
    // EVENTS
    //

    match Events::from_script(&script) {
        Ok(events) => {
            println!();
            println!("format = {}", events.formats.join(", "));
            for event in &events.events {
                println!("event({})", event.kind);
                println!("  start = {}", event.field("Start").unwrap_or("-"));
                println!("  end = {}", event.field("End").unwrap_or("-"));
                match event.field("Text") {
                    Some(text) => println!("  text = {}", text),
                    None => (),
                }
            }
        }
        Err(err) => eprintln!("No usable event table: {}", err),
    }
}
