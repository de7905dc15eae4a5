/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a
 * copy of the MPL was not distributed with this file, You can obtain one at
 * https://mozilla.org/MPL/2.0/.
 *
 * Copyright 2021 William Swartzendruber
 *
 * SPDX-License-Identifier: MPL-2.0
 */

#[cfg(test)]
mod tests;

use ass::{
    events::shift_script,
    script::{ReadScriptExt, WriteScriptExt},
    timestamp::{Delta, Direction},
};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};
use clap::{app_from_crate, crate_authors, crate_description, crate_name, crate_version, Arg};

fn main() {

    let matches = app_from_crate!()
        .arg(Arg::with_name("hours")
            .long("hours")
            .short("H")
            .value_name("HOURS")
            .help("Hours component of the shift")
            .takes_value(true)
            .required(false)
            .default_value("0")
            .validator(|value| {
                if value.parse::<u64>().is_ok() {
                    Ok(())
                } else {
                    Err("must be an unsigned integer".to_string())
                }
            })
        )
        .arg(Arg::with_name("minutes")
            .long("minutes")
            .short("M")
            .value_name("MINUTES")
            .help("Minutes component of the shift")
            .takes_value(true)
            .required(false)
            .default_value("0")
            .validator(|value| {
                if value.parse::<u64>().is_ok() {
                    Ok(())
                } else {
                    Err("must be an unsigned integer".to_string())
                }
            })
        )
        .arg(Arg::with_name("seconds")
            .long("seconds")
            .short("S")
            .value_name("SECONDS")
            .help("Seconds component of the shift")
            .takes_value(true)
            .required(false)
            .default_value("0")
            .validator(|value| {
                if value.parse::<u64>().is_ok() {
                    Ok(())
                } else {
                    Err("must be an unsigned integer".to_string())
                }
            })
        )
        .arg(Arg::with_name("microseconds")
            .long("microseconds")
            .short("u")
            .value_name("MICROSECONDS")
            .help("Microseconds component of the shift")
            .takes_value(true)
            .required(false)
            .default_value("0")
            .validator(|value| {
                if value.parse::<u64>().is_ok() {
                    Ok(())
                } else {
                    Err("must be an unsigned integer".to_string())
                }
            })
        )
        .arg(Arg::with_name("subtract")
            .long("subtract")
            .short("s")
            .help("Shift events backward instead of forward")
            .takes_value(false)
            .required(false)
        )
        .arg(Arg::with_name("input")
            .index(1)
            .value_name("INPUT-FILE")
            .help("Input ASS file")
            .required(true)
        )
        .arg(Arg::with_name("output")
            .index(2)
            .value_name("OUTPUT-FILE")
            .help("Output ASS file; defaults to the input file name with `edited` appended")
            .required(false)
        )
        .after_help(format!("This utility will shift the Start and End timestamps of every \
            event in an ASS subtitle file by a fixed amount, either forward or backward. The \
            input file is never modified; if no output file is given, the result is written \
            next to the input as `<name>.edited.ass`.\n\n\
            Copyright © 2021 William Swartzendruber\n\
            Licensed under the Mozilla Public License 2.0\n\
            <{}>", env!("CARGO_PKG_REPOSITORY")).as_str())
        .get_matches();
    let input_value = matches.value_of("input").unwrap();
    let input_path = Path::new(input_value);
    if input_path.extension().and_then(|extension| extension.to_str()) != Some("ass") {
        panic!("Input file must have the .ass extension.")
    }
    let output_path = match matches.value_of("output") {
        Some(value) => PathBuf::from(value),
        None => default_output_path(input_path),
    };
    let direction = if matches.is_present("subtract") {
        Direction::Subtract
    } else {
        Direction::Add
    };
    let delta = Delta {
        hours: matches.value_of("hours").unwrap().parse::<u64>().unwrap(),
        minutes: matches.value_of("minutes").unwrap().parse::<u64>().unwrap(),
        seconds: matches.value_of("seconds").unwrap().parse::<u64>().unwrap(),
        microseconds: matches.value_of("microseconds").unwrap().parse::<u64>().unwrap(),
    };

    //
    // READ
    //

    let mut input = BufReader::new(
        File::open(input_path)
            .expect("Could not open input file for reading.")
    );
    let mut script = match input.read_script() {
        Ok(script) => script,
        Err(err) => panic!("Could not read input script: {}", err),
    };

    //
    // SHIFT
    //

    if let Err(err) = shift_script(&mut script, direction, &delta) {
        panic!("Could not shift events: {}", err)
    }

    //
    // WRITE
    //

    let mut output = BufWriter::new(
        File::create(&output_path)
            .expect("Could not open output file for writing.")
    );

    if let Err(err) = output.write_script(&script) {
        panic!("Could not write output script: {}", err)
    }

    eprintln!("Wrote {}", output_path.display());
}

fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("edited.ass")
}
