/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: MPL-2.0
 */

use super::Script;
use std::io::{BufRead, Error as IoError};
use thiserror::Error as ThisError;

/// A specialized [`Result`](std::result::Result) type for script-reading operations.
pub type ReadResult<T> = Result<T, ReadError>;

/// The error type for [`ReadScriptExt`].
#[derive(ThisError, Debug)]
pub enum ReadError {
    /// The script could not be read because of an underlying I/O error.
    #[error("script IO error")]
    IoError {
        /// The underlying I/O error.
        #[from]
        source: IoError,
    },
    /// The script has a content line before its first section header.
    #[error("line {line} appears before any section header")]
    OrphanedLine {
        /// The 1-based line number within the input.
        line: usize,
    },
}

/// Allows reading scripts from a source.
pub trait ReadScriptExt {
    /// Reads an entire script from a source.
    ///
    /// A leading UTF-8 byte order mark is tolerated and dropped. Every line is trimmed and
    /// blank lines are discarded. A repeated section header reopens the existing section and
    /// appends to its content, so each header appears at most once in the parsed script.
    fn read_script(&mut self) -> ReadResult<Script>;
}

impl<T> ReadScriptExt for T where
    T: BufRead,
{

    fn read_script(&mut self) -> ReadResult<Script> {

        let mut script = Script::new();
        let mut current = None;

        for (index, line) in self.lines().enumerate() {

            let line = line?;
            let line = if index == 0 {
                line.trim_start_matches('\u{feff}')
            } else {
                line.as_str()
            };
            let line = line.trim();

            if line.is_empty() {
                continue
            }

            match header_name(line) {
                Some(header) => {
                    current = Some(script.section_index(header));
                }
                None => {
                    match current {
                        Some(section) => script.sections[section].lines.push(line.to_owned()),
                        None => return Err(ReadError::OrphanedLine { line: index + 1 }),
                    }
                }
            }
        }

        Ok(script)
    }
}

fn header_name(line: &str) -> Option<&str> {

    let name = line.strip_prefix('[')?.strip_suffix(']')?;

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
