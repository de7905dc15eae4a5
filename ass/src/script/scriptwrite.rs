/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: MPL-2.0
 */

use super::Script;
use std::io::{Error as IoError, Write};
use thiserror::Error as ThisError;

/// A specialized [`Result`](std::result::Result) type for script-writing operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// The error type for [`WriteScriptExt`].
#[derive(ThisError, Debug)]
pub enum WriteError {
    /// The script could not be written because of an underlying I/O error.
    #[error("script IO error")]
    IoError {
        /// The underlying I/O error.
        #[from]
        source: IoError,
    },
}

/// Allows writing scripts to a destination.
pub trait WriteScriptExt {
    /// Writes an entire script to a destination.
    ///
    /// Each section is written as its bracketed header line, its content lines verbatim, and
    /// one blank separator line.
    fn write_script(&mut self, script: &Script) -> WriteResult<()>;
}

impl<T> WriteScriptExt for T where
    T: Write,
{

    fn write_script(&mut self, script: &Script) -> WriteResult<()> {

        for section in script.sections() {

            writeln!(self, "[{}]", section.header)?;

            for line in &section.lines {
                writeln!(self, "{}", line)?;
            }

            writeln!(self)?;
        }

        Ok(())
    }
}
