/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: MPL-2.0
 */

//! Operates on the event table of a script.
//!
//! # Overview
//!
//! The `[Events]` section is where a script keeps its timed entries. Its first content line
//! declares the row schema:
//!
//! ```text
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! ```
//!
//! Every following line is one event: a type label (`Dialogue`, `Comment`, ...) before the
//! first colon, then one comma-separated value per declared field. Only the last declared
//! field may contain commas of its own; decoding therefore splits a row into at most as many
//! pieces as there are fields, and the final piece absorbs the rest of the line.
//!
//! [`Events`] is a working view over that section. It is built from a [`Section`], can shift
//! the `Start`/`End` timestamps of every event at once, and linearizes back into content lines
//! for the section to carry to the output. Rows are re-encoded in declared field order with no
//! spacing after commas, so a byte-identical round trip needs a source that had none either.


use crate::{
    script::{Script, Section},
    timestamp::{Delta, Direction, Timestamp, TimestampError},
};
use thiserror::Error as ThisError;

/// Header of the section the event table is built from.
pub const EVENTS_HEADER: &str = "Events";

const FORMAT_LABEL: &str = "Format";
const START_FIELD: &str = "Start";
const END_FIELD: &str = "End";

/// A specialized [`Result`](std::result::Result) type for event-table parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// A specialized [`Result`](std::result::Result) type for event-table shifting.
pub type ShiftResult<T> = Result<T, ShiftError>;

/// The error type for [`Events::parse`] and [`Events::from_script`].
#[derive(ThisError, Debug)]
pub enum ParseError {
    /// The script has no `[Events]` section at all.
    #[error("script has no [Events] section")]
    MissingEventsSection,
    /// The section has no content lines, so there is no format line.
    #[error("events section has no format line")]
    MissingFormatLine,
    /// The section's first content line does not declare `Format: ...`.
    #[error("events section opens with `{line}` instead of a format line")]
    MalformedFormatLine {
        /// The offending line.
        line: String,
    },
    /// The format line declares an empty field name.
    #[error("format line declares an empty field name")]
    EmptyFieldName,
    /// The format line declares the same field name twice.
    #[error("format line declares field `{name}` more than once")]
    DuplicateFieldName {
        /// The repeated field name.
        name: String,
    },
    /// An event line has no colon separating its type label from its fields.
    #[error("event on line {line} has no type label")]
    MalformedEvent {
        /// The 1-based content line number within the section.
        line: usize,
    },
    /// An event line has fewer fields than the format line declares.
    #[error("event on line {line} has {found} fields where the format declares {expected}")]
    FieldCountMismatch {
        /// The 1-based content line number within the section.
        line: usize,
        /// The declared field count.
        expected: usize,
        /// The field count actually found.
        found: usize,
    },
}

/// The error type for [`Events::shift_all`].
#[derive(ThisError, Debug)]
pub enum ShiftError {
    /// An event has no `Start` or `End` field to shift.
    #[error("event on line {line} has no Start or End field")]
    UnshiftableEvent {
        /// The 1-based content line number within the section.
        line: usize,
    },
    /// An event carries a timestamp that could not be shifted.
    #[error("event on line {line} has an unusable timestamp")]
    Timestamp {
        /// The 1-based content line number within the section.
        line: usize,
        /// The underlying timestamp error.
        #[source]
        source: TimestampError,
    },
}

/// The error type for [`shift_script`].
#[derive(ThisError, Debug)]
pub enum ShiftScriptError {
    /// The event table could not be built from the script.
    #[error("events section could not be parsed")]
    Parse {
        /// The underlying parse error.
        #[from]
        source: ParseError,
    },
    /// The event table could not be shifted.
    #[error("events could not be shifted")]
    Shift {
        /// The underlying shift error.
        #[from]
        source: ShiftError,
    },
}

/// One timed entry of the event table.
///
/// `fields` pairs every declared field name with its raw value, in declared order, so lookup
/// by name and serialization order coexist. Values stay raw strings; only `Start` and `End`
/// are ever interpreted, and only while shifting.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Event {
    /// The type label before the first colon (`Dialogue`, `Comment`, ...).
    pub kind: String,
    /// The `(field name, raw value)` pairs, in declared format order.
    pub fields: Vec<(String, String)>,
    line: usize,
}

impl Event {

    /// Returns the raw value of the named field, if the format declares it.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the 1-based content line number this event came from within its section.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns whether this event carries both a `Start` and an `End` field.
    pub fn shiftable(&self) -> bool {
        self.field(START_FIELD).is_some() && self.field(END_FIELD).is_some()
    }

    fn set_field(&mut self, name: &str, value: String) {
        if let Some(field) = self.fields.iter_mut().find(|(field, _)| field == name) {
            field.1 = value;
        }
    }
}

/// The event table of a script: the declared field order plus every event in file order.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Events {
    /// The field names of the format line, in declared order.
    pub formats: Vec<String>,
    /// Every event, in file order.
    pub events: Vec<Event>,
}

impl Events {

    /// Builds the event table from the `[Events]` section of a script.
    pub fn from_script(script: &Script) -> ParseResult<Self> {
        Self::parse(script.section(EVENTS_HEADER).ok_or(ParseError::MissingEventsSection)?)
    }

    /// Builds the event table from a section's content lines.
    ///
    /// The first content line must be the format line. Every following non-blank line becomes
    /// one event; a line whose comma-split piece count differs from the declared field count
    /// is rejected outright rather than truncated or padded.
    pub fn parse(section: &Section) -> ParseResult<Self> {

        let format_line = section.lines.first().ok_or(ParseError::MissingFormatLine)?;
        let (label, names) = format_line.split_once(':')
            .ok_or_else(|| ParseError::MalformedFormatLine { line: format_line.clone() })?;

        if label.trim() != FORMAT_LABEL {
            return Err(ParseError::MalformedFormatLine { line: format_line.clone() })
        }

        let mut formats: Vec<String> = vec![];

        for name in names.split(',') {

            let name = name.trim();

            if name.is_empty() {
                return Err(ParseError::EmptyFieldName)
            }
            if formats.iter().any(|format| format == name) {
                return Err(ParseError::DuplicateFieldName { name: name.to_owned() })
            }

            formats.push(name.to_owned());
        }

        let mut events = vec![];

        for (index, line) in section.lines.iter().enumerate().skip(1) {

            let number = index + 1;

            if line.trim().is_empty() {
                continue
            }

            let (kind, rest) = line.split_once(':')
                .ok_or(ParseError::MalformedEvent { line: number })?;
            let pieces: Vec<&str> = rest.splitn(formats.len(), ',').collect();

            if pieces.len() != formats.len() {
                return Err(
                    ParseError::FieldCountMismatch {
                        line: number,
                        expected: formats.len(),
                        found: pieces.len(),
                    }
                )
            }

            events.push(
                Event {
                    kind: kind.trim().to_owned(),
                    fields: formats.iter()
                        .cloned()
                        .zip(pieces.iter().map(|piece| piece.trim().to_owned()))
                        .collect(),
                    line: number,
                }
            );
        }

        Ok(Self { formats, events })
    }

    /// Shifts the `Start` and `End` timestamps of every event by `delta` in the given
    /// direction.
    ///
    /// The first event that cannot be shifted aborts the operation; events already shifted at
    /// that point keep their new values, so callers must discard the table on failure instead
    /// of writing it out.
    pub fn shift_all(&mut self, direction: Direction, delta: &Delta) -> ShiftResult<()> {

        for event in &mut self.events {

            for name in [START_FIELD, END_FIELD] {

                let value = match event.field(name) {
                    Some(value) => value,
                    None => return Err(ShiftError::UnshiftableEvent { line: event.line }),
                };
                let shifted = Timestamp::parse(value)
                    .and_then(|timestamp| timestamp.shift(direction, delta))
                    .map_err(|source| ShiftError::Timestamp { line: event.line, source })?;

                event.set_field(name, shifted.to_string());
            }
        }

        Ok(())
    }

    /// Linearizes the event table back into section content lines.
    ///
    /// The format line comes back with one space after each comma; event rows come back with
    /// none, mirroring how scripts are conventionally written.
    pub fn to_lines(&self) -> Vec<String> {

        let mut lines = Vec::with_capacity(self.events.len() + 1);

        lines.push(format!("{}: {}", FORMAT_LABEL, self.formats.join(", ")));

        for event in &self.events {
            let values: Vec<&str> = event.fields.iter()
                .map(|(_, value)| value.as_str())
                .collect();
            lines.push(format!("{}: {}", event.kind, values.join(",")));
        }

        lines
    }

    /// Replaces the content of the script's `[Events]` section with this table's lines,
    /// appending the section at the end of the script if it is missing.
    pub fn store(&self, script: &mut Script) {
        script.open_section(EVENTS_HEADER).lines = self.to_lines();
    }
}

/// Shifts every event in the script's `[Events]` section by `delta` in the given direction.
///
/// This is all-or-nothing: the script is only modified once every event has shifted cleanly.
pub fn shift_script(
    script: &mut Script,
    direction: Direction,
    delta: &Delta,
) -> Result<(), ShiftScriptError> {

    let mut events = Events::from_script(script)?;

    events.shift_all(direction, delta)?;
    events.store(script);

    Ok(())
}
