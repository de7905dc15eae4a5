/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: MPL-2.0
 */

//! Operates on individual event timestamps.
//!
//! Event timestamps take the form `H:MM:SS.CC`: unpadded hours, two-digit minutes and seconds,
//! and a fraction of a second. Parsing accepts between one and six fraction digits; rendering
//! always emits exactly two, truncated from the finer-grained internal value, as the format
//! requires centisecond timing.


use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use thiserror::Error as ThisError;

/// A specialized [`Result`](std::result::Result) type for timestamp operations.
pub type TimestampResult<T> = Result<T, TimestampError>;

const MICROS_PER_SECOND: u64 = 1_000_000;
const MICROS_PER_MINUTE: u64 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: u64 = 60 * MICROS_PER_MINUTE;
const MICROS_PER_CENTI: u64 = 10_000;

/// The error type for [`Timestamp`] operations.
#[derive(ThisError, Debug)]
pub enum TimestampError {
    /// The timestamp being parsed does not match `H:MM:SS.F`.
    #[error("timestamp `{value}` does not match H:MM:SS.F")]
    Malformed {
        /// The offending timestamp.
        value: String,
    },
    /// The timestamp being parsed has a minutes or seconds component of sixty or more.
    #[error("timestamp `{value}` has an out of range minutes or seconds component")]
    ComponentOutOfRange {
        /// The offending timestamp.
        value: String,
    },
    /// The shift being applied would move the timestamp before `0:00:00.00`.
    #[error("shift moves timestamp before 0:00:00.00")]
    Underflow,
    /// The timestamp lies, or the shift being applied would move it, beyond the representable
    /// range.
    #[error("timestamp goes beyond the representable range")]
    Overflow,
}

/// Defines whether a shift moves timestamps forward or backward.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Timestamps move forward by the delta.
    Add,
    /// Timestamps move backward by the delta.
    Subtract,
}

/// The magnitude of a shift, broken into components.
///
/// Every component is non-negative; [`Direction`] alone decides which way a shift goes.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Delta {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub microseconds: u64,
}

impl Delta {

    fn to_micros(self) -> Option<u64> {
        self.hours.checked_mul(MICROS_PER_HOUR)?
            .checked_add(self.minutes.checked_mul(MICROS_PER_MINUTE)?)?
            .checked_add(self.seconds.checked_mul(MICROS_PER_SECOND)?)?
            .checked_add(self.microseconds)
    }
}

/// An offset from the start of playback, kept at microsecond precision.
///
/// There is no date component; a timestamp is nothing more than elapsed time.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp {
    micros: u64,
}

impl Timestamp {

    /// Creates a timestamp from a count of elapsed microseconds.
    pub fn from_micros(micros: u64) -> Self {
        Self { micros }
    }

    /// Returns the count of elapsed microseconds.
    pub fn as_micros(self) -> u64 {
        self.micros
    }

    /// Parses a timestamp of the form `H:MM:SS.F`.
    ///
    /// Hours may be any number of digits; minutes and seconds may be one or two digits but must
    /// stay below sixty; the fraction may be one to six digits. Anything else is rejected. An
    /// hour count too large to hold at microsecond precision fails with
    /// [`TimestampError::Overflow`].
    pub fn parse(value: &str) -> TimestampResult<Self> {

        let malformed = || TimestampError::Malformed { value: value.to_owned() };

        let mut components = value.split(':');
        let hours = components.next().ok_or_else(malformed)?;
        let minutes = components.next().ok_or_else(malformed)?;
        let rest = components.next().ok_or_else(malformed)?;

        if components.next().is_some() {
            return Err(malformed())
        }

        let (seconds, fraction) = rest.split_once('.').ok_or_else(malformed)?;

        if !is_decimal(hours) || !is_decimal(minutes) || !is_decimal(seconds) {
            return Err(malformed())
        }
        if minutes.len() > 2 || seconds.len() > 2 {
            return Err(malformed())
        }
        if !is_decimal(fraction) || fraction.len() > 6 {
            return Err(malformed())
        }

        let hours = hours.parse::<u64>().map_err(|_| malformed())?;
        let minutes = minutes.parse::<u64>().map_err(|_| malformed())?;
        let seconds = seconds.parse::<u64>().map_err(|_| malformed())?;

        if minutes > 59 || seconds > 59 {
            return Err(TimestampError::ComponentOutOfRange { value: value.to_owned() })
        }

        // Right-pad the fraction out to microseconds, so `.3` means 300,000 of them.
        let fraction_micros = fraction.parse::<u64>().map_err(|_| malformed())?
            * 10u64.pow(6 - fraction.len() as u32);

        // Hours are unbounded by the grammar, so an absurd count can exceed what a
        // microsecond tick count can hold.
        let micros = hours.checked_mul(MICROS_PER_HOUR)
            .and_then(|total| total.checked_add(minutes * MICROS_PER_MINUTE))
            .and_then(|total| total.checked_add(seconds * MICROS_PER_SECOND))
            .and_then(|total| total.checked_add(fraction_micros))
            .ok_or(TimestampError::Overflow)?;

        Ok(Self::from_micros(micros))
    }

    /// Moves this timestamp by `delta` in the given direction.
    ///
    /// A backward shift past `0:00:00.00` fails with [`TimestampError::Underflow`]; there is no
    /// clamping or wrapping.
    pub fn shift(self, direction: Direction, delta: &Delta) -> TimestampResult<Self> {

        let amount = delta.to_micros().ok_or(TimestampError::Overflow)?;

        let micros = match direction {
            Direction::Add => self.micros.checked_add(amount).ok_or(TimestampError::Overflow)?,
            Direction::Subtract => {
                self.micros.checked_sub(amount).ok_or(TimestampError::Underflow)?
            }
        };

        Ok(Self::from_micros(micros))
    }
}

impl FromStr for Timestamp {

    type Err = TimestampError;

    fn from_str(value: &str) -> TimestampResult<Self> {
        Self::parse(value)
    }
}

impl Display for Timestamp {

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {

        let hours = self.micros / MICROS_PER_HOUR;
        let minutes = self.micros % MICROS_PER_HOUR / MICROS_PER_MINUTE;
        let seconds = self.micros % MICROS_PER_MINUTE / MICROS_PER_SECOND;
        let centis = self.micros % MICROS_PER_SECOND / MICROS_PER_CENTI;

        write!(f, "{}:{:02}:{:02}.{:02}", hours, minutes, seconds, centis)
    }
}

fn is_decimal(component: &str) -> bool {
    !component.is_empty() && component.bytes().all(|byte| byte.is_ascii_digit())
}
