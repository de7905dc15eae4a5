/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: MPL-2.0
 */

//! Operates on whole scripts.
//!
//! # Overview
//!
//! An ASS script is a sequence of sections. Each section opens with a bracketed header line
//! (`[Script Info]`, `[V4+ Styles]`, `[Events]`, ...) and runs until the next header or the end
//! of the file. This module keeps every section's content as raw lines; it attaches no meaning
//! to them. The [`events`](crate::events) module gives the `[Events]` section its meaning.
//!
//! Sections come back out in the order their headers first appeared, each one followed by a
//! single blank separator line.

#[cfg(test)]
mod tests;

mod scriptread;
mod scriptwrite;

pub use scriptread::*;
pub use scriptwrite::*;

/// A named block of raw content lines delimited by a bracketed header line.
///
/// `lines` holds the section's content exactly as encountered, minus the header line, blank
/// lines, and any surrounding whitespace.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Section {
    pub header: String,
    pub lines: Vec<String>,
}

/// A parsed script: every section, in order of first appearance.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Script {
    sections: Vec<Section>,
}

impl Script {

    /// Creates a script with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every section in output order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the section with exactly this header, if the script has one.
    pub fn section(&self, header: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.header == header)
    }

    /// Returns the section with exactly this header for modification, if the script has one.
    pub fn section_mut(&mut self, header: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|section| section.header == header)
    }

    /// Returns the section with this header for modification, appending an empty one at the
    /// end of the script first if it has no such section yet.
    pub fn open_section(&mut self, header: &str) -> &mut Section {
        let index = self.section_index(header);
        &mut self.sections[index]
    }

    /// Returns the position of the section with this header, appending an empty one first if
    /// the script has no such section yet.
    fn section_index(&mut self, header: &str) -> usize {
        match self.sections.iter().position(|section| section.header == header) {
            Some(index) => index,
            None => {
                self.sections.push(
                    Section {
                        header: header.to_owned(),
                        lines: vec![],
                    }
                );
                self.sections.len() - 1
            }
        }
    }
}
