//! Listing processor
//!
//! Drives a line stream through one [`Format`]. Every format shares the same per-line pipeline:
//!
//! 1. strip trailing whitespace
//! 2. emit the format's separator, if the line asks for one
//! 3. substitute with the text table to get the plain-text reference line
//! 4. realign tabs in the source line against that reference
//! 5. substitute the realigned line with the format's own table and emit it
//!
//! Step 3 runs for every format because alignment only means something in the glyph form.
//! Lines are written as soon as they are processed, so output for earlier lines stays
//! written when a later line fails.

use crate::error::{ProcessError, SubstitutionError};
use crate::format::Format;
use crate::substitute::Substituter;
use crate::symbols::{Rendering, SymbolTable, TokenMap};
use crate::tabs::TabFixer;
use std::io::{self, Write};

/// A single rendered line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedLine {
    pub content: String,
    /// Whether tab realignment added a tab
    pub realigned: bool,
}

/// Counters for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Source lines rendered
    pub lines: usize,
    /// Lines that had a tab added
    pub tab_fixes: usize,
}

pub struct ListingProcessor<'f> {
    format: &'f dyn Format,
    text_map: TokenMap,
    output_map: TokenMap,
    tabs: TabFixer,
}

impl<'f> ListingProcessor<'f> {
    pub fn new(table: &SymbolTable, format: &'f dyn Format) -> Self {
        ListingProcessor {
            format,
            text_map: table.token_map(Rendering::Text),
            output_map: table.token_map(format.rendering()),
            tabs: TabFixer::default(),
        }
    }

    pub fn with_tab_fixer(mut self, tabs: TabFixer) -> Self {
        self.tabs = tabs;
        self
    }

    pub fn format(&self) -> &dyn Format {
        self.format
    }

    /// Render one source line; `line_number` is 1-based
    pub fn process_line(
        &self,
        line: &str,
        line_number: usize,
    ) -> Result<ProcessedLine, SubstitutionError> {
        let line = line.trim_end();
        let reference = Substituter::new(&self.text_map).substitute(line, line_number)?;
        let realigned = self.tabs.needs_fix(&reference);
        let fixed = self.tabs.fix(line, &reference);
        let content = Substituter::new(&self.output_map).substitute(&fixed, line_number)?;
        Ok(ProcessedLine { content, realigned })
    }

    /// Render a whole line stream into `out`, framing included
    pub fn process<I, W>(&self, lines: I, out: &mut W) -> Result<ProcessSummary, ProcessError>
    where
        I: IntoIterator<Item = io::Result<String>>,
        W: Write + ?Sized,
    {
        let mut summary = ProcessSummary::default();

        if let Some(header) = self.format.header() {
            writeln!(out, "{}", header)?;
        }

        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|source| ProcessError::Read {
                line: line_number,
                source,
            })?;
            let line = line.trim_end();

            if let Some(separator) = self.format.separator_before(line) {
                writeln!(out, "{}", separator)?;
            }

            let processed = self.process_line(line, line_number)?;
            writeln!(out, "{}", processed.content)?;

            summary.lines += 1;
            if processed.realigned {
                summary.tab_fixes += 1;
            }
        }

        if let Some(footer) = self.format.footer() {
            writeln!(out, "{}", footer)?;
        }
        out.flush()?;

        Ok(summary)
    }

    /// Render an in-memory source to a string
    pub fn render_str(&self, source: &str) -> Result<String, ProcessError> {
        let mut out: Vec<u8> = Vec::new();
        self.process(source.lines().map(|l| Ok(l.to_string())), &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}
