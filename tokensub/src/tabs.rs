//! Tab realignment
//!
//! Listings put code two tab stops in. A line carrying a short label (an arrow and a name, say)
//! before its code uses a single tab once the label is rendered, but in the source the tokens
//! make the label wider than a tab stop and the author typed just one tab. After substitution
//! the code then lands a stop short.
//!
//! [`TabFixer`] looks at the plain-text rendering of the line, where visual width is
//! meaningful, and adds the missing tab when the label fits inside the first tab stop and is
//! followed by exactly one tab. HTML markup width is irrelevant to alignment, so HTML output is
//! fixed against the plain-text rendering too.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

pub const DEFAULT_TAB_WIDTH: usize = 8;

static TAB_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t+").unwrap());

/// First run of tabs in a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TabRun {
    /// Column of the first tab, in characters
    column: usize,
    /// Number of tabs in the run
    len: usize,
    /// Byte offset just past the run
    end: usize,
}

fn first_tab_run(line: &str) -> Option<TabRun> {
    TAB_RUN_REGEX.find(line).map(|m| TabRun {
        column: line[..m.start()].chars().count(),
        len: m.len(),
        end: m.end(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabFixer {
    tab_width: usize,
}

impl TabFixer {
    /// A width of zero is treated as one.
    pub fn new(tab_width: usize) -> Self {
        TabFixer {
            tab_width: tab_width.max(1),
        }
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Whether the plain-text `reference` needs its first tab run doubled
    pub fn needs_fix(&self, reference: &str) -> bool {
        match first_tab_run(reference) {
            None => false,
            // Tabs at the beginning of the line
            Some(run) if run.column == 0 => false,
            // Code aligns already
            Some(run) if run.column > self.tab_width || run.len != 1 => false,
            Some(_) => true,
        }
    }

    /// Fix `line` using the plain-text rendering `reference` of the same line
    ///
    /// Substitution never touches tabs, so the first tab run of `line` is the same run found in
    /// `reference`.
    pub fn fix<'a>(&self, line: &'a str, reference: &str) -> Cow<'a, str> {
        if !self.needs_fix(reference) {
            return Cow::Borrowed(line);
        }
        match first_tab_run(line) {
            Some(run) => {
                let mut fixed = String::with_capacity(line.len() + 1);
                fixed.push_str(&line[..run.end]);
                fixed.push('\t');
                fixed.push_str(&line[run.end..]);
                Cow::Owned(fixed)
            }
            None => Cow::Borrowed(line),
        }
    }
}

impl Default for TabFixer {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_WIDTH)
    }
}

/// Realign `line` against its plain-text rendering `reference`
pub fn fix_tabs(line: &str, reference: &str, tab_width: usize) -> String {
    TabFixer::new(tab_width).fix(line, reference).into_owned()
}
