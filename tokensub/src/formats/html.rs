//! HTML format
//!
//! Tokens become HTML entities and markup. The listing is wrapped in a single page:
//!
//! ```text
//! <html><body style='font-size:150%'><pre><code>
//! ...listing lines...
//! </code></pre></body></html>
//! ```
//!
//! A source line containing the page-break marker (`[meta` by default) is preceded by a
//! separator line (`<hr>`). The marked line itself is still rendered and emitted.
//!
//! Lines are not HTML-escaped. Listings are expected to carry markup-safe text, and the HTML
//! renderings in the symbol table are markup themselves.

use crate::format::Format;
use crate::symbols::Rendering;

pub const DEFAULT_HEADER: &str = "<html><body style='font-size:150%'><pre><code>";
pub const DEFAULT_FOOTER: &str = "</code></pre></body></html>";
pub const DEFAULT_SEPARATOR: &str = "<hr>";
pub const DEFAULT_PAGE_BREAK_MARKER: &str = "[meta";

/// Page framing for [`HtmlFormat`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    pub header: String,
    pub footer: String,
    pub separator: String,
    /// Substring marking a page break; an empty marker disables separators
    pub page_break_marker: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        HtmlOptions {
            header: DEFAULT_HEADER.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            page_break_marker: DEFAULT_PAGE_BREAK_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        HtmlFormat { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    /// Whether `line` carries the page-break marker
    pub fn is_page_break(&self, line: &str) -> bool {
        !self.options.page_break_marker.is_empty() && line.contains(&self.options.page_break_marker)
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Single HTML page with entity markup"
    }

    fn rendering(&self) -> Rendering {
        Rendering::Html
    }

    fn header(&self) -> Option<&str> {
        Some(&self.options.header)
    }

    fn footer(&self) -> Option<&str> {
        Some(&self.options.footer)
    }

    fn separator_before(&self, line: &str) -> Option<&str> {
        if self.is_page_break(line) {
            Some(&self.options.separator)
        } else {
            None
        }
    }
}
