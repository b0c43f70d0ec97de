//! Format trait definition
//!
//! An output format is a strategy plugged into the [`ListingProcessor`]: it picks which
//! rendering the final substitution pass uses and supplies the framing around the listing.
//! Line processing itself is shared by every format.
//!
//! [`ListingProcessor`]: crate::processor::ListingProcessor

use crate::symbols::Rendering;

/// Trait for listing output formats
///
/// # Examples
///
/// ```ignore
/// struct Markdown;
///
/// impl Format for Markdown {
///     fn name(&self) -> &str {
///         "markdown"
///     }
///
///     fn rendering(&self) -> Rendering {
///         Rendering::Text
///     }
///
///     fn header(&self) -> Option<&str> {
///         Some("```")
///     }
///
///     fn footer(&self) -> Option<&str> {
///         Some("```")
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "text", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Which symbol table column the emitted lines use
    fn rendering(&self) -> Rendering;

    /// Line emitted before the first listing line
    fn header(&self) -> Option<&str> {
        None
    }

    /// Line emitted after the last listing line
    fn footer(&self) -> Option<&str> {
        None
    }

    /// Line to emit before the given source line, if any
    ///
    /// Receives the source line with trailing whitespace stripped, before substitution.
    fn separator_before(&self, _line: &str) -> Option<&str> {
        None
    }
}
