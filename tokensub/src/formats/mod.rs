//! Format implementations
//!
//! Built-in output formats for rendered listings.

pub mod html;
pub mod text;

pub use html::{HtmlFormat, HtmlOptions};
pub use text::TextFormat;
