//! Plain-text format
//!
//! Tokens become Unicode glyphs; lines are emitted as-is with no framing.

use crate::format::Format;
use crate::symbols::Rendering;

#[derive(Debug, Default, Clone, Copy)]
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text with Unicode glyphs"
    }

    fn rendering(&self) -> Rendering {
        Rendering::Text
    }
}
