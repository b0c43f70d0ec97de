//! Format registry for format discovery and selection
//!
//! Formats are registered under their name and looked up by the name given on the command
//! line. An unknown name is a [`FormatError::UnsupportedFormat`], raised before any listing
//! line is read.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{HtmlFormat, HtmlOptions, TextFormat};
use std::collections::HashMap;

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults(HtmlOptions::default());
/// let format = registry.get("html")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::UnsupportedFormat(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in `text` and `html` formats
    pub fn with_defaults(html: HtmlOptions) -> Self {
        let mut registry = Self::new();

        registry.register(TextFormat);
        registry.register(HtmlFormat::new(html));

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults(HtmlOptions::default())
    }
}
