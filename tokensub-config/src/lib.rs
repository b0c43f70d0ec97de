//! Shared configuration loader for tokensub.
//!
//! `defaults/tokensub.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`TokensubConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tokensub::formats::HtmlOptions;
use tokensub::TabFixer;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/tokensub.default.toml");

/// Top-level configuration consumed by tokensub applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TokensubConfig {
    pub output: OutputConfig,
    pub tabs: TabsConfig,
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Format name used when none is given on the command line
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TabsConfig {
    pub width: usize,
}

/// Page framing for HTML output.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub header: String,
    pub footer: String,
    pub separator: String,
    pub page_break_marker: String,
}

impl TabsConfig {
    pub fn fixer(&self) -> TabFixer {
        TabFixer::new(self.width)
    }
}

impl From<&HtmlConfig> for HtmlOptions {
    fn from(config: &HtmlConfig) -> Self {
        HtmlOptions {
            header: config.header.clone(),
            footer: config.footer.clone(),
            separator: config.separator.clone(),
            page_break_marker: config.page_break_marker.clone(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TokensubConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TokensubConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokensub::DEFAULT_TAB_WIDTH;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.output.format, "text");
        assert_eq!(config.tabs.width, DEFAULT_TAB_WIDTH);
        assert_eq!(config.html.page_break_marker, "[meta");
        assert_eq!(HtmlOptions::from(&config.html), HtmlOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("tabs.width", 4_i64)
            .expect("override to apply")
            .set_override("output.format", "html")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.tabs.width, 4);
        assert_eq!(config.tabs.fixer().tab_width(), 4);
        assert_eq!(config.output.format, "html");
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[html]\nseparator = \"<hr class='page'>\"").unwrap();
        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.html.separator, "<hr class='page'>");
        assert_eq!(config.html.header, tokensub::formats::html::DEFAULT_HEADER);
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new().with_file("no/such/tokensub.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("no/such/tokensub.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.tabs.width, DEFAULT_TAB_WIDTH);
    }
}
