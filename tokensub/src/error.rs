//! Error types
//!
//! Every failure in tokensub is a deterministic content or configuration problem, so none of
//! these are retried. Substitution errors carry the 1-based line number and the offending text
//! so the source listing can be corrected quickly.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to resolve the tokens on a single line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionError {
    /// A token-shaped substring has no entry in the active table
    #[error("Unknown substitution token on line {line}: {token}")]
    UnknownToken { token: String, line: usize },

    /// A literal `@` survived substitution (stray delimiter or malformed token)
    #[error("Substitution failed for line {line}: \"{content}\"")]
    SubstitutionFailed { line: usize, content: String },
}

impl SubstitutionError {
    /// Line number the error was reported on
    pub fn line(&self) -> usize {
        match self {
            SubstitutionError::UnknownToken { line, .. } => *line,
            SubstitutionError::SubstitutionFailed { line, .. } => *line,
        }
    }
}

/// A symbol table that would break substitution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Malformed token in symbol table: {0}")]
    MalformedToken(String),

    #[error("Duplicate token in symbol table: {0}")]
    DuplicateToken(String),

    #[error("Rendering for {token} contains the token delimiter: {rendering:?}")]
    DelimiterInRendering { token: String, rendering: String },
}

/// Output format selection errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Errors raised while driving a listing through a format
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error(transparent)]
    Substitution(#[from] SubstitutionError),

    #[error("IO error reading line {line}: {source}")]
    Read { line: usize, source: io::Error },

    #[error("IO error: {0}")]
    Write(#[from] io::Error),
}

/// Errors opening a listing
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Error reading file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}
