//! Token substitution for program listings
//!
//!     Listings are authored in plain ASCII with placeholder tokens such as `@alpha@` or
//!     `@sub_1@` wherever a glyph cannot be embedded directly. This crate renders them in two
//!     forms from the same source: plain text with Unicode glyphs, and a single HTML page with
//!     entity markup.
//!
//! Architecture
//!
//!     - symbols: the paired symbol table and its flattened per-mode token maps
//!     - token: the token lexical pattern
//!     - substitute: the line substitution engine, parameterized by a token map
//!     - tabs: the tab realignment heuristic
//!     - Format trait: framing and rendering choice for an output format
//!     - FormatRegistry: discovery and selection of formats by name
//!     - processor: the shared line pipeline that drives a listing through a format
//!     - loader: opening listings from files or strings
//!
//!     This is a pure lib, it powers tokensub-cli but is shell agnostic: nothing here prints,
//!     reads env vars or exits. Errors are returned to the caller.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── token.rs
//!     ├── symbols.rs
//!     ├── substitute.rs
//!     ├── tabs.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── text.rs
//!     │   ├── html.rs
//!     │   └── mod.rs
//!     ├── processor.rs
//!     ├── loader.rs
//!     ├── lib.rs
//!
//! Line Pipeline
//!
//!     Each line is stripped of trailing whitespace, substituted with the text table to get a
//!     reference rendering, realigned against that reference, then substituted with the
//!     format's own table. The first unknown token or stray `@` aborts the run.

pub mod error;
pub mod format;
pub mod formats;
pub mod loader;
pub mod processor;
pub mod registry;
pub mod substitute;
pub mod symbols;
pub mod tabs;
pub mod token;

pub use error::{FormatError, LoaderError, ProcessError, SubstitutionError, TableError};
pub use format::Format;
pub use loader::ListingLoader;
pub use processor::{ListingProcessor, ProcessSummary, ProcessedLine};
pub use registry::FormatRegistry;
pub use substitute::Substituter;
pub use symbols::{Rendering, Symbol, SymbolTable, TokenMap};
pub use tabs::{fix_tabs, TabFixer, DEFAULT_TAB_WIDTH};
