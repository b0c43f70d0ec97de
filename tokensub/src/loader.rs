//! Listing loading utilities
//!
//! `ListingLoader` opens a listing from a file or a string and hands its lines to a
//! [`ListingProcessor`](crate::processor::ListingProcessor). Opening happens up front, so a
//! missing file is reported before any output is written.
//!
//! # Example
//!
//! ```rust
//! use tokensub::loader::ListingLoader;
//!
//! let loader = ListingLoader::from_path("listing.txt")?;
//! let summary = processor.process(loader.lines(), &mut std::io::stdout())?;
//! ```

use crate::error::LoaderError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::Path;

pub struct ListingLoader {
    reader: Box<dyn BufRead>,
}

impl ListingLoader {
    /// Open a listing file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        Self::from_reader(Cursor::new(source.into().into_bytes()))
    }

    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        ListingLoader {
            reader: Box::new(reader),
        }
    }

    /// Lines without their trailing newline; invalid UTF-8 yields an error item
    pub fn lines(self) -> io::Lines<Box<dyn BufRead>> {
        self.reader.lines()
    }
}
