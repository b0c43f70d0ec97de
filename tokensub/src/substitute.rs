//! Line substitution engine
//!
//! A [`Substituter`] resolves every token on a line through an injected [`TokenMap`]. The map
//! decides the output mode; the engine is the same for text and HTML, and tests can drive it
//! with a hand-built table.
//!
//! A line resolves in three steps:
//!
//! 1. every token-shaped substring must be known, otherwise the line fails with
//!    [`SubstitutionError::UnknownToken`]
//! 2. each distinct token is replaced everywhere on the line
//! 3. any `@` left over fails the line with [`SubstitutionError::SubstitutionFailed`]

use crate::error::SubstitutionError;
use crate::symbols::{Rendering, TokenMap};
use crate::token::{find_tokens, has_delimiter};

pub struct Substituter<'t> {
    map: &'t TokenMap,
}

impl<'t> Substituter<'t> {
    pub fn new(map: &'t TokenMap) -> Self {
        Substituter { map }
    }

    pub fn rendering(&self) -> Rendering {
        self.map.rendering()
    }

    /// Resolve all tokens on `line`, reporting failures against `line_number`
    pub fn substitute(&self, line: &str, line_number: usize) -> Result<String, SubstitutionError> {
        let mut resolved = line.to_string();
        let mut replaced: Vec<&str> = Vec::new();

        for token in find_tokens(line) {
            let rendering =
                self.map
                    .get(token)
                    .ok_or_else(|| SubstitutionError::UnknownToken {
                        token: token.to_string(),
                        line: line_number,
                    })?;
            if replaced.contains(&token) {
                continue;
            }
            resolved = resolved.replace(token, rendering);
            replaced.push(token);
        }

        if has_delimiter(&resolved) {
            return Err(SubstitutionError::SubstitutionFailed {
                line: line_number,
                content: resolved,
            });
        }

        Ok(resolved)
    }
}
