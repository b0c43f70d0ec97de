//! Symbol table
//!
//! Each symbol pairs a token with its two renderings: a plain-text glyph and HTML markup. Both
//! output modes look tokens up through a flattened [`TokenMap`] derived from the one paired
//! table, so adding a symbol updates both views at once.
//!
//! # Invariants
//!
//! Checked by [`SymbolTable::new`]:
//!
//! - every token matches the token pattern as a whole
//! - a token appears at most once
//! - no rendering contains `@`, which keeps replacement order-independent
//!
//! # Known limitation
//!
//! Unicode lacks many subscript letters, so some tokens share a plain glyph (`@sub_x@` and
//! `@sub_X@` both print `ₓ`). The text rendering is therefore not reversible.
//! [`SymbolTable::ambiguous_glyphs`] lists the affected groups.

use crate::error::TableError;
use crate::token::{has_delimiter, is_token};
use std::collections::HashMap;

/// Which column of the symbol table to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rendering {
    /// Unicode glyphs, for monospace text listings
    Text,
    /// HTML entities and markup
    Html,
}

/// One token and its renderings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub token: &'static str,
    pub text: &'static str,
    pub html: &'static str,
}

impl Symbol {
    pub const fn new(token: &'static str, text: &'static str, html: &'static str) -> Self {
        Symbol { token, text, html }
    }

    pub fn rendering(&self, rendering: Rendering) -> &'static str {
        match rendering {
            Rendering::Text => self.text,
            Rendering::Html => self.html,
        }
    }
}

const fn sym(token: &'static str, text: &'static str, html: &'static str) -> Symbol {
    Symbol::new(token, text, html)
}

/// The built-in table.
pub const STANDARD_SYMBOLS: &[Symbol] = &[
    // Greek letters.
    sym("@sub_beta@", "ᵦ", "<sub>&beta;</sub>"),
    sym("@sub_gamma@", "ᵧ", "<sub>&gamma;</sub>"),
    sym("@alpha@", "α", "&alpha;"),
    sym("@beta@", "β", "&beta;"),
    sym("@gamma@", "γ", "&gamma;"),
    sym("@delta@", "Δ", "&Delta;"),
    sym("@eps@", "ε", "&epsilon;"),
    sym("@lambda@", "λ", "&lambda;"),
    // No Greek subscript in Unicode, Latin stands in.
    sym("@sub_alpha@", "ₐ", "<sub>&alpha;</sub>"),
    sym("@sub_eps@", "ₑ", "<sub>&epsilon;</sub>"),
    // chi
    sym("@sub_lambda@", "ᵪ", "<sub>&lambda;</sub>"),
    // rho
    sym("@sub_delta@", "ᵨ", "<sub>&Delta;</sub>"),
    // No capital subscripts, lowercase stands in.
    sym("@sub_S@", "ₛ", "<sub>S</sub>"),
    sym("@sub_T@", "ₜ", "<sub>T</sub>"),
    sym("@sub_M@", "ₘ", "<sub>M</sub>"),
    sym("@sub_E@", "ₑ", "<sub>E</sub>"),
    sym("@sub_A@", "ₐ", "<sub>A</sub>"),
    sym("@sub_I@", "ᵢ", "<sub>I</sub>"),
    sym("@sub_X@", "ₓ", "<sub>X</sub>"),
    sym("@sub_U@", "ᵤ", "<sub>U</sub>"),
    // Shares ₓ with @sub_X@.
    sym("@sub_x@", "ₓ", "<sub>x</sub>"),
    sym("@sub_R@", "ᵣ", "<sub>R</sub>"),
    sym("@sub_K@", "ₖ", "<sub>K</sub>"),
    sym("@sub_L@", "ₗ", "<sub>L</sub>"),
    sym("@sub_P@", "ₚ", "<sub>P</sub>"),
    sym("@sub_N@", "ₙ", "<sub>N</sub>"),
    // No subscript y, using j.
    sym("@sub_y@", "ⱼ", "<sub>y</sub>"),
    // No subscript w, using v.
    sym("@sub_W@", "ᵥ", "<sub>W</sub>"),
    // No subscript c at all.
    sym("@sub_C@", "ᵩ", "<sub>C</sub>"),
    sym("@sub_Q@", "ₒ", "<sub>Q</sub>"),
    // Transcription placeholders for unclear characters.
    sym("@sub_?@", "?", "<sub>?</sub>"),
    sym("@sup_?@", "?", "<sup>?</sup>"),
    sym("@?@", "?", "?"),
    // No subscript dot.
    sym("@sub_dot@", ".", "<sub>.</sub>"),
    // Digits.
    sym("@sub_0@", "₀", "<sub>0</sub>"),
    sym("@sub_1@", "₁", "<sub>1</sub>"),
    sym("@sub_2@", "₂", "<sub>2</sub>"),
    sym("@sub_3@", "₃", "<sub>3</sub>"),
    sym("@sub_4@", "₄", "<sub>4</sub>"),
    sym("@sub_5@", "₅", "<sub>5</sub>"),
    sym("@sub_6@", "₆", "<sub>6</sub>"),
    sym("@sub_7@", "₇", "<sub>7</sub>"),
    sym("@sub_8@", "₈", "<sub>8</sub>"),
    sym("@sub_9@", "₉", "<sub>9</sub>"),
    sym("@sup_0@", "⁰", "<sup>0</sup>"),
    sym("@sup_1@", "¹", "<sup>1</sup>"),
    sym("@sup_2@", "²", "<sup>2</sup>"),
    sym("@sup_3@", "³", "<sup>3</sup>"),
    sym("@sup_4@", "⁴", "<sup>4</sup>"),
    sym("@sup_5@", "⁵", "<sup>5</sup>"),
    sym("@sup_6@", "⁶", "<sup>6</sup>"),
    sym("@sup_7@", "⁷", "<sup>7</sup>"),
    sym("@sup_8@", "⁸", "<sup>8</sup>"),
    sym("@sup_9@", "⁹", "<sup>9</sup>"),
    sym("@sup_+@", "⁺", "<sup>+</sup>"),
    // Most fonts draw this glyph badly; it only shows up in comments.
    sym("@sup_F@", "ꟳ", "<sup>F</sup>"),
    // Special symbols.
    sym("@hamb@", "☰", "&equiv;"),
    sym("@times@", "×", "&times;"),
    sym("@arr@", "→", "&rarr;"),
    sym("@sup_minus@", "⁻", "<sup>-</sup>"),
    sym("@hand@", "☛", "&#9755;"),
    sym("@sub_pipe@", "╷", "<sub>|</sub>"),
    // Closest glyph to a rectangle with a dash; the space pads it to two columns.
    sym("@rect_dash@", "▣ ", "&#9635;"),
    sym("@circled_v@", "Ⓥ", "&#9419;"),
    sym("@sup@", "⊃", "&sup;"),
];

/// Immutable, validated collection of symbols
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    index: HashMap<&'static str, usize>,
}

impl SymbolTable {
    /// Build a table, checking the table invariants
    pub fn new<I>(symbols: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let symbols: Vec<Symbol> = symbols.into_iter().collect();
        let mut index = HashMap::with_capacity(symbols.len());

        for (i, symbol) in symbols.iter().enumerate() {
            if !is_token(symbol.token) {
                return Err(TableError::MalformedToken(symbol.token.to_string()));
            }
            for rendering in [symbol.text, symbol.html] {
                if has_delimiter(rendering) {
                    return Err(TableError::DelimiterInRendering {
                        token: symbol.token.to_string(),
                        rendering: rendering.to_string(),
                    });
                }
            }
            if index.insert(symbol.token, i).is_some() {
                return Err(TableError::DuplicateToken(symbol.token.to_string()));
            }
        }

        Ok(SymbolTable { symbols, index })
    }

    /// The built-in table
    ///
    /// [`STANDARD_SYMBOLS`] is checked against the invariants by the test suite, so it is
    /// indexed here without re-validation.
    pub fn standard() -> Self {
        let symbols = STANDARD_SYMBOLS.to_vec();
        let index = symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| (symbol.token, i))
            .collect();
        SymbolTable { symbols, index }
    }

    pub fn lookup(&self, token: &str) -> Option<&Symbol> {
        self.index.get(token).map(|&i| &self.symbols[i])
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Flatten one rendering column into a token lookup map
    pub fn token_map(&self, rendering: Rendering) -> TokenMap {
        TokenMap {
            rendering,
            map: self
                .symbols
                .iter()
                .map(|symbol| (symbol.token, symbol.rendering(rendering)))
                .collect(),
        }
    }

    /// Plain glyphs shared by more than one token, with the tokens sharing each
    ///
    /// Groups are ordered by first appearance in the table.
    pub fn ambiguous_glyphs(&self) -> Vec<(&'static str, Vec<&'static str>)> {
        let mut groups: Vec<(&'static str, Vec<&'static str>)> = Vec::new();
        for symbol in &self.symbols {
            match groups.iter_mut().find(|(glyph, _)| *glyph == symbol.text) {
                Some((_, tokens)) => tokens.push(symbol.token),
                None => groups.push((symbol.text, vec![symbol.token])),
            }
        }
        groups.retain(|(_, tokens)| tokens.len() > 1);
        groups
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Token → rendering lookup for one output mode
#[derive(Debug, Clone)]
pub struct TokenMap {
    rendering: Rendering,
    map: HashMap<&'static str, &'static str>,
}

impl TokenMap {
    pub fn get(&self, token: &str) -> Option<&'static str> {
        self.map.get(token).copied()
    }

    pub fn rendering(&self) -> Rendering {
        self.rendering
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_standard_table_is_valid() {
        let table = SymbolTable::new(STANDARD_SYMBOLS.iter().copied());
        assert!(table.is_ok(), "standard table invalid: {:?}", table.err());
        assert_eq!(table.unwrap().len(), STANDARD_SYMBOLS.len());
    }

    #[test]
    fn test_standard_matches_validated_build() {
        let standard = SymbolTable::standard();
        let validated = SymbolTable::new(STANDARD_SYMBOLS.iter().copied()).unwrap();
        assert_eq!(standard.len(), validated.len());
        for symbol in validated.iter() {
            assert_eq!(standard.lookup(symbol.token), Some(symbol));
        }
    }

    #[rstest]
    #[case("@alpha@", "α", "&alpha;")]
    #[case("@delta@", "Δ", "&Delta;")]
    #[case("@sub_gamma@", "ᵧ", "<sub>&gamma;</sub>")]
    #[case("@sub_U@", "ᵤ", "<sub>U</sub>")]
    #[case("@sup_+@", "⁺", "<sup>+</sup>")]
    #[case("@sup_minus@", "⁻", "<sup>-</sup>")]
    #[case("@?@", "?", "?")]
    #[case("@rect_dash@", "▣ ", "&#9635;")]
    #[case("@hand@", "☛", "&#9755;")]
    fn test_standard_entries(#[case] token: &str, #[case] text: &str, #[case] html: &str) {
        let table = SymbolTable::standard();
        let symbol = table.lookup(token).expect("token in table");
        assert_eq!(symbol.text, text);
        assert_eq!(symbol.html, html);
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(SymbolTable::standard().lookup("@omega@").is_none());
    }

    #[test]
    fn test_all_digits_present() {
        let table = SymbolTable::standard();
        for d in 0..10 {
            assert!(table.lookup(&format!("@sub_{}@", d)).is_some());
            assert!(table.lookup(&format!("@sup_{}@", d)).is_some());
        }
    }

    #[test]
    fn test_token_maps_share_keys() {
        let table = SymbolTable::standard();
        let text = table.token_map(Rendering::Text);
        let html = table.token_map(Rendering::Html);
        assert_eq!(text.len(), table.len());
        assert_eq!(html.len(), table.len());
        assert_eq!(text.rendering(), Rendering::Text);
        assert_eq!(html.rendering(), Rendering::Html);
        for symbol in table.iter() {
            assert_eq!(text.get(symbol.token), Some(symbol.text));
            assert_eq!(html.get(symbol.token), Some(symbol.html));
        }
    }

    #[test]
    fn test_rejects_malformed_token() {
        let err = SymbolTable::new([Symbol::new("alpha", "α", "&alpha;")]).unwrap_err();
        assert_eq!(err, TableError::MalformedToken("alpha".to_string()));
    }

    #[test]
    fn test_rejects_duplicate_token() {
        let err = SymbolTable::new([
            Symbol::new("@a@", "a", "a"),
            Symbol::new("@a@", "b", "b"),
        ])
        .unwrap_err();
        assert_eq!(err, TableError::DuplicateToken("@a@".to_string()));
    }

    #[test]
    fn test_rejects_delimiter_in_rendering() {
        let err = SymbolTable::new([Symbol::new("@at@", "@", "&#64;")]).unwrap_err();
        assert!(matches!(err, TableError::DelimiterInRendering { .. }));
    }

    #[test]
    fn test_ambiguous_glyphs() {
        let groups = SymbolTable::standard().ambiguous_glyphs();
        assert!(groups.contains(&("ₓ", vec!["@sub_X@", "@sub_x@"])));
        assert!(groups.contains(&("ₐ", vec!["@sub_alpha@", "@sub_A@"])));
        assert!(groups.contains(&("ₑ", vec!["@sub_eps@", "@sub_E@"])));
        assert!(groups.contains(&("?", vec!["@sub_?@", "@sup_?@", "@?@"])));
        assert_eq!(groups.len(), 4);
    }

    #[test]
    fn test_ambiguous_glyphs_empty_for_distinct_table() {
        let table = SymbolTable::new([
            Symbol::new("@a@", "a", "a"),
            Symbol::new("@b@", "b", "b"),
        ])
        .unwrap();
        assert!(table.ambiguous_glyphs().is_empty());
    }
}
