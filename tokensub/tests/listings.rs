//! End-to-end tests rendering fixture listings from disk

use std::path::PathBuf;
use tokensub::formats::{HtmlFormat, TextFormat};
use tokensub::{
    Format, FormatError, FormatRegistry, ListingLoader, ListingProcessor, ProcessError,
    SubstitutionError, SymbolTable,
};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn render_fixture(format: &dyn Format, name: &str) -> Result<String, ProcessError> {
    let table = SymbolTable::standard();
    let loader = ListingLoader::from_path(fixture_path(name)).expect("fixture to open");
    let mut out: Vec<u8> = Vec::new();
    ListingProcessor::new(&table, format).process(loader.lines(), &mut out)?;
    Ok(String::from_utf8(out).expect("output is UTF-8"))
}

#[test]
fn html_listing_with_page_breaks() {
    let html = render_fixture(&HtmlFormat::default(), "pages.txt").unwrap();
    insta::assert_snapshot!(html.trim_end(), @r"
<html><body style='font-size:150%'><pre><code>
<hr>
[meta page 1]
&equiv; main: x = &alpha; &times; y<sup>2</sup>
<hr>
[meta page 2]
ret <sub>x</sub> <sub>X</sub>
</code></pre></body></html>
");
}

#[test]
fn text_listing_with_page_breaks_has_no_separators() {
    let text = render_fixture(&TextFormat, "pages.txt").unwrap();
    assert_eq!(
        text,
        "[meta page 1]\n☰ main: x = α × y²\n[meta page 2]\nret ₓ ₓ\n"
    );
}

#[test]
fn text_listing_realigns_short_labels() {
    let text = render_fixture(&TextFormat, "aligned.txt").unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines,
        vec!["→ L1\t\tjmp x₁", "\tmov Δ, 0", "→ ᵪ very long label\tnop"]
    );
}

#[test]
fn html_listing_realigns_like_text() {
    let html = render_fixture(&HtmlFormat::default(), "aligned.txt").unwrap();
    let lines: Vec<_> = html.lines().collect();
    assert_eq!(
        &lines[1..4],
        &[
            "&rarr; L1\t\tjmp x<sub>1</sub>",
            "\tmov &Delta;, 0",
            "&rarr; <sub>&lambda;</sub> very long label\tnop",
        ]
    );
}

#[test]
fn unknown_token_aborts_at_its_line() {
    let err = render_fixture(&TextFormat, "unknown_token.txt").unwrap_err();
    match err {
        ProcessError::Substitution(SubstitutionError::UnknownToken { token, line }) => {
            assert_eq!(token, "@omega@");
            assert_eq!(line, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unsupported_format_before_reading() {
    let registry = FormatRegistry::default();
    let err = registry.get("pdf").err().expect("pdf is not a format");
    assert_eq!(err, FormatError::UnsupportedFormat("pdf".to_string()));
    assert_eq!(err.to_string(), "Unsupported output format: pdf");
}

#[test]
fn registry_formats_render_the_same_source() {
    let registry = FormatRegistry::default();
    let table = SymbolTable::standard();
    let text = ListingProcessor::new(&table, registry.get("text").unwrap())
        .render_str("@lambda@")
        .unwrap();
    let html = ListingProcessor::new(&table, registry.get("html").unwrap())
        .render_str("@lambda@")
        .unwrap();
    assert_eq!(text, "λ\n");
    assert!(html.contains("\n&lambda;\n"));
}
