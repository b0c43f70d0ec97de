//! Command-line interface for tokensub
//! Renders a listing written with `@..@` tokens as Unicode text or as a single HTML page.
//!
//! Usage:
//!   tokensub `<path>` [--format `<format>`] [--config `<file>`] [--tab-width `<n>`]  - Render a listing
//!   tokensub --list-formats                                                    - List output formats

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io;
use tokensub::formats::HtmlOptions;
use tokensub::{FormatRegistry, ListingLoader, ListingProcessor, SymbolTable};
use tokensub_config::{ConfigError, Loader, TokensubConfig};

fn build_cli() -> Command {
    Command::new("tokensub")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate program listings by substituting tokens")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the listing source")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'text' or 'html' (default from config: text)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("tab-width")
                .long("tab-width")
                .help("Tab stop width used for realignment")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Print a summary to stderr when done")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    });
    let registry = FormatRegistry::with_defaults(HtmlOptions::from(&config.html));

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing formats");
    let format = matches
        .get_one::<String>("format")
        .unwrap_or(&config.output.format);
    handle_render_command(
        &registry,
        &config,
        path,
        format,
        matches.get_flag("verbose"),
    );
}

/// Layer `--config` and `--tab-width` over the embedded defaults
fn load_config(matches: &ArgMatches) -> Result<TokensubConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(width) = matches.get_one::<u32>("tab-width") {
        loader = loader.set_override("tabs.width", i64::from(*width))?;
    }
    loader.build()
}

/// Handle rendering a listing to stdout
fn handle_render_command(
    registry: &FormatRegistry,
    config: &TokensubConfig,
    path: &str,
    format: &str,
    verbose: bool,
) {
    // Format and input are both checked before the first line is written.
    let output_format = registry.get(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    });
    let loader = ListingLoader::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let table = SymbolTable::standard();
    let processor =
        ListingProcessor::new(&table, output_format).with_tab_fixer(config.tabs.fixer());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = processor
        .process(loader.lines(), &mut out)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    if verbose {
        eprintln!(
            "processed {} lines ({} tab fixes) as {}",
            summary.lines,
            summary.tab_fixes,
            output_format.name()
        );
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", format.description());
            println!();
        }
    }
}
