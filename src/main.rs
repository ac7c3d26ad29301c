use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, Command};
use polyglot::{RenderConfig, SnippetLoader, SnippetRenderer, Visitor};
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let matches = Command::new("polyglot")
        .about("Render a parsed code snippet into a curly-brace target language")
        .arg(
            Arg::new("input")
                .help("Snippet JSON file (source text plus parsed tree)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Config file; defaults to <config dir>/polyglot/config.json"),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .value_name("WIDTH")
                .value_parser(clap::value_parser!(usize))
                .help("Columns per block level"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Fail when any construct could not be rendered"),
        )
        .arg(
            Arg::new("report-json")
                .long("report-json")
                .action(ArgAction::SetTrue)
                .help("Print unsupported constructs to stderr as JSON"),
        )
        .get_matches();

    let input = matches
        .get_one::<String>("input")
        .context("missing input file")?;

    let mut config = RenderConfig::load(matches.get_one::<String>("config").map(Path::new))?;
    if let Some(indent) = matches.get_one::<usize>("indent") {
        config.indent_width = *indent;
    }
    if matches.get_flag("strict") {
        config.strict = true;
    }

    let snippet = SnippetLoader
        .from_path(Path::new(input))
        .with_context(|| format!("failed to load snippet {}", input))?;

    let visitor = Visitor::default_visitor()
        .with_language(&config.language)
        .with_indent_width(config.indent_width);
    let output = SnippetRenderer.render(&snippet.file, &snippet.types, &visitor);

    print!("{}", output.to_text());

    if matches.get_flag("report-json") {
        eprintln!("{}", serde_json::to_string_pretty(&output.unsupported)?);
    } else {
        for gap in &output.unsupported {
            eprintln!("warning: {}", gap);
        }
    }

    if config.strict && !output.is_complete() {
        bail!(
            "{} unsupported construct(s) in {}",
            output.unsupported.len(),
            input
        );
    }

    Ok(())
}
