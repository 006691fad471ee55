//! `diagwiz-highlight`: print highlight tags for a diagwiz source

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;

use diagwiz_lang::cli::{CliArgs, ConfigSource, InputSource, OutputFormat, OutputMode};
use diagwiz_lang::config::HighlightConfig;
use diagwiz_lang::diagwiz::{self, diagwiz_with_config};
use diagwiz_lang::output::{render_json, render_text, token_records};
use diagwiz_lang::syntax::collect_highlights;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    if let Err(e) = diagwiz_lang::tracing::init() {
        eprintln!("warning: {}", e);
    }

    let run = args.into_config().map_err(anyhow::Error::msg)?;

    let source = match &run.input {
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
        InputSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
    };

    let config = match &run.config {
        ConfigSource::BuiltinOnly => HighlightConfig::default(),
        ConfigSource::User => HighlightConfig::load(),
        ConfigSource::File(path) => HighlightConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
    };

    let support = diagwiz_with_config(&config);
    for warning in support.language().tag_rules().warnings() {
        eprintln!("warning: {}", warning);
    }

    let tree = diagwiz::parse(&source);
    for error in tree.errors() {
        eprintln!("{}", error);
    }

    let rendered = match run.output {
        OutputMode::Tree => tree.to_outline(&source),
        OutputMode::Tokens(format) => {
            let highlights = collect_highlights(support.language(), &tree, &source);
            let records = token_records(&source, &highlights);
            tracing::debug!("Highlighted {} tokens", records.len());
            match format {
                OutputFormat::Text => render_text(&records),
                OutputFormat::Json => {
                    let mut json =
                        render_json(&records).context("Failed to serialize tokens")?;
                    json.push('\n');
                    json
                }
            }
        }
    };

    io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("Failed to write output")?;

    Ok(())
}
