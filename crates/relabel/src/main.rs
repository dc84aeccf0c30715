mod cli;

use std::io::{self, Write};

use clap::Parser;
use eyre::WrapErr;

use relabel_core::{LabelRegistry, RelationEntry};

use cli::{Cli, Command, OutputFormat};

fn main() -> eyre::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, LabelRegistry::tacred(), &mut out)
}

fn run(args: &Cli, registry: &LabelRegistry, out: &mut impl Write) -> eyre::Result<()> {
    let entries = match &args.command {
        Command::Encode { labels } => labels
            .iter()
            .map(|label| {
                registry.id_of(label).map(|id| RelationEntry {
                    label: label.as_str(),
                    id,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("failed to encode relation label")?,
        Command::Decode { ids } => ids
            .iter()
            .map(|&id| registry.label_of(id).map(|label| RelationEntry { label, id }))
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("failed to decode class id")?,
        Command::List => registry.iter().collect(),
    };

    tracing::debug!(entries = entries.len(), format = ?args.format, "resolved relation entries");
    write_entries(&entries, args.format, out).context("write output")
}

fn write_entries(
    entries: &[RelationEntry<'_>],
    format: OutputFormat,
    out: &mut impl Write,
) -> eyre::Result<()> {
    match format {
        OutputFormat::Text => {
            for entry in entries {
                writeln!(out, "{entry}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
