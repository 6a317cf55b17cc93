//! Command-line front-end for batch template rendering.
//!
//! Reads a template (file or stdin), a JSON description of one or more
//! variable sets (inline flag or file), renders the template once per set,
//! and writes the newline-joined result to stdout or a file. All rendering
//! semantics live in `restamp-render`; this binary only moves bytes in and
//! out and maps errors to exit status.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgGroup, Parser};

use restamp_render::render_batch_joined;

/// Render a template once per JSON variable set.
///
/// The data is one top-level JSON value: an array of objects renders the
/// template once per element in order, a single object renders once, and a
/// bare scalar is treated as a batch of one. Rendering stops at the first
/// failing set; on failure nothing is written.
#[derive(Parser, Debug)]
#[command(name = "restamp", version)]
#[command(about = "Render a template once per JSON variable set")]
#[command(group = ArgGroup::new("data_source").required(true).multiple(false))]
#[command(after_help = "Example:\n  restamp greeting.j2 --data '[{\"value\":\"hello\"}]'")]
struct Cli {
    /// Template file; `-` or omitted reads the template from stdin.
    template: Option<PathBuf>,

    /// Inline JSON data, e.g. '[{"value":"hello"}]'.
    #[arg(short, long, group = "data_source")]
    data: Option<String>,

    /// Read the JSON data from a file.
    #[arg(short = 'f', long, group = "data_source", value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// Write the joined output to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("restamp: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let template = read_template(cli.template.as_deref())?;
    let data_json = read_data(cli.data.as_deref(), cli.data_file.as_deref())?;
    let rendered = render_batch_joined(&template, &data_json)?;
    write_output(cli.output.as_deref(), &rendered)
}

fn read_template(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read template {}", path.display())),
        _ => {
            let mut template = String::new();
            io::stdin()
                .read_to_string(&mut template)
                .context("failed to read template from stdin")?;
            Ok(template)
        }
    }
}

fn read_data(inline: Option<&str>, file: Option<&Path>) -> anyhow::Result<String> {
    match (inline, file) {
        (Some(json), None) => Ok(json.to_string()),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read data file {}", path.display())),
        // clap's arg group requires exactly one source
        _ => anyhow::bail!("exactly one of --data or --data-file is required"),
    }
}

fn write_output(path: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => fs::write(path, contents)
            .with_context(|| format!("failed to write output {}", path.display())),
        None => io::stdout()
            .write_all(contents.as_bytes())
            .context("failed to write output to stdout"),
    }
}
