//! `st-extract`: extract key variables from a StructuredText file.
//!
//! Thin I/O glue around the `stext` library: reads one file, extracts an
//! ordered key/value mapping, and renders it as StructuredText, JSON, or
//! a bare key listing. Exit code 0 on success, 1 on any failure
//! (missing file, empty result).

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use stext::{from_file_with_options, to_json_string, ExtractOptions, WriteOptions};

#[derive(Parser, Debug)]
#[command(
    name = "st-extract",
    version,
    about = "Extract key variables from a StructuredText file.",
    long_about = "Extract key variables from a StructuredText file.\n\n\
                  For the StructuredText format see the stext library documentation."
)]
struct Cli {
    /// Text file to read in StructuredText format
    filename: PathBuf,

    /// Comma-delimited keys to find and return; by default returns all
    keyvars: Option<String>,

    /// Comma-delimited keys to remove from output
    #[arg(short = 'd', long)]
    delvars: Option<String>,

    /// Strict mode: exit with an error on any line without a key
    /// variable. Otherwise free text is aggregated into _FREETEXT_
    #[arg(short = 'S', long)]
    strict: bool,

    /// Do not generate the _ERRORS_ keyvar in output (disables strict)
    #[arg(short = 'e', long)]
    no_errors: bool,

    /// Ignore #comment lines instead of storing them as _COMMENT_<n>
    #[arg(short = 'n', long)]
    no_comments: bool,

    /// Name of the key that collates free text
    #[arg(short = 'f', long, default_value = "_FREETEXT_")]
    freetext_name: String,

    /// Key/value separator for input
    #[arg(short = 'p', long, default_value = ":")]
    keyval_sep: String,

    /// Key/value separator for output
    #[arg(short = 'P', long, default_value = ":")]
    keyval_output_sep: String,

    /// Number of spaces after the output separator
    #[arg(short = 's', long, default_value_t = 1)]
    sep: usize,

    /// Number of linefeeds printed after each key variable
    #[arg(short = 'l', long, default_value_t = 2)]
    lf: usize,

    /// Print all keys found and exit
    #[arg(short = 'k', long)]
    showkeys: bool,

    /// Output raw JSON
    #[arg(short = 'j', long)]
    json: bool,

    /// Output to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// JSON output indent: an integer, or 'none' for compact
    #[arg(short = 'i', long, default_value = "2")]
    json_indent: String,

    /// Be not quiet: echo diagnostics to stderr as they occur
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn split_csv(arg: &Option<String>) -> Vec<String> {
    arg.as_deref()
        .unwrap_or("")
        .split([',', ' '])
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_indent(arg: &str) -> Option<usize> {
    if arg.is_empty() || arg.eq_ignore_ascii_case("none") {
        return None;
    }
    Some(arg.parse::<i64>().unwrap_or(2).max(0) as usize)
}

fn run(cli: &Cli) -> Result<bool> {
    // no_errors implies non-strict
    let strict = cli.strict && !cli.no_errors;

    let options = ExtractOptions::new()
        .with_keys(split_csv(&cli.keyvars))
        .with_delete(split_csv(&cli.delvars))
        .with_separator(&cli.keyval_sep)
        .with_freetext_key(&cli.freetext_name)
        .strict(strict)
        .no_errors(cli.no_errors)
        .no_comments(cli.no_comments)
        .quiet(!cli.verbose);

    let doc = from_file_with_options(&cli.filename, options)?;
    if doc.is_empty() {
        return Ok(false);
    }

    if cli.showkeys {
        let mut stdout = io::stdout().lock();
        for key in doc.keys() {
            writeln!(stdout, "{key}")?;
        }
        return Ok(true);
    }

    if cli.json {
        let rendered = to_json_string(&doc, parse_indent(&cli.json_indent))?;
        match &cli.output {
            Some(path) => std::fs::write(path, rendered + "\n")
                .with_context(|| format!("cannot write '{}'", path.display()))?,
            None => println!("{rendered}"),
        }
        return Ok(true);
    }

    let write_options = WriteOptions::new()
        .with_separator(&cli.keyval_output_sep)
        .with_pad(cli.sep)
        .with_linefeeds(cli.lf);

    match &cli.output {
        Some(path) => stext::to_file(path, &doc, &write_options)?,
        None => stext::to_writer_with_options(io::stdout().lock(), &doc, &write_options)?,
    }
    Ok(true)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Off
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("st-extract: {err:#}");
            ExitCode::from(1)
        }
    }
}
