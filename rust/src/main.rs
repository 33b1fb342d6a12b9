use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use colored::*;
use isware::{CommandReport, CursorOutcome, DocstringCommand, DocstringConfig, StringBuffer};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "isware", version, about = "Insert docstring skeletons under Python/Go declarations")]
struct Cli {
    /// Source file to annotate (.py or .go)
    #[arg(short, long, value_name = "file")]
    file: PathBuf,

    /// 1-based cursor line; repeat for several cursors
    #[arg(short, long, value_name = "n", default_value = "1")]
    line: Vec<usize>,

    /// JSON settings file with author / organization / tab_size
    #[arg(short, long, value_name = "file")]
    settings: Option<PathBuf>,

    /// Rewrite the file in place instead of printing it
    #[arg(short, long)]
    write: bool,

    /// Print the command report as JSON instead of the annotated text
    #[arg(long, conflicts_with = "write")]
    json: bool,

    /// Timestamp for the module header, `YYYY-MM-DD HH:MM` (default: now)
    #[arg(long, value_name = "time")]
    now: Option<String>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.settings {
        Some(p) => DocstringConfig::load(p)?,
        None => DocstringConfig::default(),
    }
    .with_env_overrides();

    let now = match &cli.now {
        Some(s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
            .with_context(|| format!("Invalid --now value: {}", s))?,
        None => Local::now().naive_local(),
    };

    let content = fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let mut buffer = StringBuffer::new(content);
    let cursors: Vec<usize> = cli.line.iter().map(|&n| buffer.line_offset(n)).collect();

    let report = DocstringCommand::new(config).run(&mut buffer, &cli.file, &cursors, now);

    if cli.json {
        let mut out = io::stdout().lock();
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else if cli.write {
        if report.changed_buffer() {
            fs::write(&cli.file, buffer.as_str())
                .with_context(|| format!("Failed to write {}", cli.file.display()))?;
        }
        print_summary(&cli.file, &report);
    } else {
        io::stdout().lock().write_all(buffer.as_str().as_bytes())?;
    }
    Ok(())
}

fn print_summary(file: &Path, report: &CommandReport) {
    if report.module_header {
        eprintln!("{} module header", "+".green().bold());
    }
    for outcome in &report.outcomes {
        match outcome {
            CursorOutcome::Inserted { offset, .. } => {
                eprintln!("{} docstring at offset {}", "+".green().bold(), offset);
            }
            CursorOutcome::Skipped { error, .. } => {
                eprintln!("{} {}", "-".yellow(), error);
            }
        }
    }
    let status = format!("{}: {} docstring(s) inserted", file.display(), report.inserted());
    if report.changed_buffer() {
        eprintln!("{}", status.green());
    } else {
        eprintln!("{}", status.yellow());
    }
}
