//! defstyle CLI tool.
//!
//! Usage:
//! ```bash
//! defstyle src/module.py
//! defstyle src/ --style google --format json
//! cat script.py | defstyle -
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use defstyle_core::{Checker, Config, Style};
use tracing_subscriber::EnvFilter;

mod output;

use output::FileDiagnostic;

/// Checks the layout of Python function definitions
#[derive(Parser)]
#[command(name = "defstyle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files or directories to check; `-` reads from standard input
    #[arg(default_value = "-")]
    paths: Vec<PathBuf>,

    /// Style to check against (overrides the config file)
    #[arg(long)]
    style: Option<Style>,

    /// Path to configuration file (default: ./defstyle.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for diagnostics.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `path:line:col: CODE message`, one line per violation.
    #[default]
    Text,
    /// JSON array of violation objects.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(style) = cli.style {
        config.style = style;
    }
    tracing::debug!(style = %config.style, "configured");

    let checker = Checker::new(&config);
    let mut findings: Vec<FileDiagnostic> = Vec::new();
    for path in &cli.paths {
        check_path(&checker, path, &mut findings)?;
    }

    output::print(&findings, cli.format)?;

    if !findings.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

/// Resolves the configuration: explicit `--config`, else `defstyle.toml`
/// in the current directory, else defaults.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::from_file(path)
            .with_context(|| format!("failed to load config: {}", path.display()));
    }
    let default = Path::new("defstyle.toml");
    if default.exists() {
        tracing::info!("using config: {}", default.display());
        return Config::from_file(default).context("failed to load defstyle.toml");
    }
    Ok(Config::default())
}

fn check_path(checker: &Checker, path: &Path, findings: &mut Vec<FileDiagnostic>) -> Result<()> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read stdin")?;
        return check_source(checker, "stdin", &source, findings);
    }

    if path.is_dir() {
        for entry in ignore::Walk::new(path) {
            let entry = entry.context("failed to walk directory")?;
            let candidate = entry.path();
            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            if is_file && candidate.extension().is_some_and(|e| e == "py") {
                check_file(checker, candidate, findings)?;
            }
        }
        return Ok(());
    }

    check_file(checker, path, findings)
}

fn check_file(checker: &Checker, path: &Path, findings: &mut Vec<FileDiagnostic>) -> Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    check_source(checker, &path.display().to_string(), &source, findings)
}

fn check_source(
    checker: &Checker,
    name: &str,
    source: &str,
    findings: &mut Vec<FileDiagnostic>,
) -> Result<()> {
    let diagnostics = checker
        .check(source)
        .with_context(|| format!("failed to check {name}"))?;
    tracing::debug!(file = name, count = diagnostics.len(), "checked");
    findings.extend(diagnostics.into_iter().map(|diagnostic| FileDiagnostic {
        path: name.to_owned(),
        diagnostic,
    }));
    Ok(())
}
