// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11y-audit CLI - audit HTML snapshots for accessibility defects.

use a11y_audit::{render_report, write_report, Auditor, Heuristics, HtmlPage, OutputFormat, Report};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// Directories never worth scanning
const SKIP_DIRS: &[&str] = &["node_modules", ".git", "target", "dist", "build"];

/// Heuristic accessibility auditor for rendered HTML snapshots
#[derive(Parser)]
#[command(name = "a11y-audit")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a single HTML file
    Audit {
        /// HTML file to audit
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Downgrade check failures to diagnostic warnings instead of aborting
        #[arg(long)]
        resilient: bool,

        /// JSON file overriding the heuristic tables
        #[arg(long)]
        config: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Audit every HTML file under a directory, one snapshot each
    Scan {
        /// Directory to scan
        dir: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Downgrade check failures to diagnostic warnings instead of aborting
        #[arg(long)]
        resilient: bool,

        /// JSON file overriding the heuristic tables
        #[arg(long)]
        config: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// HTML fragment
    Html,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Html => OutputFormat::Html,
        }
    }
}

/// Whether the walk should descend into or yield this entry. The walk root
/// is always kept, so scanning `.` or a dot-named directory works; hidden
/// and excluded directories below it are pruned.
fn walkable(entry: &walkdir::DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let name = entry.file_name().to_str().unwrap_or("");
    !entry.file_type().is_dir() || (!SKIP_DIRS.contains(&name) && !name.starts_with('.'))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("a11y_audit=debug")
    } else {
        EnvFilter::new("a11y_audit=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_heuristics(config: Option<&Path>) -> anyhow::Result<Heuristics> {
    match config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading heuristics config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing heuristics config {}", path.display()))
        }
        None => Ok(Heuristics::default()),
    }
}

fn audit_file(auditor: &Auditor, path: &Path, resilient: bool) -> anyhow::Result<Report> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let page = HtmlPage::parse(&html);

    if resilient {
        Ok(auditor.audit_resilient(&page))
    } else {
        auditor
            .audit(&page)
            .with_context(|| format!("auditing {}", path.display()))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Audit {
            file,
            format,
            output,
            resilient,
            config,
            verbose,
        } => {
            init_logging(verbose);
            let auditor = Auditor::new().with_heuristics(load_heuristics(config.as_deref())?);
            let report = audit_file(&auditor, &file, resilient)?;
            let rendered = render_report(&report, format.into());

            // A missing output target is recoverable; the audit succeeded
            if let Err(io_error) = write_report(&rendered, output.as_deref()) {
                tracing::error!(%io_error, "could not write report");
            }

            if report.has_issues() {
                std::process::exit(1);
            }
        }

        Commands::Scan {
            dir,
            format,
            resilient,
            config,
            verbose,
        } => {
            init_logging(verbose);
            let auditor = Auditor::new().with_heuristics(load_heuristics(config.as_deref())?);
            let mut any_issues = false;
            let mut files_audited = 0;

            for entry in WalkDir::new(&dir)
                .follow_links(false)
                .into_iter()
                .filter_entry(|e| walkable(e))
                .filter_map(Result::ok)
            {
                if !entry.file_type().is_file() {
                    continue;
                }
                let ext = entry.path().extension().and_then(|e| e.to_str()).unwrap_or("");
                if ext != "html" && ext != "htm" {
                    continue;
                }

                let report = audit_file(&auditor, entry.path(), resilient)?;
                println!("== {} ==", entry.path().display());
                println!("{}", render_report(&report, format.into()));
                any_issues |= report.has_issues();
                files_audited += 1;
            }

            tracing::info!(files_audited, "scan complete");

            if any_issues {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
