//! # lpr
//!
//! Command-line driver for landing page snapshots exported from the store.
//!
//! ## Usage
//!
//! ```bash
//! # Render to stdout, or to a file
//! lpr render snapshot.json
//! lpr render snapshot.json -o page.html --lang en --strict
//! lpr render snapshot.json --no-strict   # ignore `strict = true` in lpr.toml
//!
//! # Check every section against its field schema (exit 1 on issues)
//! lpr validate snapshot.json
//!
//! # Rewrite legacy palette/logo_url branding to the canonical shape
//! lpr migrate-branding snapshot.json -o migrated.json
//! ```
//!
//! Logs go to stderr. The filter comes from `RUST_LOG`, else `--log-level`,
//! else `log_level` in the config file, else `warn`.

mod config;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use lp_renderer::types::PageSnapshot;
use lp_renderer::{
    InMemoryRepository, LandingPageRepository, RenderOptions, migrate_account, render_page,
    validate_section,
};

use config::{RenderOverrides, find_config, resolve_log_level, resolve_render};

#[derive(Parser, Debug)]
#[command(name = "lpr", version, about = "Render and check landing page snapshots")]
struct Args {
    /// Config file (toml, yaml or json); defaults to ./lpr.toml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a page snapshot to a complete HTML document
    Render {
        /// Snapshot JSON (account, page, sections)
        snapshot: PathBuf,
        /// Write HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// `lang` attribute of the document
        #[arg(long)]
        lang: Option<String>,
        /// Exit non-zero when any section is skipped
        #[arg(long)]
        strict: bool,
        /// Render even when sections are skipped, overriding `strict` in the config
        #[arg(long, conflicts_with = "strict")]
        no_strict: bool,
        /// Stylesheet appended after the built-in one
        #[arg(long)]
        extra_css: Option<PathBuf>,
    },
    /// Validate every section of a snapshot
    Validate {
        /// Snapshot JSON
        snapshot: PathBuf,
    },
    /// Rewrite the account's branding to the canonical shape
    MigrateBranding {
        /// Snapshot JSON
        snapshot: PathBuf,
        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn read_snapshot(path: &Path) -> Result<PageSnapshot> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))
}

fn write_output(output: Option<&Path>, contents: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn render(
    snapshot_path: &Path,
    output: Option<&Path>,
    overrides: RenderOverrides,
    config: Option<&config::Config>,
) -> Result<ExitCode> {
    let settings = resolve_render(&overrides, config);
    let exported = read_snapshot(snapshot_path)?;
    let slug = exported.page.slug.clone();

    // Same lookup the server does, so unpublished pages are refused here too
    let repo = InMemoryRepository::from_snapshot(exported);
    let snapshot = repo
        .snapshot(&slug)
        .with_context(|| format!("page '{slug}' is not published"))?;

    let extra_css = settings
        .extra_css
        .as_deref()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("failed to read stylesheet {}", path.display()))
        })
        .transpose()?;

    let options = RenderOptions {
        lang: settings.lang,
        extra_css,
    };
    let rendered = render_page(&snapshot, &options);
    write_output(output, &rendered.html)?;

    info!(
        slug = %slug,
        sections = snapshot.sections.len(),
        skipped = rendered.skipped.len(),
        "page rendered"
    );

    if settings.strict && !rendered.skipped.is_empty() {
        let ids: Vec<&str> = rendered.skipped.iter().map(|s| s.id.as_str()).collect();
        bail!(
            "{} section(s) skipped in strict mode: {}",
            ids.len(),
            ids.join(", ")
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn validate(snapshot_path: &Path) -> Result<ExitCode> {
    let snapshot = read_snapshot(snapshot_path)?;
    let mut stdout = io::stdout().lock();
    let mut failed = 0usize;

    for section in &snapshot.sections {
        match validate_section(section) {
            Ok(_) => debug!(section = %section.id, "valid"),
            Err(err) => {
                failed += 1;
                for issue in &err.issues {
                    writeln!(stdout, "{} ({}): {}", section.id, err.section_type, issue)?;
                }
            }
        }
    }

    if failed == 0 {
        writeln!(stdout, "{} section(s) valid", snapshot.sections.len())?;
        Ok(ExitCode::SUCCESS)
    } else {
        writeln!(
            stdout,
            "{failed} of {} section(s) invalid",
            snapshot.sections.len()
        )?;
        Ok(ExitCode::from(1))
    }
}

fn migrate_branding(snapshot_path: &Path, output: Option<&Path>) -> Result<ExitCode> {
    let mut snapshot = read_snapshot(snapshot_path)?;
    let outcome = migrate_account(&mut snapshot.account);

    let mut json = serde_json::to_string_pretty(&snapshot).context("failed to serialize snapshot")?;
    json.push('\n');
    write_output(output, &json)?;

    eprintln!("branding: {}", outcome.as_label());
    Ok(ExitCode::SUCCESS)
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    let config = find_config(args.config.as_deref())?;

    // Logs MUST go to stderr, stdout carries HTML/JSON
    let level = resolve_log_level(args.log_level.as_deref(), config.as_ref());
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    match args.command {
        Command::Render {
            snapshot,
            output,
            lang,
            strict,
            no_strict,
            extra_css,
        } => render(
            &snapshot,
            output.as_deref(),
            RenderOverrides {
                lang,
                strict: (strict || no_strict).then_some(strict),
                extra_css,
            },
            config.as_ref(),
        ),
        Command::Validate { snapshot } => validate(&snapshot),
        Command::MigrateBranding { snapshot, output } => {
            migrate_branding(&snapshot, output.as_deref())
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[lpr] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
