//! mdcount - per-section character counts for Markdown documents

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mdcount_core::config::ReportFormat;
use mdcount_core::doc::has_markdown_extension;
use mdcount_core::{Config, CountUnit, Document};
use mdcount_report::ReportOptions;
use std::path::PathBuf;

/// Count heading and section characters in a Markdown file
#[derive(Parser, Debug)]
#[command(name = "mdcount")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to markdown file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Counting unit (defaults to the configured unit)
    #[arg(long, value_enum)]
    unit: Option<UnitArg>,

    /// Hide the content preview under each heading
    #[arg(long)]
    no_preview: bool,

    /// Load configuration from this file instead of the platform default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Count the file even if its extension is not a Markdown extension
    #[arg(long)]
    force: bool,

    /// Re-count and print the report every time the file changes
    #[cfg(feature = "watch")]
    #[arg(long)]
    watch: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UnitArg {
    Chars,
    Utf16,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => ReportFormat::Table,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

impl From<UnitArg> for CountUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Chars => CountUnit::Chars,
            UnitArg::Utf16 => CountUnit::Utf16,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(format) = args.format {
        config.report.format = format.into();
    }
    if let Some(unit) = args.unit {
        config.count.unit = unit.into();
    }
    if args.no_preview {
        config.report.show_preview = false;
    }

    if !args.force && !has_markdown_extension(&args.file, &config.input.extensions) {
        anyhow::bail!(
            "{} is not a Markdown file (expected one of: {}); pass --force to count it anyway",
            args.file.display(),
            config.input.extensions.join(", ")
        );
    }

    // Load document
    #[cfg_attr(not(feature = "watch"), allow(unused_mut))]
    let mut doc = Document::load(&args.file, config.count.unit)
        .with_context(|| format!("Failed to load document: {}", args.file.display()))?;

    let options = ReportOptions::from(&config);
    print_report(&doc, &config, &options)?;

    #[cfg(feature = "watch")]
    if args.watch {
        watch(&mut doc, &config, &options)?;
    }

    Ok(())
}

fn print_report(doc: &Document, config: &Config, options: &ReportOptions) -> Result<()> {
    let report = mdcount_report::render(doc, config.report.format, options)?;
    log::debug!(
        "{} headings, {} lines",
        doc.segmentation.totals.headers,
        doc.line_count()
    );
    println!("{}", report.trim_end());
    Ok(())
}

#[cfg(feature = "watch")]
fn watch(doc: &mut Document, config: &Config, options: &ReportOptions) -> Result<()> {
    use mdcount_report::watcher::DocumentWatcher;
    use std::time::Duration;

    let watcher = DocumentWatcher::new(&doc.path)?;
    let debounce = Duration::from_millis(config.watch.debounce_ms);
    log::info!(
        "Re-counting {} on change (debounce {:?})",
        watcher.path().display(),
        debounce
    );

    while watcher.wait_for_change(debounce, None)? {
        match doc.reload() {
            Ok(()) => {
                log::info!("Reloaded {} (rev {})", doc.path.display(), doc.rev);
                println!();
                print_report(doc, config, options)?;
            }
            // Editors may briefly remove the file while saving
            Err(err) => log::warn!("{err:#}"),
        }
    }

    Ok(())
}
