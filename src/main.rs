//! Demographic Data Analyzer
//!
//! A CLI tool that computes fixed summary statistics over the adult
//! census table and prints them as text, JSON or Markdown.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (malformed data, config, output write, etc.)

use anyhow::{Context, Result};
use chrono::Utc;
use demographic_analyzer::analysis::{self, Analysis};
use demographic_analyzer::cli::{Args, OutputFormat};
use demographic_analyzer::config::{Config, DEFAULT_CONFIG_FILE};
use demographic_analyzer::data::LoadOptions;
use demographic_analyzer::models::{Report, ReportMetadata};
use demographic_analyzer::report;
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logging(&args, &config);

    info!("Demographic Data Analyzer v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(&args, &config) {
        error!("Analysis failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .demographic.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() {
        eprintln!(
            "{} already exists. Remove it first or edit it manually.",
            DEFAULT_CONFIG_FILE
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", DEFAULT_CONFIG_FILE))?;

    println!("Created {} with default settings.", DEFAULT_CONFIG_FILE);
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so stdout carries only the report.
fn init_logging(args: &Args, config: &Config) {
    let level = if config.general.verbose && !args.quiet {
        tracing::Level::DEBUG
    } else {
        args.log_level()
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: a tracing subscriber was already installed");
    }
}

/// Load configuration from file or use defaults, then apply CLI overrides.
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match args.config {
        Some(ref config_path) => Config::load(config_path)?,
        None => Config::load_default()?.unwrap_or_default(),
    };

    config.merge_with_args(args);
    Ok(config)
}

/// Compute the statistics and write the rendered report.
fn run(args: &Args, config: &Config) -> Result<()> {
    let data_path = Path::new(&config.data.path);
    let options = LoadOptions::from(&config.data);

    let outcome = if args.strict {
        analysis::analyze_file(data_path, &options)?
    } else {
        analysis::run_analysis(data_path, &options)?
    };

    let output = match config.report.format {
        OutputFormat::Text => report::render_text(&outcome.report),
        OutputFormat::Json => {
            report::generate_json_report(&build_report(&config.data.path, outcome))?
        }
        OutputFormat::Markdown => {
            report::generate_markdown_report(&build_report(&config.data.path, outcome))
        }
    };

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report saved to: {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}

fn build_report(data_path: &str, outcome: Analysis) -> Report {
    Report {
        metadata: ReportMetadata {
            data_path: data_path.to_string(),
            generated_at: Utc::now(),
            source: outcome.source,
        },
        statistics: outcome.report,
    }
}
