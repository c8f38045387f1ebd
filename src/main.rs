//! CLI entry point for structcheck.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use structcheck::config::{Config, ConfigOverrides};
use structcheck::output::{is_quiet, Output, OutputMode};
use structcheck::paths::CONFIG_FILE;
use structcheck::validator;

#[derive(Parser)]
#[command(name = "structcheck")]
#[command(version)]
#[command(about = "Check that a source file contains required structural snippets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to .structcheck.yml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// File to check (overrides the config file)
    #[arg(long, global = true, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Report file to write (overrides the config file)
    #[arg(long, global = true, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Report title (overrides the config file)
    #[arg(long, global = true)]
    title: Option<String>,

    /// Format of the report printed to stdout
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Exit with status 1 when any check fails
    #[arg(long, global = true)]
    strict: bool,

    /// Print nothing to stdout (the report file is still written)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the checklist against the input file (default)
    Check,
    /// Show the checklist that would be applied
    List,
    /// Write a .structcheck.yml holding the effective configuration
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("STRUCTCHECK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mode = if cli.quiet || is_quiet() {
        OutputMode::Quiet
    } else {
        match cli.format {
            Format::Text => OutputMode::Text,
            Format::Json => OutputMode::Json,
        }
    };
    let output = Output::new(mode);

    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?.with_overrides(ConfigOverrides {
        input: cli.input,
        output: cli.output,
        title: cli.title,
    });
    config.validate()?;

    match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => cmd_check(&config, &output, cli.strict),
        Commands::List => output.checklist(&config.checks),
        Commands::Init { force } => cmd_init(&config, &output, &cwd.join(CONFIG_FILE), force),
    }
}

fn cmd_check(config: &Config, output: &Output, strict: bool) -> Result<()> {
    let report = validator::run(config, output)?;

    if strict && !report.all_passed() {
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_init(config: &Config, output: &Output, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    fs::write(path, config.to_yaml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    output.success(&format!("Wrote {}", path.display()))
}
