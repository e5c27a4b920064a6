//! Site-Mirror main entry point
//!
//! This is the command-line interface for the Site-Mirror tool.

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use site_mirror::config::{load_config, Config};
use site_mirror::crawler::mirror_site;
use site_mirror::output::print_report;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Site-Mirror: a recursive same-origin website mirror
///
/// Fetches the page at URL, stores it under DIRECTORY at a path mirroring
/// the URL path, and follows every same-origin link depth-first until no
/// unvisited page remains.
#[derive(Parser, Debug)]
#[command(name = "site-mirror")]
#[command(version = "1.0.0")]
#[command(about = "A recursive same-origin website mirror", long_about = None)]
struct Cli {
    /// Absolute URL of the page to start from
    #[arg(value_name = "URL")]
    url: String,

    /// Directory the mirrored pages are written to
    #[arg(value_name = "DIRECTORY")]
    directory: PathBuf,

    /// Optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate arguments and config and show what would be mirrored
    #[arg(long)]
    dry_run: bool,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true, num_args = 0..)]
    ignored: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match parse_cli(std::env::args_os()) {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    setup_logging(cli.verbose, cli.quiet);
    if !cli.ignored.is_empty() {
        tracing::debug!("Ignoring extra arguments: {:?}", cli.ignored);
    }

    exit_code(run(&cli).await)
}

/// Parses the command line
///
/// Missing positionals print usage and exit successfully. Other parse
/// errors, `--help` and `--version` exit with clap's own status.
fn parse_cli<I, T>(args: I) -> Result<Cli, ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{}", Cli::command().render_usage());
            Err(ExitCode::SUCCESS)
        }
        Err(e) => {
            let _ = e.print();
            Err(ExitCode::from(e.exit_code() as u8))
        }
    }
}

/// Prints the failure, if any, and maps the run result to an exit status
fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Run failed: {:?}", e);
            println!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_mirror=info,warn"),
            1 => EnvFilter::new("site_mirror=debug,info"),
            2 => EnvFilter::new("site_mirror=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    if cli.dry_run {
        handle_dry_run(&cli.url, &cli.directory, &config)
    } else {
        handle_mirror(&cli.url, &cli.directory, &config).await
    }
}

/// Handles the --dry-run mode: validates inputs and shows what would be mirrored
fn handle_dry_run(url: &str, directory: &Path, config: &Config) -> anyhow::Result<()> {
    let root = url::Url::parse(url).with_context(|| format!("invalid URL '{}'", url))?;
    let root_file = site_mirror::url::map_path_with_index(&root, directory, &config.output.index_file);

    println!("=== Site-Mirror Dry Run ===\n");

    println!("Root URL: {}", root);
    println!("Output directory: {}", directory.display());
    println!("Root page file: {}", root_file.display());

    println!("\nClient:");
    match config.client.timeout_secs {
        Some(secs) => println!("  Timeout: {}s", secs),
        None => println!("  Timeout: none"),
    }
    println!("  Max redirects: {}", config.client.max_redirects);

    println!("\nOutput:");
    println!("  Index file: {}", config.output.index_file);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would mirror pages on {}://{}",
        root.scheme(),
        root.host_str().unwrap_or_default()
    );

    Ok(())
}

/// Handles the main mirror operation
async fn handle_mirror(url: &str, directory: &Path, config: &Config) -> anyhow::Result<()> {
    let report = mirror_site(url, directory, config)
        .await
        .with_context(|| format!("failed to mirror {}", url))?;

    println!("Site mirrored successfully.");
    print_report(&report);

    Ok(())
}
