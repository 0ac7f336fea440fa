//! CLI entry point for the `adjview` command-line tool.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use adjlist_view::cli::commands;
use adjlist_view::cli::OutputFormat;
use adjlist_view::config::{load_config, DisplayConfig};
use adjlist_view::AdjError;

#[derive(Parser)]
#[command(
    name = "adjview",
    about = "Read a directed graph as an adjacency list from stdin and render it"
)]
struct Cli {
    /// Number of nodes, i.e. lines to read from stdin
    #[arg(long)]
    n: usize,

    /// Output format: "svg" (default), "dot", "json" or "text"
    #[arg(long, default_value = "svg")]
    format: String,

    /// Write output to this file instead of displaying it
    #[arg(long)]
    output: Option<PathBuf>,

    /// TOML file with display settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewer command used to open the rendered SVG
    #[arg(long)]
    viewer: Option<String>,

    /// Reject lines without a ':' separator
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<(), AdjError> {
    let format = match OutputFormat::from_name(&cli.format) {
        Some(f) => f,
        None => {
            eprintln!("Invalid format: {}", cli.format);
            process::exit(2);
        }
    };

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DisplayConfig::default(),
    };
    if let Some(viewer) = cli.viewer {
        config.viewer = Some(viewer);
    }

    let adj = commands::cmd_read(&mut io::stdin().lock(), cli.n, cli.strict)?;

    match (&cli.output, format) {
        (Some(path), _) => commands::cmd_export(&adj, format, &config, path),
        (None, OutputFormat::Svg) => commands::cmd_show(&adj, &config),
        (None, _) => commands::cmd_print(&adj, format, &config, &mut io::stdout().lock()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = match &e {
            AdjError::Io(_) => 1,
            AdjError::UnexpectedEof { .. }
            | AdjError::InvalidNeighbor { .. }
            | AdjError::MissingSeparator { .. } => 2,
            AdjError::Viewer(_) => 3,
            AdjError::Config(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
