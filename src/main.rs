use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ukkonen::{BuildConfig, Builder, Text, TreeStats};

#[derive(Parser, Debug)]
#[command(name = "ukkonen", about = "Build a suffix tree with Ukkonen's algorithm")]
struct Cli {
    /// Text file to index (read verbatim, trailing newline included).
    file: PathBuf,

    /// Sentinel appended to the text; must not occur in it.
    #[arg(long, default_value_t = '$')]
    sentinel: char,

    /// Check tree invariants after construction.
    #[arg(long)]
    verify: bool,

    /// Print full tree statistics instead of the internal node count only.
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !cli.sentinel.is_ascii() {
        bail!("sentinel must be a single ASCII character, got '{}'", cli.sentinel);
    }
    let config = BuildConfig::default()
        .with_sentinel(cli.sentinel as u8)
        .with_verify(cli.verify);

    let input = std::fs::read(&cli.file)
        .with_context(|| format!("failed to read input file {}", cli.file.display()))?;
    info!(path = %cli.file.display(), bytes = input.len(), "read input");

    let text = Text::new(&input, config.sentinel)
        .with_context(|| format!("cannot terminate {}", cli.file.display()))?;
    let (tree, report) = Builder::new(config)
        .build_with_report(text)
        .context("suffix tree construction failed")?;
    info!(
        phases = report.phases,
        early = report.phases_ended_early,
        extensions = report.extensions,
        "construction finished"
    );

    if cli.stats {
        println!("{}", TreeStats::collect(&tree));
    } else {
        println!("Total internal nodes: {}", tree.internal_node_count());
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
