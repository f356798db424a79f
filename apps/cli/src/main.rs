//! imgfetch CLI - Image fetcher
//!
//! Reads image URLs, downloads each one in turn, and keeps a single copy of
//! every distinct image.

mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use imgfetch_types::{FetchOptions, DEFAULT_DOWNLOAD_DIR, DEFAULT_TIMEOUT_SECS};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// imgfetch - collect images from the web
#[derive(Parser)]
#[command(name = "imgfetch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Image URLs (comma separated lists allowed). Prompts when omitted.
    urls: Vec<String>,

    /// Directory images are saved to
    #[arg(short, long, env = "IMGFETCH_DIR", default_value = DEFAULT_DOWNLOAD_DIR)]
    dir: PathBuf,

    /// Request timeout in seconds
    #[arg(short, long, env = "IMGFETCH_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Output format
    #[arg(long, default_value = "human")]
    output: OutputFormat,

    /// Save every image, even if the same bytes were already saved
    #[arg(long)]
    no_dedup: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,imgfetch=debug,imgfetch_core=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let options = FetchOptions {
        download_dir: cli.dir,
        timeout_secs: cli.timeout,
        ..FetchOptions::default()
    };

    commands::run(
        cli.urls,
        options,
        !cli.no_dedup,
        cli.output,
        &mut std::io::stdout(),
    )
    .await
}
