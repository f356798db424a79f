//! Reading URLs and running them through the fetcher

use crate::output;
use crate::OutputFormat;
use anyhow::Result;
use imgfetch_core::{report, Fetcher, KnownHashes};
use imgfetch_types::FetchOptions;
use std::io::{BufRead, IsTerminal, Write};
use std::path::Path;
use tracing::debug;

/// Split a comma separated line into trimmed, non-empty URLs
pub fn parse_url_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read one line of URLs from stdin, prompting when attached to a terminal
fn read_url_line(show_prompt: bool) -> Result<String> {
    let stdin = std::io::stdin();

    if show_prompt && stdin.is_terminal() {
        let line = dialoguer::Input::<String>::new()
            .with_prompt(output::PROMPT)
            .allow_empty(true)
            .interact_text()?;
        return Ok(line);
    }

    if show_prompt {
        print!("{}: ", output::PROMPT);
        std::io::stdout().flush()?;
    }

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line)
}

/// Fetch every URL in order with one shared hash set. Returns how many were saved.
pub async fn fetch_all(
    fetcher: &Fetcher,
    urls: &[String],
    download_dir: &Path,
    mut known_hashes: Option<KnownHashes>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<usize> {
    let mut saved = 0;

    for url in urls {
        match format {
            OutputFormat::Human => {
                if fetcher
                    .fetch_image(url, download_dir, known_hashes.as_mut())
                    .await
                    .is_some()
                {
                    saved += 1;
                }
            }
            OutputFormat::Json => {
                let result = fetcher
                    .fetch(url, download_dir, known_hashes.as_mut())
                    .await;
                let record = report::record(url, &result);
                if record.status.is_saved() {
                    saved += 1;
                }
                output::print_record(out, &record)?;
            }
        }
    }

    debug!("Saved {} of {} URLs", saved, urls.len());
    Ok(saved)
}

pub async fn run(
    args: Vec<String>,
    options: FetchOptions,
    dedup: bool,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let human = format == OutputFormat::Human;

    if human {
        output::print_banner(&mut *out)?;
        out.flush()?;
    }

    let urls = if args.is_empty() {
        parse_url_list(&read_url_line(human)?)
    } else {
        parse_url_list(&args.join(","))
    };

    let fetcher = Fetcher::new(&options)?;
    let known_hashes = dedup.then(KnownHashes::new);

    fetch_all(
        &fetcher,
        &urls,
        &options.download_dir,
        known_hashes,
        format,
        &mut *out,
    )
    .await?;

    if human {
        output::print_closing(out)?;
    }

    Ok(())
}
