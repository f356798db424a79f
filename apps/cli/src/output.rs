//! Output formatting utilities

use console::style;
use imgfetch_types::FetchRecord;
use std::io::Write;

pub const PROMPT: &str = "Please enter one or more image URLs (comma separated)";

pub fn print_banner(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", style("Welcome to the Ubuntu Image Fetcher").bold())?;
    writeln!(out, "A tool for mindfully collecting images from the web\n")
}

pub fn print_closing(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "\n{}",
        style("Connection strengthened. Community enriched.").green()
    )
}

/// Print one record as a single JSON line
pub fn print_record(out: &mut impl Write, record: &FetchRecord) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string(record)?)?;
    Ok(())
}
