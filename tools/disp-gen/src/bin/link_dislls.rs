//! link-dislls - copy matching .disll files into bin/disll
//!
//! Usage:
//!   link-dislls lib1.disll,lib2.disll
//!   link-dislls "**/*.disll"
//!
//! With no patterns nothing is done.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use disp_gen::link::{link_matches, split_patterns, LinkOptions};

#[derive(Parser)]
#[command(name = "link-dislls")]
#[command(about = "Copy .disll files into bin/disll for runtime discovery")]
#[command(version)]
struct Cli {
    /// Glob patterns, comma-separated or repeated
    patterns: Vec<String>,

    /// Directory patterns are resolved against
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Destination directory (default: <root>/bin/disll)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    disp_gen::init_logging();
    let cli = Cli::parse();

    let patterns = split_patterns(&cli.patterns);
    if patterns.is_empty() {
        println!("No patterns provided; nothing to copy.");
        return Ok(());
    }

    let mut options = LinkOptions::for_root(&cli.root);
    if let Some(out_dir) = cli.out_dir {
        options.out_dir = out_dir;
    }

    let report = link_matches(&options, &patterns)?;

    for (pattern, reason) in &report.invalid_patterns {
        eprintln!("Invalid pattern {pattern:?}: {reason}");
    }

    if report.is_empty() {
        println!("No .disll files found for patterns: {patterns:?}");
        return Ok(());
    }

    let copied: Vec<_> = report.copied().collect();
    if !copied.is_empty() {
        println!("Copied dislls:");
        for outcome in copied {
            println!("  {}", outcome.destination.display());
        }
    }

    let failed: Vec<_> = report.failed().collect();
    if !failed.is_empty() {
        println!("Failed to copy:");
        for outcome in failed {
            if let Err(reason) = &outcome.result {
                println!("  {}: {reason}", outcome.source.display());
            }
        }
    }

    Ok(())
}
