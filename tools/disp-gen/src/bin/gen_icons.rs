//! gen-icons - pixel-geometry ICO icons for Displexity
//!
//! Writes disp.ico, exe.ico, ide.ico, package.ico and runner.ico to the output
//! directory and mirrors them into release/resources.

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use disp_gen::icons::{build_icon_set, IconKind};
use disp_gen::output::{MirrorPolicy, OutputLayout, RELEASE_RESOURCES};

#[derive(Parser)]
#[command(name = "gen-icons")]
#[command(about = "Generate the Displexity icon set")]
#[command(version)]
struct Cli {
    /// Output directory
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Mirror directory (created if missing)
    #[arg(long, default_value = RELEASE_RESOURCES)]
    mirror_dir: PathBuf,

    /// Skip the mirrored copy
    #[arg(long)]
    no_mirror: bool,

    /// Comma-separated icon sizes (1-256, width*height divisible by 8)
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = "32",
        value_parser = clap::value_parser!(u32).range(1..=256)
    )]
    sizes: Vec<u32>,
}

fn main() -> Result<()> {
    disp_gen::init_logging();
    let cli = Cli::parse();

    if cli.sizes.is_empty() {
        bail!("At least one icon size is required");
    }

    let mut layout = OutputLayout::new(&cli.out_dir);
    if !cli.no_mirror {
        layout = layout.with_mirror(&cli.mirror_dir, MirrorPolicy::Create);
    }

    tracing::debug!("rendering sizes {:?}", cli.sizes);
    let icons = build_icon_set(&cli.sizes)?;
    for path in layout.write_all(&icons)? {
        println!("Created: {}", path.display());
    }

    println!();
    println!("All icons created successfully!");
    let summary: Vec<String> = IconKind::ALL
        .iter()
        .map(|kind| format!("{} ({})", kind.file_name(), kind.description()))
        .collect();
    println!("Icons: {}", summary.join(", "));

    Ok(())
}
