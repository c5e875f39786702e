//! gen-raster-icons - canvas-drawn icons packaged with the image crate
//!
//! `tui` writes the multi-resolution terminal icon; `placeholders` writes the
//! labelled logs/nvim icons. Requires the `raster` feature.

#[cfg(feature = "raster")]
mod cli {
    use anyhow::Result;
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;

    use disp_gen::output::{MirrorPolicy, OutputLayout, RELEASE_RESOURCES};
    use disp_gen::raster::{build_placeholders, build_tui_icon, TUI_ICON_NAME, TUI_SIZES};

    #[derive(Parser)]
    #[command(name = "gen-raster-icons")]
    #[command(about = "Generate raster-drawn Displexity icons")]
    #[command(version)]
    struct Cli {
        #[command(subcommand)]
        command: Commands,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// Multi-resolution tui.ico (16-256 px)
        Tui {
            /// Output directory
            #[arg(short, long, default_value = ".")]
            out_dir: PathBuf,

            /// Mirror directory (only used if it already exists)
            #[arg(long, default_value = RELEASE_RESOURCES)]
            mirror_dir: PathBuf,
        },

        /// Labelled placeholder icons (logs.ico, nvim.ico) plus PNG sources
        Placeholders {
            /// Output directory
            #[arg(default_value = RELEASE_RESOURCES)]
            out_dir: PathBuf,
        },
    }

    pub fn run() -> Result<()> {
        disp_gen::init_logging();
        let cli = Cli::parse();

        match cli.command {
            Commands::Tui {
                out_dir,
                mirror_dir,
            } => {
                let ico = build_tui_icon(&TUI_SIZES)?;
                let layout =
                    OutputLayout::new(out_dir).with_mirror(mirror_dir, MirrorPolicy::IfExists);
                let written = layout.write_all(&[(TUI_ICON_NAME.to_string(), ico)])?;

                let mut paths = written.iter();
                if let Some(primary) = paths.next() {
                    println!("Created {}", primary.display());
                }
                for copy in paths {
                    println!("Copied to {}", copy.display());
                }
            }
            Commands::Placeholders { out_dir } => {
                let files = build_placeholders()?;
                for path in OutputLayout::new(out_dir).write_all(&files)? {
                    println!("Generating {}", path.display());
                }
            }
        }

        Ok(())
    }
}

#[cfg(feature = "raster")]
fn main() -> anyhow::Result<()> {
    cli::run()
}

#[cfg(not(feature = "raster"))]
fn main() {
    eprintln!("gen-raster-icons was built without image support.");
    eprintln!("Rebuild with: cargo build -p disp-gen --features raster");
    std::process::exit(1);
}
