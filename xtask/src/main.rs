use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use disp_gen::audio::render_sound;
use disp_gen::config::SoundManifest;
use disp_gen::icons::{build_icon_set, IconKind};
use disp_gen::output::{write_files, MirrorPolicy, OutputLayout, RELEASE_RESOURCES};

/// Displexity asset tasks
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Displexity asset generation tasks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate every icon and sound in the repository
    Assets,

    /// Remove generated icons and sounds
    Clean,
}

const SOUNDS_DIR: &str = "sounds";
const SOUND_MANIFEST: &str = "sounds.toml";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = project_root()?;

    match cli.command {
        Commands::Assets => generate_assets(&root),
        Commands::Clean => clean(&root),
    }
}

fn generate_assets(root: &Path) -> Result<()> {
    println!("Generating Displexity assets in {}", root.display());
    println!();

    let icons = build_icon_set(&[32])?;
    let layout =
        OutputLayout::new(root).with_mirror(root.join(RELEASE_RESOURCES), MirrorPolicy::Create);
    let mut count = layout.write_all(&icons)?.len();
    println!("  ✓ Icons ({} files)", count);

    count += generate_raster(root)?;

    let manifest_path = root.join(SOUND_MANIFEST);
    let manifest = if manifest_path.exists() {
        SoundManifest::load(&manifest_path)?
    } else {
        SoundManifest::builtin()
    };
    let sounds = manifest
        .presets()
        .iter()
        .map(|preset| {
            let sound = render_sound(preset, manifest.sample_rate);
            let bytes = sound.encode()?;
            Ok((sound.file_name, bytes))
        })
        .collect::<Result<Vec<_>>>()?;
    let written = write_files(&root.join(SOUNDS_DIR), &sounds)?.len();
    println!("  ✓ Sounds ({} files)", written);
    count += written;

    println!();
    println!("Done! {} files written", count);
    Ok(())
}

#[cfg(feature = "raster")]
fn generate_raster(root: &Path) -> Result<usize> {
    use disp_gen::raster::{build_placeholders, build_tui_icon, TUI_ICON_NAME, TUI_SIZES};

    let tui = vec![(TUI_ICON_NAME.to_string(), build_tui_icon(&TUI_SIZES)?)];
    let layout =
        OutputLayout::new(root).with_mirror(root.join(RELEASE_RESOURCES), MirrorPolicy::IfExists);
    let mut count = layout.write_all(&tui)?.len();

    count += write_files(&root.join(RELEASE_RESOURCES), &build_placeholders()?)?.len();
    println!("  ✓ Raster icons ({} files)", count);
    Ok(count)
}

#[cfg(not(feature = "raster"))]
fn generate_raster(_root: &Path) -> Result<usize> {
    println!("  ⊘ Raster icons skipped (xtask built without the raster feature)");
    Ok(0)
}

/// File names `assets` writes into the root and the release mirror
fn generated_icon_names() -> Vec<String> {
    let mut names: Vec<String> = IconKind::ALL
        .iter()
        .map(|kind| kind.file_name().to_string())
        .collect();
    names.extend(
        ["tui.ico", "logs.ico", "logs.png", "nvim.ico", "nvim.png"]
            .iter()
            .map(|n| n.to_string()),
    );
    names
}

fn clean(root: &Path) -> Result<()> {
    let mut removed = 0;

    for dir in [root.to_path_buf(), root.join(RELEASE_RESOURCES)] {
        for name in generated_icon_names() {
            removed += remove_if_exists(&dir.join(name))?;
        }
    }

    let sounds_dir = root.join(SOUNDS_DIR);
    if sounds_dir.is_dir() {
        for entry in fs::read_dir(&sounds_dir).context("Failed to read sounds directory")? {
            let path = entry?.path();
            let is_sound = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext == "dish" || ext == "disll")
                .unwrap_or(false);
            if is_sound {
                removed += remove_if_exists(&path)?;
            }
        }
    }

    println!("Removed {} generated files", removed);
    Ok(())
}

fn remove_if_exists(path: &Path) -> Result<usize> {
    if !path.is_file() {
        return Ok(0);
    }
    fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    Ok(1)
}

fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live inside the workspace")
}
