//! gen-sounds - sine-wave effects and loops for Displexity
//!
//! Writes `.dish` effects and `.disll` loops. Uses the built-in sound set
//! unless a manifest is given.

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use disp_gen::audio::{render_sound, GeneratedSound};
use disp_gen::config::SoundManifest;
use disp_gen::output::write_files;
use disp_formats::SoundKind;

#[derive(Parser)]
#[command(name = "gen-sounds")]
#[command(about = "Generate Displexity sound effects and loops")]
#[command(version)]
struct Cli {
    /// Output directory
    #[arg(short, long, default_value = "sounds")]
    out_dir: PathBuf,

    /// Sound manifest (TOML); defaults to the built-in set
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Also write a .wav preview of every sound (needs the wav-export feature)
    #[arg(long)]
    wav: bool,
}

fn main() -> Result<()> {
    disp_gen::init_logging();
    let cli = Cli::parse();

    let manifest = match &cli.manifest {
        Some(path) => {
            tracing::info!("Loading sound manifest {}", path.display());
            SoundManifest::load(path)?
        }
        None => SoundManifest::builtin(),
    };

    if cli.wav && !cfg!(feature = "wav-export") {
        anyhow::bail!("--wav requires disp-gen to be built with the `wav-export` feature");
    }

    println!("Creating Displexity sound files...");
    for preset in manifest.presets() {
        let sound = render_sound(&preset, manifest.sample_rate);
        write_files(&cli.out_dir, &[(sound.file_name.clone(), sound.encode()?)])?;

        let path = cli.out_dir.join(&sound.file_name);
        match sound.kind {
            SoundKind::Effect => println!(
                "Created {}: {}s, {}Hz, {} samples",
                path.display(),
                sound.duration,
                preset.frequencies.first().copied().unwrap_or_default(),
                sound.samples.len()
            ),
            SoundKind::Loop => println!(
                "Created {}: {}s loop, {} frequencies, {} samples",
                path.display(),
                sound.duration,
                sound.voices,
                sound.samples.len()
            ),
        }

        if cli.wav {
            let wav_path = write_preview(&sound, &path)?;
            println!("  preview {}", wav_path.display());
        }
    }

    println!();
    println!("Sound files created successfully!");
    println!("File formats:");
    println!("  .dish - Displexity Sound Header (short effects)");
    println!("  .disll - Displexity Sound Loop Library (background music)");

    Ok(())
}

/// `footstep.dish` -> `footstep.dish.wav`
#[cfg(feature = "wav-export")]
fn write_preview(sound: &GeneratedSound, path: &Path) -> Result<PathBuf> {
    let wav_path = path.with_extension(format!("{}.wav", sound.kind.extension()));
    disp_gen::audio::write_wav(&sound.samples, sound.sample_rate, &wav_path)?;
    Ok(wav_path)
}

#[cfg(not(feature = "wav-export"))]
fn write_preview(_sound: &GeneratedSound, _path: &Path) -> Result<PathBuf> {
    anyhow::bail!("WAV export is not compiled in")
}
