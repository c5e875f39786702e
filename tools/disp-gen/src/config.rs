//! Sound manifest (sounds.toml)
//!
//! Optional TOML file overriding the built-in sound set. Without one,
//! [`SoundManifest::builtin`] reproduces the shipped sounds.
//!
//! ```toml
//! sample_rate = 44100
//!
//! [[effects]]
//! name = "footstep"
//! duration = 0.15
//! frequency = 200.0
//!
//! [[loops]]
//! name = "background"
//! duration = 4.0
//! frequencies = [220.0, 277.0, 330.0, 415.0]
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::audio::{sample_count, SoundPreset, SAMPLE_RATE};

/// sounds.toml structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SoundManifest {
    /// Output sample rate in Hz.
    /// Default: 44100
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    #[serde(default)]
    pub effects: Vec<EffectEntry>,
    #[serde(default)]
    pub loops: Vec<LoopEntry>,
}

fn default_sample_rate() -> u32 {
    SAMPLE_RATE
}

/// One-shot effect entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EffectEntry {
    pub name: String,
    pub duration: f64,
    pub frequency: f64,
}

/// Looping cue entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoopEntry {
    pub name: String,
    pub duration: f64,
    pub frequencies: Vec<f64>,
}

impl SoundManifest {
    /// The sound set shipped with Displexity
    pub fn builtin() -> Self {
        let effect = |name: &str, duration, frequency| EffectEntry {
            name: name.to_string(),
            duration,
            frequency,
        };
        let looped = |name: &str, duration, frequencies: &[f64]| LoopEntry {
            name: name.to_string(),
            duration,
            frequencies: frequencies.to_vec(),
        };

        Self {
            sample_rate: SAMPLE_RATE,
            effects: vec![
                effect("footstep", 0.15, 200.0),
                effect("place", 0.2, 600.0),
                effect("break", 0.25, 150.0),
                effect("jump", 0.3, 800.0),
                effect("pickup", 0.1, 1200.0),
            ],
            loops: vec![
                looped("background", 4.0, &[220.0, 277.0, 330.0, 415.0]),
                looped("cave", 3.0, &[110.0, 138.0, 165.0]),
                looped("forest", 5.0, &[330.0, 415.0, 523.0, 659.0]),
            ],
        }
    }

    /// Parse a manifest from TOML text and validate it
    pub fn from_toml(text: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(text).context("Failed to parse sound manifest")?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load and validate a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid manifest {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            bail!("sample_rate must be positive");
        }

        let mut seen = HashSet::new();
        for preset in self.presets() {
            if preset.name.is_empty() || preset.name.contains(['/', '\\']) {
                bail!("Invalid sound name: {:?}", preset.name);
            }
            if !preset.duration.is_finite() || preset.duration < 0.0 {
                bail!("Sound '{}' has invalid duration {}", preset.name, preset.duration);
            }
            if sample_count(preset.duration, self.sample_rate) > u32::MAX as usize {
                bail!("Sound '{}' is too long for a 32-bit sample count", preset.name);
            }
            if preset.frequencies.iter().any(|f| !f.is_finite() || *f <= 0.0) {
                bail!("Sound '{}' has a non-positive frequency", preset.name);
            }
            if !seen.insert(preset.file_name()) {
                bail!("Duplicate sound: {}", preset.file_name());
            }
        }
        Ok(())
    }

    /// All entries as presets, effects first
    pub fn presets(&self) -> Vec<SoundPreset> {
        let effects = self
            .effects
            .iter()
            .map(|e| SoundPreset::effect(&e.name, e.duration, e.frequency));
        let loops = self
            .loops
            .iter()
            .map(|l| SoundPreset::looped(&l.name, l.duration, &l.frequencies));
        effects.chain(loops).collect()
    }
}

impl Default for SoundManifest {
    fn default() -> Self {
        Self::builtin()
    }
}
