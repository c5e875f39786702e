//! Procedural sound generation
//!
//! Effects (`.dish`) are single decaying sine tones; loops (`.disll`) are
//! sustained chords over a 55 Hz bass. Both are written mono PCM16 at the
//! manifest's sample rate.
//!
//! # Example
//! ```
//! use disp_gen::audio::{render_sound, SoundPreset};
//! use disp_formats::SoundKind;
//!
//! let preset = SoundPreset::effect("beep", 0.1, 440.0);
//! let sound = render_sound(&preset, 44100);
//! assert_eq!(sound.kind, SoundKind::Effect);
//! assert_eq!(sound.encode()?.len(), 8840);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod synth;
#[cfg(feature = "wav-export")]
mod wav;

pub use synth::{
    chord_loop, chord_voices, clip_sample, effect, sample_count, synthesize, Envelope, Voice,
    BASS, CHORD_AMPLITUDE, EFFECT_AMPLITUDE, EFFECT_DECAY, PEAK,
};

#[cfg(feature = "wav-export")]
pub use wav::write_wav;

use anyhow::{Context, Result};
use disp_formats::{encode_sound, SoundKind};

/// Default output sample rate (Hz)
pub const SAMPLE_RATE: u32 = 44100;

/// One named sound to generate
#[derive(Debug, Clone, PartialEq)]
pub struct SoundPreset {
    /// File stem (`footstep` -> `footstep.dish`)
    pub name: String,
    /// Duration in seconds
    pub duration: f64,
    /// Frequencies in Hz: one for an effect, the chord for a loop
    pub frequencies: Vec<f64>,
    /// Container variant
    pub kind: SoundKind,
}

impl SoundPreset {
    pub fn effect(name: &str, duration: f64, frequency: f64) -> Self {
        Self {
            name: name.to_string(),
            duration,
            frequencies: vec![frequency],
            kind: SoundKind::Effect,
        }
    }

    pub fn looped(name: &str, duration: f64, frequencies: &[f64]) -> Self {
        Self {
            name: name.to_string(),
            duration,
            frequencies: frequencies.to_vec(),
            kind: SoundKind::Loop,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.kind.extension())
    }
}

/// Synthesized sound ready to be written
#[derive(Debug, Clone)]
pub struct GeneratedSound {
    pub file_name: String,
    pub kind: SoundKind,
    pub sample_rate: u32,
    pub duration: f64,
    pub voices: usize,
    pub samples: Vec<i16>,
}

impl GeneratedSound {
    /// Encode into the DISH/DISLL container
    pub fn encode(&self) -> Result<Vec<u8>> {
        encode_sound(self.kind, self.sample_rate, &self.samples)
            .with_context(|| format!("Failed to encode {}", self.file_name))
    }
}

/// Synthesize one preset
///
/// Effects use every listed frequency as an equal-amplitude decaying voice;
/// presets built with [`SoundPreset::effect`] have exactly one.
pub fn render_sound(preset: &SoundPreset, sample_rate: u32) -> GeneratedSound {
    let samples = match preset.kind {
        SoundKind::Effect => match preset.frequencies.as_slice() {
            [frequency] => effect(preset.duration, *frequency, sample_rate),
            many => synthesize(
                &many
                    .iter()
                    .map(|&f| Voice::new(f, EFFECT_AMPLITUDE / many.len().max(1) as f64))
                    .collect::<Vec<_>>(),
                Envelope::Exponential { rate: EFFECT_DECAY },
                preset.duration,
                sample_rate,
            ),
        },
        SoundKind::Loop => chord_loop(preset.duration, &preset.frequencies, sample_rate),
    };

    GeneratedSound {
        file_name: preset.file_name(),
        kind: preset.kind,
        sample_rate,
        duration: preset.duration,
        voices: preset.frequencies.len(),
        samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use disp_formats::decode_sound;

    #[test]
    fn test_reference_effect() {
        let sound = render_sound(&SoundPreset::effect("beep", 0.1, 440.0), SAMPLE_RATE);
        let data = sound.encode().unwrap();

        assert_eq!(sound.samples.len(), 4410);
        assert_eq!(data.len(), 8 + 12 + 8820);
        assert_eq!(&data[..8], b"DISHSND1");
    }

    #[test]
    fn test_loop_container() {
        let preset = SoundPreset::looped("cave", 0.5, &[110.0, 138.0, 165.0]);
        let sound = render_sound(&preset, 22050);
        let decoded = decode_sound(&sound.encode().unwrap()).unwrap();

        assert_eq!(sound.file_name, "cave.disll");
        assert_eq!(decoded.header.kind, SoundKind::Loop);
        assert_eq!(decoded.header.sample_rate, 22050);
        assert_eq!(decoded.header.sample_count as usize, sample_count(0.5, 22050));
        assert_eq!(decoded.samples, sound.samples);
    }

    #[test]
    fn test_multi_frequency_effect_stays_in_range() {
        let mut preset = SoundPreset::effect("zap", 0.2, 300.0);
        preset.frequencies = vec![300.0, 450.0, 600.0];
        let sound = render_sound(&preset, SAMPLE_RATE);

        assert_eq!(sound.voices, 3);
        assert!(sound.samples.iter().all(|s| s.unsigned_abs() <= EFFECT_AMPLITUDE as u16));
    }

    #[test]
    fn test_file_names() {
        assert_eq!(SoundPreset::effect("jump", 0.3, 800.0).file_name(), "jump.dish");
        assert_eq!(
            SoundPreset::looped("forest", 5.0, &[330.0]).file_name(),
            "forest.disll"
        );
    }
}
