//! Sine-wave synthesis
//!
//! Samples are computed in `f64`, summed across voices, clipped to ±32767 and
//! truncated toward zero.

use std::f64::consts::TAU;

/// Largest sample magnitude written (symmetric range, -32768 is never used)
pub const PEAK: i16 = i16::MAX;

/// Peak amplitude of a one-shot effect
pub const EFFECT_AMPLITUDE: f64 = 16000.0;

/// Decay rate of a one-shot effect envelope (per second)
pub const EFFECT_DECAY: f64 = 5.0;

/// Amplitude shared by all chord voices of a loop
pub const CHORD_AMPLITUDE: f64 = 8000.0;

/// Bass voice mixed under every loop
pub const BASS: Voice = Voice {
    frequency: 55.0,
    amplitude: 2000.0,
};

/// One sine partial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voice {
    /// Frequency in Hz
    pub frequency: f64,
    /// Peak amplitude in sample units
    pub amplitude: f64,
}

impl Voice {
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

/// Amplitude envelope applied to every voice
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Envelope {
    /// Constant amplitude
    Flat,
    /// `exp(-rate * t)`
    Exponential { rate: f64 },
}

impl Envelope {
    #[inline]
    pub fn gain(self, t: f64) -> f64 {
        match self {
            Envelope::Flat => 1.0,
            Envelope::Exponential { rate } => (-t * rate).exp(),
        }
    }
}

/// Number of samples for `duration` seconds, rounded to nearest
#[inline]
pub fn sample_count(duration: f64, sample_rate: u32) -> usize {
    (duration * sample_rate as f64).round().max(0.0) as usize
}

/// Clamp to ±32767 and truncate toward zero
#[inline]
pub fn clip_sample(value: f64) -> i16 {
    let peak = PEAK as f64;
    value.clamp(-peak, peak) as i16
}

/// Superpose `voices` under `envelope` for `duration` seconds
pub fn synthesize(
    voices: &[Voice],
    envelope: Envelope,
    duration: f64,
    sample_rate: u32,
) -> Vec<i16> {
    let count = sample_count(duration, sample_rate);
    let rate = sample_rate as f64;

    (0..count)
        .map(|i| {
            let t = i as f64 / rate;
            let gain = envelope.gain(t);
            let value: f64 = voices
                .iter()
                .map(|v| v.amplitude * gain * (TAU * v.frequency * t).sin())
                .sum();
            clip_sample(value)
        })
        .collect()
}

/// Short decaying tone for one-shot effects
pub fn effect(duration: f64, frequency: f64, sample_rate: u32) -> Vec<i16> {
    synthesize(
        &[Voice::new(frequency, EFFECT_AMPLITUDE)],
        Envelope::Exponential { rate: EFFECT_DECAY },
        duration,
        sample_rate,
    )
}

/// Chord voices for a loop: the chord amplitude split evenly, plus the bass
pub fn chord_voices(frequencies: &[f64]) -> Vec<Voice> {
    let share = CHORD_AMPLITUDE / frequencies.len().max(1) as f64;
    frequencies
        .iter()
        .map(|&f| Voice::new(f, share))
        .chain(std::iter::once(BASS))
        .collect()
}

/// Sustained chord for looping cues
pub fn chord_loop(duration: f64, frequencies: &[f64], sample_rate: u32) -> Vec<i16> {
    synthesize(&chord_voices(frequencies), Envelope::Flat, duration, sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_rounds() {
        assert_eq!(sample_count(0.1, 44100), 4410);
        assert_eq!(sample_count(0.15, 44100), 6615);
        assert_eq!(sample_count(1.0 / 3.0, 10), 3);
        assert_eq!(sample_count(0.25, 10), 3);
        assert_eq!(sample_count(0.0, 44100), 0);
    }

    #[test]
    fn test_clip_sample() {
        assert_eq!(clip_sample(0.0), 0);
        assert_eq!(clip_sample(1e9), 32767);
        assert_eq!(clip_sample(-1e9), -32767);
        assert_eq!(clip_sample(12.9), 12);
        assert_eq!(clip_sample(-12.9), -12);
    }

    #[test]
    fn test_effect_length_and_start() {
        let samples = effect(0.1, 440.0, 44100);
        assert_eq!(samples.len(), 4410);
        assert_eq!(samples[0], 0);
        assert!(samples.iter().any(|&s| s > 10000));
    }

    #[test]
    fn test_effect_decays() {
        let samples = effect(1.0, 100.0, 8000);
        let peak = |range: std::ops::Range<usize>| {
            samples[range].iter().map(|s| s.unsigned_abs()).max().unwrap()
        };
        assert!(peak(0..800) > peak(7200..8000) * 10);
    }

    #[test]
    fn test_samples_stay_in_range() {
        // Far more voices than the range can hold
        let voices: Vec<Voice> = (1..=20).map(|i| Voice::new(i as f64 * 3.0, 10000.0)).collect();
        let samples = synthesize(&voices, Envelope::Flat, 0.5, 8000);
        assert!(samples.iter().all(|&s| (-32767..=32767).contains(&s)));
        assert!(samples.contains(&32767));
        assert!(samples.contains(&-32767));
    }

    #[test]
    fn test_chord_voices_split_amplitude() {
        let voices = chord_voices(&[220.0, 330.0, 440.0, 550.0]);
        assert_eq!(voices.len(), 5);
        assert!(voices[..4].iter().all(|v| v.amplitude == 2000.0));
        assert_eq!(voices[4], BASS);
    }

    #[test]
    fn test_chord_without_frequencies_is_bass_only() {
        let voices = chord_voices(&[]);
        assert_eq!(voices, vec![BASS]);

        let samples = chord_loop(0.1, &[], 44100);
        assert_eq!(samples.len(), 4410);
        assert!(samples.iter().all(|s| s.unsigned_abs() <= 2000));
    }

    #[test]
    fn test_chord_loop_bounded_by_total_amplitude() {
        let samples = chord_loop(0.5, &[220.0, 277.0, 330.0, 415.0], 44100);
        let limit = (CHORD_AMPLITUDE + BASS.amplitude) as u16;
        assert!(samples.iter().all(|s| s.unsigned_abs() <= limit));
    }
}
