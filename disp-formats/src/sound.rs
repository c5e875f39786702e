//! Displexity sound containers (.dish, .disll)
//!
//! Raw mono PCM16 audio behind a fixed header. Two variants share the layout
//! and differ only in their magic string.
//!
//! # Layout
//! ```text
//! 0x00: magic [u8; 8]  ("DISHSND1" effect, "DISLLP1\0" loop)
//! 0x08: sample_rate u32 LE
//! 0x0C: channels u32 LE (always 1)
//! 0x10: sample_count u32 LE
//! 0x14: samples (sample_count × i16 LE)
//! ```

use std::io::Write;

use crate::error::{FormatError, WriteError};

/// Magic for short one-shot effects (.dish)
pub const EFFECT_MAGIC: &[u8; 8] = b"DISHSND1";

/// Magic for looping cues (.disll)
pub const LOOP_MAGIC: &[u8; 8] = b"DISLLP1\0";

/// Channel count written to every file
pub const MONO: u32 = 1;

/// Sound container variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    /// Short one-shot effect (.dish)
    Effect,
    /// Looping background cue (.disll)
    Loop,
}

impl SoundKind {
    /// Magic bytes that open the file
    pub fn magic(self) -> &'static [u8; 8] {
        match self {
            SoundKind::Effect => EFFECT_MAGIC,
            SoundKind::Loop => LOOP_MAGIC,
        }
    }

    /// File extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            SoundKind::Effect => "dish",
            SoundKind::Loop => "disll",
        }
    }

    /// Identify the container variant from its magic
    pub fn from_magic(magic: &[u8; 8]) -> Option<Self> {
        if magic == EFFECT_MAGIC {
            Some(SoundKind::Effect)
        } else if magic == LOOP_MAGIC {
            Some(SoundKind::Loop)
        } else {
            None
        }
    }
}

/// Sound file header (20 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundHeader {
    pub kind: SoundKind,
    pub sample_rate: u32,
    pub channels: u32,
    pub sample_count: u32,
}

impl SoundHeader {
    pub const SIZE: usize = 20;

    pub fn new(kind: SoundKind, sample_rate: u32, sample_count: u32) -> Self {
        Self {
            kind,
            sample_rate,
            channels: MONO,
            sample_count,
        }
    }

    /// Header for `sample_count` samples; fails if the count overflows the
    /// 32-bit field
    pub fn for_samples(
        kind: SoundKind,
        sample_rate: u32,
        sample_count: usize,
    ) -> Result<Self, FormatError> {
        let count =
            u32::try_from(sample_count).map_err(|_| FormatError::TooManySamples(sample_count))?;
        Ok(Self::new(kind, sample_rate, count))
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..8].copy_from_slice(self.kind.magic());
        bytes[8..12].copy_from_slice(&self.sample_rate.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.channels.to_le_bytes());
        bytes[16..20].copy_from_slice(&self.sample_count.to_le_bytes());
        bytes
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        if bytes.len() < Self::SIZE {
            return Err(FormatError::TooSmall {
                needed: Self::SIZE,
                actual: bytes.len(),
            });
        }

        let mut magic = [0u8; 8];
        magic.copy_from_slice(&bytes[0..8]);
        let kind = SoundKind::from_magic(&magic).ok_or(FormatError::InvalidMagic(magic))?;

        Ok(Self {
            kind,
            sample_rate: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            channels: u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
            sample_count: u32::from_le_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]),
        })
    }
}

/// Total file length for a given number of samples
#[inline]
pub fn encoded_len(sample_count: usize) -> usize {
    SoundHeader::SIZE + sample_count * 2
}

/// Encode samples into a complete sound file
pub fn encode_sound(
    kind: SoundKind,
    sample_rate: u32,
    samples: &[i16],
) -> Result<Vec<u8>, FormatError> {
    let header = SoundHeader::for_samples(kind, sample_rate, samples.len())?;

    let mut data = Vec::with_capacity(encoded_len(samples.len()));
    data.extend_from_slice(&header.to_bytes());
    for sample in samples {
        data.extend_from_slice(&sample.to_le_bytes());
    }
    Ok(data)
}

/// Write a complete sound file to `w`
pub fn write_sound<W: Write>(
    w: &mut W,
    kind: SoundKind,
    sample_rate: u32,
    samples: &[i16],
) -> Result<(), WriteError> {
    let data = encode_sound(kind, sample_rate, samples)?;
    w.write_all(&data)?;
    Ok(())
}

/// Decoded sound file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSound {
    pub header: SoundHeader,
    pub samples: Vec<i16>,
}

/// Decode a sound file written by [`encode_sound`]
pub fn decode_sound(data: &[u8]) -> Result<DecodedSound, FormatError> {
    let header = SoundHeader::from_bytes(data)?;
    if header.channels != MONO {
        return Err(FormatError::UnsupportedChannels(header.channels));
    }

    let body = &data[SoundHeader::SIZE..];
    let sample_bytes = header.sample_count as usize * 2;
    let body = body
        .get(..sample_bytes)
        .ok_or(FormatError::Truncated("sample data"))?;

    let samples = body
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    Ok(DecodedSound { header, samples })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_size() {
        assert_eq!(SoundHeader::SIZE, 20);
        assert_eq!(SoundHeader::new(SoundKind::Loop, 1, 2).to_bytes().len(), 20);
    }

    #[test]
    fn test_magic_strings() {
        assert_eq!(SoundKind::Effect.magic(), b"DISHSND1");
        assert_eq!(SoundKind::Loop.magic(), b"DISLLP1\0");
        assert_eq!(SoundKind::from_magic(b"DISLLP1\0"), Some(SoundKind::Loop));
        assert_eq!(SoundKind::from_magic(b"DISLLP1 "), None);
    }

    #[test]
    fn test_effect_layout() {
        let data = encode_sound(SoundKind::Effect, 44100, &[1, -1, i16::MAX]).unwrap();

        assert_eq!(data.len(), encoded_len(3));
        assert_eq!(data.len(), 8 + 12 + 6);
        assert_eq!(&data[0..8], b"DISHSND1");
        assert_eq!(&data[8..12], &44100u32.to_le_bytes());
        assert_eq!(&data[12..16], &1u32.to_le_bytes());
        assert_eq!(&data[16..20], &3u32.to_le_bytes());
        assert_eq!(&data[20..22], &[1, 0]);
        assert_eq!(&data[22..24], &[0xFF, 0xFF]);
    }

    #[test]
    fn test_decode_matches_encode() {
        let samples: Vec<i16> = (0..500).map(|i| (i as i16 - 250) * 100).collect();
        let data = encode_sound(SoundKind::Loop, 22050, &samples).unwrap();

        let decoded = decode_sound(&data).unwrap();
        assert_eq!(decoded.header.kind, SoundKind::Loop);
        assert_eq!(decoded.header.sample_rate, 22050);
        assert_eq!(decoded.header.channels, 1);
        assert_eq!(decoded.samples, samples);
    }

    #[test]
    fn test_write_sound_matches_encode() {
        let mut out = Vec::new();
        write_sound(&mut out, SoundKind::Effect, 8000, &[5, 6]).unwrap();
        assert_eq!(out, encode_sound(SoundKind::Effect, 8000, &[5, 6]).unwrap());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_sample_count_must_fit_header() {
        let max = u32::MAX as usize;
        let header = SoundHeader::for_samples(SoundKind::Loop, 44100, max).unwrap();
        assert_eq!(header.sample_count, u32::MAX);

        assert_eq!(
            SoundHeader::for_samples(SoundKind::Loop, 44100, max + 1),
            Err(FormatError::TooManySamples(max + 1))
        );
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(
            decode_sound(b"DISH"),
            Err(FormatError::TooSmall { needed: 20, .. })
        ));

        let mut bad = encode_sound(SoundKind::Effect, 44100, &[0]).unwrap();
        bad[0] = b'X';
        assert!(matches!(decode_sound(&bad), Err(FormatError::InvalidMagic(_))));

        let mut stereo = encode_sound(SoundKind::Effect, 44100, &[0, 0]).unwrap();
        stereo[12] = 2;
        assert_eq!(
            decode_sound(&stereo),
            Err(FormatError::UnsupportedChannels(2))
        );

        let full = encode_sound(SoundKind::Effect, 44100, &[1, 2, 3]).unwrap();
        assert_eq!(
            decode_sound(&full[..full.len() - 2]),
            Err(FormatError::Truncated("sample data"))
        );
    }
}
