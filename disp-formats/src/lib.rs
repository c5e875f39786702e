//! Binary asset formats for Displexity
//!
//! Fixed-layout encoders (and matching decoders, used for verification) for
//! the two kinds of files the asset generators emit:
//!
//! - **ICO**: Windows icon container holding one or more 32-bit BGRA bitmaps
//!   with an all-zero 1-bit AND-mask.
//! - **DISH / DISLL**: Displexity's raw PCM16 sound containers, an 8-byte
//!   magic followed by three little-endian `u32` fields and the samples.
//!
//! Neither format uses compression, chunking or checksums.
//!
//! # Usage
//!
//! ```
//! use disp_formats::{encode_ico, encode_sound, IconImage, SoundKind};
//!
//! let mut image = IconImage::new(32, 32);
//! image.set_pixel(16, 16, [255, 0, 0, 255]);
//! let ico = encode_ico(&[image])?;
//! assert_eq!(&ico[2..4], &1u16.to_le_bytes());
//!
//! let dish = encode_sound(SoundKind::Effect, 44100, &[0, 100, -100])?;
//! assert_eq!(&dish[..8], b"DISHSND1");
//! # Ok::<(), disp_formats::FormatError>(())
//! ```

mod error;
pub mod ico;
pub mod sound;

pub use error::{FormatError, WriteError};
pub use ico::{
    and_mask_len, decode_ico, encode_ico, read_directory, write_ico, BitmapInfoHeader,
    DecodedIcon, IcoDirEntry, IcoHeader, IconImage,
};
pub use sound::{
    decode_sound, encode_sound, encoded_len, write_sound, DecodedSound, SoundHeader, SoundKind,
};
