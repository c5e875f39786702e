//! Format error types

use thiserror::Error;

/// Errors produced while encoding or decoding ICO and sound containers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// An icon file needs at least one image
    #[error("Icon has no images")]
    NoImages,

    /// Image count does not fit the 16-bit header field
    #[error("Too many images: {0} (max {max})", max = u16::MAX)]
    TooManyImages(usize),

    /// Width/height outside 1..=256, or a pixel count the AND-mask cannot cover
    #[error("Invalid icon dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer length does not match width * height * 4
    #[error("Pixel data size mismatch: expected {expected} bytes, got {actual}")]
    PixelDataMismatch { expected: usize, actual: usize },

    /// Input shorter than the fixed header
    #[error("Data too small: need {needed} bytes, got {actual}")]
    TooSmall { needed: usize, actual: usize },

    /// ICO reserved header field was not zero
    #[error("Invalid reserved field: {0}")]
    InvalidReserved(u16),

    /// ICO type field was not 1 (icon)
    #[error("Unsupported icon type: {0}")]
    InvalidIconType(u16),

    /// Sound file did not start with a known magic string
    #[error("Invalid sound magic: {0:?}")]
    InvalidMagic([u8; 8]),

    /// A directory entry or sample block points past the end of the data
    #[error("Truncated data: {0}")]
    Truncated(&'static str),

    /// Embedded bitmap header is not a 32-bit BITMAPINFOHEADER
    #[error("Invalid bitmap header in image {0}")]
    InvalidBitmapHeader(usize),

    /// Sample count does not fit the 32-bit header field
    #[error("Too many samples: {0} (max {max})", max = u32::MAX)]
    TooManySamples(usize),

    /// Sound containers are mono only
    #[error("Unsupported channel count: {0} (only mono is supported)")]
    UnsupportedChannels(u32),
}

/// Error from the `write_*` functions: either invalid input or a failing writer
#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
