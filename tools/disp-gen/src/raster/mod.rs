//! Canvas-drawn icons packaged by the `image` crate
//!
//! Requires the `raster` feature. Shapes are drawn with [`Canvas`]; the
//! multi-resolution ICO container (PNG-compressed frames) is produced by
//! `image::codecs::ico`.

mod canvas;
pub mod glyphs;
mod placeholder;
mod tui;

pub use canvas::Canvas;
pub use placeholder::{
    build_placeholders, render_placeholder, Placeholder, PLACEHOLDERS, PLACEHOLDER_SIZES,
};
pub use tui::{build_tui_icon, render_tui_icon, TUI_ICON_NAME, TUI_SIZES};

use anyhow::{Context, Result};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

/// Encode images as one multi-resolution ICO (PNG frames, in the given order)
pub fn encode_ico_frames(images: &[RgbaImage]) -> Result<Vec<u8>> {
    let frames = images
        .iter()
        .map(|img| {
            IcoFrame::as_png(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
        })
        .collect::<image::ImageResult<Vec<_>>>()
        .context("Failed to encode ICO frame")?;

    let mut bytes = Vec::new();
    IcoEncoder::new(&mut bytes)
        .encode_images(&frames)
        .context("Failed to encode ICO")?;
    Ok(bytes)
}

/// Encode an image as PNG
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .context("Failed to encode PNG")?;
    Ok(bytes)
}

/// Downscale `image` to each size in `sizes`
pub fn resize_all(image: &RgbaImage, sizes: &[u32]) -> Vec<RgbaImage> {
    sizes
        .iter()
        .map(|&size| {
            if size == image.width() && size == image.height() {
                image.clone()
            } else {
                imageops::resize(image, size, size, FilterType::Lanczos3)
            }
        })
        .collect()
}
