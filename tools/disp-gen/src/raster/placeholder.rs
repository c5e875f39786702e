//! Labelled placeholder icons (`logs.ico`, `nvim.ico`)

use anyhow::Result;
use image::RgbaImage;

use super::glyphs::GLYPH_HEIGHT;
use super::{encode_ico_frames, encode_png, resize_all, Canvas};

/// Frame sizes packed into each placeholder ICO, largest first
pub const PLACEHOLDER_SIZES: [u32; 5] = [256, 128, 64, 32, 16];

const SOURCE_SIZE: u32 = 256;
const BACKGROUND: [u8; 4] = [30, 30, 30, 255];
const FOREGROUND: [u8; 4] = [240, 240, 240, 255];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    /// ICO file name; the PNG shares its stem
    pub file_name: &'static str,
    pub label: &'static str,
}

impl Placeholder {
    pub fn png_name(&self) -> String {
        match self.file_name.strip_suffix(".ico") {
            Some(stem) => format!("{stem}.png"),
            None => format!("{}.png", self.file_name),
        }
    }
}

pub const PLACEHOLDERS: [Placeholder; 2] = [
    Placeholder {
        file_name: "logs.ico",
        label: "LOG",
    },
    Placeholder {
        file_name: "nvim.ico",
        label: "NV",
    },
];

/// Solid square with `label` centered, text roughly a sixth of the size tall
pub fn render_placeholder(label: &str, size: u32, bg: [u8; 4], fg: [u8; 4]) -> RgbaImage {
    let scale = ((size / 6) / GLYPH_HEIGHT).max(1);
    let mut canvas = Canvas::filled(size, bg);
    canvas.draw_text_centered(label, scale, fg);
    canvas.into_image()
}

/// Render every placeholder as `(file name, bytes)` pairs: a 256×256 PNG
/// followed by the multi-resolution ICO
pub fn build_placeholders() -> Result<Vec<(String, Vec<u8>)>> {
    let mut files = Vec::with_capacity(PLACEHOLDERS.len() * 2);
    for placeholder in &PLACEHOLDERS {
        let image = render_placeholder(placeholder.label, SOURCE_SIZE, BACKGROUND, FOREGROUND);
        files.push((placeholder.png_name(), encode_png(&image)?));

        let frames = resize_all(&image, &PLACEHOLDER_SIZES);
        files.push((placeholder.file_name.to_string(), encode_ico_frames(&frames)?));
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use disp_formats::read_directory;

    #[test]
    fn test_png_name() {
        assert_eq!(PLACEHOLDERS[0].png_name(), "logs.png");
        assert_eq!(PLACEHOLDERS[1].png_name(), "nvim.png");
    }

    #[test]
    fn test_render_placeholder() {
        let image = render_placeholder("LOG", 256, BACKGROUND, FOREGROUND);

        assert_eq!(image.get_pixel(0, 0).0, BACKGROUND);
        assert_eq!(image.get_pixel(255, 255).0, BACKGROUND);
        // scale 6: "LOG" is 102x42 at (77, 107); L's stem starts there
        assert_eq!(image.get_pixel(77, 107).0, FOREGROUND);
        assert_eq!(image.get_pixel(77, 148).0, FOREGROUND);
    }

    #[test]
    fn test_small_placeholder_uses_unit_scale() {
        let image = render_placeholder("NV", 16, BACKGROUND, FOREGROUND);
        assert!(image.pixels().any(|p| p.0 == FOREGROUND));
    }

    #[test]
    fn test_build_placeholders() {
        let files = build_placeholders().unwrap();
        let names: Vec<&str> = files.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["logs.png", "logs.ico", "nvim.png", "nvim.ico"]);

        let (header, entries) = read_directory(&files[1].1).unwrap();
        assert_eq!(header.image_count, 5);
        let widths: Vec<u32> = entries.iter().map(|e| e.width).collect();
        assert_eq!(widths, PLACEHOLDER_SIZES.to_vec());
    }
}
