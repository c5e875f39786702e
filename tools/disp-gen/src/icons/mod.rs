//! Pixel-geometry icons
//!
//! Every icon is a pure function of pixel position: each design is authored on
//! a 32×32 grid and sampled nearest-neighbour for other sizes. The resulting
//! BGRA buffers are packed with [`disp_formats::encode_ico`].
//!
//! # Example
//! ```
//! use disp_gen::icons::{render_icon, IconKind};
//!
//! let image = render_icon(IconKind::Executable, 32);
//! assert_eq!(image.bgra.len(), 32 * 32 * 4);
//! ```

mod designs;
pub mod shapes;

use anyhow::{Context, Result};
use disp_formats::ico::MAX_DIMENSION;
use disp_formats::{encode_ico, FormatError, IconImage};

/// Edge length of the grid designs are authored on
pub const DESIGN_GRID: u32 = 32;

/// The icon set shipped with Displexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// Compiler (`disp.ico`)
    Compiler,
    /// Compiled programs (`exe.ico`)
    Executable,
    /// IDE (`ide.ico`)
    Ide,
    /// `.disp` packages (`package.ico`)
    Package,
    /// Runner / terminal (`runner.ico`)
    Runner,
}

impl IconKind {
    pub const ALL: [IconKind; 5] = [
        IconKind::Compiler,
        IconKind::Executable,
        IconKind::Ide,
        IconKind::Package,
        IconKind::Runner,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            IconKind::Compiler => "disp.ico",
            IconKind::Executable => "exe.ico",
            IconKind::Ide => "ide.ico",
            IconKind::Package => "package.ico",
            IconKind::Runner => "runner.ico",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            IconKind::Compiler => "compiler",
            IconKind::Executable => "executables",
            IconKind::Ide => "IDE",
            IconKind::Package => ".disp files",
            IconKind::Runner => "runner/terminal",
        }
    }

    /// RGBA color at a design-grid coordinate
    pub fn shade(self, x: i32, y: i32) -> [u8; 4] {
        match self {
            IconKind::Compiler => designs::compiler(x, y),
            IconKind::Executable => designs::executable(x, y),
            IconKind::Ide => designs::ide(x, y),
            IconKind::Package => designs::package(x, y),
            IconKind::Runner => designs::runner(x, y),
        }
    }
}

/// Render one icon at `size`×`size`
pub fn render_icon(kind: IconKind, size: u32) -> IconImage {
    let mut image = IconImage::new(size, size);
    for y in 0..size {
        let gy = (y * DESIGN_GRID / size) as i32;
        for x in 0..size {
            let gx = (x * DESIGN_GRID / size) as i32;
            image.set_pixel(x, y, kind.shade(gx, gy));
        }
    }
    image
}

/// Render `kind` at every size in `sizes` and encode one ICO file
pub fn build_icon_file(kind: IconKind, sizes: &[u32]) -> Result<Vec<u8>> {
    if let Some(&size) = sizes.iter().find(|&&s| !(1..=MAX_DIMENSION).contains(&s)) {
        return Err(FormatError::InvalidDimensions {
            width: size,
            height: size,
        })
        .with_context(|| format!("Failed to encode {}", kind.file_name()));
    }
    let images: Vec<IconImage> = sizes.iter().map(|&size| render_icon(kind, size)).collect();
    encode_ico(&images).with_context(|| format!("Failed to encode {}", kind.file_name()))
}

/// Build the whole icon set as `(file_name, bytes)` pairs
pub fn build_icon_set(sizes: &[u32]) -> Result<Vec<(String, Vec<u8>)>> {
    IconKind::ALL
        .iter()
        .map(|&kind| Ok((kind.file_name().to_string(), build_icon_file(kind, sizes)?)))
        .collect()
}
