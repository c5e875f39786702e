//! Terminal-style icon for TUI executables

use anyhow::Result;
use image::RgbaImage;

use super::{encode_ico_frames, Canvas};

pub const TUI_ICON_NAME: &str = "tui.ico";

/// Frame sizes packed into `tui.ico`, smallest first
pub const TUI_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

const FRAME: [u8; 4] = [128, 0, 128, 255];
const PANEL: [u8; 4] = [40, 40, 60, 255];
const TEXT: [u8; 4] = [0, 255, 128, 255];
const CURSOR: [u8; 4] = [255, 255, 255, 200];

/// Draw the TUI icon at one size
///
/// Sizes from 48 up show three text lines and a cursor; smaller sizes show a
/// `>` prompt.
pub fn render_tui_icon(size: u32) -> RgbaImage {
    let s = size as i32;
    let mut canvas = Canvas::new(size);

    let margin = s / 16;
    canvas.fill_rounded_rect(margin, margin, s - margin, s - margin, s / 8, FRAME);

    let inner = s / 6;
    canvas.fill_rounded_rect(inner, inner, s - inner, s - inner, s / 12, PANEL);

    if size >= 48 {
        let left = inner + s / 10;
        let line_y = inner + s / 6;
        let line_height = s / 12;
        let pitch = line_height + s / 20;

        for i in 0..3 {
            let width = if i == 2 { s / 3 } else { s / 2 };
            let top = line_y + i * pitch;
            canvas.fill_rect(left, top, left + width, top + line_height / 2, TEXT);
        }

        let cursor_y = line_y + 3 * pitch;
        canvas.fill_rect(left, cursor_y, left + s / 8, cursor_y + line_height, CURSOR);
    } else {
        let c = (s / 2) as f32;
        let (dx, dy) = ((s / 6) as f32, (s / 8) as f32);
        canvas.fill_polygon(&[(c - dx, c - dy), (c + dy, c), (c - dx, c + dy)], TEXT);
    }

    canvas.into_image()
}

/// Render every size and encode `tui.ico`
pub fn build_tui_icon(sizes: &[u32]) -> Result<Vec<u8>> {
    let frames: Vec<RgbaImage> = sizes.iter().map(|&size| render_tui_icon(size)).collect();
    encode_ico_frames(&frames)
}
