//! Per-pixel shading for each icon design
//!
//! All designs are authored on a 32×32 grid and return RGBA.

use super::shapes::{
    barycentric, distance, gear_radius, in_rect, lerp_color, rounded_square_contains,
};

pub(super) const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

#[inline]
fn opaque([r, g, b]: [u8; 3]) -> [u8; 4] {
    [r, g, b, 255]
}

/// Blue gradient "D" on a dark rounded square
pub(super) fn compiler(x: i32, y: i32) -> [u8; 4] {
    const BACKGROUND: [u8; 3] = [30, 30, 45];
    const PRIMARY: [u8; 3] = [0, 150, 255];
    const SECONDARY: [u8; 3] = [100, 200, 255];

    let (dx, dy) = (x - 16, y - 16);
    if !rounded_square_contains(dx, dy, 14, 10) {
        return TRANSPARENT;
    }

    let stem = in_rect(x, y, 8, 6, 12, 26);
    let top = in_rect(x, y, 8, 6, 20, 10);
    let bottom = in_rect(x, y, 8, 22, 20, 26);
    let bowl = {
        let cd = (y - 16).abs();
        (18..=24).contains(&x)
            && (10..=22).contains(&y)
            && cd <= 8
            && x as f32 >= 20.0 - (8 - cd) as f32 * 0.3
    };

    if stem || top || bottom || bowl {
        let t = (y - 6) as f32 / 20.0;
        opaque(lerp_color(PRIMARY, SECONDARY, t))
    } else {
        opaque(BACKGROUND)
    }
}

/// Green eight-tooth gear with a hub
pub(super) fn executable(x: i32, y: i32) -> [u8; 4] {
    const INNER: f32 = 5.0;

    let (dx, dy) = ((x - 16) as f32, (y - 16) as f32);
    let dist = distance(dx, dy);
    let outer = gear_radius(dy.atan2(dx), 8, 13.0, 2.0, 0.3);

    if dist >= INNER && dist <= outer {
        let s = 1.0 - (dist - INNER) / (outer - INNER);
        [
            (50.0 + 100.0 * s) as u8,
            (180.0 + 50.0 * s) as u8,
            (50.0 + 50.0 * s) as u8,
            255,
        ]
    } else if dist > 2.0 && dist < INNER {
        [80, 200, 80, 255]
    } else if dist <= 2.0 {
        [40, 120, 40, 255]
    } else {
        TRANSPARENT
    }
}

/// Purple editor window with syntax-colored code lines
pub(super) fn ide(x: i32, y: i32) -> [u8; 4] {
    if !(2..=29).contains(&x) || !(2..=29).contains(&y) {
        return [60, 30, 90, 255];
    }
    if !(4..=27).contains(&x) || !(4..=27).contains(&y) {
        return [100, 60, 140, 255];
    }

    if y < 8 {
        let t = (y - 4) as f32 / 4.0;
        let mut rgb = [
            (120.0 + 30.0 * t) as u8,
            (80.0 + 20.0 * t) as u8,
            (180.0 + 20.0 * t) as u8,
        ];
        if (5..=7).contains(&y) {
            if (24..=26).contains(&x) {
                rgb = [255, 100, 100];
            } else if (20..=22).contains(&x) {
                rgb = [255, 200, 100];
            }
        }
        return opaque(rgb);
    }

    let mut rgb = [25, 25, 40];

    // Gutter
    if (4..=7).contains(&x) {
        rgb = [40, 40, 60];
        if x == 6 && y % 3 == 0 && y > 9 {
            rgb = [100, 100, 120];
        }
    }

    if x >= 9 && y > 9 {
        match (y - 10) % 4 {
            0 if (9..=13).contains(&x) => rgb = [180, 120, 220],
            0 if (15..=20).contains(&x) => rgb = [100, 200, 220],
            1 if (11..=22).contains(&x) => rgb = [150, 220, 150],
            2 if (9..=25).contains(&x) => rgb = [100, 100, 110],
            _ => {}
        }
    }

    opaque(rgb)
}

/// Gold 3-D box with a "D" on the front face
pub(super) fn package(x: i32, y: i32) -> [u8; 4] {
    const EDGE: [u8; 3] = [180, 120, 40];
    const INK: [u8; 3] = [40, 30, 20];

    let mut in_box = false;
    let mut on_edge = false;

    if in_rect(x, y, 6, 10, 26, 28) {
        in_box = true;
        on_edge = x == 6 || x == 26 || y == 10 || y == 28;
    }

    // Top face is a parallelogram leaning right
    if (4..10).contains(&y) {
        let left = 6 + (10 - y);
        let right = 26 + (10 - y);
        if (left..=right).contains(&x) {
            in_box = true;
            on_edge |= y == 4 || x == left || x == right;
        }
    }

    if !in_box {
        return TRANSPARENT;
    }
    if on_edge {
        return opaque(EDGE);
    }

    let t = (y - 4) as f32 / 24.0;
    let mut rgb = [
        (255.0 - 30.0 * t) as u8,
        (180.0 - 40.0 * t) as u8,
        (50.0 + 20.0 * t) as u8,
    ];

    if in_rect(x, y, 12, 14, 22, 24) {
        let ink = if x <= 14 {
            true
        } else if y <= 16 || y >= 22 {
            x <= 20
        } else {
            (19..=21).contains(&x)
        };
        if ink {
            rgb = INK;
        }
    }

    opaque(rgb)
}

/// Terminal frame with a cyan play triangle
pub(super) fn runner(x: i32, y: i32) -> [u8; 4] {
    if !in_rect(x, y, 3, 5, 28, 27) {
        return TRANSPARENT;
    }
    if x <= 5 || x >= 26 || y <= 7 || y >= 25 {
        return [60, 60, 80, 255];
    }

    let p = (x as f32, y as f32);
    match barycentric(p, (10.0, 10.0), (10.0, 22.0), (22.0, 16.0)) {
        Some((u, v, w)) if u >= 0.0 && v >= 0.0 && w >= 0.0 => [
            (100.0 * (1.0 - u)) as u8,
            (200.0 + 55.0 * v) as u8,
            255,
            255,
        ],
        _ => [20, 20, 30, 255],
    }
}
