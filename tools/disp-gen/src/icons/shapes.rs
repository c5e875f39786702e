//! Closed-form shape predicates on the icon design grid

use std::f32::consts::TAU;

/// Linear blend between two colors, truncating toward zero per channel
pub fn lerp_color<const N: usize>(a: [u8; N], b: [u8; N], t: f32) -> [u8; N] {
    let mut out = [0u8; N];
    for i in 0..N {
        let value = a[i] as f32 + (b[i] as f32 - a[i] as f32) * t;
        out[i] = value as u8;
    }
    out
}

/// Square of half-extent `half` whose corners are cut back diagonally once
/// both offsets pass `inset`.
///
/// Offsets are measured from the center. The corner test uses the sum of
/// the overshoots, which gives a chamfer-like rounded corner on small grids.
pub fn rounded_square_contains(dx: i32, dy: i32, half: i32, inset: i32) -> bool {
    if dx.abs() >= half || dy.abs() >= half {
        return false;
    }
    let corner = (dx.abs() - inset).max(0) + (dy.abs() - inset).max(0);
    corner < half - inset
}

/// Inclusive axis-aligned rectangle test
#[inline]
pub fn in_rect(x: i32, y: i32, x0: i32, y0: i32, x1: i32, y1: i32) -> bool {
    x >= x0 && x <= x1 && y >= y0 && y <= y1
}

/// Euclidean distance from the origin
#[inline]
pub fn distance(dx: f32, dy: f32) -> f32 {
    (dx * dx + dy * dy).sqrt()
}

/// Gear outline radius at `angle`
///
/// Each of the `teeth` sectors is split by phase: the outer `duty` fraction
/// on either edge is a tooth (`base + tooth_height`), the middle is a gap.
pub fn gear_radius(angle: f32, teeth: u32, base: f32, tooth_height: f32, duty: f32) -> f32 {
    let sector = TAU / teeth as f32;
    let phase = angle.rem_euclid(sector) / sector;
    if phase < duty || phase > 1.0 - duty {
        base + tooth_height
    } else {
        base
    }
}

/// Barycentric coordinates of `p` in triangle `(a, b, c)`
///
/// Returns `None` for a degenerate triangle. `p` is inside when all three
/// coordinates are non-negative.
pub fn barycentric(
    p: (f32, f32),
    a: (f32, f32),
    b: (f32, f32),
    c: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (b.1 - c.1) * (a.0 - c.0) + (c.0 - b.0) * (a.1 - c.1);
    if denom == 0.0 {
        return None;
    }
    let u = ((b.1 - c.1) * (p.0 - c.0) + (c.0 - b.0) * (p.1 - c.1)) / denom;
    let v = ((c.1 - a.1) * (p.0 - c.0) + (a.0 - c.0) * (p.1 - c.1)) / denom;
    Some((u, v, 1.0 - u - v))
}
