//! Hex region enumeration and world-space conversions.
//!
//! Uses the pointy-top axial projection: `q` runs along world `x`, `r` is
//! skewed between `x` and `z`. All functions are pure.

use bevy::prelude::Vec3;

use crate::coord::AxialCoord;

const SQRT_3: f32 = 1.732_050_8;
const HALF_SQRT_3: f32 = SQRT_3 / 2.0;

/// Every coordinate within `radius` rings of the origin.
///
/// Ordered q-major, then r ascending; [`crate::HexMeshBuilder`] slots follow
/// this order. A negative radius yields an empty region.
///
/// # Examples
/// ```
/// # use hex_prism::grid::generate_region;
/// assert_eq!(generate_region(0).len(), 1);
/// assert_eq!(generate_region(2).len(), 19);
/// assert!(generate_region(-1).is_empty());
/// ```
pub fn generate_region(radius: i32) -> Vec<AxialCoord> {
    if radius < 0 {
        return Vec::new();
    }
    region_iter(radius).collect()
}

/// Lazy form of [`generate_region`], in the same order.
pub fn region_iter(radius: i32) -> impl Iterator<Item = AxialCoord> {
    let (lo, hi) = if radius < 0 { (1, 0) } else { (-radius, radius) };
    (lo..=hi).flat_map(move |q| {
        (lo..=hi)
            .filter(move |&r| (i64::from(q) + i64::from(r)).abs() <= i64::from(hi))
            .map(move |r| AxialCoord::new(q, r))
    })
}

/// Number of hexes in a region of `radius` rings (`3N² + 3N + 1`).
///
/// `None` if the count does not fit in `usize`.
pub fn region_len(radius: i32) -> Option<usize> {
    if radius < 0 {
        return Some(0);
    }
    let n = usize::try_from(radius).ok()?;
    let three_n = n.checked_mul(3)?;
    three_n.checked_mul(n)?.checked_add(three_n)?.checked_add(1)
}

/// World-space center of `coord` on the `y = 0` plane, for hexes of
/// circumradius `size`.
pub fn to_world(coord: AxialCoord, size: f32) -> Vec3 {
    let q = coord.q as f32;
    let r = coord.r as f32;
    let x = SQRT_3 * q * size + SQRT_3 * size / 2.0 * r;
    let z = 3.0 * size / 2.0 * r;
    Vec3::new(x, 0.0, z)
}

/// The unit-size hex containing `world` (its `y` is ignored).
pub fn to_hex(world: Vec3) -> AxialCoord {
    let r = world.z / 1.5;
    let q = (world.x - HALF_SQRT_3 * r) / SQRT_3;
    cube_round(q, r)
}

/// Inverse of [`to_world`] for hexes of circumradius `size`.
///
/// `size == 1.0` gives the same result as [`to_hex`].
pub fn to_hex_scaled(world: Vec3, size: f32) -> AxialCoord {
    to_hex(Vec3::new(world.x / size, world.y, world.z / size))
}

/// Snaps fractional axial coordinates to the nearest hex.
///
/// Each cube component is rounded half-to-even, then the one with the
/// largest rounding error is rebuilt from the other two so `q + r + s == 0`.
/// Ties resolve in the order q, r, s: `q` is rebuilt only when its error is
/// strictly the largest, `r` only when strictly larger than `s`'s.
///
/// # Examples
/// ```
/// # use hex_prism::{AxialCoord, grid::cube_round};
/// assert_eq!(cube_round(0.625, 0.25), AxialCoord::new(1, 0));
/// assert_eq!(cube_round(0.375, 0.375), AxialCoord::new(0, 1));
/// ```
pub fn cube_round(q: f32, r: f32) -> AxialCoord {
    let s = -q - r;

    let mut round_q = q.round_ties_even();
    let mut round_r = r.round_ties_even();
    let round_s = s.round_ties_even();

    let diff_q = (round_q - q).abs();
    let diff_r = (round_r - r).abs();
    let diff_s = (round_s - s).abs();

    if diff_q > diff_r && diff_q > diff_s {
        round_q = -round_r - round_s;
    } else if diff_r > diff_s {
        round_r = -round_q - round_s;
    }

    AxialCoord::new(round_q as i32, round_r as i32)
}
