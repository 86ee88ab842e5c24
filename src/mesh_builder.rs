//! Beveled hex prism geometry.
//!
//! Each hex gets a private block of 24 vertices: for edge `k` in `0..6`,
//! vertices `4k..4k+4` are `(inner top, outer top, inner bottom, outer bottom)`.
//! Adjacent edges are stitched into four ruled surfaces (top cap, bottom cap,
//! outer wall, inner wall), two triangles each, for 72 indices per hex.

use bevy::prelude::*;

use crate::buffer::MeshBuffer;
use crate::error::{HexMeshError, check_sizes};

/// Vertices emitted per hex.
pub const VERTICES_PER_HEX: u32 = 24;
/// Indices emitted per hex.
pub const INDICES_PER_HEX: usize = 72;
/// Most hexes one buffer can hold with `u32` indices.
pub const MAX_HEXES: u64 = (u32::MAX as u64 + 1) / VERTICES_PER_HEX as u64;

/// Triangles stitching edge `k` to edge `k + 1`. Offsets `0..4` address edge
/// `k`'s vertices, `4..8` the next edge's.
const EDGE_TRIANGLES: [[u32; 3]; 8] = [
    // top cap
    [0, 5, 1],
    [0, 4, 5],
    // bottom cap
    [2, 3, 7],
    [2, 7, 6],
    // outer wall
    [1, 5, 7],
    [1, 7, 3],
    // inner wall
    [0, 6, 4],
    [0, 2, 6],
];

/// How the bottom ring of each prism is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum Extrusion {
    /// Top ring at `center.y + height / 2`, bottom ring at
    /// `center.y + center.y`. Hexes on the `y = 0` plane get a bottom face
    /// flush with the plane.
    #[default]
    CenterOffset,
    /// Rings at `center.y ± height / 2`.
    Symmetric,
}

impl Extrusion {
    fn bottom_offset(self, center: Vec3, height: f32) -> f32 {
        match self {
            Self::CenterOffset => center.y,
            Self::Symmetric => -height / 2.0,
        }
    }
}

/// Accumulates hex prisms into one [`MeshBuffer`].
///
/// Hexes must be appended with slots `0, 1, 2, …`; [`Self::clear`] starts a
/// new pass.
#[derive(Debug, Default)]
pub struct HexMeshBuilder {
    buffer: MeshBuffer,
    next_slot: u32,
    extrusion: Extrusion,
}

impl HexMeshBuilder {
    /// Empty builder using [`Extrusion::CenterOffset`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes bottom-ring placement for hexes appended from now on.
    pub fn set_extrusion(&mut self, extrusion: Extrusion) {
        self.extrusion = extrusion;
    }

    /// Drops all accumulated geometry and expects slot 0 next.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.next_slot = 0;
    }

    /// Reserves room for `hexes` more prisms, reporting allocation failure
    /// instead of aborting.
    pub fn reserve(&mut self, hexes: usize) -> Result<(), HexMeshError> {
        let failed = HexMeshError::AllocationFailed { hexes };
        let vertices = hexes
            .checked_mul(VERTICES_PER_HEX as usize)
            .ok_or_else(|| failed.clone())?;
        let indices = hexes
            .checked_mul(INDICES_PER_HEX)
            .ok_or_else(|| failed.clone())?;
        self.buffer
            .vertices
            .try_reserve(vertices)
            .map_err(|_| failed.clone())?;
        self.buffer.indices.try_reserve(indices).map_err(|_| failed)
    }

    /// Appends the prism for one hex.
    ///
    /// `slot` must equal the number of hexes appended since the last
    /// [`Self::clear`]. On error nothing is appended.
    pub fn append_hex(
        &mut self,
        center: Vec3,
        slot: u32,
        outer_size: f32,
        inner_size: f32,
        height: f32,
    ) -> Result<(), HexMeshError> {
        if slot != self.next_slot {
            return Err(HexMeshError::SlotOutOfOrder {
                expected: self.next_slot,
                got: slot,
            });
        }
        if !center.is_finite() {
            return Err(HexMeshError::non_finite("center"));
        }
        check_sizes(outer_size, inner_size, height)?;
        let base = slot
            .checked_add(1)
            .and_then(|end| end.checked_mul(VERTICES_PER_HEX))
            .map(|end| end - VERTICES_PER_HEX)
            .ok_or(HexMeshError::TooManyHexes { slot })?;

        let top = height / 2.0;
        let bottom = self.extrusion.bottom_offset(center, height);
        for edge in 0..6 {
            for h in [top, bottom] {
                self.buffer.vertices.push(ring_point(center, inner_size, edge, h));
                self.buffer.vertices.push(ring_point(center, outer_size, edge, h));
            }
        }

        for edge in 0..6u32 {
            let here = base + 4 * edge;
            let next = base + 4 * ((edge + 1) % 6);
            for tri in EDGE_TRIANGLES {
                self.buffer.indices.extend(tri.map(|o| {
                    if o < 4 { here + o } else { next + (o - 4) }
                }));
            }
        }

        trace!("appended hex slot {slot} at {center}");
        self.next_slot += 1;
        Ok(())
    }

    /// Snapshot of the accumulated geometry. The builder keeps its state.
    pub fn finalize(&self) -> MeshBuffer {
        self.buffer.clone()
    }

    /// Hexes appended since the last clear.
    pub fn hex_count(&self) -> u32 {
        self.next_slot
    }

    /// Vertices accumulated so far.
    pub fn vertex_count(&self) -> usize {
        self.buffer.vertices.len()
    }

    /// Indices accumulated so far.
    pub fn index_count(&self) -> usize {
        self.buffer.indices.len()
    }
}

/// Corner `edge` of a hex of circumradius `size`, lifted by `height`.
///
/// Corners sit at `60° · edge − 30°` around `+y`, measured from `+x`
/// towards `+z`.
fn ring_point(center: Vec3, size: f32, edge: u32, height: f32) -> Vec3 {
    let angle_deg = 60.0 * edge as f32 - 30.0;
    let angle_rad = std::f32::consts::PI / 180.0 * angle_deg;
    Vec3::new(
        center.x + size * angle_rad.cos(),
        center.y + height,
        center.z + size * angle_rad.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(hexes: u32) -> HexMeshBuilder {
        let mut b = HexMeshBuilder::new();
        for slot in 0..hexes {
            let center = Vec3::new(slot as f32 * 3.0, 0.0, 0.0);
            b.append_hex(center, slot, 1.0, 0.8, 0.5).unwrap();
        }
        b
    }

    // ── cardinality ─────────────────────────────────────────────────

    #[test]
    fn each_hex_adds_24_vertices_and_72_indices() {
        let mut b = HexMeshBuilder::new();
        for slot in 0..5 {
            b.append_hex(Vec3::ZERO, slot, 2.0, 1.0, 1.0).unwrap();
            let n = slot as usize + 1;
            assert_eq!(b.vertex_count(), 24 * n);
            assert_eq!(b.index_count(), INDICES_PER_HEX * n);
        }
    }

    #[test]
    fn degenerate_sizes_still_emit_full_block() {
        let mut b = HexMeshBuilder::new();
        b.append_hex(Vec3::ZERO, 0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(b.vertex_count(), 24);
        assert_eq!(b.index_count(), 72);
    }

    #[test]
    fn indices_stay_inside_own_block() {
        let b = built(4);
        let buf = b.finalize();
        for (slot, block) in buf.indices.chunks(INDICES_PER_HEX).enumerate() {
            let lo = 24 * slot as u32;
            for &i in block {
                assert!((lo..lo + 24).contains(&i), "index {i} escapes slot {slot}");
            }
        }
    }

    #[test]
    fn every_vertex_is_referenced() {
        let buf = built(1).finalize();
        for v in 0..24 {
            assert!(buf.indices.contains(&v), "vertex {v} unused");
        }
    }

    // ── topology ────────────────────────────────────────────────────

    #[test]
    fn first_edge_stitch_order() {
        let buf = built(1).finalize();
        assert_eq!(
            &buf.indices[..24],
            &[
                0, 5, 1, 0, 4, 5, // top
                2, 3, 7, 2, 7, 6, // bottom
                1, 5, 7, 1, 7, 3, // outer
                0, 6, 4, 0, 2, 6, // inner
            ]
        );
    }

    #[test]
    fn last_edge_wraps_to_first() {
        let buf = built(2).finalize();
        // slot 1, edge 5: here = 24 + 20 = 44, next = 24
        let last = &buf.indices[72 + 60..72 + 84];
        assert_eq!(
            last,
            &[
                44, 25, 45, 44, 24, 25, // top
                46, 47, 27, 46, 27, 26, // bottom
                45, 25, 27, 45, 27, 47, // outer
                44, 26, 24, 44, 46, 26, // inner
            ]
        );
    }

    // ── geometry ────────────────────────────────────────────────────

    #[test]
    fn vertex_layout_is_inner_outer_top_bottom() {
        let center = Vec3::new(10.0, 0.0, -4.0);
        let mut b = HexMeshBuilder::new();
        b.append_hex(center, 0, 2.0, 1.0, 3.0).unwrap();
        let v = b.finalize().vertices;
        for edge in 0..6 {
            let [inner_top, outer_top, inner_bottom, outer_bottom] =
                [v[4 * edge], v[4 * edge + 1], v[4 * edge + 2], v[4 * edge + 3]];
            let flat = |p: Vec3| Vec3::new(p.x - center.x, 0.0, p.z - center.z).length();
            assert!((flat(inner_top) - 1.0).abs() < 1e-5);
            assert!((flat(outer_top) - 2.0).abs() < 1e-5);
            assert!((flat(inner_bottom) - 1.0).abs() < 1e-5);
            assert!((flat(outer_bottom) - 2.0).abs() < 1e-5);
            assert_eq!(inner_top.y, 1.5);
            assert_eq!(outer_bottom.y, 0.0);
        }
    }

    #[test]
    fn first_corner_is_at_minus_30_degrees() {
        let mut b = HexMeshBuilder::new();
        b.append_hex(Vec3::ZERO, 0, 1.0, 1.0, 0.0).unwrap();
        let p = b.finalize().vertices[1];
        assert!((p.x - 0.866_025_4).abs() < 1e-6);
        assert!((p.z + 0.5).abs() < 1e-6);
    }

    #[test]
    fn center_offset_bottom_doubles_center_y() {
        let mut b = HexMeshBuilder::new();
        b.append_hex(Vec3::new(0.0, 2.0, 0.0), 0, 1.0, 0.5, 1.0).unwrap();
        let v = b.finalize().vertices;
        assert_eq!(v[0].y, 2.5);
        assert_eq!(v[2].y, 4.0);
    }

    #[test]
    fn symmetric_bottom_mirrors_top() {
        let mut b = HexMeshBuilder::new();
        b.set_extrusion(Extrusion::Symmetric);
        b.append_hex(Vec3::new(0.0, 2.0, 0.0), 0, 1.0, 0.5, 1.0).unwrap();
        let v = b.finalize().vertices;
        assert_eq!(v[0].y, 2.5);
        assert_eq!(v[2].y, 1.5);
    }

    // ── lifecycle and misuse ────────────────────────────────────────

    #[test]
    fn clear_resets_everything() {
        let mut b = built(3);
        b.clear();
        assert_eq!(b.vertex_count(), 0);
        assert_eq!(b.index_count(), 0);
        assert_eq!(b.hex_count(), 0);
        assert!(b.append_hex(Vec3::ZERO, 0, 1.0, 0.5, 1.0).is_ok());
    }

    #[test]
    fn finalize_does_not_clear() {
        let b = built(2);
        let first = b.finalize();
        assert_eq!(first, b.finalize());
        assert_eq!(b.vertex_count(), 48);
    }

    #[test]
    fn skipped_slot_is_rejected() {
        let mut b = built(1);
        assert_eq!(
            b.append_hex(Vec3::ZERO, 2, 1.0, 0.5, 1.0),
            Err(HexMeshError::SlotOutOfOrder {
                expected: 1,
                got: 2
            })
        );
        assert_eq!(b.vertex_count(), 24);
    }

    #[test]
    fn reuse_without_clear_is_rejected() {
        let mut b = built(3);
        assert!(matches!(
            b.append_hex(Vec3::ZERO, 0, 1.0, 0.5, 1.0),
            Err(HexMeshError::SlotOutOfOrder { expected: 3, got: 0 })
        ));
    }

    #[test]
    fn invalid_sizes_append_nothing() {
        let mut b = HexMeshBuilder::new();
        assert!(b.append_hex(Vec3::ZERO, 0, 0.5, 1.0, 1.0).is_err());
        assert!(b.append_hex(Vec3::ZERO, 0, -1.0, 0.0, 1.0).is_err());
        assert!(b.append_hex(Vec3::NAN, 0, 1.0, 0.5, 1.0).is_err());
        assert_eq!(b.vertex_count(), 0);
        assert_eq!(b.hex_count(), 0);
    }

    #[test]
    fn reserve_reports_impossible_sizes() {
        let mut b = HexMeshBuilder::new();
        assert_eq!(
            b.reserve(usize::MAX),
            Err(HexMeshError::AllocationFailed { hexes: usize::MAX })
        );
        assert!(b.reserve(7).is_ok());
        assert_eq!(b.vertex_count(), 0);
    }

    #[test]
    fn max_hexes_fills_the_index_range() {
        assert_eq!(MAX_HEXES, 178_956_970);
        assert!(MAX_HEXES * u64::from(VERTICES_PER_HEX) <= u64::from(u32::MAX) + 1);
    }

    #[test]
    fn overflowing_slot_is_rejected() {
        let mut b = HexMeshBuilder {
            next_slot: u32::MAX / VERTICES_PER_HEX + 1,
            ..default()
        };
        let slot = b.next_slot;
        assert_eq!(
            b.append_hex(Vec3::ZERO, slot, 1.0, 0.5, 1.0),
            Err(HexMeshError::TooManyHexes { slot })
        );
    }
}
