//! One full generation pass: region → centers → prisms → buffer.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use crate::buffer::MeshBuffer;
use crate::config::HexMeshConfig;
use crate::coord::AxialCoord;
use crate::error::HexMeshError;
use crate::grid;
use crate::mesh_builder::HexMeshBuilder;

/// A generated hex and where its prism was placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexCell {
    /// Grid coordinate.
    pub coord: AxialCoord,
    /// World-space center used for the prism.
    pub center: Vec3,
}

/// Result of a pass: the geometry plus the coordinate ↔ slot mapping.
#[derive(Debug, Clone, Default)]
pub struct HexGridMesh {
    /// Combined geometry of every hex.
    pub buffer: MeshBuffer,
    /// Generated cells; index is the slot.
    pub cells: Vec<HexCell>,
    slots: HashMap<AxialCoord, u32>,
    size: f32,
}

impl HexGridMesh {
    /// Number of hexes.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if the pass produced no hexes.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Slot whose 24-vertex block belongs to `coord`.
    pub fn slot_of(&self, coord: AxialCoord) -> Option<u32> {
        self.slots.get(&coord).copied()
    }

    /// Cell stored at `slot`.
    pub fn cell(&self, slot: u32) -> Option<&HexCell> {
        self.cells.get(slot as usize)
    }

    /// Generated hex under `world`, if any.
    pub fn hex_at(&self, world: Vec3) -> Option<AxialCoord> {
        let coord = grid::to_hex_scaled(world, self.size);
        self.slots.contains_key(&coord).then_some(coord)
    }
}

/// Runs generation passes, reusing one builder's allocations between them.
#[derive(Debug, Default)]
pub struct HexMeshGenerator {
    builder: HexMeshBuilder,
}

impl HexMeshGenerator {
    /// Fresh generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Regenerates the whole grid from `config`.
    ///
    /// Nothing is kept from earlier passes.
    pub fn rebuild(&mut self, config: &HexMeshConfig) -> Result<HexGridMesh, HexMeshError> {
        config.validate()?;

        self.builder.clear();
        self.builder.set_extrusion(config.extrusion);

        let hexes = grid::region_len(config.radius).unwrap_or_default();
        self.builder.reserve(hexes)?;
        let mut cells = Vec::new();
        cells
            .try_reserve(hexes)
            .map_err(|_| HexMeshError::AllocationFailed { hexes })?;
        let mut slots = HashMap::with_capacity(hexes);

        for (slot, coord) in (0u32..).zip(grid::region_iter(config.radius)) {
            let center = grid::to_world(coord, config.outer_size);
            self.builder.append_hex(
                center,
                slot,
                config.outer_size,
                config.inner_size,
                config.height,
            )?;
            cells.push(HexCell { coord, center });
            slots.insert(coord, slot);
        }

        let buffer = self.builder.finalize();
        debug!(
            "rebuilt hex mesh: {} hexes, {} vertices, {} indices",
            cells.len(),
            buffer.vertices.len(),
            buffer.indices.len()
        );

        Ok(HexGridMesh {
            buffer,
            cells,
            slots,
            size: config.outer_size,
        })
    }
}

/// Runs a single pass with a fresh [`HexMeshGenerator`].
///
/// # Examples
/// ```
/// # use hex_prism::{HexMeshConfig, rebuild};
/// let grid = rebuild(&HexMeshConfig { radius: 1, ..Default::default() }).unwrap();
/// assert_eq!(grid.buffer.vertices.len(), 168);
/// assert_eq!(grid.buffer.indices.len(), 504);
/// ```
pub fn rebuild(config: &HexMeshConfig) -> Result<HexGridMesh, HexMeshError> {
    HexMeshGenerator::new().rebuild(config)
}
