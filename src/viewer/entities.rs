//! Components and resources for the grid viewer.

use bevy::prelude::*;
use hex_prism::{HexGridMesh, HexMeshGenerator};

/// Marker on the entity displaying the generated grid mesh.
#[derive(Component, Reflect)]
pub struct HexGridView;

/// Generator plus the last pass that succeeded.
#[derive(Resource, Default)]
pub struct GridState {
    /// Reused across passes.
    pub generator: HexMeshGenerator,
    /// Last successfully generated grid; drives gizmos and probe lookups.
    pub grid: HexGridMesh,
}
