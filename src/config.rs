//! Generation parameters.

use bevy::prelude::*;

use crate::error::{HexMeshError, check_sizes};
use crate::grid::region_len;
use crate::mesh_builder::{Extrusion, MAX_HEXES};

/// Everything a generation pass needs.
#[derive(Resource, Clone, Debug, PartialEq, Reflect)]
pub struct HexMeshConfig {
    /// Number of hex rings around the origin.
    pub radius: i32,
    /// Circumradius of each hex's outer ring; also the grid spacing.
    pub outer_size: f32,
    /// Circumradius of the inner bevel ring (`<= outer_size`).
    pub inner_size: f32,
    /// Prism height.
    pub height: f32,
    /// Placement of the bottom ring.
    pub extrusion: Extrusion,
    /// World point used by hex lookup diagnostics.
    pub probe: Vec3,
}

impl Default for HexMeshConfig {
    fn default() -> Self {
        Self {
            radius: 3,
            outer_size: 1.0,
            inner_size: 0.8,
            height: 0.5,
            extrusion: Extrusion::CenterOffset,
            probe: Vec3::ZERO,
        }
    }
}

impl HexMeshConfig {
    /// Rejects parameters that would produce degenerate or empty geometry.
    pub fn validate(&self) -> Result<(), HexMeshError> {
        if self.radius < 0 {
            return Err(HexMeshError::NegativeRadius(self.radius));
        }
        if !region_len(self.radius).is_some_and(|n| n as u64 <= MAX_HEXES) {
            return Err(HexMeshError::RadiusTooLarge {
                radius: self.radius,
                max_hexes: MAX_HEXES,
            });
        }
        check_sizes(self.outer_size, self.inner_size, self.height)
    }

    /// Copy with `outer_size` raised to at least `inner_size`.
    ///
    /// # Examples
    /// ```
    /// # use hex_prism::HexMeshConfig;
    /// let cfg = HexMeshConfig { outer_size: 0.5, inner_size: 0.9, ..Default::default() };
    /// assert_eq!(cfg.clamped().outer_size, 0.9);
    /// ```
    pub fn clamped(&self) -> Self {
        Self {
            outer_size: self.outer_size.max(self.inner_size),
            ..self.clone()
        }
    }
}
