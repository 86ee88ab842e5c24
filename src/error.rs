//! Error types for configuration validation and mesh generation.

use thiserror::Error;

/// Everything that can go wrong while building a hex mesh.
///
/// None of these are fatal: the caller fixes its parameters and calls
/// [`crate::rebuild`] again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexMeshError {
    /// The grid radius was below zero.
    #[error("grid radius must be >= 0, got {0}")]
    NegativeRadius(i32),

    /// A size, height or center component was NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite {
        /// Offending parameter.
        field: &'static str,
    },

    /// A hex radius was below zero.
    #[error("{field} must be >= 0, got {value}")]
    NegativeSize {
        /// Offending parameter.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// The bevel's inner radius was larger than the outer radius.
    #[error("inner size {inner} exceeds outer size {outer}")]
    InnerExceedsOuter {
        /// Requested inner radius.
        inner: f32,
        /// Requested outer radius.
        outer: f32,
    },

    /// A hex was appended with a slot other than the next sequential one.
    #[error("expected slot {expected}, got {got} (call clear() before starting a new pass)")]
    SlotOutOfOrder {
        /// Number of hexes appended since the last clear.
        expected: u32,
        /// Slot the caller passed.
        got: u32,
    },

    /// The region holds more hexes than `u32` indices can address.
    #[error("grid radius {radius} needs more than {max_hexes} hexes")]
    RadiusTooLarge {
        /// Requested radius.
        radius: i32,
        /// Largest hex count a single buffer can index.
        max_hexes: u64,
    },

    /// The buffers for a pass could not be allocated.
    #[error("could not allocate geometry for {hexes} hexes")]
    AllocationFailed {
        /// Hex count the allocation was sized for.
        hexes: usize,
    },

    /// The slot's vertex block would not fit in `u32` indices.
    #[error("slot {slot} overflows the index buffer")]
    TooManyHexes {
        /// Slot the caller passed.
        slot: u32,
    },
}

impl HexMeshError {
    /// Creates a non-finite value error.
    pub fn non_finite(field: &'static str) -> Self {
        Self::NonFinite { field }
    }

    /// Creates a negative size error.
    pub fn negative_size(field: &'static str, value: f32) -> Self {
        Self::NegativeSize { field, value }
    }
}

/// Checks one hex's sizing parameters.
///
/// Shared by [`crate::HexMeshConfig::validate`] and
/// [`crate::HexMeshBuilder::append_hex`] so both report the same errors.
pub(crate) fn check_sizes(
    outer_size: f32,
    inner_size: f32,
    height: f32,
) -> Result<(), HexMeshError> {
    for (field, value) in [
        ("outer_size", outer_size),
        ("inner_size", inner_size),
        ("height", height),
    ] {
        if !value.is_finite() {
            return Err(HexMeshError::non_finite(field));
        }
    }
    for (field, value) in [("outer_size", outer_size), ("inner_size", inner_size)] {
        if value < 0.0 {
            return Err(HexMeshError::negative_size(field, value));
        }
    }
    if inner_size > outer_size {
        return Err(HexMeshError::InnerExceedsOuter {
            inner: inner_size,
            outer: outer_size,
        });
    }
    Ok(())
}
