#![warn(missing_docs)]
//! Procedural hex-grid mesh generation.
//!
//! Enumerates a hexagonal region of axial coordinates, places each hex in
//! world space, and emits one beveled, extruded prism per hex into a single
//! shared vertex/index buffer. Deciding when to regenerate is left to the
//! caller: call [`rebuild`] (or [`HexMeshGenerator::rebuild`]) whenever the
//! [`HexMeshConfig`] changes.

pub mod buffer;
pub mod config;
pub mod coord;
pub mod error;
pub mod generator;
pub mod grid;
pub mod mesh_builder;

pub use buffer::MeshBuffer;
pub use config::HexMeshConfig;
pub use coord::AxialCoord;
pub use error::HexMeshError;
pub use generator::{HexCell, HexGridMesh, HexMeshGenerator, rebuild};
pub use mesh_builder::{Extrusion, HexMeshBuilder};
