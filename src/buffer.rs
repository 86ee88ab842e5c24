//! The shared vertex/index buffer produced by a generation pass.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::Indices;
use bevy::prelude::*;
use bevy::render::render_resource::PrimitiveTopology;

/// Triangle-list geometry: positions plus index triples into them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Triangle indices, three per triangle.
    pub indices: Vec<u32>,
}

impl MeshBuffer {
    /// `true` when the buffer holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Empties both sequences, keeping their allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Iterates the index buffer as triangles.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Uploadable Bevy mesh with positions and `u32` indices.
    pub fn to_mesh(&self) -> Mesh {
        let positions: Vec<[f32; 3]> = self.vertices.iter().map(|v| v.to_array()).collect();
        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::RENDER_WORLD,
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_indices(Indices::U32(self.indices.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> MeshBuffer {
        MeshBuffer {
            vertices: vec![Vec3::ZERO, Vec3::X, Vec3::Z],
            indices: vec![0, 2, 1],
        }
    }

    #[test]
    fn triangles_groups_indices() {
        let buf = single_triangle();
        assert_eq!(buf.triangles().collect::<Vec<_>>(), vec![[0, 2, 1]]);
    }

    #[test]
    fn clear_empties_buffer() {
        let mut buf = single_triangle();
        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn to_mesh_carries_positions_and_indices() {
        let mesh = single_triangle().to_mesh();
        assert_eq!(mesh.count_vertices(), 3);
        match mesh.indices() {
            Some(Indices::U32(indices)) => assert_eq!(indices, &vec![0, 2, 1]),
            other => panic!("unexpected indices: {other:?}"),
        }
    }
}
