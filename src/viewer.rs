//! Host side of the generator.
//!
//! Owns the regeneration policy (rebuild whenever [`HexMeshConfig`] changes),
//! the displayed mesh entity, debug gizmos, and the probe lookup.

mod entities;
mod systems;

use bevy::prelude::*;
use hex_prism::{Extrusion, HexMeshConfig};

/// Displays the generated grid and keeps it in sync with [`HexMeshConfig`].
pub struct ViewerPlugin(pub HexMeshConfig);

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<HexMeshConfig>()
            .register_type::<Extrusion>()
            .register_type::<entities::HexGridView>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(Color::srgb(0.01, 0.01, 0.02)))
            .init_resource::<entities::GridState>()
            .add_systems(Startup, systems::setup_scene)
            .add_systems(
                Update,
                (systems::clamp_sizes, systems::rebuild_on_change)
                    .chain()
                    .run_if(resource_changed::<HexMeshConfig>),
            )
            .add_systems(Update, (systems::draw_gizmos, systems::probe_hex));
    }
}
