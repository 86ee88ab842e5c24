//! Viewer systems: scene setup, regeneration, gizmos, probe lookup.

use bevy::math::Isometry3d;
use bevy::prelude::*;
use hex_prism::HexMeshConfig;
use hex_prism::mesh_builder::VERTICES_PER_HEX;

use super::entities::{GridState, HexGridView};

const CENTER_COLOR: Color = Color::srgb(1.0, 0.2, 0.8);
const PROBE_COLOR: Color = Color::srgb(1.0, 0.9, 0.1);
const RIM_COLOR: Color = Color::srgb(0.0, 0.8, 1.0);
const MARKER_RADIUS: f32 = 0.2;

/// Spawns the camera and the (initially mesh-less) grid entity.
pub fn setup_scene(mut commands: Commands, mut materials: ResMut<Assets<StandardMaterial>>) {
    commands.spawn((
        Name::new("Camera"),
        Camera3d::default(),
        Transform::from_xyz(0.0, 14.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.05, 0.12, 0.2),
        unlit: true,
        cull_mode: None,
        ..default()
    });
    commands.spawn((
        HexGridView,
        Name::new("HexGrid"),
        MeshMaterial3d(material),
        Transform::default(),
        Visibility::default(),
    ));
}

/// Keeps `outer_size >= inner_size` while the config is edited.
pub fn clamp_sizes(mut config: ResMut<HexMeshConfig>) {
    if config.outer_size < config.inner_size {
        let clamped = config.clamped();
        *config.bypass_change_detection() = clamped;
    }
}

/// Runs a full pass and swaps the displayed mesh. Invalid configs keep the
/// previous grid on screen.
pub fn rebuild_on_change(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut state: ResMut<GridState>,
    config: Res<HexMeshConfig>,
    view_q: Query<Entity, With<HexGridView>>,
) {
    let Ok(view) = view_q.single() else { return };
    let state = &mut *state;
    match state.generator.rebuild(&config) {
        Ok(grid) => {
            info!(
                "generated {} hexes ({} vertices)",
                grid.len(),
                grid.buffer.vertices.len()
            );
            commands
                .entity(view)
                .insert(Mesh3d(meshes.add(grid.buffer.to_mesh())));
            state.grid = grid;
        }
        Err(err) => warn!("rejected hex config, keeping previous grid: {err}"),
    }
}

/// Draws a sphere at every hex center and at the probe point, plus each
/// hex's top outer rim.
pub fn draw_gizmos(mut gizmos: Gizmos, state: Res<GridState>, config: Res<HexMeshConfig>) {
    for cell in &state.grid.cells {
        gizmos.sphere(
            Isometry3d::from_translation(cell.center),
            MARKER_RADIUS,
            CENTER_COLOR,
        );
    }
    // Outer top vertex of edge k sits at 4k + 1 within a hex's block.
    for block in state
        .grid
        .buffer
        .vertices
        .chunks_exact(VERTICES_PER_HEX as usize)
    {
        gizmos.linestrip((0..=6).map(|k| block[(4 * k + 1) % 24]), RIM_COLOR);
    }
    gizmos.sphere(
        Isometry3d::from_translation(config.probe),
        MARKER_RADIUS,
        PROBE_COLOR,
    );
}

/// Logs the hex under the probe point when `T` is pressed.
pub fn probe_hex(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<HexMeshConfig>,
    state: Res<GridState>,
) {
    if !keys.just_pressed(KeyCode::KeyT) {
        return;
    }
    let grid = &state.grid;
    let hit = grid
        .hex_at(config.probe)
        .and_then(|coord| Some((coord, grid.slot_of(coord)?)));
    match hit {
        Some((coord, slot)) => info!(
            "probe {} -> HexCoord[{},{}] (slot {slot})",
            config.probe, coord.q, coord.r
        ),
        None => info!("probe {} is outside the grid", config.probe),
    }
}
