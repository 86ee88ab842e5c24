#![warn(missing_docs)]
//! Beveled hex grid viewer.
//!
//! Generates the grid from command-line parameters, displays it with debug
//! gizmos, and regenerates whenever the configuration is edited in the
//! inspector.

mod viewer;

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use hex_prism::HexMeshConfig;

/// Application-wide view state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum ViewState {
    /// Grid displayed, inspector hidden.
    #[default]
    Running,
    /// World inspector open (Tab to toggle).
    Inspecting,
}

#[cfg(feature = "native")]
#[derive(clap::Parser, Debug)]
#[command(about = "Beveled hex grid viewer")]
struct Cli {
    /// Number of hex rings around the origin.
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    radius: i32,
    /// Circumradius of each hex's outer ring.
    #[arg(long, default_value_t = 1.0)]
    outer_size: f32,
    /// Circumradius of the inner bevel ring.
    #[arg(long, default_value_t = 0.8)]
    inner_size: f32,
    /// Prism height.
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    height: f32,
    /// Extrude symmetrically about each hex's center plane.
    #[arg(long)]
    symmetric: bool,
    /// Probe point for hex lookup (press T).
    #[arg(
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true
    )]
    probe: Option<Vec<f32>>,
}

#[cfg(feature = "native")]
impl Cli {
    fn into_config(self) -> HexMeshConfig {
        HexMeshConfig {
            radius: self.radius,
            outer_size: self.outer_size,
            inner_size: self.inner_size,
            height: self.height,
            extrusion: if self.symmetric {
                hex_prism::Extrusion::Symmetric
            } else {
                hex_prism::Extrusion::CenterOffset
            },
            probe: match self.probe.as_deref() {
                Some(&[x, y, z]) => Vec3::new(x, y, z),
                _ => Vec3::ZERO,
            },
        }
    }
}

#[cfg(feature = "native")]
fn initial_config() -> HexMeshConfig {
    <Cli as clap::Parser>::parse().into_config()
}

#[cfg(not(feature = "native"))]
fn initial_config() -> HexMeshConfig {
    HexMeshConfig::default()
}

fn main() -> AppExit {
    let config = initial_config();
    if let Err(err) = config.validate() {
        eprintln!("invalid configuration: {err}");
        return AppExit::error();
    }

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hex Prism".into(),
            ..default()
        }),
        ..default()
    }))
    .register_type::<ViewState>()
    .init_state::<ViewState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(viewer::ViewerPlugin(config))
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(ViewState::Inspecting)));

    app.run()
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<ViewState>>,
    mut next: ResMut<NextState<ViewState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        next.set(match state.get() {
            ViewState::Running => ViewState::Inspecting,
            ViewState::Inspecting => ViewState::Running,
        });
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
