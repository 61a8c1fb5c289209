pub mod entity_ops;
pub mod gizmos;
pub mod hierarchy;
pub mod inspector;
pub mod layout;
pub mod palette;
pub mod palette_panel;
pub mod scene;
pub mod selection;
pub mod status_bar;
mod viewport_util;

use bevy::prelude::*;

pub use scene::{CanvasSettings, EditorScene};

/// Marker for editor UI entities.
#[derive(Component, Default)]
pub struct EditorEntity;

/// Marker for the camera looking at the canvas.
#[derive(Component, Default)]
#[require(EditorEntity)]
pub struct EditorCamera;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            scene::ScenePlugin,
            palette::PalettePlugin,
            selection::SelectionPlugin,
            entity_ops::EntityOpsPlugin,
            gizmos::SceneGizmosPlugin,
            hierarchy::HierarchyPlugin,
            palette_panel::PalettePanelPlugin,
            inspector::InspectorPlugin,
            status_bar::StatusBarPlugin,
        ))
        .add_systems(Startup, spawn_layout);
    }
}

fn spawn_layout(mut commands: Commands) {
    commands.spawn((Camera2d, EditorCamera));
    commands.spawn(layout::editor_layout());
}
