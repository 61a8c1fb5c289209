use bevy::prelude::*;

use crate::{
    EditorCamera,
    palette::{ActivePalette, PaletteCursor},
    scene::{CanvasSettings, EditorScene},
    selection::DragState,
    viewport_util::{cursor_world_position, node_under_point},
};

pub struct EntityOpsPlugin;

impl Plugin for EntityOpsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (spawn_at_cursor, handle_delete_keys));
    }
}

// ---------------------------------------------------------------------------
// Spawn from palette
// ---------------------------------------------------------------------------

/// Right click drops the palette cursor's item at the cursor. The node under
/// the cursor is offered as the parent; the model falls back from there.
/// Holding the button keeps dragging the new node.
fn spawn_at_cursor(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform), With<EditorCamera>>,
    canvas: Res<CanvasSettings>,
    palette: Res<ActivePalette>,
    cursor: Res<PaletteCursor>,
    mut scene: ResMut<EditorScene>,
    mut drag: ResMut<DragState>,
) {
    if !mouse.just_pressed(MouseButton::Right) {
        return;
    }
    let Some(point) = cursor_world_position(&windows, &cameras) else {
        return;
    };
    if !canvas.bounds.contains(point) {
        return;
    }

    let hint = node_under_point(&scene, point);
    match scene.try_spawn_from_palette(&**palette, cursor.kind, cursor.index, point, hint) {
        Ok(id) => {
            let Some(node) = scene.node(id) else {
                return;
            };
            info!("Spawned '{}'", node.name());
            match node.position() {
                Some(position) => drag.grab(MouseButton::Right, position, point),
                None => drag.release(),
            }
        }
        Err(err) => warn!("Cannot spawn here: {err}"),
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

fn handle_delete_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut scene: ResMut<EditorScene>,
    mut drag: ResMut<DragState>,
) {
    if !(keyboard.just_pressed(KeyCode::Delete) || keyboard.just_pressed(KeyCode::Backspace)) {
        return;
    }
    let label = scene.selected_label().map(str::to_owned);
    let removed = scene.delete_selected();
    if removed > 0 {
        drag.release();
        info!(
            "Deleted '{}' ({removed} node(s))",
            label.unwrap_or_default()
        );
    }
}
