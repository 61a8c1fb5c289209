use bevy::prelude::*;
use terrarium_scene::Node;

use crate::{
    palette::ActivePalette,
    scene::{CanvasSettings, EditorScene},
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const BOUNDS_COLOR: Color = Color::srgb(0.35, 0.35, 0.35);
const LINK_COLOR: Color = Color::srgba(0.6, 0.6, 0.6, 0.4);
const SELECTED_COLOR: Color = Color::srgb(1.0, 0.85, 0.2);
const FALLBACK_COLOR: Color = Color::srgb(0.8, 0.8, 0.8);

/// Nodes with a zero radius are still drawn this big so they can be seen.
const MIN_DRAW_RADIUS: f32 = 3.0;
const SELECTION_RING_GAP: f32 = 4.0;

pub struct SceneGizmosPlugin;

impl Plugin for SceneGizmosPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (draw_canvas_bounds, draw_scene_nodes));
    }
}

fn draw_canvas_bounds(mut gizmos: Gizmos, canvas: Res<CanvasSettings>) {
    gizmos.rect_2d(canvas.bounds.center(), canvas.bounds.size(), BOUNDS_COLOR);
}

/// Draw nodes in creation order with a link to their parent.
fn draw_scene_nodes(
    mut gizmos: Gizmos,
    scene: Res<EditorScene>,
    palette: Res<ActivePalette>,
) {
    let selected = scene.selected();
    for node in scene.iter_drawable_nodes() {
        let Some(position) = node.position() else {
            continue;
        };

        if let Some(parent_position) = node
            .parent()
            .and_then(|parent| scene.node(parent))
            .and_then(Node::position)
        {
            gizmos.line_2d(position, parent_position, LINK_COLOR);
        }

        let color = node
            .kind()
            .item_kind()
            .and_then(|kind| palette.color_of(kind, node.base_name()))
            .unwrap_or(FALLBACK_COLOR);
        let radius = node.radius().max(MIN_DRAW_RADIUS);
        gizmos.circle_2d(position, radius, color);

        if selected == Some(node.id()) {
            gizmos.circle_2d(position, radius + SELECTION_RING_GAP, SELECTED_COLOR);
        }
    }
}
