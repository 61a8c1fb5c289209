use bevy::prelude::*;
use terrarium_scene::{NodeId, SceneModel};

use crate::EditorCamera;

/// World-space position under the window cursor, if the cursor is over the window.
pub(crate) fn cursor_world_position(
    windows: &Query<&Window>,
    cameras: &Query<(&Camera, &GlobalTransform), With<EditorCamera>>,
) -> Option<Vec2> {
    let window = windows.single().ok()?;
    let cursor = window.cursor_position()?;
    let (camera, cam_tf) = cameras.single().ok()?;
    camera.viewport_to_world_2d(cam_tf, cursor).ok()
}

/// The smallest positioned node whose circle contains `point`.
/// Earlier nodes win between equal radii.
pub(crate) fn node_under_point(model: &SceneModel, point: Vec2) -> Option<NodeId> {
    model
        .iter_drawable_nodes()
        .filter(|node| {
            node.position()
                .is_some_and(|position| position.distance(point) <= node.radius())
        })
        .min_by(|a, b| a.radius().total_cmp(&b.radius()))
        .map(|node| node.id())
}
