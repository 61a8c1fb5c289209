use bevy::prelude::*;

use crate::{
    EditorCamera,
    scene::{CanvasSettings, EditorScene},
    viewport_util::cursor_world_position,
};

pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DragState>().add_systems(
            Update,
            (handle_canvas_click, drag_selected, clear_selection_key).chain(),
        );
    }
}

/// A node grabbed by a mouse button and following the cursor.
///
/// `offset` is the node position minus the cursor at grab time, so the node
/// keeps its distance to the cursor instead of snapping onto it.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub button: MouseButton,
    pub offset: Vec2,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            active: false,
            button: MouseButton::Left,
            offset: Vec2::ZERO,
        }
    }
}

impl DragState {
    pub fn grab(&mut self, button: MouseButton, node_position: Vec2, cursor: Vec2) {
        *self = Self {
            active: true,
            button,
            offset: node_position - cursor,
        };
    }

    pub fn release(&mut self) {
        *self = Self::default();
    }

    /// Where the grabbed node wants to be for the given cursor position.
    pub fn target(&self, cursor: Vec2) -> Vec2 {
        cursor + self.offset
    }
}

// ---------------------------------------------------------------------------
// Click-to-select: the nearest positioned node wins
// ---------------------------------------------------------------------------

fn handle_canvas_click(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform), With<EditorCamera>>,
    canvas: Res<CanvasSettings>,
    mut scene: ResMut<EditorScene>,
    mut drag: ResMut<DragState>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(point) = cursor_world_position(&windows, &cameras) else {
        return;
    };
    if !canvas.bounds.contains(point) {
        return;
    }

    let grabbed = scene
        .select_at_position(point)
        .and_then(|id| scene.node(id))
        .and_then(|node| node.position());
    match grabbed {
        Some(position) => drag.grab(MouseButton::Left, position, point),
        None => drag.release(),
    }
}

fn drag_selected(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform), With<EditorCamera>>,
    canvas: Res<CanvasSettings>,
    mut scene: ResMut<EditorScene>,
    mut drag: ResMut<DragState>,
) {
    if !drag.active {
        return;
    }
    if !mouse.pressed(drag.button) {
        drag.release();
        return;
    }
    let Some(point) = cursor_world_position(&windows, &cameras) else {
        return;
    };
    if scene
        .move_selected_within(canvas.bounds, drag.target(point))
        .is_none()
    {
        drag.release();
    }
}

fn clear_selection_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut scene: ResMut<EditorScene>,
    mut drag: ResMut<DragState>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        scene.select_node(None);
        drag.release();
    }
}

#[cfg(test)]
mod tests {
    use terrarium_palette::PaletteCatalog;
    use terrarium_scene::{ItemKind, SceneModel};

    use super::*;

    #[test]
    fn grabbing_away_from_center_does_not_jump() {
        let palette = PaletteCatalog::builtin();
        let mut model = SceneModel::new();
        let bounds = Rect::new(-400.0, -260.0, 400.0, 260.0);
        let pond = model
            .spawn_from_palette(&palette, ItemKind::Environment, 0, Vec2::ZERO, None)
            .unwrap();

        // A click far from the pond still selects it as the nearest node.
        let click = Vec2::new(300.0, 200.0);
        assert_eq!(model.select_at_position(click), Some(pond));

        let mut drag = DragState::default();
        drag.grab(MouseButton::Left, Vec2::ZERO, click);
        assert_eq!(drag.target(click), Vec2::ZERO);
        assert_eq!(
            model.move_selected_within(bounds, drag.target(click)),
            Some(Vec2::ZERO)
        );

        // Moving the cursor moves the node by the same amount.
        let moved = click + Vec2::new(-20.0, 10.0);
        assert_eq!(
            model.move_selected_within(bounds, drag.target(moved)),
            Some(Vec2::new(-20.0, 10.0))
        );
    }

    #[test]
    fn release_resets_the_grab() {
        let mut drag = DragState::default();
        drag.grab(MouseButton::Right, Vec2::new(5.0, 5.0), Vec2::new(1.0, 2.0));
        assert!(drag.active);
        assert_eq!(drag.button, MouseButton::Right);
        assert_eq!(drag.offset, Vec2::new(4.0, 3.0));

        drag.release();
        assert_eq!(drag, DragState::default());
    }
}
