use bevy::prelude::*;
use terrarium_scene::SceneModel;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        let canvas = CanvasSettings::default();
        app.insert_resource(ClearColor(canvas.background))
            .insert_resource(canvas)
            .init_resource::<EditorScene>();
    }
}

/// The scene being edited. All tree edits go through the wrapped model.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct EditorScene(pub SceneModel);

// ---------------------------------------------------------------------------
// Canvas settings
// ---------------------------------------------------------------------------

#[derive(Resource)]
pub struct CanvasSettings {
    /// World-space area nodes may be placed and dragged in.
    pub bounds: Rect,
    pub background: Color,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            bounds: Rect::new(-400.0, -260.0, 400.0, 260.0),
            background: Color::srgb(0.07, 0.08, 0.07),
        }
    }
}
