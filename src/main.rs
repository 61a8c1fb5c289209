use bevy::prelude::*;
use terrarium::EditorPlugin;

fn main() -> AppExit {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Terrarium".into(),
                    ..default()
                }),
                ..default()
            }),
            EditorPlugin,
        ))
        .run()
}
