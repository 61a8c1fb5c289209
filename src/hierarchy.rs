use std::fmt::Write;

use bevy::prelude::*;
use terrarium_scene::{NodeKind, SceneModel};

use crate::scene::EditorScene;

/// Text node that lists the scene tree.
#[derive(Component)]
pub struct HierarchyText;

pub struct HierarchyPlugin;

impl Plugin for HierarchyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, rebuild_hierarchy);
    }
}

fn rebuild_hierarchy(
    scene: Res<EditorScene>,
    mut text_query: Query<&mut Text, With<HierarchyText>>,
) {
    if !scene.is_changed() {
        return;
    }
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };
    let new_text = hierarchy_lines(&scene);
    if text.0 != new_text {
        text.0 = new_text;
    }
}

/// One line per node in tree order, indented by depth. The selection is marked with `>`.
pub fn hierarchy_lines(model: &SceneModel) -> String {
    let selected = model.selected();
    let mut out = String::new();
    for (depth, node) in model.iter_tree() {
        let marker = if selected == Some(node.id()) { '>' } else { ' ' };
        let tag = match node.kind() {
            NodeKind::Root => "",
            NodeKind::Entity => " [ent]",
            NodeKind::Environment => " [env]",
        };
        let _ = writeln!(
            out,
            "{marker} {:indent$}{}{tag}",
            "",
            node.name(),
            indent = depth * 2
        );
    }
    out
}
