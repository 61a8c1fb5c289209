use bevy::prelude::*;
use terrarium_palette::PaletteCatalog;
use terrarium_scene::SceneModel;

use crate::{
    palette::{ActivePalette, PaletteCursor},
    scene::EditorScene,
};

/// Left side of the status bar: selection details.
#[derive(Component)]
pub struct StatusBarLeft;

/// Right side of the status bar: the palette cursor.
#[derive(Component)]
pub struct StatusBarRight;

pub struct StatusBarPlugin;

impl Plugin for StatusBarPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (update_status_left, update_status_right));
    }
}

fn update_status_left(
    scene: Res<EditorScene>,
    mut text_query: Query<&mut Text, With<StatusBarLeft>>,
) {
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };
    let new_text = selection_summary(&scene);
    if text.0 != new_text {
        text.0 = new_text;
    }
}

fn update_status_right(
    palette: Res<ActivePalette>,
    cursor: Res<PaletteCursor>,
    mut text_query: Query<&mut Text, With<StatusBarRight>>,
) {
    if !palette.is_changed() && !cursor.is_changed() {
        return;
    }
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };
    text.0 = palette_summary(&palette, &cursor);
}

pub fn selection_summary(model: &SceneModel) -> String {
    let Some(node) = model.selected_node() else {
        return "No selection".to_string();
    };
    let parent = model.parent_label(node.id()).unwrap_or("-");
    let children = model.child_labels(node.id());
    let children = if children.is_empty() {
        "-".to_string()
    } else {
        children.join(", ")
    };
    let pos_str = node
        .position()
        .map(|p| format!("  Pos: ({:.1}, {:.1})", p.x, p.y))
        .unwrap_or_default();
    format!(
        "{}  Parent: {parent}  Children: {children}{pos_str}",
        node.name()
    )
}

pub fn palette_summary(palette: &PaletteCatalog, cursor: &PaletteCursor) -> String {
    let len = palette.len(cursor.kind);
    match palette.entry(cursor.kind, cursor.index) {
        Some(entry) => format!(
            "{} {}/{len}: {}",
            cursor.kind,
            cursor.index + 1,
            entry.name()
        ),
        None => format!("No {} items", cursor.kind),
    }
}
