use std::fmt::Write;

use bevy::prelude::*;
use terrarium_palette::PaletteCatalog;
use terrarium_scene::SceneModel;

use crate::{palette::ActivePalette, scene::EditorScene};

/// Text node showing the attributes of the selected node.
#[derive(Component)]
pub struct InspectorText;

pub struct InspectorPlugin;

impl Plugin for InspectorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, rebuild_inspector);
    }
}

fn rebuild_inspector(
    scene: Res<EditorScene>,
    palette: Res<ActivePalette>,
    mut text_query: Query<&mut Text, With<InspectorText>>,
) {
    if !scene.is_changed() && !palette.is_changed() {
        return;
    }
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };
    let new_text = inspector_lines(&scene, &palette);
    if text.0 != new_text {
        text.0 = new_text;
    }
}

/// `key: value` rows for the selected node and the palette item it came from.
///
/// Item rows are omitted when the active palette no longer has an item with
/// the node's base name.
pub fn inspector_lines(model: &SceneModel, palette: &PaletteCatalog) -> String {
    let Some(node) = model.selected_node() else {
        return "Nothing selected".to_string();
    };
    let mut out = String::new();
    let kind = node.kind().item_kind();
    let _ = writeln!(out, "label: {}", node.name());
    let _ = writeln!(out, "id: {}", node.id());
    let _ = writeln!(
        out,
        "kind: {}",
        kind.map_or("Root", |kind| kind.label())
    );
    let _ = writeln!(out, "base: {}", node.base_name());
    match node.position() {
        Some(p) => {
            let _ = writeln!(out, "position: ({:.1}, {:.1})", p.x, p.y);
        }
        None => out.push_str("position: -\n"),
    }
    let _ = writeln!(out, "radius: {:.1}", node.radius());
    let _ = writeln!(out, "children: {}", node.children().len());

    if let Some(entry) = kind.and_then(|kind| palette.entry_named(kind, node.base_name())) {
        let [r, g, b] = entry.def.color;
        let _ = writeln!(out, "color: ({r:.2}, {g:.2}, {b:.2})");
        let _ = writeln!(out, "positioned: {}", entry.def.positioned);
    }
    out
}

#[cfg(test)]
mod tests {
    use bevy::math::Vec2;
    use terrarium_scene::ItemKind;

    use super::*;

    #[test]
    fn shows_node_and_item_attributes() {
        let palette = PaletteCatalog::builtin();
        let mut model = SceneModel::new();
        assert_eq!(inspector_lines(&model, &palette), "Nothing selected");

        let pond = model
            .spawn_from_palette(&palette, ItemKind::Environment, 0, Vec2::new(1.0, -2.5), None)
            .unwrap();
        model
            .spawn_from_palette(&palette, ItemKind::Entity, 0, Vec2::ZERO, Some(pond))
            .unwrap();
        model.select_node(Some(pond));

        assert_eq!(
            inspector_lines(&model, &palette),
            "label: Pond\n\
             id: 1\n\
             kind: Environment\n\
             base: Pond\n\
             position: (1.0, -2.5)\n\
             radius: 70.0\n\
             children: 1\n\
             color: (0.20, 0.45, 0.85)\n\
             positioned: true\n"
        );
    }

    #[test]
    fn ambient_item_has_no_position() {
        let palette = PaletteCatalog::builtin();
        let mut model = SceneModel::new();
        model
            .spawn_from_palette(&palette, ItemKind::Environment, 2, Vec2::ONE, None)
            .unwrap();

        let lines = inspector_lines(&model, &palette);
        assert!(lines.contains("label: Fog\n"));
        assert!(lines.contains("position: -\n"));
        assert!(lines.contains("positioned: false\n"));
    }

    #[test]
    fn item_rows_drop_when_palette_lacks_the_item() {
        let palette = PaletteCatalog::builtin();
        let mut model = SceneModel::new();
        model
            .spawn_from_palette(&palette, ItemKind::Environment, 0, Vec2::ZERO, None)
            .unwrap();

        let other = PaletteCatalog::from_json(r#"{ "environments": [{ "name": "Bog" }] }"#)
            .unwrap();
        let lines = inspector_lines(&model, &other);
        assert!(lines.ends_with("children: 0\n"));
        assert!(!lines.contains("color:"));
    }
}
