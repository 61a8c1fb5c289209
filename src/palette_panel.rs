use std::fmt::Write;

use bevy::prelude::*;
use terrarium_palette::PaletteCatalog;
use terrarium_scene::ItemKind;

use crate::palette::{ActivePalette, PaletteCursor};

/// Text node that lists every palette item.
#[derive(Component)]
pub struct PalettePanelText;

pub struct PalettePanelPlugin;

impl Plugin for PalettePanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, rebuild_palette_panel);
    }
}

fn rebuild_palette_panel(
    palette: Res<ActivePalette>,
    cursor: Res<PaletteCursor>,
    mut text_query: Query<&mut Text, With<PalettePanelText>>,
) {
    if !palette.is_changed() && !cursor.is_changed() {
        return;
    }
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };
    text.0 = palette_lines(&palette, &cursor);
}

fn heading(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Entity => "Entities",
        ItemKind::Environment => "Environments",
    }
}

/// Both item lists with their digit keys. The item a right click would
/// spawn is marked with `>`.
pub fn palette_lines(palette: &PaletteCatalog, cursor: &PaletteCursor) -> String {
    let mut out = String::new();
    for kind in [ItemKind::Entity, ItemKind::Environment] {
        let _ = writeln!(out, "{}", heading(kind));
        let entries = palette.items(kind);
        if entries.is_empty() {
            out.push_str("  (none)\n");
        }
        for (index, entry) in entries.iter().enumerate() {
            let marker = if cursor.kind == kind && cursor.index == index {
                '>'
            } else {
                ' '
            };
            let detail = if entry.def.positioned {
                format!("r {}", entry.def.radius)
            } else {
                "ambient".to_string()
            };
            let _ = writeln!(out, "{marker} {} {}  {detail}", index + 1, entry.name());
        }
    }
    out
}
