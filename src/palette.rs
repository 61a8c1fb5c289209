use std::path::{Path, PathBuf};

use anyhow::Context;
use bevy::prelude::*;
use terrarium_palette::PaletteCatalog;
use terrarium_scene::ItemKind;

pub struct PalettePlugin;

impl Plugin for PalettePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PaletteSource>()
            .init_resource::<ActivePalette>()
            .init_resource::<PaletteCursor>()
            .add_systems(Startup, load_palette_on_startup)
            .add_systems(Update, handle_palette_keys);
    }
}

/// Where the palette file is read from.
#[derive(Resource)]
pub struct PaletteSource {
    pub path: PathBuf,
}

impl Default for PaletteSource {
    fn default() -> Self {
        let path = std::env::var("TERRARIUM_PALETTE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("assets/palette.json"));
        Self { path }
    }
}

/// The palette items are spawned from.
#[derive(Resource, Default, Deref)]
pub struct ActivePalette(pub PaletteCatalog);

/// Which palette item a right click spawns.
#[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteCursor {
    pub kind: ItemKind,
    pub index: usize,
}

impl PaletteCursor {
    /// Pick `index` if the palette has an item there for the current kind.
    pub fn select_index(&mut self, index: usize, palette: &PaletteCatalog) {
        if index < palette.len(self.kind) {
            self.index = index;
        }
    }

    pub fn toggle_kind(&mut self, palette: &PaletteCatalog) {
        self.kind = self.kind.toggled();
        self.clamp_to(palette);
    }

    /// Keep the index valid after the palette or kind changed.
    pub fn clamp_to(&mut self, palette: &PaletteCatalog) {
        let len = palette.len(self.kind);
        self.index = self.index.min(len.saturating_sub(1));
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

pub fn load_palette(path: &Path) -> anyhow::Result<PaletteCatalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read palette file '{}'", path.display()))?;
    PaletteCatalog::from_json(&json)
        .with_context(|| format!("failed to parse palette file '{}'", path.display()))
}

fn apply_palette(world: &mut World) {
    let path = world.resource::<PaletteSource>().path.clone();
    match load_palette(&path) {
        Ok(catalog) => {
            info!("Palette loaded from {}", path.display());
            let mut cursor = *world.resource::<PaletteCursor>();
            cursor.clamp_to(&catalog);
            world.insert_resource(cursor);
            world.insert_resource(ActivePalette(catalog));
        }
        Err(err) => warn!("{err:#}; keeping the current palette"),
    }
}

fn load_palette_on_startup(world: &mut World) {
    apply_palette(world);
}

// ---------------------------------------------------------------------------
// Keyboard shortcuts
// ---------------------------------------------------------------------------

const DIGIT_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

fn handle_palette_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    palette: Res<ActivePalette>,
    mut cursor: ResMut<PaletteCursor>,
    mut commands: Commands,
) {
    let ctrl = keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]);

    if ctrl && keyboard.just_pressed(KeyCode::KeyR) {
        commands.queue(|world: &mut World| apply_palette(world));
        return;
    }

    if keyboard.just_pressed(KeyCode::Tab) {
        cursor.toggle_kind(&palette);
    }
    if let Some(index) = DIGIT_KEYS.iter().position(|&key| keyboard.just_pressed(key)) {
        cursor.select_index(index, &palette);
    }
}
