use bevy::color::Color;
use terrarium_scene::{ItemKind, PaletteItem, PaletteRegistry, Payload};
use thiserror::Error;

use crate::{
    format::{ItemDef, PaletteFile},
    payloads::{Critter, Habitat},
};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid palette JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{kind} item {index} is invalid: {reason}")]
    InvalidItem {
        kind: ItemKind,
        index: usize,
        reason: &'static str,
    },
}

/// A validated palette item together with its payload factory.
pub struct CatalogEntry {
    pub def: ItemDef,
    item: PaletteItem,
}

impl CatalogEntry {
    fn new(kind: ItemKind, def: ItemDef) -> Self {
        let radius = def.radius;
        let positioned = def.positioned;
        let item = match kind {
            ItemKind::Entity => PaletteItem::new(def.name.clone(), move |position| {
                Box::new(Critter { position, radius }) as Box<dyn Payload>
            }),
            ItemKind::Environment => PaletteItem::new(def.name.clone(), move |position| {
                Box::new(Habitat {
                    position: positioned.then_some(position),
                    radius,
                }) as Box<dyn Payload>
            }),
        };
        Self { def, item }
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn color(&self) -> Color {
        let [r, g, b] = self.def.color;
        Color::srgb(r, g, b)
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Palette registry built from a [`PaletteFile`].
pub struct PaletteCatalog {
    entities: Vec<CatalogEntry>,
    environments: Vec<CatalogEntry>,
}

impl PaletteCatalog {
    pub fn from_file(file: PaletteFile) -> Result<Self, CatalogError> {
        Ok(Self {
            entities: build_entries(ItemKind::Entity, file.entities)?,
            environments: build_entries(ItemKind::Environment, file.environments)?,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: PaletteFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// The palette used when no palette file is available.
    pub fn builtin() -> Self {
        let file = PaletteFile {
            entities: vec![
                ItemDef::new("Beetle", 10.0, [0.55, 0.35, 0.2]),
                ItemDef::new("Snail", 8.0, [0.8, 0.7, 0.45]),
                ItemDef::new("Frog", 16.0, [0.35, 0.75, 0.3]),
            ],
            environments: vec![
                ItemDef::new("Pond", 70.0, [0.2, 0.45, 0.85]),
                ItemDef::new("Meadow", 110.0, [0.45, 0.7, 0.3]),
                ItemDef::new("Fog", 0.0, [0.7, 0.7, 0.75]).ambient(),
            ],
        };
        let entities = file
            .entities
            .into_iter()
            .map(|def| CatalogEntry::new(ItemKind::Entity, def))
            .collect();
        let environments = file
            .environments
            .into_iter()
            .map(|def| CatalogEntry::new(ItemKind::Environment, def))
            .collect();
        Self {
            entities,
            environments,
        }
    }

    pub fn items(&self, kind: ItemKind) -> &[CatalogEntry] {
        match kind {
            ItemKind::Entity => &self.entities,
            ItemKind::Environment => &self.environments,
        }
    }

    pub fn len(&self, kind: ItemKind) -> usize {
        self.items(kind).len()
    }

    pub fn entry(&self, kind: ItemKind, index: usize) -> Option<&CatalogEntry> {
        self.items(kind).get(index)
    }

    /// The entry a node was spawned from, looked up by its base name.
    pub fn entry_named(&self, kind: ItemKind, base_name: &str) -> Option<&CatalogEntry> {
        self.items(kind).iter().find(|entry| entry.name() == base_name)
    }

    pub fn color_of(&self, kind: ItemKind, base_name: &str) -> Option<Color> {
        self.entry_named(kind, base_name).map(CatalogEntry::color)
    }
}

impl Default for PaletteCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PaletteRegistry for PaletteCatalog {
    fn get_item(&self, kind: ItemKind, index: usize) -> Option<&PaletteItem> {
        self.entry(kind, index).map(|entry| &entry.item)
    }
}

fn build_entries(kind: ItemKind, defs: Vec<ItemDef>) -> Result<Vec<CatalogEntry>, CatalogError> {
    defs.into_iter()
        .enumerate()
        .map(|(index, def)| {
            validate(&def).map_err(|reason| CatalogError::InvalidItem {
                kind,
                index,
                reason,
            })?;
            Ok(CatalogEntry::new(kind, def))
        })
        .collect()
}

fn validate(def: &ItemDef) -> Result<(), &'static str> {
    if def.name.trim().is_empty() {
        return Err("name is empty");
    }
    if !def.radius.is_finite() || def.radius < 0.0 {
        return Err("radius must be a finite, non-negative number");
    }
    if def.color.iter().any(|c| !c.is_finite()) {
        return Err("color must be finite");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use bevy::math::{Rect, Vec2};
    use terrarium_scene::SceneModel;

    use super::*;

    const SAMPLE: &str = r#"{
        "entities": [
            { "name": "Ant", "radius": 2.0, "color": [0.1, 0.1, 0.1] }
        ],
        "environments": [
            { "name": "Sandbox", "radius": 40.0 },
            { "name": "Wind", "positioned": false }
        ]
    }"#;

    #[test]
    fn parses_items_and_defaults() {
        let catalog = PaletteCatalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(ItemKind::Entity), 1);
        assert_eq!(catalog.len(ItemKind::Environment), 2);

        let sandbox = catalog.entry(ItemKind::Environment, 0).unwrap();
        assert_eq!(sandbox.def.color, [0.8, 0.8, 0.8]);
        assert!(sandbox.def.positioned);

        let wind = catalog.entry(ItemKind::Environment, 1).unwrap();
        assert_eq!(wind.def.radius, 0.0);
        assert!(!wind.def.positioned);
        assert!(catalog.get_item(ItemKind::Entity, 1).is_none());
    }

    #[test]
    fn rejects_bad_items() {
        let err = PaletteCatalog::from_json(r#"{ "entities": [{ "name": " ", "radius": 1.0 }] }"#)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            CatalogError::InvalidItem {
                kind: ItemKind::Entity,
                index: 0,
                ..
            }
        ));

        let err = PaletteCatalog::from_json(
            r#"{ "environments": [{ "name": "Pit", "radius": -3.0 }] }"#,
        )
        .err()
        .unwrap();
        assert!(matches!(err, CatalogError::InvalidItem { index: 0, .. }));

        assert!(matches!(
            PaletteCatalog::from_json("not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn colors_are_read_as_srgb() {
        let catalog = PaletteCatalog::from_json(SAMPLE).unwrap();
        let ant = catalog.entry_named(ItemKind::Entity, "Ant").unwrap();
        let srgba = ant.color().to_srgba();
        assert_eq!([srgba.red, srgba.green, srgba.blue], [0.1, 0.1, 0.1]);
        assert_eq!(ant.color(), Color::srgb(0.1, 0.1, 0.1));
        assert!(catalog.entry_named(ItemKind::Environment, "Ant").is_none());
    }

    #[test]
    fn factories_build_expected_payloads() {
        let catalog = PaletteCatalog::from_json(SAMPLE).unwrap();
        let at = Vec2::new(3.0, 4.0);

        let ant = catalog.get_item(ItemKind::Entity, 0).unwrap().build(at);
        assert_eq!(ant.position(), Some(at));
        assert_eq!(ant.radius(), 2.0);

        let wind = catalog.get_item(ItemKind::Environment, 1).unwrap().build(at);
        assert_eq!(wind.position(), None);
    }

    #[test]
    fn ambient_habitat_cannot_be_picked_or_moved() {
        let catalog = PaletteCatalog::from_json(SAMPLE).unwrap();
        let mut model = SceneModel::new();
        let wind = model
            .spawn_from_palette(&catalog, ItemKind::Environment, 1, Vec2::ZERO, None)
            .unwrap();
        assert_eq!(model.selected(), Some(wind));
        assert_eq!(
            model.move_selected_within(Rect::new(0.0, 0.0, 10.0, 10.0), Vec2::ONE),
            None
        );
        assert_eq!(model.select_at_position(Vec2::ZERO), None);
    }

    #[test]
    fn builtin_palette_spawns_into_scene() {
        let catalog = PaletteCatalog::builtin();
        let mut model = SceneModel::new();
        let pond = model
            .spawn_from_palette(&catalog, ItemKind::Environment, 0, Vec2::ZERO, None)
            .unwrap();
        let beetle = model
            .spawn_from_palette(&catalog, ItemKind::Entity, 0, Vec2::ONE, Some(pond))
            .unwrap();
        let node = model.node(beetle).unwrap();
        assert_eq!(node.name(), "Beetle");
        assert_eq!(node.radius(), 10.0);
        assert!(
            catalog
                .color_of(ItemKind::Entity, node.base_name())
                .is_some()
        );
    }
}
