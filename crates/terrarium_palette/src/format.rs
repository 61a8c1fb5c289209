use serde::{Deserialize, Serialize};

/// Top-level palette file structure.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PaletteFile {
    /// Items that must be placed inside an environment.
    #[serde(default)]
    pub entities: Vec<ItemDef>,
    /// Items that hang from the scene root or from an entity.
    #[serde(default)]
    pub environments: Vec<ItemDef>,
}

// ---------------------------------------------------------------------------
// Per-item definition
// ---------------------------------------------------------------------------

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ItemDef {
    /// Template name. Spawned nodes are labelled from it.
    pub name: String,
    #[serde(default)]
    pub radius: f32,
    /// Gamma-encoded sRGB triple used by the canvas.
    #[serde(default = "default_color")]
    pub color: [f32; 3],
    /// `false` builds a payload with no position: never hit-tested, never dragged.
    #[serde(default = "default_positioned", skip_serializing_if = "is_positioned")]
    pub positioned: bool,
}

impl ItemDef {
    pub fn new(name: impl Into<String>, radius: f32, color: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            radius,
            color,
            positioned: true,
        }
    }

    pub fn ambient(mut self) -> Self {
        self.positioned = false;
        self
    }
}

fn default_color() -> [f32; 3] {
    [0.8, 0.8, 0.8]
}

fn default_positioned() -> bool {
    true
}

fn is_positioned(positioned: &bool) -> bool {
    *positioned
}
