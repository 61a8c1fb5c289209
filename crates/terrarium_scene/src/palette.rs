use bevy::math::Vec2;

use crate::{node::ItemKind, payload::Payload};

pub type PayloadFactory = Box<dyn Fn(Vec2) -> Box<dyn Payload> + Send + Sync>;

/// A palette entry: template name plus a payload factory.
pub struct PaletteItem {
    pub name: String,
    pub factory: PayloadFactory,
}

impl PaletteItem {
    pub fn new(
        name: impl Into<String>,
        factory: impl Fn(Vec2) -> Box<dyn Payload> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            factory: Box::new(factory),
        }
    }

    /// Build a fresh payload at `position`.
    pub fn build(&self, position: Vec2) -> Box<dyn Payload> {
        (self.factory)(position)
    }
}

/// Source of spawnable items, looked up by kind and index.
pub trait PaletteRegistry {
    fn get_item(&self, kind: ItemKind, index: usize) -> Option<&PaletteItem>;
}
