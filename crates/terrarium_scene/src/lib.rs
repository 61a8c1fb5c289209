//! Hierarchical scene model for the terrarium editor.
//!
//! A [`SceneModel`] owns a tree of [`Node`]s hanging from a single root.
//! Entities live inside environments; environments hang from the root or
//! from an entity. Payloads are supplied by a [`PaletteRegistry`] and are
//! only ever seen through the [`Payload`] capability trait.

mod error;
mod labels;
mod model;
mod node;
mod palette;
mod payload;
mod traverse;

pub use error::SpawnError;
pub use labels::LabelAllocator;
pub use model::{SceneModel, clamp_within};
pub use node::{ItemKind, Node, NodeId, NodeKind};
pub use palette::{PaletteItem, PaletteRegistry, PayloadFactory};
pub use payload::Payload;
pub use traverse::TreeIter;
