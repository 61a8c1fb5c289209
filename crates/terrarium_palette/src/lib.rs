//! Concrete palette for the terrarium editor: a serde-backed item catalog
//! and the payload types its factories build.

mod catalog;
pub mod format;
mod payloads;

pub use catalog::{CatalogEntry, CatalogError, PaletteCatalog};
pub use format::{ItemDef, PaletteFile};
pub use payloads::{Critter, Habitat};
