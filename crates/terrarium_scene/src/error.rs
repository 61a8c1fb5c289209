use thiserror::Error;

use crate::node::ItemKind;

/// Why a palette spawn was rejected. Nothing is mutated when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("palette has no {kind} item at index {index}")]
    UnknownItem { kind: ItemKind, index: usize },
    #[error("no eligible parent for a new {kind}")]
    NoEligibleParent { kind: ItemKind },
}
