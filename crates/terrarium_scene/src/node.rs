use std::fmt;

use bevy::math::Vec2;

use crate::payload::Payload;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Identifier of a node in a [`crate::SceneModel`]. Never reused within a model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// The scene root. Exists for the whole lifetime of a model.
    pub const ROOT: Self = Self(0);

    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Entity,
    Environment,
}

impl NodeKind {
    /// Whether a node of this kind may directly contain a new `child` item.
    ///
    /// | child       | allowed parents |
    /// |-------------|-----------------|
    /// | Entity      | Environment     |
    /// | Environment | Root, Entity    |
    pub fn accepts(self, child: ItemKind) -> bool {
        matches!(
            (child, self),
            (ItemKind::Entity, NodeKind::Environment)
                | (ItemKind::Environment, NodeKind::Root | NodeKind::Entity)
        )
    }

    /// The palette kind this node was spawned as. `None` for the root.
    pub fn item_kind(self) -> Option<ItemKind> {
        match self {
            Self::Root => None,
            Self::Entity => Some(ItemKind::Entity),
            Self::Environment => Some(ItemKind::Environment),
        }
    }
}

impl From<ItemKind> for NodeKind {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Entity => Self::Entity,
            ItemKind::Environment => Self::Environment,
        }
    }
}

/// Kind of a palette item. The root is not a palette item, so it has no variant here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ItemKind {
    #[default]
    Entity,
    Environment,
}

impl ItemKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Entity => "Entity",
            Self::Environment => "Environment",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Entity => Self::Environment,
            Self::Environment => Self::Entity,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A tree element. Its parent link is fixed at creation.
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) kind: NodeKind,
    pub(crate) name: String,
    pub(crate) base_name: String,
    pub(crate) payload: Option<Box<dyn Payload>>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn root(name: String, base_name: &str) -> Self {
        Self {
            id: NodeId::ROOT,
            kind: NodeKind::Root,
            name,
            base_name: base_name.to_owned(),
            payload: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Display label, de-duplicated per base name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Template name of the palette item this node was spawned from.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child ids in creation order, which is also draw order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn payload(&self) -> Option<&dyn Payload> {
        self.payload.as_deref()
    }

    pub fn is_drawable(&self) -> bool {
        self.payload.is_some()
    }

    pub fn position(&self) -> Option<Vec2> {
        self.payload.as_ref().and_then(|p| p.position())
    }

    pub fn radius(&self) -> f32 {
        self.payload.as_ref().map_or(0.0, |p| p.radius())
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("base_name", &self.base_name)
            .field("has_payload", &self.payload.is_some())
            .field("parent", &self.parent)
            .field("children", &self.children)
            .finish()
    }
}
