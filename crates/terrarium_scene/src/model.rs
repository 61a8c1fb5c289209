use std::collections::{HashMap, HashSet};

use bevy::{
    log::debug,
    math::{Rect, Vec2},
};

use crate::{
    error::SpawnError,
    labels::LabelAllocator,
    node::{ItemKind, Node, NodeId},
    palette::PaletteRegistry,
};

/// Base name of the root. Its display label is [`ROOT_LABEL`].
const ROOT_BASE_NAME: &str = "Scene";
const ROOT_LABEL: &str = "Scene Root";

/// The editable scene: node table, creation order, allocators, and selection.
///
/// Driven by a single caller. Traversals borrow the model, so the tree
/// cannot change while one is alive.
pub struct SceneModel {
    pub(crate) nodes: HashMap<NodeId, Node>,
    /// Creation order, root first.
    pub(crate) order: Vec<NodeId>,
    next_id: u64,
    labels: LabelAllocator,
    selected: Option<NodeId>,
}

impl Default for SceneModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneModel {
    pub fn new() -> Self {
        let mut labels = LabelAllocator::default();
        // Palette items named like the root are suffixed instead of sharing its label.
        let root_label = labels.allocate(ROOT_LABEL);
        let mut nodes = HashMap::new();
        nodes.insert(NodeId::ROOT, Node::root(root_label, ROOT_BASE_NAME));
        Self {
            nodes,
            order: vec![NodeId::ROOT],
            next_id: 1,
            labels,
            selected: None,
        }
    }

    // -----------------------------------------------------------------------
    // Table access
    // -----------------------------------------------------------------------

    pub fn root(&self) -> &Node {
        &self.nodes[&NodeId::ROOT]
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the root remains.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selected.and_then(|id| self.nodes.get(&id))
    }

    // -----------------------------------------------------------------------
    // Spawn
    // -----------------------------------------------------------------------

    /// Spawn a palette item, returning the new node or `None` if the item is
    /// unknown or no candidate parent accepts it.
    pub fn spawn_from_palette<P: PaletteRegistry + ?Sized>(
        &mut self,
        palette: &P,
        kind: ItemKind,
        index: usize,
        position: Vec2,
        parent_hint: Option<NodeId>,
    ) -> Option<NodeId> {
        self.try_spawn_from_palette(palette, kind, index, position, parent_hint)
            .inspect_err(|err| debug!("Spawn rejected: {err}"))
            .ok()
    }

    /// Like [`Self::spawn_from_palette`] but reports why a spawn was rejected.
    pub fn try_spawn_from_palette<P: PaletteRegistry + ?Sized>(
        &mut self,
        palette: &P,
        kind: ItemKind,
        index: usize,
        position: Vec2,
        parent_hint: Option<NodeId>,
    ) -> Result<NodeId, SpawnError> {
        let item = palette
            .get_item(kind, index)
            .ok_or(SpawnError::UnknownItem { kind, index })?;
        let parent = self
            .resolve_parent(kind, parent_hint)
            .ok_or(SpawnError::NoEligibleParent { kind })?;

        let payload = item.build(position);
        let name = self.labels.allocate(&item.name);
        let id = NodeId::new(self.next_id);
        self.next_id += 1;

        debug!("Spawned {kind} '{name}' ({id}) under {parent}");
        self.nodes.insert(
            id,
            Node {
                id,
                kind: kind.into(),
                name,
                base_name: item.name.clone(),
                payload: Some(payload),
                parent: Some(parent),
                children: Vec::new(),
            },
        );
        self.order.push(id);
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(id);
        }
        self.selected = Some(id);
        Ok(id)
    }

    /// First of hint, selection, root that exists and accepts `kind`.
    fn resolve_parent(&self, kind: ItemKind, hint: Option<NodeId>) -> Option<NodeId> {
        let selection = self.selected.filter(|&id| Some(id) != hint);
        [hint, selection, Some(NodeId::ROOT)]
            .into_iter()
            .flatten()
            .find(|id| self.nodes.get(id).is_some_and(|n| n.kind.accepts(kind)))
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Select `id`, or clear the selection if it is absent, unknown, or the root.
    pub fn select_node(&mut self, id: Option<NodeId>) {
        self.selected = id.filter(|id| !id.is_root() && self.nodes.contains_key(id));
    }

    /// Select the positioned drawable node nearest to `point`.
    /// Ties go to the earliest created node. Clears the selection if nothing has a position.
    pub fn select_at_position(&mut self, point: Vec2) -> Option<NodeId> {
        let mut best: Option<(NodeId, f32)> = None;
        for node in self.iter_drawable_nodes() {
            let Some(position) = node.position() else {
                continue;
            };
            let dist = position.distance_squared(point);
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((node.id, dist));
            }
        }
        self.selected = best.map(|(id, _)| id);
        self.selected
    }

    // -----------------------------------------------------------------------
    // Movement
    // -----------------------------------------------------------------------

    /// Move the selected node towards `desired`, keeping its circle inside `bounds`.
    /// Returns the position written, or `None` if nothing was moved.
    pub fn move_selected_within(&mut self, bounds: Rect, desired: Vec2) -> Option<Vec2> {
        let id = self.selected?;
        let payload = self.nodes.get_mut(&id)?.payload.as_deref_mut()?;
        let radius = payload.radius();
        let position = payload.position_mut()?;
        *position = clamp_within(bounds, radius, desired);
        Some(*position)
    }

    // -----------------------------------------------------------------------
    // Deletion
    // -----------------------------------------------------------------------

    /// Ids of the subtree rooted at `id`, children before their parent.
    /// Empty if `id` is unknown.
    pub fn subtree_ids(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if !self.nodes.contains_key(&id) {
            return out;
        }
        let mut stack = vec![(id, false)];
        while let Some((current, expanded)) = stack.pop() {
            if expanded {
                out.push(current);
                continue;
            }
            stack.push((current, true));
            if let Some(node) = self.nodes.get(&current) {
                stack.extend(node.children.iter().rev().map(|&child| (child, false)));
            }
        }
        out
    }

    /// Delete the selected node and its whole subtree. Returns how many nodes were removed.
    ///
    /// Afterwards the deleted node's parent is selected if it survives and is not the
    /// root; otherwise the most recently created remaining node; otherwise nothing.
    pub fn delete_selected(&mut self) -> usize {
        let Some(target) = self.selected.filter(|id| !id.is_root()) else {
            return 0;
        };
        let former_parent = self.nodes.get(&target).and_then(Node::parent);

        let doomed = self.subtree_ids(target);
        let mut removed = HashSet::with_capacity(doomed.len());
        for id in doomed {
            let Some(node) = self.nodes.remove(&id) else {
                continue;
            };
            if let Some(parent) = node.parent.and_then(|p| self.nodes.get_mut(&p)) {
                parent.children.retain(|&child| child != id);
            }
            removed.insert(id);
        }
        self.order.retain(|id| !removed.contains(id));

        self.selected = former_parent
            .filter(|p| !p.is_root() && self.nodes.contains_key(p))
            .or_else(|| self.order.iter().rev().copied().find(|id| !id.is_root()));

        debug!("Deleted {} node(s) rooted at {target}", removed.len());
        removed.len()
    }
}

/// Clamp `desired` so a circle of `radius` stays within `bounds` on each axis.
///
/// When the circle is wider than the bounds the lower edge wins, pinning it
/// to `bounds.min + radius`.
pub fn clamp_within(bounds: Rect, radius: f32, desired: Vec2) -> Vec2 {
    let low = bounds.min + Vec2::splat(radius);
    let high = bounds.max - Vec2::splat(radius);
    desired.min(high).max(low)
}
