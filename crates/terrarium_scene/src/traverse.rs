use crate::{
    model::SceneModel,
    node::{Node, NodeId},
};

/// Depth-first pre-order walk from the root, yielding `(depth, node)`.
pub struct TreeIter<'a> {
    model: &'a SceneModel,
    stack: Vec<(usize, NodeId)>,
}

impl<'a> Iterator for TreeIter<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, id)) = self.stack.pop() {
            let Some(node) = self.model.nodes.get(&id) else {
                continue;
            };
            self.stack
                .extend(node.children.iter().rev().map(|&child| (depth + 1, child)));
            return Some((depth, node));
        }
        None
    }
}

impl SceneModel {
    /// Nodes carrying a payload, in creation order.
    pub fn iter_drawable_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .filter(|node| node.is_drawable())
    }

    pub fn iter_tree(&self) -> TreeIter<'_> {
        TreeIter {
            model: self,
            stack: vec![(0, NodeId::ROOT)],
        }
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected_node().map(Node::name)
    }

    pub fn parent_label(&self, id: NodeId) -> Option<&str> {
        let parent = self.node(id)?.parent()?;
        self.node(parent).map(Node::name)
    }

    pub fn child_labels(&self, id: NodeId) -> Vec<&str> {
        let Some(node) = self.node(id) else {
            return Vec::new();
        };
        node.children()
            .iter()
            .filter_map(|&child| self.node(child))
            .map(Node::name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use bevy::math::Vec2;

    use crate::{ItemKind, PaletteItem, PaletteRegistry, Payload, SceneModel};

    struct Marker;

    impl Payload for Marker {}

    struct Items([PaletteItem; 1], [PaletteItem; 1]);

    impl PaletteRegistry for Items {
        fn get_item(&self, kind: ItemKind, index: usize) -> Option<&PaletteItem> {
            match kind {
                ItemKind::Entity => self.0.get(index),
                ItemKind::Environment => self.1.get(index),
            }
        }
    }

    fn items() -> Items {
        Items(
            [PaletteItem::new("Moth", |_| Box::new(Marker) as Box<dyn Payload>)],
            [PaletteItem::new("Meadow", |_| Box::new(Marker) as Box<dyn Payload>)],
        )
    }

    #[test]
    fn tree_is_preorder_with_depths() {
        let palette = items();
        let mut model = SceneModel::new();
        let meadow = model
            .spawn_from_palette(&palette, ItemKind::Environment, 0, Vec2::ZERO, None)
            .unwrap();
        model
            .spawn_from_palette(&palette, ItemKind::Entity, 0, Vec2::ZERO, Some(meadow))
            .unwrap();
        model
            .spawn_from_palette(&palette, ItemKind::Entity, 0, Vec2::ZERO, Some(meadow))
            .unwrap();
        model
            .spawn_from_palette(&palette, ItemKind::Environment, 0, Vec2::ZERO, Some(meadow))
            .unwrap();

        let walk: Vec<(usize, &str)> = model
            .iter_tree()
            .map(|(depth, node)| (depth, node.name()))
            .collect();
        assert_eq!(
            walk,
            [
                (0, "Scene Root"),
                (1, "Meadow"),
                (2, "Moth"),
                (2, "Moth #2"),
                // Hint is ineligible for an environment, so it hangs from the selected Moth #2.
                (3, "Meadow #2"),
            ]
        );

        // Restartable: a second walk sees the same sequence.
        assert_eq!(model.iter_tree().count(), walk.len());
    }

    #[test]
    fn drawable_nodes_skip_root() {
        let palette = items();
        let mut model = SceneModel::new();
        assert_eq!(model.iter_drawable_nodes().count(), 0);
        model
            .spawn_from_palette(&palette, ItemKind::Environment, 0, Vec2::ZERO, None)
            .unwrap();
        let names: Vec<&str> = model.iter_drawable_nodes().map(|n| n.name()).collect();
        assert_eq!(names, ["Meadow"]);
    }

    #[test]
    fn label_projections() {
        let palette = items();
        let mut model = SceneModel::new();
        let meadow = model
            .spawn_from_palette(&palette, ItemKind::Environment, 0, Vec2::ZERO, None)
            .unwrap();
        let moth = model
            .spawn_from_palette(&palette, ItemKind::Entity, 0, Vec2::ZERO, Some(meadow))
            .unwrap();

        assert_eq!(model.selected_label(), Some("Moth"));
        assert_eq!(model.parent_label(moth), Some("Meadow"));
        assert_eq!(model.parent_label(meadow), Some("Scene Root"));
        assert_eq!(model.parent_label(model.root().id()), None);
        assert_eq!(model.child_labels(meadow), ["Moth"]);
        assert_eq!(model.child_labels(model.root().id()), ["Meadow"]);
    }
}
