//! # Entity Hierarchies — Parent/Child Relationships
//!
//! [`Hierarchy`] is the contract a host scene must satisfy for the navigator
//! to walk it: stable identity, a name, a parent back-reference, an ordered
//! child list, and the two mutations `add_child` / `remove_child`. The
//! in-crate [`World`](super::world::World) implements it; any other scene
//! store can too.
//!
//! ## Traversal
//!
//! [`Walk`] yields `(entity, depth)` in pre-order: an entity, then each child
//! subtree in child order. It keeps an explicit stack instead of recursing,
//! so deep trees cannot exhaust the call stack.
//!
//! ```text
//! root            (root, 0)
//! ├── a           (a, 1)
//! │   └── b       (b, 2)
//! └── c           (c, 1)
//! ```

use crate::ecs::Entity;

/// Parent/child storage supplied by the host scene.
///
/// Implementations must keep the relation a strict tree: every entity has at
/// most one parent and never appears among its own ancestors. Child order is
/// insertion order.
pub trait Hierarchy {
    /// `true` while the handle refers to a live entity.
    fn is_alive(&self, entity: Entity) -> bool;

    /// The entity's name. The empty string marks an unnamed entity; dead
    /// entities also read as unnamed.
    fn name(&self, entity: Entity) -> &str;

    fn parent(&self, entity: Entity) -> Option<Entity>;

    /// Children in insertion order. Dead entities have none.
    fn children(&self, entity: Entity) -> &[Entity];

    /// Independent top-level trees, in the order they were anchored.
    fn anchors(&self) -> &[Entity];

    /// Append `child` to the end of `parent`'s child list.
    fn add_child(&mut self, parent: Entity, child: Entity);

    /// Detach `child` from `parent`. Returns `false` if it wasn't a child.
    fn remove_child(&mut self, parent: Entity, child: Entity) -> bool;

    /// Pre-order walk of `start`'s subtree, `start` included at depth 0.
    fn walk(&self, start: Entity) -> Walk<'_, Self>
    where
        Self: Sized,
    {
        Walk::new(self, std::slice::from_ref(&start))
    }

    /// Pre-order walk over several trees, one after another.
    fn walk_roots(&self, roots: &[Entity]) -> Walk<'_, Self>
    where
        Self: Sized,
    {
        Walk::new(self, roots)
    }
}

/// Pre-order iterator over one or more subtrees. See [`Hierarchy::walk`].
pub struct Walk<'h, H> {
    hierarchy: &'h H,
    stack: Vec<(Entity, usize)>,
}

impl<'h, H: Hierarchy> Walk<'h, H> {
    fn new(hierarchy: &'h H, roots: &[Entity]) -> Self {
        let stack = roots
            .iter()
            .rev()
            .filter(|&&root| hierarchy.is_alive(root))
            .map(|&root| (root, 0))
            .collect();
        Self { hierarchy, stack }
    }
}

impl<H: Hierarchy> Iterator for Walk<'_, H> {
    type Item = (Entity, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (entity, depth) = self.stack.pop()?;
        // Reversed so the first child is popped next.
        self.stack.extend(
            self.hierarchy
                .children(entity)
                .iter()
                .rev()
                .map(|&child| (child, depth + 1)),
        );
        Some((entity, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::World;

    #[test]
    fn walk_is_pre_order_with_depths() {
        let mut world = World::new();
        let root = world.spawn("root");
        let a = world.spawn_child(root, "a");
        let b = world.spawn_child(a, "b");
        let c = world.spawn_child(root, "c");

        let visited: Vec<_> = world.walk(root).collect();
        assert_eq!(visited, vec![(root, 0), (a, 1), (b, 2), (c, 1)]);
    }

    #[test]
    fn walk_of_leaf_yields_only_itself() {
        let mut world = World::new();
        let leaf = world.spawn("leaf");
        assert_eq!(world.walk(leaf).collect::<Vec<_>>(), vec![(leaf, 0)]);
    }

    #[test]
    fn walk_roots_visits_trees_in_order() {
        let mut world = World::new();
        let first = world.spawn("first");
        let inner = world.spawn_child(first, "inner");
        let second = world.spawn("second");

        let visited: Vec<_> = world
            .walk_roots(&[first, second])
            .map(|(entity, _)| entity)
            .collect();
        assert_eq!(visited, vec![first, inner, second]);
    }

    #[test]
    fn walk_from_dead_entity_is_empty() {
        let mut world = World::new();
        let gone = world.spawn("gone");
        world.despawn_recursive(gone);
        assert_eq!(world.walk(gone).count(), 0);
    }

    #[test]
    fn walk_handles_deep_chains() {
        let mut world = World::new();
        let root = world.spawn("0");
        let mut tip = root;
        for i in 1..5_000 {
            tip = world.spawn_child(tip, &i.to_string());
        }
        let (last, depth) = world.walk(root).last().unwrap();
        assert_eq!(last, tip);
        assert_eq!(depth, 4_999);
    }
}
