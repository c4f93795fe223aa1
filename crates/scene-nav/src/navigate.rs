//! # Navigate — Searching and Addressing the Hierarchy
//!
//! [`Navigate`] is an extension trait implemented for every [`Hierarchy`].
//! Bring it into scope and the lookups read like methods on the scene:
//!
//! ```ignore
//! use scene_nav::prelude::*;
//!
//! let door = world.first_named(house, "door");
//! let knob = world.descendant_at(house, ["front", "door", "knob"]);
//! let trail = world.path(knob.unwrap()); // ["house", "front", "door"]
//! ```
//!
//! ## Search order
//!
//! Every search is pre-order depth-first: an entity, then each child subtree
//! in child order. Two scopes exist:
//!
//! - `first_*` / `find_entity` start **at** the given entity and test it.
//! - `first_entity_*` start at the given root's **children**; the root itself
//!   is never a candidate.
//!
//! Predicates may fail. The `try_*` forms return the predicate's first error
//! unchanged and stop searching immediately.

use std::convert::Infallible;

use crate::ecs::Entity;
use crate::ecs::hierarchy::Hierarchy;

fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Search, lookup, and single-child helpers over any [`Hierarchy`].
pub trait Navigate: Hierarchy + Sized {
    // ── Predicate search ─────────────────────────────────────────────

    /// First entity in `start`'s subtree (`start` included) for which `test`
    /// returns `Ok(true)`.
    fn try_first_where<E>(
        &self,
        start: Entity,
        mut test: impl FnMut(&Self, Entity) -> Result<bool, E>,
    ) -> Result<Option<Entity>, E> {
        for (entity, _) in self.walk(start) {
            if test(self, entity)? {
                return Ok(Some(entity));
            }
        }
        Ok(None)
    }

    fn first_where(
        &self,
        start: Entity,
        mut test: impl FnMut(&Self, Entity) -> bool,
    ) -> Option<Entity> {
        into_ok(self.try_first_where(start, |h, e| Ok(test(h, e))))
    }

    /// Like [`try_first_where`](Self::try_first_where), but only searches the
    /// subtrees of `root`'s children. `root` itself is never tested.
    fn try_first_entity_where<E>(
        &self,
        root: Entity,
        test: impl FnMut(&Self, Entity) -> Result<bool, E>,
    ) -> Result<Option<Entity>, E> {
        try_first_in(self, self.children(root), test)
    }

    fn first_entity_where(
        &self,
        root: Entity,
        mut test: impl FnMut(&Self, Entity) -> bool,
    ) -> Option<Entity> {
        into_ok(self.try_first_entity_where(root, |h, e| Ok(test(h, e))))
    }

    /// Predicate search across every anchor tree in anchor order. Each anchor
    /// is tested before its descendants.
    fn try_first_anchored_where<E>(
        &self,
        test: impl FnMut(&Self, Entity) -> Result<bool, E>,
    ) -> Result<Option<Entity>, E> {
        try_first_in(self, self.anchors(), test)
    }

    fn first_anchored_where(&self, mut test: impl FnMut(&Self, Entity) -> bool) -> Option<Entity> {
        into_ok(self.try_first_anchored_where(|h, e| Ok(test(h, e))))
    }

    // ── Named and identity lookup ────────────────────────────────────

    /// First entity in `start`'s subtree (`start` included) called `name`.
    ///
    /// Searching for `""` finds the first unnamed entity.
    fn first_named(&self, start: Entity, name: &str) -> Option<Entity> {
        self.first_where(start, |h, e| h.name(e) == name)
    }

    /// First entity called `name` below `root`, excluding `root`.
    fn first_entity_named(&self, root: Entity, name: &str) -> Option<Entity> {
        self.first_entity_where(root, |h, e| h.name(e) == name)
    }

    /// First direct child of `entity` called `name`. Grandchildren are not
    /// searched.
    fn child_named(&self, entity: Entity, name: &str) -> Option<Entity> {
        self.children(entity)
            .iter()
            .copied()
            .find(|&child| self.name(child) == name)
    }

    /// `id` if it lies in `start`'s subtree (`start` included).
    fn find_entity(&self, start: Entity, id: Entity) -> Option<Entity> {
        self.first_where(start, |_, e| e == id)
    }

    /// `id` if it lies in any anchor tree. Anchors are tried in order.
    fn find_anchored_entity(&self, id: Entity) -> Option<Entity> {
        self.anchors()
            .iter()
            .find_map(|&anchor| self.find_entity(anchor, id))
    }

    // ── Ancestry and paths ───────────────────────────────────────────

    /// Strict ancestors of `entity`, root first, immediate parent last.
    ///
    /// Loops forever on a cyclic hierarchy; [`Hierarchy`] implementations must
    /// not allow one.
    fn ancestors(&self, entity: Entity) -> Vec<Entity> {
        let mut chain = Vec::new();
        let mut current = self.parent(entity);
        while let Some(parent) = current {
            chain.push(parent);
            current = self.parent(parent);
        }
        chain.reverse();
        chain
    }

    /// Names of [`ancestors`](Self::ancestors), root first. The entity's own
    /// name is not part of its path.
    fn path(&self, entity: Entity) -> Vec<&str> {
        self.ancestors(entity)
            .into_iter()
            .map(|ancestor| self.name(ancestor))
            .collect()
    }

    /// Resolve `names` as a chain of [`child_named`](Self::child_named) steps
    /// from `entity`.
    ///
    /// Every step looks only at direct children. A missing step fails the whole
    /// lookup; there is no backtracking into other subtrees. An empty `names`
    /// resolves to nothing.
    fn descendant_at<I>(&self, entity: Entity, names: I) -> Option<Entity>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut names = names.into_iter().peekable();
        names.peek()?;
        names.try_fold(entity, |current, name| self.child_named(current, name.as_ref()))
    }

    /// `true` iff no entity in `entity`'s subtree (`entity` included) is
    /// unnamed.
    fn are_all_entities_named(&self, entity: Entity) -> bool {
        self.first_named(entity, "").is_none()
    }

    // ── Single child ─────────────────────────────────────────────────

    /// The sole child of `entity`; `None` with zero or several children.
    fn only_child(&self, entity: Entity) -> Option<Entity> {
        match self.children(entity) {
            &[child] => Some(child),
            _ => None,
        }
    }

    /// Detach the sole child, if there is exactly one. Returns whether
    /// anything was removed.
    fn remove_only_child(&mut self, entity: Entity) -> bool {
        match self.only_child(entity) {
            Some(child) => self.remove_child(entity, child),
            None => false,
        }
    }

    /// [`remove_only_child`](Self::remove_only_child), then append
    /// `new_child` regardless of the outcome.
    ///
    /// With two or more existing children nothing is removed and `new_child`
    /// is appended after them. Returns whether a previous child was removed.
    fn replace_only_child(&mut self, entity: Entity, new_child: Entity) -> bool {
        let removed = self.remove_only_child(entity);
        self.add_child(entity, new_child);
        removed
    }
}

impl<H: Hierarchy> Navigate for H {}

fn try_first_in<H, E>(
    hierarchy: &H,
    roots: &[Entity],
    mut test: impl FnMut(&H, Entity) -> Result<bool, E>,
) -> Result<Option<Entity>, E>
where
    H: Hierarchy,
{
    for (entity, _) in hierarchy.walk_roots(roots) {
        if test(hierarchy, entity)? {
            return Ok(Some(entity));
        }
    }
    Ok(None)
}
