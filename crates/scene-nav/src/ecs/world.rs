//! # World — The Scene Container
//!
//! The [`World`] owns every entity of a scene: its name, local
//! [`Transform`], optional render-geometry bounds, enabled flag, and its place
//! in the tree.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │ World                                             │
//! │                                                   │
//! │  EntityAllocator: entity handle lifecycle         │
//! │                                                   │
//! │  records: Vec<Option<EntityRecord>>               │
//! │    indexed by Entity::index                       │
//! │    { name, parent, children, transform, ... }     │
//! │                                                   │
//! │  anchors: Vec<Entity>                             │
//! │    independent top-level trees, anchor order      │
//! └───────────────────────────────────────────────────┘
//! ```
//!
//! The World implements [`Hierarchy`] and [`Spatial`], so everything in
//! [`Navigate`](crate::navigate::Navigate) and
//! [`Placement`](crate::placement::Placement) works on it directly.
//!
//! Misuse that would corrupt the tree (touching dead entities, parenting an
//! entity under itself or its own descendant) panics.

use crate::bounds::Spatial;
use crate::ecs::entity::{Entity, EntityAllocator};
use crate::ecs::hierarchy::Hierarchy;
use crate::math::{BoundingBox, Transform};

/// Everything the World knows about one entity.
struct EntityRecord {
    name: String,
    parent: Option<Entity>,
    children: Vec<Entity>,
    transform: Transform,
    /// Local-space bounds of the entity's own render geometry.
    model: Option<BoundingBox>,
    enabled: bool,
}

impl EntityRecord {
    fn new(name: String) -> Self {
        Self {
            name,
            parent: None,
            children: Vec::new(),
            transform: Transform::IDENTITY,
            model: None,
            enabled: true,
        }
    }
}

/// The container for a scene's entity trees.
pub struct World {
    allocator: EntityAllocator,
    records: Vec<Option<EntityRecord>>,
    anchors: Vec<Entity>,
}

impl World {
    pub fn new() -> Self {
        Self {
            allocator: EntityAllocator::new(),
            records: Vec::new(),
            anchors: Vec::new(),
        }
    }

    fn record(&self, entity: Entity) -> Option<&EntityRecord> {
        if !self.allocator.is_alive(entity) {
            return None;
        }
        self.records.get(entity.index as usize)?.as_ref()
    }

    fn record_mut(&mut self, entity: Entity) -> Option<&mut EntityRecord> {
        if !self.allocator.is_alive(entity) {
            return None;
        }
        self.records.get_mut(entity.index as usize)?.as_mut()
    }

    fn expect_record_mut(&mut self, entity: Entity, action: &str) -> &mut EntityRecord {
        self.record_mut(entity)
            .unwrap_or_else(|| panic!("Cannot {} dead entity {:?}", action, entity))
    }

    // ── Spawn / Despawn ──────────────────────────────────────────────

    /// Spawn a parentless entity. An empty `name` leaves it unnamed.
    pub fn spawn(&mut self, name: impl Into<String>) -> Entity {
        let entity = self.allocator.allocate();
        let slot = entity.index as usize;
        if self.records.len() < self.allocator.slot_count() {
            self.records.resize_with(self.allocator.slot_count(), || None);
        }
        self.records[slot] = Some(EntityRecord::new(name.into()));
        log::trace!("spawned {:?}", entity);
        entity
    }

    /// Spawn an unnamed, parentless entity.
    pub fn spawn_empty(&mut self) -> Entity {
        self.spawn(String::new())
    }

    /// Spawn an entity and append it to `parent`'s children.
    ///
    /// # Panics
    ///
    /// Panics if the parent entity is not alive.
    pub fn spawn_child(&mut self, parent: Entity, name: impl Into<String>) -> Entity {
        assert!(
            self.allocator.is_alive(parent),
            "Cannot spawn child on dead parent {:?}",
            parent
        );
        let child = self.spawn(name);
        self.add_child(parent, child);
        child
    }

    /// Spawn an entity and register it as the last anchor.
    pub fn spawn_anchor(&mut self, name: impl Into<String>) -> Entity {
        let anchor = self.spawn(name);
        self.anchors.push(anchor);
        anchor
    }

    /// Spawn an entity that adopts `children` in order. `None` leaves it
    /// unnamed.
    pub fn spawn_with_children(
        &mut self,
        name: Option<&str>,
        children: impl IntoIterator<Item = Entity>,
    ) -> Entity {
        let parent = self.spawn(name.unwrap_or_default());
        for child in children {
            self.add_child(parent, child);
        }
        parent
    }

    /// Despawn an entity and all its descendants.
    ///
    /// The entity is removed from its parent's child list and from the anchor
    /// list. Returns `false` if it was already dead.
    pub fn despawn_recursive(&mut self, entity: Entity) -> bool {
        if !self.allocator.is_alive(entity) {
            return false;
        }

        if let Some(parent) = self.parent(entity) {
            self.remove_child(parent, entity);
        }
        self.anchors.retain(|&a| a != entity);

        let doomed: Vec<Entity> = self.walk(entity).map(|(e, _)| e).collect();
        for e in &doomed {
            self.records[e.index as usize] = None;
            self.allocator.deallocate(*e);
        }
        log::trace!("despawned {:?} ({} entities)", entity, doomed.len());
        true
    }

    /// Despawn every entity in the world.
    pub fn despawn_all(&mut self) {
        for index in 0..self.records.len() {
            if self.records[index].take().is_some() {
                let entity = self.allocator.current(index as u32);
                self.allocator.deallocate(entity);
            }
        }
        self.anchors.clear();
    }

    // ── Anchors ──────────────────────────────────────────────────────

    /// Register an existing entity as the last anchor. No-op if it already is.
    ///
    /// # Panics
    ///
    /// Panics if the entity is dead or has a parent.
    pub fn add_anchor(&mut self, entity: Entity) {
        let record = self
            .record(entity)
            .unwrap_or_else(|| panic!("Cannot anchor dead entity {:?}", entity));
        assert!(
            record.parent.is_none(),
            "Cannot anchor {:?}: it is a child of {:?}",
            entity,
            record.parent
        );
        if !self.anchors.contains(&entity) {
            self.anchors.push(entity);
        }
    }

    /// Unregister an anchor. The entity stays alive.
    pub fn remove_anchor(&mut self, entity: Entity) -> bool {
        let before = self.anchors.len();
        self.anchors.retain(|&a| a != entity);
        self.anchors.len() != before
    }

    // ── Entity Data ──────────────────────────────────────────────────

    pub fn entity_count(&self) -> usize {
        self.allocator.alive_count()
    }

    pub fn set_name(&mut self, entity: Entity, name: impl Into<String>) {
        self.expect_record_mut(entity, "rename").name = name.into();
    }

    pub fn set_transform(&mut self, entity: Entity, transform: Transform) {
        self.expect_record_mut(entity, "move").transform = transform;
    }

    /// Give the entity render geometry occupying `bounds` in its local space.
    pub fn set_model_bounds(&mut self, entity: Entity, bounds: BoundingBox) {
        self.expect_record_mut(entity, "attach geometry to").model = Some(bounds);
    }

    pub fn clear_model_bounds(&mut self, entity: Entity) {
        self.expect_record_mut(entity, "detach geometry from").model = None;
    }

    /// Whether the entity itself is enabled, regardless of its ancestors.
    pub fn is_enabled(&self, entity: Entity) -> bool {
        self.record(entity).is_some_and(|r| r.enabled)
    }

    pub fn set_enabled(&mut self, entity: Entity, enabled: bool) {
        self.expect_record_mut(entity, "toggle").enabled = enabled;
    }

    fn is_ancestor_of(&self, ancestor: Entity, entity: Entity) -> bool {
        let mut current = self.parent(entity);
        while let Some(e) = current {
            if e == ancestor {
                return true;
            }
            current = self.parent(e);
        }
        false
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl Hierarchy for World {
    fn is_alive(&self, entity: Entity) -> bool {
        self.allocator.is_alive(entity)
    }

    fn name(&self, entity: Entity) -> &str {
        self.record(entity).map_or("", |r| r.name.as_str())
    }

    fn parent(&self, entity: Entity) -> Option<Entity> {
        self.record(entity)?.parent
    }

    fn children(&self, entity: Entity) -> &[Entity] {
        self.record(entity).map(|r| r.children.as_slice()).unwrap_or(&[])
    }

    fn anchors(&self) -> &[Entity] {
        &self.anchors
    }

    /// Re-parents `child` if it already has a parent, and drops it from the
    /// anchor list.
    ///
    /// # Panics
    ///
    /// Panics if either entity is dead, or if the edge would create a cycle.
    fn add_child(&mut self, parent: Entity, child: Entity) {
        assert!(
            self.allocator.is_alive(parent),
            "Cannot add child to dead parent {:?}",
            parent
        );
        assert!(
            self.allocator.is_alive(child),
            "Cannot add dead child {:?}",
            child
        );
        assert!(
            parent != child && !self.is_ancestor_of(child, parent),
            "Cannot add {:?} under {:?}: it would become its own ancestor",
            child,
            parent
        );

        if let Some(old_parent) = self.parent(child) {
            self.remove_child(old_parent, child);
        }
        self.anchors.retain(|&a| a != child);

        self.expect_record_mut(child, "reparent").parent = Some(parent);
        self.expect_record_mut(parent, "reparent into").children.push(child);
        log::trace!("{:?} is now a child of {:?}", child, parent);
    }

    fn remove_child(&mut self, parent: Entity, child: Entity) -> bool {
        if self.parent(child) != Some(parent) {
            return false;
        }
        if let Some(record) = self.record_mut(parent) {
            record.children.retain(|&c| c != child);
        }
        if let Some(record) = self.record_mut(child) {
            record.parent = None;
        }
        true
    }
}

impl Spatial for World {
    fn transform(&self, entity: Entity) -> Option<&Transform> {
        self.record(entity).map(|r| &r.transform)
    }

    fn transform_mut(&mut self, entity: Entity) -> Option<&mut Transform> {
        self.record_mut(entity).map(|r| &mut r.transform)
    }

    fn model_bounds(&self, entity: Entity) -> Option<BoundingBox> {
        self.record(entity)?.model
    }

    /// Enabled, and every ancestor enabled too.
    fn is_active(&self, entity: Entity) -> bool {
        let mut current = Some(entity);
        while let Some(e) = current {
            if !self.is_enabled(e) {
                return false;
            }
            current = self.parent(e);
        }
        true
    }
}
