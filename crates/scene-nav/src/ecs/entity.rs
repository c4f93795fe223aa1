//! # Entity — Stable Handles Into the Hierarchy
//!
//! An [`Entity`] names one node of a scene tree. It carries no data itself;
//! the [`World`](super::world::World) maps it to a name, a transform, a parent
//! back-reference and an ordered child list.
//!
//! Handles are compared by identity (`==`), which is what every identity
//! lookup in [`Navigate`](crate::navigate::Navigate) relies on. Because slots
//! are recycled after a despawn, each handle pairs its slot index with a
//! **generation**:
//!
//! ```text
//! Entity { index: 3, generation: 0 }  ← spawned, later despawned
//! Entity { index: 3, generation: 1 }  ← new entity in the recycled slot
//! ```
//!
//! The two handles never compare equal, and the stale one resolves to nothing.

use std::fmt;

use serde::Serialize;

/// A lightweight, copyable handle to an entity in the
/// [`World`](super::world::World).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Entity {
    /// Slot index. Recycled after the entity is despawned.
    pub(crate) index: u32,
    /// Bumped every time the slot is reused.
    pub(crate) generation: u32,
}

impl Entity {
    /// Returns the raw slot index.
    pub fn index(self) -> u32 {
        self.index
    }

    /// Returns the generation.
    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// Hands out entity slots and recycles them.
///
/// ```text
/// generations: [1, 0, 2]   ← current generation of every slot
/// free_list:   [0]         ← despawned slots, reused LIFO
/// ```
pub(crate) struct EntityAllocator {
    generations: Vec<u32>,
    free_list: Vec<u32>,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self {
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Allocate a handle, reusing the most recently freed slot if any.
    pub fn allocate(&mut self) -> Entity {
        match self.free_list.pop() {
            Some(index) => Entity {
                index,
                generation: self.generations[index as usize],
            },
            None => {
                let index = self.generations.len() as u32;
                self.generations.push(0);
                Entity {
                    index,
                    generation: 0,
                }
            }
        }
    }

    /// Free a handle. Returns `false` if it was already stale.
    pub fn deallocate(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }
        self.generations[entity.index as usize] += 1;
        self.free_list.push(entity.index);
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.generations
            .get(entity.index as usize)
            .is_some_and(|&generation| generation == entity.generation)
    }

    /// The handle currently occupying `index`. Only meaningful for live slots.
    pub fn current(&self, index: u32) -> Entity {
        Entity {
            index,
            generation: self.generations[index as usize],
        }
    }

    /// Number of live handles.
    pub fn alive_count(&self) -> usize {
        self.generations.len() - self.free_list.len()
    }

    /// Number of slots ever allocated. Slot storage is sized to this.
    pub fn slot_count(&self) -> usize {
        self.generations.len()
    }
}
