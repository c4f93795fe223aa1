//! # scene-nav — Entity Hierarchy Navigation
//!
//! Search, lookup, and placement helpers for scene graphs: depth-first
//! predicate search, named and path-addressed lookup, ancestor chains, fitting
//! an entity into a box, and stacking children on top of each other.
//!
//! The helpers are extension traits over two host contracts,
//! [`Hierarchy`](ecs::Hierarchy) and [`Spatial`](bounds::Spatial), so they
//! work on any scene store that implements them. [`World`](ecs::World) is the
//! bundled implementation.
//!
//! Start with `use scene_nav::prelude::*`.

pub mod bounds;
pub mod ecs;
pub mod math;
pub mod navigate;
pub mod placement;
pub mod prelude;

#[cfg(feature = "diagnostics")]
pub mod diag;
