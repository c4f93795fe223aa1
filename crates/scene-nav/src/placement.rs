//! # Placement — Fitting and Stacking by Visual Bounds
//!
//! [`Placement`] is implemented for every host that is both a
//! [`Hierarchy`](crate::ecs::Hierarchy) and [`Spatial`]. It builds on
//! [`visual_bounds`](Spatial::visual_bounds):
//!
//! - [`scale_to_fit`](Placement::scale_to_fit) uniformly scales an entity so
//!   its geometry fits inside a target box.
//! - [`add_child_atop`](Placement::add_child_atop) attaches a child so that it
//!   sits on top of everything already under the parent.
//!
//! ```text
//!            ┌─────┐  ← child, centered at max_y + height / 2
//!   max_y ── ├─────┤
//!            │     │  ← parent's existing geometry
//!            └─────┘
//! ```

use crate::bounds::{BoundsOptions, Spatial};
use crate::ecs::Entity;
use crate::math::{BoundingBox, Vec3};

/// Bounds-driven placement helpers.
pub trait Placement: Spatial + Sized {
    /// Set a uniform scale on `entity` so its geometry fits inside `target`.
    ///
    /// The current bounds are measured in the entity's own frame, so the
    /// existing scale does not affect the result. The scale is the smallest of
    /// the three per-axis ratios `target.extents / current.extents`.
    ///
    /// A zero extent gives an infinite ratio on that axis, which never wins
    /// the minimum: a box that is flat along one or two axes is fitted by the
    /// remaining ones. When the entity has no geometry (non-finite bounds) or
    /// every extent is zero, a warning is logged and the scale is left as it
    /// was.
    fn scale_to_fit(&mut self, entity: Entity, target: &BoundingBox) {
        let current = self.visual_bounds(entity, BoundsOptions::relative_to(entity));
        if !current.is_finite() {
            log::warn!("scale_to_fit on {:?} without geometry, scale unchanged", entity);
            return;
        }

        let fitted = (target.extents() / current.extents()).min_element();
        if !fitted.is_finite() {
            log::warn!(
                "scale_to_fit on {:?} with degenerate bounds {:?}, scale unchanged",
                entity,
                current
            );
            return;
        }

        if let Some(transform) = self.transform_mut(entity) {
            transform.scale = Vec3::splat(fitted);
        }
        log::debug!("fitted {:?} with uniform scale {}", entity, fitted);
    }

    /// Place `child` directly above `parent`'s current geometry, then attach it.
    ///
    /// Both boxes are world-space, recursive, and include inactive entities.
    /// A parent without geometry counts as topping out at `y = 0`; a child
    /// without geometry counts as zero height. The child's local
    /// `translation.y` becomes `max_y + height / 2`, which lines up only when
    /// the child's pivot is its geometric center.
    fn add_child_atop(&mut self, parent: Entity, child: Entity) {
        let options = BoundsOptions::world();

        let parent_bounds = self.visual_bounds(parent, options);
        let max_y = if parent_bounds.is_finite() {
            parent_bounds.max.y
        } else {
            0.0
        };

        let child_bounds = self.visual_bounds(child, options);
        let height = if child_bounds.is_finite() {
            child_bounds.extents().y
        } else {
            0.0
        };

        let y = max_y + height / 2.0;
        if let Some(transform) = self.transform_mut(child) {
            transform.translation.y = y;
        }
        self.add_child(parent, child);
        log::debug!("stacked {:?} atop {:?} at y = {}", child, parent, y);
    }
}

impl<S: Spatial> Placement for S {}
