//! # Visual Bounds
//!
//! [`Spatial`] extends [`Hierarchy`] with the geometry the placement helpers
//! need: each entity's local [`Transform`], the local-space bounds of its own
//! render geometry, and whether it is active. From those it derives
//! [`visual_bounds`](Spatial::visual_bounds), the union of a subtree's
//! geometry expressed in any reference frame.
//!
//! ## Frames
//!
//! ```text
//! world_matrix(e)  = local(root) * ... * local(parent) * local(e)
//! to_frame(e, f)   = world_matrix(f)⁻¹ * world_matrix(e)
//! ```
//!
//! With `relative_to: None` the frame is world space. With
//! `relative_to: Some(e)` on `e` itself, the entity's own transform cancels out,
//! which is what fitting against a target box wants.

use crate::ecs::Entity;
use crate::ecs::hierarchy::Hierarchy;
use crate::math::{BoundingBox, Mat4, Transform};

/// Which geometry a bounds query covers and which frame it is expressed in.
///
/// The default is world space, recursive, inactive entities included.
///
/// ```ignore
/// let local = BoundsOptions::relative_to(entity);
/// let visible = BoundsOptions::world().exclude_inactive(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsOptions {
    /// Reference frame. `None` means world space.
    pub relative_to: Option<Entity>,
    /// Include all descendants, not just the entity's own geometry.
    pub recursive: bool,
    /// Skip entities that are not active, together with their subtrees.
    pub exclude_inactive: bool,
}

impl BoundsOptions {
    /// World space, recursive, inactive entities included.
    pub fn world() -> Self {
        Self {
            relative_to: None,
            recursive: true,
            exclude_inactive: false,
        }
    }

    /// Like [`world`](Self::world), but expressed in `frame`'s local space.
    pub fn relative_to(frame: Entity) -> Self {
        Self {
            relative_to: Some(frame),
            ..Self::world()
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn exclude_inactive(mut self, exclude: bool) -> Self {
        self.exclude_inactive = exclude;
        self
    }
}

impl Default for BoundsOptions {
    fn default() -> Self {
        Self::world()
    }
}

/// Transforms and render geometry supplied by the host scene.
pub trait Spatial: Hierarchy {
    fn transform(&self, entity: Entity) -> Option<&Transform>;

    fn transform_mut(&mut self, entity: Entity) -> Option<&mut Transform>;

    /// Local-space bounds of the entity's own geometry, if it has any.
    fn model_bounds(&self, entity: Entity) -> Option<BoundingBox>;

    /// Whether the entity takes part in the scene (it and all its ancestors
    /// are enabled).
    fn is_active(&self, entity: Entity) -> bool;

    /// Local-to-world matrix: the product of every local transform from the
    /// root down to `entity`. Dead entities map to identity.
    fn world_matrix(&self, entity: Entity) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut current = Some(entity);
        while let Some(e) = current {
            if let Some(transform) = self.transform(e) {
                matrix = transform.matrix() * matrix;
            }
            current = self.parent(e);
        }
        matrix
    }

    /// Union of the render-geometry bounds of `entity` (and its descendants,
    /// if recursive) in the frame chosen by `options`.
    ///
    /// Returns [`BoundingBox::EMPTY`] (non-finite) when nothing contributes.
    fn visual_bounds(&self, entity: Entity, options: BoundsOptions) -> BoundingBox {
        let to_frame = match options.relative_to {
            Some(frame) => self.world_matrix(frame).inverse(),
            None => Mat4::IDENTITY,
        };

        let mut bounds = BoundingBox::EMPTY;
        let mut include = |e: Entity| {
            if let Some(model) = self.model_bounds(e) {
                let matrix = to_frame * self.world_matrix(e);
                bounds = bounds.union(&model.transformed(&matrix));
            }
        };

        if !options.recursive {
            if !options.exclude_inactive || self.is_active(entity) {
                include(entity);
            }
            return bounds;
        }

        // Manual pre-order so an inactive entity prunes its whole subtree.
        let mut stack = vec![entity];
        while let Some(e) = stack.pop() {
            if !self.is_alive(e) || (options.exclude_inactive && !self.is_active(e)) {
                continue;
            }
            include(e);
            stack.extend(self.children(e).iter().rev().copied());
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::World;
    use crate::math::Vec3;

    fn unit_cube() -> BoundingBox {
        BoundingBox::from_center_half_extents(Vec3::ZERO, Vec3::ONE)
    }

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 0.001
    }

    #[test]
    fn default_options_are_world_recursive_inclusive() {
        let options = BoundsOptions::default();
        assert_eq!(options.relative_to, None);
        assert!(options.recursive);
        assert!(!options.exclude_inactive);
    }

    #[test]
    fn entity_without_geometry_has_non_finite_bounds() {
        let mut world = World::new();
        let empty = world.spawn("empty");
        world.spawn_child(empty, "also empty");
        assert!(!world.visual_bounds(empty, BoundsOptions::world()).is_finite());
    }

    #[test]
    fn world_matrix_composes_parent_chain() {
        let mut world = World::new();
        let root = world.spawn("root");
        world.set_transform(root, Transform::from_xyz(10.0, 0.0, 0.0).with_uniform_scale(2.0));
        let child = world.spawn_child(root, "child");
        world.set_transform(child, Transform::from_xyz(1.0, 1.0, 0.0));

        let p = world.world_matrix(child).transform_point3(Vec3::ZERO);
        assert!(approx(p, Vec3::new(12.0, 2.0, 0.0)));
    }

    #[test]
    fn world_bounds_include_transformed_descendants() {
        let mut world = World::new();
        let root = world.spawn("root");
        world.set_model_bounds(root, unit_cube());
        let child = world.spawn_child(root, "child");
        world.set_transform(child, Transform::from_xyz(0.0, 5.0, 0.0));
        world.set_model_bounds(child, unit_cube());

        let b = world.visual_bounds(root, BoundsOptions::world());
        assert!(approx(b.min, Vec3::new(-1.0, -1.0, -1.0)));
        assert!(approx(b.max, Vec3::new(1.0, 6.0, 1.0)));

        let own = world.visual_bounds(root, BoundsOptions::world().recursive(false));
        assert!(approx(own.max, Vec3::ONE));
    }

    #[test]
    fn bounds_relative_to_self_ignore_own_transform() {
        let mut world = World::new();
        let e = world.spawn("e");
        world.set_transform(e, Transform::from_xyz(3.0, 3.0, 3.0).with_uniform_scale(4.0));
        world.set_model_bounds(e, unit_cube());

        let local = world.visual_bounds(e, BoundsOptions::relative_to(e));
        assert!(approx(local.extents(), Vec3::splat(2.0)));

        let global = world.visual_bounds(e, BoundsOptions::world());
        assert!(approx(global.extents(), Vec3::splat(8.0)));
        assert!(approx(global.center(), Vec3::splat(3.0)));
    }

    #[test]
    fn exclude_inactive_prunes_subtree() {
        let mut world = World::new();
        let root = world.spawn("root");
        world.set_model_bounds(root, unit_cube());
        let hidden = world.spawn_child(root, "hidden");
        world.set_enabled(hidden, false);
        let grandchild = world.spawn_child(hidden, "grandchild");
        world.set_transform(grandchild, Transform::from_xyz(0.0, 10.0, 0.0));
        world.set_model_bounds(grandchild, unit_cube());

        let all = world.visual_bounds(root, BoundsOptions::world());
        assert!(approx(all.max, Vec3::new(1.0, 11.0, 1.0)));

        let visible = world.visual_bounds(root, BoundsOptions::world().exclude_inactive(true));
        assert!(approx(visible.max, Vec3::ONE));
    }

    #[test]
    fn exclude_inactive_on_inactive_entity_is_empty() {
        let mut world = World::new();
        let e = world.spawn("e");
        world.set_model_bounds(e, unit_cube());
        world.set_enabled(e, false);

        let options = BoundsOptions::world().recursive(false).exclude_inactive(true);
        assert!(!world.visual_bounds(e, options).is_finite());
    }
}
