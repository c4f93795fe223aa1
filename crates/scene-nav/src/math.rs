//! Math types and glam re-exports.
//!
//! We re-export [glam](https://docs.rs/glam) types so users don't need to
//! depend on it directly. [`Transform`] is an entity's local placement;
//! [`BoundingBox`] is the axis-aligned box every bounds query returns.

pub use glam::{Mat4, Quat, Vec3};

/// A local transform: position, rotation, and scale relative to the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform (origin, no rotation, uniform scale of 1).
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Create a transform at the given position.
    pub fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::from_translation(Vec3::new(x, y, z))
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Return a copy with the given per-axis scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Return a copy with uniform scale applied.
    pub fn with_uniform_scale(self, scale: f32) -> Self {
        self.with_scale(Vec3::splat(scale))
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Compute the 4x4 local-to-parent matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// An axis-aligned box given by its `min` and `max` corners.
///
/// A box is only meaningful when it [is finite](Self::is_finite). Bounds
/// queries over geometry-free subtrees return [`BoundingBox::EMPTY`], whose
/// infinite corners must be checked before doing arithmetic with them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// The box that contains nothing. Identity element of [`union`](Self::union).
    pub const EMPTY: Self = Self {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` reaching `half_extents` along each axis.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Size along each axis (`max - min`).
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// `true` iff none of the six components is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Axis-aligned box around this box after applying `matrix`.
    ///
    /// All eight corners are transformed, so rotations grow the box. Non-finite
    /// boxes come back unchanged.
    pub fn transformed(&self, matrix: &Mat4) -> BoundingBox {
        if !self.is_finite() {
            return *self;
        }
        let mut out = BoundingBox::EMPTY;
        for i in 0..8 {
            let corner = Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            );
            let p = matrix.transform_point3(corner);
            out.min = out.min.min(p);
            out.max = out.max.max(p);
        }
        out
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 0.001
    }

    #[test]
    fn extents_are_max_minus_min() {
        let b = BoundingBox::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(1.0, 5.0, 3.0));
        assert_eq!(b.extents(), Vec3::new(2.0, 5.0, 1.0));
        assert_eq!(b.center(), Vec3::new(0.0, 2.5, 2.5));
    }

    #[test]
    fn empty_box_is_not_finite() {
        assert!(!BoundingBox::EMPTY.is_finite());
        assert!(!BoundingBox::default().is_finite());
    }

    #[test]
    fn any_nan_component_makes_box_non_finite() {
        let mut b = BoundingBox::from_center_half_extents(Vec3::ZERO, Vec3::ONE);
        assert!(b.is_finite());
        b.max.z = f32::NAN;
        assert!(!b.is_finite());
    }

    #[test]
    fn union_with_empty_is_identity() {
        let b = BoundingBox::from_center_half_extents(Vec3::ONE, Vec3::splat(0.5));
        assert_eq!(BoundingBox::EMPTY.union(&b), b);
        assert_eq!(b.union(&BoundingBox::EMPTY), b);
    }

    #[test]
    fn transformed_applies_scale_and_translation() {
        let b = BoundingBox::from_center_half_extents(Vec3::ZERO, Vec3::ONE);
        let m = Transform::from_xyz(0.0, 10.0, 0.0).with_uniform_scale(2.0).matrix();
        let t = b.transformed(&m);
        assert!(approx(t.min, Vec3::new(-2.0, 8.0, -2.0)));
        assert!(approx(t.max, Vec3::new(2.0, 12.0, 2.0)));
    }

    #[test]
    fn transformed_rotation_grows_box() {
        let b = BoundingBox::from_center_half_extents(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        let m = Transform::IDENTITY
            .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_4))
            .matrix();
        let t = b.transformed(&m);
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert!(approx(t.max, Vec3::new(h, h, 0.0)));
    }

    #[test]
    fn transformed_leaves_empty_box_alone() {
        let m = Transform::from_xyz(1.0, 2.0, 3.0).matrix();
        assert_eq!(BoundingBox::EMPTY.transformed(&m), BoundingBox::EMPTY);
    }
}
