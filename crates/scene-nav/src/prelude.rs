//! Convenience re-exports — `use scene_nav::prelude::*` for the common items.

pub use crate::bounds::{BoundsOptions, Spatial};
pub use crate::ecs::{Entity, Hierarchy, World};
pub use crate::math::{BoundingBox, Mat4, Quat, Transform, Vec3};
pub use crate::navigate::Navigate;
pub use crate::placement::Placement;
#[cfg(feature = "diagnostics")]
pub use crate::diag::{VerticalReport, log_vertical_report, vertical_report};
