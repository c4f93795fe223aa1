//! Vertical layout dump — who sits where along Y.
//!
//! Enabled by the `diagnostics` feature flag. [`vertical_report`] walks a
//! subtree and records, for every entity, the bottom and height of its
//! world-space visual bounds. The report renders as an indented text tree
//! (one line per entity) or as JSON, which is handy when
//! [`add_child_atop`](crate::placement::Placement::add_child_atop) puts
//! something somewhere unexpected.
//!
//! ```text
//! Entity: tower - MINY: 0 HEIGHT: 3
//!   Model: a - MINY: 0 HEIGHT: 1
//!   Model: b - MINY: 1 HEIGHT: 1
//! ```

use std::fmt;

use serde::Serialize;

use crate::bounds::{BoundsOptions, Spatial};
use crate::ecs::Entity;

/// Whether an entity carries geometry of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    /// Has render geometry.
    Model,
    /// Pure grouping node.
    Entity,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Model => f.write_str("Model"),
            EntityKind::Entity => f.write_str("Entity"),
        }
    }
}

/// One line of a [`VerticalReport`].
#[derive(Debug, Clone, Serialize)]
pub struct VerticalRow {
    pub entity: Entity,
    pub depth: usize,
    pub name: String,
    pub kind: EntityKind,
    /// `None` when the subtree has no geometry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

/// Pre-order list of [`VerticalRow`]s for a subtree.
#[derive(Debug, Clone, Serialize)]
pub struct VerticalReport {
    pub rows: Vec<VerticalRow>,
}

impl VerticalReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for VerticalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let padding = "  ".repeat(row.depth);
            write!(f, "{}{}: {}", padding, row.kind, row.name)?;
            match (row.min_y, row.height) {
                (Some(min_y), Some(height)) => {
                    writeln!(f, " - MINY: {} HEIGHT: {}", min_y, height)?
                }
                _ => writeln!(f, " - no geometry")?,
            }
        }
        Ok(())
    }
}

/// Build a [`VerticalReport`] for `root`'s subtree using recursive,
/// world-space bounds.
pub fn vertical_report<S: Spatial>(scene: &S, root: Entity) -> VerticalReport {
    let rows = scene
        .walk(root)
        .map(|(entity, depth)| {
            let bounds = scene.visual_bounds(entity, BoundsOptions::world());
            let (min_y, height) = if bounds.is_finite() {
                (Some(bounds.min.y), Some(bounds.extents().y))
            } else {
                (None, None)
            };
            VerticalRow {
                entity,
                depth,
                name: scene.name(entity).to_string(),
                kind: if scene.model_bounds(entity).is_some() {
                    EntityKind::Model
                } else {
                    EntityKind::Entity
                },
                min_y,
                height,
            }
        })
        .collect();
    VerticalReport { rows }
}

/// Log [`vertical_report`] line by line at `info` level.
pub fn log_vertical_report<S: Spatial>(scene: &S, root: Entity) {
    let report = vertical_report(scene, root);
    for line in report.to_string().lines() {
        log::info!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::World;
    use crate::math::{BoundingBox, Vec3};
    use crate::placement::Placement;

    fn tower() -> (World, Entity) {
        let mut world = World::new();
        let tower = world.spawn("tower");
        for name in ["a", "b"] {
            let block = world.spawn(name);
            world.set_model_bounds(
                block,
                BoundingBox::from_center_half_extents(Vec3::ZERO, Vec3::splat(0.5)),
            );
            world.add_child_atop(tower, block);
        }
        (world, tower)
    }

    #[test]
    fn report_rows_follow_pre_order() {
        let (world, tower) = tower();
        let report = vertical_report(&world, tower);

        let names: Vec<_> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["tower", "a", "b"]);
        assert_eq!(report.rows[0].kind, EntityKind::Entity);
        assert_eq!(report.rows[1].kind, EntityKind::Model);
        assert_eq!(report.rows[2].depth, 1);
        assert_eq!(report.rows[2].min_y, Some(1.0));
        assert_eq!(report.rows[0].height, Some(2.0));
    }

    #[test]
    fn report_renders_indented_lines() {
        let (world, tower) = tower();
        let text = vertical_report(&world, tower).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Entity: tower - MINY: 0 HEIGHT: 2");
        assert_eq!(lines[1], "  Model: a - MINY: 0 HEIGHT: 1");
        assert_eq!(lines[2], "  Model: b - MINY: 1 HEIGHT: 1");
    }

    #[test]
    fn report_without_geometry() {
        let mut world = World::new();
        let lonely = world.spawn("lonely");
        let report = vertical_report(&world, lonely);
        assert_eq!(report.rows[0].min_y, None);
        assert_eq!(report.to_string(), "Entity: lonely - no geometry\n");
    }

    #[test]
    fn report_serializes_to_json() {
        let (world, tower) = tower();
        let json = vertical_report(&world, tower).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rows"][1]["name"], "a");
        assert_eq!(value["rows"][1]["kind"], "Model");
        assert_eq!(value["rows"][0]["entity"]["index"], 0);
    }
}
