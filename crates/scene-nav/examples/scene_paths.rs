//! Entity Hierarchies — solar system lookups.
//!
//! Builds a sun with orbiting planets and moons, then finds things in it by
//! name, by path, by identity and by predicate.
//!
//! Run with: `RUST_LOG=info cargo run -p scene-nav --example scene_paths`

use scene_nav::prelude::*;

// ── Scene ────────────────────────────────────────────────────────────────

struct System {
    sun: Entity,
    comet: Entity,
}

fn build(world: &mut World) -> System {
    let sun = world.spawn_anchor("sun");

    let planets = [
        ("mercury", 120.0, &[][..]),
        ("earth", 200.0, &["moon"][..]),
        ("mars", 300.0, &["phobos", "deimos"][..]),
    ];

    for (name, distance, moons) in planets {
        // The pivot carries the orbit; the planet is offset from it.
        let pivot = world.spawn_child(sun, format!("{name}-orbit"));
        let planet = world.spawn_child(pivot, name);
        world.set_transform(planet, Transform::from_xyz(distance, 0.0, 0.0));

        for (i, &moon) in moons.iter().enumerate() {
            let moon_pivot = world.spawn_child(planet, format!("{moon}-orbit"));
            let body = world.spawn_child(moon_pivot, moon);
            world.set_transform(body, Transform::from_xyz(20.0 + i as f32 * 8.0, 0.0, 0.0));
        }
    }

    // A second, independent tree.
    let belt = world.spawn_anchor("belt");
    let comet = world.spawn_child(belt, "");

    System { sun, comet }
}

fn main() {
    env_logger::init();

    let mut world = World::new();
    let System { sun, comet } = build(&mut world);

    // Named search is depth-first from the sun.
    if let Some(phobos) = world.first_named(sun, "phobos") {
        log::info!("phobos lives at {:?}", world.path(phobos));
        log::info!("phobos has {} ancestors", world.ancestors(phobos).len());
    }

    // Path lookup only follows direct children.
    let by_path = world.descendant_at(sun, ["earth-orbit", "earth", "moon-orbit", "moon"]);
    let shortcut = world.descendant_at(sun, ["earth", "moon"]);
    log::info!("moon by full path: {:?}, by shortcut: {:?}", by_path, shortcut);

    // The root-scoped search never returns the root itself.
    let first_below_sun = world.first_entity_where(sun, |_, _| true);
    log::info!(
        "first entity below the sun: {}",
        first_below_sun.map_or("<none>", |e| world.name(e))
    );

    // Identity lookup across both anchors.
    log::info!("comet found: {}", world.find_anchored_entity(comet).is_some());
    log::info!("solar system fully named: {}", world.are_all_entities_named(sun));

    // A fallible predicate aborts on the first error.
    let outcome = world.try_first_anchored_where(|w, e| {
        if w.name(e).is_empty() {
            Err(format!("unnamed entity {e}"))
        } else {
            Ok(w.name(e) == "pluto")
        }
    });
    match outcome {
        Ok(found) => log::info!("pluto: {:?}", found),
        Err(reason) => log::warn!("search aborted: {}", reason),
    }

    // Mars has two moons, so nothing is removed and the ring is appended.
    if let Some(mars) = world.first_named(sun, "mars") {
        let ring = world.spawn("ring");
        let replaced = world.replace_only_child(mars, ring);
        log::info!(
            "mars replaced its only child: {}, now has {} children",
            replaced,
            world.children(mars).len()
        );
    }
}
