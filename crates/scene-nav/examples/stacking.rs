//! Stacking and fitting — a tower of crates.
//!
//! Stacks differently sized crates on a pedestal, shrinks a statue to fit on
//! top, and prints where everything ended up.
//!
//! Run with: `RUST_LOG=info cargo run -p scene-nav --example stacking`

use scene_nav::prelude::*;

fn crate_box(world: &mut World, name: &str, size: f32) -> Entity {
    let e = world.spawn(name);
    world.set_model_bounds(
        e,
        BoundingBox::from_center_half_extents(Vec3::ZERO, Vec3::splat(size / 2.0)),
    );
    e
}

fn main() {
    env_logger::init();

    let mut world = World::new();
    let pedestal = world.spawn_anchor("pedestal");
    world.set_model_bounds(
        pedestal,
        BoundingBox::new(Vec3::new(-2.0, 0.0, -2.0), Vec3::new(2.0, 0.5, 2.0)),
    );

    for (name, size) in [("large", 2.0), ("medium", 1.5), ("small", 1.0)] {
        let c = crate_box(&mut world, name, size);
        world.add_child_atop(pedestal, c);
    }

    // The statue is far too big; fit it into a 1x1x1 slot, then stack it.
    let statue = world.spawn("statue");
    world.set_model_bounds(
        statue,
        BoundingBox::new(Vec3::new(-3.0, -6.0, -3.0), Vec3::new(3.0, 6.0, 3.0)),
    );
    world.scale_to_fit(statue, &BoundingBox::new(Vec3::ZERO, Vec3::ONE));
    world.add_child_atop(pedestal, statue);

    log_vertical_report(&world, pedestal);

    match vertical_report(&world, pedestal).to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to serialize report: {}", e),
    }
}
