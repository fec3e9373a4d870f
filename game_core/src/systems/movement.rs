use hecs::World;

use crate::components::{Asteroid, Ship};
use crate::{Config, GameMap, InputState, Params};

/// Turn, thrust, clamp speed, integrate, wrap
pub fn move_ship(world: &mut World, input: &InputState, map: &GameMap, config: &Config) {
    for (_entity, ship) in world.query_mut::<&mut Ship>() {
        ship.heading += config.ship_max_rotation * input.turn();

        let thrust = config.ship_acceleration * input.thrust();
        ship.vel += ship.forward() * thrust;
        ship.vel = clamp_speed(ship.vel, config.ship_max_speed);

        ship.pos += ship.vel;
        map.wrap(&mut ship.pos, ship.radius);
    }
}

/// Rescale `vel` to exactly `max_speed` when it is faster, keeping its
/// direction. Near-zero vectors are returned unchanged.
pub fn clamp_speed(vel: glam::Vec2, max_speed: f32) -> glam::Vec2 {
    let speed = vel.length();
    if speed > max_speed && speed > Params::SPEED_EPSILON {
        vel / speed * max_speed
    } else {
        vel
    }
}

/// Drift and spin every active asteroid, wrapping at its own radius
pub fn move_asteroids(world: &mut World, map: &GameMap) {
    for (_entity, asteroid) in world.query_mut::<&mut Asteroid>() {
        if !asteroid.is_active() {
            continue;
        }
        asteroid.pos += asteroid.vel;
        asteroid.heading += asteroid.spin;
        map.wrap(&mut asteroid.pos, asteroid.radius);
    }
}
