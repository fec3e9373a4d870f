use glam::Vec2;
use hecs::World;

use crate::components::Asteroid;
use crate::pools::spawn_asteroid;
use crate::{Config, Events, GameMap, GameRng};

/// Refill every inactive asteroid slot so the pool stays saturated.
/// New asteroids enter on the left or right edge at a random height.
pub fn spawn_asteroids(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let free = world
        .query::<&Asteroid>()
        .iter()
        .filter(|(_e, asteroid)| !asteroid.is_active())
        .count();

    for _ in 0..free {
        let x = if rng.coin_flip() { 0.0 } else { map.width };
        let y = rng.uniform(0.0, map.height);
        let size = rng.uniform(config.asteroid_size_min, config.asteroid_size_max);
        if spawn_asteroid(world, Vec2::new(x, y), size, config, rng).is_some() {
            events.asteroids_spawned += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::{active_asteroid_count, asteroids, create_pools, deactivate_asteroid};
    use crate::Params;

    fn setup_world() -> (World, GameMap, Config, GameRng, Events) {
        let mut world = World::new();
        let config = Config::new();
        create_pools(&mut world, Vec2::new(25.0, 25.0), &config);
        (
            world,
            GameMap::for_viewport(800, 500),
            config,
            GameRng::new(8),
            Events::new(),
        )
    }

    #[test]
    fn test_spawner_fills_pool() {
        let (mut world, map, config, mut rng, mut events) = setup_world();

        spawn_asteroids(&mut world, &map, &config, &mut rng, &mut events);

        assert_eq!(active_asteroid_count(&world), Params::MAX_ASTEROIDS);
        assert_eq!(events.asteroids_spawned as usize, Params::MAX_ASTEROIDS);
    }

    #[test]
    fn test_spawn_positions_on_side_edges() {
        let (mut world, map, config, mut rng, mut events) = setup_world();

        spawn_asteroids(&mut world, &map, &config, &mut rng, &mut events);

        for asteroid in asteroids(&world) {
            assert!(
                asteroid.pos.x == 0.0 || asteroid.pos.x == map.width,
                "x = {} is not an edge",
                asteroid.pos.x
            );
            assert!((0.0..=map.height).contains(&asteroid.pos.y));
        }
    }

    #[test]
    fn test_spawner_refills_only_freed_slots() {
        let (mut world, map, config, mut rng, mut events) = setup_world();
        spawn_asteroids(&mut world, &map, &config, &mut rng, &mut events);
        let before = asteroids(&world);

        deactivate_asteroid(&mut world, 3).unwrap();
        events.clear();
        spawn_asteroids(&mut world, &map, &config, &mut rng, &mut events);

        let after = asteroids(&world);
        assert_eq!(events.asteroids_spawned, 1);
        assert_eq!(active_asteroid_count(&world), Params::MAX_ASTEROIDS);
        assert_eq!(after[0].pos, before[0].pos, "Live slots untouched");
        assert!(after[3].is_active());
    }

    #[test]
    fn test_full_pool_spawns_nothing() {
        let (mut world, map, config, mut rng, mut events) = setup_world();
        spawn_asteroids(&mut world, &map, &config, &mut rng, &mut events);
        events.clear();

        spawn_asteroids(&mut world, &map, &config, &mut rng, &mut events);

        assert_eq!(events.asteroids_spawned, 0);
    }
}
