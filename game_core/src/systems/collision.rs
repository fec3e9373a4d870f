use glam::Vec2;
use hecs::World;
use tracing::info;

use crate::components::{Asteroid, Ship};
use crate::{Events, Invulnerability, Score, Time};

/// Circle-circle overlap: centres closer than the sum of the radii.
/// Purely positional, so fast small bodies can tunnel through thin ones.
pub fn collides(a: Vec2, b: Vec2, ra: f32, rb: f32) -> bool {
    a.distance_squared(b) < (ra + rb) * (ra + rb)
}

/// Collision circle of a live asteroid
#[derive(Debug, Clone, Copy)]
pub struct AsteroidBody {
    pub slot: usize,
    pub pos: Vec2,
    pub radius: f32,
}

/// Active asteroids in slot order
pub fn asteroid_bodies(world: &World) -> Vec<AsteroidBody> {
    let mut bodies: Vec<AsteroidBody> = world
        .query::<&Asteroid>()
        .iter()
        .filter(|(_e, a)| a.is_active())
        .map(|(_e, a)| AsteroidBody {
            slot: a.slot,
            pos: a.pos,
            radius: a.radius,
        })
        .collect();
    bodies.sort_by_key(|b| b.slot);
    bodies
}

/// First body (in slot order) overlapping the circle at `pos`
pub fn first_hit(bodies: &[AsteroidBody], pos: Vec2, radius: f32) -> Option<usize> {
    bodies
        .iter()
        .position(|body| collides(body.pos, pos, body.radius, radius))
}

/// Asteroid vs ship. Skipped while the ship is invulnerable; a hit starts
/// the invulnerability window, so at most one hit lands per tick.
pub fn check_ship_collisions(
    world: &mut World,
    time: &Time,
    invulnerability: &mut Invulnerability,
    score: &mut Score,
    events: &mut Events,
) {
    if invulnerability.is_active() {
        return;
    }

    let ship = {
        let mut ship_query = world.query::<&Ship>();
        ship_query.iter().next().map(|(_e, ship)| *ship)
    };
    let Some(ship) = ship else {
        return; // No ship in world
    };

    let bodies = asteroid_bodies(world);
    if let Some(hit) = first_hit(&bodies, ship.pos, ship.radius) {
        invulnerability.trigger(time.now);
        score.record_ship_hit();
        events.ship_hit = true;
        info!(
            asteroid = bodies[hit].slot,
            x = ship.pos.x,
            y = ship.pos.y,
            hits = score.ship_hits,
            "ship hit, invulnerable"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::{create_pools, spawn_asteroid};
    use crate::{Config, GameRng};

    fn setup_world() -> (World, Config, GameRng, Time, Invulnerability, Score, Events) {
        let mut world = World::new();
        let config = Config::new();
        create_pools(&mut world, Vec2::new(50.0, 50.0), &config);
        (
            world,
            config,
            GameRng::new(5),
            Time::new(0.033, 4.0),
            Invulnerability::default(),
            Score::new(),
            Events::new(),
        )
    }

    fn place_asteroid(world: &mut World, config: &Config, rng: &mut GameRng, pos: Vec2) -> usize {
        let slot = spawn_asteroid(world, pos, 1.0, config, rng).unwrap();
        for (_e, asteroid) in world.query_mut::<&mut Asteroid>() {
            if asteroid.slot == slot {
                asteroid.radius = 2.0;
            }
        }
        slot
    }

    #[test]
    fn test_collides_overlap_and_gap() {
        assert!(collides(Vec2::new(0.0, 0.0), Vec2::new(2.9, 0.0), 2.0, 1.0));
        assert!(!collides(Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0), 2.0, 1.0), "Touching is not overlapping");
        assert!(!collides(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0), 2.0, 1.0));
    }

    #[test]
    fn test_collides_same_position() {
        let p = Vec2::new(40.0, 60.0);
        assert!(collides(p, p, 2.0, 1.0));
    }

    #[test]
    fn test_collides_is_symmetric() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.5, -2.0),
            Vec2::new(3.0, 4.0),
            Vec2::new(-7.25, 0.5),
        ];
        let radii = [0.0, 0.5, 1.0, 2.5];
        for &a in &points {
            for &b in &points {
                for &ra in &radii {
                    for &rb in &radii {
                        assert_eq!(collides(a, b, ra, rb), collides(b, a, rb, ra));
                    }
                }
            }
        }
    }

    #[test]
    fn test_first_hit_prefers_lowest_slot() {
        let bodies = [
            AsteroidBody { slot: 1, pos: Vec2::new(10.0, 10.0), radius: 2.0 },
            AsteroidBody { slot: 4, pos: Vec2::new(11.0, 10.0), radius: 2.0 },
        ];
        assert_eq!(first_hit(&bodies, Vec2::new(10.5, 10.0), 0.5), Some(0));
        assert_eq!(first_hit(&bodies, Vec2::new(50.0, 50.0), 0.5), None);
    }

    #[test]
    fn test_ship_hit_starts_invulnerability() {
        let (mut world, config, mut rng, time, mut invuln, mut score, mut events) = setup_world();
        place_asteroid(&mut world, &config, &mut rng, Vec2::new(51.0, 50.0));

        check_ship_collisions(&mut world, &time, &mut invuln, &mut score, &mut events);

        assert_eq!(invuln, Invulnerability::Invulnerable { since: 4.0 });
        assert!(events.ship_hit);
        assert_eq!(score.ship_hits, 1);
    }

    #[test]
    fn test_invulnerable_ship_ignores_asteroids() {
        let (mut world, config, mut rng, time, mut invuln, mut score, mut events) = setup_world();
        place_asteroid(&mut world, &config, &mut rng, Vec2::new(50.0, 50.0));
        invuln.trigger(3.0);

        check_ship_collisions(&mut world, &time, &mut invuln, &mut score, &mut events);

        assert_eq!(invuln, Invulnerability::Invulnerable { since: 3.0 }, "Window not extended");
        assert!(!events.ship_hit);
        assert_eq!(score.ship_hits, 0);
    }

    #[test]
    fn test_distant_asteroid_misses_ship() {
        let (mut world, config, mut rng, time, mut invuln, mut score, mut events) = setup_world();
        place_asteroid(&mut world, &config, &mut rng, Vec2::new(10.0, 90.0));

        check_ship_collisions(&mut world, &time, &mut invuln, &mut score, &mut events);

        assert!(!invuln.is_active());
        assert!(!events.ship_hit);
    }
}
