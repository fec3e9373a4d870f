use hecs::World;
use tracing::debug;

use super::collision::{asteroid_bodies, first_hit};
use crate::components::{Asteroid, Photon, PhotonState, Ship};
use crate::{Config, Events, GameMap, Score};

/// Advance the photon pool.
///
/// A Spawning photon takes its launch position and velocity from the ship
/// and becomes Flying without moving. A Flying photon integrates, then
/// destroys the first asteroid it overlaps (both go inactive), otherwise it
/// is removed once it wraps past the world edge.
pub fn update_photons(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    let ship = {
        let mut ship_query = world.query::<&Ship>();
        ship_query.iter().next().map(|(_e, ship)| *ship)
    };
    let mut bodies = asteroid_bodies(world);
    let mut destroyed = Vec::new();

    let mut photons: Vec<_> = world.query_mut::<&mut Photon>().into_iter().collect();
    photons.sort_by_key(|(_e, photon)| photon.slot);

    for (_entity, photon) in photons {
        match photon.state {
            PhotonState::Inactive => {}
            PhotonState::Spawning => match ship {
                Some(ship) => photon.launch(&ship, config.photon_speed),
                None => photon.deactivate(),
            },
            PhotonState::Flying => {
                photon.pos += photon.vel;

                if let Some(hit) = first_hit(&bodies, photon.pos, config.photon_radius) {
                    let body = bodies.remove(hit);
                    debug!(photon = photon.slot, asteroid = body.slot, "asteroid destroyed");
                    destroyed.push(body.slot);
                    photon.deactivate();
                    continue;
                }

                // Leaving the screen counts as a miss
                if map.wrap(&mut photon.pos, 0.0) {
                    photon.deactivate();
                }
            }
        }
    }

    if destroyed.is_empty() {
        return;
    }
    for (_entity, asteroid) in world.query_mut::<&mut Asteroid>() {
        if destroyed.contains(&asteroid.slot) {
            asteroid.deactivate();
            score.record_kill(config.asteroid_points);
            events.asteroids_destroyed += 1;
        }
    }
}
