//! Fixed-capacity entity pools.
//!
//! Every slot is spawned once into the hecs world and never despawned; a
//! slot's state tag says whether it currently holds a live entity. Allocation
//! is a scan for the lowest free slot index.

use glam::Vec2;
use hecs::{Entity, World};
use tracing::debug;

use crate::components::*;
use crate::error::{GameError, GameResult};
use crate::params::Params;
use crate::{Config, GameRng};

/// Spawn the ship and every photon and asteroid slot.
pub fn create_pools(world: &mut World, ship_pos: Vec2, config: &Config) -> Entity {
    let ship = world.spawn((Ship::new(ship_pos, config.ship_height),));
    for slot in 0..Params::MAX_PHOTONS {
        world.spawn((Photon::new(slot),));
    }
    for slot in 0..Params::MAX_ASTEROIDS {
        world.spawn((Asteroid::new(slot),));
    }
    ship
}

/// Claim the lowest inactive photon slot and mark it Spawning. The launch
/// position and velocity are fixed on the next tick. Returns `None` when the
/// pool is full.
pub fn fire_photon(world: &mut World) -> Option<usize> {
    let photon = world
        .query_mut::<&mut Photon>()
        .into_iter()
        .map(|(_e, photon)| photon)
        .filter(|photon| !photon.is_active())
        .min_by_key(|photon| photon.slot)?;

    photon.state = PhotonState::Spawning;
    debug!(slot = photon.slot, "photon fired");
    Some(photon.slot)
}

/// Activate the lowest inactive asteroid slot at `pos` with a random shape
/// scaled by `size`. Returns `None` when every slot is live.
pub fn spawn_asteroid(
    world: &mut World,
    pos: Vec2,
    size: f32,
    config: &Config,
    rng: &mut GameRng,
) -> Option<usize> {
    let asteroid = world
        .query_mut::<&mut Asteroid>()
        .into_iter()
        .map(|(_e, asteroid)| asteroid)
        .filter(|asteroid| !asteroid.is_active())
        .min_by_key(|asteroid| asteroid.slot)?;

    asteroid.activate(pos, size, config, rng);
    debug!(
        slot = asteroid.slot,
        x = pos.x,
        y = pos.y,
        radius = asteroid.radius,
        "asteroid spawned"
    );
    Some(asteroid.slot)
}

pub fn deactivate_photon(world: &mut World, index: usize) -> GameResult<()> {
    let photon = world
        .query_mut::<&mut Photon>()
        .into_iter()
        .map(|(_e, photon)| photon)
        .find(|photon| photon.slot == index)
        .ok_or(GameError::InvalidSlot {
            index,
            capacity: Params::MAX_PHOTONS,
        })?;
    photon.deactivate();
    Ok(())
}

pub fn deactivate_asteroid(world: &mut World, index: usize) -> GameResult<()> {
    let asteroid = world
        .query_mut::<&mut Asteroid>()
        .into_iter()
        .map(|(_e, asteroid)| asteroid)
        .find(|asteroid| asteroid.slot == index)
        .ok_or(GameError::InvalidSlot {
            index,
            capacity: Params::MAX_ASTEROIDS,
        })?;
    asteroid.deactivate();
    Ok(())
}

/// Copy of the ship, if one exists
pub fn ship(world: &World) -> Option<Ship> {
    world.query::<&Ship>().iter().next().map(|(_e, ship)| *ship)
}

pub fn active_asteroid_count(world: &World) -> usize {
    world
        .query::<&Asteroid>()
        .iter()
        .filter(|(_e, asteroid)| asteroid.is_active())
        .count()
}

pub fn active_photon_count(world: &World) -> usize {
    world
        .query::<&Photon>()
        .iter()
        .filter(|(_e, photon)| photon.is_active())
        .count()
}

/// Slot copies sorted by slot index
pub fn photons(world: &World) -> Vec<Photon> {
    let mut photons: Vec<Photon> = world.query::<&Photon>().iter().map(|(_e, p)| *p).collect();
    photons.sort_by_key(|p| p.slot);
    photons
}

/// Slot copies sorted by slot index
pub fn asteroids(world: &World) -> Vec<Asteroid> {
    let mut asteroids: Vec<Asteroid> = world
        .query::<&Asteroid>()
        .iter()
        .map(|(_e, a)| *a)
        .collect();
    asteroids.sort_by_key(|a| a.slot);
    asteroids
}
