pub mod clock;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod map;
pub mod params;
pub mod pools;
pub mod present;
pub mod resources;
pub mod systems;

pub use clock::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use present::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one fixed tick of the Asteroids simulation.
///
/// Phase order matters for collision timing: an asteroid spawned this tick
/// can hit the ship this tick, and a photon fired before the tick launches
/// in it but cannot score until the next.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input: &mut InputState,
    input_queue: &mut InputQueue,
    invulnerability: &mut Invulnerability,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 0. Apply input received since the last tick (held keys, fire requests)
    ingest_inputs(world, input, input_queue, events);

    // 1. Refill empty asteroid slots
    spawn_asteroids(world, map, config, rng, events);

    // 2. Move ship
    move_ship(world, input, map, config);

    // 3. Move asteroids, then test them against the ship
    move_asteroids(world, map);
    check_ship_collisions(world, time, invulnerability, score, events);

    // 4. Launch, move and collide photons
    update_photons(world, map, config, score, events);

    // 5. Expire invulnerability
    update_invulnerability(invulnerability, time, config, events);

    // Update time
    time.advance();
}
