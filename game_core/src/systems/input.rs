use hecs::World;
use tracing::trace;

use crate::pools::fire_photon;
use crate::resources::*;

/// Apply queued input events to the held-key state. Each fresh fire press
/// claims a photon slot; a full pool drops the shot.
pub fn ingest_inputs(
    world: &mut World,
    input: &mut InputState,
    queue: &mut InputQueue,
    events: &mut Events,
) {
    for event in queue.drain() {
        if input.apply(event) {
            match fire_photon(world) {
                Some(_slot) => events.photons_fired += 1,
                None => trace!("photon pool full, shot dropped"),
            }
        }
    }
}
