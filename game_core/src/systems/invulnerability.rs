use tracing::info;

use crate::{Config, Events, Invulnerability, Time};

/// End the post-hit grace period once it has run its course
pub fn update_invulnerability(
    invulnerability: &mut Invulnerability,
    time: &Time,
    config: &Config,
    events: &mut Events,
) {
    if invulnerability.update(time.now, config.invulnerability_secs) {
        events.invulnerability_ended = true;
        info!(now = time.now, "ship vulnerable again");
    }
}
