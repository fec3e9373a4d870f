//! Read-only view of the world handed to a renderer once per tick.

use glam::Vec2;

use crate::components::{Asteroid, Photon, PhotonState, Ship};
use crate::{Config, Invulnerability, Score};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipView {
    pub pos: Vec2,
    pub heading: f32,
    pub outline: [Vec2; 4],
    pub invulnerable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotonView {
    pub pos: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidView {
    pub pos: Vec2,
    pub heading: f32,
    /// Polygon around the centre, unrotated
    pub vertices: Vec<Vec2>,
}

impl AsteroidView {
    /// Polygon rotated by `heading` and moved to `pos`
    pub fn world_outline(&self) -> impl Iterator<Item = Vec2> + '_ {
        let rotation = Vec2::from_angle(self.heading);
        self.vertices.iter().map(move |v| self.pos + rotation.rotate(*v))
    }
}

/// Everything a renderer draws for one tick
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub tick: u64,
    pub world_size: Vec2,
    pub ship: Option<ShipView>,
    pub photons: Vec<PhotonView>,
    pub asteroids: Vec<AsteroidView>,
    pub score: u32,
    pub ship_hits: u32,
}

impl Frame {
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        tick: u64,
        world_size: Vec2,
        ship: Option<Ship>,
        photons: &[Photon],
        asteroids: &[Asteroid],
        invulnerability: &Invulnerability,
        score: &Score,
        config: &Config,
    ) -> Self {
        Self {
            tick,
            world_size,
            ship: ship.map(|ship| ShipView {
                pos: ship.pos,
                heading: ship.heading,
                outline: ship.outline(config.ship_width, config.ship_height),
                invulnerable: invulnerability.is_active(),
            }),
            photons: photons
                .iter()
                // Spawning photons have no position until their launch tick
                .filter(|p| p.state == PhotonState::Flying)
                .map(|p| PhotonView { pos: p.pos })
                .collect(),
            asteroids: asteroids
                .iter()
                .filter(|a| a.is_active())
                .map(|a| AsteroidView {
                    pos: a.pos,
                    heading: a.heading,
                    vertices: a.vertices().to_vec(),
                })
                .collect(),
            score: score.points,
            ship_hits: score.ship_hits,
        }
    }
}

/// Presentation adapter notified at the end of every tick.
pub trait Presenter {
    fn present(&mut self, frame: &Frame);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_outline_rotates_and_translates() {
        let view = AsteroidView {
            pos: Vec2::new(10.0, 20.0),
            heading: std::f32::consts::PI,
            vertices: vec![Vec2::new(0.0, 2.0), Vec2::new(1.0, 0.0)],
        };
        let outline: Vec<Vec2> = view.world_outline().collect();
        assert!((outline[0] - Vec2::new(10.0, 18.0)).length() < 1e-5);
        assert!((outline[1] - Vec2::new(9.0, 20.0)).length() < 1e-5);
    }

    #[test]
    fn test_frame_skips_inactive_slots() {
        let config = Config::new();
        let mut photon = Photon::new(0);
        photon.state = PhotonState::Flying;
        photon.pos = Vec2::new(5.0, 5.0);
        let photons = [photon, Photon::new(1)];
        let asteroids = [Asteroid::new(0)];

        let frame = Frame::build(
            3,
            Vec2::new(100.0, 100.0),
            Some(Ship::new(Vec2::new(25.0, 25.0), config.ship_height)),
            &photons,
            &asteroids,
            &Invulnerability::Invulnerable { since: 0.0 },
            &Score::new(),
            &config,
        );

        assert_eq!(frame.photons, vec![PhotonView { pos: Vec2::new(5.0, 5.0) }]);
        assert!(frame.asteroids.is_empty());
        assert!(frame.ship.map(|s| s.invulnerable).unwrap_or(false));
    }

    #[test]
    fn test_frame_hides_photon_before_launch() {
        let config = Config::new();
        let mut pending = Photon::new(0);
        pending.state = PhotonState::Spawning;
        pending.pos = Vec2::new(80.0, 10.0); // stale position from an earlier flight

        let frame = Frame::build(
            1,
            Vec2::new(100.0, 100.0),
            None,
            &[pending],
            &[],
            &Invulnerability::default(),
            &Score::new(),
            &config,
        );

        assert!(frame.photons.is_empty());
    }
}
