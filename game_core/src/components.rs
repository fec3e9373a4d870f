use glam::Vec2;

use crate::params::Params;
use crate::{Config, GameRng};

/// Unit vector the ship (or an asteroid) faces for a heading in radians.
/// Heading 0 points along +y; positive headings turn counter-clockwise.
pub fn facing(heading: f32) -> Vec2 {
    Vec2::new(-heading.sin(), heading.cos())
}

/// Ship component - the player's ship
#[derive(Debug, Clone, Copy)]
pub struct Ship {
    pub pos: Vec2,
    pub heading: f32, // radians
    pub vel: Vec2,    // units per tick
    pub radius: f32,
}

impl Ship {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            heading: 0.0,
            vel: Vec2::ZERO,
            radius,
        }
    }

    pub fn forward(&self) -> Vec2 {
        facing(self.heading)
    }

    /// Tip of the ship, where photons leave the hull
    pub fn nose(&self) -> Vec2 {
        self.pos + self.forward() * self.radius
    }

    /// World-space line loop: nose, left wing, tail notch, right wing.
    pub fn outline(&self, width: f32, height: f32) -> [Vec2; 4] {
        let rotation = Vec2::from_angle(self.heading);
        [
            Vec2::new(0.0, height),
            Vec2::new(-width, -height),
            Vec2::new(0.0, -height / 2.0),
            Vec2::new(width, -height),
        ]
        .map(|corner| self.pos + rotation.rotate(corner))
    }
}

/// Photon pool slot state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhotonState {
    #[default]
    Inactive,
    /// Fired, waiting for the next tick to take position and velocity from the ship
    Spawning,
    Flying,
}

/// Photon component - one slot of the fixed photon pool
#[derive(Debug, Clone, Copy)]
pub struct Photon {
    pub slot: usize,
    pub state: PhotonState,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Photon {
    pub fn new(slot: usize) -> Self {
        Self {
            slot,
            state: PhotonState::Inactive,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state != PhotonState::Inactive
    }

    /// Fix position and velocity relative to the ship and start flying.
    /// The photon inherits the ship's momentum.
    pub fn launch(&mut self, ship: &Ship, speed: f32) {
        self.pos = ship.nose();
        self.vel = ship.forward() * speed + ship.vel;
        self.state = PhotonState::Flying;
    }

    pub fn deactivate(&mut self) {
        self.state = PhotonState::Inactive;
        self.vel = Vec2::ZERO;
    }
}

/// Asteroid pool slot state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AsteroidState {
    #[default]
    Inactive,
    Active,
}

/// Asteroid component - one slot of the fixed asteroid pool
#[derive(Debug, Clone, Copy)]
pub struct Asteroid {
    pub slot: usize,
    pub state: AsteroidState,
    pub pos: Vec2,
    pub vel: Vec2,
    pub heading: f32,
    pub spin: f32, // radians per tick
    pub radius: f32,
    vertices: [Vec2; Params::MAX_VERTICES],
    vertex_count: usize,
}

impl Asteroid {
    pub fn new(slot: usize) -> Self {
        Self {
            slot,
            state: AsteroidState::Inactive,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            heading: 0.0,
            spin: 0.0,
            radius: 0.0,
            vertices: [Vec2::ZERO; Params::MAX_VERTICES],
            vertex_count: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == AsteroidState::Active
    }

    /// Polygon around the asteroid's centre, before rotation by `heading`.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices[..self.vertex_count]
    }

    /// Bring the slot to life at `pos`. Velocity, spin and shape are random;
    /// `size` scales the polygon. Vertices sit at evenly spaced angles with a
    /// random radius each, and the largest radius sets the collision circle.
    pub fn activate(&mut self, pos: Vec2, size: f32, config: &Config, rng: &mut GameRng) {
        self.pos = pos;
        self.heading = 0.0;
        self.vel = Vec2::new(
            rng.uniform(-config.asteroid_speed_max, config.asteroid_speed_max),
            rng.uniform(-config.asteroid_speed_max, config.asteroid_speed_max),
        );
        self.spin = rng.uniform(-config.asteroid_spin_max, config.asteroid_spin_max);

        let max_vertices = config.asteroid_max_vertices.min(Params::MAX_VERTICES);
        let min_vertices = config.asteroid_min_vertices.min(max_vertices.saturating_sub(1));
        self.vertex_count = rng.index_in(min_vertices, max_vertices);

        let mut largest = 0.0_f32;
        for i in 0..self.vertex_count {
            let theta = std::f32::consts::TAU * i as f32 / self.vertex_count as f32;
            let r = size * rng.uniform(config.asteroid_radius_min, config.asteroid_radius_max);
            self.vertices[i] = facing(theta) * r;
            largest = largest.max(r);
        }
        self.radius = largest + config.asteroid_collision_margin;
        self.state = AsteroidState::Active;
    }

    pub fn deactivate(&mut self) {
        self.state = AsteroidState::Inactive;
    }
}
