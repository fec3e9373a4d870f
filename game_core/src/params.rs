/// Game tuning parameters for Asteroids
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // World (height is fixed, width follows the viewport aspect ratio)
    pub const WORLD_HEIGHT: f32 = 100.0;
    pub const WORLD_WIDTH: f32 = 100.0;

    // Pools
    pub const MAX_PHOTONS: usize = 8;
    pub const MAX_ASTEROIDS: usize = 8;
    pub const MAX_VERTICES: usize = 16;

    // Ship
    pub const SHIP_HEIGHT: f32 = 3.0;
    pub const SHIP_WIDTH: f32 = 2.0;
    pub const SHIP_MAX_SPEED: f32 = 3.0; // units per tick
    pub const SHIP_MAX_ROTATION: f32 = 0.3; // radians per tick
    pub const SHIP_ACCELERATION: f32 = 0.2;
    pub const SHIP_START_X: f32 = 25.0;
    pub const SHIP_START_Y: f32 = 25.0;

    // Photon
    pub const PHOTON_SPEED: f32 = 4.0;
    pub const PHOTON_RADIUS: f32 = 0.5;

    // Asteroid
    pub const ASTEROID_SIZE_MIN: f32 = 1.0;
    pub const ASTEROID_SIZE_MAX: f32 = 3.0;
    pub const ASTEROID_RADIUS_MIN: f32 = 2.0; // multiplied by size
    pub const ASTEROID_RADIUS_MAX: f32 = 3.0;
    pub const ASTEROID_SPEED_MAX: f32 = 0.8; // per axis
    pub const ASTEROID_SPIN_MAX: f32 = 0.2;
    pub const ASTEROID_MIN_VERTICES: usize = 6;
    pub const ASTEROID_COLLISION_MARGIN: f32 = 0.5;
    pub const ASTEROID_POINTS: u32 = 1;

    // Timing
    pub const TICK_DT: f32 = 0.033; // ~30 Hz
    pub const MAX_FRAME_DT: f32 = 0.25;
    pub const INVULNERABILITY_SECS: f32 = 3.0;

    // Numeric guard for velocity normalisation
    pub const SPEED_EPSILON: f32 = 1e-6;
}
