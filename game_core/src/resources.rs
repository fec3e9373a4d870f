use rand::Rng;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Length of one tick in seconds
    pub now: f64, // Total elapsed simulation time
}

impl Time {
    pub fn new(dt: f32, now: f64) -> Self {
        Self { dt, now }
    }

    /// Step the clock by one tick. `now` is f64 so a tick still registers
    /// after weeks of uptime.
    pub fn advance(&mut self) {
        self.now += f64::from(self.dt);
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::Params::TICK_DT,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub points: u32,
    pub asteroids_destroyed: u32,
    pub ship_hits: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_kill(&mut self, points: u32) {
        self.points += points;
        self.asteroids_destroyed += 1;
    }

    pub fn record_ship_hit(&mut self) {
        self.ship_hits += 1;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform draw in `[min, max]`. Swapped bounds are reordered.
    pub fn uniform(&mut self, min: f32, max: f32) -> f32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.0.gen_range(lo..=hi)
    }

    /// Uniform integer in `[min, max)`; returns `min` for an empty range.
    pub fn index_in(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.0.gen_range(min..max)
    }

    pub fn coin_flip(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub photons_fired: u8,
    pub asteroids_spawned: u8,
    pub asteroids_destroyed: u8,
    pub ship_hit: bool,
    pub invulnerability_ended: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.photons_fired = 0;
        self.asteroids_spawned = 0;
        self.asteroids_destroyed = 0;
        self.ship_hit = false;
        self.invulnerability_ended = false;
    }
}

/// Discrete input from the host. Movement keys report held/released; fire
/// reports the press and the release so repeats can be suppressed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    TurnLeft(bool),
    TurnRight(bool),
    ThrustForward(bool),
    ThrustBackward(bool),
    Fire(bool),
}

/// Held-key state
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire_held: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Returns true when it is a fresh fire press.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::TurnLeft(held) => self.left = held,
            InputEvent::TurnRight(held) => self.right = held,
            InputEvent::ThrustForward(held) => self.up = held,
            InputEvent::ThrustBackward(held) => self.down = held,
            InputEvent::Fire(pressed) => {
                let fresh = pressed && !self.fire_held;
                self.fire_held = pressed;
                return fresh;
            }
        }
        false
    }

    /// +1 turning left, -1 turning right, 0 for neither or both
    pub fn turn(&self) -> f32 {
        self.left as i8 as f32 - self.right as i8 as f32
    }

    /// +1 thrusting forward, -1 backward, 0 for neither or both
    pub fn thrust(&self) -> f32 {
        self.up as i8 as f32 - self.down as i8 as f32
    }
}

/// Input events received between ticks
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, InputEvent> {
        self.events.drain(..)
    }
}

/// Ship invulnerability after a hit
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Invulnerability {
    #[default]
    Vulnerable,
    Invulnerable {
        since: f64, // simulation time of the hit
    },
}

impl Invulnerability {
    pub fn is_active(&self) -> bool {
        matches!(self, Invulnerability::Invulnerable { .. })
    }

    /// Start the grace period. Ignored while already invulnerable.
    pub fn trigger(&mut self, now: f64) {
        if !self.is_active() {
            *self = Invulnerability::Invulnerable { since: now };
        }
    }

    /// Clear the grace period once `duration` has elapsed. Returns true on the
    /// tick the ship becomes vulnerable again.
    pub fn update(&mut self, now: f64, duration: f32) -> bool {
        match *self {
            Invulnerability::Invulnerable { since } if now - since >= f64::from(duration) => {
                *self = Invulnerability::Vulnerable;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_record_kill() {
        let mut score = Score::new();
        score.record_kill(1);
        score.record_kill(1);
        assert_eq!(score.points, 2);
        assert_eq!(score.asteroids_destroyed, 2);
        assert_eq!(score.ship_hits, 0);
    }

    #[test]
    fn test_score_record_ship_hit() {
        let mut score = Score::new();
        score.record_ship_hit();
        assert_eq!(score.ship_hits, 1);
        assert_eq!(score.points, 0);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.photons_fired = 2;
        events.asteroids_spawned = 8;
        events.asteroids_destroyed = 1;
        events.ship_hit = true;
        events.invulnerability_ended = true;

        events.clear();

        assert_eq!(events.photons_fired, 0);
        assert_eq!(events.asteroids_spawned, 0);
        assert_eq!(events.asteroids_destroyed, 0);
        assert!(!events.ship_hit);
        assert!(!events.invulnerability_ended);
    }

    #[test]
    fn test_rng_uniform_stays_in_bounds() {
        let mut rng = GameRng::new(1);
        for _ in 0..1000 {
            let v = rng.uniform(-0.8, 0.8);
            assert!((-0.8..=0.8).contains(&v));
        }
        assert_eq!(rng.uniform(2.0, 2.0), 2.0);
        let swapped = rng.uniform(3.0, 1.0);
        assert!((1.0..=3.0).contains(&swapped));
    }

    #[test]
    fn test_rng_is_reproducible() {
        let mut a = GameRng::new(99);
        let mut b = GameRng::new(99);
        for _ in 0..10 {
            assert_eq!(a.uniform(0.0, 100.0), b.uniform(0.0, 100.0));
        }
    }

    #[test]
    fn test_input_axes() {
        let mut input = InputState::new();
        input.apply(InputEvent::TurnLeft(true));
        assert_eq!(input.turn(), 1.0);
        input.apply(InputEvent::TurnRight(true));
        assert_eq!(input.turn(), 0.0, "Both held cancel out");
        input.apply(InputEvent::TurnLeft(false));
        assert_eq!(input.turn(), -1.0);

        input.apply(InputEvent::ThrustBackward(true));
        assert_eq!(input.thrust(), -1.0);
    }

    #[test]
    fn test_fire_is_edge_triggered() {
        let mut input = InputState::new();
        assert!(input.apply(InputEvent::Fire(true)));
        assert!(!input.apply(InputEvent::Fire(true)), "Key repeat ignored");
        assert!(!input.apply(InputEvent::Fire(false)));
        assert!(input.apply(InputEvent::Fire(true)), "New press fires again");
    }

    #[test]
    fn test_input_queue_drain() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::Fire(true));
        queue.push(InputEvent::TurnLeft(true));

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![InputEvent::Fire(true), InputEvent::TurnLeft(true)]
        );
        assert!(queue.events.is_empty());
    }

    #[test]
    fn test_invulnerability_window() {
        let mut invuln = Invulnerability::default();
        assert!(!invuln.is_active());

        invuln.trigger(10.0);
        assert!(invuln.is_active());
        assert!(!invuln.update(10.0 + 0.001, 3.0));
        assert!(!invuln.update(12.99, 3.0));
        assert!(invuln.is_active());

        assert!(invuln.update(13.01, 3.0));
        assert!(!invuln.is_active());
    }

    #[test]
    fn test_clock_keeps_ticking_after_long_uptime() {
        // 2^20 s is where an f32 clock stops absorbing a 33 ms tick
        let start = 1_048_576.0;
        let mut time = Time::new(0.033, start);
        for _ in 0..100 {
            time.advance();
        }
        assert!((time.now - start - 3.3).abs() < 1e-6);
    }

    #[test]
    fn test_invulnerability_trigger_does_not_extend() {
        let mut invuln = Invulnerability::default();
        invuln.trigger(1.0);
        invuln.trigger(2.5);
        assert_eq!(invuln, Invulnerability::Invulnerable { since: 1.0 });
    }
}
