use glam::Vec2;
use hecs::World;
use tracing::debug;

use crate::components::{Asteroid, Photon, Ship};
use crate::error::GameResult;
use crate::pools;
use crate::{
    step, Config, Events, Frame, GameMap, GameRng, InputEvent, InputQueue, InputState,
    Invulnerability, Presenter, Score, Time,
};

/// The whole game: entity pools plus every resource the tick needs.
/// One owner, one thread; hosts mutate it only through these methods.
pub struct GameWorld {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input: InputState,
    pub input_queue: InputQueue,
    pub invulnerability: Invulnerability,
    pub rng: GameRng,
    pub ticks: u64,
}

impl GameWorld {
    pub fn new(seed: u64) -> Self {
        Self::build(Config::new(), GameMap::new(), seed)
    }

    /// Start from a validated configuration
    pub fn with_config(config: Config, map: GameMap, seed: u64) -> GameResult<Self> {
        config.validate()?;
        Ok(Self::build(config, map, seed))
    }

    fn build(config: Config, map: GameMap, seed: u64) -> Self {
        let mut world = World::new();
        pools::create_pools(&mut world, map.ship_spawn(), &config);
        debug!(seed, width = map.width, height = map.height, "game world created");

        Self {
            world,
            time: Time::new(config.tick_dt, 0.0),
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            input: InputState::new(),
            input_queue: InputQueue::new(),
            invulnerability: Invulnerability::default(),
            rng: GameRng::new(seed),
            ticks: 0,
        }
    }

    /// Queue an input event for the next tick
    pub fn handle_input(&mut self, event: InputEvent) {
        self.input_queue.push(event);
    }

    pub fn turn_left(&mut self, held: bool) {
        self.handle_input(InputEvent::TurnLeft(held));
    }

    pub fn turn_right(&mut self, held: bool) {
        self.handle_input(InputEvent::TurnRight(held));
    }

    pub fn thrust_forward(&mut self, held: bool) {
        self.handle_input(InputEvent::ThrustForward(held));
    }

    pub fn thrust_backward(&mut self, held: bool) {
        self.handle_input(InputEvent::ThrustBackward(held));
    }

    /// Fire press. Repeats are ignored until [`GameWorld::release_fire`].
    pub fn fire(&mut self) {
        self.handle_input(InputEvent::Fire(true));
    }

    pub fn release_fire(&mut self) {
        self.handle_input(InputEvent::Fire(false));
    }

    /// Claim a photon slot immediately, bypassing the input queue
    pub fn fire_photon(&mut self) -> Option<usize> {
        pools::fire_photon(&mut self.world)
    }

    pub fn spawn_asteroid(&mut self, pos: Vec2, size: f32) -> Option<usize> {
        pools::spawn_asteroid(&mut self.world, pos, size, &self.config, &mut self.rng)
    }

    pub fn deactivate_photon(&mut self, index: usize) -> GameResult<()> {
        pools::deactivate_photon(&mut self.world, index)
    }

    pub fn deactivate_asteroid(&mut self, index: usize) -> GameResult<()> {
        pools::deactivate_asteroid(&mut self.world, index)
    }

    /// Viewport changed; world width follows the new aspect ratio
    pub fn resize(&mut self, w: u32, h: u32) {
        self.map.resize(w, h);
        debug!(width = self.map.width, height = self.map.height, "world resized");
    }

    /// Run the simulation phases of one tick without presenting
    pub fn advance(&mut self) {
        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.input,
            &mut self.input_queue,
            &mut self.invulnerability,
            &mut self.rng,
        );
        self.ticks += 1;
    }

    /// One full tick: simulate, then hand the new frame to the presenter
    pub fn tick(&mut self, presenter: &mut dyn Presenter) {
        self.advance();
        presenter.present(&self.frame());
    }

    pub fn frame(&self) -> Frame {
        Frame::build(
            self.ticks,
            Vec2::new(self.map.width, self.map.height),
            self.ship(),
            &self.photons(),
            &self.asteroids(),
            &self.invulnerability,
            &self.score,
            &self.config,
        )
    }

    pub fn ship(&self) -> Option<Ship> {
        pools::ship(&self.world)
    }

    /// Move the ship and zero its velocity
    pub fn place_ship(&mut self, pos: Vec2, heading: f32) {
        for (_entity, ship) in self.world.query_mut::<&mut Ship>() {
            ship.pos = pos;
            ship.heading = heading;
            ship.vel = Vec2::ZERO;
        }
    }

    pub fn photons(&self) -> Vec<Photon> {
        pools::photons(&self.world)
    }

    pub fn asteroids(&self) -> Vec<Asteroid> {
        pools::asteroids(&self.world)
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerability.is_active()
    }
}
