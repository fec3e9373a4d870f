//! Canvas client for Asteroids
//!
//! Presentation and input adapter around the `game_core` simulation. The page
//! owns a `Client`, forwards keyboard events and resizes, and calls `frame`
//! from `requestAnimationFrame`; the client runs however many fixed 30 Hz
//! ticks are due and redraws after each one.

pub mod camera;
pub mod input;
#[cfg(target_arch = "wasm32")]
mod renderer;

pub use input::key_to_input;

#[cfg(target_arch = "wasm32")]
pub use wasm::Client;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use game_core::{GameMap, GameWorld, Params, TickClock};
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use crate::input::key_to_input;
    use crate::renderer::Renderer;

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
    }

    /// Main client state
    #[wasm_bindgen]
    pub struct Client {
        game: GameWorld,
        clock: TickClock,
        renderer: Renderer,
    }

    #[wasm_bindgen]
    impl Client {
        #[wasm_bindgen(constructor)]
        pub fn new(canvas: HtmlCanvasElement) -> Result<Client, JsValue> {
            let renderer = Renderer::new(canvas)?;
            let (width, height) = renderer.size;
            let seed = (js_sys::Date::now() as u64) ^ (js_sys::Math::random() * u32::MAX as f64) as u64;

            let mut game = GameWorld::new(seed);
            game.map = GameMap::for_viewport(width, height);
            web_sys::console::log_1(
                &format!(
                    "Asteroids: world {:.1}x{:.1}, seed {}",
                    game.map.width, game.map.height, seed
                )
                .into(),
            );

            Ok(Client {
                game,
                clock: TickClock::new(Params::TICK_DT, Params::MAX_FRAME_DT),
                renderer,
            })
        }

        /// Canvas resized; world width follows the aspect ratio
        pub fn resize(&mut self, width: u32, height: u32) {
            self.renderer.resize(width, height);
            self.game.resize(width, height);
        }

        /// Returns true when the key belongs to the game and the page should
        /// call `preventDefault`.
        pub fn key_down(&mut self, key: &str) -> bool {
            match key_to_input(key, true) {
                Some(event) => {
                    self.game.handle_input(event);
                    true
                }
                None => false,
            }
        }

        pub fn key_up(&mut self, key: &str) -> bool {
            match key_to_input(key, false) {
                Some(event) => {
                    self.game.handle_input(event);
                    true
                }
                None => false,
            }
        }

        /// Run every tick due by `now_ms` (a `requestAnimationFrame` timestamp)
        pub fn frame(&mut self, now_ms: f64) {
            let due = self.clock.advance_to(now_ms);
            for _ in 0..due {
                self.game.tick(&mut self.renderer);
            }
        }

        pub fn score(&self) -> u32 {
            self.game.score.points
        }

        pub fn ship_hits(&self) -> u32 {
            self.game.score.ship_hits
        }
    }
}
