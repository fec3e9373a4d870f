use glam::Vec2;

use crate::params::Params;

/// World bounds. The origin is the bottom-left corner; `width` and `height`
/// are `xMax` and `yMax`.
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl Default for GameMap {
    fn default() -> Self {
        Self {
            width: Params::WORLD_WIDTH,
            height: Params::WORLD_HEIGHT,
        }
    }
}

impl GameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds for a viewport of `w` x `h` pixels: height is fixed at 100,
    /// width scales with the aspect ratio.
    pub fn for_viewport(w: u32, h: u32) -> Self {
        let mut map = Self::new();
        map.resize(w, h);
        map
    }

    /// Recompute bounds after a viewport resize. A zero height is ignored.
    pub fn resize(&mut self, w: u32, h: u32) {
        if h == 0 {
            return;
        }
        self.height = Params::WORLD_HEIGHT;
        self.width = Params::WORLD_HEIGHT * w as f32 / h as f32;
    }

    /// Ship spawn point
    pub fn ship_spawn(&self) -> Vec2 {
        Vec2::new(Params::SHIP_START_X, Params::SHIP_START_Y)
    }

    /// Toroidal wrap with a border tolerance. An entity that leaves past
    /// `-border` reappears at `max + border` and vice versa, so it never pops
    /// in at the visible edge. Returns whether either axis wrapped.
    pub fn wrap(&self, pos: &mut Vec2, border: f32) -> bool {
        let wrapped_x = wrap_axis(&mut pos.x, self.width, border);
        let wrapped_y = wrap_axis(&mut pos.y, self.height, border);
        wrapped_x || wrapped_y
    }
}

fn wrap_axis(value: &mut f32, max: f32, border: f32) -> bool {
    if *value < -border {
        *value = max + border;
        true
    } else if *value > max + border {
        *value = -border;
        true
    } else {
        false
    }
}
