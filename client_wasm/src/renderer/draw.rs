use game_core::{Frame, Params};
use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Camera;

const BACKGROUND: &str = "#000";
const LINE: &str = "#fff";
const SHIP_BLINK: &str = "#555";

pub fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    camera: &Camera,
    size: (u32, u32),
    frame: &Frame,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, size.0 as f64, size.1 as f64);
    ctx.set_line_width(1.0);

    if let Some(ship) = &frame.ship {
        // Blink while invulnerable
        let color = if ship.invulnerable && frame.tick % 8 < 4 {
            SHIP_BLINK
        } else {
            LINE
        };
        ctx.set_stroke_style_str(color);
        line_loop(ctx, camera, ship.outline.iter().copied());
    }

    ctx.set_stroke_style_str(LINE);
    for asteroid in &frame.asteroids {
        line_loop(ctx, camera, asteroid.world_outline());
    }

    ctx.set_fill_style_str(LINE);
    for photon in &frame.photons {
        let center = camera.to_screen(photon.pos);
        ctx.begin_path();
        ctx.arc(
            center.x as f64,
            center.y as f64,
            Params::PHOTON_RADIUS as f64 * camera.scale as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        ctx.fill();
    }

    ctx.set_font("16px monospace");
    ctx.fill_text(&format!("SCORE {}", frame.score), 10.0, 20.0)?;
    ctx.fill_text(&format!("HITS {}", frame.ship_hits), 10.0, 40.0)?;
    Ok(())
}

fn line_loop(ctx: &CanvasRenderingContext2d, camera: &Camera, points: impl Iterator<Item = Vec2>) {
    ctx.begin_path();
    for (i, point) in points.enumerate() {
        let p = camera.to_screen(point);
        if i == 0 {
            ctx.move_to(p.x as f64, p.y as f64);
        } else {
            ctx.line_to(p.x as f64, p.y as f64);
        }
    }
    ctx.close_path();
    ctx.stroke();
}
