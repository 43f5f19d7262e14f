//! Title and credits screen shown until the first key press

use glam::Vec2;

use crate::consts::{WIN_H, WIN_W};
use crate::renderer::{DrawList, Font, rgb, rgba};
use crate::sim::motion::{credits_blink, sun_pulse};

pub const PANEL_W: f32 = 600.0;
pub const PANEL_H: f32 = 500.0;

pub const TITLE: &str = "SUMMER BEACH PARADISE";
pub const SUBTITLE: &str = "Summer Vacation Simulation";
pub const CREATORS: [&str; 3] = [
    "Will Gabriel C. Padilla - 202310870",
    "Josephine J. Santander - 202310348",
    "Paul Lewis J. Villamil - 202310868",
];
pub const CONTROLS: &str = "Mouse Drag: Move Umbrella | 'N': Night Mode | +/-: Zoom";
pub const PROMPT: &str = "- PRESS ANY KEY TO START -";

const NAME_SPACING: f32 = 30.0;

/// Layout is fixed; only the sun halo and the prompt animate with `t`
pub fn draw_credits(list: &mut DrawList, t: f32) {
    list.set_lighting(false);

    let dusk = rgb(0.2, 0.1, 0.4);
    let glow = rgb(0.9, 0.5, 0.3);
    list.gradient_quad(
        [
            Vec2::new(0.0, WIN_H),
            Vec2::new(WIN_W, WIN_H),
            Vec2::new(WIN_W, 0.0),
            Vec2::new(0.0, 0.0),
        ],
        [dusk, dusk, glow, glow],
    );

    let panel_x = (WIN_W - PANEL_W) / 2.0;
    let panel_y = (WIN_H - PANEL_H) / 2.0;
    list.filled_rect(panel_x, panel_y, PANEL_W, PANEL_H, rgba(1.0, 1.0, 1.0, 0.15));
    list.line_loop(
        &[
            Vec2::new(panel_x, panel_y),
            Vec2::new(panel_x + PANEL_W, panel_y),
            Vec2::new(panel_x + PANEL_W, panel_y + PANEL_H),
            Vec2::new(panel_x, panel_y + PANEL_H),
        ],
        2.0,
        rgba(1.0, 1.0, 1.0, 0.5),
    );

    let cx = WIN_W / 2.0;
    let sun_y = panel_y + PANEL_H - 60.0;
    list.filled_circle(cx, sun_y, 40.0, 48, rgba(1.0, 0.9, 0.4, 0.9));
    list.filled_circle(cx, sun_y, 50.0 * sun_pulse(t), 48, rgba(1.0, 1.0, 1.0, 0.2));

    let white = rgb(1.0, 1.0, 1.0);
    let start_y = panel_y + PANEL_H - 140.0;
    list.centered_text(cx, start_y, Font::TimesRoman24, TITLE, rgb(1.0, 0.95, 0.8));
    list.centered_text(cx, start_y - 40.0, Font::Helvetica18, SUBTITLE, white);
    list.line(
        Vec2::new(cx - 100.0, start_y - 60.0),
        Vec2::new(cx + 100.0, start_y - 60.0),
        [white, white],
        1.0,
    );
    list.centered_text(cx, start_y - 100.0, Font::Helvetica18, "CREATED BY:", white);

    let names_y = start_y - 140.0;
    for (i, name) in CREATORS.iter().enumerate() {
        list.centered_text(cx, names_y - i as f32 * NAME_SPACING, Font::Helvetica18, name, white);
    }

    list.centered_text(cx, panel_y + 70.0, Font::Helvetica12, CONTROLS, rgb(0.8, 1.0, 0.8));
    list.centered_text(
        cx,
        panel_y + 30.0,
        Font::Fixed9x15,
        PROMPT,
        rgba(1.0, 1.0, 1.0, credits_blink(t)),
    );
}
