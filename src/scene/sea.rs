//! Ocean, wave lines and the sailboat

use std::f32::consts::PI;

use glam::Vec2;

use crate::renderer::{DrawList, rgb, rgba};
use crate::sim::motion::{WaveLine, boat_bob, boat_tilt, boat_x};

pub const WAVE_LINES: usize = 3;
/// Horizontal sample spacing of a wave line
pub const WAVE_STEP: f32 = 8.0;

const HULL_W: f32 = 80.0;
const HULL_H: f32 = 30.0;
const MAST_H: f32 = 130.0;

/// Water body from `bottom` to `top`, waves around its middle
pub fn draw_ocean(list: &mut DrawList, left: f32, right: f32, top: f32, bottom: f32, t: f32, night: bool) {
    let water = if night {
        rgb(0.01, 0.15, 0.25)
    } else {
        rgb(0.02, 0.62, 0.78)
    };
    list.filled_rect(left, bottom, right - left, top - bottom, water);
    draw_wave_lines(list, left, right, (top + bottom) * 0.5, t);
}

pub fn draw_wave_lines(list: &mut DrawList, left: f32, right: f32, base_y: f32, t: f32) {
    let samples = ((right - left) / WAVE_STEP).floor().max(0.0) as usize + 1;
    for i in 0..WAVE_LINES {
        let wave = WaveLine::new(i, base_y);
        let points: Vec<Vec2> = (0..samples)
            .map(|k| {
                let x = left + k as f32 * WAVE_STEP;
                Vec2::new(x, wave.y_at(x, t))
            })
            .collect();
        list.line_strip(&points, 3.0, rgba(1.0, 1.0, 1.0, 0.25));
    }
}

/// Boat sailing along `base_y`, looping past both edges
pub fn draw_sailboat(list: &mut DrawList, base_y: f32, t: f32) {
    list.push();
    list.translate(boat_x(t), base_y + boat_bob(t));
    list.rotate(boat_tilt(t));

    // Hull: lower half-disc
    let hull: Vec<Vec2> = (0..=40)
        .map(|i| {
            let a = PI + i as f32 / 40.0 * PI;
            Vec2::new(a.cos() * HULL_W, a.sin() * HULL_H)
        })
        .collect();
    list.polygon(&hull, rgb(0.45, 0.25, 0.05));
    list.filled_rect(-HULL_W, 0.0, HULL_W * 2.0, 10.0, rgb(0.55, 0.32, 0.1));

    list.filled_rect(-3.0, 0.0, 6.0, MAST_H, rgb(0.35, 0.2, 0.05));

    list.triangle(
        Vec2::new(3.0, 5.0),
        Vec2::new(3.0, MAST_H - 10.0),
        Vec2::new(65.0, 15.0),
        rgb(1.0, 1.0, 1.0),
    );
    list.triangle(
        Vec2::new(5.0, 20.0),
        Vec2::new(5.0, 55.0),
        Vec2::new(40.0, 25.0),
        rgb(0.95, 0.2, 0.2),
    );
    // Flag at the masthead
    list.triangle(
        Vec2::new(0.0, MAST_H),
        Vec2::new(18.0, MAST_H - 4.0),
        Vec2::new(0.0, MAST_H - 8.0),
        rgb(1.0, 0.0, 0.0),
    );
    list.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{HORIZON_Y, WIN_W};
    use crate::renderer::DrawCommand;
    use crate::sim::motion::BOAT_START_X;

    #[test]
    fn test_three_wave_lines_span_width() {
        let mut list = DrawList::default();
        draw_ocean(&mut list, 0.0, WIN_W, HORIZON_Y, 0.0, 1.0, false);
        let strips: Vec<&Vec<Vec2>> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polyline { points, .. } => Some(points),
                _ => None,
            })
            .collect();
        assert_eq!(strips.len(), WAVE_LINES);
        for s in strips {
            assert_eq!(s[0].x, 0.0);
            assert_eq!(s.last().map(|p| p.x), Some(1000.0));
        }
    }

    #[test]
    fn test_boat_transform_is_restored() {
        let mut list = DrawList::default();
        draw_sailboat(&mut list, 405.0, 3.0);
        assert_eq!(list.transform(), glam::Affine2::IDENTITY);
    }

    #[test]
    fn test_boat_enters_from_left() {
        let mut list = DrawList::default();
        draw_sailboat(&mut list, 405.0, 0.0);
        // Deck rect at t=0 starts at hull's left edge, no tilt
        match &list.commands()[1] {
            DrawCommand::Polygon { points, .. } => {
                assert!((points[0].x - (BOAT_START_X - HULL_W)).abs() < 1e-3);
                assert!((points[0].y - 405.0).abs() < 1e-3);
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }
}
