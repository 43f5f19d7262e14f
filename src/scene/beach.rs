//! Sand, palm trees and the beach umbrella

use std::f32::consts::PI;
use std::sync::Arc;

use glam::Vec2;

use super::geometry::{TRUNK_COLOR, TRUNK_CURVE, trunk_quads};
use crate::renderer::{Color, DrawList, StaticMesh, rgb, rgba};
use crate::sim::motion::frond_sway;

const FRONDS: usize = 6;
const FROND_SEGMENTS: usize = 18;
const LEAFLETS: usize = 6;
const FROND_COLOR: Color = rgb(0.08, 0.55, 0.18);
const COCONUT_COLOR: Color = rgb(0.2, 0.12, 0.02);

const UMBRELLA_PANELS: usize = 8;
/// Default umbrella lean (degrees, clockwise)
pub const UMBRELLA_LEAN: f32 = -12.0;
pub const UMBRELLA_RADIUS: f32 = 50.0;

pub fn draw_sand(list: &mut DrawList, width: f32, top_y: f32, grains: &[Vec2], night: bool) {
    let sand = if night {
        rgb(0.6, 0.55, 0.4)
    } else {
        rgb(0.96, 0.88, 0.63)
    };
    list.filled_rect(0.0, 0.0, width, top_y, sand);
    list.points(grains, vec![rgba(0.75, 0.64, 0.42, 0.3)], 2.0);
}

/// The two palm sizes; they differ only in dimensions and trunk batching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PalmSize {
    Large,
    Small,
}

impl PalmSize {
    pub fn trunk_size(&self) -> (f32, f32) {
        match self {
            PalmSize::Large => (60.0, 250.0),
            PalmSize::Small => (40.0, 180.0),
        }
    }

    fn frond_length(&self) -> f32 {
        match self {
            PalmSize::Large => 150.0,
            PalmSize::Small => 100.0,
        }
    }

    fn sway_amplitude(&self) -> f32 {
        match self {
            PalmSize::Large => 6.0,
            PalmSize::Small => 5.0,
        }
    }
}

/// Palm tree standing at `base`. The large trunk comes from `trunk_mesh`,
/// the small one is emitted inline.
pub fn draw_palm_tree(list: &mut DrawList, base: Vec2, t: f32, size: PalmSize, trunk_mesh: &Arc<StaticMesh>) {
    let (trunk_w, trunk_h) = size.trunk_size();
    list.push();
    list.translate(base.x, base.y);

    match size {
        PalmSize::Large => list.mesh(trunk_mesh),
        PalmSize::Small => {
            let [r, g, b] = TRUNK_COLOR;
            for quad in trunk_quads(trunk_w, trunk_h) {
                list.polygon(&quad, rgb(r, g, b));
            }
        }
    }

    let crown = Vec2::new(TRUNK_CURVE, trunk_h);
    let length = size.frond_length();
    for f in 0..FRONDS {
        list.push();
        list.translate(crown.x, crown.y);
        list.rotate(360.0 / FRONDS as f32 * f as f32);
        draw_frond(list, length, frond_sway(t, f, size.sway_amplitude()));
        list.pop();
    }

    list.filled_circle(crown.x + 10.0, crown.y - 8.0, 9.0, 24, COCONUT_COLOR);
    list.filled_circle(crown.x - 10.0, crown.y - 14.0, 8.0, 24, COCONUT_COLOR);
    list.filled_circle(crown.x + 26.0, crown.y - 18.0, 7.0, 24, COCONUT_COLOR);

    list.pop();
}

/// One frond along local +x; leaflets shrink and sway more toward the tip
fn draw_frond(list: &mut DrawList, length: f32, sway: f32) {
    for s in 0..FROND_SEGMENTS {
        let u = s as f32 / (FROND_SEGMENTS - 1) as f32;
        let stem_x = length * u;
        let stem_y = (u * PI).sin() * 10.0;
        let leaflet_len = 24.0 * (1.0 - u) + 10.0;
        for l in 0..LEAFLETS {
            let spread = (l as f32 - (LEAFLETS / 2) as f32) * 6.0 * (1.0 - u);
            let y = stem_y + spread + sway * u;
            list.filled_rect(stem_x, y, leaflet_len, 8.0, FROND_COLOR);
        }
    }
}

/// Striped beach umbrella whose pole top sits at (`cx`, `ground_y`)
pub fn draw_umbrella(list: &mut DrawList, cx: f32, ground_y: f32, radius: f32, lean: f32) {
    let r = radius * 1.25;
    let pole_h = r * 2.2;
    let pole_w = r * 0.12;
    let canopy_r = r * 1.3;
    let canopy_h = r * 0.9;
    let apex_y = pole_h + canopy_h;
    let knob_r = r * 0.08;

    list.push();
    list.translate(cx, ground_y - pole_h);
    list.rotate(lean);

    list.filled_rect(-pole_w * 0.5, 0.0, pole_w, pole_h, rgb(0.45, 0.28, 0.05));

    let step = 2.0 * PI / UMBRELLA_PANELS as f32;
    for i in 0..UMBRELLA_PANELS {
        let color = if i % 2 == 0 {
            rgb(1.0, 0.25, 0.25)
        } else {
            rgb(1.0, 0.9, 0.2)
        };
        let a1 = i as f32 * step;
        let a2 = (i + 1) as f32 * step;
        list.triangle(
            Vec2::new(0.0, apex_y),
            Vec2::new(a1.cos() * canopy_r, pole_h),
            Vec2::new(a2.cos() * canopy_r, pole_h),
            color,
        );
    }

    // The back silhouette lies flat on the rim, so only the knob remains
    list.filled_circle(0.0, apex_y + knob_r * 0.6, knob_r, 24, rgb(1.0, 0.9, 0.2));
    list.pop();
}
