//! Scene composition
//!
//! [`Scene`] owns the geometry built once at startup and composes a
//! [`DrawList`] per frame from the simulation state, back to front.

pub mod beach;
pub mod credits;
pub mod geometry;
pub mod players;
pub mod sea;
pub mod sky;

use std::sync::Arc;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{GROUND_Y, HORIZON_Y, SAND_GRAINS, SAND_SEED, STAR_BAND, STAR_COUNT, WIN_H, WIN_W};
use crate::renderer::{DrawList, StaticMesh};
use crate::settings::QualityPreset;
use crate::sim::{EventQueue, Flow, FrameTime, SimState, drain_events};

use beach::{PalmSize, UMBRELLA_LEAN, UMBRELLA_RADIUS};

/// Palm tree anchors on the ground line
pub const LARGE_PALM_X: f32 = 800.0;
pub const SMALL_PALM_X: f32 = 650.0;
/// Boat waterline above the horizon
pub const BOAT_BASE_Y: f32 = HORIZON_Y + 30.0;

/// Static scene data built once
#[derive(Debug, Clone)]
pub struct Scene {
    trunk: Arc<StaticMesh>,
    stars: Vec<Vec2>,
    sand: Vec<Vec2>,
    quality: QualityPreset,
}

impl Scene {
    /// Build the trunk mesh, the star field (from `star_seed`) and the sand grains
    pub fn new(star_seed: u64, quality: QualityPreset) -> Self {
        let (trunk_w, trunk_h) = PalmSize::Large.trunk_size();
        let mut rng = Pcg32::seed_from_u64(star_seed);
        let scene = Self {
            trunk: Arc::new(geometry::build_trunk_mesh(trunk_w, trunk_h)),
            stars: geometry::build_star_field(STAR_COUNT, WIN_W, WIN_H, STAR_BAND, &mut rng),
            sand: geometry::build_sand_grains(SAND_GRAINS, WIN_W, GROUND_Y, SAND_SEED),
            quality,
        };
        log::info!(
            "Scene ready: {} stars, {} sand grains, {} trunk triangles",
            scene.stars.len(),
            scene.sand.len(),
            scene.trunk.triangle_count()
        );
        scene
    }

    pub fn trunk(&self) -> &Arc<StaticMesh> {
        &self.trunk
    }

    pub fn stars(&self) -> &[Vec2] {
        &self.stars
    }

    pub fn sand(&self) -> &[Vec2] {
        &self.sand
    }

    /// One frame: apply queued input, then compose
    pub fn frame(&self, sim: &mut SimState, queue: &mut EventQueue, time: FrameTime) -> (DrawList, Flow) {
        let flow = drain_events(sim, queue, time.now);
        (self.compose(sim, time), flow)
    }

    /// Draw the credits screen or the live scene for the current state
    pub fn compose(&self, sim: &mut SimState, time: FrameTime) -> DrawList {
        let mut list = DrawList::new(self.quality);
        list.set_projection(sim.view.view_bounds());

        if sim.view.show_credits {
            credits::draw_credits(&mut list, time.now);
            return list;
        }

        let t = time.now;
        let night = sim.view.night_mode;
        list.set_clear_color(sim.view.clear_color());
        list.set_lighting(false);

        if night {
            sky::draw_stars(&mut list, &self.stars, t);
        }
        if let Some(head) = sim.shooting_star.update(t, time.dt, night) {
            sky::draw_shooting_star(&mut list, head);
        }

        sky::draw_celestial_body(&mut list, sky::SUN_CENTER, sky::SUN_RADIUS, t, night);
        for (x, y, scale) in sky::CLOUDS {
            sky::draw_cloud(&mut list, x, y, scale, t, night);
        }

        sea::draw_ocean(&mut list, 0.0, WIN_W, HORIZON_Y, 0.0, t, night);
        sea::draw_sailboat(&mut list, BOAT_BASE_Y, t);

        beach::draw_sand(&mut list, WIN_W, GROUND_Y, &self.sand, night);
        players::draw_volleyball_game(&mut list, GROUND_Y, t, &mut sim.arms);

        beach::draw_palm_tree(&mut list, Vec2::new(LARGE_PALM_X, GROUND_Y), t, PalmSize::Large, &self.trunk);
        beach::draw_palm_tree(&mut list, Vec2::new(SMALL_PALM_X, GROUND_Y), t, PalmSize::Small, &self.trunk);

        beach::draw_umbrella(&mut list, sim.view.umbrella.x, GROUND_Y, UMBRELLA_RADIUS, UMBRELLA_LEAN);

        list
    }
}
