//! Night-sky shooting star
//!
//! Two phases: `Idle` until the scheduled spawn time passes, then `Active`
//! while the star crosses the sky along a fixed diagonal. Leaving the
//! visible area schedules the next spawn 3-8 seconds later.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{WIN_H, WIN_W};
use crate::settings::StarMotion;

/// Per-frame displacement (world units)
pub const STEP: Vec2 = Vec2::new(3.5, -2.0);
/// Frame rate the per-frame step was tuned for
pub const REFERENCE_FPS: f32 = 60.0;
/// Largest time step integrated in one frame (time-scaled mode)
pub const MAX_DT: f32 = 0.1;
/// Distance past the window edges before the star counts as gone
pub const EXIT_MARGIN: f32 = 200.0;
/// Minimum rearm delay after the star leaves
pub const REARM_DELAY: f32 = 3.0;

/// Current phase of the shooting star
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StarPhase {
    Idle,
    Active { pos: Vec2 },
}

/// Shooting-star state machine
#[derive(Debug, Clone)]
pub struct ShootingStar {
    phase: StarPhase,
    next_spawn_time: f32,
    motion: StarMotion,
    rng: Pcg32,
}

impl ShootingStar {
    pub fn new(seed: u64, motion: StarMotion) -> Self {
        Self {
            phase: StarPhase::Idle,
            next_spawn_time: 0.0,
            motion,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn phase(&self) -> StarPhase {
        self.phase
    }

    pub fn next_spawn_time(&self) -> f32 {
        self.next_spawn_time
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, StarPhase::Active { .. })
    }

    /// Set the earliest time the next star may appear
    pub fn schedule(&mut self, at: f32) {
        self.next_spawn_time = at;
    }

    /// Drop any star in flight
    pub fn reset(&mut self) {
        self.phase = StarPhase::Idle;
    }

    /// Advance one frame. Returns the position to draw, if any.
    ///
    /// Outside night mode the star is forced idle and nothing is drawn.
    pub fn update(&mut self, now: f32, dt: f32, night: bool) -> Option<Vec2> {
        if !night {
            self.phase = StarPhase::Idle;
            return None;
        }

        match self.phase {
            StarPhase::Idle => {
                if now > self.next_spawn_time {
                    let pos = self.spawn_position();
                    log::debug!("Shooting star spawned at ({:.0}, {:.0})", pos.x, pos.y);
                    self.phase = StarPhase::Active { pos };
                }
                None
            }
            StarPhase::Active { pos } => {
                let pos = pos + self.step(dt);
                if pos.x > WIN_W + EXIT_MARGIN || pos.y < -EXIT_MARGIN {
                    self.phase = StarPhase::Idle;
                    // 3.0 + k/10 for k in 0..50
                    let jitter = self.rng.random_range(0..50) as f32 / 10.0;
                    self.next_spawn_time = now + REARM_DELAY + jitter;
                    log::debug!("Shooting star gone; next at {:.1}s", self.next_spawn_time);
                } else {
                    self.phase = StarPhase::Active { pos };
                }
                Some(pos)
            }
        }
    }

    fn step(&self, dt: f32) -> Vec2 {
        match self.motion {
            StarMotion::PerFrame => STEP,
            StarMotion::TimeScaled if dt > 0.0 => STEP * (dt.min(MAX_DT) * REFERENCE_FPS),
            // A frame with no elapsed time still advances one reference step
            StarMotion::TimeScaled => STEP,
        }
    }

    fn spawn_position(&mut self) -> Vec2 {
        // Left half of the sky (shifted left by 100), just above the top edge
        let x = self.rng.random_range(0..(WIN_W as i32 / 2)) as f32 - 100.0;
        let y = WIN_H + self.rng.random_range(0..200) as f32;
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn activate(star: &mut ShootingStar, at: f32) {
        star.schedule(at - 1.0);
        assert_eq!(star.update(at, FRAME, true), None);
        assert!(star.is_active());
    }

    #[test]
    fn test_idle_until_scheduled() {
        let mut star = ShootingStar::new(1, StarMotion::PerFrame);
        star.schedule(5.0);
        assert_eq!(star.update(4.9, FRAME, true), None);
        assert_eq!(star.update(5.0, FRAME, true), None);
        assert!(!star.is_active(), "spawn requires now > next_spawn_time");
        star.update(5.01, FRAME, true);
        assert!(star.is_active());
    }

    #[test]
    fn test_spawn_region() {
        for seed in 0..32 {
            let mut star = ShootingStar::new(seed, StarMotion::PerFrame);
            activate(&mut star, 1.0);
            let StarPhase::Active { pos } = star.phase() else {
                panic!("expected active");
            };
            assert!((-100.0..400.0).contains(&pos.x));
            assert!((WIN_H..WIN_H + 200.0).contains(&pos.y));
        }
    }

    #[test]
    fn test_day_forces_idle() {
        let mut star = ShootingStar::new(3, StarMotion::PerFrame);
        activate(&mut star, 1.0);
        assert_eq!(star.update(1.1, FRAME, false), None);
        assert_eq!(star.phase(), StarPhase::Idle);
    }

    #[test]
    fn test_exit_rearms_after_delay() {
        let mut star = ShootingStar::new(9, StarMotion::PerFrame);
        activate(&mut star, 1.0);
        let mut t = 1.0;
        while star.is_active() {
            t += FRAME;
            star.update(t, FRAME, true);
        }
        let t_exit = t;
        let next = star.next_spawn_time();
        assert!(next >= t_exit + REARM_DELAY);
        assert!(next < t_exit + REARM_DELAY + 5.0);
    }

    #[test]
    fn test_time_scaled_matches_per_frame_at_60fps() {
        let mut a = ShootingStar::new(4, StarMotion::PerFrame);
        let mut b = ShootingStar::new(4, StarMotion::TimeScaled);
        activate(&mut a, 1.0);
        activate(&mut b, 1.0);
        let pa = a.update(1.1, FRAME, true).unwrap();
        let pb = b.update(1.1, FRAME, true).unwrap();
        assert!((pa - pb).length() < 1e-3);
    }

    #[test]
    fn test_time_scaled_clamps_stalls() {
        let mut star = ShootingStar::new(4, StarMotion::TimeScaled);
        activate(&mut star, 1.0);
        let StarPhase::Active { pos: before } = star.phase() else {
            panic!("expected active");
        };
        let after = star.update(30.0, 29.0, true).unwrap();
        assert!((after - before).length() <= (STEP * MAX_DT * REFERENCE_FPS).length() + 1e-3);
    }

    #[test]
    fn test_time_scaled_moves_on_zero_dt() {
        let mut star = ShootingStar::new(4, StarMotion::TimeScaled);
        activate(&mut star, 1.0);
        let StarPhase::Active { pos: before } = star.phase() else {
            panic!("expected active");
        };
        let after = star.update(1.0, 0.0, true).unwrap();
        assert!(after.x > before.x && after.y < before.y);
    }
}
