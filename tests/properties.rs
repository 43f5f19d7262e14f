//! Property tests for the motion laws and input fold

use beach_paradise::consts::MIN_ZOOM;
use beach_paradise::settings::StarMotion;
use beach_paradise::sim::motion::{BOAT_SPEED, BOAT_START_X, BOAT_TRAVEL, boat_x};
use beach_paradise::sim::shooting_star::REARM_DELAY;
use beach_paradise::sim::volleyball::CYCLE;
use beach_paradise::sim::{InputEvent, Key, ShootingStar, StarPhase, ViewState, ball_position};
use proptest::prelude::*;

const BASE_Y: f32 = 262.5;

proptest! {
    #[test]
    fn zoom_never_below_minimum(keys in prop::collection::vec(prop::bool::ANY, 0..200)) {
        let mut view = ViewState { show_credits: false, ..ViewState::default() };
        for zoom_in in keys {
            let key = if zoom_in { '+' } else { '-' };
            view = view.apply(&InputEvent::Key(Key::Char(key))).0;
            prop_assert!(view.zoom_factor >= MIN_ZOOM);
        }
    }

    #[test]
    fn boat_wraps_within_travel(t in 0.0f32..10_000.0) {
        let x = boat_x(t);
        prop_assert!(x >= BOAT_START_X);
        prop_assert!(x < BOAT_START_X + BOAT_TRAVEL);
        let expected = BOAT_START_X + (t * BOAT_SPEED).rem_euclid(BOAT_TRAVEL);
        // Only the wrap seam may differ, by one full lap
        let diff = (x - expected).abs();
        prop_assert!(diff < 1e-2 || (diff - BOAT_TRAVEL).abs() < 1e-2);
    }

    #[test]
    fn ball_path_repeats_every_cycle(
        lap in 0u32..40,
        frac in 0.01f32..0.49,
        second_half in prop::bool::ANY,
    ) {
        // Stay clear of the two phase seams where the arc height jumps
        let phase = frac + if second_half { 0.5 } else { 0.0 };
        let t = (lap as f32 + phase) * CYCLE;
        let a = ball_position(t, BASE_Y);
        let b = ball_position(t + CYCLE, BASE_Y);
        prop_assert!((a - b).length() < 0.05, "{a:?} vs {b:?}");
    }

    #[test]
    fn shooting_star_moves_down_right_then_rearms(
        seed in any::<u64>(),
        dt in prop_oneof![Just(0.0f32), 0.001f32..0.1],
    ) {
        for motion in [StarMotion::PerFrame, StarMotion::TimeScaled] {
            let mut star = ShootingStar::new(seed, motion);
            star.schedule(0.0);
            let mut t = 0.1;
            prop_assert_eq!(star.update(t, dt, true), None);
            let mut prev = match star.phase() {
                StarPhase::Active { pos } => pos,
                StarPhase::Idle => return Err(TestCaseError::fail("star did not spawn")),
            };

            let mut frames = 0;
            while star.is_active() {
                t += dt;
                frames += 1;
                prop_assert!(frames < 100_000);
                let pos = star.update(t, dt, true);
                prop_assert!(pos.is_some());
                let pos = pos.unwrap();
                prop_assert!(pos.x > prev.x && pos.y < prev.y);
                prev = pos;
            }

            let t_exit = t;
            prop_assert!(star.next_spawn_time() >= t_exit + REARM_DELAY);
            prop_assert!(star.next_spawn_time() < t_exit + REARM_DELAY + 5.0);

            // Still idle just before the rearm time
            let before = star.next_spawn_time() - 0.01;
            if before > t_exit {
                prop_assert_eq!(star.update(before, dt, true), None);
                prop_assert!(!star.is_active());
            }
        }
    }
}
