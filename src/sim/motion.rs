//! Closed-form motion laws
//!
//! Every moving decoration is a pure function of elapsed seconds, so a frame
//! can be recomputed from `t` alone.

use crate::consts::WIN_W;

/// Sailboat loop: enters at the left, leaves past the right edge
pub const BOAT_START_X: f32 = -200.0;
pub const BOAT_TRAVEL: f32 = (WIN_W + 200.0) - BOAT_START_X;
pub const BOAT_SPEED: f32 = 70.0;

/// Horizontal drift speed of clouds (units/s)
pub const CLOUD_DRIFT_SPEED: f32 = 8.0;

/// Boat world x; always within `[BOAT_START_X, BOAT_START_X + BOAT_TRAVEL)`
pub fn boat_x(t: f32) -> f32 {
    let x = BOAT_START_X + (t * BOAT_SPEED).rem_euclid(BOAT_TRAVEL);
    // rem_euclid can round up to exactly BOAT_TRAVEL for tiny negatives
    if x >= BOAT_START_X + BOAT_TRAVEL {
        BOAT_START_X
    } else {
        x
    }
}

/// Vertical bob of the boat
pub fn boat_bob(t: f32) -> f32 {
    (t * 1.2).sin() * 4.0
}

/// Boat roll in degrees
pub fn boat_tilt(t: f32) -> f32 {
    t.sin() * 2.0
}

/// Cloud anchor after drift, plus its vertical bob
pub fn cloud_offset(anchor_x: f32, t: f32) -> (f32, f32) {
    let drift = anchor_x + t * CLOUD_DRIFT_SPEED;
    let bob = (t * 0.6 + anchor_x * 0.01).sin() * 5.0;
    (drift, bob)
}

/// One of the three superimposed wave lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveLine {
    pub offset: f32,
    pub amplitude: f32,
    pub speed: f32,
    pub phase: f32,
}

impl WaveLine {
    /// Parameters of wave `index` (0..3) around `base_y`
    pub fn new(index: usize, base_y: f32) -> Self {
        let i = index as f32;
        Self {
            offset: base_y + i * 25.0 + 10.0,
            amplitude: 4.0 - i,
            speed: 0.15 + i * 0.03,
            phase: i * 0.5,
        }
    }

    pub fn y_at(&self, x: f32, t: f32) -> f32 {
        self.offset + (x / 90.0 + t * self.speed + self.phase).sin() * self.amplitude
    }
}

/// Slow breathing of the sun's halo, in [0.98, 1.02]
pub fn sun_pulse(t: f32) -> f32 {
    0.98 + 0.04 * (0.5 + 0.5 * (t * 0.8).sin())
}

/// Lateral sway of frond `index` at the tip
pub fn frond_sway(t: f32, index: usize, amplitude: f32) -> f32 {
    (t * 1.8 + index as f32).sin() * amplitude
}

/// Alpha of a twinkling star at screen x
pub fn star_twinkle(x: f32, t: f32) -> f32 {
    0.7 + 0.3 * (t * 2.0 + x * 0.1).sin()
}

/// Alpha of the "press any key" prompt, in [0.5, 1.0]
pub fn credits_blink(t: f32) -> f32 {
    0.5 + (t * 3.0).sin().abs() * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boat_starts_off_screen_left() {
        assert_eq!(boat_x(0.0), BOAT_START_X);
        assert_eq!(BOAT_TRAVEL, 1400.0);
    }

    #[test]
    fn test_boat_wraps() {
        let period = BOAT_TRAVEL / BOAT_SPEED;
        assert!((boat_x(period + 1.0) - boat_x(1.0)).abs() < 1e-2);
        assert!(boat_x(period - 0.01) > WIN_W);
    }

    #[test]
    fn test_wave_parameters() {
        let w0 = WaveLine::new(0, 100.0);
        let w2 = WaveLine::new(2, 100.0);
        assert_eq!(w0.offset, 110.0);
        assert_eq!(w2.offset, 160.0);
        assert_eq!(w2.amplitude, 2.0);
        assert!((w2.speed - 0.21).abs() < 1e-6);
    }

    #[test]
    fn test_wave_stays_in_band() {
        let w = WaveLine::new(1, 375.0);
        for i in 0..200 {
            let y = w.y_at(i as f32 * 8.0, i as f32 * 0.37);
            assert!((y - w.offset).abs() <= w.amplitude + 1e-4);
        }
    }

    #[test]
    fn test_sun_pulse_range() {
        for i in 0..100 {
            let p = sun_pulse(i as f32 * 0.13);
            assert!((0.98..=1.02 + 1e-6).contains(&p));
        }
    }

    #[test]
    fn test_credits_blink_range() {
        for i in 0..100 {
            let a = credits_blink(i as f32 * 0.07);
            assert!((0.5..=1.0).contains(&a));
        }
    }

    #[test]
    fn test_cloud_drifts_right() {
        let (x0, _) = cloud_offset(200.0, 0.0);
        let (x1, _) = cloud_offset(200.0, 10.0);
        assert_eq!(x0, 200.0);
        assert_eq!(x1, 280.0);
    }
}
