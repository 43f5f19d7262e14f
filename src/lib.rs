//! Beach Paradise - an animated summer beach scene
//!
//! Core modules:
//! - `sim`: Renderer-free animation state (view toggles, input fold, motion laws)
//! - `scene`: Static geometry and the procedural drawing routines
//! - `renderer`: Draw-command stream, tessellation and the WebGPU pipeline
//! - `platform`: Clock and native window/event loop
//! - `settings`: User configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::{QualityPreset, Settings};

/// Scene configuration constants
pub mod consts {
    /// Logical window dimensions (world units)
    pub const WIN_W: f32 = 1000.0;
    pub const WIN_H: f32 = 750.0;

    /// Top of the sand strip; players, trees and the umbrella stand here
    pub const GROUND_Y: f32 = WIN_H * 0.35;
    /// Where the sky meets the sea
    pub const HORIZON_Y: f32 = WIN_H * 0.5;

    /// Zoom bounds and step ("+" zooms in by shrinking the visible extent)
    pub const MIN_ZOOM: f32 = 0.2;
    pub const ZOOM_STEP: f32 = 0.1;

    /// Starting umbrella position
    pub const UMBRELLA_START_X: f32 = 700.0;

    /// Night-sky decoration
    pub const STAR_COUNT: usize = 200;
    /// Stars live in the upper 60% of the window
    pub const STAR_BAND: f32 = 0.6;

    /// Sand grain count and fixed seed
    pub const SAND_GRAINS: usize = 1500;
    pub const SAND_SEED: u64 = 12345;

    /// Background colors
    pub const DAY_SKY: [f32; 4] = [0.6, 0.92, 1.0, 1.0];
    pub const NIGHT_SKY: [f32; 4] = [0.05, 0.05, 0.2, 1.0];
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Interpolate between two angles along the shorter arc
#[inline]
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    normalize_angle(lerp(from, from + normalize_angle(to - from), t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert!((lerp(2.0, 6.0, 0.25) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_angle_range() {
        for a in [-10.0_f32, -PI, 0.0, PI, 7.5] {
            let n = normalize_angle(a);
            assert!((-PI..PI).contains(&n), "{a} -> {n}");
        }
    }

    #[test]
    fn test_lerp_angle_takes_short_way() {
        // 170° -> -170° should pass through 180°, not through 0°
        let from = 170.0_f32.to_radians();
        let to = -170.0_f32.to_radians();
        let mid = lerp_angle(from, to, 0.5);
        assert!(mid.abs() > 179.0_f32.to_radians());
    }
}
