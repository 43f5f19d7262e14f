//! View state and per-frame time
//!
//! `ViewState` is a small `Copy` value: input events fold it into the next
//! value instead of poking globals.

use serde::{Deserialize, Serialize};

use super::shooting_star::ShootingStar;
use super::volleyball::ArmPose;
use crate::consts::*;
use crate::settings::{Settings, UmbrellaMapping};

/// Time sample for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Seconds since the clock started (monotonic)
    pub now: f32,
    /// Seconds since the previous frame (0 on the first frame)
    pub dt: f32,
}

impl FrameTime {
    pub fn new(now: f32, dt: f32) -> Self {
        Self { now, dt }
    }
}

/// Window size in physical pixels (never zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: WIN_W as u32,
            height: WIN_H as u32,
        }
    }
}

impl Viewport {
    /// Degenerate sizes (minimized windows) clamp to 1x1
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }
}

/// Orthographic projection bounds in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl ViewBounds {
    /// The fixed logical window, 0..WIN_W x 0..WIN_H
    pub const LOGICAL: ViewBounds = ViewBounds {
        left: 0.0,
        right: WIN_W,
        bottom: 0.0,
        top: WIN_H,
    };

    /// Bounds scaled by `zoom` about the window center
    pub fn zoomed(zoom: f32) -> Self {
        let cx = WIN_W / 2.0;
        let cy = WIN_H / 2.0;
        Self {
            left: cx - cx * zoom,
            right: cx + cx * zoom,
            bottom: cy - cy * zoom,
            top: cy + cy * zoom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Map world coordinates to normalized device coordinates (-1..1)
    pub fn to_ndc(&self, x: f32, y: f32) -> (f32, f32) {
        (
            (x - self.left) / self.width() * 2.0 - 1.0,
            (y - self.bottom) / self.height() * 2.0 - 1.0,
        )
    }
}

/// Horizontal umbrella placement; it always stands on the ground line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UmbrellaPosition {
    pub x: f32,
}

impl Default for UmbrellaPosition {
    fn default() -> Self {
        Self {
            x: UMBRELLA_START_X,
        }
    }
}

/// User-controlled view toggles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Visible extent multiplier (> 0, clamped at `MIN_ZOOM`)
    pub zoom_factor: f32,
    pub night_mode: bool,
    /// Credits screen is showing; cleared once, never set again
    pub show_credits: bool,
    pub umbrella: UmbrellaPosition,
    pub viewport: Viewport,
    pub umbrella_mapping: UmbrellaMapping,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom_factor: 1.0,
            night_mode: false,
            show_credits: true,
            umbrella: UmbrellaPosition::default(),
            viewport: Viewport::default(),
            umbrella_mapping: UmbrellaMapping::default(),
        }
    }
}

impl ViewState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            umbrella_mapping: settings.umbrella_mapping,
            ..Self::default()
        }
    }

    /// Projection used this frame
    pub fn view_bounds(&self) -> ViewBounds {
        if self.show_credits {
            ViewBounds::LOGICAL
        } else {
            ViewBounds::zoomed(self.zoom_factor)
        }
    }

    /// Background color behind the live scene
    pub fn clear_color(&self) -> [f32; 4] {
        if self.night_mode { NIGHT_SKY } else { DAY_SKY }
    }

    /// World x under a window x coordinate (physical pixels)
    pub fn drag_to_world_x(&self, mouse_x: f32) -> f32 {
        match self.umbrella_mapping {
            UmbrellaMapping::ZoomScaled => mouse_x * self.zoom_factor,
            UmbrellaMapping::InverseView => {
                let bounds = self.view_bounds();
                bounds.left + mouse_x / self.viewport.width as f32 * bounds.width()
            }
        }
    }
}

/// All cross-frame state owned by the frame loop
#[derive(Debug, Clone)]
pub struct SimState {
    pub view: ViewState,
    pub shooting_star: ShootingStar,
    pub arms: ArmPose,
}

impl SimState {
    pub fn new(settings: &Settings, seed: u64) -> Self {
        Self {
            view: ViewState::from_settings(settings),
            shooting_star: ShootingStar::new(seed, settings.star_motion),
            arms: ArmPose::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_view_state() {
        let view = ViewState::default();
        assert_eq!(view.zoom_factor, 1.0);
        assert!(!view.night_mode);
        assert!(view.show_credits);
        assert_eq!(view.umbrella.x, 700.0);
    }

    #[test]
    fn test_zoom_bounds_centered() {
        let b = ViewBounds::zoomed(0.5);
        assert!(((b.left + b.right) / 2.0 - WIN_W / 2.0).abs() < 1e-4);
        assert!(((b.bottom + b.top) / 2.0 - WIN_H / 2.0).abs() < 1e-4);
        assert!((b.width() - WIN_W * 0.5).abs() < 1e-4);
        assert_eq!(ViewBounds::zoomed(1.0), ViewBounds::LOGICAL);
    }

    #[test]
    fn test_credits_ignore_zoom() {
        let view = ViewState {
            zoom_factor: 0.4,
            ..ViewState::default()
        };
        assert_eq!(view.view_bounds(), ViewBounds::LOGICAL);
    }

    #[test]
    fn test_ndc_corners() {
        let b = ViewBounds::LOGICAL;
        assert_eq!(b.to_ndc(0.0, 0.0), (-1.0, -1.0));
        assert_eq!(b.to_ndc(WIN_W, WIN_H), (1.0, 1.0));
    }

    #[test]
    fn test_viewport_clamps_zero() {
        assert_eq!(Viewport::new(0, 0), Viewport { width: 1, height: 1 });
    }

    #[test]
    fn test_drag_mappings_agree_at_unit_zoom() {
        let mut view = ViewState {
            show_credits: false,
            ..ViewState::default()
        };
        assert!((view.drag_to_world_x(400.0) - 400.0).abs() < 1e-4);
        view.umbrella_mapping = UmbrellaMapping::ZoomScaled;
        assert!((view.drag_to_world_x(400.0) - 400.0).abs() < 1e-4);
    }

    #[test]
    fn test_inverse_view_mapping_under_zoom() {
        let view = ViewState {
            show_credits: false,
            zoom_factor: 0.5,
            ..ViewState::default()
        };
        // Window center stays the world center
        assert!((view.drag_to_world_x(500.0) - 500.0).abs() < 1e-4);
        // Left window edge is the left edge of the zoomed view
        assert!((view.drag_to_world_x(0.0) - 250.0).abs() < 1e-4);
    }
}
