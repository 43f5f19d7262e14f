//! Beach volleyball rally
//!
//! The ball shuttles between two fixed players on a 2.2 s cycle. Players
//! jump when the ball comes close and aim their arms at it; arm angles are
//! smoothed across frames so they never snap.

use glam::Vec2;
use std::f32::consts::PI;

use crate::lerp_angle;

/// Player anchors on the sand
pub const GIRL_X: f32 = 150.0;
pub const BOY_X: f32 = 250.0;
/// Full there-and-back period (seconds)
pub const CYCLE: f32 = 2.2;
/// Ball within this distance of a player makes them jump
pub const JUMP_RANGE: f32 = 50.0;
/// Arm smoothing factor per frame
pub const ARM_SMOOTHING: f32 = 0.2;
/// Shoulder heights above each player's feet, and half shoulder width
pub const GIRL_SHOULDER_Y: f32 = 30.0;
pub const BOY_SHOULDER_Y: f32 = 38.0;
pub const SHOULDER_X: f32 = 14.0;
pub const BALL_RADIUS: f32 = 12.0;

/// Ball position on the cyclic two-phase path
pub fn ball_position(t: f32, base_y: f32) -> Vec2 {
    let phase = t.rem_euclid(CYCLE) / CYCLE;
    if phase < 0.5 {
        // Girl -> boy, high arc
        let p = phase / 0.5;
        Vec2::new(
            GIRL_X + (BOY_X - GIRL_X) * p,
            base_y + 40.0 + (p * PI).sin() * 60.0,
        )
    } else {
        // Boy -> girl, lower arc
        let p = (phase - 0.5) / 0.5;
        Vec2::new(
            BOY_X + (GIRL_X - BOY_X) * p,
            base_y + 20.0 + (p * PI).sin() * 40.0,
        )
    }
}

/// Height of a jump given the ball's distance to the player
fn jump_height(distance: f32) -> f32 {
    if distance < JUMP_RANGE {
        (JUMP_RANGE - distance) * 0.8
    } else {
        0.0
    }
}

/// Everything about the rally at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rally {
    pub ball: Vec2,
    pub girl_jump: f32,
    pub boy_jump: f32,
    /// Vertical body scale shared by both players
    pub breathe: f32,
}

impl Rally {
    pub fn is_jumping(&self) -> bool {
        self.girl_jump > 0.0 || self.boy_jump > 0.0
    }
}

/// Rally state at time `t` for players standing on `base_y`
pub fn rally(t: f32, base_y: f32) -> Rally {
    let ball = ball_position(t, base_y);
    let girl_jump = jump_height((ball.x - GIRL_X).abs());
    let boy_jump = jump_height((ball.x - BOY_X).abs());

    let mut r = Rally {
        ball,
        girl_jump,
        boy_jump,
        breathe: 1.0,
    };
    r.breathe = if r.is_jumping() {
        1.05
    } else {
        1.0 + 0.03 * (t * 10.0).sin()
    };
    r
}

/// Angle (radians, from +x) from a shoulder to the ball
fn aim(shoulder: Vec2, ball: Vec2) -> f32 {
    (ball.y - shoulder.y).atan2(ball.x - shoulder.x)
}

/// Arm angles for one player, radians from +x
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Arms {
    pub right: f32,
    pub left: f32,
}

impl Arms {
    fn target(feet: Vec2, shoulder_y: f32, ball: Vec2) -> Self {
        Self {
            right: aim(feet + Vec2::new(SHOULDER_X, shoulder_y), ball),
            left: aim(feet + Vec2::new(-SHOULDER_X, shoulder_y), ball),
        }
    }

    fn approach(self, target: Arms, t: f32) -> Self {
        Self {
            right: lerp_angle(self.right, target.right, t),
            left: lerp_angle(self.left, target.left, t),
        }
    }
}

/// Smoothed arm pose of both players, carried across frames
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArmPose {
    pub girl: Arms,
    pub boy: Arms,
}

impl ArmPose {
    /// Move every arm 20% of the way toward the ball and return the new pose
    pub fn follow(&mut self, rally: &Rally, base_y: f32) -> ArmPose {
        let girl = Arms::target(
            Vec2::new(GIRL_X, base_y + rally.girl_jump),
            GIRL_SHOULDER_Y,
            rally.ball,
        );
        let boy = Arms::target(
            Vec2::new(BOY_X, base_y + rally.boy_jump),
            BOY_SHOULDER_Y,
            rally.ball,
        );
        self.girl = self.girl.approach(girl, ARM_SMOOTHING);
        self.boy = self.boy.approach(boy, ARM_SMOOTHING);
        *self
    }
}
