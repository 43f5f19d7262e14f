//! Volleyball players and ball

use std::f32::consts::PI;

use glam::Vec2;

use crate::renderer::{Color, DrawList, rgb};
use crate::sim::volleyball::{
    ArmPose, Arms, BALL_RADIUS, BOY_SHOULDER_Y, BOY_X, GIRL_SHOULDER_Y, GIRL_X, SHOULDER_X, rally,
};

const GIRL_SKIN: Color = rgb(0.95, 0.8, 0.7);
const GIRL_SUIT: Color = rgb(0.9, 0.2, 0.4);
const GIRL_HAIR: Color = rgb(0.3, 0.2, 0.1);
const BOY_SKIN: Color = rgb(0.9, 0.75, 0.65);
const BOY_SHORTS: Color = rgb(0.2, 0.6, 0.9);
const BOY_HAIR: Color = rgb(0.2, 0.15, 0.1);
const ARM_LENGTH: f32 = 30.0;

/// Advance the rally to `t`, smooth the arms and draw everything
pub fn draw_volleyball_game(list: &mut DrawList, base_y: f32, t: f32, arms: &mut ArmPose) {
    let r = rally(t, base_y);
    let pose = arms.follow(&r, base_y);

    draw_girl(list, Vec2::new(GIRL_X, base_y + r.girl_jump), pose.girl, r.breathe);
    draw_boy(list, Vec2::new(BOY_X, base_y + r.boy_jump), pose.boy, r.breathe);
    draw_ball(list, r.ball, BALL_RADIUS);
}

/// Squash-and-stretch around the feet
fn body_frame(list: &mut DrawList, feet: Vec2, breathe: f32) {
    list.translate(feet.x, feet.y);
    list.scale(1.0 + (1.0 - breathe) * 0.05, breathe);
}

/// Arm hanging from a shoulder, pointing along `angle` (radians from +x)
fn arm(list: &mut DrawList, shoulder: Vec2, angle: f32, skin: Color) {
    list.push();
    list.translate(shoulder.x, shoulder.y);
    // Rect extends along local +y
    list.rotate(angle.to_degrees() - 90.0);
    list.filled_rect(-4.0, 0.0, 8.0, ARM_LENGTH, skin);
    list.pop();
}

fn draw_girl(list: &mut DrawList, feet: Vec2, arms: Arms, breathe: f32) {
    list.push();
    body_frame(list, feet, breathe);

    list.filled_rect(-8.0, -40.0, 6.0, 40.0, GIRL_SKIN);
    list.filled_rect(2.0, -40.0, 6.0, 40.0, GIRL_SKIN);
    list.filled_rect(-12.0, 0.0, 24.0, 40.0, GIRL_SUIT);

    arm(list, Vec2::new(SHOULDER_X, GIRL_SHOULDER_Y), arms.right, GIRL_SKIN);
    arm(list, Vec2::new(-SHOULDER_X, GIRL_SHOULDER_Y), arms.left, GIRL_SKIN);

    list.filled_rect(-5.0, 40.0, 10.0, 6.0, GIRL_SKIN);
    list.filled_circle(0.0, 52.0, 10.0, 48, GIRL_SKIN);

    list.push();
    list.translate(0.0, 52.0);
    list.filled_ellipse(0.0, 10.0, 12.0, 8.0, 48, GIRL_HAIR);
    list.filled_ellipse(-6.0, 8.0, 3.0, 6.0, 48, GIRL_HAIR);
    list.filled_ellipse(6.0, 8.0, 3.0, 6.0, 48, GIRL_HAIR);
    // Ponytail
    list.polygon(
        &[
            Vec2::new(8.0, 5.0),
            Vec2::new(14.0, 8.0),
            Vec2::new(16.0, 12.0),
            Vec2::new(14.0, 16.0),
            Vec2::new(10.0, 18.0),
            Vec2::new(8.0, 14.0),
            Vec2::new(6.0, 10.0),
        ],
        GIRL_HAIR,
    );
    list.pop();

    list.pop();
}

fn draw_boy(list: &mut DrawList, feet: Vec2, arms: Arms, breathe: f32) {
    list.push();
    body_frame(list, feet, breathe);

    list.filled_rect(-10.0, -45.0, 6.0, 45.0, BOY_SKIN);
    list.filled_rect(4.0, -45.0, 6.0, 45.0, BOY_SKIN);
    list.filled_rect(-12.0, 0.0, 24.0, 20.0, BOY_SHORTS);
    list.filled_rect(-12.0, 20.0, 24.0, 30.0, BOY_SKIN);

    arm(list, Vec2::new(SHOULDER_X, BOY_SHOULDER_Y), arms.right, BOY_SKIN);
    arm(list, Vec2::new(-SHOULDER_X, BOY_SHOULDER_Y), arms.left, BOY_SKIN);

    list.filled_rect(-5.0, 50.0, 10.0, 6.0, BOY_SKIN);
    list.filled_circle(0.0, 62.0, 10.0, 48, BOY_SKIN);

    list.push();
    list.translate(0.0, 62.0);
    list.filled_ellipse(0.0, 10.0, 12.0, 7.0, 48, BOY_HAIR);
    list.filled_ellipse(-5.0, 8.0, 3.0, 5.0, 48, BOY_HAIR);
    list.filled_ellipse(5.0, 8.0, 3.0, 5.0, 48, BOY_HAIR);
    list.filled_ellipse(0.0, 6.0, 10.0, 3.0, 48, BOY_HAIR);
    list.pop();

    list.pop();
}

/// White ball with three curved seams
pub fn draw_ball(list: &mut DrawList, center: Vec2, radius: f32) {
    list.filled_circle(center.x, center.y, radius, 48, rgb(1.0, 1.0, 1.0));

    let seam: Vec<Vec2> = (0..=16)
        .map(|i| {
            let a = -PI / 2.0 + i as f32 / 16.0 * PI;
            Vec2::new(a.cos() * radius * 0.8, a.sin() * radius)
        })
        .collect();

    list.push();
    list.translate(center.x, center.y);
    for _ in 0..3 {
        list.line_strip(&seam, 2.0, rgb(0.3, 0.3, 0.3));
        list.rotate(120.0);
    }
    list.pop();
}
