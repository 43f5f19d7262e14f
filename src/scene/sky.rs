//! Sky: stars, shooting star, sun or moon, clouds

use glam::{Vec2, Vec3};

use crate::renderer::{DrawList, PointLight, rgb, rgba};
use crate::sim::motion::{cloud_offset, star_twinkle, sun_pulse};

pub const SUN_CENTER: Vec2 = Vec2::new(180.0, 650.0);
pub const SUN_RADIUS: f32 = 50.0;

/// Cloud anchors: x, y, scale
pub const CLOUDS: [(f32, f32, f32); 3] = [(200.0, 600.0, 1.0), (500.0, 650.0, 0.8), (850.0, 620.0, 1.2)];

/// Diffuse color of the moonlight
pub const MOON_DIFFUSE: [f32; 3] = [0.4, 0.4, 0.6];
/// Height of the moonlight above the scene plane
pub const MOON_LIGHT_Z: f32 = 100.0;

const HALO_RINGS: usize = 5;

pub fn draw_stars(list: &mut DrawList, stars: &[Vec2], t: f32) {
    let colors = stars
        .iter()
        .map(|s| rgba(1.0, 1.0, 1.0, star_twinkle(s.x, t)))
        .collect();
    list.points(stars, colors, 2.0);
}

/// Fading tail plus bright head
pub fn draw_shooting_star(list: &mut DrawList, head: Vec2) {
    let tail = head + Vec2::new(-100.0, 57.0);
    list.line(tail, head, [rgba(1.0, 1.0, 1.0, 0.0), rgba(0.8, 0.9, 1.0, 1.0)], 3.0);
    list.points(&[head], vec![rgb(1.0, 1.0, 1.0)], 5.0);
}

/// Sun with a pulsing halo by day; moon and its light by night
pub fn draw_celestial_body(list: &mut DrawList, center: Vec2, core_r: f32, t: f32, night: bool) {
    list.set_lighting(false);
    if night {
        list.filled_circle(center.x, center.y, core_r * 1.15, 64, rgba(0.8, 0.8, 1.0, 0.3));
        list.filled_circle(center.x, center.y, core_r, 64, rgb(0.92, 0.94, 1.0));

        let crater = rgb(0.85, 0.87, 0.95);
        list.filled_circle(center.x - 15.0, center.y + 10.0, 12.0, 32, crater);
        list.filled_circle(center.x + 20.0, center.y - 5.0, 8.0, 32, crater);
        list.filled_circle(center.x - 5.0, center.y - 18.0, 10.0, 32, crater);

        list.set_lighting(true);
        list.set_light(PointLight {
            position: Vec3::new(center.x, center.y, MOON_LIGHT_Z),
            diffuse: MOON_DIFFUSE,
        });
    } else {
        let pulse = sun_pulse(t);
        // Outermost ring first so the brighter inner rings stack on top
        for i in (1..=HALO_RINGS).rev() {
            let r = core_r + i as f32 * core_r * pulse;
            let alpha = 0.04 * (HALO_RINGS + 1 - i) as f32;
            list.filled_circle(center.x, center.y, r, 64, rgba(1.0, 0.95, 0.5, alpha));
        }
        list.filled_circle(center.x, center.y, core_r, 64, rgb(1.0, 0.94, 0.2));
    }
}

pub fn draw_cloud(list: &mut DrawList, x: f32, y: f32, scale: f32, t: f32, night: bool) {
    let (drift, bob) = cloud_offset(x, t);
    let cy = y + bob;
    let s = scale;
    let (color, base) = if night {
        (rgb(0.4, 0.4, 0.5), rgba(0.4, 0.4, 0.5, 0.6))
    } else {
        (rgb(1.0, 1.0, 1.0), rgba(1.0, 1.0, 1.0, 0.6))
    };

    list.filled_circle(drift, cy, 45.0 * s, 50, color);
    list.filled_circle(drift - 55.0 * s, cy - 10.0 * s, 40.0 * s, 45, color);
    list.filled_circle(drift + 40.0 * s, cy - 15.0 * s, 35.0 * s, 45, color);
    list.filled_circle(drift - 35.0 * s, cy - 25.0 * s, 25.0 * s, 36, color);
    list.filled_circle(drift + 25.0 * s, cy - 28.0 * s, 28.0 * s, 36, color);
    list.filled_rect(drift - 60.0 * s, cy - 35.0 * s, 120.0 * s, 20.0 * s, base);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCommand;

    #[test]
    fn test_day_sun_has_halo_and_no_light() {
        let mut list = DrawList::default();
        draw_celestial_body(&mut list, SUN_CENTER, SUN_RADIUS, 0.0, false);
        let polygons = list
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
            .count();
        assert_eq!(polygons, HALO_RINGS + 1);
        assert!(!list.commands().iter().any(|c| matches!(c, DrawCommand::Light(_))));
    }

    #[test]
    fn test_moon_places_light_at_its_center() {
        let mut list = DrawList::default();
        draw_celestial_body(&mut list, SUN_CENTER, SUN_RADIUS, 0.0, true);
        let light = list.commands().iter().find_map(|c| match c {
            DrawCommand::Light(l) => Some(*l),
            _ => None,
        });
        let light = light.expect("moon sets a light");
        assert_eq!(light.position, Vec3::new(180.0, 650.0, 100.0));
        assert_eq!(light.diffuse, MOON_DIFFUSE);
        assert_eq!(list.commands().last(), Some(&DrawCommand::Light(light)));
    }

    #[test]
    fn test_halo_alpha_grows_inward() {
        let mut list = DrawList::default();
        draw_celestial_body(&mut list, SUN_CENTER, SUN_RADIUS, 0.0, false);
        let alphas: Vec<f32> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polygon { color, .. } => Some(color[3]),
                _ => None,
            })
            .take(HALO_RINGS)
            .collect();
        assert!(alphas.windows(2).all(|w| w[0] < w[1]));
        assert!((alphas[0] - 0.04).abs() < 1e-6);
    }

    #[test]
    fn test_shooting_star_tail_fades() {
        let mut list = DrawList::default();
        draw_shooting_star(&mut list, Vec2::new(300.0, 500.0));
        match &list.commands()[0] {
            DrawCommand::Line { from, to, colors, .. } => {
                assert_eq!(*from, Vec2::new(200.0, 557.0));
                assert_eq!(*to, Vec2::new(300.0, 500.0));
                assert_eq!(colors[0][3], 0.0);
            }
            other => panic!("expected line, got {other:?}"),
        }
    }
}
