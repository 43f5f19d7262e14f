//! One-time geometry: palm trunk mesh, star field, sand grains

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::renderer::StaticMesh;

/// Flat trunk brown
pub const TRUNK_COLOR: [f32; 3] = [0.54, 0.32, 0.12];
/// Trunk segments from base to crown
pub const TRUNK_SEGMENTS: usize = 10;
/// Width lost per segment, as a fraction of the base width
pub const TRUNK_TAPER: f32 = 0.05;
/// Horizontal lean reached at the crown
pub const TRUNK_CURVE: f32 = 18.0;

/// Horizontal offset of the trunk's center line at segment boundary `i`
pub fn trunk_offset(i: usize) -> f32 {
    (i as f32 / TRUNK_SEGMENTS as f32).powi(2) * TRUNK_CURVE
}

/// Tapering, curving trunk as quads (counter-clockwise from bottom-left)
pub fn trunk_quads(width: f32, height: f32) -> Vec<[Vec2; 4]> {
    (0..TRUNK_SEGMENTS)
        .map(|i| {
            let n = TRUNK_SEGMENTS as f32;
            let y0 = height * i as f32 / n;
            let y1 = height * (i + 1) as f32 / n;
            let w0 = width * (1.0 - i as f32 * TRUNK_TAPER);
            let w1 = width * (1.0 - (i + 1) as f32 * TRUNK_TAPER);
            let x0 = trunk_offset(i);
            let x1 = trunk_offset(i + 1);
            [
                Vec2::new(-w0 * 0.5 + x0, y0),
                Vec2::new(w0 * 0.5 + x0, y0),
                Vec2::new(w1 * 0.5 + x1, y1),
                Vec2::new(-w1 * 0.5 + x1, y1),
            ]
        })
        .collect()
}

/// Batched trunk: each quad split into two flat brown triangles facing +Z
pub fn build_trunk_mesh(width: f32, height: f32) -> StaticMesh {
    let mut mesh = StaticMesh::new();
    for [p1, p2, p3, p4] in trunk_quads(width, height) {
        mesh.push_triangle([p1, p2, p4], TRUNK_COLOR, Vec3::Z);
        mesh.push_triangle([p2, p3, p4], TRUNK_COLOR, Vec3::Z);
    }
    log::debug!("Built trunk mesh: {} triangles", mesh.triangle_count());
    mesh
}

/// `count` points scattered over the full width and the top `band` of the height
pub fn build_star_field<R: Rng>(count: usize, width: f32, height: f32, band: f32, rng: &mut R) -> Vec<Vec2> {
    let band_h = ((height * band) as u32).max(1);
    let floor = height * (1.0 - band);
    (0..count)
        .map(|_| {
            let x = rng.random_range(0..width.max(1.0) as u32) as f32;
            let y = rng.random_range(0..band_h) as f32 + floor;
            Vec2::new(x, y)
        })
        .collect()
}

/// Sand grains below `top_y`, identical for a given seed
pub fn build_sand_grains(count: usize, width: f32, top_y: f32, seed: u64) -> Vec<Vec2> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let max_y = ((top_y - 10.0) as u32).max(1);
    (0..count)
        .map(|_| {
            let x = rng.random_range(0..width.max(1.0) as u32) as f32;
            let y = rng.random_range(0..max_y) as f32;
            Vec2::new(x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{GROUND_Y, SAND_SEED, STAR_BAND, WIN_H, WIN_W};

    #[test]
    fn test_trunk_mesh_layout() {
        let mesh = build_trunk_mesh(60.0, 250.0);
        assert!(mesh.is_consistent());
        assert_eq!(mesh.triangle_count(), TRUNK_SEGMENTS * 2);
        assert_eq!(mesh.positions.len(), TRUNK_SEGMENTS * 2 * 9);
        for i in 0..mesh.vertex_count() {
            assert_eq!(mesh.normal(i), Vec3::Z);
            assert_eq!(mesh.color(i), TRUNK_COLOR);
        }
    }

    #[test]
    fn test_trunk_tapers_and_curves() {
        let quads = trunk_quads(60.0, 250.0);
        let base = quads[0];
        let crown = quads[TRUNK_SEGMENTS - 1];
        assert_eq!(base[1].x - base[0].x, 60.0);
        assert!((crown[2].x - crown[3].x - 30.0).abs() < 1e-4);
        // Crown center leans right by the full curve
        assert!(((crown[2].x + crown[3].x) * 0.5 - TRUNK_CURVE).abs() < 1e-4);
        assert!((crown[2].y - 250.0).abs() < 1e-4);
    }

    #[test]
    fn test_small_trunk_same_shape() {
        let big = trunk_quads(60.0, 250.0);
        let small = trunk_quads(40.0, 180.0);
        assert_eq!(big.len(), small.len());
        for (b, s) in big.iter().zip(&small) {
            // Curve offset is shared; only width and height scale
            let bc = (b[0].x + b[1].x) * 0.5;
            let sc = (s[0].x + s[1].x) * 0.5;
            assert!((bc - sc).abs() < 1e-4);
        }
    }

    #[test]
    fn test_star_field_in_upper_band() {
        let mut rng = Pcg32::seed_from_u64(7);
        let stars = build_star_field(200, WIN_W, WIN_H, STAR_BAND, &mut rng);
        assert_eq!(stars.len(), 200);
        for s in &stars {
            assert!((0.0..WIN_W).contains(&s.x));
            assert!(s.y >= WIN_H * 0.4 - 1e-3 && s.y < WIN_H);
        }
    }

    #[test]
    fn test_sand_grains_repeatable() {
        let a = build_sand_grains(1500, WIN_W, GROUND_Y, SAND_SEED);
        let b = build_sand_grains(1500, WIN_W, GROUND_Y, SAND_SEED);
        assert_eq!(a, b);
        assert!(a.iter().all(|g| g.y < GROUND_Y - 10.0 && g.x < WIN_W));
    }
}
