//! Pre-built triangle meshes
//!
//! Flat arrays of xyz positions, rgb colors and xyz normals, index-aligned:
//! vertex `i` is `positions[3i..3i+3]`, `colors[3i..3i+3]`, `normals[3i..3i+3]`.

use glam::{Vec2, Vec3};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticMesh {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    pub normals: Vec<f32>,
}

impl StaticMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one flat-shaded triangle
    pub fn push_triangle(&mut self, corners: [Vec2; 3], color: [f32; 3], normal: Vec3) {
        for c in corners {
            self.positions.extend_from_slice(&[c.x, c.y, 0.0]);
            self.colors.extend_from_slice(&color);
            self.normals.extend_from_slice(&normal.to_array());
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[i * 3..i * 3 + 3])
    }

    pub fn color(&self, i: usize) -> [f32; 3] {
        [self.colors[i * 3], self.colors[i * 3 + 1], self.colors[i * 3 + 2]]
    }

    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.normals[i * 3..i * 3 + 3])
    }

    /// Buffers are index-aligned and hold whole triangles
    pub fn is_consistent(&self) -> bool {
        self.positions.len() == self.colors.len()
            && self.positions.len() == self.normals.len()
            && self.positions.len() % 9 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_triangle_keeps_alignment() {
        let mut mesh = StaticMesh::new();
        mesh.push_triangle(
            [Vec2::ZERO, Vec2::X, Vec2::Y],
            [0.5, 0.25, 0.125],
            Vec3::Z,
        );
        assert!(mesh.is_consistent());
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.position(1), Vec3::X);
        assert_eq!(mesh.color(2), [0.5, 0.25, 0.125]);
        assert_eq!(mesh.normal(0), Vec3::Z);
    }
}
