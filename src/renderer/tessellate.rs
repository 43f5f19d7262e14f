//! Draw commands to colored triangles
//!
//! Everything the GPU sees is a flat triangle list in world coordinates;
//! lines and points become thin quads sized in screen pixels, text becomes
//! one quad per lit glyph pixel. Lighting is evaluated per vertex here.

use font8x8::legacy::BASIC_LEGACY;
use glam::{Affine2, Vec2, Vec3};

use super::draw::{Color, DrawCommand, DrawList, Font, LineMode, PointLight};
use super::mesh::StaticMesh;
use super::vertex::Vertex;
use crate::sim::{ViewBounds, Viewport};

/// Scene-wide ambient term applied to lit surfaces
pub const GLOBAL_AMBIENT: f32 = 0.2;

/// A frame ready for upload
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear_color: Color,
    pub bounds: ViewBounds,
    pub vertices: Vec<Vertex>,
}

/// Lighting state while walking the command stream
#[derive(Debug, Clone, Copy, Default)]
struct Shading {
    enabled: bool,
    light: Option<PointLight>,
}

impl Shading {
    /// Diffuse + ambient for a vertex with the given normal
    fn shade(&self, color: Color, pos: Vec2, normal: Vec3) -> Color {
        let Some(light) = self.light.filter(|_| self.enabled) else {
            return color;
        };
        let to_light = (light.position - pos.extend(0.0)).normalize_or_zero();
        let n_dot_l = normal.normalize_or_zero().dot(to_light).max(0.0);
        let lit = |c: f32, d: f32| (c * (GLOBAL_AMBIENT + d * n_dot_l)).min(1.0);
        [
            lit(color[0], light.diffuse[0]),
            lit(color[1], light.diffuse[1]),
            lit(color[2], light.diffuse[2]),
            color[3],
        ]
    }
}

/// World units per screen pixel along each axis
#[derive(Debug, Clone, Copy)]
struct PixelScale(Vec2);

impl PixelScale {
    fn new(bounds: &ViewBounds, viewport: Viewport) -> Self {
        Self(Vec2::new(
            bounds.width() / viewport.width as f32,
            bounds.height() / viewport.height as f32,
        ))
    }
}

/// Convert a recorded frame into GPU vertices
pub fn tessellate(list: &DrawList, viewport: Viewport) -> Frame {
    let px = PixelScale::new(&list.bounds, viewport);
    let mut out = Vec::new();
    let mut shading = Shading::default();

    for cmd in list.commands() {
        match cmd {
            DrawCommand::Lighting(enabled) => shading.enabled = *enabled,
            DrawCommand::Light(light) => shading.light = Some(*light),
            DrawCommand::Polygon { points, color } => polygon(&mut out, points, *color, &shading),
            DrawCommand::GradientQuad { corners, colors } => {
                let v: Vec<Vertex> = corners
                    .iter()
                    .zip(colors)
                    .map(|(p, c)| Vertex::at(*p, shading.shade(*c, *p, Vec3::Z)))
                    .collect();
                out.extend_from_slice(&[v[0], v[1], v[2], v[0], v[2], v[3]]);
            }
            DrawCommand::Polyline {
                points,
                color,
                width,
                mode,
            } => {
                let mut segments: Vec<(Vec2, Vec2)> =
                    points.windows(2).map(|w| (w[0], w[1])).collect();
                if *mode == LineMode::Loop {
                    if let (Some(last), Some(first)) = (points.last(), points.first()) {
                        segments.push((*last, *first));
                    }
                }
                for (a, b) in segments {
                    let ca = shading.shade(*color, a, Vec3::Z);
                    let cb = shading.shade(*color, b, Vec3::Z);
                    thick_segment(&mut out, a, b, [ca, cb], *width, px);
                }
            }
            DrawCommand::Line {
                from,
                to,
                colors,
                width,
            } => {
                let ca = shading.shade(colors[0], *from, Vec3::Z);
                let cb = shading.shade(colors[1], *to, Vec3::Z);
                thick_segment(&mut out, *from, *to, [ca, cb], *width, px);
            }
            DrawCommand::Points {
                points,
                colors,
                size,
            } => {
                let half = px.0 * (*size * 0.5);
                for (i, p) in points.iter().enumerate() {
                    let color = colors.get(i).copied().unwrap_or(colors[0]);
                    let color = shading.shade(color, *p, Vec3::Z);
                    rect(&mut out, *p - half, *p + half, color);
                }
            }
            DrawCommand::Text {
                origin,
                text,
                font,
                color,
            } => text_quads(&mut out, *origin, text, *font, *color),
            DrawCommand::Mesh { mesh, transform } => mesh_triangles(&mut out, mesh, transform, &shading),
        }
    }

    Frame {
        clear_color: list.clear_color,
        bounds: list.bounds,
        vertices: out,
    }
}

fn polygon(out: &mut Vec<Vertex>, points: &[Vec2], color: Color, shading: &Shading) {
    let colors: Vec<Color> = points
        .iter()
        .map(|p| shading.shade(color, *p, Vec3::Z))
        .collect();
    for i in 1..points.len() - 1 {
        for k in [0, i, i + 1] {
            out.push(Vertex::at(points[k], colors[k]));
        }
    }
}

/// Axis-aligned quad between two corners
fn rect(out: &mut Vec<Vertex>, min: Vec2, max: Vec2, color: Color) {
    let a = Vertex::new(min.x, min.y, color);
    let b = Vertex::new(max.x, min.y, color);
    let c = Vertex::new(max.x, max.y, color);
    let d = Vertex::new(min.x, max.y, color);
    out.extend_from_slice(&[a, b, c, a, c, d]);
}

/// Segment widened to `width` screen pixels
fn thick_segment(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, colors: [Color; 2], width: f32, px: PixelScale) {
    // Direction in pixel space so the width is uniform on screen
    let dir = ((b - a) / px.0).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    let perp = Vec2::new(-dir.y, dir.x) * px.0 * (width * 0.5);

    let a1 = Vertex::at(a + perp, colors[0]);
    let a2 = Vertex::at(a - perp, colors[0]);
    let b1 = Vertex::at(b + perp, colors[1]);
    let b2 = Vertex::at(b - perp, colors[1]);
    out.extend_from_slice(&[a1, a2, b1, b1, a2, b2]);
}

/// Glyph bitmap for a character, `?` for anything outside ASCII
fn glyph(ch: char) -> [u8; 8] {
    let index = ch as usize;
    if index < BASIC_LEGACY.len() {
        BASIC_LEGACY[index]
    } else {
        BASIC_LEGACY[b'?' as usize]
    }
}

fn text_quads(out: &mut Vec<Vertex>, origin: Vec2, text: &str, font: Font, color: Color) {
    let cell = Vec2::new(font.advance() / 8.0, font.height() / 8.0);
    for (col, ch) in text.chars().enumerate() {
        let left = origin.x + col as f32 * font.advance();
        for (row, bits) in glyph(ch).iter().enumerate() {
            // Row 0 is the top of the glyph; the bottom row sits on the baseline
            let y = origin.y + (7 - row) as f32 * cell.y;
            for bit in 0..8 {
                if bits & (1 << bit) != 0 {
                    let x = left + bit as f32 * cell.x;
                    rect(out, Vec2::new(x, y), Vec2::new(x + cell.x, y + cell.y), color);
                }
            }
        }
    }
}

fn mesh_triangles(out: &mut Vec<Vertex>, mesh: &StaticMesh, transform: &Affine2, shading: &Shading) {
    for i in 0..mesh.vertex_count() {
        let p = transform.transform_point2(mesh.position(i).truncate());
        let [r, g, b] = mesh.color(i);
        let color = shading.shade([r, g, b, 1.0], p, mesh.normal(i));
        out.push(Vertex::at(p, color));
    }
}
