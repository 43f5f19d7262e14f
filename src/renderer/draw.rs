//! Immediate-mode draw-command recording
//!
//! Drawing routines call the primitive helpers on a [`DrawList`]; each call
//! appends one [`DrawCommand`] with its points already resolved to world
//! space through the current transform stack (translate / rotate / scale,
//! pushed and popped like a fixed-function modelview stack). Batched meshes
//! keep their local vertices and carry the transform instead.

use std::f32::consts::PI;
use std::sync::Arc;

use glam::{Affine2, Vec2, Vec3};

use super::mesh::StaticMesh;
use crate::settings::QualityPreset;
use crate::sim::ViewBounds;

pub type Color = [f32; 4];

/// Opaque color from rgb
#[inline]
pub const fn rgb(r: f32, g: f32, b: f32) -> Color {
    [r, g, b, 1.0]
}

/// Color with explicit alpha
#[inline]
pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    [r, g, b, a]
}

/// Single positional light used at night
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub diffuse: [f32; 3],
}

/// Bitmap font faces (8x8 glyphs stretched to each face's cell)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    TimesRoman24,
    Helvetica18,
    Helvetica12,
    Fixed9x15,
}

impl Font {
    /// Horizontal advance per character (world units)
    pub fn advance(&self) -> f32 {
        match self {
            Font::TimesRoman24 => 18.0,
            Font::Helvetica18 => 14.0,
            Font::Helvetica12 => 9.0,
            Font::Fixed9x15 => 9.0,
        }
    }

    /// Cell height (world units)
    pub fn height(&self) -> f32 {
        match self {
            Font::TimesRoman24 => 24.0,
            Font::Helvetica18 => 18.0,
            Font::Helvetica12 => 12.0,
            Font::Fixed9x15 => 15.0,
        }
    }

    /// Width of `text` when drawn in this face
    pub fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance()
    }
}

/// How a polyline's points connect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    Strip,
    Loop,
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Convex polygon, filled as a fan from the first point
    Polygon { points: Vec<Vec2>, color: Color },
    /// Quad with one color per corner
    GradientQuad { corners: [Vec2; 4], colors: [Color; 4] },
    /// Connected line with a pixel width
    Polyline {
        points: Vec<Vec2>,
        color: Color,
        width: f32,
        mode: LineMode,
    },
    /// Single segment with a color per end
    Line {
        from: Vec2,
        to: Vec2,
        colors: [Color; 2],
        width: f32,
    },
    /// Square points; `colors` holds one color or one per point
    Points {
        points: Vec<Vec2>,
        colors: Vec<Color>,
        size: f32,
    },
    /// Bitmap text, `origin` is the left end of the baseline
    Text {
        origin: Vec2,
        text: String,
        font: Font,
        color: Color,
    },
    /// Pre-built mesh drawn in one batch
    Mesh {
        mesh: Arc<StaticMesh>,
        transform: Affine2,
    },
    /// Toggle per-vertex lighting for following commands
    Lighting(bool),
    /// Place the light
    Light(PointLight),
}

/// Command stream for one frame
#[derive(Debug, Clone)]
pub struct DrawList {
    pub clear_color: Color,
    pub bounds: ViewBounds,
    commands: Vec<DrawCommand>,
    transform: Affine2,
    stack: Vec<Affine2>,
    quality: QualityPreset,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new(QualityPreset::default())
    }
}

impl DrawList {
    pub fn new(quality: QualityPreset) -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            bounds: ViewBounds::LOGICAL,
            commands: Vec::new(),
            transform: Affine2::IDENTITY,
            stack: Vec::new(),
            quality,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    pub fn set_projection(&mut self, bounds: ViewBounds) {
        self.bounds = bounds;
    }

    // --- transform stack ---

    pub fn push(&mut self) {
        self.stack.push(self.transform);
    }

    pub fn pop(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        } else {
            log::warn!("DrawList::pop with empty transform stack");
        }
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.transform = self.transform * Affine2::from_translation(Vec2::new(x, y));
    }

    /// Rotate counter-clockwise by `degrees`
    pub fn rotate(&mut self, degrees: f32) {
        self.transform = self.transform * Affine2::from_angle(degrees.to_radians());
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.transform = self.transform * Affine2::from_scale(Vec2::new(sx, sy));
    }

    /// Current local-to-world transform
    pub fn transform(&self) -> Affine2 {
        self.transform
    }

    #[inline]
    fn world(&self, x: f32, y: f32) -> Vec2 {
        self.transform.transform_point2(Vec2::new(x, y))
    }

    // --- state ---

    pub fn set_lighting(&mut self, enabled: bool) {
        self.commands.push(DrawCommand::Lighting(enabled));
    }

    pub fn set_light(&mut self, light: PointLight) {
        self.commands.push(DrawCommand::Light(light));
    }

    // --- filled shapes ---

    /// Convex polygon in local coordinates
    pub fn polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let points = points.iter().map(|p| self.world(p.x, p.y)).collect();
        self.commands.push(DrawCommand::Polygon { points, color });
    }

    pub fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.polygon(&[a, b, c], color);
    }

    /// Axis-aligned rectangle from its lower-left corner
    pub fn filled_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.polygon(
            &[
                Vec2::new(x, y),
                Vec2::new(x + w, y),
                Vec2::new(x + w, y + h),
                Vec2::new(x, y + h),
            ],
            color,
        );
    }

    pub fn filled_circle(&mut self, cx: f32, cy: f32, r: f32, segments: u32, color: Color) {
        self.filled_ellipse(cx, cy, r, r, segments, color);
    }

    /// Ellipse as a fan around its center; `segments` is scaled by quality
    pub fn filled_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, segments: u32, color: Color) {
        let n = self.quality.segments(segments);
        let mut points = Vec::with_capacity(n as usize + 2);
        points.push(Vec2::new(cx, cy));
        for i in 0..=n {
            let a = i as f32 / n as f32 * 2.0 * PI;
            points.push(Vec2::new(cx + a.cos() * rx, cy + a.sin() * ry));
        }
        self.polygon(&points, color);
    }

    pub fn gradient_quad(&mut self, corners: [Vec2; 4], colors: [Color; 4]) {
        let corners = corners.map(|p| self.world(p.x, p.y));
        self.commands
            .push(DrawCommand::GradientQuad { corners, colors });
    }

    // --- lines and points ---

    pub fn line_strip(&mut self, points: &[Vec2], width: f32, color: Color) {
        self.polyline(points, width, color, LineMode::Strip);
    }

    pub fn line_loop(&mut self, points: &[Vec2], width: f32, color: Color) {
        self.polyline(points, width, color, LineMode::Loop);
    }

    fn polyline(&mut self, points: &[Vec2], width: f32, color: Color, mode: LineMode) {
        if points.len() < 2 {
            return;
        }
        let points = points.iter().map(|p| self.world(p.x, p.y)).collect();
        self.commands.push(DrawCommand::Polyline {
            points,
            color,
            width,
            mode,
        });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, colors: [Color; 2], width: f32) {
        let from = self.world(from.x, from.y);
        let to = self.world(to.x, to.y);
        self.commands.push(DrawCommand::Line {
            from,
            to,
            colors,
            width,
        });
    }

    pub fn points(&mut self, points: &[Vec2], colors: Vec<Color>, size: f32) {
        if points.is_empty() || colors.is_empty() {
            return;
        }
        debug_assert!(colors.len() == 1 || colors.len() == points.len());
        let points = points.iter().map(|p| self.world(p.x, p.y)).collect();
        self.commands.push(DrawCommand::Points {
            points,
            colors,
            size,
        });
    }

    // --- text and meshes ---

    pub fn text(&mut self, x: f32, y: f32, font: Font, text: &str, color: Color) {
        let origin = self.world(x, y);
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
            font,
            color,
        });
    }

    /// Text whose baseline is centered on `x`
    pub fn centered_text(&mut self, x: f32, y: f32, font: Font, text: &str, color: Color) {
        self.text(x - font.text_width(text) / 2.0, y, font, text, color);
    }

    pub fn mesh(&mut self, mesh: &Arc<StaticMesh>) {
        self.commands.push(DrawCommand::Mesh {
            mesh: Arc::clone(mesh),
            transform: self.transform,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_polygon(list: &DrawList) -> &[Vec2] {
        match &list.commands()[0] {
            DrawCommand::Polygon { points, .. } => points,
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn test_translate_applies_to_points() {
        let mut list = DrawList::default();
        list.translate(10.0, 20.0);
        list.filled_rect(0.0, 0.0, 1.0, 1.0, rgb(1.0, 0.0, 0.0));
        assert_eq!(first_polygon(&list)[0], Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_push_pop_restores() {
        let mut list = DrawList::default();
        list.push();
        list.translate(5.0, 5.0);
        list.rotate(90.0);
        list.pop();
        assert_eq!(list.transform(), Affine2::IDENTITY);
    }

    #[test]
    fn test_rotate_is_counter_clockwise_degrees() {
        let mut list = DrawList::default();
        list.rotate(90.0);
        list.triangle(Vec2::X, Vec2::Y, Vec2::ZERO, rgb(1.0, 1.0, 1.0));
        let p = first_polygon(&list)[0];
        assert!((p - Vec2::Y).length() < 1e-5);
    }

    #[test]
    fn test_transform_order_matches_modelview() {
        // translate then rotate: rotation happens in the translated frame
        let mut list = DrawList::default();
        list.translate(100.0, 0.0);
        list.rotate(90.0);
        list.triangle(Vec2::X, Vec2::Y, Vec2::ZERO, rgb(1.0, 1.0, 1.0));
        let p = first_polygon(&list)[0];
        assert!((p - Vec2::new(100.0, 1.0)).length() < 1e-4);
    }

    #[test]
    fn test_circle_segments_follow_quality() {
        let mut high = DrawList::new(QualityPreset::High);
        let mut low = DrawList::new(QualityPreset::Low);
        high.filled_circle(0.0, 0.0, 1.0, 48, rgb(1.0, 1.0, 1.0));
        low.filled_circle(0.0, 0.0, 1.0, 48, rgb(1.0, 1.0, 1.0));
        assert_eq!(first_polygon(&high).len(), 48 + 2);
        assert!(first_polygon(&low).len() < 48 + 2);
    }

    #[test]
    fn test_degenerate_shapes_are_dropped() {
        let mut list = DrawList::default();
        list.polygon(&[Vec2::ZERO, Vec2::X], rgb(1.0, 1.0, 1.0));
        list.line_strip(&[Vec2::ZERO], 1.0, rgb(1.0, 1.0, 1.0));
        list.points(&[], vec![rgb(1.0, 1.0, 1.0)], 2.0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_centered_text_origin() {
        let mut list = DrawList::default();
        list.centered_text(500.0, 100.0, Font::Helvetica18, "ABCD", rgb(1.0, 1.0, 1.0));
        match &list.commands()[0] {
            DrawCommand::Text { origin, .. } => {
                assert_eq!(*origin, Vec2::new(500.0 - 2.0 * 14.0, 100.0));
            }
            other => panic!("expected text, got {other:?}"),
        }
    }
}
