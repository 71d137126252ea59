//! CPU triangle-mesh backend
//!
//! Collects one frame of draw calls as a flat vertex list plus text labels.
//! The host uploads [`MeshRenderer::vertex_bytes`] to its own GPU buffer and
//! rasterises labels with whatever font stack it has.

use glam::Vec2;

use super::shapes;
use super::vertex::{Color, Vertex};
use super::{Renderer, TextAlign};
use crate::consts::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};

/// Segments used to tessellate circles
const CIRCLE_SEGMENTS: u32 = 32;

/// A text draw call, kept for the host's text pass
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub align: TextAlign,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct MeshRenderer {
    size: (f32, f32),
    clear_color: Color,
    vertices: Vec<Vertex>,
    labels: Vec<TextLabel>,
    resize_count: u32,
}

impl Default for MeshRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT)
    }
}

impl MeshRenderer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: (width, height),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            vertices: Vec::new(),
            labels: Vec::new(),
            resize_count: 0,
        }
    }

    /// Drop last frame's geometry (surface size is kept)
    pub fn begin_frame(&mut self) {
        self.vertices.clear();
        self.labels.clear();
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw vertex data ready for a GPU buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices.as_slice())
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// How many times the surface has been resized
    pub fn resize_count(&self) -> u32 {
        self.resize_count
    }
}

impl Renderer for MeshRenderer {
    fn resize(&mut self, width: f32, height: f32) {
        self.size = (width, height);
        self.resize_count += 1;
    }

    fn size(&self) -> (f32, f32) {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
        self.labels.clear();
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.vertices.extend(shapes::rect(pos, size, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, weight: f32, color: Color) {
        let half = weight / 2.0;
        let inner = (radius - half).max(0.0);
        self.vertices.extend(shapes::ring(
            center,
            inner,
            radius + half,
            color,
            CIRCLE_SEGMENTS,
        ));
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign, color: Color) {
        self.labels.push(TextLabel {
            text: text.to_string(),
            pos,
            size,
            align,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_tracks_size_and_count() {
        let mut r = MeshRenderer::default();
        assert_eq!(r.size(), (DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT));
        r.resize(640.0, 360.0);
        assert_eq!(r.size(), (640.0, 360.0));
        assert_eq!(r.resize_count(), 1);
    }

    #[test]
    fn test_clear_drops_geometry() {
        let mut r = MeshRenderer::default();
        r.fill_rect(Vec2::ZERO, Vec2::ONE, [1.0; 4]);
        r.text("hi", Vec2::ZERO, 14.0, TextAlign::Left, [0.0; 4]);
        r.clear([0.5; 4]);
        assert!(r.vertices().is_empty());
        assert!(r.labels().is_empty());
        assert_eq!(r.clear_color(), [0.5; 4]);
    }

    #[test]
    fn test_vertex_bytes_length() {
        let mut r = MeshRenderer::default();
        r.fill_rect(Vec2::ZERO, Vec2::ONE, [1.0; 4]);
        assert_eq!(r.vertex_bytes().len(), 6 * Vertex::STRIDE);
    }
}
