//! Static rectangular colliders

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::renderer::{Color, Renderer};

/// Raw platform rectangle as it appears in level data and generator output
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlatformDesc {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub w: f32,
    #[serde(default)]
    pub h: f32,
}

impl PlatformDesc {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// An immutable axis-aligned rectangle, top-left anchored
///
/// Non-positive sizes are kept as given; they collide with nothing and
/// render as a degenerate quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl From<PlatformDesc> for Platform {
    fn from(d: PlatformDesc) -> Self {
        Self::new(d.x, d.y, d.w, d.h)
    }
}

impl Platform {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap with another box given by its edges
    pub fn overlaps(&self, left: f32, right: f32, top: f32, bottom: f32) -> bool {
        left < self.right() && right > self.left() && top < self.bottom() && bottom > self.top()
    }

    pub fn draw(&self, renderer: &mut dyn Renderer, color: Color) {
        renderer.fill_rect(
            Vec2::new(self.x, self.y),
            Vec2::new(self.width, self.height),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MeshRenderer;

    #[test]
    fn test_edges() {
        let p = Platform::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(p.left(), 10.0);
        assert_eq!(p.right(), 40.0);
        assert_eq!(p.top(), 20.0);
        assert_eq!(p.bottom(), 60.0);
    }

    #[test]
    fn test_overlap_is_strict() {
        let p = Platform::new(0.0, 0.0, 10.0, 10.0);
        assert!(p.overlaps(5.0, 15.0, 5.0, 15.0));
        // Touching edges do not overlap
        assert!(!p.overlaps(10.0, 20.0, 0.0, 10.0));
    }

    #[test]
    fn test_negative_size_is_accepted() {
        let p = Platform::new(0.0, 0.0, -10.0, 5.0);
        assert_eq!(p.right(), -10.0);
        assert!(!p.overlaps(-5.0, -1.0, 1.0, 2.0));

        let mut r = MeshRenderer::default();
        p.draw(&mut r, [1.0; 4]);
        assert_eq!(r.vertices().len(), 6);
    }
}
