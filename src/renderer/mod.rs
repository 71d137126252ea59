//! Rendering surface
//!
//! The simulation draws through the [`Renderer`] trait and never touches a GPU
//! directly. [`MeshRenderer`] turns those calls into coloured triangle lists
//! the host uploads however it likes.

pub mod mesh;
pub mod shapes;
pub mod vertex;

pub use mesh::{MeshRenderer, TextLabel};
pub use vertex::{Color, Vertex, colors, parse_hex_color, rgb};

use glam::Vec2;

/// Horizontal anchor for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// A drawing surface with a resizable extent in world units
pub trait Renderer {
    /// Resize the surface (called once per level load)
    fn resize(&mut self, width: f32, height: f32);

    /// Current surface size (width, height)
    fn size(&self) -> (f32, f32);

    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    /// Filled axis-aligned rectangle, top-left anchored
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Circle outline of the given stroke weight, centred on `radius`
    fn stroke_circle(&mut self, center: Vec2, radius: f32, weight: f32, color: Color);

    fn text(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign, color: Color);
}
