//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Color, Vertex};

/// Point on a circle at fraction `t` (0-1) of a full turn
#[inline]
fn on_circle(center: Vec2, radius: f32, t: f32) -> Vec2 {
    let theta = t * TAU;
    center + Vec2::new(theta.cos(), theta.sin()) * radius
}

/// Generate vertices for an axis-aligned rectangle (top-left anchored)
///
/// Negative sizes produce a flipped quad rather than an error.
pub fn rect(pos: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle as a triangle fan
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let a = on_circle(center, radius, i as f32 / segments as f32);
        let b = on_circle(center, radius, (i + 1) as f32 / segments as f32);

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: Color,
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let t1 = i as f32 / segments as f32;
        let t2 = (i + 1) as f32 / segments as f32;

        let inner1 = on_circle(center, inner_radius, t1);
        let outer1 = on_circle(center, outer_radius, t1);
        let inner2 = on_circle(center, inner_radius, t2);
        let outer2 = on_circle(center, outer_radius, t2);

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}
