//! Vertex and colour types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Linear RGBA, each channel 0-1
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// Byte stride of one vertex in an uploaded buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    /// Offset of the color attribute; position starts at 0
    pub const COLOR_OFFSET: usize = std::mem::size_of::<[f32; 2]>();

    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Opaque colour from 8-bit channels
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Parse a CSS hex colour: `#RGB`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional)
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, c) in out.iter_mut().zip(hex.chars()) {
                let v = c.to_digit(16)? as u8;
                *slot = v * 16 + v;
            }
            Some(rgb(out[0], out[1], out[2]))
        }
        6 => Some(rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => {
            let mut c = rgb(channel(0)?, channel(2)?, channel(4)?);
            c[3] = channel(6)? as f32 / 255.0;
            Some(c)
        }
        _ => None,
    }
}

/// Fixed colours for elements a level theme doesn't control
pub mod colors {
    use super::{Color, rgb};

    pub const GOAL_OUTER: Color = rgb(255, 150, 0);
    pub const GOAL_INNER: Color = rgb(255, 200, 100);
    pub const HUD_TEXT: Color = rgb(0, 0, 0);
    pub const END_BACKGROUND: Color = rgb(20, 20, 40);
    pub const END_TITLE: Color = rgb(255, 255, 255);
    pub const END_SUBTITLE: Color = rgb(200, 255, 100);
    pub const END_HINT: Color = rgb(150, 200, 255);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_long_and_short() {
        assert_eq!(parse_hex_color("#F0F0F0"), Some(rgb(240, 240, 240)));
        assert_eq!(parse_hex_color("1478FF"), Some(rgb(20, 120, 255)));
        assert_eq!(parse_hex_color("#fff"), Some(rgb(255, 255, 255)));
    }

    #[test]
    fn test_parse_hex_alpha() {
        let c = parse_hex_color("#00000080").unwrap();
        assert!((c[3] - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert_eq!(parse_hex_color("tomato"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
        assert_eq!(parse_hex_color("#+F+F+F"), None);
        assert_eq!(parse_hex_color("#+FF"), None);
    }

    #[test]
    fn test_vertex_layout() {
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(Vertex::COLOR_OFFSET, 8);
    }
}
