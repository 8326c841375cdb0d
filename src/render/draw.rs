//! Small stroke/arrow helpers and the fallback series palette.
//!
//! These are thin wrappers over the surface contract; elements call them for
//! the handful of shapes that repeat across the toolkit.

use smallvec::SmallVec;

use crate::render::{Color, DrawSurface};

const PALETTE: [Color; 6] = [
    Color::rgb(1.0, 0.0, 0.0),
    Color::rgb(0.0, 1.0, 0.0),
    Color::rgb(0.0, 0.0, 1.0),
    Color::rgb(0.0, 1.0, 1.0),
    Color::rgb(0.706, 0.706, 0.0),
    Color::rgb(1.0, 0.0, 1.0),
];

/// Deterministic palette pick for series without an explicit `"color"` info
/// entry.
#[must_use]
pub fn series_fallback_color(id: &str) -> Color {
    let index = id
        .bytes()
        .fold(0_usize, |acc, byte| (acc + byte as usize) % PALETTE.len());
    PALETTE[index]
}

pub fn draw_line(
    surface: &mut dyn DrawSurface,
    from: (f64, f64),
    to: (f64, f64),
    line_width: f64,
    color: Color,
) {
    surface.save();
    surface.set_line_width(line_width);
    surface.set_stroke_color(color);
    surface.begin_path();
    surface.move_to(from.0, from.1);
    surface.line_to(to.0, to.1);
    surface.stroke();
    surface.restore();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Top,
    Left,
    Bottom,
    Right,
}

/// Filled triangular arrow head at `from`, `length` along the direction and
/// `half_width` across it.
pub fn draw_arrow(
    surface: &mut dyn DrawSurface,
    from: (f64, f64),
    length: f64,
    half_width: f64,
    direction: ArrowDirection,
    color: Color,
) {
    let mut vertices: SmallVec<[(f64, f64); 3]> = SmallVec::from_buf([from, from, from]);
    match direction {
        ArrowDirection::Top => {
            vertices[0].1 -= length;
            vertices[1].0 += half_width;
            vertices[2].0 -= half_width;
        }
        ArrowDirection::Left => {
            vertices[0].0 -= length;
            vertices[1].1 += half_width;
            vertices[2].1 -= half_width;
        }
        ArrowDirection::Bottom => {
            vertices[0].1 += length;
            vertices[1].0 += half_width;
            vertices[2].0 -= half_width;
        }
        ArrowDirection::Right => {
            vertices[0].0 += length;
            vertices[1].1 += half_width;
            vertices[2].1 -= half_width;
        }
    }

    surface.save();
    surface.set_fill_color(color);
    surface.begin_path();
    surface.move_to(vertices[0].0, vertices[0].1);
    surface.line_to(vertices[1].0, vertices[1].1);
    surface.line_to(vertices[2].0, vertices[2].1);
    surface.close_path();
    surface.fill();
    surface.restore();
}

#[cfg(test)]
mod tests {
    use super::series_fallback_color;

    #[test]
    fn fallback_color_is_deterministic_per_id() {
        assert_eq!(series_fallback_color("cpu"), series_fallback_color("cpu"));
    }
}
