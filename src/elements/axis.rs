use crate::core::PixelRect;
use crate::elements::{surface_size_unit, Element, RenderContext};
use crate::error::ChartResult;
use crate::render::{draw_arrow, draw_line, ArrowDirection, Color, DrawSurface};

const AXIS_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    X,
    Y,
}

/// Which edge of the area the axis line hugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPosition {
    TopRight,
    BottomLeft,
}

/// Axis line with an arrow head at its far end.
#[derive(Debug, Clone, Copy)]
pub struct Axis {
    orientation: AxisOrientation,
    position: AxisPosition,
}

impl Axis {
    #[must_use]
    pub fn new(orientation: AxisOrientation) -> Self {
        Self {
            orientation,
            position: AxisPosition::TopRight,
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: AxisPosition) -> Self {
        self.position = position;
        self
    }
}

impl Element for Axis {
    fn render(
        &mut self,
        surface: &mut dyn DrawSurface,
        rect: PixelRect,
        _ctx: &RenderContext<'_>,
    ) -> ChartResult<()> {
        let unit = surface_size_unit(surface);
        let line_width = unit / 1200.0;
        let arrow_length = unit / 150.0;
        let arrow_half_width = unit / 425.0;

        match self.orientation {
            AxisOrientation::X => {
                let line_y = match self.position {
                    AxisPosition::TopRight => rect.y,
                    AxisPosition::BottomLeft => rect.y + rect.h,
                };
                draw_line(
                    surface,
                    (rect.x - arrow_length, line_y),
                    (rect.x + rect.w, line_y),
                    line_width,
                    AXIS_COLOR,
                );
                draw_arrow(
                    surface,
                    (rect.x + rect.w, line_y),
                    arrow_length,
                    arrow_half_width,
                    ArrowDirection::Right,
                    AXIS_COLOR,
                );
            }
            AxisOrientation::Y => {
                let line_x = match self.position {
                    AxisPosition::TopRight => rect.x + rect.w,
                    AxisPosition::BottomLeft => rect.x,
                };
                draw_line(
                    surface,
                    (line_x, rect.y + rect.h + arrow_length),
                    (line_x, rect.y),
                    line_width,
                    AXIS_COLOR,
                );
                draw_arrow(
                    surface,
                    (line_x, rect.y),
                    arrow_length,
                    arrow_half_width,
                    ArrowDirection::Top,
                    AXIS_COLOR,
                );
            }
        }
        Ok(())
    }
}
