use std::f64::consts::FRAC_PI_2;

use crate::core::PixelRect;
use crate::elements::{surface_size_unit, AxisOrientation, Element, RenderContext};
use crate::error::ChartResult;
use crate::render::{DrawSurface, TextAlign};

// Upper bound on labels; protects the frame from a misconfigured stepsize.
const MAX_LABELS: usize = 10_000;

/// Tick labels stepped across the axis bounds.
///
/// X labels are rotated a quarter turn into the axis strip; y labels are
/// stacked bottom-up. Labels render linearly across the area, so they line up
/// with a linear scale's grid.
pub struct AxisNumbers {
    orientation: AxisOrientation,
    stepsize: f64,
    formatter: Box<dyn Fn(f64) -> String>,
}

impl AxisNumbers {
    #[must_use]
    pub fn new(orientation: AxisOrientation) -> Self {
        Self {
            orientation,
            stepsize: 1.0,
            formatter: Box::new(|value| format!("{value}")),
        }
    }

    #[must_use]
    pub fn with_stepsize(mut self, stepsize: f64) -> Self {
        self.stepsize = stepsize;
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: impl Fn(f64) -> String + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }
}

impl Element for AxisNumbers {
    fn render(
        &mut self,
        surface: &mut dyn DrawSurface,
        rect: PixelRect,
        ctx: &RenderContext<'_>,
    ) -> ChartResult<()> {
        let font_size = surface_size_unit(surface) / 150.0;
        let bounds = ctx.data.bounds();
        let range = match self.orientation {
            AxisOrientation::X => bounds.x,
            AxisOrientation::Y => bounds.y,
        };

        let span = range[1] - range[0];
        if !span.is_finite() || span < 0.0 || self.stepsize <= 0.0 {
            return Ok(());
        }
        let steps = span / self.stepsize;
        let count = ((steps.floor() as usize) + 1).min(MAX_LABELS);

        surface.save();
        for i in 0..count {
            let label = (self.formatter)(range[0] + i as f64 * self.stepsize);
            let fraction = if steps == 0.0 { 0.0 } else { i as f64 / steps };
            match self.orientation {
                AxisOrientation::X => {
                    surface.save();
                    surface.translate(rect.x + rect.w * fraction, rect.y);
                    surface.rotate(FRAC_PI_2);
                    surface.fill_text(&label, rect.h / 2.0, 0.0, font_size, TextAlign::Center);
                    surface.restore();
                }
                AxisOrientation::Y => {
                    surface.fill_text(
                        &label,
                        rect.x + rect.w / 2.0,
                        rect.y + rect.h * (1.0 - fraction),
                        font_size,
                        TextAlign::Left,
                    );
                }
            }
        }
        surface.restore();
        Ok(())
    }
}
