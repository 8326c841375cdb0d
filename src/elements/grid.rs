use crate::core::PixelRect;
use crate::elements::{Element, RenderContext, ScaleRef};
use crate::error::ChartResult;
use crate::render::{Color, DrawSurface};

const GRID_COLOR: Color = Color::rgb(0.827, 0.827, 0.827);

// Upper bound on lines per axis; protects the frame from a misconfigured
// stepsize against wide bounds.
const MAX_LINES: usize = 10_000;

/// Vertical/horizontal grid lines stepped by the global
/// `options["grid"]["stepsize"]` entry across the current bounds.
///
/// Without a grid option (or with non-positive steps) the element draws
/// nothing.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    scale: ScaleRef,
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scale(scale: ScaleRef) -> Self {
        Self { scale }
    }
}

impl Element for Grid {
    fn render(
        &mut self,
        surface: &mut dyn DrawSurface,
        rect: PixelRect,
        ctx: &RenderContext<'_>,
    ) -> ChartResult<()> {
        let scale = self.scale.resolve(ctx.scales)?;
        let step_of = |axis: &str| {
            ctx.data
                .option("grid")?
                .get("stepsize")?
                .get(axis)?
                .as_f64()
                .filter(|step| step.is_finite() && *step > 0.0)
        };

        let bounds = ctx.data.bounds();
        surface.save();
        surface.set_line_width((rect.w + rect.h) / 1200.0);
        surface.set_stroke_color(GRID_COLOR);

        if let Some(step) = step_of("x") {
            for value in step_positions(bounds.x, step) {
                let line_x = rect.x + scale.scale_x(&bounds, value) * rect.w;
                surface.begin_path();
                surface.move_to(line_x, rect.y);
                surface.line_to(line_x, rect.y + rect.h);
                surface.stroke();
            }
        }

        if let Some(step) = step_of("y") {
            for value in step_positions(bounds.y, step) {
                let line_y = rect.y + rect.h * (1.0 - scale.scale_y(&bounds, value));
                surface.begin_path();
                surface.move_to(rect.x, line_y);
                surface.line_to(rect.x + rect.w, line_y);
                surface.stroke();
            }
        }

        surface.restore();
        Ok(())
    }
}

fn step_positions(range: [f64; 2], step: f64) -> impl Iterator<Item = f64> {
    let span = range[1] - range[0];
    let count = if span.is_finite() && span >= 0.0 {
        (((span / step).floor() as usize) + 1).min(MAX_LINES)
    } else {
        0
    };
    (0..count).map(move |i| range[0] + i as f64 * step)
}
