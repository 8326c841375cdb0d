use std::f64::consts::TAU;

use crate::core::PixelRect;
use crate::elements::{series_color, surface_size_unit, Element, RenderContext, ScaleRef};
use crate::error::ChartResult;
use crate::render::DrawSurface;

/// Raw series points drawn as filled circles joined by line segments.
#[derive(Debug, Clone, Default)]
pub struct SeriesLine {
    scale: ScaleRef,
}

impl SeriesLine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scale(scale: ScaleRef) -> Self {
        Self { scale }
    }
}

impl Element for SeriesLine {
    fn render(
        &mut self,
        surface: &mut dyn DrawSurface,
        rect: PixelRect,
        ctx: &RenderContext<'_>,
    ) -> ChartResult<()> {
        let scale = self.scale.resolve(ctx.scales)?;
        let unit = surface_size_unit(surface);
        let circle_size = unit / 300.0;
        let line_size = unit / 1200.0;
        let bounds = ctx.data.bounds();

        surface.save();
        surface.set_line_width(line_size);
        for id in ctx.data.ids() {
            let Some(series) = ctx.data.values(id) else {
                continue;
            };
            let color = series_color(ctx.data, id);
            surface.set_stroke_color(color);
            surface.set_fill_color(color.with_alpha(0.5));

            let mut last: Option<(f64, f64)> = None;
            for point in series.points() {
                let coords = (
                    rect.x + rect.w * scale.scale_x(&bounds, point.x),
                    rect.y + rect.h * (1.0 - scale.scale_y(&bounds, point.y)),
                );

                if let Some(last) = last {
                    surface.begin_path();
                    surface.move_to(last.0, last.1);
                    surface.line_to(coords.0, coords.1);
                    surface.stroke();
                }

                surface.begin_path();
                surface.arc(coords.0, coords.1, circle_size, 0.0, TAU);
                surface.fill();

                last = Some(coords);
            }
        }
        surface.restore();
        Ok(())
    }
}
