use crate::core::PixelRect;
use crate::elements::{series_color, surface_size_unit, Element, RenderContext, ScaleRef};
use crate::error::ChartResult;
use crate::render::DrawSurface;

/// Dashed straight trend per series: the slope through the first and last
/// point, extended across the x bounds and clipped to the area rectangle.
///
/// Series with fewer than two points or a zero x-span are skipped.
#[derive(Debug, Clone, Default)]
pub struct TrendLine {
    scale: ScaleRef,
}

impl TrendLine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scale(scale: ScaleRef) -> Self {
        Self { scale }
    }
}

impl Element for TrendLine {
    fn render(
        &mut self,
        surface: &mut dyn DrawSurface,
        rect: PixelRect,
        ctx: &RenderContext<'_>,
    ) -> ChartResult<()> {
        let scale = self.scale.resolve(ctx.scales)?;
        let unit = surface_size_unit(surface);
        let dash_size = unit / 300.0;
        let line_size = unit / 1200.0;
        let bounds = ctx.data.bounds();

        surface.save();
        surface.set_line_width(line_size);
        surface.set_line_dash(&[dash_size, dash_size]);

        surface.begin_path();
        surface.rect(rect.x, rect.y, rect.w, rect.h);
        surface.clip();

        for id in ctx.data.ids() {
            let Some(series) = ctx.data.values(id) else {
                continue;
            };
            let points = series.points();
            let (Some(first), Some(last)) = (points.first(), points.last()) else {
                continue;
            };
            let x_span = last.x - first.x;
            if points.len() < 2 || x_span == 0.0 {
                continue;
            }

            surface.set_stroke_color(series_color(ctx.data, id).with_alpha(0.25));

            let slope = (last.y - first.y) / x_span;
            let extend = |x: f64| (x - first.x) * slope + first.y;

            let start = (
                rect.x + rect.w * scale.scale_x(&bounds, bounds.x[0]),
                rect.y + rect.h * (1.0 - scale.scale_y(&bounds, extend(bounds.x[0]))),
            );
            let end = (
                rect.x + rect.w * scale.scale_x(&bounds, bounds.x[1]),
                rect.y + rect.h * (1.0 - scale.scale_y(&bounds, extend(bounds.x[1]))),
            );

            surface.begin_path();
            surface.move_to(start.0, start.1);
            surface.line_to(end.0, end.1);
            surface.stroke();
        }
        surface.restore();
        Ok(())
    }
}
