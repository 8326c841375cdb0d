use crate::core::PixelRect;
use crate::elements::{series_color, Element, RenderContext, ScaleRef};
use crate::error::ChartResult;
use crate::render::DrawSurface;

/// Horizontal marker per series carrying a numeric `"target"` info entry;
/// series without one are skipped.
#[derive(Debug, Clone, Default)]
pub struct Targets {
    scale: ScaleRef,
}

impl Targets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scale(scale: ScaleRef) -> Self {
        Self { scale }
    }
}

impl Element for Targets {
    fn render(
        &mut self,
        surface: &mut dyn DrawSurface,
        rect: PixelRect,
        ctx: &RenderContext<'_>,
    ) -> ChartResult<()> {
        let scale = self.scale.resolve(ctx.scales)?;
        let bounds = ctx.data.bounds();

        surface.save();
        for id in ctx.data.ids() {
            let Some(target) = ctx.data.info(id, "target").and_then(|value| value.as_f64())
            else {
                continue;
            };

            let line_y = rect.y + rect.h * (1.0 - scale.scale_y(&bounds, target));
            surface.set_stroke_color(series_color(ctx.data, id).with_alpha(0.75));
            surface.begin_path();
            surface.move_to(rect.x, line_y);
            surface.line_to(rect.x + rect.w, line_y);
            surface.stroke();
        }
        surface.restore();
        Ok(())
    }
}
