use crate::core::PixelRect;
use crate::elements::{Element, RenderContext};
use crate::error::ChartResult;
use crate::render::{Color, DrawSurface};

/// Fills the area rectangle with a solid color.
#[derive(Debug, Clone, Copy)]
pub struct Background {
    color: Color,
}

impl Background {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Element for Background {
    fn render(
        &mut self,
        surface: &mut dyn DrawSurface,
        rect: PixelRect,
        _ctx: &RenderContext<'_>,
    ) -> ChartResult<()> {
        surface.save();
        surface.set_fill_color(self.color);
        surface.begin_path();
        surface.rect(rect.x, rect.y, rect.w, rect.h);
        surface.fill();
        surface.restore();
        Ok(())
    }
}
