use tracing::warn;

use crate::core::AreaRect;
use crate::elements::{Element, RenderContext};
use crate::render::DrawSurface;

/// Normalized rectangular viewport region owning an ordered element list.
///
/// Insertion order is the z-order; there is no remove/reorder API. A failing
/// element is skipped with a warning so the rest of the frame still draws.
pub struct Area {
    rect: AreaRect,
    elements: Vec<Box<dyn Element>>,
}

impl Area {
    #[must_use]
    pub fn new(rect: AreaRect) -> Self {
        Self {
            rect,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_element(mut self, element: impl Element + 'static) -> Self {
        self.elements.push(Box::new(element));
        self
    }

    #[must_use]
    pub fn rect(&self) -> AreaRect {
        self.rect
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub(crate) fn render(&mut self, surface: &mut dyn DrawSurface, ctx: &RenderContext<'_>) {
        let rect = self.rect.to_pixels(surface.viewport());
        for element in &mut self.elements {
            if let Err(error) = element.render(surface, rect, ctx) {
                warn!(error = %error, "element draw skipped for this frame");
            }
        }
    }
}
