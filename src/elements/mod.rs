mod axis;
mod axis_numbers;
mod background;
mod grid;
mod series_line;
mod smoothed;
mod targets;
mod trend;

pub use axis::{Axis, AxisOrientation, AxisPosition};
pub use axis_numbers::AxisNumbers;
pub use background::Background;
pub use grid::Grid;
pub use series_line::SeriesLine;
pub use smoothed::SmoothedLine;
pub use targets::Targets;
pub use trend::TrendLine;

use serde_json::Value;

use crate::core::{ChartDataStore, PixelRect, ScaleProvider, ScaleRegistry, DEFAULT_SCALE};
use crate::error::{ChartError, ChartResult};
use crate::render::{series_fallback_color, Color, DrawSurface};

/// Read-only store and scale access lent to elements during one render call.
pub struct RenderContext<'a> {
    pub data: &'a ChartDataStore,
    pub scales: &'a ScaleRegistry,
}

/// Renderable unit drawn within an area's pixel rectangle.
///
/// Elements are free to draw nothing, draw unconditionally, or skip drawing
/// based on per-series info. A returned error skips this element for the
/// frame; it never aborts the render pass.
pub trait Element {
    fn render(
        &mut self,
        surface: &mut dyn DrawSurface,
        rect: PixelRect,
        ctx: &RenderContext<'_>,
    ) -> ChartResult<()>;
}

/// Composed scale-lookup capability for elements that convert domain values
/// to pixels.
#[derive(Debug, Clone)]
pub struct ScaleRef {
    name: String,
}

impl Default for ScaleRef {
    fn default() -> Self {
        Self {
            name: DEFAULT_SCALE.to_owned(),
        }
    }
}

impl ScaleRef {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    pub fn resolve<'a>(&self, scales: &'a ScaleRegistry) -> ChartResult<&'a dyn ScaleProvider> {
        scales
            .get(&self.name)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown scale `{}`", self.name)))
    }
}

/// Resolves the series draw color: the `"color"` info entry as an
/// `[r, g, b]` 8-bit triple, else the deterministic fallback palette.
#[must_use]
pub(crate) fn series_color(data: &ChartDataStore, id: &str) -> Color {
    data.info(id, "color")
        .and_then(parse_rgb8)
        .unwrap_or_else(|| series_fallback_color(id))
}

fn parse_rgb8(value: &Value) -> Option<Color> {
    let channels = value.as_array()?;
    if channels.len() != 3 {
        return None;
    }
    let mut rgb = [0_u8; 3];
    for (slot, channel) in rgb.iter_mut().zip(channels) {
        *slot = u8::try_from(channel.as_u64()?).ok()?;
    }
    Some(Color::from_rgb8(rgb[0], rgb[1], rgb[2]))
}

/// Shared size convention: stroke widths, markers, and fonts scale with the
/// sum of the surface dimensions.
pub(crate) fn surface_size_unit(surface: &dyn DrawSurface) -> f64 {
    f64::from(surface.width()) + f64::from(surface.height())
}
