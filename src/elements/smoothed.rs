use indexmap::IndexMap;
use tracing::warn;

use crate::core::spline::DEFAULT_FACTOR;
use crate::core::{ChartDataStore, DataPoint, PixelRect, Spline};
use crate::elements::{series_color, surface_size_unit, Element, RenderContext, ScaleRef};
use crate::error::ChartResult;
use crate::render::{Color, DrawSurface};

const DEFAULT_STEPS: usize = 7;

/// Spline-smoothed trend per series.
///
/// Points are reduced to windowed averages (the first sample pinned to the
/// domain start, the last to the domain end) and fed into a per-series
/// [`Spline`], rebuilt whenever the store revision moves. A series whose
/// spline construction fails is skipped with a warning; the others still
/// draw.
pub struct SmoothedLine {
    scale: ScaleRef,
    steps: usize,
    factor: u32,
    color: Option<Color>,
    splines: IndexMap<String, Spline>,
    built_revision: Option<u64>,
}

impl Default for SmoothedLine {
    fn default() -> Self {
        Self {
            scale: ScaleRef::default(),
            steps: DEFAULT_STEPS,
            factor: DEFAULT_FACTOR,
            color: None,
            splines: IndexMap::new(),
            built_revision: None,
        }
    }
}

impl SmoothedLine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scale(mut self, scale: ScaleRef) -> Self {
        self.scale = scale;
        self
    }

    /// Averaging window size; at least 1.
    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps.max(1);
        self
    }

    #[must_use]
    pub fn with_factor(mut self, factor: u32) -> Self {
        self.factor = factor;
        self
    }

    /// Fixed draw color instead of per-series colors.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    fn rebuild(&mut self, data: &ChartDataStore) {
        self.splines.clear();
        for id in data.ids() {
            let Some(series) = data.values(id) else {
                continue;
            };
            let averaged = window_averages(series.points(), self.steps);
            match Spline::new(averaged, self.factor) {
                Ok(spline) => {
                    self.splines.insert(id.to_owned(), spline);
                }
                Err(error) => {
                    warn!(id, error = %error, "skipping smoothed line for series");
                }
            }
        }
    }
}

impl Element for SmoothedLine {
    fn render(
        &mut self,
        surface: &mut dyn DrawSurface,
        rect: PixelRect,
        ctx: &RenderContext<'_>,
    ) -> ChartResult<()> {
        let scale = self.scale.resolve(ctx.scales)?;
        if self.built_revision != Some(ctx.data.revision()) {
            self.rebuild(ctx.data);
            self.built_revision = Some(ctx.data.revision());
        }

        let line_size = surface_size_unit(surface) / 1200.0;
        let bounds = ctx.data.bounds();

        surface.save();
        surface.set_line_width(line_size);
        for (id, spline) in &self.splines {
            surface.set_stroke_color(
                self.color
                    .unwrap_or_else(|| series_color(ctx.data, id)),
            );

            let mut last: Option<(f64, f64)> = None;
            for entry in spline.entries() {
                let coords = (
                    rect.x + rect.w * scale.scale_x(&bounds, entry.x),
                    rect.y + rect.h * (1.0 - scale.scale_y(&bounds, entry.y)),
                );
                if let Some(last) = last {
                    surface.begin_path();
                    surface.move_to(last.0, last.1);
                    surface.line_to(coords.0, coords.1);
                    surface.stroke();
                }
                last = Some(coords);
            }
        }
        surface.restore();
        Ok(())
    }
}

/// Collapses runs of `steps` points into their mean, pinning the first output
/// x to the series start and the last to the series end.
fn window_averages(points: &[DataPoint], steps: usize) -> Vec<DataPoint> {
    let mut averages = Vec::new();
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut filled = 0_usize;

    for (index, point) in points.iter().enumerate() {
        sum_x += point.x;
        sum_y += point.y;
        filled += 1;
        let is_last = index == points.len() - 1;
        if filled < steps && !is_last {
            continue;
        }

        let window = filled as f64;
        let x = if averages.is_empty() {
            points[0].x
        } else if is_last {
            point.x
        } else {
            sum_x / window
        };
        averages.push(DataPoint::new(x, sum_y / window));

        sum_x = 0.0;
        sum_y = 0.0;
        filled = 0;
    }
    averages
}
