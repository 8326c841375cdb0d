use crate::api::area::Area;
use crate::api::chart::{Chart, ChartConfig};
use crate::api::scheduler::FrameScheduler;
use crate::core::AreaRect;
use crate::elements::{
    Axis, AxisNumbers, AxisOrientation, Grid, SeriesLine, SmoothedLine, Targets, TrendLine,
};

/// Options for the standard linear-chart layout.
pub struct LinearChartOptions {
    pub config: ChartConfig,
    pub x_stepsize: f64,
    pub y_stepsize: f64,
    pub x_formatter: Option<Box<dyn Fn(f64) -> String>>,
    pub y_formatter: Option<Box<dyn Fn(f64) -> String>>,
    /// Adds a spline-smoothed trend to the plot area.
    pub smoothed: bool,
}

impl Default for LinearChartOptions {
    fn default() -> Self {
        Self {
            config: ChartConfig::default(),
            x_stepsize: 1.0,
            y_stepsize: 1.0,
            x_formatter: None,
            y_formatter: None,
            smoothed: false,
        }
    }
}

/// Builds the standard linear chart: a plot area (grid, targets, trend,
/// series points), an x-axis strip, and a y-axis strip, all on the default
/// scale.
#[must_use]
pub fn linear_chart(frames: Box<dyn FrameScheduler>, options: LinearChartOptions) -> Chart {
    let mut chart = Chart::with_config(frames, options.config);

    let mut plot = Area::new(AreaRect::new(0.05, 0.05, 0.925, 0.85))
        .with_element(Grid::new())
        .with_element(Targets::new())
        .with_element(TrendLine::new());
    if options.smoothed {
        plot = plot.with_element(SmoothedLine::new());
    }
    chart.add_area(plot.with_element(SeriesLine::new()));

    let mut x_numbers = AxisNumbers::new(AxisOrientation::X).with_stepsize(options.x_stepsize);
    if let Some(formatter) = options.x_formatter {
        x_numbers = x_numbers.with_formatter(formatter);
    }
    chart.add_area(
        Area::new(AreaRect::new(0.9, 0.05, 0.925, 0.1))
            .with_element(Axis::new(AxisOrientation::X))
            .with_element(x_numbers),
    );

    let mut y_numbers = AxisNumbers::new(AxisOrientation::Y).with_stepsize(options.y_stepsize);
    if let Some(formatter) = options.y_formatter {
        y_numbers = y_numbers.with_formatter(formatter);
    }
    chart.add_area(
        Area::new(AreaRect::new(0.05, 0.0, 0.05, 0.85))
            .with_element(Axis::new(AxisOrientation::Y))
            .with_element(y_numbers),
    );

    chart
}
