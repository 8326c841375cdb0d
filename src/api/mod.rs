mod area;
mod chart;
mod linear;
mod resize;
mod scheduler;

pub use area::Area;
pub use chart::{Chart, ChartConfig, DataMut};
pub use linear::{linear_chart, LinearChartOptions};
pub use resize::{IntervalTimer, ManualTimer};
pub use scheduler::{FrameRequest, FrameScheduler, ManualFrameScheduler};
