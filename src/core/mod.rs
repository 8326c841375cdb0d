pub mod bounds;
pub mod data;
pub mod scale;
pub mod spline;
pub mod types;

pub use bounds::{Bounds, BoundsPatch};
pub use data::{ChartDataStore, DataChange, Series};
pub use scale::{LinearScale, ScaleProvider, ScaleRegistry, DEFAULT_SCALE};
pub use spline::Spline;
pub use types::{AreaRect, DataPoint, PixelRect, Viewport};
